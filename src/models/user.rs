use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Approved,
    Rejected,
    #[default]
    #[serde(other)]
    Pending,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Approved => "approved",
            UserStatus::Rejected => "rejected",
            UserStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub status: UserStatus,
    pub created_at: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_approved(&self) -> bool {
        self.status == UserStatus::Approved
    }

    /// First letter of the display name, for the avatar badge
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatusResponse {
    pub status: UserStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PendingUser {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_roles_and_status() {
        let json = r#"{"id":"1","email":"a@b.c","name":"alice","role":"admin","status":"approved","createdAt":"2024-01-02T00:00:00Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
        assert!(user.is_approved());
        assert_eq!(user.initial(), "A");
    }

    #[test]
    fn test_unknown_role_and_status_fall_back() {
        let json = r#"{"id":"1","email":"a@b.c","name":"bob","role":"moderator","status":"suspended"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.status, UserStatus::Pending);
        assert!(user.created_at.is_none());
    }
}
