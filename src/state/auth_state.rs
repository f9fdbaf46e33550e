use crate::models::User;
use crate::services::{route_for, Route};

/// Session plus the landing and pending screen forms
#[derive(Default)]
pub struct AuthState {
    // Session
    pub user: Option<User>,
    pub restoring: bool, // Stored token is being checked against /me

    // Landing Form
    pub register_mode: bool,
    pub email: String,
    pub password: String,
    pub name: String,
    pub submitting: bool,
    pub login_error: Option<String>,
    pub notice: Option<String>, // e.g. "registration submitted"

    // Pending Screen (login answered "pending" without a user)
    pub awaiting_approval: bool,
    pub pending_email: String,
    pub pending_name: String,
    pub checking_status: bool,
    pub status_message: Option<String>,
}

impl AuthState {
    pub fn route(&self) -> Route {
        match route_for(self.restoring, self.user.as_ref()) {
            Route::Login { .. } if self.awaiting_approval => Route::Pending,
            Route::Login { notice: None } => Route::Login {
                notice: self.notice.clone(),
            },
            route => route,
        }
    }

    /// Remember who is waiting for approval and leave the form
    pub fn enter_pending(&mut self, email: &str, name: &str) {
        self.awaiting_approval = true;
        self.pending_email = email.to_string();
        self.pending_name = name.to_string();
        self.status_message = None;
        self.password.clear();
    }

    /// Drop the session and return to the landing form, keeping the email
    pub fn clear_session(&mut self) {
        let email = std::mem::take(&mut self.email);
        *self = Self {
            email,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserRole, UserStatus};

    fn user(status: UserStatus) -> User {
        User {
            id: "u1".into(),
            email: "ann@example.com".into(),
            name: "Ann".into(),
            role: UserRole::User,
            status,
            created_at: None,
        }
    }

    #[test]
    fn test_route_pending_after_login_attempt() {
        let mut auth = AuthState::default();
        assert_eq!(auth.route(), Route::Login { notice: None });
        auth.enter_pending("ann@example.com", "");
        assert_eq!(auth.route(), Route::Pending);
    }

    #[test]
    fn test_route_follows_user_status() {
        let mut auth = AuthState {
            restoring: true,
            ..AuthState::default()
        };
        assert_eq!(auth.route(), Route::Splash);

        auth.restoring = false;
        auth.user = Some(user(UserStatus::Approved));
        assert_eq!(auth.route(), Route::Main);

        auth.user = Some(user(UserStatus::Pending));
        assert_eq!(auth.route(), Route::Pending);
    }

    #[test]
    fn test_notice_shown_on_login() {
        let auth = AuthState {
            notice: Some("Registration submitted".into()),
            ..AuthState::default()
        };
        assert_eq!(
            auth.route(),
            Route::Login {
                notice: Some("Registration submitted".into())
            }
        );
    }

    #[test]
    fn test_clear_session_keeps_email() {
        let mut auth = AuthState {
            user: Some(user(UserStatus::Approved)),
            email: "ann@example.com".into(),
            password: "secret".into(),
            awaiting_approval: true,
            ..AuthState::default()
        };
        auth.clear_session();
        assert!(auth.user.is_none());
        assert!(auth.password.is_empty());
        assert!(!auth.awaiting_approval);
        assert_eq!(auth.email, "ann@example.com");
    }
}
