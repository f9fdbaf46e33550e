// Auth endpoints
use super::{ApiClient, ApiError, Result};
use crate::models::user::{LoginRequest, RegisterRequest};
use crate::models::{AuthResponse, StatusResponse, User};
use reqwest::Method;

impl ApiClient {
    /// Create an account. The account starts out pending admin approval.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<()> {
        let body = RegisterRequest {
            email,
            password,
            name,
        };
        self.send_empty(Method::POST, "/api/auth/register", Some(&body))
            .await?;
        log::info!("[Auth] Registered {}", email);
        Ok(())
    }

    /// Log in and receive a bearer token.
    ///
    /// Pending and rejected accounts are reported as their own error variants so
    /// the UI can route to the right screen.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(ApiError::from_send)?;

        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            let auth: AuthResponse =
                serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))?;
            log::info!("[Auth] Login successful for {}", auth.user.email);
            return Ok(auth);
        }

        let body = serde_json::from_str::<serde_json::Value>(&text).unwrap_or_default();
        match body.get("status").and_then(|s| s.as_str()) {
            Some("pending") => Err(ApiError::AccountPending),
            Some("rejected") => Err(ApiError::AccountRejected),
            _ => {
                let message = body
                    .get("error")
                    .and_then(|e| e.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| "Login failed. Please check your credentials.".to_string());
                log::warn!("[Auth] Login failed ({}): {}", status, message);
                Err(ApiError::Server {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// Current user for the stored token
    pub async fn me(&self) -> Result<User> {
        self.get_json("/api/auth/me").await
    }

    /// Approval status for an email (used by the pending screen)
    pub async fn check_status(&self, email: &str) -> Result<StatusResponse> {
        let path = format!("/api/auth/status/{}", urlencoding::encode(email));
        self.get_json(&path).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::client_for;
    use crate::api::ApiError;
    use crate::models::UserStatus;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn user_json(status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "u1",
            "email": "ann@example.com",
            "name": "Ann",
            "role": "user",
            "status": status
        })
    }

    #[tokio::test]
    async fn test_login_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(serde_json::json!({"email": "ann@example.com", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "jwt-abc",
                "user": user_json("approved")
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let auth = client.login("ann@example.com", "pw").await.unwrap();
        assert_eq!(auth.token, "jwt-abc");
        assert!(auth.user.is_approved());
    }

    #[tokio::test]
    async fn test_login_pending_account() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": "Account pending approval",
                "status": "pending"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.login("ann@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, ApiError::AccountPending));
    }

    #[tokio::test]
    async fn test_login_rejected_account() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "status": "rejected"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.login("ann@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, ApiError::AccountRejected));
    }

    #[tokio::test]
    async fn test_login_bad_credentials_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "Invalid credentials"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.login("ann@example.com", "nope").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_register_posts_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .and(body_json(serde_json::json!({
                "email": "ann@example.com",
                "password": "pw",
                "name": "Ann"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"message": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.register("ann@example.com", "pw", "Ann").await.unwrap();
    }

    #[tokio::test]
    async fn test_check_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/status/ann%40example.com"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "approved"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let status = client.check_status("ann@example.com").await.unwrap();
        assert_eq!(status.status, UserStatus::Approved);
    }
}
