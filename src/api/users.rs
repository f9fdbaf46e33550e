// User management endpoints (admin approval, user search)
use super::{ApiClient, Result};
use crate::models::{Friend, PendingUser};
use reqwest::Method;

impl ApiClient {
    /// Accounts waiting for approval. Admin only; the server enforces it.
    pub async fn pending_users(&self) -> Result<Vec<PendingUser>> {
        self.get_json("/api/users/pending").await
    }

    pub async fn approve_user(&self, user_id: &str) -> Result<()> {
        let path = format!("/api/users/{}/approve", urlencoding::encode(user_id));
        self.send_empty::<()>(Method::PUT, &path, None).await?;
        log::info!("[Admin] Approved user {}", user_id);
        Ok(())
    }

    pub async fn reject_user(&self, user_id: &str) -> Result<()> {
        let path = format!("/api/users/{}/reject", urlencoding::encode(user_id));
        self.send_empty::<()>(Method::PUT, &path, None).await?;
        log::info!("[Admin] Rejected user {}", user_id);
        Ok(())
    }

    /// Find users by name or email
    pub async fn search_users(&self, query: &str) -> Result<Vec<Friend>> {
        let path = format!("/api/users/search/{}", urlencoding::encode(query));
        self.get_json(&path).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::authed_client_for;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_pending_and_approve() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/pending"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "u7", "email": "new@x.io", "name": "New", "createdAt": "2024-02-02T10:00:00Z"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/users/u7/approve"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let pending = client.pending_users().await.unwrap();
        assert_eq!(pending[0].email, "new@x.io");
        client.approve_user("u7").await.unwrap();
    }

    #[tokio::test]
    async fn test_forbidden_for_non_admin() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/users/u7/reject"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(serde_json::json!({"error": "Admin only"})),
            )
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let err = client.reject_user("u7").await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "Admin only");
    }

    #[tokio::test]
    async fn test_search_users_encodes_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/search/jo%20doe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "u1", "name": "Jo Doe", "email": "jo@x.io"}
            ])))
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let users = client.search_users("jo doe").await.unwrap();
        assert_eq!(users[0].name, "Jo Doe");
    }
}
