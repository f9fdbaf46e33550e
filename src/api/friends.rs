// Friends endpoints
use super::{ApiClient, Result};
use crate::models::social::FriendRequestBody;
use crate::models::{Friend, FriendRequests};
use reqwest::Method;

impl ApiClient {
    pub async fn friends(&self) -> Result<Vec<Friend>> {
        self.get_json("/api/friends").await
    }

    pub async fn friend_requests(&self) -> Result<FriendRequests> {
        self.get_json("/api/friends/requests").await
    }

    pub async fn send_friend_request(&self, receiver_id: &str) -> Result<()> {
        let body = FriendRequestBody { receiver_id };
        self.send_empty(Method::POST, "/api/friends/request", Some(&body))
            .await
    }

    pub async fn accept_friend_request(&self, request_id: &str) -> Result<()> {
        let path = format!(
            "/api/friends/request/{}/accept",
            urlencoding::encode(request_id)
        );
        self.send_empty::<()>(Method::PUT, &path, None).await
    }

    pub async fn reject_friend_request(&self, request_id: &str) -> Result<()> {
        let path = format!(
            "/api/friends/request/{}/reject",
            urlencoding::encode(request_id)
        );
        self.send_empty::<()>(Method::PUT, &path, None).await
    }

    pub async fn remove_friend(&self, friend_id: &str) -> Result<()> {
        let path = format!("/api/friends/{}", urlencoding::encode(friend_id));
        self.send_empty::<()>(Method::DELETE, &path, None).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::authed_client_for;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_request_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/friends/request"))
            .and(body_json(serde_json::json!({"receiverId": "u2"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "req1"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        client.send_friend_request("u2").await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_request_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/friends/request"))
            .respond_with(ResponseTemplate::new(400).set_body_json(
                serde_json::json!({"error": "Friend request already sent"}),
            ))
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let err = client.send_friend_request("u2").await.unwrap_err();
        assert_eq!(err.to_string(), "Friend request already sent");
    }

    #[tokio::test]
    async fn test_accept_and_remove() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/friends/request/req1/accept"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/friends/u2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        client.accept_friend_request("req1").await.unwrap();
        client.remove_friend("u2").await.unwrap();
    }
}
