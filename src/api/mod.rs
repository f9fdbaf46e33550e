// SoulMate backend API client modules

pub mod auth;
pub mod error;
pub mod feedback;
pub mod friends;
pub mod history;
pub mod likes;
pub mod music;
pub mod playlists;
pub mod users;

pub use error::{ApiError, Result};

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Typed client for the SoulMate REST backend.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted, so a
/// copy can be moved into a worker thread for each request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url` (must start with http:// or https://).
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: crate::utils::http::client(),
            base_url: normalize_base_url(base_url)?,
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("[Api] {} {}", method, url);
        let req = self.http.request(method, url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response> {
        let response = req.send().await.map_err(ApiError::from_send)?;
        check_status(response).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(self.request(Method::GET, path)).await?;
        parse_json(response).await
    }

    pub(crate) async fn get_json_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .send(self.request(Method::GET, path).query(query))
            .await?;
        parse_json(response).await
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(method, path).json(body)).await?;
        parse_json(response).await
    }

    /// Send a request whose response body is ignored
    pub(crate) async fn send_empty<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let mut req = self.request(method, path);
        if let Some(body) = body {
            req = req.json(body);
        }
        self.send(req).await.map(|_| ())
    }
}

pub(crate) fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ApiError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }
    Ok(url.to_string())
}

/// Map non-success statuses to `ApiError`, pulling the message out of `{ "error": ... }` bodies
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status.as_u16() == 401 {
        return Err(ApiError::Unauthorized);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or(text);

    log::warn!("[Api] Request failed with {}: {}", status, message);
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::ApiClient;
    use wiremock::MockServer;

    pub async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&server.uri()).unwrap()
    }

    pub async fn authed_client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&server.uri())
            .unwrap()
            .with_token(Some("test-token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_url_validation() {
        assert!(ApiClient::new("https://example.com").is_ok());
        assert!(ApiClient::new("http://localhost:4000").is_ok());
        assert!(ApiClient::new("").is_err());
        assert!(ApiClient::new("localhost:4000").is_err());
        assert!(ApiClient::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = ApiClient::new("http://localhost:4000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:4000");
        assert_eq!(client.url("/api/likes"), "http://localhost:4000/api/likes");
    }

    #[tokio::test]
    async fn test_bearer_header_sent_when_token_present() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/likes"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_support::authed_client_for(&server).await;
        let likes = client.liked_songs().await.unwrap();
        assert!(likes.is_empty());
    }

    #[tokio::test]
    async fn test_error_body_message_extracted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/playlists"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"error": "database offline"})),
            )
            .mount(&server)
            .await;

        let client = test_support::authed_client_for(&server).await;
        match client.playlists().await {
            Err(ApiError::Server { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database offline");
            }
            other => panic!("Expected Server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unauthorized_mapped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = test_support::client_for(&server).await;
        assert!(matches!(client.me().await, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Port 9 (discard) is not listening in test environments
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let err = client.me().await.unwrap_err();
        assert!(matches!(err, ApiError::ServerUnreachable(_) | ApiError::Request(_)));
    }
}
