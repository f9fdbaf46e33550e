// Liked songs endpoints
use super::{ApiClient, Result};
use crate::models::{LikeStatus, SavedTrack, Track, TrackPayload};
use reqwest::Method;

impl ApiClient {
    pub async fn liked_songs(&self) -> Result<Vec<SavedTrack>> {
        self.get_json("/api/likes").await
    }

    pub async fn like_track(&self, track: &Track) -> Result<()> {
        self.send_empty(Method::POST, "/api/likes", Some(&TrackPayload::from(track)))
            .await
    }

    pub async fn unlike_track(&self, track_id: &str) -> Result<()> {
        let path = format!("/api/likes/{}", urlencoding::encode(track_id));
        self.send_empty::<()>(Method::DELETE, &path, None).await
    }

    #[allow(dead_code)]
    pub async fn is_liked(&self, track_id: &str) -> Result<bool> {
        let path = format!("/api/likes/{}/check", urlencoding::encode(track_id));
        let status: LikeStatus = self.get_json(&path).await?;
        Ok(status.liked)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::authed_client_for;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_check_liked() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/likes/t1/check"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"liked": true})))
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        assert!(client.is_liked("t1").await.unwrap());
    }

    #[tokio::test]
    async fn test_unlike() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/likes/t1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        client.unlike_track("t1").await.unwrap();
    }
}
