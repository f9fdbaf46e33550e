// Listening history endpoints
use super::{ApiClient, Result};
use crate::models::{HistoryEntry, Track, TrackPayload};
use reqwest::Method;

impl ApiClient {
    pub async fn history(&self, limit: Option<usize>) -> Result<Vec<HistoryEntry>> {
        match limit {
            Some(limit) => {
                self.get_json_query("/api/history", &[("limit", limit)])
                    .await
            }
            None => self.get_json("/api/history").await,
        }
    }

    pub async fn add_to_history(&self, track: &Track) -> Result<()> {
        self.send_empty(Method::POST, "/api/history", Some(&TrackPayload::from(track)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::authed_client_for;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_history_limit_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/history"))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": "h1",
                    "trackId": "t1",
                    "title": "One",
                    "artist": "A",
                    "thumbnail": "x.jpg",
                    "duration": "3:00",
                    "playedAt": "2024-05-01T12:00:00Z"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let history = client.history(Some(100)).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].to_track().thumbnail_hd, "x.jpg");
    }
}
