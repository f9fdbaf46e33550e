// Developer page endpoints: feedback forum and supporters
use super::{ApiClient, Result};
use crate::models::{Feedback, FeedbackKind, NewFeedback, Supporter};
use reqwest::Method;

impl ApiClient {
    pub async fn feedback(&self, kind: FeedbackKind) -> Result<Vec<Feedback>> {
        self.get_json_query("/api/feedback", &[("type", kind.as_str())])
            .await
    }

    pub async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<()> {
        self.send_empty(Method::POST, "/api/feedback", Some(feedback))
            .await?;
        log::info!("[Feedback] Submitted {} from {}", feedback.kind.as_str(), feedback.name);
        Ok(())
    }

    pub async fn supporters(&self) -> Result<Vec<Supporter>> {
        self.get_json("/api/supporters").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::client_for;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_feedback_by_kind() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/feedback"))
            .and(query_param("type", "suggestion"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "f1", "type": "suggestion", "name": "Ann", "message": "Dark mode", "createdAt": "2024-03-01T00:00:00Z"}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let items = client.feedback(FeedbackKind::Suggestion).await.unwrap();
        assert_eq!(items[0].message, "Dark mode");
    }

    #[tokio::test]
    async fn test_submit_feedback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/feedback"))
            .and(body_json(serde_json::json!({"type": "thankyou", "name": "Bo", "message": "Love it"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "f2"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .submit_feedback(&NewFeedback {
                kind: FeedbackKind::Thankyou,
                name: "Bo".into(),
                message: "Love it".into(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_supporters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/supporters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "s1", "name": "Cy", "amount": "₹500", "message": null}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let supporters = client.supporters().await.unwrap();
        assert_eq!(supporters[0].amount.as_deref(), Some("₹500"));
    }
}
