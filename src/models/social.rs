use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Friend {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FriendRequest {
    pub id: String,
    pub sender: Friend,
    pub receiver: Option<Friend>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct FriendRequests {
    #[serde(default)]
    pub received: Vec<FriendRequest>,
    #[serde(default)]
    pub sent: Vec<FriendRequest>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FriendRequestBody<'a> {
    pub receiver_id: &'a str,
}

/// Which forum list a feedback entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Suggestion,
    Thankyou,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Suggestion => "suggestion",
            FeedbackKind::Thankyou => "thankyou",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub name: String,
    pub message: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct NewFeedback {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub name: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Supporter {
    pub id: String,
    pub name: String,
    pub amount: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friend_requests_shape() {
        let json = r#"{
            "received": [{"id":"r1","sender":{"id":"u2","name":"Bo","email":"bo@x.io"}}],
            "sent": []
        }"#;
        let requests: FriendRequests = serde_json::from_str(json).unwrap();
        assert_eq!(requests.received[0].sender.name, "Bo");
        assert!(requests.received[0].receiver.is_none());
        assert!(requests.sent.is_empty());
    }

    #[test]
    fn test_feedback_kind_wire_names() {
        let body = NewFeedback {
            kind: FeedbackKind::Thankyou,
            name: "Ann".into(),
            message: "thanks!".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "thankyou");
    }
}
