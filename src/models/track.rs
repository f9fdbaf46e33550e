use serde::{Deserialize, Serialize};

/// A playable item as returned by the music search endpoints.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub duration: String, // Display string such as "3:45"
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, rename = "thumbnailHD")]
    pub thumbnail_hd: String,
}

impl Track {
    /// Best available artwork URL (HD first)
    pub fn artwork_url(&self) -> Option<&str> {
        [self.thumbnail_hd.as_str(), self.thumbnail.as_str()]
            .into_iter()
            .find(|url| !url.is_empty())
    }

    /// Duration in seconds parsed from the display string, if it parses
    pub fn duration_secs(&self) -> Option<u64> {
        crate::utils::formatting::parse_duration(&self.duration)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StreamInfo {
    pub url: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub bitrate: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub channel_id: String,
    pub subscriber_count: Option<String>,
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub upload_date: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, rename = "thumbnailHD")]
    pub thumbnail_hd: String,
    pub duration: Option<String>,
}

/// Which search endpoint to hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchType {
    #[default]
    Music,
    Video,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_from_search_json() {
        let json = r#"{
            "id": "dQw4w9WgXcQ",
            "title": "Never Gonna Give You Up",
            "artist": "Rick Astley",
            "duration": "3:33",
            "thumbnail": "https://img/default.jpg",
            "thumbnailHD": "https://img/hq.jpg"
        }"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, "dQw4w9WgXcQ");
        assert_eq!(track.artist, "Rick Astley");
        assert_eq!(track.artwork_url(), Some("https://img/hq.jpg"));
        assert_eq!(track.duration_secs(), Some(213));
    }

    #[test]
    fn test_track_missing_thumbnails() {
        let json = r#"{"id": "a", "title": "t"}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.artwork_url(), None);
        assert_eq!(track.duration_secs(), None);
    }

    #[test]
    fn test_video_details_optional_fields() {
        let json = r#"{
            "id": "v1",
            "title": "Live at Wembley",
            "channelName": "Band",
            "channelId": "c1",
            "viewCount": "1.2M",
            "thumbnail": "t",
            "thumbnailHD": "hd"
        }"#;
        let details: VideoDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.view_count.as_deref(), Some("1.2M"));
        assert!(details.like_count.is_none());
        assert!(details.description.is_none());
    }
}
