use super::Track;
use serde::{Deserialize, Serialize};

/// Row from `GET /api/history`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    #[serde(default)]
    pub track_id: String,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, rename = "thumbnailHD")]
    pub thumbnail_hd: Option<String>,
    #[serde(default)]
    pub duration: String,
    pub played_at: String,
}

impl HistoryEntry {
    pub fn to_track(&self) -> Track {
        Track {
            id: self.track_id.clone(),
            title: self.title.clone(),
            artist: self.artist.clone(),
            duration: self.duration.clone(),
            thumbnail: self.thumbnail.clone(),
            thumbnail_hd: self
                .thumbnail_hd
                .clone()
                .filter(|hd| !hd.is_empty())
                .unwrap_or_else(|| self.thumbnail.clone()),
        }
    }

    /// `playedAt` rendered in local time, or the raw value if it does not parse
    pub fn played_at_local(&self) -> String {
        crate::utils::formatting::format_local_datetime(&self.played_at)
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct LikeStatus {
    #[serde(alias = "isLiked")]
    pub liked: bool,
}
