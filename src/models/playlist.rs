use super::Track;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_public: Option<serde_json::Value>, // Backend sends either a bool or "true"/"false"
    #[serde(default, rename = "_count")]
    pub count: Option<PlaylistCount>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlaylistCount {
    #[serde(default)]
    pub tracks: u32,
}

impl Playlist {
    pub fn track_count(&self) -> Option<u32> {
        self.count.as_ref().map(|c| c.tracks)
    }
}

/// Playlist with its track rows, from `GET /api/playlists/{id}`
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDetail {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tracks: Vec<SavedTrack>,
}

/// A track row stored by the backend (playlist entry, liked song).
///
/// `id` is the row id; `track_id` is the id of the underlying track.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedTrack {
    #[serde(default)]
    pub id: String,
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
}

impl SavedTrack {
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
}

/// Body for create/update requests; absent fields are left untouched by the server
#[derive(Debug, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<String>,
}

/// Track payload the backend expects when saving (likes, playlists, history)
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TrackPayload {
    pub track_id: String,
    pub title: String,
    pub artist: String,
    pub thumbnail: String,
    #[serde(rename = "thumbnailHD")]
    pub thumbnail_hd: String,
    pub duration: String,
}

impl From<&Track> for TrackPayload {
    fn from(track: &Track) -> Self {
        Self {
            track_id: track.id.clone(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            thumbnail: track.thumbnail.clone(),
            thumbnail_hd: track.thumbnail_hd.clone(),
            duration: track.duration.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_track_hd_falls_back_to_thumbnail() {
        let json = r#"{"id":"row1","trackId":"abc","title":"T","artist":"A","thumbnail":"thumb.jpg","duration":"2:00"}"#;
        let saved: SavedTrack = serde_json::from_str(json).unwrap();
        let track = saved.to_track();
        assert_eq!(track.id, "abc");
        assert_eq!(track.thumbnail_hd, "thumb.jpg");
    }

    #[test]
    fn test_playlist_detail_with_tracks() {
        let json = r#"{
            "id": "p1",
            "name": "Road trip",
            "description": null,
            "tracks": [
                {"id":"r1","trackId":"t1","title":"One","artist":"X","thumbnail":"","thumbnailHD":"hd","duration":"1:00"}
            ]
        }"#;
        let detail: PlaylistDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.tracks.len(), 1);
        assert_eq!(detail.tracks[0].to_track().thumbnail_hd, "hd");
    }

    #[test]
    fn test_playlist_track_count() {
        let json = r#"{"id":"p1","name":"n","_count":{"tracks":12}}"#;
        let playlist: Playlist = serde_json::from_str(json).unwrap();
        assert_eq!(playlist.track_count(), Some(12));
    }

    #[test]
    fn test_playlist_input_skips_empty_fields() {
        let input = PlaylistInput {
            name: Some("Chill".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Chill"}));
    }
}
