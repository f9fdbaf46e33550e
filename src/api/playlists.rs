// Playlist API endpoints
use super::{ApiClient, Result};
use crate::models::{Playlist, PlaylistDetail, PlaylistInput, SavedTrack, Track, TrackPayload};
use reqwest::Method;

impl ApiClient {
    /// Playlists owned by the current user
    pub async fn playlists(&self) -> Result<Vec<Playlist>> {
        let playlists: Vec<Playlist> = self.get_json("/api/playlists").await?;
        log::debug!("[Playlists] Loaded {} playlists", playlists.len());
        Ok(playlists)
    }

    /// Playlist with its tracks
    #[allow(dead_code)]
    pub async fn playlist(&self, playlist_id: &str) -> Result<PlaylistDetail> {
        let path = format!("/api/playlists/{}", urlencoding::encode(playlist_id));
        let detail: PlaylistDetail = self.get_json(&path).await?;
        log::debug!(
            "[Playlists] Playlist {} has {} tracks",
            playlist_id,
            detail.tracks.len()
        );
        Ok(detail)
    }

    pub async fn create_playlist(&self, name: &str, description: Option<&str>) -> Result<Playlist> {
        let input = PlaylistInput {
            name: Some(name.to_string()),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            is_public: None,
        };
        let playlist: Playlist = self
            .send_json(Method::POST, "/api/playlists", &input)
            .await?;
        log::info!("[Playlists] Created playlist '{}' ({})", playlist.name, playlist.id);
        Ok(playlist)
    }

    pub async fn update_playlist(&self, playlist_id: &str, input: &PlaylistInput) -> Result<Playlist> {
        let path = format!("/api/playlists/{}", urlencoding::encode(playlist_id));
        self.send_json(Method::PUT, &path, input).await
    }

    pub async fn delete_playlist(&self, playlist_id: &str) -> Result<()> {
        let path = format!("/api/playlists/{}", urlencoding::encode(playlist_id));
        self.send_empty::<()>(Method::DELETE, &path, None).await?;
        log::info!("[Playlists] Deleted playlist {}", playlist_id);
        Ok(())
    }

    pub async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<SavedTrack>> {
        let path = format!("/api/playlists/{}/tracks", urlencoding::encode(playlist_id));
        self.get_json(&path).await
    }

    pub async fn add_track_to_playlist(&self, playlist_id: &str, track: &Track) -> Result<()> {
        let path = format!("/api/playlists/{}/tracks", urlencoding::encode(playlist_id));
        self.send_empty(Method::POST, &path, Some(&TrackPayload::from(track)))
            .await?;
        log::info!("[Playlists] Added '{}' to playlist {}", track.title, playlist_id);
        Ok(())
    }

    pub async fn remove_track_from_playlist(&self, playlist_id: &str, track_id: &str) -> Result<()> {
        let path = format!(
            "/api/playlists/{}/tracks/{}",
            urlencoding::encode(playlist_id),
            urlencoding::encode(track_id)
        );
        self.send_empty::<()>(Method::DELETE, &path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::authed_client_for;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_playlist_drops_blank_description() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/playlists"))
            .and(body_json(serde_json::json!({"name": "Focus"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "p9",
                "name": "Focus",
                "description": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let playlist = client.create_playlist("Focus", Some("   ")).await.unwrap();
        assert_eq!(playlist.id, "p9");
    }

    #[tokio::test]
    async fn test_add_track_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/playlists/p1/tracks"))
            .and(body_json(serde_json::json!({
                "trackId": "t1",
                "title": "One",
                "artist": "Band",
                "thumbnail": "s.jpg",
                "thumbnailHD": "l.jpg",
                "duration": "2:10"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "row"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let track = Track {
            id: "t1".into(),
            title: "One".into(),
            artist: "Band".into(),
            duration: "2:10".into(),
            thumbnail: "s.jpg".into(),
            thumbnail_hd: "l.jpg".into(),
        };
        client.add_track_to_playlist("p1", &track).await.unwrap();
    }

    #[tokio::test]
    async fn test_remove_and_delete() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/playlists/p1/tracks/t1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/playlists/p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        client.remove_track_from_playlist("p1", "t1").await.unwrap();
        client.delete_playlist("p1").await.unwrap();
    }

    #[tokio::test]
    async fn test_update_playlist() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/playlists/p1"))
            .and(body_json(serde_json::json!({"name": "Renamed", "description": ""})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "p1",
                "name": "Renamed",
                "description": ""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let input = PlaylistInput {
            name: Some("Renamed".into()),
            description: Some(String::new()),
            is_public: None,
        };
        let playlist = client.update_playlist("p1", &input).await.unwrap();
        assert_eq!(playlist.name, "Renamed");
    }

    #[tokio::test]
    async fn test_playlist_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/playlists/p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "p1",
                "name": "Mix",
                "tracks": [
                    {"id": "r1", "trackId": "t1", "title": "One", "artist": "A", "thumbnail": "", "duration": "1:00"},
                    {"id": "r2", "trackId": "t2", "title": "Two", "artist": "B", "thumbnail": "", "duration": "2:00"}
                ]
            })))
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let detail = client.playlist("p1").await.unwrap();
        assert_eq!(detail.tracks.len(), 2);
        assert_eq!(detail.tracks[1].track_id, "t2");
    }
}
