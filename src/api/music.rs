// Music endpoints: search, stream resolution, video details, lyrics, downloads
use super::{ApiClient, ApiError, Result};
use crate::models::{LyricsResult, SearchType, StreamInfo, Track, VideoDetails};

impl ApiClient {
    /// Search tracks (or videos) by free-text query
    pub async fn search(&self, query: &str, search_type: SearchType) -> Result<Vec<Track>> {
        let path = match search_type {
            SearchType::Music => "/api/music/search",
            SearchType::Video => "/api/music/search/videos",
        };
        let tracks: Vec<Track> = self.get_json_query(path, &[("q", query)]).await?;
        log::info!(
            "[Search] {:?} search for '{}' returned {} results",
            search_type,
            query,
            tracks.len()
        );
        Ok(tracks)
    }

    /// Resolve a playable stream URL for a track
    pub async fn stream_info(&self, track_id: &str) -> Result<StreamInfo> {
        let path = format!("/api/music/stream/{}", urlencoding::encode(track_id));
        self.get_json(&path).await
    }

    /// Stream URLs may come back relative to the API host
    pub fn media_url(&self, url: &str) -> String {
        if url.starts_with('/') {
            self.url(url)
        } else {
            url.to_string()
        }
    }

    pub async fn video_details(&self, track_id: &str) -> Result<VideoDetails> {
        let path = format!("/api/music/details/{}", urlencoding::encode(track_id));
        self.get_json(&path).await
    }

    /// Look up lyrics by title and artist. A 404 means "no lyrics" and maps to `Ok(None)`.
    pub async fn lyrics(
        &self,
        track: &str,
        artist: &str,
        duration_secs: Option<u64>,
    ) -> Result<Option<LyricsResult>> {
        let mut params = vec![("track", track.to_string()), ("artist", artist.to_string())];
        if let Some(duration) = duration_secs.filter(|d| *d > 0) {
            params.push(("duration", duration.to_string()));
        }

        match self.get_json_query("/api/music/lyrics", &params).await {
            Ok(lyrics) => Ok(Some(lyrics)),
            Err(ApiError::Server { status: 404, .. }) => {
                log::debug!("[Lyrics] No lyrics for '{}' by '{}'", track, artist);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Direct download link for a track. Opened in the browser, never fetched here.
    pub fn download_url(&self, track: &Track) -> String {
        format!(
            "{}?title={}&artist={}",
            self.url(&format!(
                "/api/music/download/{}",
                urlencoding::encode(&track.id)
            )),
            urlencoding::encode(&track.title),
            urlencoding::encode(&track.artist)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::client_for;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn track_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": "Title",
            "artist": "Artist",
            "duration": "4:01",
            "thumbnail": "t.jpg",
            "thumbnailHD": "hd.jpg"
        })
    }

    #[tokio::test]
    async fn test_music_search_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/music/search"))
            .and(query_param("q", "daft punk & friends"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([track_json("a")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let tracks = client
            .search("daft punk & friends", SearchType::Music)
            .await
            .unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, "a");
    }

    #[tokio::test]
    async fn test_video_search_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/music/search/videos"))
            .and(query_param("q", "live"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let tracks = client.search("live", SearchType::Video).await.unwrap();
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_search_failure_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/music/search"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.search("x", SearchType::Music).await.unwrap_err();
        assert_eq!(err.status(), Some(502));
    }

    #[tokio::test]
    async fn test_stream_info() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/music/stream/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "url": "https://cdn.example/audio.m4a",
                "mimeType": "audio/mp4",
                "bitrate": 128000
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let info = client.stream_info("abc123").await.unwrap();
        assert_eq!(info.url, "https://cdn.example/audio.m4a");
        assert_eq!(info.mime_type, "audio/mp4");
    }

    #[tokio::test]
    async fn test_lyrics_not_found_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/music/lyrics"))
            .and(query_param("track", "Song"))
            .and(query_param("artist", "Band"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert!(client.lyrics("Song", "Band", None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lyrics_with_duration() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/music/lyrics"))
            .and(query_param("duration", "215"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 1,
                "trackName": "Song",
                "artistName": "Band",
                "albumName": "LP",
                "duration": 215,
                "instrumental": false,
                "plainLyrics": "hello",
                "syncedLyrics": [{"time": 0.5, "text": "hello"}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let lyrics = client.lyrics("Song", "Band", Some(215)).await.unwrap().unwrap();
        assert_eq!(lyrics.synced_lines().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_lyrics_server_error_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/music/lyrics"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert!(client.lyrics("Song", "Band", None).await.is_err());
    }

    #[test]
    fn test_download_url_encoding() {
        let client = ApiClient::new("http://localhost:4000").unwrap();
        let track = Track {
            id: "abc".into(),
            title: "Hello World".into(),
            artist: "A&B".into(),
            duration: "1:00".into(),
            thumbnail: String::new(),
            thumbnail_hd: String::new(),
        };
        assert_eq!(
            client.download_url(&track),
            "http://localhost:4000/api/music/download/abc?title=Hello%20World&artist=A%26B"
        );
    }

    #[test]
    fn test_media_url_resolves_relative_paths() {
        let client = ApiClient::new("http://localhost:4000").unwrap();
        assert_eq!(
            client.media_url("/api/music/proxy/abc"),
            "http://localhost:4000/api/music/proxy/abc"
        );
        assert_eq!(
            client.media_url("https://cdn.example.com/a.m4a"),
            "https://cdn.example.com/a.m4a"
        );
    }
}
