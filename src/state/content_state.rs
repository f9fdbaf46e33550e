use crate::constants::{FEEDBACK_MESSAGE_MAX, FEEDBACK_NAME_MAX};
use crate::models::{
    Feedback, FeedbackKind, Friend, FriendRequests, HistoryEntry, NewFeedback, PendingUser,
    Playlist, SavedTrack, SearchType, Supporter, Track, VideoDetails,
};
use crate::services::LyricsView;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

pub const SEARCH_FAILED: &str = "Unable to search. Please check if the server is running.";
pub const NO_RESULTS: &str = "No results found. Try a different search.";

#[derive(Default)]
pub struct SearchState {
    pub query: String,
    pub search_type: SearchType,
    pub results: Vec<Track>,
    pub loading: bool,
    pub searched: bool, // At least one search finished
    pub error: Option<String>,
}

impl SearchState {
    /// Trimmed query, or None when there is nothing to search for
    pub fn normalized_query(&self) -> Option<String> {
        let query = self.query.trim();
        (!query.is_empty()).then(|| query.to_string())
    }

    /// Message to show in place of the result list, if any
    pub fn empty_message(&self) -> Option<&str> {
        if let Some(error) = &self.error {
            return Some(error.as_str());
        }
        (self.searched && !self.loading && self.results.is_empty()).then_some(NO_RESULTS)
    }
}

#[derive(Default)]
pub struct PlaylistsState {
    pub playlists: Vec<Playlist>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,

    // Expanded playlist and per-playlist track cache
    pub expanded: Option<String>,
    pub tracks: HashMap<String, Vec<SavedTrack>>,
    pub tracks_loading: HashSet<String>,

    // Create form
    pub show_create: bool,
    pub new_name: String,
    pub new_description: String,
    pub creating: bool,

    pub confirm_delete: Option<String>,

    // Inline edit form for one playlist
    pub editing: Option<String>,
    pub edit_name: String,
    pub edit_description: String,
}

impl PlaylistsState {
    /// Expand or collapse `playlist_id`. Returns true when its tracks still
    /// need to be fetched.
    pub fn toggle_expanded(&mut self, playlist_id: &str) -> bool {
        if self.expanded.as_deref() == Some(playlist_id) {
            self.expanded = None;
            return false;
        }
        self.expanded = Some(playlist_id.to_string());
        !self.tracks.contains_key(playlist_id) && !self.tracks_loading.contains(playlist_id)
    }

    pub fn start_editing(&mut self, playlist: &Playlist) {
        self.editing = Some(playlist.id.clone());
        self.edit_name = playlist.name.clone();
        self.edit_description = playlist.description.clone().unwrap_or_default();
    }

    /// Replace the stored copy after the server accepted an edit
    pub fn apply_update(&mut self, updated: Playlist) {
        if self.editing.as_deref() == Some(updated.id.as_str()) {
            self.editing = None;
        }
        if let Some(existing) = self.playlists.iter_mut().find(|p| p.id == updated.id) {
            // The update response carries no track count
            let count = existing.count.take();
            *existing = Playlist {
                count: updated.count.clone().or(count),
                ..updated
            };
        }
    }

    pub fn remove_playlist(&mut self, playlist_id: &str) {
        self.playlists.retain(|p| p.id != playlist_id);
        self.tracks.remove(playlist_id);
        if self.expanded.as_deref() == Some(playlist_id) {
            self.expanded = None;
        }
    }
}

#[derive(Default)]
pub struct LikedState {
    pub ids: HashSet<String>, // Drives the heart buttons everywhere
    pub songs: Vec<SavedTrack>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

impl LikedState {
    pub fn replace(&mut self, songs: Vec<SavedTrack>) {
        self.ids = songs.iter().map(|s| s.track_id.clone()).collect();
        self.songs = songs;
        self.loaded = true;
    }

    pub fn remove(&mut self, track_id: &str) {
        self.songs.retain(|s| s.track_id != track_id);
        self.ids.remove(track_id);
    }
}

#[derive(Default)]
pub struct HistoryState {
    pub entries: Vec<HistoryEntry>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct FriendsState {
    pub friends: Vec<Friend>,
    pub requests: FriendRequests,
    pub loading: bool,
    pub loaded: bool,

    pub search_query: String,
    pub search_results: Vec<Friend>,
    pub searching: bool,

    pub confirm_remove: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeveloperTab {
    #[default]
    Supporters,
    Suggestions,
    ThankYou,
}

impl DeveloperTab {
    pub const ALL: [DeveloperTab; 3] = [
        DeveloperTab::Supporters,
        DeveloperTab::Suggestions,
        DeveloperTab::ThankYou,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeveloperTab::Supporters => "Supporters",
            DeveloperTab::Suggestions => "Suggestions",
            DeveloperTab::ThankYou => "Thank You",
        }
    }

    /// Feedback list behind the tab; the supporters tab has none
    pub fn feedback_kind(self) -> Option<FeedbackKind> {
        match self {
            DeveloperTab::Supporters => None,
            DeveloperTab::Suggestions => Some(FeedbackKind::Suggestion),
            DeveloperTab::ThankYou => Some(FeedbackKind::Thankyou),
        }
    }
}

#[derive(Default)]
pub struct DeveloperState {
    pub tab: DeveloperTab,
    pub supporters: Vec<Supporter>,
    pub feedback: Vec<Feedback>,
    pub loading: bool,
    pub loaded_tab: Option<DeveloperTab>,

    // Feedback form
    pub name: String,
    pub message: String,
    pub submitting: bool,

    pub copied_at: Option<Instant>,
}

impl DeveloperState {
    /// Switch tabs. Returns true when the new tab's list must be loaded.
    pub fn select_tab(&mut self, tab: DeveloperTab) -> bool {
        self.tab = tab;
        self.loaded_tab != Some(tab)
    }

    /// The form as it would be submitted, or None if it is not valid
    pub fn submission(&self) -> Option<NewFeedback> {
        let kind = self.tab.feedback_kind()?;
        let name = self.name.trim();
        let message = self.message.trim();
        if name.is_empty() || message.is_empty() {
            return None;
        }
        if name.chars().count() > FEEDBACK_NAME_MAX || message.chars().count() > FEEDBACK_MESSAGE_MAX {
            return None;
        }
        Some(NewFeedback {
            kind,
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

#[derive(Default)]
pub struct AdminState {
    pub pending: Vec<PendingUser>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
    pub busy: HashSet<String>, // Users with an approve/reject in flight
}

#[derive(Default)]
pub struct VideoState {
    pub details: Option<VideoDetails>,
    pub loading_id: Option<String>,
    pub error: Option<String>,
}

/// Everything fetched from the backend for the main screens
#[derive(Default)]
pub struct ContentState {
    pub search: SearchState,
    pub playlists: PlaylistsState,
    pub liked: LikedState,
    pub history: HistoryState,
    pub friends: FriendsState,
    pub developer: DeveloperState,
    pub admin: AdminState,
    pub video: VideoState,
    pub lyrics: LyricsView,
}

impl ContentState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(track_id: &str) -> SavedTrack {
        serde_json::from_value(serde_json::json!({
            "id": format!("row-{}", track_id),
            "trackId": track_id,
            "title": "Song",
            "artist": "Artist",
            "thumbnail": "",
            "duration": "3:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_search_query_trimmed() {
        let mut search = SearchState::default();
        search.query = "   ".into();
        assert_eq!(search.normalized_query(), None);
        search.query = "  daft punk ".into();
        assert_eq!(search.normalized_query().as_deref(), Some("daft punk"));
    }

    #[test]
    fn test_search_empty_message() {
        let mut search = SearchState::default();
        assert_eq!(search.empty_message(), None);
        search.searched = true;
        assert_eq!(search.empty_message(), Some(NO_RESULTS));
        search.error = Some(SEARCH_FAILED.into());
        assert_eq!(search.empty_message(), Some(SEARCH_FAILED));
    }

    #[test]
    fn test_expand_fetches_once() {
        let mut playlists = PlaylistsState::default();
        assert!(playlists.toggle_expanded("p1"));
        playlists.tracks.insert("p1".into(), vec![saved("t1")]);
        assert!(!playlists.toggle_expanded("p1")); // collapse
        assert!(playlists.expanded.is_none());
        assert!(!playlists.toggle_expanded("p1")); // cached
        assert_eq!(playlists.expanded.as_deref(), Some("p1"));
    }

    #[test]
    fn test_apply_update_keeps_track_count() {
        let mut playlists = PlaylistsState::default();
        playlists.playlists = vec![serde_json::from_value(serde_json::json!({
            "id": "p1", "name": "Old", "_count": {"tracks": 4}
        }))
        .unwrap()];
        let first = playlists.playlists[0].clone();
        playlists.start_editing(&first);
        assert_eq!(playlists.edit_name, "Old");

        playlists.apply_update(
            serde_json::from_value(serde_json::json!({"id": "p1", "name": "New", "description": "d"})).unwrap(),
        );
        assert!(playlists.editing.is_none());
        assert_eq!(playlists.playlists[0].name, "New");
        assert_eq!(playlists.playlists[0].track_count(), Some(4));
    }

    #[test]
    fn test_liked_remove_updates_ids() {
        let mut liked = LikedState::default();
        liked.replace(vec![saved("t1"), saved("t2")]);
        assert!(liked.ids.contains("t1"));
        liked.remove("t1");
        assert_eq!(liked.songs.len(), 1);
        assert!(!liked.ids.contains("t1"));
    }

    #[test]
    fn test_feedback_submission_rules() {
        let mut dev = DeveloperState {
            tab: DeveloperTab::Suggestions,
            name: "  Ann ".into(),
            message: " Dark mode please ".into(),
            ..DeveloperState::default()
        };
        let submission = dev.submission().unwrap();
        assert_eq!(submission.kind, FeedbackKind::Suggestion);
        assert_eq!(submission.name, "Ann");
        assert_eq!(submission.message, "Dark mode please");

        dev.message = "   ".into();
        assert!(dev.submission().is_none());

        dev.message = "x".repeat(FEEDBACK_MESSAGE_MAX + 1);
        assert!(dev.submission().is_none());

        dev.message = "ok".into();
        dev.name = "n".repeat(FEEDBACK_NAME_MAX);
        assert!(dev.submission().is_some());

        dev.tab = DeveloperTab::Supporters;
        assert!(dev.submission().is_none());
    }

    #[test]
    fn test_select_tab_loads_when_stale() {
        let mut dev = DeveloperState::default();
        assert!(dev.select_tab(DeveloperTab::ThankYou));
        dev.loaded_tab = Some(DeveloperTab::ThankYou);
        assert!(!dev.select_tab(DeveloperTab::ThankYou));
    }
}
