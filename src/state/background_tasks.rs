use crate::models::{
    AuthResponse, Feedback, Friend, FriendRequests, HistoryEntry, LyricsResult, PendingUser,
    Playlist, SavedTrack, StatusResponse, StreamInfo, Supporter, Track, User, VideoDetails,
};
use crate::services::session::LoginFailure;
use crate::state::content_state::DeveloperTab;
use crate::utils::async_helper::AsyncTaskResult;
use egui::ColorImage;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Result of a mutation started from one of the screens
///
/// Mutations share one channel since several may be in flight at once.
#[derive(Debug)]
pub enum ActionOutcome {
    PlaylistCreated(Result<Playlist, String>),
    PlaylistUpdated(Result<Playlist, String>),
    PlaylistDeleted {
        playlist_id: String,
        result: Result<(), String>,
    },
    PlaylistTrackRemoved {
        playlist_id: String,
        result: Result<(), String>,
    },
    AddedToPlaylist {
        playlist_id: String,
        playlist_name: String,
        result: Result<(), String>,
    },
    /// Heart toggle; `liked` is the state the UI already shows
    LikeToggled {
        track_id: String,
        liked: bool,
        result: Result<(), String>,
    },
    Unliked {
        track_id: String,
        result: Result<(), String>,
    },
    UserModerated {
        user_id: String,
        approved: bool,
        result: Result<(), String>,
    },
    Friends {
        success_message: &'static str,
        result: Result<(), String>,
    },
    FeedbackSubmitted(Result<(), String>),
}

pub enum DeveloperData {
    Supporters(Vec<Supporter>),
    Feedback(Vec<Feedback>),
}

pub struct BackgroundTasks {
    // Session
    pub session_rx: Option<Receiver<AsyncTaskResult<User>>>,
    pub login_rx: Option<Receiver<AsyncTaskResult<Result<AuthResponse, LoginFailure>>>>,
    pub register_rx: Option<Receiver<AsyncTaskResult<()>>>,
    pub status_rx: Option<Receiver<AsyncTaskResult<StatusResponse>>>,

    // Playback
    pub stream_rx: Option<Receiver<AsyncTaskResult<StreamInfo>>>,
    pub lyrics_rx: Option<Receiver<AsyncTaskResult<(String, Result<Option<LyricsResult>, String>)>>>,
    pub artwork_rx: Option<Receiver<AsyncTaskResult<(String, ColorImage)>>>,

    // Screens
    pub search_rx: Option<Receiver<AsyncTaskResult<Vec<Track>>>>,
    pub video_rx: Option<Receiver<AsyncTaskResult<VideoDetails>>>,
    pub playlists_rx: Option<Receiver<AsyncTaskResult<Vec<Playlist>>>>,
    pub playlist_tracks_rx: Vec<Receiver<AsyncTaskResult<(String, Result<Vec<SavedTrack>, String>)>>>,
    pub liked_rx: Option<Receiver<AsyncTaskResult<Vec<SavedTrack>>>>,
    pub history_rx: Option<Receiver<AsyncTaskResult<Vec<HistoryEntry>>>>,
    pub friends_rx: Option<Receiver<AsyncTaskResult<(Vec<Friend>, FriendRequests)>>>,
    pub user_search_rx: Option<Receiver<AsyncTaskResult<Vec<Friend>>>>,
    pub developer_rx: Option<Receiver<AsyncTaskResult<(DeveloperTab, DeveloperData)>>>,
    pub pending_users_rx: Option<Receiver<AsyncTaskResult<Vec<PendingUser>>>>,

    // Mutations
    pub action_tx: Sender<AsyncTaskResult<ActionOutcome>>,
    pub action_rx: Receiver<AsyncTaskResult<ActionOutcome>>,
    pub actions_in_flight: usize,
}

impl Default for BackgroundTasks {
    fn default() -> Self {
        let (action_tx, action_rx) = channel();
        Self {
            session_rx: None,
            login_rx: None,
            register_rx: None,
            status_rx: None,
            stream_rx: None,
            lyrics_rx: None,
            artwork_rx: None,
            search_rx: None,
            video_rx: None,
            playlists_rx: None,
            playlist_tracks_rx: Vec::new(),
            liked_rx: None,
            history_rx: None,
            friends_rx: None,
            user_search_rx: None,
            developer_rx: None,
            pending_users_rx: None,
            action_tx,
            action_rx,
            actions_in_flight: 0,
        }
    }
}

impl BackgroundTasks {
    /// Anything in flight that should keep the UI repainting
    pub fn any_pending(&self) -> bool {
        self.actions_in_flight > 0
            || self.session_rx.is_some()
            || self.login_rx.is_some()
            || self.register_rx.is_some()
            || self.status_rx.is_some()
            || self.stream_rx.is_some()
            || self.lyrics_rx.is_some()
            || self.artwork_rx.is_some()
            || self.search_rx.is_some()
            || self.video_rx.is_some()
            || self.playlists_rx.is_some()
            || !self.playlist_tracks_rx.is_empty()
            || self.liked_rx.is_some()
            || self.history_rx.is_some()
            || self.friends_rx.is_some()
            || self.user_search_rx.is_some()
            || self.developer_rx.is_some()
            || self.pending_users_rx.is_some()
    }
}
