// Data models for SoulMate API entities

pub mod library;
pub mod lyrics;
pub mod playlist;
pub mod social;
pub mod track;
pub mod user;

// Re-export commonly used types
pub use library::{HistoryEntry, LikeStatus};
pub use lyrics::{LyricLine, LyricsResult};
pub use playlist::{Playlist, PlaylistDetail, PlaylistInput, SavedTrack, TrackPayload};
pub use social::{Feedback, FeedbackKind, Friend, FriendRequest, FriendRequests, NewFeedback, Supporter};
pub use track::{SearchType, StreamInfo, Track, VideoDetails};
pub use user::{AuthResponse, PendingUser, StatusResponse, User, UserRole, UserStatus};
