/// Like toggling for tracks
///
/// The liked-id set is updated optimistically. The caller sends the request
/// and calls `rollback_like` if the server refuses it.
use crate::models::Track;
use std::collections::HashSet;

pub const LIKED_MESSAGE: &str = "Added to Liked Songs";
pub const UNLIKED_MESSAGE: &str = "Removed from Liked Songs";
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Result of a toggle operation (for UI updates)
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleResult {
    pub is_liked: bool,
    pub message: &'static str,
    pub success: bool,
}

/// Toggle like status for `track` in `liked_ids`
///
/// Without a session nothing changes and the result carries
/// "Not authenticated".
pub fn toggle_like(track: &Track, liked_ids: &mut HashSet<String>, signed_in: bool) -> ToggleResult {
    let was_liked = liked_ids.contains(&track.id);

    if !signed_in {
        log::warn!("[Like] No session, cannot toggle like for {}", track.id);
        return ToggleResult {
            is_liked: was_liked,
            message: NOT_AUTHENTICATED,
            success: false,
        };
    }

    if was_liked {
        log::info!("[Like] Unliking track {}", track.id);
        liked_ids.remove(&track.id);
        ToggleResult {
            is_liked: false,
            message: UNLIKED_MESSAGE,
            success: true,
        }
    } else {
        log::info!("[Like] Liking track {}", track.id);
        liked_ids.insert(track.id.clone());
        ToggleResult {
            is_liked: true,
            message: LIKED_MESSAGE,
            success: true,
        }
    }
}

/// Undo an optimistic toggle. `liked` is the state the toggle moved to.
pub fn rollback_like(liked_ids: &mut HashSet<String>, track_id: &str, liked: bool) {
    log::warn!("[Like] Reverting like state for {}", track_id);
    if liked {
        liked_ids.remove(track_id);
    } else {
        liked_ids.insert(track_id.to_string());
    }
}
