use crate::app::player_app::MusicPlayerApp;
use crate::models::Track;
use crate::ui_components::colors::*;
use crate::ui_components::track_row::{empty_state, error_text, render_track_row, screen_heading, RowOptions, TrackAction};
use eframe::egui;

pub fn render_liked_view(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    let liked = &app.content.liked;
    let count = liked.songs.len();

    ui.horizontal(|ui| {
        screen_heading(ui, "Liked Songs");
        ui.label(egui::RichText::new(format!("{} songs", count)).color(TEXT_SECONDARY));
    });

    if liked.loading && liked.songs.is_empty() {
        ui.spinner();
        return;
    }
    if let Some(error) = &liked.error {
        error_text(ui, error);
        return;
    }
    if liked.songs.is_empty() {
        empty_state(ui, "No liked songs yet. Tap the heart on any song to save it here.");
        return;
    }

    let current_id = app.audio.current_track_id().map(str::to_string);
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .id_salt("liked_songs")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, saved) in liked.songs.iter().enumerate() {
                let track = saved.to_track();
                let options = RowOptions {
                    is_current: current_id.as_deref() == Some(track.id.as_str()),
                    liked: Some(true),
                    playlists: Some(app.content.playlists.playlists.as_slice()),
                    queue_button: true,
                    download_button: true,
                    ..RowOptions::default()
                };
                if let Some(action) = render_track_row(ui, &track, i, &options) {
                    clicked = Some((i, action));
                }
            }
        });

    let Some((i, action)) = clicked else {
        return;
    };
    let tracks: Vec<Track> = app.content.liked.songs.iter().map(|s| s.to_track()).collect();
    let Some(track) = tracks.get(i).cloned() else {
        return;
    };
    match action {
        TrackAction::Play => app.play_list(tracks, &track.id),
        TrackAction::AddToQueue => app.add_to_queue(track),
        // The row stays until the server confirms
        TrackAction::ToggleLike => app.unlike_song(&track.id),
        TrackAction::AddToPlaylist(p) => {
            if let Some(playlist) = app.content.playlists.playlists.get(p).cloned() {
                app.add_to_playlist(&playlist, &track);
            }
        }
        TrackAction::Download => app.open_download(&track),
        TrackAction::Details | TrackAction::Remove => {}
    }
}
