use crate::app::player_app::MusicPlayerApp;
use crate::ui_components::track_row::{empty_state, error_text, render_track_row, screen_heading, RowOptions, TrackAction};
use eframe::egui;

/// Recently played, newest first
pub fn render_history_view(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    screen_heading(ui, "Recently Played");

    let history = &app.content.history;
    if history.loading && history.entries.is_empty() {
        ui.spinner();
        return;
    }
    if let Some(error) = &history.error {
        error_text(ui, error);
        return;
    }
    if history.entries.is_empty() {
        empty_state(ui, "No listening history yet");
        return;
    }

    let current_id = app.audio.current_track_id().map(str::to_string);
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .id_salt("history")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, entry) in history.entries.iter().enumerate() {
                let track = entry.to_track();
                let options = RowOptions {
                    is_current: current_id.as_deref() == Some(track.id.as_str()),
                    liked: Some(app.content.liked.ids.contains(&track.id)),
                    queue_button: true,
                    subtitle: Some(entry.played_at_local()),
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
    let Some(track) = app.content.history.entries.get(i).map(|e| e.to_track()) else {
        return;
    };
    match action {
        TrackAction::Play => app.play_track(track),
        TrackAction::AddToQueue => app.add_to_queue(track),
        TrackAction::ToggleLike => app.toggle_like(&track),
        _ => {}
    }
}
