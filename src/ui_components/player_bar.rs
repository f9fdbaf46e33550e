use crate::app::player_app::MusicPlayerApp;
use crate::app_state::RepeatMode;
use crate::ui_components::colors::*;
use crate::utils::formatting::format_time;
use eframe::egui;

const PROGRESS_WIDTH: f32 = 460.0;
const HANDLE_RADIUS: f32 = 6.0;

/// Map a pointer x position on the progress bar to a playback position
pub fn seek_position(pointer_x: f32, bar_left: f32, bar_right: f32, duration: f64) -> f64 {
    let width = bar_right - bar_left;
    if width <= 0.0 || !duration.is_finite() || duration <= 0.0 {
        return 0.0;
    }
    let fraction = ((pointer_x - bar_left) / width).clamp(0.0, 1.0) as f64;
    fraction * duration
}

/// Bottom bar: track info, transport controls, progress, volume
pub fn render_player_bar(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    ui.horizontal_centered(|ui| {
        ui.add_space(16.0);
        render_track_info(app, ui);

        let total = ui.available_width();
        let controls_width = 280.0 + PROGRESS_WIDTH + 220.0;
        ui.add_space(((total - controls_width) / 2.0).max(8.0));

        render_controls(app, ui);
        ui.add_space(12.0);
        render_progress_bar(app, ui);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(16.0);
            render_volume(app, ui);
        });
    });
}

fn render_track_info(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    ui.allocate_ui(egui::vec2(240.0, 48.0), |ui| {
        ui.vertical(|ui| match &app.audio.current_track {
            Some(track) => {
                ui.add(egui::Label::new(egui::RichText::new(&track.title).strong().size(14.0)).truncate());
                ui.add(
                    egui::Label::new(egui::RichText::new(&track.artist).size(12.0).color(TEXT_SECONDARY))
                        .truncate(),
                );
                if app.audio.loading_stream {
                    ui.label(egui::RichText::new("Loading…").size(11.0).color(TEXT_TERTIARY));
                } else if let Some(err) = &app.audio.last_error {
                    ui.add(egui::Label::new(egui::RichText::new(err).size(11.0).color(ERROR)).truncate());
                }
            }
            None => {
                ui.label(egui::RichText::new("Nothing playing").color(TEXT_TERTIARY));
            }
        });
    });
}

fn round_button(ui: &mut egui::Ui, icon: &str, color: egui::Color32, fill: egui::Color32, enabled: bool) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::Button::new(egui::RichText::new(icon).size(14.0).color(color))
            .fill(fill)
            .corner_radius(50.0)
            .min_size(egui::vec2(36.0, 36.0)),
    )
}

fn render_controls(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    ui.spacing_mut().item_spacing.x = 8.0;
    let has_track = app.audio.current_track.is_some();
    let queue = &app.audio.playback_queue;
    let shuffle_on = queue.shuffle_enabled();
    let repeat_mode = queue.repeat_mode();
    let has_next = queue.has_next();

    let shuffle_color = if shuffle_on { ACCENT } else { TEXT_TERTIARY };
    if round_button(ui, "🔀", shuffle_color, egui::Color32::TRANSPARENT, true)
        .on_hover_text("Shuffle (Ctrl+Shift+S)")
        .clicked()
    {
        app.toggle_shuffle();
    }

    if round_button(ui, "⏮", TEXT_PRIMARY, BG_BUTTON, has_track).clicked() {
        app.play_previous();
    }

    let play_icon = if app.audio.is_playing { "⏸" } else { "▶" };
    let play_fill = if app.audio.is_playing { ACCENT } else { BG_BUTTON_HOVER };
    let play_color = if app.audio.is_playing { BG_MAIN } else { TEXT_PRIMARY };
    if round_button(ui, play_icon, play_color, play_fill, has_track && !app.audio.loading_stream)
        .on_hover_text("Play/Pause (Ctrl+Space)")
        .clicked()
    {
        app.toggle_playback();
    }

    if round_button(ui, "⏭", TEXT_PRIMARY, BG_BUTTON, has_next).clicked() {
        app.play_next();
    }

    let (repeat_icon, repeat_color) = match repeat_mode {
        RepeatMode::None => ("🔁", TEXT_TERTIARY),
        RepeatMode::All => ("🔁", ACCENT),
        RepeatMode::One => ("🔂", ACCENT),
    };
    if round_button(ui, repeat_icon, repeat_color, egui::Color32::TRANSPARENT, true)
        .on_hover_text(repeat_mode.label())
        .clicked()
    {
        app.cycle_repeat_mode();
    }

    if let Some(track) = app.audio.current_track.clone() {
        let liked = app.is_liked(&track.id);
        let (icon, color) = if liked { ("♥", LIKED) } else { ("♡", TEXT_SECONDARY) };
        if round_button(ui, icon, color, egui::Color32::TRANSPARENT, true).clicked() {
            app.toggle_like(&track);
        }
    }
}

fn render_progress_bar(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    let duration = app.duration_secs();
    let can_seek = app.audio.current_track.is_some() && !app.audio.loading_stream && duration.is_some();
    let duration = duration.unwrap_or(0.0);
    let position = app
        .ui
        .seek_preview
        .unwrap_or_else(|| app.position_secs())
        .min(if duration > 0.0 { duration } else { f64::MAX });

    ui.spacing_mut().item_spacing.x = 10.0;
    ui.label(egui::RichText::new(format_time(position)).size(11.0).color(TEXT_SECONDARY));

    let sense = if can_seek {
        egui::Sense::click_and_drag()
    } else {
        egui::Sense::hover()
    };
    let (response, painter) = ui.allocate_painter(egui::vec2(PROGRESS_WIDTH, 20.0), sense);
    let rect = response.rect;
    let bar_left = rect.min.x + HANDLE_RADIUS;
    let bar_right = rect.max.x - HANDLE_RADIUS;
    let center_y = rect.center().y;

    painter.rect_filled(
        egui::Rect::from_min_max(egui::pos2(bar_left, center_y - 2.0), egui::pos2(bar_right, center_y + 2.0)),
        2.0,
        BG_BUTTON_HOVER,
    );

    let fraction = if duration > 0.0 { (position / duration).clamp(0.0, 1.0) as f32 } else { 0.0 };
    let handle_x = bar_left + (bar_right - bar_left) * fraction;
    painter.rect_filled(
        egui::Rect::from_min_max(egui::pos2(bar_left, center_y - 2.0), egui::pos2(handle_x, center_y + 2.0)),
        2.0,
        ACCENT,
    );
    if can_seek && (response.hovered() || response.dragged()) {
        painter.circle_filled(egui::pos2(handle_x, center_y), HANDLE_RADIUS, ACCENT);
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if can_seek {
        if let Some(pos) = response.interact_pointer_pos() {
            let target = seek_position(pos.x, bar_left, bar_right, duration);
            if response.dragged() {
                app.ui.seek_preview = Some(target);
            }
            if response.drag_stopped() || response.clicked() {
                app.ui.seek_preview = None;
                app.seek_to(target);
            }
        }
    }

    ui.label(egui::RichText::new(format_time(duration)).size(11.0).color(TEXT_SECONDARY));
}

fn render_volume(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    let mut volume = app.audio.volume;
    let slider = ui.add(
        egui::Slider::new(&mut volume, 0.0..=1.0)
            .show_value(false)
            .trailing_fill(true),
    );
    if slider.changed() {
        app.set_volume(volume);
    }

    let icon = if app.audio.muted || app.audio.volume == 0.0 { "🔇" } else { "🔊" };
    if ui
        .add(egui::Button::new(egui::RichText::new(icon).size(14.0)).fill(egui::Color32::TRANSPARENT))
        .on_hover_text("Mute (Ctrl+M)")
        .clicked()
    {
        app.toggle_mute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_position_maps_fraction() {
        assert_eq!(seek_position(150.0, 100.0, 300.0, 200.0), 50.0);
        assert_eq!(seek_position(300.0, 100.0, 300.0, 200.0), 200.0);
    }

    #[test]
    fn test_seek_position_clamps() {
        assert_eq!(seek_position(50.0, 100.0, 300.0, 200.0), 0.0);
        assert_eq!(seek_position(999.0, 100.0, 300.0, 200.0), 200.0);
    }

    #[test]
    fn test_seek_position_without_duration() {
        assert_eq!(seek_position(150.0, 100.0, 300.0, 0.0), 0.0);
        assert_eq!(seek_position(150.0, 100.0, 300.0, f64::NAN), 0.0);
        assert_eq!(seek_position(150.0, 100.0, 100.0, 200.0), 0.0);
    }
}
