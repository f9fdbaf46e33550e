use crate::app::player_app::MusicPlayerApp;
use crate::services::lyrics::LyricsContent;
use crate::ui_components::colors::*;
use eframe::egui;

/// Lyrics for the current track. Synced lyrics follow playback.
pub fn render_lyrics_panel(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    let expanded = app.ui.lyrics_expanded;
    let mut toggle_expand = false;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Lyrics").size(18.0).strong().color(TEXT_PRIMARY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (icon, hover) = if expanded { ("⤡", "Collapse") } else { ("⤢", "Expand") };
            if ui
                .add(egui::Button::new(icon).fill(egui::Color32::TRANSPARENT))
                .on_hover_text(hover)
                .clicked()
            {
                toggle_expand = true;
            }
        });
    });
    if let Some(track) = &app.audio.current_track {
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("{} · {}", track.title, track.artist))
                    .size(12.0)
                    .color(TEXT_TERTIARY),
            )
            .truncate(),
        );
    }
    ui.add_space(12.0);

    let scroll = app.content.lyrics.take_scroll();
    let active = app.content.lyrics.active();
    let text_size = if expanded { 22.0 } else { 15.0 };

    match app.content.lyrics.content() {
        LyricsContent::Idle => {}
        LyricsContent::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(egui::RichText::new("Loading lyrics...").color(TEXT_SECONDARY));
            });
        }
        LyricsContent::Message(message) => {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(*message).color(TEXT_SECONDARY));
            });
        }
        LyricsContent::Plain(lines) => {
            egui::ScrollArea::vertical()
                .id_salt("lyrics_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for line in lines {
                        if line.trim().is_empty() {
                            ui.add_space(text_size * 0.8);
                        } else {
                            ui.label(egui::RichText::new(line).size(text_size).color(TEXT_SECONDARY));
                        }
                    }
                });
        }
        LyricsContent::Synced(lines) => {
            egui::ScrollArea::vertical()
                .id_salt("lyrics_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    for (i, line) in lines.iter().enumerate() {
                        let (color, strong) = match active {
                            Some(a) if i == a => (ACCENT, true),
                            Some(a) if i < a => (TEXT_TERTIARY, false),
                            _ => (TEXT_SECONDARY, false),
                        };
                        let text = if line.text.is_empty() { "♪" } else { line.text.as_str() };
                        let mut rich = egui::RichText::new(text).size(text_size).color(color);
                        if strong {
                            rich = rich.strong();
                        }
                        let response = ui.add(egui::Label::new(rich).wrap());
                        if scroll && active == Some(i) {
                            response.scroll_to_me(Some(egui::Align::Center));
                        }
                        ui.add_space(4.0);
                    }
                    ui.add_space(40.0);
                });
        }
    }

    if toggle_expand {
        app.ui.lyrics_expanded = !expanded;
    }
}
