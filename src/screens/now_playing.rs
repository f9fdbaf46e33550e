use crate::app::player_app::MusicPlayerApp;
use crate::ui_components::colors::*;
use eframe::egui;

const ARTWORK_SIZE: f32 = 200.0;

/// Sidebar block under the navigation: artwork, current track and the queue
pub fn render_now_playing_sidebar(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    let Some(track) = app.audio.current_track.clone() else {
        ui.label(egui::RichText::new("No track playing").color(TEXT_TERTIARY));
        ui.label(
            egui::RichText::new("Search for a track to get started")
                .size(12.0)
                .color(TEXT_TERTIARY),
        );
        return;
    };

    ui.label(egui::RichText::new("Now Playing").size(12.0).color(TEXT_TERTIARY));
    ui.add_space(6.0);
    ui.vertical_centered(|ui| match &app.ui.artwork_texture {
        Some(texture) => {
            ui.add(
                egui::Image::new(texture)
                    .fit_to_exact_size(egui::vec2(ARTWORK_SIZE, ARTWORK_SIZE))
                    .corner_radius(8.0),
            );
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(ARTWORK_SIZE, ARTWORK_SIZE), egui::Sense::hover());
            ui.painter().rect_filled(rect, 8.0, BG_CARD);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "♪",
                egui::FontId::proportional(48.0),
                TEXT_TERTIARY,
            );
        }
    });
    ui.add_space(8.0);
    ui.add(egui::Label::new(egui::RichText::new(&track.title).strong()).truncate());
    ui.add(egui::Label::new(egui::RichText::new(&track.artist).size(12.0).color(TEXT_SECONDARY)).truncate());
    ui.add_space(12.0);

    let upcoming: Vec<_> = app
        .audio
        .playback_queue
        .upcoming()
        .into_iter()
        .cloned()
        .collect();
    ui.label(egui::RichText::new(format!("Up Next ({})", upcoming.len())).size(12.0).color(TEXT_TERTIARY));
    ui.add_space(4.0);

    let mut play = None;
    let mut remove = None;
    egui::ScrollArea::vertical()
        .id_salt("queue")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if upcoming.is_empty() {
                ui.label(egui::RichText::new("Queue is empty").size(12.0).color(TEXT_TERTIARY));
            }
            for queued in &upcoming {
                ui.horizontal(|ui| {
                    let item = ui
                        .vertical(|ui| {
                            ui.set_width(ui.available_width() - 28.0);
                            ui.add(egui::Label::new(egui::RichText::new(&queued.title).size(13.0)).truncate());
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(&queued.artist).size(11.0).color(TEXT_TERTIARY),
                                )
                                .truncate(),
                            );
                        })
                        .response
                        .interact(egui::Sense::click());
                    if item.clicked() {
                        play = Some(queued.clone());
                    }
                    if ui
                        .add(egui::Button::new("✕").fill(egui::Color32::TRANSPARENT))
                        .on_hover_text("Remove from queue")
                        .clicked()
                    {
                        remove = Some(queued.id.clone());
                    }
                });
                ui.add_space(2.0);
            }
        });

    if let Some(track) = play {
        app.play_track(track);
    }
    if let Some(track_id) = remove {
        app.remove_from_queue(&track_id);
    }
}
