use crate::ui_components::colors::*;
use eframe::egui;

/// Shown while a stored session is being validated
pub fn render_splash_screen(ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BG_MAIN))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 2.0 - 60.0);
                ui.label(egui::RichText::new("SoulMate").size(36.0).strong().color(TEXT_PRIMARY));
                ui.add_space(16.0);
                ui.spinner();
            });
        });
}
