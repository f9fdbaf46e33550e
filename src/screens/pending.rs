use crate::app::player_app::MusicPlayerApp;
use crate::ui_components::colors::*;
use eframe::egui;

/// Waiting room for accounts an admin has not approved yet
pub fn render_pending_screen(app: &mut MusicPlayerApp, ctx: &egui::Context) {
    let (email, name) = match &app.auth.user {
        Some(user) => (user.email.clone(), user.name.clone()),
        None => (app.auth.pending_email.clone(), app.auth.pending_name.clone()),
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BG_MAIN))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space((ui.available_height() / 2.0 - 200.0).max(24.0));
                egui::Frame::NONE
                    .fill(BG_CARD)
                    .corner_radius(12.0)
                    .stroke(egui::Stroke::new(1.0, BORDER_DEFAULT))
                    .inner_margin(egui::Margin::same(28))
                    .show(ui, |ui| {
                        ui.set_width(420.0);
                        ui.vertical_centered(|ui| {
                            ui.label(egui::RichText::new("⏳").size(40.0).color(GOLD));
                            ui.add_space(8.0);
                            ui.label(egui::RichText::new("Account Pending Approval").size(22.0).strong());
                            ui.add_space(12.0);
                            ui.label(
                                egui::RichText::new(
                                    "Thank you for registering! Your account is currently awaiting administrator approval.",
                                )
                                .color(TEXT_SECONDARY),
                            );
                            ui.add_space(6.0);
                            ui.label(
                                egui::RichText::new(
                                    "You'll receive access once an admin reviews and approves your registration. Please check back later.",
                                )
                                .size(12.0)
                                .color(TEXT_TERTIARY),
                            );
                            ui.add_space(16.0);

                            if !email.is_empty() {
                                ui.label(egui::RichText::new(format!("Registered as: {}", email)).color(TEXT_SECONDARY));
                            }
                            if !name.is_empty() {
                                ui.label(egui::RichText::new(format!("Name: {}", name)).color(TEXT_SECONDARY));
                            }

                            if let Some(message) = &app.auth.status_message {
                                ui.add_space(10.0);
                                ui.label(egui::RichText::new(message).color(GOLD));
                            }
                            ui.add_space(18.0);

                            let checking = app.auth.checking_status;
                            ui.horizontal(|ui| {
                                let label = if checking { "Checking..." } else { "Check again" };
                                if ui
                                    .add_enabled(!checking, egui::Button::new(label).corner_radius(8.0))
                                    .clicked()
                                {
                                    app.check_account_status();
                                }
                                if ui.add(egui::Button::new("Sign Out").corner_radius(8.0)).clicked() {
                                    app.logout();
                                }
                            });
                        });
                    });
            });
        });
}
