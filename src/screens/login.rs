use crate::app::player_app::MusicPlayerApp;
use crate::ui_components::colors::*;
use eframe::egui;

const FORM_WIDTH: f32 = 360.0;

/// Landing page with the sign in / register form
pub fn render_login_screen(app: &mut MusicPlayerApp, ctx: &egui::Context, notice: Option<&str>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BG_MAIN))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space((ui.available_height() / 2.0 - 240.0).max(24.0));
                ui.label(egui::RichText::new("SoulMate").size(40.0).strong().color(TEXT_PRIMARY));
                ui.label(egui::RichText::new("Music for your soul").color(TEXT_SECONDARY));
                ui.add_space(24.0);

                egui::Frame::NONE
                    .fill(BG_CARD)
                    .corner_radius(12.0)
                    .stroke(egui::Stroke::new(1.0, BORDER_DEFAULT))
                    .inner_margin(egui::Margin::same(24))
                    .show(ui, |ui| {
                        ui.set_width(FORM_WIDTH);
                        render_form(app, ui, notice);
                    });
            });
        });
}

fn render_form(app: &mut MusicPlayerApp, ui: &mut egui::Ui, notice: Option<&str>) {
    let register = app.auth.register_mode;
    let title = if register { "Create an account" } else { "Sign in" };
    ui.label(egui::RichText::new(title).size(20.0).strong());
    ui.add_space(12.0);

    if let Some(notice) = notice {
        ui.label(egui::RichText::new(notice).color(SUCCESS));
        ui.add_space(8.0);
    }

    let mut submit = false;
    if register {
        field_label(ui, "Name");
        let name = ui.add(
            egui::TextEdit::singleline(&mut app.auth.name)
                .hint_text("Your name")
                .desired_width(f32::INFINITY),
        );
        submit |= entered(ui, &name);
        ui.add_space(8.0);
    }

    field_label(ui, "Email");
    let email = ui.add(
        egui::TextEdit::singleline(&mut app.auth.email)
            .hint_text("you@example.com")
            .desired_width(f32::INFINITY),
    );
    submit |= entered(ui, &email);
    ui.add_space(8.0);

    field_label(ui, "Password");
    let password = ui.add(
        egui::TextEdit::singleline(&mut app.auth.password)
            .password(true)
            .hint_text("••••••••")
            .desired_width(f32::INFINITY),
    );
    submit |= entered(ui, &password);
    ui.add_space(12.0);

    if let Some(error) = &app.auth.login_error {
        ui.label(egui::RichText::new(error).color(ERROR));
        ui.add_space(8.0);
    }

    let submitting = app.auth.submitting;
    let label = match (register, submitting) {
        (false, false) => "Sign In",
        (false, true) => "Signing in...",
        (true, false) => "Register",
        (true, true) => "Registering...",
    };
    let button = egui::Button::new(egui::RichText::new(label).strong().color(BG_MAIN))
        .fill(ACCENT)
        .corner_radius(8.0)
        .min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add_enabled(!submitting, button).clicked() {
        submit = true;
    }

    if submit && !submitting {
        if register {
            app.register();
        } else {
            app.login();
        }
    }

    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        let switch = if register {
            "Already have an account? Sign in"
        } else {
            "Don't have an account? Register"
        };
        if ui.link(egui::RichText::new(switch).color(TEXT_SECONDARY)).clicked() {
            app.auth.register_mode = !register;
            app.auth.login_error = None;
        }
    });
}

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(12.0).color(TEXT_SECONDARY));
}

fn entered(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
