/// Toast notifications drawn bottom-center, above the player bar
use crate::constants::PLAYER_BAR_HEIGHT;
use crate::ui_components::colors::*;
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Vec2};
use std::time::{Duration, Instant};

const TOAST_WIDTH: f32 = 360.0;
const TOAST_HEIGHT: f32 = 44.0;
const TOAST_SPACING: f32 = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            message: message.into(),
            toast_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }

    /// Fade in over 0.2s, out over the last 0.5s
    pub fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed().as_secs_f32();
        let total = self.duration.as_secs_f32();

        if elapsed < 0.2 {
            elapsed / 0.2
        } else if elapsed > total - 0.5 {
            ((total - elapsed) / 0.5).max(0.0)
        } else {
            1.0
        }
    }
}

#[derive(Default)]
pub struct ToastManager {
    pub toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn show(&mut self, toast: Toast) {
        // Same message twice in a row just restarts the timer
        if let Some(last) = self.toasts.last_mut() {
            if last.message == toast.message && last.toast_type == toast.toast_type {
                last.created_at = toast.created_at;
                return;
            }
        }
        self.toasts.push(toast);
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.show(Toast::new(message, ToastType::Success));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show(Toast::new(message, ToastType::Error));
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.show(Toast::new(message, ToastType::Info));
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Render active toasts and drop expired ones
    pub fn render(&mut self, ctx: &egui::Context) {
        self.toasts.retain(|toast| !toast.is_expired());
        if self.toasts.is_empty() {
            return;
        }

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("toasts"),
        ));
        let screen_rect = ctx.content_rect();
        let bottom_offset = PLAYER_BAR_HEIGHT + 16.0;

        // Newest at the bottom
        for (i, toast) in self.toasts.iter().rev().enumerate() {
            let y_offset = bottom_offset + (i as f32) * (TOAST_HEIGHT + TOAST_SPACING);
            let pos = Pos2::new(
                screen_rect.center().x - TOAST_WIDTH / 2.0,
                screen_rect.max.y - y_offset - TOAST_HEIGHT,
            );
            let rect = Rect::from_min_size(pos, Vec2::new(TOAST_WIDTH, TOAST_HEIGHT));

            let (accent, icon) = match toast.toast_type {
                ToastType::Success => (SUCCESS, "✓"),
                ToastType::Error => (ERROR, "✗"),
                ToastType::Info => (TEXT_SECONDARY, "i"),
            };
            let opacity = toast.opacity();
            let alpha = |a: f32| (a * opacity) as u8;

            painter.rect_filled(
                rect,
                8.0,
                Color32::from_rgba_unmultiplied(BG_BUTTON.r(), BG_BUTTON.g(), BG_BUTTON.b(), alpha(235.0)),
            );
            painter.rect_stroke(
                rect,
                8.0,
                egui::Stroke::new(
                    1.0,
                    Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), alpha(160.0)),
                ),
                egui::epaint::StrokeKind::Outside,
            );
            painter.text(
                Pos2::new(rect.min.x + 18.0, rect.center().y),
                Align2::LEFT_CENTER,
                icon,
                FontId::proportional(16.0),
                Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), alpha(255.0)),
            );
            painter.text(
                Pos2::new(rect.center().x + 12.0, rect.center().y),
                Align2::CENTER_CENTER,
                &toast.message,
                FontId::proportional(14.0),
                Color32::from_rgba_unmultiplied(255, 255, 255, alpha(255.0)),
            );
        }

        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_toast_collapses() {
        let mut manager = ToastManager::default();
        manager.show_success("Added to Liked Songs");
        manager.show_success("Added to Liked Songs");
        assert_eq!(manager.toasts.len(), 1);
        manager.show_info("Removed from Liked Songs");
        assert_eq!(manager.toasts.len(), 2);
    }

    #[test]
    fn test_opacity_bounds() {
        let mut toast = Toast::new("x", ToastType::Info);
        toast.created_at = Instant::now() - Duration::from_secs(1);
        assert_eq!(toast.opacity(), 1.0);
        toast.created_at = Instant::now() - Duration::from_secs(10);
        assert!(toast.is_expired());
        assert_eq!(toast.opacity(), 0.0);
    }
}
