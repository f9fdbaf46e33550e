/// Color palette: near-black backgrounds, white text at several opacities
use eframe::egui::Color32;

// Backgrounds (darkest to lightest)
pub const BG_MAIN: Color32 = Color32::from_rgb(9, 9, 11); // #09090b
pub const BG_CARD: Color32 = Color32::from_rgb(17, 17, 20);
pub const BG_HOVER: Color32 = Color32::from_rgb(28, 28, 32);
pub const BG_BUTTON: Color32 = Color32::from_rgb(36, 36, 40);
pub const BG_BUTTON_HOVER: Color32 = Color32::from_rgb(48, 48, 54);

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(245, 245, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 166);
pub const TEXT_TERTIARY: Color32 = Color32::from_rgb(105, 105, 112);

// Accents
pub const ACCENT: Color32 = Color32::WHITE;
pub const LIKED: Color32 = Color32::from_rgb(239, 68, 68);
pub const GOLD: Color32 = Color32::from_rgb(255, 215, 0); // Supporters
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94); // #22c55e
pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);

pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(40, 40, 45);
