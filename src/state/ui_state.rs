use crate::ui_components::toast::ToastManager;
use egui::TextureHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainTab {
    #[default]
    Player,
    Playlists,
    Liked,
    History,
    Friends,
    Developer,
    Profile,
    Admin,
}

impl MainTab {
    /// Tabs shown to every approved user, in sidebar order
    pub const NAV: [MainTab; 7] = [
        MainTab::Player,
        MainTab::Playlists,
        MainTab::Liked,
        MainTab::History,
        MainTab::Friends,
        MainTab::Developer,
        MainTab::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainTab::Player => "Player",
            MainTab::Playlists => "Playlists",
            MainTab::Liked => "Liked Songs",
            MainTab::History => "History",
            MainTab::Friends => "Friends",
            MainTab::Developer => "Developer",
            MainTab::Profile => "Profile",
            MainTab::Admin => "Admin",
        }
    }
}

#[derive(Default)]
pub struct UIState {
    // Navigation
    pub selected_tab: MainTab,

    // Toast Notifications
    pub toast_manager: ToastManager,

    // Current Track Artwork
    pub artwork_texture: Option<TextureHandle>,
    pub artwork_track_id: Option<String>,

    // Lyrics panel takes the main area when expanded
    pub lyrics_expanded: bool,

    // Progress bar drag preview (seconds)
    pub seek_preview: Option<f64>,

    pub is_shutting_down: bool,
}
