pub mod colors;
pub mod layout;
pub mod lyrics_panel;
pub mod player_bar;
pub mod toast;
pub mod track_row;
