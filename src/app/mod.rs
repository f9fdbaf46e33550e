pub mod player_app;
pub mod queue;
mod requests;

pub use player_app::MusicPlayerApp;

#[cfg(test)]
pub(crate) mod test_support {
    use super::MusicPlayerApp;
    use crate::api::ApiClient;
    use crate::config::AppConfig;
    use crate::models::{Track, User, UserRole, UserStatus};
    use std::path::Path;
    use std::time::Duration;

    /// App pointed at `api_url` that keeps its files in `data_dir`
    pub fn app_for(api_url: &str, data_dir: &Path) -> MusicPlayerApp {
        let config = AppConfig {
            api_url: api_url.to_string(),
            data_dir: data_dir.to_path_buf(),
        };
        let api = ApiClient::new(api_url).unwrap();
        MusicPlayerApp::new(config, api)
    }

    pub fn approved_user() -> User {
        User {
            id: "u1".into(),
            email: "ann@example.com".into(),
            name: "Ann".into(),
            role: UserRole::User,
            status: UserStatus::Approved,
            created_at: None,
        }
    }

    pub fn track(id: &str) -> Track {
        Track {
            id: id.into(),
            title: "Song".into(),
            artist: "Band".into(),
            duration: "3:33".into(),
            thumbnail: String::new(),
            thumbnail_hd: String::new(),
        }
    }

    /// Run the per-frame pollers until `done` holds or two seconds pass
    pub async fn pump_until(app: &mut MusicPlayerApp, done: impl Fn(&MusicPlayerApp) -> bool) {
        let ctx = eframe::egui::Context::default();
        for _ in 0..200 {
            app.check_session_tasks();
            app.check_playback_tasks(&ctx);
            app.check_actions();
            if done(app) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("background task did not finish in time");
    }
}
