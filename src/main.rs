#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
mod api;
mod app;
mod app_state;
mod config;
mod constants;
mod models;
mod screens;
mod services;
mod state;
mod ui_components;
mod utils;

use api::ApiClient;
use app::MusicPlayerApp;
use config::AppConfig;
use constants::{APP_HEIGHT, APP_WIDTH};
use eframe::egui;

// App version and metadata
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_NAME: &str = "SoulMate";
const APP_DESCRIPTION: &str = "Music for your soul";

fn main() -> Result<(), eframe::Error> {
    // Set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("reqwest", log::LevelFilter::Warn)
        .filter_module("hyper", log::LevelFilter::Warn)
        .filter_module("hyper_util", log::LevelFilter::Warn)
        .filter_module("rustls", log::LevelFilter::Warn)
        .filter_module("symphonia", log::LevelFilter::Warn)
        .init();

    log::info!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("[Main] Invalid configuration: {}", e);
            return Ok(());
        }
    };
    log::info!(
        "[Main] Backend {} | data dir {}",
        config.api_url,
        config.data_dir.display()
    );

    let api = match ApiClient::new(&config.api_url) {
        Ok(api) => api,
        Err(e) => {
            log::error!("[Main] Failed to create API client: {}", e);
            return Ok(());
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("{} - {}", APP_NAME, APP_DESCRIPTION))
            .with_inner_size([APP_WIDTH, APP_HEIGHT])
            .with_min_inner_size([1100.0, 700.0])
            .with_resizable(true)
            .with_decorations(true)
            .with_icon(load_icon()),
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| Ok(Box::new(MusicPlayerApp::new(config, api)))),
    )
}

/// Window icon: white music note on a dark gradient
fn load_icon() -> egui::IconData {
    let (icon_width, icon_height) = (64, 64);
    let mut pixels = vec![0u8; icon_width * icon_height * 4];

    for y in 0..icon_height {
        for x in 0..icon_width {
            let idx = (y * icon_width + x) * 4;
            let shade = 24.0 + (y as f32 / icon_height as f32) * 40.0;
            pixels[idx] = shade as u8;
            pixels[idx + 1] = shade as u8;
            pixels[idx + 2] = (shade * 1.2) as u8;
            pixels[idx + 3] = 255;
        }
    }

    let mut paint = |x: usize, y: usize| {
        if x < icon_width && y < icon_height {
            let idx = (y * icon_width + x) * 4;
            pixels[idx..idx + 4].copy_from_slice(&[255, 255, 255, 255]);
        }
    };

    let center_x = icon_width / 2;
    let center_y = icon_height / 2;

    // Stem
    for y in (center_y - 16)..(center_y + 4) {
        for x in (center_x + 4)..(center_x + 8) {
            paint(x, y);
        }
    }

    // Head
    for y in center_y..(center_y + 10) {
        for x in (center_x - 6)..(center_x + 4) {
            let dx = x as i32 - center_x as i32;
            let dy = y as i32 - (center_y + 5) as i32;
            if dx * dx + dy * dy < 25 {
                paint(x, y);
            }
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_width as u32,
        height: icon_height as u32,
    }
}
