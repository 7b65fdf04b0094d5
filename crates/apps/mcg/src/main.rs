//! mcg.mail - A private, wallet-addressed mail client
//!
//! This is the main entry point for the mcg.mail application.

use chrono::Utc;
use gpui::prelude::*;
use gpui::{px, size, Application, WindowOptions};
use gpui_component::TitleBar;
use log::{error, info, warn};
use mcg_mail::config::{ER_RPC_ENV, L1_RPC_ENV};
use mcg_mail::{theme, AppState, EndpointConfig};

mod app;
mod assets;
mod components;
mod input;
mod views;

use app::McgApp;
use assets::McgAssets;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Bootstrap config directory
    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    // Endpoints are resolved for logging only; nothing talks to the ledger yet
    if let Err(e) = mcg_mail::create_providers() {
        warn!("Ledger endpoints are invalid: {:#}", e);
        if let Some(path) = EndpointConfig::default_config_path() {
            warn!(
                "To configure endpoints, either:\n\
                 1. Edit the overrides at: {}\n\
                 2. Or set environment variables: {} and {}",
                path.display(),
                L1_RPC_ENV,
                ER_RPC_ENV
            );
        }
    }

    let theme_preference = theme::load_preference();

    Application::new().with_assets(McgAssets).run(move |cx| {
        gpui_component::init(cx);
        cx.bind_keys(input::bindings());
        app::apply_theme(theme_preference, None, cx);

        let state = match AppState::seeded(Utc::now()) {
            Ok(state) => state,
            Err(e) => {
                error!("Failed to seed mailbox: {:#}", e);
                cx.quit();
                return;
            }
        };

        let window_options = WindowOptions {
            window_bounds: Some(gpui::WindowBounds::Windowed(gpui::Bounds {
                origin: gpui::Point::default(),
                size: size(px(1200.), px(800.)),
            })),
            titlebar: Some(TitleBar::title_bar_options()),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let root = cx.new(|cx| McgApp::new(state, theme_preference, window, cx));
            cx.new(|cx| gpui_component::Root::new(root.into(), window, cx))
        });
        if let Err(e) = opened {
            error!("Failed to open window: {:#}", e);
            cx.quit();
            return;
        }

        info!("mcg.mail started");
    });
}
