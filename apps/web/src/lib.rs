//! Browser dashboard for reviewing messages classified by the security bot.
//!
//! Decorates the host page (starfield, skyline, scroll-driven sky, fade-ins)
//! and renders the `/get_messages` feed with click-to-filter summary cards.

pub mod animation;
pub mod api;
pub mod app;
pub mod config;
pub mod decor;
pub mod dom;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod render;

use std::rc::Rc;

use log::LevelFilter;
use wasm_bindgen::JsValue;

pub use app::Dashboard;
pub use config::DashboardConfig;
pub use models::{Label, Message, MessagesResponse, Stats};

/// Wires every component into the current page.
pub fn start() -> Result<(), JsValue> {
    logging::init(LevelFilter::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    let config = DashboardConfig::from_document(&document);
    logging::set_level(config.log_level());
    log::debug!("Starting dashboard with {config:?}");

    let dashboard = Rc::new(Dashboard::new(document, config));
    dashboard.decorate()?;
    dashboard.bind_scroll(&window)?;
    dashboard.observe_fade_ins()?;
    dashboard.when_ready()?;

    Ok(())
}
