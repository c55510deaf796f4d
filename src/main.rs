//! Koboland Frontend Entry Point
//!
//! Reads the page configuration, installs the console logger and connects
//! the widget controllers.

mod api;
mod components;
mod config;
mod controllers;
mod csrf;
mod dispatch;
mod dom;
mod navigation;

use std::rc::Rc;

use koboland_widgets::UiConfig;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (UiConfig::default(), Some(e)),
    };

    let level = console_logger::parse_level(&config.log_level);
    if let Err(e) = console_logger::init_logger("Koboland", level) {
        web_sys::console::error_1(&format!("Failed to install logger: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("[APP] Bad page configuration, using defaults: {}", e);
    }

    log::info!("[APP] Starting, {} upload slots", config.max_file_count);
    controllers::start(Rc::new(config));
}
