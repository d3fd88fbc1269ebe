use clap::Parser;
use flexi_logger::Logger;

use pixel_painter::{app, Args};

fn main() {
    let _logger = match Logger::try_with_env_or_str("info").and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    };

    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            eprintln!("pixel-painter: {err}");
            std::process::exit(2);
        }
    };

    log::info!("Starting {} {}", app::WINDOW_TITLE, env!("CARGO_PKG_VERSION"));
    macroquad::Window::from_config(app::window_conf(&config), app::run(config));
}
