//! Quad demo application
//!
//! Opens a window and renders a single colored rectangle over a dark clear
//! color until the window is closed (close button or Escape). Settings are
//! read from `quad_app.toml` next to the working directory when present.

use render_window::config::Config as _;
use render_window::{app, Application, Color, Rect, RenderWindow, WindowConfig};

const CONFIG_PATH: &str = "quad_app.toml";

struct QuadApp {
    background: Color,
    quad: Rect,
    quad_color: Color,
}

impl Application for QuadApp {
    fn update(&mut self, window: &mut RenderWindow) -> Result<(), Box<dyn std::error::Error>> {
        window.clear(self.background);
        window.draw_rect(self.quad, self.quad_color);
        Ok(())
    }
}

fn load_config() -> WindowConfig {
    if std::path::Path::new(CONFIG_PATH).exists() {
        match WindowConfig::load_from_file(CONFIG_PATH) {
            Ok(config) => return config,
            Err(err) => log::warn!("ignoring {CONFIG_PATH}: {err}"),
        }
    }
    let mut config = WindowConfig::default();
    config.title = "Quad Demo".to_string();
    config
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    render_window::foundation::logging::init();

    let config = load_config();
    log::info!("creating {}x{} window...", config.width, config.height);
    let window = RenderWindow::new(&config)?;
    log::info!("window created successfully");

    let mut quad_app = QuadApp {
        background: Color::rgba(0.1, 0.1, 0.12, 1.0),
        quad: Rect::new(-0.5, -0.5, 1.0, 1.0),
        quad_color: Color::rgb(0.9, 0.3, 0.2),
    };
    app::run(window, &mut quad_app)?;

    log::info!("window closed, shutting down");
    Ok(())
}
