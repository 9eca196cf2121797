//! # render_window
//!
//! A minimal window/render-context wrapper built on GLFW and OpenGL.
//!
//! The crate owns exactly one responsibility: put a window with a bound GL
//! context on screen, keep its event loop serviced, and draw axis-aligned
//! rectangles through one fixed shader program. Everything else (scenes,
//! batching, input beyond close handling) is left to the application.
//!
//! ## Features
//!
//! - **Window lifecycle**: construction returns `Result`, teardown is `Drop`
//! - **Immediate-mode drawing**: clear plus a single rectangle primitive
//! - **Multi-window safe**: backend init is process-idempotent; dropping one
//!   window never tears down another's backend state
//! - **Headless testing**: the public surface is exercised against a software
//!   backend in the test suite
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use render_window::{Color, Rect, RenderWindow, WindowConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     render_window::foundation::logging::init();
//!
//!     let config = WindowConfig::default();
//!     let mut window = RenderWindow::new(&config)?;
//!
//!     while !window.should_close() {
//!         window.clear(Color::rgba(0.1, 0.1, 0.1, 1.0));
//!         window.draw_rect(Rect::new(-0.5, -0.5, 1.0, 1.0), Color::rgb(1.0, 0.0, 0.0));
//!         window.process();
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Rectangle coordinates are clip space: the vertex shader passes positions
//! through untransformed, so callers pre-normalize to `[-1, 1]`.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod app;
pub mod config;
pub mod foundation;
pub mod render;
pub mod window;

// Backend implementations are internal; applications only see RenderWindow.
mod backend;

pub use app::Application;
pub use config::WindowConfig;
pub use render::{Color, Rect};
pub use window::{RenderWindow, WindowError, WindowResult};
