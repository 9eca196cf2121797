//! High-level window handle for applications
//!
//! [`RenderWindow`] is the entire public window surface of this crate. It
//! owns a boxed backend and delegates; no backend type ever leaks through
//! its API, so applications written against it compile unchanged whether
//! the backend is live GLFW/OpenGL or the software mock used in tests.
//!
//! # Lifecycle
//!
//! Construction performs backend init, window creation, context binding,
//! GL function loading, and rectangle-pipeline setup, and reports every
//! failure as a [`WindowError`]. Teardown is `Drop`: a destroyed window
//! cannot be used again because it no longer exists, and destroying one
//! window never affects another.

use crate::backend::opengl;
use crate::config::WindowConfig;
use crate::render::{Color, Rect};
use crate::window::backend::WindowBackend;
use crate::window::WindowResult;

/// A native window with a bound render context and one rectangle primitive
pub struct RenderWindow {
    backend: Box<dyn WindowBackend>,
}

impl RenderWindow {
    /// Open a window with a bound OpenGL context
    ///
    /// Initializes the windowing backend (idempotent process-wide), creates
    /// the native window, makes the GL context current on the calling
    /// thread, loads GL function pointers, enables vsync when configured,
    /// and compiles the rectangle shader program.
    ///
    /// # Errors
    ///
    /// Returns a [`WindowError`](crate::WindowError) if backend init, window
    /// creation, function loading, or shader compilation/linking fails.
    /// Partial construction cleans up after itself: resources acquired
    /// before the failing step are released before the error returns.
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let backend = opengl::Window::new(config)?;
        Ok(Self {
            backend: Box::new(backend),
        })
    }

    /// Wrap an already-built backend; used by tests to substitute a mock
    #[cfg(test)]
    pub(crate) fn from_backend(backend: Box<dyn WindowBackend>) -> Self {
        Self { backend }
    }

    /// Whether window closure has been requested
    ///
    /// False immediately after construction. Pure query, no side effects.
    #[must_use]
    pub fn should_close(&self) -> bool {
        self.backend.should_close()
    }

    /// Programmatically request or cancel window closure
    pub fn set_should_close(&mut self, should_close: bool) {
        self.backend.set_should_close(should_close);
    }

    /// Current framebuffer size in pixels
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.backend.framebuffer_size()
    }

    /// Update the title bar text
    pub fn set_title(&mut self, title: &str) {
        self.backend.set_title(title);
    }

    /// Set the clear color and clear the color buffer
    pub fn clear(&mut self, color: Color) {
        self.backend.clear(color);
    }

    /// Draw one axis-aligned rectangle
    ///
    /// Coordinates are clip space: the fixed vertex shader applies no
    /// transform, so visible geometry lies within `[-1, 1]` on both axes.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.backend.draw_rect(rect, color);
    }

    /// Present the frame and service the event loop
    ///
    /// Swaps buffers, polls events, handles close/resize, and applies the
    /// viewport from the current framebuffer size. Blocks no longer than
    /// the swap takes (bounded by vsync when enabled).
    pub fn process(&mut self) {
        self.backend.process();
    }
}
