//! Backend-agnostic window trait
//!
//! This trait is the seam between [`RenderWindow`](super::RenderWindow) and
//! the concrete windowing/graphics stack. It is `pub(crate)`: applications
//! never see it, and the handle never exposes which backend it holds. The
//! real implementation lives in `backend::opengl`; tests substitute a
//! software backend with a readable framebuffer.

use crate::render::{Color, Rect};

/// Internal trait for window backend implementations
///
/// All operations assume single-threaded use from the thread that created
/// the window; the underlying windowing library's thread-affinity rules
/// apply unchanged.
pub(crate) trait WindowBackend {
    /// Whether window closure has been requested
    ///
    /// True after the user clicks the close button, presses the configured
    /// close key, or the application calls `set_should_close(true)`.
    fn should_close(&self) -> bool;

    /// Programmatically request or cancel window closure
    fn set_should_close(&mut self, should_close: bool);

    /// Current framebuffer size in pixels
    fn framebuffer_size(&self) -> (u32, u32);

    /// Update the title bar text
    fn set_title(&mut self, title: &str);

    /// Set the clear color and clear the color buffer
    ///
    /// Only the color buffer is touched; no depth or stencil attachment is
    /// configured anywhere in this crate.
    fn clear(&mut self, color: Color);

    /// Draw one axis-aligned rectangle in clip-space coordinates
    ///
    /// One draw call per invocation; the vertex data fully replaces the
    /// previous contents of the shared vertex buffer.
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Present the frame and service the event loop
    ///
    /// Swaps buffers, polls pending events, dispatches per-window events
    /// (close request, close key, framebuffer resize), then applies the
    /// viewport from the freshly updated framebuffer size.
    fn process(&mut self);
}
