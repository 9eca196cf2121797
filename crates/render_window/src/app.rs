//! Application loop
//!
//! A small seam between "owns the window" and "decides what each frame
//! looks like": implement [`Application`] and hand it to [`run`] together
//! with a constructed window. The loop is strictly synchronous — one
//! `update` then one present per iteration until closure is requested.

use crate::window::RenderWindow;

/// Per-frame application logic driven by [`run`]
pub trait Application {
    /// One-time setup after the window exists, before the first frame
    ///
    /// # Errors
    ///
    /// Returning an error aborts the loop before any frame is rendered.
    fn initialize(&mut self, _window: &mut RenderWindow) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    /// Record one frame's worth of clear/draw calls
    ///
    /// Called once per loop iteration with the frame presented afterwards.
    /// Request shutdown by calling
    /// [`set_should_close`](RenderWindow::set_should_close).
    ///
    /// # Errors
    ///
    /// Returning an error aborts the loop; the frame in progress is not
    /// presented.
    fn update(&mut self, window: &mut RenderWindow) -> Result<(), Box<dyn std::error::Error>>;
}

/// Drive an application until its window requests closure
///
/// Takes ownership of the window; it is destroyed when the loop returns.
///
/// # Errors
///
/// Propagates the first error returned by the application's `initialize`
/// or `update`.
pub fn run<A: Application>(
    mut window: RenderWindow,
    app: &mut A,
) -> Result<(), Box<dyn std::error::Error>> {
    app.initialize(&mut window)?;
    while !window.should_close() {
        app.update(&mut window)?;
        window.process();
    }
    Ok(())
}
