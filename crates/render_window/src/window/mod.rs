//! Window management subsystem
//!
//! This module provides the public window abstraction and the internal
//! backend seam beneath it.
//!
//! # Architecture Overview
//!
//! The window subsystem follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!        ┌──────▼───────┐
//!        │ RenderWindow │ ← Public API (handle.rs)
//!        └──────┬───────┘
//!               │ Uses
//!      ┌────────▼────────┐
//!      │ WindowBackend   │ ← Internal trait (backend.rs)
//!      │ trait           │
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ opengl::Window        │ ← GLFW + glow (backend/opengl/)
//!   │ mock::MockBackend     │ ← Software backend for tests
//!   └───────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - **`handle`**: the application-facing [`RenderWindow`]
//! - **`backend`**: the internal trait every backend implements
//! - **`error`**: the window error taxonomy
//!
//! The trait seam exists so the whole public surface can be exercised
//! headless: tests drive a software backend with a readable framebuffer
//! instead of a live GL context.

pub(crate) mod backend;
mod error;
mod handle;

#[cfg(test)]
pub(crate) mod mock;

pub use error::{WindowError, WindowResult};
pub use handle::RenderWindow;
