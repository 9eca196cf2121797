//! OpenGL backend built on GLFW and glow
//!
//! Everything GL- or GLFW-specific stays inside this module: context
//! creation, function loading, the rectangle pipeline, and raw GL calls.
//! The rest of the crate only sees the `WindowBackend` trait.

pub(crate) mod pipeline;
pub(crate) mod window;

pub(crate) use window::Window;
