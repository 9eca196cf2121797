//! Rendering primitives
//!
//! The drawable surface of this crate is deliberately small: a clear color
//! and one axis-aligned rectangle primitive. This module holds the geometry
//! and color types shared by the real OpenGL backend and the software test
//! backend, plus the embedded shader sources.

pub mod primitives;
pub mod shaders;

pub use primitives::{Color, Rect};
