//! Concrete window backend implementations
//!
//! Only the OpenGL backend ships; the software backend used by the test
//! suite lives beside the trait in `window::mock`.

pub(crate) mod opengl;
