//! Window error taxonomy
//!
//! Every construction failure mode is a distinct variant, including shader
//! compilation and linking: a window whose only draw path cannot be built is
//! a failed window, not a degraded one.

use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing backend could not be initialized
    #[error("GLFW initialization failed: {0}")]
    Init(String),

    /// The native window could not be created
    #[error("window creation failed")]
    Creation,

    /// OpenGL function pointers could not be loaded for the new context
    #[error("failed to load OpenGL functions: {0}")]
    FunctionLoader(String),

    /// A GPU object allocation failed
    #[error("failed to allocate GPU object: {0}")]
    Allocation(String),

    /// A shader stage failed to compile
    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile {
        /// Which stage failed (`"vertex"` or `"fragment"`)
        stage: &'static str,
        /// The driver's info log
        log: String,
    },

    /// The shader program failed to link
    #[error("shader program failed to link: {0}")]
    ShaderLink(String),

    /// The linked program is missing an expected attribute or uniform
    #[error("shader program is missing the `{0}` binding")]
    MissingBinding(&'static str),
}

/// Convenience alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;
