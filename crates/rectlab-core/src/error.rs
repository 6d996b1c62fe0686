//! Error types for rectangle construction and scene loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when building geometry values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("invalid rectangle {width}x{height}: width and height must not be negative")]
    InvalidRectangle { width: i32, height: i32 },

    #[error("rectangle at ({x},{y}) with size {width}x{height} exceeds the coordinate range")]
    Overflow {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Errors raised while loading or querying a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("rectangle name '{0}' is used more than once")]
    DuplicateName(String),

    #[error("no rectangle named '{0}' in the scene")]
    UnknownRectangle(String),

    #[error("rectangle '{name}': {source}")]
    InvalidRect {
        name: String,
        #[source]
        source: GeometryError,
    },
}

pub type Result<T> = std::result::Result<T, GeometryError>;
