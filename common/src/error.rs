//! Error types shared by the grid, the codecs and the controller
//!
//! None of these are fatal: the caller reports them and keeps going.

/// Input rejected before anything was mutated
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("grid dimensions must be positive (got {width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    #[error("grid dimensions {width}x{height} exceed the maximum side of {max}")]
    TooLarge { width: u32, height: u32, max: u32 },

    #[error("cell index {index} is outside of a grid of {len} cells")]
    OutOfBounds { index: usize, len: usize },

    #[error("cell ({x}, {y}) is outside of a {width}x{height} grid")]
    OutOfGrid {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("zoom ratio {0} is not within the supported range")]
    Zoom(f32),
}

/// Failure to parse a color string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}, expected `#rrggbb` or `rgb(r, g, b)`")]
pub struct ColorError(pub String);

/// A project file or record that doesn't describe a valid grid
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("malformed project file")]
    Json(#[from] serde_json::Error),

    #[error("project declares {expected} cells but lists {found} colors")]
    CellCount { expected: usize, found: usize },

    #[error("invalid project dimensions")]
    Dimensions(#[from] ValidationError),
}
