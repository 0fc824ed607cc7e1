#[macro_use]
extern crate tracing;

pub mod color;
pub mod controller;
pub mod error;
pub mod grid;
pub mod notice;
pub mod project;
pub mod svg;
pub mod zoom;

pub use self::{
    color::{Cell, Color},
    controller::{Confirm, Controller, MenuAction},
    error::{ColorError, FormatError, ValidationError},
    grid::{GridLayout, PixelGrid},
    notice::Notice,
    project::{Download, ProjectRecord},
    zoom::Zoom,
};

/// Width of the grid the application starts with
pub const DEFAULT_WIDTH: u32 = 10;

/// Height of the grid the application starts with
pub const DEFAULT_HEIGHT: u32 = 10;

/// Upper bound for either side of the grid
pub const MAX_GRID_SIDE: u32 = 1024;
