use crate::error::ColorError;
use std::{fmt, ops::Range, str::FromStr};

/// State of a single grid cell, `None` being unset (transparent)
pub type Cell = Option<Color>;

/// Marker written for unset cells
pub const UNSET_REPR: &str = "";

/// Marker produced by clearing a cell in a rendering surface, accepted on load
const TRANSPARENT_REPR: &str = "transparent";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |range: Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    // rendering surfaces echo colors back as `rgb(r, g, b)`
    fn from_rgb_function(args: &str) -> Option<Self> {
        let mut channels = args.split(',').map(|value| value.trim().parse::<u8>());
        let color = Self::rgb(
            channels.next()?.ok()?,
            channels.next()?.ok()?,
            channels.next()?.ok()?,
        );

        channels.next().is_none().then_some(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b } = self;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
            Self::from_hex(hex)
        } else {
            trimmed
                .strip_prefix("rgb(")
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(Self::from_rgb_function)
        };

        parsed.ok_or_else(|| ColorError(s.to_owned()))
    }
}

/// Parse the textual form of a cell, accepting both unset markers
pub fn parse_cell(value: &str) -> Result<Cell, ColorError> {
    let trimmed = value.trim();
    if trimmed == UNSET_REPR || trimmed.eq_ignore_ascii_case(TRANSPARENT_REPR) {
        return Ok(None);
    }

    trimmed.parse().map(Some)
}

/// Canonical textual form of a cell
pub fn cell_repr(cell: &Cell) -> String {
    cell.map_or_else(|| UNSET_REPR.to_owned(), |color| color.to_string())
}
