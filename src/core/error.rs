//! Error types for color parsing, configuration and canvas operations

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color specifier")]
    Empty,

    #[error("unknown color name '{0}'")]
    UnknownName(String),

    #[error("invalid hex color '{0}', expected #rgb or #rrggbb")]
    InvalidHex(String),
}

/// Problems found while validating the grid and palette before the window opens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,

    #[error("grid must have at least one row")]
    ZeroRows,

    #[error("grid must have at least one column")]
    ZeroCols,

    #[error("surface {width}x{height} exceeds the maximum of {max}x{max} pixels")]
    SurfaceTooLarge { width: u64, height: u64, max: u32 },

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("default color index {index} is out of range for a palette of {len}")]
    DefaultColorOutOfRange { index: usize, len: usize },

    #[error("surface is {actual_width}x{actual_height} but the grid needs {width}x{height}")]
    SurfaceMismatch {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("color '{0}' is not in the palette")]
    ColorNotInPalette(String),

    #[error("palette index {index} is out of range for a palette of {len}")]
    PaletteIndexOutOfRange { index: usize, len: usize },
}
