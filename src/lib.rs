pub mod app;
pub mod config;
pub mod core;
pub mod input;
pub mod rendering;
pub mod state;
pub mod ui;

pub use crate::config::{Args, CanvasConfig};
pub use crate::core::{CanvasError, ColorSpec, ConfigError, GridConfig, Palette, Rgba};
pub use crate::rendering::{PixelSurface, Surface};
pub use crate::state::GridCanvas;
