// Core constants for the pixel canvas
pub const CELL_SIZE: u32 = 20;
pub const NUM_ROWS: u32 = 20;
pub const NUM_COLS: u32 = 20;

// Largest surface edge we are willing to allocate and upload as one texture
pub const MAX_SURFACE_EDGE: u32 = 4096;

pub const DEFAULT_PALETTE: [&str; 3] = ["black", "red", "blue"];
pub const DEFAULT_BACKGROUND: &str = "white";
pub const DEFAULT_GRID_COLOR: &str = "gray";
