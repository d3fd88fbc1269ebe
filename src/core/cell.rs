use crate::core::color::Rgba;
use crate::core::constants::{CELL_SIZE, DEFAULT_BACKGROUND, DEFAULT_GRID_COLOR, MAX_SURFACE_EDGE, NUM_COLS, NUM_ROWS};
use crate::core::error::ConfigError;

/// Immutable layout of the canvas: cell size, grid dimensions and the two
/// colors that make up a blank grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    cell_size: u32,
    rows: u32,
    cols: u32,
    background: Rgba,
    grid_color: Rgba,
}

impl GridConfig {
    pub fn new(cell_size: u32, rows: u32, cols: u32, background: Rgba, grid_color: Rgba) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if cols == 0 {
            return Err(ConfigError::ZeroCols);
        }

        let width = cols as u64 * cell_size as u64;
        let height = rows as u64 * cell_size as u64;
        if width > MAX_SURFACE_EDGE as u64 || height > MAX_SURFACE_EDGE as u64 {
            return Err(ConfigError::SurfaceTooLarge {
                width,
                height,
                max: MAX_SURFACE_EDGE,
            });
        }

        Ok(Self {
            cell_size,
            rows,
            cols,
            background,
            grid_color,
        })
    }

    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn grid_color(&self) -> Rgba {
        self.grid_color
    }

    /// Surface width in pixels (cols × cell size)
    pub fn width(&self) -> u32 {
        self.cols * self.cell_size
    }

    /// Surface height in pixels (rows × cell size)
    pub fn height(&self) -> u32 {
        self.rows * self.cell_size
    }

    /// Map a surface-relative point to the pixel origin of the cell under it.
    ///
    /// Points outside `[0, width) × [0, height)` (and NaN) have no cell and
    /// return `None`; they are never clamped or wrapped onto the grid.
    pub fn point_to_cell(&self, px: f32, py: f32) -> Option<(u32, u32)> {
        let inside_x = px >= 0.0 && px < self.width() as f32;
        let inside_y = py >= 0.0 && py < self.height() as f32;
        if !inside_x || !inside_y {
            return None;
        }

        let (col, row) = grid_position_to_cell_coords(px, py, self.cell_size);
        Some(self.cell_origin(row, col))
    }

    /// Pixel origin of the cell at `(row, col)`
    pub fn cell_origin(&self, row: u32, col: u32) -> (u32, u32) {
        (col * self.cell_size, row * self.cell_size)
    }

    pub fn contains_cell(&self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            rows: NUM_ROWS,
            cols: NUM_COLS,
            background: Rgba::from_name(DEFAULT_BACKGROUND).unwrap_or_default(),
            grid_color: Rgba::from_name(DEFAULT_GRID_COLOR).unwrap_or_default(),
        }
    }
}

/// Column/row of the cell containing a non-negative point
fn grid_position_to_cell_coords(px: f32, py: f32, cell_size: u32) -> (u32, u32) {
    let size = cell_size as f32;
    ((px / size).floor() as u32, (py / size).floor() as u32)
}
