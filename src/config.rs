use clap::Parser;

use crate::core::*;

#[derive(Parser, Debug)]
#[command(version, about = "Paint cells on a fixed grid with a preset palette", long_about = None)]
pub struct Args {
    /// Edge length of one cell in pixels
    #[arg(long, default_value_t = CELL_SIZE)]
    pub cell_size: u32,

    /// Number of grid rows
    #[arg(long, default_value_t = NUM_ROWS)]
    pub rows: u32,

    /// Number of grid columns
    #[arg(long, default_value_t = NUM_COLS)]
    pub cols: u32,

    /// Comma separated paint colors (names or #rgb / #rrggbb)
    #[arg(long, value_delimiter = ',', default_value = "black,red,blue")]
    pub palette: Vec<ColorSpec>,

    /// Index of the palette color selected at startup
    #[arg(long, default_value_t = 0)]
    pub default_color: usize,

    /// Color of empty cells
    #[arg(long, default_value = DEFAULT_BACKGROUND)]
    pub background: ColorSpec,

    /// Color of the separator lines
    #[arg(long, default_value = DEFAULT_GRID_COLOR)]
    pub grid_color: ColorSpec,
}

/// Validated settings the canvas is built from
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasConfig {
    pub grid: GridConfig,
    pub palette: Palette,
}

impl Args {
    pub fn into_config(self) -> Result<CanvasConfig, ConfigError> {
        let grid = GridConfig::new(
            self.cell_size,
            self.rows,
            self.cols,
            self.background.rgba(),
            self.grid_color.rgba(),
        )?;
        let palette = Palette::new(self.palette, self.default_color)?;
        Ok(CanvasConfig { grid, palette })
    }
}
