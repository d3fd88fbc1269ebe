pub mod canvas;
pub mod cursor;
pub mod grid;
pub mod surface;

pub use canvas::CanvasRenderer;
pub use cursor::draw_cell_cursor;
pub use grid::render_blank_grid;
pub use surface::{PixelSurface, Surface};
