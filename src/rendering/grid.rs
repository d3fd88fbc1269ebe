use crate::core::cell::GridConfig;
use crate::rendering::surface::Surface;

/// Paint a blank grid: background everywhere, then a 1-pixel separator at
/// every interior row and column boundary.
///
/// Both first-time setup and clearing go through here so the two always
/// produce the same picture.
pub fn render_blank_grid<S: Surface>(surface: &mut S, grid: &GridConfig) {
    let w = grid.width();
    let h = grid.height();
    let spacing = grid.cell_size() as i32;

    surface.fill_rect(0, 0, w, h, grid.background());

    // Horizontal lines
    for row in 1..grid.rows() as i32 {
        let y = row * spacing;
        surface.stroke_line((0, y), (w as i32, y), grid.grid_color());
    }

    // Vertical lines
    for col in 1..grid.cols() as i32 {
        let x = col * spacing;
        surface.stroke_line((x, 0), (x, h as i32), grid.grid_color());
    }
}
