use macroquad::prelude::*;

use crate::rendering::surface::Surface;
use crate::state::GridCanvas;

/// Outline the cell under the mouse in the selected color
pub fn draw_cell_cursor<S: Surface>(canvas: &GridCanvas<S>, screen_mouse: Vec2) {
    let Some((x, y)) = canvas.point_to_cell(canvas.to_surface_point(screen_mouse)) else {
        return;
    };
    let origin = canvas.screen_origin();
    let size = canvas.grid().cell_size() as f32;
    let color = canvas.selected_color().rgba().to_mq_color();

    draw_rectangle_lines(origin.x + x as f32, origin.y + y as f32, size, size, 2.0, color);
    // Small cursor dot
    draw_circle(screen_mouse.x, screen_mouse.y, 3.0, Color::from_rgba(0, 0, 0, 150));
}
