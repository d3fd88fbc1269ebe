use macroquad::prelude::*;

use crate::input::PointerEvent;
use crate::rendering::surface::Surface;
use crate::state::GridCanvas;

pub const BUTTON_WIDTH: f32 = 80.0;
pub const BUTTON_HEIGHT: f32 = 30.0;

pub fn draw_button(text: &str, rect: Rect, is_active: bool) {
    let color = if is_active { DARKGRAY } else { GRAY };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, BLACK);
    let text_size = measure_text(text, None, 20, 1.0);
    let text_x = rect.x + (rect.w - text_size.width) / 2.0;
    let text_y = rect.y + (rect.h + text_size.height) / 2.0;
    draw_text(text, text_x, text_y, 20.0, BLACK);
}

/// True if any press this frame landed inside `rect`
pub fn is_pressed(rect: Rect, events: &[PointerEvent]) -> bool {
    events
        .iter()
        .any(|event| matches!(*event, PointerEvent::PressStart(pos) if rect.contains(pos)))
}

pub fn clear_button_rect(x: f32, y: f32) -> Rect {
    Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT)
}

/// Reset control; clears the canvas when clicked or tapped
pub fn handle_clear_presses<S: Surface>(canvas: &mut GridCanvas<S>, x: f32, y: f32, events: &[PointerEvent]) -> bool {
    if !is_pressed(clear_button_rect(x, y), events) {
        return false;
    }
    canvas.clear();
    true
}

pub fn render_clear_button(x: f32, y: f32) {
    let rect = clear_button_rect(x, y);
    let hovered = rect.contains(Vec2::from(mouse_position()));
    draw_button("Clear", rect, hovered);
}
