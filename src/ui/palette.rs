use macroquad::prelude::*;

use crate::input::PointerEvent;
use crate::rendering::surface::Surface;
use crate::state::GridCanvas;

pub const SWATCH_SIZE: f32 = 30.0;
pub const SWATCH_MARGIN: f32 = 5.0;

/// Width taken up by a row of `count` swatches
pub fn palette_width(count: usize) -> f32 {
    count as f32 * (SWATCH_SIZE + 2.0 * SWATCH_MARGIN)
}

/// Screen rectangle of swatch `index` in a row starting at `(x, y)`
pub fn swatch_rect(x: f32, y: f32, index: usize) -> Rect {
    let sx = x + SWATCH_MARGIN + index as f32 * (SWATCH_SIZE + 2.0 * SWATCH_MARGIN);
    Rect::new(sx, y + SWATCH_MARGIN, SWATCH_SIZE, SWATCH_SIZE)
}

/// Select the swatch hit by a press this frame, mouse click or touch alike.
/// Returns whether the selection was changed by a press.
pub fn handle_palette_presses<S: Surface>(canvas: &mut GridCanvas<S>, x: f32, y: f32, events: &[PointerEvent]) -> bool {
    let count = canvas.palette().len();
    let hit = events.iter().rev().find_map(|event| match *event {
        PointerEvent::PressStart(pos) => (0..count).find(|&i| swatch_rect(x, y, i).contains(pos)),
        _ => None,
    });

    let Some(index) = hit else {
        return false;
    };
    match canvas.select_index(index) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("{}", err);
            false
        }
    }
}

/// Draw one swatch per palette color.
/// The selected swatch gets a white ring with a dark outline.
pub fn render_palette<S: Surface>(canvas: &GridCanvas<S>, x: f32, y: f32) {
    for (i, color) in canvas.palette().colors().iter().enumerate() {
        let rect = swatch_rect(x, y, i);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color.rgba().to_mq_color());

        if i == canvas.selected_index() {
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 4.0, WHITE);
            draw_rectangle_lines(rect.x - 2.0, rect.y - 2.0, rect.w + 4.0, rect.h + 4.0, 2.0, BLACK);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridConfig, Palette};

    fn canvas() -> GridCanvas<crate::rendering::PixelSurface> {
        GridCanvas::with_pixel_surface(GridConfig::default(), Palette::default())
    }

    #[test]
    fn test_press_on_swatch_selects_color() {
        let mut canvas = canvas();
        let rect = swatch_rect(20.0, 60.0, 2);
        let events = [PointerEvent::PressStart(vec2(rect.x + 5.0, rect.y + 5.0))];

        assert!(handle_palette_presses(&mut canvas, 20.0, 60.0, &events));
        assert_eq!(canvas.selected_color().spec(), "blue");
    }

    #[test]
    fn test_press_between_swatches_ignored() {
        let mut canvas = canvas();
        let gap = swatch_rect(20.0, 60.0, 1).x - SWATCH_MARGIN;
        let events = [
            PointerEvent::PressStart(vec2(gap, 70.0)),
            PointerEvent::Move(swatch_rect(20.0, 60.0, 1).center()),
            PointerEvent::PressEnd,
        ];

        assert!(!handle_palette_presses(&mut canvas, 20.0, 60.0, &events));
        assert_eq!(canvas.selected_index(), 0);
    }
}
