use macroquad::prelude::*;

use crate::config::CanvasConfig;
use crate::input::{dispatch, InputTracker};
use crate::rendering::{draw_cell_cursor, CanvasRenderer};
use crate::state::GridCanvas;
use crate::ui::{self, BUTTON_HEIGHT, BUTTON_WIDTH, SWATCH_MARGIN, SWATCH_SIZE};

pub const WINDOW_TITLE: &str = "Pixel Painter";

const PADDING: f32 = 20.0;
const TITLE_HEIGHT: f32 = 40.0;
const CONTROLS_HEIGHT: f32 = SWATCH_SIZE + 2.0 * SWATCH_MARGIN;
const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Window sized so title, controls and the whole canvas fit
pub fn window_conf(config: &CanvasConfig) -> Conf {
    let controls_width = ui::palette_width(config.palette.len()) + PADDING + BUTTON_WIDTH;
    let width = (config.grid.width() as f32).max(controls_width).max(MIN_WINDOW_WIDTH) + 2.0 * PADDING;
    let height = canvas_top() + config.grid.height() as f32 + PADDING;

    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: width as i32,
        window_height: height as i32,
        high_dpi: false,
        ..Default::default()
    }
}

fn canvas_top() -> f32 {
    PADDING + TITLE_HEIGHT + CONTROLS_HEIGHT + PADDING
}

pub async fn run(config: CanvasConfig) {
    // Touches are handled separately, don't let them double as mouse clicks
    simulate_mouse_with_touch(false);

    let mut canvas = GridCanvas::with_pixel_surface(config.grid, config.palette);
    let mut canvas_renderer = CanvasRenderer::new(canvas.surface_mut());
    let mut input = InputTracker::new();

    loop {
        clear_background(Color::from_rgba(40, 44, 52, 255));

        // Keep the canvas horizontally centered when the window is resized
        let canvas_x = ((screen_width() - canvas.grid().width() as f32) / 2.0).max(PADDING).floor();
        canvas.set_screen_origin(vec2(canvas_x, canvas_top()));

        draw_text(WINDOW_TITLE, PADDING, PADDING + 28.0, 36.0, WHITE);

        let controls_y = PADDING + TITLE_HEIGHT;
        let clear_x = PADDING + ui::palette_width(canvas.palette().len()) + PADDING;
        let clear_y = controls_y + (CONTROLS_HEIGHT - BUTTON_HEIGHT) / 2.0;

        // Controls and canvas see the same events, so taps work like clicks
        let events = input.poll();
        ui::handle_palette_presses(&mut canvas, PADDING, controls_y, &events);
        ui::handle_clear_presses(&mut canvas, clear_x, clear_y, &events);
        dispatch(&mut canvas, &events);

        ui::render_palette(&canvas, PADDING, controls_y);
        ui::render_clear_button(clear_x, clear_y);

        canvas_renderer.update(canvas.surface_mut());
        canvas_renderer.draw(canvas.screen_origin());
        draw_cell_cursor(&canvas, Vec2::from(mouse_position()));

        next_frame().await
    }
}
