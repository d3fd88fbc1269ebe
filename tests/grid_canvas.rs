//! Painting, selection and clearing on a GridCanvas backed by pixel surfaces

use macroquad::math::{vec2, Vec2};
use macroquad::input::{Touch, TouchPhase};
use pixel_painter::input::{dispatch, InputTracker, PointerEvent};
use pixel_painter::ui::{handle_palette_presses, palette::swatch_rect};
use pixel_painter::{CanvasError, ColorSpec, ConfigError, GridCanvas, GridConfig, Palette, PixelSurface, Rgba, Surface};

const WHITE: Rgba = Rgba::rgb(255, 255, 255);
const GRAY: Rgba = Rgba::rgb(128, 128, 128);
const BLACK: Rgba = Rgba::rgb(0, 0, 0);
const RED: Rgba = Rgba::rgb(255, 0, 0);
const BLUE: Rgba = Rgba::rgb(0, 0, 255);

/// Pixel surface that counts fills and can pretend to be unavailable
struct TestSurface {
    inner: PixelSurface,
    fills: usize,
    available: bool,
}

impl TestSurface {
    fn new(width: u32, height: u32) -> Self {
        TestSurface {
            inner: PixelSurface::new(width, height),
            fills: 0,
            available: true,
        }
    }
}

impl Surface for TestSurface {
    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        self.fills += 1;
        self.inner.fill_rect(x, y, w, h, color);
    }

    fn stroke_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba) {
        self.inner.stroke_line(from, to, color);
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.inner.pixel(x, y)
    }
}

fn spec(s: &str) -> ColorSpec {
    s.parse().unwrap()
}

fn canvas() -> GridCanvas<PixelSurface> {
    GridCanvas::with_pixel_surface(GridConfig::default(), Palette::default())
}

fn test_canvas() -> GridCanvas<TestSurface> {
    let grid = GridConfig::default();
    let surface = TestSurface::new(grid.width(), grid.height());
    let mut canvas = GridCanvas::new(grid, Palette::default(), surface).unwrap();
    canvas.surface_mut().fills = 0;
    canvas
}

fn assert_cell(canvas: &GridCanvas<PixelSurface>, origin: (u32, u32), color: Rgba) {
    let size = canvas.grid().cell_size();
    for y in origin.1..origin.1 + size {
        for x in origin.0..origin.0 + size {
            assert_eq!(canvas.surface().pixel(x, y), Some(color), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_initial_state() {
    let canvas = canvas();
    assert_eq!(canvas.selected_color().spec(), "black");
    assert!(!canvas.is_drawing());
    assert_eq!(canvas.surface().width(), 400);
    assert_eq!(canvas.surface().height(), 400);
    assert_eq!(canvas.cell_color(0, 0), Some(WHITE));
    assert_eq!(canvas.surface().pixel(5, 20), Some(GRAY));
}

#[test]
fn test_surface_size_must_match_grid() {
    let grid = GridConfig::default();
    let result = GridCanvas::new(grid, Palette::default(), PixelSurface::new(100, 400));
    assert!(matches!(result, Err(ConfigError::SurfaceMismatch { .. })));
}

#[test]
fn test_every_palette_color_paints_exactly() {
    let mut canvas = canvas();
    let colors: Vec<ColorSpec> = canvas.palette().colors().to_vec();

    for (i, color) in colors.iter().enumerate() {
        canvas.select_color(color).unwrap();
        let point = vec2(i as f32 * 20.0 + 5.0, 5.0);
        canvas.on_press_start(point);
        canvas.on_press_end();
        assert_cell(&canvas, (i as u32 * 20, 0), color.rgba());
        assert_eq!(canvas.cell_color(0, i as u32), Some(color.rgba()));
    }
}

#[test]
fn test_select_color_outside_palette_rejected() {
    let mut canvas = canvas();
    canvas.select_color(&spec("red")).unwrap();

    let err = canvas.select_color(&spec("green")).unwrap_err();
    assert_eq!(err, CanvasError::ColorNotInPalette("green".to_string()));
    assert_eq!(canvas.selected_color().spec(), "red");

    assert!(canvas.select_color(&spec("#ff0000")).is_err());
    assert_eq!(
        canvas.select_index(3),
        Err(CanvasError::PaletteIndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(canvas.selected_index(), 1);
}

#[test]
fn test_select_color_does_not_paint() {
    let mut canvas = canvas();
    let before = canvas.surface().as_bytes().to_vec();
    canvas.select_color(&spec("blue")).unwrap();
    assert_eq!(canvas.surface().as_bytes(), &before[..]);
}

#[test]
fn test_out_of_bounds_points_never_paint() {
    let mut canvas = canvas();
    let before = canvas.surface().as_bytes().to_vec();

    for point in [vec2(-1.0, 10.0), vec2(10.0, -0.5), vec2(400.0, 10.0), vec2(10.0, 400.0), vec2(1e6, 1e6)] {
        canvas.on_press_start(point);
        canvas.on_move(point);
        canvas.paint_at(point);
        canvas.on_press_end();
    }
    assert_eq!(canvas.surface().as_bytes(), &before[..]);
}

#[test]
fn test_move_without_press_paints_nothing() {
    let mut canvas = test_canvas();
    canvas.on_move(vec2(50.0, 50.0));
    assert_eq!(canvas.surface().fills, 0);

    canvas.on_press_start(vec2(50.0, 50.0));
    canvas.on_press_end();
    canvas.on_move(vec2(90.0, 90.0));
    assert_eq!(canvas.surface().fills, 1);
    assert_eq!(canvas.cell_color(4, 4), Some(WHITE));
}

#[test]
fn test_stroke_paints_each_cell_once() {
    let mut canvas = test_canvas();

    canvas.on_press_start(vec2(5.0, 5.0));
    assert!(canvas.is_drawing());
    canvas.on_move(vec2(15.0, 15.0)); // same cell
    canvas.on_move(vec2(25.0, 5.0)); // next cell
    canvas.on_move(vec2(5.0, 5.0)); // back again
    canvas.on_move(vec2(45.0, 5.0));
    canvas.on_press_end();
    assert!(!canvas.is_drawing());

    assert_eq!(canvas.surface().fills, 3);
    for col in 0..3 {
        assert_eq!(canvas.cell_color(0, col), Some(BLACK));
    }
    assert_eq!(canvas.cell_color(0, 3), Some(WHITE));

    // A new stroke starts fresh
    canvas.on_press_start(vec2(5.0, 5.0));
    canvas.on_press_end();
    assert_eq!(canvas.surface().fills, 4);
}

#[test]
fn test_stroke_uses_then_current_color() {
    let mut canvas = test_canvas();

    canvas.on_press_start(vec2(5.0, 5.0));
    canvas.select_color(&spec("red")).unwrap();
    canvas.on_move(vec2(25.0, 5.0));
    canvas.select_color(&spec("blue")).unwrap();
    canvas.on_move(vec2(5.0, 5.0));
    canvas.on_press_end();

    assert_eq!(canvas.cell_color(0, 0), Some(BLUE));
    assert_eq!(canvas.cell_color(0, 1), Some(RED));
}

#[test]
fn test_last_write_wins() {
    let mut canvas = canvas();
    canvas.on_press_start(vec2(30.0, 30.0));
    canvas.on_press_end();

    canvas.select_color(&spec("red")).unwrap();
    canvas.on_press_start(vec2(30.0, 30.0));
    canvas.on_press_end();
    assert_cell(&canvas, (20, 20), RED);

    let once = canvas.surface().as_bytes().to_vec();
    canvas.on_press_start(vec2(30.0, 30.0));
    canvas.on_press_end();
    assert_eq!(canvas.surface().as_bytes(), &once[..]);
}

#[test]
fn test_screen_origin_offset() {
    let mut canvas = canvas();
    canvas.set_screen_origin(vec2(100.0, 50.0));

    canvas.on_press_start(vec2(125.0, 95.0));
    canvas.on_press_end();
    assert_cell(&canvas, (20, 40), BLACK);

    // Left of the surface on screen, even though x is positive
    let before = canvas.surface().as_bytes().to_vec();
    canvas.on_press_start(vec2(99.0, 95.0));
    canvas.on_press_end();
    assert_eq!(canvas.surface().as_bytes(), &before[..]);
}

#[test]
fn test_clear_restores_initial_surface() {
    let mut canvas = canvas();
    let initial = canvas.surface().as_bytes().to_vec();

    canvas.select_color(&spec("blue")).unwrap();
    canvas.on_press_start(vec2(0.0, 0.0));
    for i in 0..400 {
        canvas.on_move(vec2(i as f32, (i * 7 % 400) as f32));
    }
    canvas.on_press_end();
    assert_ne!(canvas.surface().as_bytes(), &initial[..]);

    canvas.clear();
    assert_eq!(canvas.surface().as_bytes(), &initial[..]);
    assert_eq!(canvas.selected_color().spec(), "blue");
}

#[test]
fn test_scenario_paint_then_clear() {
    let mut canvas = canvas();

    canvas.on_press_start(vec2(25.0, 45.0));
    canvas.on_press_end();
    assert_cell(&canvas, (20, 40), BLACK);
    assert_eq!(canvas.cell_color(2, 1), Some(BLACK));

    canvas.clear();
    assert_eq!(canvas.cell_color(2, 1), Some(WHITE));
    for k in 1..20u32 {
        let line = k * 20;
        assert_eq!(canvas.surface().pixel(7, line), Some(GRAY), "row line y = {line}");
        assert_eq!(canvas.surface().pixel(line, 7), Some(GRAY), "column line x = {line}");
    }
    assert_eq!(canvas.surface().pixel(7, 0), Some(WHITE));
    assert_eq!(canvas.surface().pixel(0, 7), Some(WHITE));
}

#[test]
fn test_clear_mid_stroke_allows_repaint() {
    let mut canvas = canvas();
    canvas.on_press_start(vec2(5.0, 5.0));
    canvas.clear();
    canvas.on_move(vec2(6.0, 6.0));
    canvas.on_press_end();
    assert_eq!(canvas.cell_color(0, 0), Some(BLACK));
}

#[test]
fn test_unavailable_surface_skips_operations() {
    let mut canvas = test_canvas();
    canvas.surface_mut().available = false;

    canvas.on_press_start(vec2(5.0, 5.0));
    canvas.on_move(vec2(25.0, 5.0));
    canvas.clear();
    canvas.on_press_end();
    assert_eq!(canvas.surface().fills, 0);
    assert!(!canvas.is_drawing());

    canvas.surface_mut().available = true;
    canvas.on_press_start(vec2(5.0, 5.0));
    canvas.on_press_end();
    assert_eq!(canvas.surface().fills, 1);
}

#[test]
fn test_cell_color_out_of_range() {
    let canvas = canvas();
    assert_eq!(canvas.cell_color(20, 0), None);
    assert_eq!(canvas.cell_color(0, 20), None);
}

#[test]
fn test_cell_color_with_one_pixel_cells() {
    let grid = GridConfig::new(1, 4, 4, WHITE, GRAY).unwrap();
    let mut canvas = GridCanvas::with_pixel_surface(grid, Palette::default());

    assert_eq!(canvas.cell_color(0, 0), Some(WHITE));
    assert_eq!(canvas.cell_color(0, 2), Some(GRAY));
    assert_eq!(canvas.cell_color(2, 2), Some(GRAY));

    canvas.on_press_start(vec2(2.5, 2.5));
    canvas.on_press_end();
    assert_eq!(canvas.cell_color(2, 2), Some(BLACK));
}

#[test]
fn test_tap_on_swatch_selects_color() {
    let mut canvas = canvas();
    canvas.set_screen_origin(vec2(20.0, 120.0));
    let mut tracker = InputTracker::new();

    // Mouse emulation is off for touches, so only the touch events carry the tap
    let swatch = swatch_rect(20.0, 60.0, 1);
    let tap = Touch {
        id: 9,
        phase: TouchPhase::Started,
        position: vec2(swatch.x + 5.0, swatch.y + 5.0),
    };
    let events = tracker.touch_events(&[tap]);
    assert!(handle_palette_presses(&mut canvas, 20.0, 60.0, &events));
    dispatch(&mut canvas, &events);

    assert_eq!(canvas.selected_color().spec(), "red");
    assert!(!canvas.is_drawing());
}

#[test]
fn test_dispatch_requires_press_on_surface() {
    let mut canvas = canvas();
    canvas.set_screen_origin(vec2(20.0, 120.0));

    // Press on the controls above the surface, then drag onto it
    let events = [
        PointerEvent::PressStart(vec2(50.0, 60.0)),
        PointerEvent::Move(vec2(50.0, 150.0)),
        PointerEvent::PressEnd,
    ];
    dispatch(&mut canvas, &events);
    assert_eq!(canvas.cell_color(1, 1), Some(WHITE));
    assert!(!canvas.is_drawing());

    let events = [
        PointerEvent::PressStart(vec2(50.0, 150.0)),
        PointerEvent::Move(vec2(90.0, 150.0)),
        PointerEvent::Move(Vec2::new(5000.0, 5000.0)),
        PointerEvent::PressEnd,
    ];
    dispatch(&mut canvas, &events);
    assert_eq!(canvas.cell_color(1, 1), Some(BLACK));
    assert_eq!(canvas.cell_color(1, 3), Some(BLACK));
    assert!(!canvas.is_drawing());
}
