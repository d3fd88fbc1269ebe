use macroquad::math::{Rect, Vec2};

use crate::core::*;
use crate::rendering::grid::render_blank_grid;
use crate::rendering::surface::{PixelSurface, Surface};
use crate::state::PaintState;

/// A fixed grid of square cells painted with colors from a preset palette.
///
/// The canvas owns its surface. Painted cells exist only as pixels on that
/// surface; there is no separate cell model behind it.
pub struct GridCanvas<S: Surface> {
    grid: GridConfig,
    palette: Palette,
    surface: S,
    paint: PaintState,
    /// Top-left corner of the surface in screen space
    screen_origin: Vec2,
}

impl GridCanvas<PixelSurface> {
    /// Build a canvas backed by a fresh in-memory surface sized to the grid
    pub fn with_pixel_surface(grid: GridConfig, palette: Palette) -> Self {
        let surface = PixelSurface::new(grid.width(), grid.height());
        Self::build(grid, palette, surface)
    }
}

impl<S: Surface> GridCanvas<S> {
    /// Take ownership of `surface` and paint the blank grid onto it
    pub fn new(grid: GridConfig, palette: Palette, surface: S) -> Result<Self, ConfigError> {
        if surface.width() != grid.width() || surface.height() != grid.height() {
            return Err(ConfigError::SurfaceMismatch {
                width: grid.width(),
                height: grid.height(),
                actual_width: surface.width(),
                actual_height: surface.height(),
            });
        }
        Ok(Self::build(grid, palette, surface))
    }

    fn build(grid: GridConfig, palette: Palette, surface: S) -> Self {
        let mut canvas = GridCanvas {
            grid,
            paint: PaintState::new(palette.default_index()),
            palette,
            surface,
            screen_origin: Vec2::ZERO,
        };
        canvas.render_blank();
        log::info!(
            "Canvas ready: {}x{} cells of {}px, palette of {}",
            canvas.grid.cols(),
            canvas.grid.rows(),
            canvas.grid.cell_size(),
            canvas.palette.len()
        );
        canvas
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_drawing(&self) -> bool {
        self.paint.is_drawing
    }

    pub fn selected_index(&self) -> usize {
        self.paint.selected
    }

    pub fn selected_color(&self) -> &ColorSpec {
        // `selected` is only ever set to a valid palette index
        &self.palette.colors()[self.paint.selected]
    }

    pub fn screen_origin(&self) -> Vec2 {
        self.screen_origin
    }

    /// Move the surface on screen; called by the host when its layout changes
    pub fn set_screen_origin(&mut self, origin: Vec2) {
        self.screen_origin = origin;
    }

    /// On-screen bounding rectangle of the surface
    pub fn screen_rect(&self) -> Rect {
        Rect::new(
            self.screen_origin.x,
            self.screen_origin.y,
            self.grid.width() as f32,
            self.grid.height() as f32,
        )
    }

    /// Select a palette color. Colors outside the palette leave the state unchanged.
    pub fn select_color(&mut self, color: &ColorSpec) -> Result<(), CanvasError> {
        match self.palette.position(color) {
            Some(index) => self.select_index(index),
            None => {
                log::warn!("Rejected color '{}': not in palette", color);
                Err(CanvasError::ColorNotInPalette(color.spec().to_string()))
            }
        }
    }

    pub fn select_index(&mut self, index: usize) -> Result<(), CanvasError> {
        if index >= self.palette.len() {
            return Err(CanvasError::PaletteIndexOutOfRange {
                index,
                len: self.palette.len(),
            });
        }
        if index != self.paint.selected {
            self.paint.selected = index;
            // Cells of the running stroke may be painted again in the new color
            self.paint.stroke_cells.clear();
            log::info!("Selected color '{}'", self.selected_color());
        }
        Ok(())
    }

    /// Begin a stroke and paint the cell under the screen point
    pub fn on_press_start(&mut self, screen: Vec2) {
        self.paint.start_stroke();
        self.paint_at(self.to_surface_point(screen));
    }

    /// Paint the cell under the screen point while a stroke is active
    pub fn on_move(&mut self, screen: Vec2) {
        if !self.paint.is_drawing {
            return;
        }
        self.paint_at(self.to_surface_point(screen));
    }

    pub fn on_press_end(&mut self) {
        self.paint.end_stroke();
    }

    /// Convert a screen point into surface-relative coordinates
    pub fn to_surface_point(&self, screen: Vec2) -> Vec2 {
        screen - self.screen_origin
    }

    /// Pixel origin of the cell under a surface-relative point
    pub fn point_to_cell(&self, point: Vec2) -> Option<(u32, u32)> {
        self.grid.point_to_cell(point.x, point.y)
    }

    /// Fill the cell under a surface-relative point with the selected color
    pub fn paint_at(&mut self, point: Vec2) {
        let Some(origin) = self.point_to_cell(point) else {
            log::trace!("Ignoring paint outside the surface at ({}, {})", point.x, point.y);
            return;
        };
        if !self.surface.is_available() {
            log::debug!("Surface unavailable, skipping paint");
            return;
        }
        if !self.paint.stroke_cells.insert(origin) {
            return;
        }

        let size = self.grid.cell_size();
        let color = self.selected_color().rgba();
        self.surface.fill_rect(origin.0, origin.1, size, size, color);
        log::debug!("Painted cell at ({}, {}) with '{}'", origin.0, origin.1, self.selected_color());
    }

    /// Reset the surface to the blank grid
    pub fn clear(&mut self) {
        self.paint.stroke_cells.clear();
        if self.render_blank() {
            log::info!("Canvas cleared");
        }
    }

    /// Current color of the cell at `(row, col)`, read from the surface.
    ///
    /// Samples the cell centre, which never lies on a separator once cells are
    /// at least 2 pixels wide. With 1-pixel cells the separators cover every
    /// blank cell outside row 0 and column 0, so those report the grid color
    /// until painted; that is what the surface shows.
    pub fn cell_color(&self, row: u32, col: u32) -> Option<Rgba> {
        if !self.grid.contains_cell(row, col) {
            return None;
        }
        let (x, y) = self.grid.cell_origin(row, col);
        let half = self.grid.cell_size() / 2;
        self.surface.pixel(x + half, y + half)
    }

    fn render_blank(&mut self) -> bool {
        if !self.surface.is_available() {
            log::debug!("Surface unavailable, skipping blank grid");
            return false;
        }
        render_blank_grid(&mut self.surface, &self.grid);
        true
    }
}
