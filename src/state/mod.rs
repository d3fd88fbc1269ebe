//! Canvas State Module
//!
//! This module holds the mutable paint state (selected palette entry, the
//! pressed flag and the cells already painted by the current stroke) and the
//! GridCanvas component that owns it together with its drawing surface.

mod grid_canvas;

pub use grid_canvas::GridCanvas;

use std::collections::HashSet;

/// Mutable state that lives as long as the canvas
#[derive(Debug, Default)]
pub struct PaintState {
    /// Index of the selected color in the palette
    pub selected: usize,
    /// True between a press and the matching release
    pub is_drawing: bool,
    /// Cell origins painted since the stroke started
    pub stroke_cells: HashSet<(u32, u32)>,
}

impl PaintState {
    pub fn new(selected: usize) -> Self {
        PaintState {
            selected,
            ..Default::default()
        }
    }

    pub fn start_stroke(&mut self) {
        self.is_drawing = true;
        self.stroke_cells.clear();
    }

    pub fn end_stroke(&mut self) {
        self.is_drawing = false;
        self.stroke_cells.clear();
    }
}
