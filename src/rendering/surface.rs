use crate::core::color::Rgba;

/// A 2D paint target the canvas draws onto.
///
/// Only rectangle fills and 1-pixel line strokes are needed to render the
/// grid and its cells. Pixels outside the surface are silently clipped.
pub trait Surface {
    /// Width of the drawable area in pixels
    fn width(&self) -> u32;

    /// Height of the drawable area in pixels
    fn height(&self) -> u32;

    /// Whether drawing operations can currently be carried out
    fn is_available(&self) -> bool {
        true
    }

    /// Fill a `w × h` rectangle with its top-left corner at `(x, y)`
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba);

    /// Stroke a 1-pixel line from `from` to `to`, both endpoints included
    fn stroke_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba);

    /// Current color of a pixel, `None` outside the surface
    fn pixel(&self, x: u32, y: u32) -> Option<Rgba>;
}

/// In-memory RGBA8 surface, uploaded to a texture by the renderer
#[derive(Clone, Debug)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
    dirty: bool,
}

impl PixelSurface {
    /// Create a fully transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        PixelSurface {
            width,
            height,
            bytes: vec![0; width as usize * height as usize * 4],
            dirty: true,
        }
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns whether anything was drawn since the last call and resets the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let i = self.offset(x as u32, y as u32);
        self.bytes[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        if x >= x_end || y >= y_end {
            return;
        }

        let px = [color.r, color.g, color.b, color.a];
        for row in y..y_end {
            let start = self.offset(x, row);
            let end = self.offset(x_end, row);
            for chunk in self.bytes[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
        self.dirty = true;
    }

    fn stroke_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba) {
        for (x, y) in bresenham(from, to) {
            self.put_pixel(x, y, color);
        }
        self.dirty = true;
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        let b = &self.bytes[i..i + 4];
        Some(Rgba::rgba(b[0], b[1], b[2], b[3]))
    }
}

/// Bresenham line algorithm - returns all pixels between two points
fn bresenham(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        points.push((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }

    points
}
