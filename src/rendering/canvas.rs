use macroquad::prelude::*;

use crate::rendering::surface::{PixelSurface, Surface};

/// GPU copy of the pixel surface.
/// The texture is only re-uploaded when the surface reports changes.
pub struct CanvasRenderer {
    texture: Texture2D,
    width: u32,
    height: u32,
}

impl CanvasRenderer {
    pub fn new(surface: &mut PixelSurface) -> Self {
        let width = surface.width();
        let height = surface.height();
        let texture = Texture2D::from_image(&to_image(surface));
        texture.set_filter(FilterMode::Nearest); // Crisp pixel-perfect rendering
        surface.take_dirty();

        CanvasRenderer { texture, width, height }
    }

    /// Upload the surface if anything was drawn since the last frame
    pub fn update(&mut self, surface: &mut PixelSurface) {
        if surface.take_dirty() {
            self.texture.update(&to_image(surface));
        }
    }

    /// Draw the texture with its top-left corner at `origin`
    pub fn draw(&self, origin: Vec2) {
        let params = DrawTextureParams {
            dest_size: Some(vec2(self.width as f32, self.height as f32)),
            ..Default::default()
        };
        draw_texture_ex(&self.texture, origin.x, origin.y, WHITE, params);
    }
}

fn to_image(surface: &PixelSurface) -> Image {
    Image {
        bytes: surface.as_bytes().to_vec(),
        width: surface.width() as u16,
        height: surface.height() as u16,
    }
}
