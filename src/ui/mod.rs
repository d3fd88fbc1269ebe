pub mod buttons;
pub mod palette;

pub use buttons::{handle_clear_presses, render_clear_button, BUTTON_HEIGHT, BUTTON_WIDTH};
pub use palette::{handle_palette_presses, palette_width, render_palette, SWATCH_MARGIN, SWATCH_SIZE};
