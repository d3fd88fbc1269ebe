use std::fmt;
use std::str::FromStr;

use crate::core::error::ColorParseError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Look up a CSS-style color name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, rgba)| *rgba)
    }

    /// Parse `#rgb` or `#rrggbb`
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(hex.to_string());
        let digits = hex.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                // #abc expands to #aabbcc
                let r = channel(digits[0..1].repeat(2).as_str())?;
                let g = channel(digits[1..2].repeat(2).as_str())?;
                let b = channel(digits[2..3].repeat(2).as_str())?;
                Ok(Self::rgb(r, g, b))
            }
            6 => Ok(Self::rgb(channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?)),
            _ => Err(invalid()),
        }
    }
}

/// Named colors accepted on the command line and in palettes
pub const NAMED_COLORS: [(&str, Rgba); 21] = [
    ("black", Rgba::rgb(0, 0, 0)),
    ("white", Rgba::rgb(255, 255, 255)),
    ("gray", Rgba::rgb(128, 128, 128)),
    ("grey", Rgba::rgb(128, 128, 128)),
    ("silver", Rgba::rgb(192, 192, 192)),
    ("red", Rgba::rgb(255, 0, 0)),
    ("maroon", Rgba::rgb(128, 0, 0)),
    ("orange", Rgba::rgb(255, 165, 0)),
    ("yellow", Rgba::rgb(255, 255, 0)),
    ("olive", Rgba::rgb(128, 128, 0)),
    ("lime", Rgba::rgb(0, 255, 0)),
    ("green", Rgba::rgb(0, 128, 0)),
    ("teal", Rgba::rgb(0, 128, 128)),
    ("aqua", Rgba::rgb(0, 255, 255)),
    ("cyan", Rgba::rgb(0, 255, 255)),
    ("blue", Rgba::rgb(0, 0, 255)),
    ("navy", Rgba::rgb(0, 0, 128)),
    ("purple", Rgba::rgb(128, 0, 128)),
    ("fuchsia", Rgba::rgb(255, 0, 255)),
    ("magenta", Rgba::rgb(255, 0, 255)),
    ("pink", Rgba::rgb(255, 192, 203)),
];

/// A palette entry: the specifier the user wrote plus its resolved value.
///
/// Two entries are the same color only when their specifiers match, so `red`
/// and `#ff0000` stay distinct palette members even though they paint alike.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorSpec {
    spec: String,
    rgba: Rgba,
}

impl ColorSpec {
    pub fn spec(&self) -> &str {
        &self.spec
    }

    pub fn rgba(&self) -> Rgba {
        self.rgba
    }
}

impl FromStr for ColorSpec {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim().to_ascii_lowercase();
        if spec.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let rgba = if spec.starts_with('#') {
            Rgba::from_hex(&spec)?
        } else {
            Rgba::from_name(&spec).ok_or_else(|| ColorParseError::UnknownName(spec.clone()))?
        };
        Ok(Self { spec, rgba })
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}
