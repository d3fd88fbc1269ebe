use crate::core::color::ColorSpec;
use crate::core::constants::DEFAULT_PALETTE;
use crate::core::error::ConfigError;

/// Fixed, ordered list of paint colors with one default entry
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<ColorSpec>,
    default_index: usize,
}

impl Palette {
    pub fn new(colors: Vec<ColorSpec>, default_index: usize) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if default_index >= colors.len() {
            return Err(ConfigError::DefaultColorOutOfRange {
                index: default_index,
                len: colors.len(),
            });
        }
        Ok(Self { colors, default_index })
    }

    pub fn colors(&self) -> &[ColorSpec] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn get(&self, index: usize) -> Option<&ColorSpec> {
        self.colors.get(index)
    }

    pub fn default_index(&self) -> usize {
        self.default_index
    }

    /// Index of the first entry with the same specifier
    pub fn position(&self, color: &ColorSpec) -> Option<usize> {
        self.colors.iter().position(|c| c == color)
    }

    pub fn contains(&self, color: &ColorSpec) -> bool {
        self.position(color).is_some()
    }
}

impl Default for Palette {
    fn default() -> Self {
        let colors = DEFAULT_PALETTE
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect();
        Self { colors, default_index: 0 }
    }
}
