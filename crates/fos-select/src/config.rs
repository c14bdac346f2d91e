//! Adapter Configuration

use crate::CaseSensitivity;

/// Font size reported when the host does not provide one
pub const DEFAULT_FONT_SIZE: i32 = 16;

/// Adapter configuration options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Case policy for attribute value, class and id comparisons.
    /// Tag and attribute names are always compared case-insensitively.
    pub value_case: CaseSensitivity,

    /// Default font size used when the host has none
    pub fallback_font_size: i32,
}

impl AdapterConfig {
    pub fn with_value_case(mut self, value_case: CaseSensitivity) -> Self {
        self.value_case = value_case;
        self
    }

    pub fn with_fallback_font_size(mut self, size: i32) -> Self {
        self.fallback_font_size = size;
        self
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            value_case: CaseSensitivity::Insensitive,
            fallback_font_size: DEFAULT_FONT_SIZE,
        }
    }
}
