//! Font size resolution
//!
//! Turns a specified `font-size` into an absolute size, relative to the
//! parent's size and the user-agent default.

/// Absolute-size keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSizeKeyword {
    XxSmall,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
}

impl FontSizeKeyword {
    /// Multiplier applied to the default font size
    pub fn factor(self) -> f32 {
        match self {
            Self::XxSmall => 0.5625,
            Self::XSmall => 0.625,
            Self::Small => 0.8125,
            Self::Medium => 1.0,
            Self::Large => 1.125,
            Self::XLarge => 1.5,
            Self::XxLarge => 2.0,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "xx-small" => Some(Self::XxSmall),
            "x-small" => Some(Self::XSmall),
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "x-large" => Some(Self::XLarge),
            "xx-large" => Some(Self::XxLarge),
            _ => None,
        }
    }
}

/// Specified font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSizeSpec {
    Keyword(FontSizeKeyword),
    Larger,
    Smaller,
    Em(f32),
    Ex(f32),
    Percent(f32),
    Absolute(f32),
}

/// Step used by `larger` / `smaller`
const RELATIVE_STEP: f32 = 1.2;

/// 1ex, in ems
const EX_PER_EM: f32 = 0.6;

/// Resolve a specified size to an absolute one.
///
/// Without a parent, the parent is taken to be `medium`, i.e. `default_size`.
pub fn resolve_font_size(spec: FontSizeSpec, parent: Option<f32>, default_size: i32) -> f32 {
    let default_size = default_size as f32;
    let parent = parent.unwrap_or(default_size * FontSizeKeyword::Medium.factor());

    match spec {
        FontSizeSpec::Keyword(keyword) => keyword.factor() * default_size,
        FontSizeSpec::Larger => parent * RELATIVE_STEP,
        FontSizeSpec::Smaller => parent / RELATIVE_STEP,
        FontSizeSpec::Em(value) => value * parent,
        FontSizeSpec::Ex(value) => value * parent * EX_PER_EM,
        FontSizeSpec::Percent(value) => value * parent / 100.0,
        FontSizeSpec::Absolute(value) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_keywords_scale_default() {
        assert!(close(resolve_font_size(FontSizeSpec::Keyword(FontSizeKeyword::Medium), None, 16), 16.0));
        assert!(close(resolve_font_size(FontSizeSpec::Keyword(FontSizeKeyword::XxSmall), None, 16), 9.0));
        assert!(close(resolve_font_size(FontSizeSpec::Keyword(FontSizeKeyword::XxLarge), Some(40.0), 16), 32.0));
    }

    #[test]
    fn test_relative_to_parent() {
        assert!(close(resolve_font_size(FontSizeSpec::Larger, Some(10.0), 16), 12.0));
        assert!(close(resolve_font_size(FontSizeSpec::Smaller, Some(12.0), 16), 10.0));
        assert!(close(resolve_font_size(FontSizeSpec::Em(2.0), Some(10.0), 16), 20.0));
        assert!(close(resolve_font_size(FontSizeSpec::Ex(1.0), Some(10.0), 16), 6.0));
        assert!(close(resolve_font_size(FontSizeSpec::Percent(150.0), Some(10.0), 16), 15.0));
    }

    #[test]
    fn test_missing_parent_is_medium() {
        assert!(close(resolve_font_size(FontSizeSpec::Em(1.5), None, 12), 18.0));
    }

    #[test]
    fn test_absolute_passthrough() {
        assert!(close(resolve_font_size(FontSizeSpec::Absolute(7.5), Some(99.0), 16), 7.5));
    }

    #[test]
    fn test_keyword_parse() {
        assert_eq!(FontSizeKeyword::parse("X-Large"), Some(FontSizeKeyword::XLarge));
        assert_eq!(FontSizeKeyword::parse("huge"), None);
    }
}
