//! Pseudo-elements accepted by style queries

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SelectError;

/// Pseudo-element a style query may target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PseudoElement {
    /// The element itself
    #[default]
    None,
    /// ::first-line - first line of text
    FirstLine,
    /// ::first-letter - first letter of text
    FirstLetter,
    /// ::before - content before element
    Before,
    /// ::after - content after element
    After,
}

impl PseudoElement {
    pub const ALL: [PseudoElement; 5] = [
        Self::None,
        Self::FirstLine,
        Self::FirstLetter,
        Self::Before,
        Self::After,
    ];

    /// Parse an exact pseudo-element name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "first-line" => Some(Self::FirstLine),
            "first-letter" => Some(Self::FirstLetter),
            "before" => Some(Self::Before),
            "after" => Some(Self::After),
            _ => None,
        }
    }

    /// Validate an optional pseudo-element argument.
    ///
    /// `None` means the element itself; any unrecognized name is rejected.
    pub fn validate(value: Option<&str>) -> crate::Result<Self> {
        let Some(value) = value else {
            return Ok(Self::None);
        };

        Self::parse(value).ok_or_else(|| {
            let supported: Vec<&str> = Self::ALL.iter().map(|p| p.as_str()).collect();
            SelectError::InvalidArgument(format!(
                "unsupported pseudo-element {:?}; supported values are {:?}",
                value, supported
            ))
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FirstLine => "first-line",
            Self::FirstLetter => "first-letter",
            Self::Before => "before",
            Self::After => "after",
        }
    }

    /// Check if this pseudo-element requires generated content
    pub fn requires_content(&self) -> bool {
        matches!(self, Self::Before | Self::After)
    }
}

impl fmt::Display for PseudoElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_known() {
        assert_eq!(PseudoElement::validate(Some("before")).unwrap(), PseudoElement::Before);
        assert_eq!(PseudoElement::validate(Some("first-letter")).unwrap(), PseudoElement::FirstLetter);
        assert_eq!(PseudoElement::validate(None).unwrap(), PseudoElement::None);
    }

    #[test]
    fn test_validate_rejects_unknown() {
        let err = PseudoElement::validate(Some("hover")).unwrap_err();
        assert!(matches!(err, SelectError::InvalidArgument(_)));
        assert!(PseudoElement::validate(Some("::before")).is_err());
        assert!(PseudoElement::validate(Some("BEFORE")).is_err());
    }

    #[test]
    fn test_round_trip_names() {
        for pseudo in PseudoElement::ALL {
            assert_eq!(PseudoElement::parse(pseudo.as_str()), Some(pseudo));
        }
    }
}
