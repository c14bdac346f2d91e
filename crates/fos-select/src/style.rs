//! Computed style results
//!
//! The engine reports a computed style as a block of `property: value`
//! lines. [`StyleResult::decode`] turns that block into a mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Computed style for one node: property name -> serialized value.
///
/// Properties keep the order in which they were first seen. A repeated
/// property replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleResult {
    properties: Vec<(String, String)>,
}

impl StyleResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the engine's raw output.
    ///
    /// Each line is split at its first colon. Lines without a colon, or with
    /// the colon in the first position, are skipped. Names and values are
    /// trimmed.
    pub fn decode(raw: &str) -> Self {
        let mut result = Self::new();

        for line in raw.split('\n') {
            match line.find(':') {
                Some(colon) if colon > 0 => {
                    let property = line[..colon].trim();
                    let value = line[colon + 1..].trim();
                    result.insert(property, value);
                }
                _ => {
                    if !line.trim().is_empty() {
                        tracing::trace!("Skipping style line without property: {:?}", line);
                    }
                }
            }
        }

        result
    }

    /// Set a property, replacing any previous value
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(name, _)| *name == property) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleResult {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut result = Self::new();
        for (property, value) in iter {
            result.insert(property, value);
        }
        result
    }
}

/// Re-encodes as `property: value` lines
impl fmt::Display for StyleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}: {}", property, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_simple() {
        let style = StyleResult::decode("color: red\nwidth: 70px");
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("color"), Some("red"));
        assert_eq!(style.get("width"), Some("70px"));
    }

    #[test]
    fn test_decode_matches_encoded_mapping() {
        let expected: StyleResult = [("color", "red"), ("width", "70px")].into_iter().collect();
        let decoded = StyleResult::decode(&expected.to_string());
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_decode_skips_lines_without_property() {
        let style = StyleResult::decode("\n: orphan\nno colon here\n  \nheight: 50px\n");
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("height"), Some("50px"));
    }

    #[test]
    fn test_decode_splits_at_first_colon() {
        let style = StyleResult::decode("background-image: url(http://x/y.png)");
        assert_eq!(style.get("background-image"), Some("url(http://x/y.png)"));
    }

    #[test]
    fn test_decode_trims() {
        let style = StyleResult::decode("   font-size :   12pt   ");
        assert_eq!(style.get("font-size"), Some("12pt"));
    }

    #[test]
    fn test_decode_last_write_wins() {
        let style = StyleResult::decode("width: 100px\ncolor: red\nwidth: 70px");
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("width"), Some("70px"));
        assert_eq!(style.iter().next(), Some(("width", "70px")));
    }

    #[test]
    fn test_decode_empty() {
        assert!(StyleResult::decode("").is_empty());
    }
}
