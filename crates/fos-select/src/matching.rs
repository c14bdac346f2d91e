//! Attribute value matching
//!
//! Operator semantics for attribute selectors and the case policy applied
//! to compared values.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How attribute values, classes and ids are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CaseSensitivity {
    /// Exact comparison
    Sensitive,
    /// Both sides lowercased before comparison
    #[default]
    Insensitive,
}

impl CaseSensitivity {
    /// Normalize a value according to this policy
    pub fn fold<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            Self::Sensitive => Cow::Borrowed(value),
            // titlecase letters (e.g. U+01C5) fold too, not just uppercase
            Self::Insensitive if value.chars().any(|c| c.to_lowercase().ne([c])) => {
                Cow::Owned(value.to_lowercase())
            }
            Self::Insensitive => Cow::Borrowed(value),
        }
    }

    /// Compare two values under this policy
    pub fn equals(self, left: &str, right: &str) -> bool {
        match self {
            Self::Sensitive => left == right,
            Self::Insensitive => self.fold(left) == self.fold(right),
        }
    }
}

/// Attribute selector operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeOperator {
    /// [attr] - presence only
    Exists,
    /// [attr=value]
    Equal,
    /// [attr|=value] - value, or value followed by a single hyphen
    DashMatch,
    /// Value contains the query as a substring
    Includes,
    /// [attr^=value]
    Prefix,
    /// [attr$=value]
    Suffix,
    /// [attr*=value] - same rule as `Includes`
    Substring,
}

impl AttributeOperator {
    /// Check an attribute's actual value against the query
    pub fn matches(self, actual: &str, query: &str, case: CaseSensitivity) -> bool {
        if self == Self::Exists {
            return true;
        }

        let actual = case.fold(actual);
        let query = case.fold(query);

        match self {
            Self::Exists => true,
            Self::Equal => actual == query,
            Self::DashMatch => {
                actual == query
                    || (actual.len() == query.len() + 1
                        && actual.starts_with(&*query)
                        && actual.ends_with('-'))
            }
            Self::Includes | Self::Substring => actual.contains(&*query),
            Self::Prefix => actual.starts_with(&*query),
            Self::Suffix => actual.ends_with(&*query),
        }
    }
}
