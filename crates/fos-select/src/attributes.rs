//! Attribute Index
//!
//! Class, id and named lookups over a node's raw attribute list.

use crate::{Attribute, TreeCapability};

/// Lookup view over one node's attributes
#[derive(Debug, Clone, Default)]
pub struct AttributeIndex {
    attributes: Vec<Attribute>,
}

impl AttributeIndex {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    /// Fetch a node's attributes from the host
    pub fn of<T: TreeCapability + ?Sized>(tree: &T, node: &T::Node) -> Self {
        Self::new(tree.attributes(node))
    }

    /// Tokens of the first `class` attribute, split on single spaces.
    ///
    /// The attribute name must be exactly `class`.
    pub fn class_list(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == "class")
            .map(|attr| attr.value.split(' ').collect())
            .unwrap_or_default()
    }

    /// Value of the `id` attribute (name compared case-insensitively), or ""
    pub fn id_value(&self) -> &str {
        self.get("id").unwrap_or("")
    }

    /// Value of the first attribute with this name (ASCII case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| attr.value.as_str())
    }

    /// All attributes with this name, in document order
    pub fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.attributes
            .iter()
            .filter(move |attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| attr.value.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Inline style declarations from the `style` attribute, or ""
    pub fn inline_style(&self) -> &str {
        self.get("style").unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }
}

impl From<Vec<Attribute>> for AttributeIndex {
    fn from(attributes: Vec<Attribute>) -> Self {
        Self::new(attributes)
    }
}
