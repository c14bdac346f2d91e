//! Selector Adapter
//!
//! Every predicate a selection engine asks about a node, derived from the
//! handful of primitives in [`TreeCapability`].
//!
//! Lookups that return a related node (`named_parent`, `sibling_node`, ...)
//! yield `None` for "no match". Predicates that have to locate the node in
//! its sibling list return a [`crate::Result`], since a broken sibling list
//! is reported rather than guessed around.

use crate::font::{self, FontSizeSpec};
use crate::{
    AdapterConfig, AttributeIndex, AttributeOperator, SiblingResolver, TreeCapability,
};

/// Interaction and form states a host may track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamicState {
    Visited,
    Hover,
    Active,
    Focus,
    Enabled,
    Disabled,
    Checked,
    Target,
}

/// Predicate evaluator over a host tree
#[derive(Debug, Clone)]
pub struct SelectorAdapter<T> {
    tree: T,
    config: AdapterConfig,
}

impl<T: TreeCapability> SelectorAdapter<T> {
    pub fn new(tree: T, config: AdapterConfig) -> Self {
        tracing::debug!("Selector adapter created ({:?})", config);
        Self { tree, config }
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn into_tree(self) -> T {
        self.tree
    }

    /// Attribute view of a node
    pub fn attributes(&self, node: &T::Node) -> AttributeIndex {
        AttributeIndex::of(&self.tree, node)
    }

    // --- Node data ---

    pub fn node_name(&self, node: &T::Node) -> String {
        self.tree.tag_name(node)
    }

    pub fn node_classes(&self, node: &T::Node) -> Vec<String> {
        self.attributes(node)
            .class_list()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    pub fn node_id(&self, node: &T::Node) -> String {
        self.attributes(node).id_value().to_owned()
    }

    // --- Simple selectors ---

    /// Type selector: tag name, ASCII case-insensitive
    pub fn has_name(&self, node: &T::Node, name: &str) -> bool {
        self.tree.tag_name(node).eq_ignore_ascii_case(name)
    }

    /// Class selector
    pub fn has_class(&self, node: &T::Node, class: &str) -> bool {
        let case = self.config.value_case;
        self.attributes(node)
            .class_list()
            .iter()
            .any(|c| case.equals(c, class))
    }

    /// ID selector
    pub fn has_id(&self, node: &T::Node, id: &str) -> bool {
        let attributes = self.attributes(node);
        attributes.has("id") && self.config.value_case.equals(attributes.id_value(), id)
    }

    // --- Attribute selectors ---

    /// Any attribute called `name` whose value satisfies `op` against `value`
    pub fn has_attribute_matching(
        &self,
        node: &T::Node,
        name: &str,
        op: AttributeOperator,
        value: &str,
    ) -> bool {
        let case = self.config.value_case;
        self.attributes(node)
            .all(name)
            .any(|actual| op.matches(actual, value, case))
    }

    pub fn has_attribute(&self, node: &T::Node, name: &str) -> bool {
        self.has_attribute_matching(node, name, AttributeOperator::Exists, "")
    }

    pub fn has_attribute_equal(&self, node: &T::Node, name: &str, value: &str) -> bool {
        self.has_attribute_matching(node, name, AttributeOperator::Equal, value)
    }

    pub fn has_attribute_dashmatch(&self, node: &T::Node, name: &str, value: &str) -> bool {
        self.has_attribute_matching(node, name, AttributeOperator::DashMatch, value)
    }

    pub fn has_attribute_includes(&self, node: &T::Node, name: &str, value: &str) -> bool {
        self.has_attribute_matching(node, name, AttributeOperator::Includes, value)
    }

    pub fn has_attribute_prefix(&self, node: &T::Node, name: &str, value: &str) -> bool {
        self.has_attribute_matching(node, name, AttributeOperator::Prefix, value)
    }

    pub fn has_attribute_suffix(&self, node: &T::Node, name: &str, value: &str) -> bool {
        self.has_attribute_matching(node, name, AttributeOperator::Suffix, value)
    }

    pub fn has_attribute_substring(&self, node: &T::Node, name: &str, value: &str) -> bool {
        self.has_attribute_matching(node, name, AttributeOperator::Substring, value)
    }

    // --- Combinators ---

    /// Nearest ancestor with the given tag name (descendant combinator)
    pub fn named_ancestor(&self, node: &T::Node, name: &str) -> Option<T::Node> {
        self.tree
            .ancestors(node)
            .into_iter()
            .find(|ancestor| ancestor.has_tag(name))
            .map(|ancestor| ancestor.identifier)
    }

    /// Parent, if it has the given tag name (child combinator)
    pub fn named_parent(&self, node: &T::Node, name: &str) -> Option<T::Node> {
        self.tree
            .ancestors(node)
            .into_iter()
            .next()
            .filter(|parent| parent.has_tag(name))
            .map(|parent| parent.identifier)
    }

    /// Immediately preceding sibling, if it has the given tag name (`+`)
    pub fn named_sibling(&self, node: &T::Node, name: &str) -> crate::Result<Option<T::Node>> {
        let siblings = self.tree.siblings(node);
        let resolver = SiblingResolver::new(node, &siblings)?;
        Ok(resolver
            .previous_sibling()
            .filter(|prev| prev.has_tag(name))
            .map(|prev| prev.identifier.clone()))
    }

    /// First other sibling, before or after, with the given tag name (`~`)
    pub fn named_generic_sibling(&self, node: &T::Node, name: &str) -> Option<T::Node> {
        self.tree
            .siblings(node)
            .into_iter()
            .find(|sibling| sibling.identifier != *node && sibling.has_tag(name))
            .map(|sibling| sibling.identifier)
    }

    pub fn parent_node(&self, node: &T::Node) -> Option<T::Node> {
        self.tree
            .ancestors(node)
            .into_iter()
            .next()
            .map(|parent| parent.identifier)
    }

    /// Immediately preceding sibling, any tag
    pub fn sibling_node(&self, node: &T::Node) -> crate::Result<Option<T::Node>> {
        let siblings = self.tree.siblings(node);
        let resolver = SiblingResolver::new(node, &siblings)?;
        Ok(resolver.previous_sibling().map(|prev| prev.identifier.clone()))
    }

    // --- Structural pseudo-classes ---

    pub fn is_root(&self, node: &T::Node) -> bool {
        self.tree.ancestors(node).is_empty()
    }

    pub fn is_empty(&self, node: &T::Node) -> bool {
        self.tree.is_empty(node)
    }

    /// Siblings before (or after) the node, optionally only those of its type
    pub fn count_siblings(&self, node: &T::Node, same_tag_only: bool, after: bool) -> crate::Result<usize> {
        let siblings = self.tree.siblings(node);
        let resolver = SiblingResolver::new(node, &siblings)?;
        Ok(resolver.count_siblings(same_tag_only, after))
    }

    /// 1-based position among siblings, optionally of the same type
    pub fn child_index(&self, node: &T::Node, same_tag_only: bool) -> crate::Result<usize> {
        Ok(self.count_siblings(node, same_tag_only, false)? + 1)
    }

    pub fn is_first_child(&self, node: &T::Node) -> crate::Result<bool> {
        Ok(self.count_siblings(node, false, false)? == 0)
    }

    pub fn is_last_child(&self, node: &T::Node) -> crate::Result<bool> {
        Ok(self.count_siblings(node, false, true)? == 0)
    }

    pub fn is_only_child(&self, node: &T::Node) -> crate::Result<bool> {
        Ok(self.is_first_child(node)? && self.is_last_child(node)?)
    }

    pub fn is_first_of_type(&self, node: &T::Node) -> crate::Result<bool> {
        Ok(self.count_siblings(node, true, false)? == 0)
    }

    pub fn is_last_of_type(&self, node: &T::Node) -> crate::Result<bool> {
        Ok(self.count_siblings(node, true, true)? == 0)
    }

    pub fn is_only_of_type(&self, node: &T::Node) -> crate::Result<bool> {
        Ok(self.is_first_of_type(node)? && self.is_last_of_type(node)?)
    }

    // --- Link and dynamic state ---

    /// `<a>` with a non-empty `href`
    pub fn is_link(&self, node: &T::Node) -> bool {
        self.has_name(node, "a")
            && self
                .attributes(node)
                .all("href")
                .any(|href| !href.is_empty())
    }

    /// Dynamic state lookup. Unsupported states never match.
    pub fn matches_state(&self, node: &T::Node, state: DynamicState) -> bool {
        let answer = match state {
            DynamicState::Visited => self.tree.is_visited(node),
            DynamicState::Hover => self.tree.is_hover(node),
            DynamicState::Active => self.tree.is_active(node),
            DynamicState::Focus => self.tree.is_focus(node),
            DynamicState::Enabled => self.tree.is_enabled(node),
            DynamicState::Disabled => self.tree.is_disabled(node),
            DynamicState::Checked => self.tree.is_checked(node),
            DynamicState::Target => self.tree.is_target(node),
        };
        answer.unwrap_or(false)
    }

    pub fn is_visited(&self, node: &T::Node) -> bool {
        self.matches_state(node, DynamicState::Visited)
    }

    pub fn is_hover(&self, node: &T::Node) -> bool {
        self.matches_state(node, DynamicState::Hover)
    }

    pub fn is_active(&self, node: &T::Node) -> bool {
        self.matches_state(node, DynamicState::Active)
    }

    pub fn is_focus(&self, node: &T::Node) -> bool {
        self.matches_state(node, DynamicState::Focus)
    }

    pub fn is_enabled(&self, node: &T::Node) -> bool {
        self.matches_state(node, DynamicState::Enabled)
    }

    pub fn is_disabled(&self, node: &T::Node) -> bool {
        self.matches_state(node, DynamicState::Disabled)
    }

    pub fn is_checked(&self, node: &T::Node) -> bool {
        self.matches_state(node, DynamicState::Checked)
    }

    pub fn is_target(&self, node: &T::Node) -> bool {
        self.matches_state(node, DynamicState::Target)
    }

    /// `:lang()`; false when the host has no language support
    pub fn is_lang(&self, node: &T::Node, language: &str) -> bool {
        self.tree.is_lang(node, language).unwrap_or(false)
    }

    // --- Metrics ---

    /// Host default font size, or the configured fallback
    pub fn default_font_size(&self) -> i32 {
        self.tree
            .default_font_size()
            .unwrap_or(self.config.fallback_font_size)
    }

    /// Absolute font size for a specified size, relative to `parent`
    pub fn resolve_font_size(&self, spec: FontSizeSpec, parent: Option<f32>) -> f32 {
        font::resolve_font_size(spec, parent, self.default_font_size())
    }
}

impl<T: TreeCapability> From<T> for SelectorAdapter<T> {
    fn from(tree: T) -> Self {
        Self::new(tree, AdapterConfig::default())
    }
}

/// Check if 1-based `index` is of the form `a*n + b` for some n >= 0
pub fn matches_nth(a: i32, b: i32, index: i32) -> bool {
    if a == 0 {
        return index == b;
    }

    // i64 so extreme stylesheet values cannot overflow
    let (a, diff) = (i64::from(a), i64::from(index) - i64::from(b));
    if a > 0 {
        diff >= 0 && diff % a == 0
    } else {
        diff <= 0 && diff % a == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nth_odd_even() {
        assert!(matches_nth(2, 1, 1));
        assert!(!matches_nth(2, 1, 2));
        assert!(matches_nth(2, 1, 3));
        assert!(matches_nth(2, 0, 2));
        assert!(!matches_nth(2, 0, 3));
    }

    #[test]
    fn test_nth_index_and_negative() {
        assert!(matches_nth(0, 3, 3));
        assert!(!matches_nth(0, 3, 4));
        // -n+3: first three
        assert!(matches_nth(-1, 3, 1));
        assert!(matches_nth(-1, 3, 3));
        assert!(!matches_nth(-1, 3, 4));
    }

    #[test]
    fn test_nth_extreme_values() {
        assert!(!matches_nth(2, i32::MIN, 5));
        assert!(matches_nth(2, i32::MIN, 0));
        assert!(matches_nth(-1, 0, i32::MIN));
        assert!(matches_nth(-1, i32::MIN, i32::MIN));
        assert!(!matches_nth(1, i32::MAX, i32::MIN));
        assert!(matches_nth(i32::MIN, i32::MAX, i32::MAX));
    }
}
