//! Selector capability for [`DomTree`]
//!
//! Only element nodes take part in selector matching: text nodes are left
//! out of sibling lists, and a node without a parent is a root.

use fos_select::{AncestorEntry, Attribute, SiblingEntry, TreeCapability};

use crate::{DomTree, ElementState, NodeId};

impl DomTree {
    fn tag_of(&self, id: NodeId) -> String {
        self.element(id).map(|el| el.tag.clone()).unwrap_or_default()
    }

    fn has_state(&self, id: NodeId, flag: ElementState) -> Option<bool> {
        Some(self.element(id)?.state.contains(flag))
    }

    fn is_form_control(&self, id: NodeId) -> bool {
        self.element(id).is_some_and(|el| {
            ["input", "button", "select", "textarea", "option", "optgroup", "fieldset"]
                .iter()
                .any(|tag| el.tag.eq_ignore_ascii_case(tag))
        })
    }
}

impl TreeCapability for DomTree {
    type Node = NodeId;

    fn tag_name(&self, node: &NodeId) -> String {
        self.tag_of(*node)
    }

    fn attributes(&self, node: &NodeId) -> Vec<Attribute> {
        self.element(*node)
            .map(|el| el.attrs.clone())
            .unwrap_or_default()
    }

    fn siblings(&self, node: &NodeId) -> Vec<SiblingEntry<NodeId>> {
        match self.parent(*node) {
            Some(parent) => self
                .element_children(parent)
                .map(|(id, el)| SiblingEntry::new(el.tag.clone(), id))
                .collect(),
            None => vec![SiblingEntry::new(self.tag_of(*node), *node)],
        }
    }

    fn ancestors(&self, node: &NodeId) -> Vec<AncestorEntry<NodeId>> {
        self.ancestors_inclusive(*node)
            .skip(1)
            .map(|id| AncestorEntry::new(self.tag_of(id), id))
            .collect()
    }

    fn is_empty(&self, node: &NodeId) -> bool {
        self.get(*node).is_some_and(|n| !n.has_children())
    }

    fn is_visited(&self, node: &NodeId) -> Option<bool> {
        self.has_state(*node, ElementState::VISITED)
    }

    fn is_hover(&self, node: &NodeId) -> Option<bool> {
        self.has_state(*node, ElementState::HOVER)
    }

    fn is_active(&self, node: &NodeId) -> Option<bool> {
        self.has_state(*node, ElementState::ACTIVE)
    }

    fn is_focus(&self, node: &NodeId) -> Option<bool> {
        self.has_state(*node, ElementState::FOCUS)
    }

    fn is_enabled(&self, node: &NodeId) -> Option<bool> {
        let disabled = self.has_state(*node, ElementState::DISABLED)?;
        Some(self.is_form_control(*node) && !disabled)
    }

    fn is_disabled(&self, node: &NodeId) -> Option<bool> {
        self.has_state(*node, ElementState::DISABLED)
    }

    fn is_checked(&self, node: &NodeId) -> Option<bool> {
        self.has_state(*node, ElementState::CHECKED)
    }

    fn is_target(&self, node: &NodeId) -> Option<bool> {
        self.has_state(*node, ElementState::TARGET)
    }

    /// Nearest `lang` attribute on the node or an ancestor, matched by
    /// subtag prefix ("en" matches "en" and "en-US")
    fn is_lang(&self, node: &NodeId, language: &str) -> Option<bool> {
        let declared = self
            .ancestors_inclusive(*node)
            .find_map(|id| self.element(id)?.get_attr("lang"));
        Some(declared.is_some_and(|lang| lang_matches(lang, language)))
    }

    fn default_font_size(&self) -> Option<i32> {
        DomTree::default_font_size(self)
    }
}

fn lang_matches(declared: &str, range: &str) -> bool {
    if range.is_empty() {
        return false;
    }
    match declared.get(..range.len()) {
        Some(head) if head.eq_ignore_ascii_case(range) => {
            declared.len() == range.len() || declared.as_bytes()[range.len()] == b'-'
        }
        _ => false,
    }
}
