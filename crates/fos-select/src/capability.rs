//! Tree Capability - what a host document must expose
//!
//! The adapter never owns or walks a tree itself. Everything it knows about
//! a node comes through this trait.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Single attribute as exposed by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A related node: tag name plus the host's identifier for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEntry<N> {
    pub tag_name: String,
    pub identifier: N,
}

impl<N> NodeEntry<N> {
    pub fn new(tag_name: impl Into<String>, identifier: N) -> Self {
        Self {
            tag_name: tag_name.into(),
            identifier,
        }
    }

    /// Tag name comparison, ASCII case-insensitive
    #[inline]
    pub fn has_tag(&self, tag_name: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag_name)
    }
}

/// Child of the queried node's parent (the node itself included)
pub type SiblingEntry<N> = NodeEntry<N>;

/// Ancestor of the queried node, nearest first
pub type AncestorEntry<N> = NodeEntry<N>;

/// Capability contract a host tree implements.
///
/// The five required methods are enforced by the compiler. The dynamic-state
/// methods are optional: the default implementations return `None`, meaning
/// "not supported", and the adapter turns that into `false` (or the configured
/// fallback font size).
pub trait TreeCapability {
    /// Opaque node handle. Only equality is ever used.
    type Node: Clone + PartialEq + fmt::Debug;

    /// Tag name of the node (e.g. "div")
    fn tag_name(&self, node: &Self::Node) -> String;

    /// All attributes of the node, in document order
    fn attributes(&self, node: &Self::Node) -> Vec<Attribute>;

    /// Every child of the node's parent in document order, including the
    /// node itself. A root yields `[node]`.
    fn siblings(&self, node: &Self::Node) -> Vec<SiblingEntry<Self::Node>>;

    /// Ancestors, index 0 being the parent. Empty for the root.
    fn ancestors(&self, node: &Self::Node) -> Vec<AncestorEntry<Self::Node>>;

    /// True iff the node has neither children nor text
    fn is_empty(&self, node: &Self::Node) -> bool;

    fn is_visited(&self, _node: &Self::Node) -> Option<bool> {
        None
    }

    fn is_hover(&self, _node: &Self::Node) -> Option<bool> {
        None
    }

    fn is_active(&self, _node: &Self::Node) -> Option<bool> {
        None
    }

    fn is_focus(&self, _node: &Self::Node) -> Option<bool> {
        None
    }

    fn is_enabled(&self, _node: &Self::Node) -> Option<bool> {
        None
    }

    fn is_disabled(&self, _node: &Self::Node) -> Option<bool> {
        None
    }

    fn is_checked(&self, _node: &Self::Node) -> Option<bool> {
        None
    }

    fn is_target(&self, _node: &Self::Node) -> Option<bool> {
        None
    }

    /// `:lang()` support. `None` when the host has no language information.
    fn is_lang(&self, _node: &Self::Node, _language: &str) -> Option<bool> {
        None
    }

    /// User-agent default font size
    fn default_font_size(&self) -> Option<i32> {
        None
    }
}

macro_rules! forward_capability {
    ($($wrapper:ty),*) => {$(
        impl<T: TreeCapability + ?Sized> TreeCapability for $wrapper {
            type Node = T::Node;

            fn tag_name(&self, node: &Self::Node) -> String {
                (**self).tag_name(node)
            }
            fn attributes(&self, node: &Self::Node) -> Vec<Attribute> {
                (**self).attributes(node)
            }
            fn siblings(&self, node: &Self::Node) -> Vec<SiblingEntry<Self::Node>> {
                (**self).siblings(node)
            }
            fn ancestors(&self, node: &Self::Node) -> Vec<AncestorEntry<Self::Node>> {
                (**self).ancestors(node)
            }
            fn is_empty(&self, node: &Self::Node) -> bool {
                (**self).is_empty(node)
            }
            fn is_visited(&self, node: &Self::Node) -> Option<bool> {
                (**self).is_visited(node)
            }
            fn is_hover(&self, node: &Self::Node) -> Option<bool> {
                (**self).is_hover(node)
            }
            fn is_active(&self, node: &Self::Node) -> Option<bool> {
                (**self).is_active(node)
            }
            fn is_focus(&self, node: &Self::Node) -> Option<bool> {
                (**self).is_focus(node)
            }
            fn is_enabled(&self, node: &Self::Node) -> Option<bool> {
                (**self).is_enabled(node)
            }
            fn is_disabled(&self, node: &Self::Node) -> Option<bool> {
                (**self).is_disabled(node)
            }
            fn is_checked(&self, node: &Self::Node) -> Option<bool> {
                (**self).is_checked(node)
            }
            fn is_target(&self, node: &Self::Node) -> Option<bool> {
                (**self).is_target(node)
            }
            fn is_lang(&self, node: &Self::Node, language: &str) -> Option<bool> {
                (**self).is_lang(node, language)
            }
            fn default_font_size(&self) -> Option<i32> {
                (**self).default_font_size()
            }
        }
    )*};
}

forward_capability!(&T, Box<T>, Arc<T>);
