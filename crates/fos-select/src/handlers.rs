//! Handler Table - a TreeCapability assembled from callbacks
//!
//! For hosts that would rather hand over a set of functions than implement
//! [`TreeCapability`] on a type. Required handlers are checked when the
//! table is built, so a missing one fails before any query runs.

use std::fmt;

use crate::{AncestorEntry, Attribute, SelectError, SiblingEntry, TreeCapability};

type NodeFn<N, R> = Box<dyn Fn(&N) -> R + Send + Sync>;
type LangFn<N> = Box<dyn Fn(&N, &str) -> bool + Send + Sync>;
type FontSizeFn = Box<dyn Fn() -> i32 + Send + Sync>;

/// Callback-backed tree capability
pub struct HandlerTable<N> {
    tag_name: NodeFn<N, String>,
    attributes: NodeFn<N, Vec<Attribute>>,
    siblings: NodeFn<N, Vec<SiblingEntry<N>>>,
    ancestors: NodeFn<N, Vec<AncestorEntry<N>>>,
    is_empty: NodeFn<N, bool>,
    is_visited: Option<NodeFn<N, bool>>,
    is_hover: Option<NodeFn<N, bool>>,
    is_active: Option<NodeFn<N, bool>>,
    is_focus: Option<NodeFn<N, bool>>,
    is_enabled: Option<NodeFn<N, bool>>,
    is_disabled: Option<NodeFn<N, bool>>,
    is_checked: Option<NodeFn<N, bool>>,
    is_target: Option<NodeFn<N, bool>>,
    is_lang: Option<LangFn<N>>,
    default_font_size: Option<FontSizeFn>,
}

impl<N> HandlerTable<N> {
    pub fn builder() -> HandlerTableBuilder<N> {
        HandlerTableBuilder::default()
    }

    /// Names of the optional handlers that were supplied
    pub fn optional_handlers(&self) -> Vec<&'static str> {
        [
            ("isVisited", self.is_visited.is_some()),
            ("isHover", self.is_hover.is_some()),
            ("isActive", self.is_active.is_some()),
            ("isFocus", self.is_focus.is_some()),
            ("isEnabled", self.is_enabled.is_some()),
            ("isDisabled", self.is_disabled.is_some()),
            ("isChecked", self.is_checked.is_some()),
            ("isTarget", self.is_target.is_some()),
            ("isLang", self.is_lang.is_some()),
            ("defaultFontSize", self.default_font_size.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

impl<N> fmt::Debug for HandlerTable<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerTable")
            .field("optional", &self.optional_handlers())
            .finish_non_exhaustive()
    }
}

fn call_optional<N>(handler: &Option<NodeFn<N, bool>>, node: &N) -> Option<bool> {
    handler.as_ref().map(|f| f(node))
}

impl<N: Clone + PartialEq + fmt::Debug> TreeCapability for HandlerTable<N> {
    type Node = N;

    fn tag_name(&self, node: &N) -> String {
        (self.tag_name)(node)
    }

    fn attributes(&self, node: &N) -> Vec<Attribute> {
        (self.attributes)(node)
    }

    fn siblings(&self, node: &N) -> Vec<SiblingEntry<N>> {
        (self.siblings)(node)
    }

    fn ancestors(&self, node: &N) -> Vec<AncestorEntry<N>> {
        (self.ancestors)(node)
    }

    fn is_empty(&self, node: &N) -> bool {
        (self.is_empty)(node)
    }

    fn is_visited(&self, node: &N) -> Option<bool> {
        call_optional(&self.is_visited, node)
    }

    fn is_hover(&self, node: &N) -> Option<bool> {
        call_optional(&self.is_hover, node)
    }

    fn is_active(&self, node: &N) -> Option<bool> {
        call_optional(&self.is_active, node)
    }

    fn is_focus(&self, node: &N) -> Option<bool> {
        call_optional(&self.is_focus, node)
    }

    fn is_enabled(&self, node: &N) -> Option<bool> {
        call_optional(&self.is_enabled, node)
    }

    fn is_disabled(&self, node: &N) -> Option<bool> {
        call_optional(&self.is_disabled, node)
    }

    fn is_checked(&self, node: &N) -> Option<bool> {
        call_optional(&self.is_checked, node)
    }

    fn is_target(&self, node: &N) -> Option<bool> {
        call_optional(&self.is_target, node)
    }

    fn is_lang(&self, node: &N, language: &str) -> Option<bool> {
        self.is_lang.as_ref().map(|f| f(node, language))
    }

    fn default_font_size(&self) -> Option<i32> {
        self.default_font_size.as_ref().map(|f| f())
    }
}

/// Builder for [`HandlerTable`]
pub struct HandlerTableBuilder<N> {
    tag_name: Option<NodeFn<N, String>>,
    attributes: Option<NodeFn<N, Vec<Attribute>>>,
    siblings: Option<NodeFn<N, Vec<SiblingEntry<N>>>>,
    ancestors: Option<NodeFn<N, Vec<AncestorEntry<N>>>>,
    is_empty: Option<NodeFn<N, bool>>,
    is_visited: Option<NodeFn<N, bool>>,
    is_hover: Option<NodeFn<N, bool>>,
    is_active: Option<NodeFn<N, bool>>,
    is_focus: Option<NodeFn<N, bool>>,
    is_enabled: Option<NodeFn<N, bool>>,
    is_disabled: Option<NodeFn<N, bool>>,
    is_checked: Option<NodeFn<N, bool>>,
    is_target: Option<NodeFn<N, bool>>,
    is_lang: Option<LangFn<N>>,
    default_font_size: Option<FontSizeFn>,
}

impl<N> Default for HandlerTableBuilder<N> {
    fn default() -> Self {
        Self {
            tag_name: None,
            attributes: None,
            siblings: None,
            ancestors: None,
            is_empty: None,
            is_visited: None,
            is_hover: None,
            is_active: None,
            is_focus: None,
            is_enabled: None,
            is_disabled: None,
            is_checked: None,
            is_target: None,
            is_lang: None,
            default_font_size: None,
        }
    }
}

macro_rules! state_setters {
    ($($name:ident),*) => {$(
        pub fn $name(mut self, f: impl Fn(&N) -> bool + Send + Sync + 'static) -> Self {
            self.$name = Some(Box::new(f));
            self
        }
    )*};
}

impl<N> HandlerTableBuilder<N> {
    pub fn tag_name(mut self, f: impl Fn(&N) -> String + Send + Sync + 'static) -> Self {
        self.tag_name = Some(Box::new(f));
        self
    }

    pub fn attributes(mut self, f: impl Fn(&N) -> Vec<Attribute> + Send + Sync + 'static) -> Self {
        self.attributes = Some(Box::new(f));
        self
    }

    /// Must return the full child list of the node's parent, node included
    pub fn siblings(mut self, f: impl Fn(&N) -> Vec<SiblingEntry<N>> + Send + Sync + 'static) -> Self {
        self.siblings = Some(Box::new(f));
        self
    }

    /// Must return ancestors nearest-first, empty for the root
    pub fn ancestors(mut self, f: impl Fn(&N) -> Vec<AncestorEntry<N>> + Send + Sync + 'static) -> Self {
        self.ancestors = Some(Box::new(f));
        self
    }

    pub fn is_empty(mut self, f: impl Fn(&N) -> bool + Send + Sync + 'static) -> Self {
        self.is_empty = Some(Box::new(f));
        self
    }

    state_setters!(
        is_visited,
        is_hover,
        is_active,
        is_focus,
        is_enabled,
        is_disabled,
        is_checked,
        is_target
    );

    pub fn is_lang(mut self, f: impl Fn(&N, &str) -> bool + Send + Sync + 'static) -> Self {
        self.is_lang = Some(Box::new(f));
        self
    }

    pub fn default_font_size(mut self, f: impl Fn() -> i32 + Send + Sync + 'static) -> Self {
        self.default_font_size = Some(Box::new(f));
        self
    }

    /// Finish the table, failing if a required handler is missing
    pub fn build(self) -> crate::Result<HandlerTable<N>> {
        Ok(HandlerTable {
            tag_name: required(self.tag_name, "getTagName")?,
            attributes: required(self.attributes, "getAttributes")?,
            siblings: required(self.siblings, "getSiblings")?,
            ancestors: required(self.ancestors, "getAncestors")?,
            is_empty: required(self.is_empty, "isEmpty")?,
            is_visited: self.is_visited,
            is_hover: self.is_hover,
            is_active: self.is_active,
            is_focus: self.is_focus,
            is_enabled: self.is_enabled,
            is_disabled: self.is_disabled,
            is_checked: self.is_checked,
            is_target: self.is_target,
            is_lang: self.is_lang,
            default_font_size: self.default_font_size,
        })
    }
}

fn required<F>(handler: Option<F>, name: &str) -> crate::Result<F> {
    handler.ok_or_else(|| {
        tracing::error!("Required handler {} not provided", name);
        SelectError::Configuration(format!("required handler `{}` not provided", name))
    })
}
