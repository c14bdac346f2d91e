//! DOM Node
//!
//! Each node stores its tree links as [`NodeId`]s. `NodeId::NONE` marks a
//! missing link.

use fos_select::Attribute;

use crate::NodeId;

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn detached(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: impl Into<String>) -> Self {
        Self::detached(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::detached(NodeData::Text(content.into()))
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        self.first_child.is_valid()
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            NodeData::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            NodeData::Text(_) => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            NodeData::Element(_) => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    Element(ElementData),
    Text(String),
}

/// Element-specific data
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// Tag name as written
    pub tag: String,
    /// Attributes in source order
    pub attrs: Vec<Attribute>,
    /// UI state flags
    pub state: ElementState,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Get an attribute value (name compared ASCII case-insensitively)
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing an existing one of the same name
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        for attr in self.attrs.iter_mut() {
            if attr.name.eq_ignore_ascii_case(name) {
                attr.value = value;
                return;
            }
        }
        self.attrs.push(Attribute::new(name, value));
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self
            .attrs
            .iter()
            .position(|a| a.name.eq_ignore_ascii_case(name))?;
        Some(self.attrs.remove(pos).value)
    }
}

bitflags::bitflags! {
    /// Dynamic UI state, packed into one byte
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ElementState: u8 {
        const VISITED = 1 << 0;
        const HOVER = 1 << 1;
        const ACTIVE = 1 << 2;
        const FOCUS = 1 << 3;
        const DISABLED = 1 << 4;
        const CHECKED = 1 << 5;
        const TARGET = 1 << 6;
    }
}

impl Default for ElementState {
    fn default() -> Self {
        ElementState::empty()
    }
}
