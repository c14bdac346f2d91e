//! fOS DOM - Document Object Model
//!
//! Compact arena tree used as a host document for the selector adapter.
//! Nodes are addressed by [`NodeId`] and linked through parent/child/sibling
//! handles, so the tree never holds pointers into itself.

mod capability;
mod node;
mod tree;

pub use node::{ElementData, ElementState, Node, NodeData};
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Invalid/null node
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw arena index
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Result type for tree operations
pub type DomResult<T> = Result<T, DomError>;

/// Tree-building errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("Node {0:?} not found")]
    NotFound(NodeId),

    /// Operation needs an element but got a text node
    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),

    /// Insertion would create a cycle or re-parent an attached node
    #[error("Hierarchy request error: cannot append {child:?} to {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}
