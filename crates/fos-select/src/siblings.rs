//! Sibling Resolver
//!
//! Locates a node inside its parent's child list. Backs the `+` and `~`
//! combinators and the sibling counts behind `:nth-child`/`:nth-of-type`.

use std::fmt::Debug;

use crate::{SelectError, SiblingEntry};

/// A node's position within its sibling list
#[derive(Debug)]
pub struct SiblingResolver<'a, N> {
    siblings: &'a [SiblingEntry<N>],
    index: usize,
}

impl<'a, N: PartialEq + Debug> SiblingResolver<'a, N> {
    /// Locate `node` in `siblings`.
    ///
    /// The node must appear exactly once; anything else means the host's
    /// sibling list is broken and is reported as [`SelectError::MalformedTree`].
    pub fn new(node: &N, siblings: &'a [SiblingEntry<N>]) -> crate::Result<Self> {
        let index = self_index(node, siblings)?;
        Ok(Self { siblings, index })
    }

    /// Position of the node in the list
    #[inline]
    pub fn self_index(&self) -> usize {
        self.index
    }

    /// The node's own entry
    pub fn current(&self) -> &'a SiblingEntry<N> {
        &self.siblings[self.index]
    }

    /// Entry directly before the node, if any
    pub fn previous_sibling(&self) -> Option<&'a SiblingEntry<N>> {
        self.index
            .checked_sub(1)
            .and_then(|prev| self.siblings.get(prev))
    }

    /// Every entry except the node itself, in document order
    pub fn others(&self) -> impl Iterator<Item = &'a SiblingEntry<N>> + '_ {
        self.siblings
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != self.index)
            .map(|(_, entry)| entry)
    }

    /// Count entries strictly before (or after) the node. With
    /// `same_tag_only`, only entries sharing the node's tag name count.
    pub fn count_siblings(&self, same_tag_only: bool, after: bool) -> usize {
        let range = if after {
            &self.siblings[self.index + 1..]
        } else {
            &self.siblings[..self.index]
        };

        if same_tag_only {
            let tag = self.current().tag_name.as_str();
            range.iter().filter(|entry| entry.has_tag(tag)).count()
        } else {
            range.len()
        }
    }

    /// Total number of entries, the node included
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Never true: a resolver always contains its own node
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }
}

/// Position of `node` in `siblings`, by identifier equality
pub fn self_index<N: PartialEq + Debug>(node: &N, siblings: &[SiblingEntry<N>]) -> crate::Result<usize> {
    let mut positions = siblings
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.identifier == *node)
        .map(|(i, _)| i);

    match (positions.next(), positions.next()) {
        (Some(index), None) => Ok(index),
        (None, _) => {
            tracing::warn!("Sibling list of {:?} does not contain the node", node);
            Err(SelectError::MalformedTree(format!(
                "the siblings of {:?} do not include the node being queried",
                node
            )))
        }
        (Some(_), Some(_)) => {
            tracing::warn!("Sibling list of {:?} contains the node more than once", node);
            Err(SelectError::MalformedTree(format!(
                "the siblings of {:?} include the node being queried more than once",
                node
            )))
        }
    }
}
