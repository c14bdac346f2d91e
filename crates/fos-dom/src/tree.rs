//! DOM Tree (arena-based allocation)

use crate::{DomError, DomResult, ElementData, ElementState, Node, NodeId};

/// Arena-based DOM tree
///
/// Nodes are never freed; a detached node simply has no parent. Every node
/// without a parent is a root, so one arena can hold several documents.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
    default_font_size: Option<i32>,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create a new empty DOM tree
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            default_font_size: None,
        }
    }

    /// Report `size` as the user-agent default font size
    pub fn with_default_font_size(mut self, size: i32) -> Self {
        self.default_font_size = Some(size);
        self
    }

    pub fn default_font_size(&self) -> Option<i32> {
        self.default_font_size
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    /// Element data of `id`, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id)?.as_element()
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.get_mut(id)
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parent of `id`, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// `child` must be detached, `parent` must be an element, and `child`
    /// may not be `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if !self.node(parent)?.is_element() {
            tracing::debug!("Rejected append of {:?}: parent {:?} is not an element", child, parent);
            return Err(DomError::NotAnElement(parent));
        }
        let attached = self.node(child)?.parent.is_valid();
        let cyclic = self.ancestors_inclusive(parent).any(|id| id == child);
        if attached || cyclic {
            tracing::debug!(
                "Rejected append of {:?} to {:?} (attached: {}, cyclic: {})",
                child,
                parent,
                attached,
                cyclic
            );
            return Err(DomError::HierarchyRequest { parent, child });
        }

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;

        Ok(child)
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> DomResult<NodeId> {
        let child = self.create_element(tag);
        self.append_child(parent, child)
    }

    /// Create a text node and append it to `parent`
    pub fn append_text(&mut self, parent: NodeId, content: &str) -> DomResult<NodeId> {
        let child = self.create_text(content);
        self.append_child(parent, child)
    }

    /// Set (or replace) an attribute on an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    /// Toggle UI state flags on an element
    pub fn set_state(&mut self, id: NodeId, flag: ElementState, on: bool) -> DomResult<()> {
        self.element_mut(id)?.state.set(flag, on);
        Ok(())
    }

    /// Children of `id` in document order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Element children of `id` in document order
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &ElementData)> + '_ {
        self.children(id)
            .filter_map(move |child| self.element(child).map(|el| (child, el)))
    }

    /// `id`, then each ancestor up to the root
    pub fn ancestors_inclusive(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.get(id).map(|_| id), move |current| self.parent(*current))
    }

    /// Concatenated text of every text node beneath `id`
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            out.push_str(text);
        }
        for child in self.children(id) {
            self.collect_text(child, out);
        }
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next;
        let node = self.tree.get(current)?;
        self.next = node.next_sibling;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_links_siblings() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let a = tree.append_element(ul, "li").unwrap();
        let b = tree.append_element(ul, "li").unwrap();
        let c = tree.append_text(ul, "tail").unwrap();

        assert_eq!(tree.children(ul).collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(tree.element_children(ul).count(), 2);
        assert_eq!(tree.get(b).unwrap().prev_sibling, a);
        assert_eq!(tree.get(b).unwrap().next_sibling, c);
        assert_eq!(tree.parent(c), Some(ul));
        assert_eq!(tree.parent(ul), None);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_append_rejects_bad_hierarchy() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let span = tree.append_element(div, "span").unwrap();
        let text = tree.append_text(span, "x").unwrap();

        assert_eq!(
            tree.append_child(span, div),
            Err(DomError::HierarchyRequest { parent: span, child: div })
        );
        assert_eq!(
            tree.append_child(div, div),
            Err(DomError::HierarchyRequest { parent: div, child: div })
        );
        // already attached
        assert!(tree.append_child(div, span).is_err());

        let orphan = tree.create_element("b");
        assert_eq!(tree.append_child(text, orphan), Err(DomError::NotAnElement(text)));
        assert_eq!(tree.append_child(NodeId(99), orphan), Err(DomError::NotFound(NodeId(99))));
    }

    #[test]
    fn test_attributes_and_state() {
        let mut tree = DomTree::new();
        let input = tree.create_element("input");
        tree.set_attribute(input, "type", "checkbox").unwrap();
        tree.set_state(input, ElementState::CHECKED, true).unwrap();

        let el = tree.element(input).unwrap();
        assert_eq!(el.get_attr("TYPE"), Some("checkbox"));
        assert!(el.state.contains(ElementState::CHECKED));

        let text = tree.create_text("x");
        assert_eq!(
            tree.set_attribute(text, "id", "t"),
            Err(DomError::NotAnElement(text))
        );
    }

    #[test]
    fn test_text_content() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p");
        tree.append_text(p, "Hello, ").unwrap();
        let b = tree.append_element(p, "b").unwrap();
        tree.append_text(b, "world").unwrap();
        assert_eq!(tree.text_content(p), "Hello, world");
    }
}
