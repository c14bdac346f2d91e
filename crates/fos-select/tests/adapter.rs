//! Adapter tests over a string-keyed host tree
//!
//! The tree is a flat element map keyed by identifier, the way a scripting
//! host typically exposes its document.

use std::collections::HashMap;
use std::sync::Arc;

use fos_select::{
    AdapterConfig, AncestorEntry, Attribute, AttributeOperator, CaseSensitivity, DynamicState,
    HandlerTable, SelectError, SelectorAdapter, SiblingEntry, TreeCapability,
};

#[derive(Debug, Default)]
struct Element {
    tag: String,
    parent: Option<String>,
    children: Vec<String>,
    attributes: Vec<Attribute>,
}

#[derive(Debug, Default)]
struct FlatTree {
    elements: HashMap<String, Element>,
    hovered: Option<String>,
}

impl FlatTree {
    fn add(&mut self, id: &str, tag: &str, parent: Option<&str>, attrs: &[(&str, &str)]) {
        if let Some(parent) = parent {
            self.elements
                .get_mut(parent)
                .expect("parent added first")
                .children
                .push(id.to_string());
        }
        self.elements.insert(
            id.to_string(),
            Element {
                tag: tag.to_string(),
                parent: parent.map(str::to_string),
                children: Vec::new(),
                attributes: attrs.iter().map(|(n, v)| Attribute::new(*n, *v)).collect(),
            },
        );
    }

    fn get(&self, id: &str) -> &Element {
        &self.elements[id]
    }
}

impl TreeCapability for FlatTree {
    type Node = String;

    fn tag_name(&self, node: &String) -> String {
        self.get(node).tag.clone()
    }

    fn attributes(&self, node: &String) -> Vec<Attribute> {
        self.get(node).attributes.clone()
    }

    fn siblings(&self, node: &String) -> Vec<SiblingEntry<String>> {
        match &self.get(node).parent {
            Some(parent) => self
                .get(parent)
                .children
                .iter()
                .map(|child| SiblingEntry::new(self.get(child).tag.clone(), child.clone()))
                .collect(),
            None => vec![SiblingEntry::new(self.get(node).tag.clone(), node.clone())],
        }
    }

    fn ancestors(&self, node: &String) -> Vec<AncestorEntry<String>> {
        let mut ancestors = Vec::new();
        let mut current = self.get(node).parent.clone();
        while let Some(id) = current {
            let element = self.get(&id);
            ancestors.push(AncestorEntry::new(element.tag.clone(), id.clone()));
            current = element.parent.clone();
        }
        ancestors
    }

    fn is_empty(&self, node: &String) -> bool {
        self.get(node).children.is_empty()
    }

    fn is_hover(&self, node: &String) -> Option<bool> {
        Some(self.hovered.as_deref() == Some(node.as_str()))
    }
}

fn s(id: &str) -> String {
    id.to_string()
}

/// div > p
fn div_p() -> SelectorAdapter<FlatTree> {
    let mut tree = FlatTree::default();
    tree.add("div", "div", None, &[]);
    tree.add("p", "p", Some("div"), &[]);
    SelectorAdapter::from(tree)
}

/// ul > (a, b, c)
fn three_siblings() -> SelectorAdapter<FlatTree> {
    let mut tree = FlatTree::default();
    tree.add("ul", "ul", None, &[]);
    tree.add("a", "a", Some("ul"), &[]);
    tree.add("b", "b", Some("ul"), &[]);
    tree.add("c", "c", Some("ul"), &[]);
    SelectorAdapter::from(tree)
}

#[test]
fn test_div_p_scenario() {
    let adapter = div_p();

    assert_eq!(adapter.tree().siblings(&s("p")), vec![SiblingEntry::new("p", s("p"))]);
    assert_eq!(adapter.count_siblings(&s("p"), false, false).unwrap(), 0);
    assert!(adapter.is_root(&s("div")));
    assert!(!adapter.is_root(&s("p")));
    assert_eq!(adapter.named_parent(&s("p"), "div"), Some(s("div")));
    assert_eq!(adapter.named_parent(&s("p"), "span"), None);
    assert_eq!(adapter.named_ancestor(&s("p"), "DIV"), Some(s("div")));
    assert_eq!(adapter.parent_node(&s("div")), None);
}

#[test]
fn test_sibling_combinators() {
    let adapter = three_siblings();

    assert_eq!(adapter.named_generic_sibling(&s("c"), "a"), Some(s("a")));
    assert_eq!(adapter.named_generic_sibling(&s("a"), "c"), Some(s("c")));
    assert_eq!(adapter.named_generic_sibling(&s("a"), "a"), None);
    assert_eq!(adapter.named_sibling(&s("c"), "a").unwrap(), None);
    assert_eq!(adapter.named_sibling(&s("c"), "b").unwrap(), Some(s("b")));
    assert_eq!(adapter.sibling_node(&s("a")).unwrap(), None);
    assert_eq!(adapter.sibling_node(&s("b")).unwrap(), Some(s("a")));
}

#[test]
fn test_sibling_counts_partition_list() {
    let adapter = three_siblings();
    for id in ["a", "b", "c"] {
        let node = s(id);
        let total = adapter.tree().siblings(&node).len();
        let before = adapter.count_siblings(&node, false, false).unwrap();
        let after = adapter.count_siblings(&node, false, true).unwrap();
        assert_eq!(before + after + 1, total);
    }
    assert!(adapter.is_first_child(&s("a")).unwrap());
    assert!(adapter.is_last_child(&s("c")).unwrap());
    assert_eq!(adapter.child_index(&s("b"), false).unwrap(), 2);
    assert!(adapter.is_only_of_type(&s("b")).unwrap());
    assert!(!adapter.is_only_child(&s("b")).unwrap());
}

#[test]
fn test_attribute_predicates() {
    let mut tree = FlatTree::default();
    tree.add(
        "link",
        "A",
        None,
        &[
            ("HREF", "https://example.com/page.html"),
            ("lang", "en-"),
            ("class", "nav Primary"),
            ("id", "Main-Link"),
        ],
    );
    let adapter = SelectorAdapter::from(tree);
    let node = s("link");

    assert!(adapter.has_name(&node, "a"));
    assert!(adapter.is_link(&node));
    assert!(adapter.has_attribute(&node, "href"));
    assert!(!adapter.has_attribute(&node, "title"));
    assert!(adapter.has_attribute_prefix(&node, "href", "https://"));
    assert!(adapter.has_attribute_suffix(&node, "href", ".HTML"));
    assert!(adapter.has_attribute_includes(&node, "href", "example"));
    assert!(adapter.has_attribute_substring(&node, "href", "example"));
    assert!(adapter.has_attribute_dashmatch(&node, "lang", "en"));
    assert!(!adapter.has_attribute_equal(&node, "lang", "en"));
    assert!(adapter.has_class(&node, "primary"));
    assert!(adapter.has_id(&node, "main-link"));
    assert_eq!(adapter.node_id(&node), "Main-Link");
    assert_eq!(adapter.node_classes(&node), vec!["nav", "Primary"]);
}

#[test]
fn test_case_sensitive_value_policy() {
    let mut tree = FlatTree::default();
    tree.add("n", "input", None, &[("type", "Text"), ("class", "Big"), ("id", "X")]);
    let config = AdapterConfig::default().with_value_case(CaseSensitivity::Sensitive);
    let adapter = SelectorAdapter::new(tree, config);
    let node = s("n");

    assert!(adapter.has_attribute_equal(&node, "TYPE", "Text"));
    assert!(!adapter.has_attribute_equal(&node, "type", "text"));
    assert!(!adapter.has_class(&node, "big"));
    assert!(adapter.has_id(&node, "X"));
    assert!(!adapter.has_id(&node, "x"));
    assert!(adapter.has_attribute_matching(&node, "type", AttributeOperator::Prefix, "Te"));
}

#[test]
fn test_link_requires_anchor_and_href() {
    let mut tree = FlatTree::default();
    tree.add("root", "div", None, &[("href", "x")]);
    tree.add("empty", "a", Some("root"), &[("href", "")]);
    tree.add("bare", "a", Some("root"), &[]);
    let adapter = SelectorAdapter::from(tree);

    assert!(!adapter.is_link(&s("root")));
    assert!(!adapter.is_link(&s("empty")));
    assert!(!adapter.is_link(&s("bare")));
}

#[test]
fn test_empty_and_missing_id() {
    let adapter = div_p();
    assert!(adapter.is_empty(&s("p")));
    assert!(!adapter.is_empty(&s("div")));
    assert_eq!(adapter.node_id(&s("p")), "");
    assert!(!adapter.has_id(&s("p"), ""));
}

#[test]
fn test_dynamic_state_fallbacks() {
    let mut tree = FlatTree::default();
    tree.add("root", "html", None, &[]);
    tree.hovered = Some(s("root"));
    let adapter = SelectorAdapter::from(tree);
    let node = s("root");

    assert!(adapter.is_hover(&node));
    assert!(adapter.matches_state(&node, DynamicState::Hover));
    // no host support for these
    assert!(!adapter.is_focus(&node));
    assert!(!adapter.is_checked(&node));
    assert!(!adapter.is_lang(&node, "en"));
    assert_eq!(adapter.default_font_size(), 16);
}

#[test]
fn test_fallback_font_size_is_configurable() {
    let mut tree = FlatTree::default();
    tree.add("root", "html", None, &[]);
    let adapter = SelectorAdapter::new(tree, AdapterConfig::default().with_fallback_font_size(12));
    assert_eq!(adapter.default_font_size(), 12);
}

fn broken_handlers() -> HandlerTable<String> {
    HandlerTable::builder()
        .tag_name(|_| "li".to_string())
        .attributes(|_| Vec::new())
        // forgets to include the queried node
        .siblings(|_| vec![SiblingEntry::new("li", "other".to_string())])
        .ancestors(|_| vec![AncestorEntry::new("ul", "list".to_string())])
        .is_empty(|_| true)
        .build()
        .unwrap()
}

#[test]
fn test_malformed_sibling_list_is_reported() {
    let adapter = SelectorAdapter::from(broken_handlers());
    let node = s("item");

    assert!(matches!(adapter.count_siblings(&node, false, false), Err(SelectError::MalformedTree(_))));
    assert!(matches!(adapter.named_sibling(&node, "li"), Err(SelectError::MalformedTree(_))));
    assert!(matches!(adapter.sibling_node(&node), Err(SelectError::MalformedTree(_))));
    // predicates that do not locate the node still answer
    assert_eq!(adapter.named_parent(&node, "ul"), Some(s("list")));
}

#[test]
fn test_handler_table_optional_capabilities() {
    let table = HandlerTable::builder()
        .tag_name(|_| "input".to_string())
        .attributes(|_| Vec::new())
        .siblings(|node: &String| vec![SiblingEntry::new("input", node.clone())])
        .ancestors(|_| Vec::new())
        .is_empty(|_| true)
        .is_checked(|node| node == "on")
        .is_disabled(|_| false)
        .is_lang(|_, lang| lang.starts_with("fr"))
        .default_font_size(|| 120)
        .build()
        .unwrap();
    let adapter = SelectorAdapter::from(Arc::new(table));

    assert!(adapter.is_checked(&s("on")));
    assert!(!adapter.is_checked(&s("off")));
    assert!(!adapter.is_disabled(&s("on")));
    assert!(!adapter.is_enabled(&s("on")));
    assert!(adapter.is_lang(&s("on"), "fr-CA"));
    assert_eq!(adapter.default_font_size(), 120);
}
