//! Style query demo
//!
//! Builds a small document, registers a stylesheet with a toy rule engine
//! and prints the computed style of a few nodes.
//!
//! Run with `RUST_LOG=debug cargo run -p fos-dom --example style_query`.

use fos_dom::{DomTree, ElementState, NodeId};
use fos_select::{
    EngineError, EngineStatus, SelectorAdapter, SheetOptions, StyleContext, StyleEngine,
    StyleRequest, TreeCapability,
};
use tracing_subscriber::EnvFilter;

/// One compound selector: `tag.class#id:pseudo`
#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    id: Option<String>,
    pseudo_classes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug)]
struct Rule {
    /// Rightmost compound first
    selector: Vec<(Compound, Combinator)>,
    declarations: Vec<(String, String)>,
}

/// Enough of a cascade to exercise the adapter: rules apply in source
/// order, no specificity, no inheritance.
#[derive(Debug, Default)]
struct ToyEngine {
    rules: Vec<Rule>,
}

impl ToyEngine {
    fn parse_compound(text: &str) -> Compound {
        let mut compound = Compound::default();
        let mut rest = text;
        let tag_end = rest.find(['.', '#', ':']).unwrap_or(rest.len());
        if tag_end > 0 && &rest[..tag_end] != "*" {
            compound.tag = Some(rest[..tag_end].to_string());
        }
        rest = &rest[tag_end..];

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['.', '#', ':']).unwrap_or(body.len());
            let name = body[..end].to_string();
            match marker {
                '.' => compound.classes.push(name),
                '#' => compound.id = Some(name),
                _ => compound.pseudo_classes.push(name),
            }
            rest = &body[end..];
        }
        compound
    }

    fn parse_selector(text: &str) -> Vec<(Compound, Combinator)> {
        let mut parts = Vec::new();
        let mut combinator = Combinator::Descendant;
        for token in text.split_whitespace() {
            if token == ">" {
                combinator = Combinator::Child;
                continue;
            }
            parts.push((Self::parse_compound(token), combinator));
            combinator = Combinator::Descendant;
        }
        // Each compound keeps the combinator linking it to the one on its left
        parts.reverse();
        parts
    }

    fn matches_compound<T>(
        adapter: &SelectorAdapter<T>,
        node: &NodeId,
        compound: &Compound,
    ) -> fos_select::Result<bool>
    where
        T: TreeCapability<Node = NodeId>,
    {
        if let Some(tag) = &compound.tag {
            if !adapter.has_name(node, tag) {
                return Ok(false);
            }
        }
        if let Some(id) = &compound.id {
            if !adapter.has_id(node, id) {
                return Ok(false);
            }
        }
        if !compound.classes.iter().all(|c| adapter.has_class(node, c)) {
            return Ok(false);
        }
        for pseudo in &compound.pseudo_classes {
            let matched = match pseudo.as_str() {
                "root" => adapter.is_root(node),
                "empty" => adapter.is_empty(node),
                "link" => adapter.is_link(node),
                "hover" => adapter.is_hover(node),
                "visited" => adapter.is_visited(node),
                "checked" => adapter.is_checked(node),
                "first-child" => adapter.is_first_child(node)?,
                "last-child" => adapter.is_last_child(node)?,
                "only-of-type" => adapter.is_only_of_type(node)?,
                _ => false,
            };
            if !matched {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn matches_selector<T>(
        adapter: &SelectorAdapter<T>,
        node: &NodeId,
        selector: &[(Compound, Combinator)],
    ) -> fos_select::Result<bool>
    where
        T: TreeCapability<Node = NodeId>,
    {
        let Some(((compound, combinator), rest)) = selector.split_first() else {
            return Ok(true);
        };
        if !Self::matches_compound(adapter, node, compound)? {
            return Ok(false);
        }
        if rest.is_empty() {
            return Ok(true);
        }
        match combinator {
            Combinator::Child => match adapter.parent_node(node) {
                Some(parent) => Self::matches_selector(adapter, &parent, rest),
                None => Ok(false),
            },
            Combinator::Descendant => {
                for entry in adapter.tree().ancestors(node) {
                    if Self::matches_selector(adapter, &entry.identifier, rest)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}

impl StyleEngine<NodeId> for ToyEngine {
    fn add_sheet(&mut self, css: &str, _options: &SheetOptions) -> Result<(), EngineError> {
        for block in css.split('}').filter(|b| !b.trim().is_empty()) {
            let (selector, body) = block.split_once('{').ok_or_else(|| {
                EngineError::with_message(EngineStatus::AppendData, format!("missing '{{' in `{}`", block.trim()))
            })?;
            let declarations = body
                .split(';')
                .filter_map(|decl| decl.split_once(':'))
                .map(|(p, v)| (p.trim().to_string(), v.trim().to_string()))
                .collect();
            self.rules.push(Rule {
                selector: Self::parse_selector(selector),
                declarations,
            });
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<(), EngineError> {
        self.rules.clear();
        Ok(())
    }

    fn select_style<T>(
        &mut self,
        adapter: &SelectorAdapter<T>,
        request: &StyleRequest<'_, NodeId>,
    ) -> Result<String, EngineError>
    where
        T: TreeCapability<Node = NodeId>,
    {
        let mut out = String::new();
        for rule in &self.rules {
            let matched = Self::matches_selector(adapter, request.node, &rule.selector)
                .map_err(|err| EngineError::with_message(EngineStatus::InvalidElement, err.to_string()))?;
            if matched {
                for (property, value) in &rule.declarations {
                    out.push_str(&format!("{property}: {value}\n"));
                }
            }
        }
        out.push_str(&request.inline_style.replace(';', "\n"));
        Ok(out)
    }
}

const SHEET: &str = "
    html { font-size: 16px; color: black }
    ul.nav > li { display: inline-block; padding: 4px }
    li:first-child { margin-left: 0 }
    a:link { color: blue }
    a:hover { text-decoration: underline }
    p:empty { display: none }
";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = DomTree::new();
    let html = tree.create_element("html");
    let body = tree.append_element(html, "body")?;
    let nav = tree.append_element(body, "ul")?;
    tree.set_attribute(nav, "class", "nav")?;
    let home = tree.append_element(nav, "li")?;
    let link = tree.append_element(home, "a")?;
    tree.set_attribute(link, "href", "/")?;
    tree.set_state(link, ElementState::HOVER, true)?;
    tree.append_text(link, "Home")?;
    let about = tree.append_element(nav, "li")?;
    tree.set_attribute(about, "style", "font-weight: bold")?;
    let empty = tree.append_element(body, "p")?;

    let mut ctx = StyleContext::new(ToyEngine::default(), SelectorAdapter::from(tree));
    ctx.add_sheet(SHEET, &SheetOptions::default())?;

    for (label, node) in [("html", html), ("li#1", home), ("li#2", about), ("a", link), ("p", empty)] {
        let style = ctx.get_style(&node, None)?;
        println!("{label}:");
        for (property, value) in style.iter() {
            println!("  {property}: {value}");
        }
    }

    let before = ctx.get_style(&link, Some("before"))?;
    println!("a::before has {} properties", before.len());

    if let Err(err) = ctx.get_style(&link, Some("marker")) {
        println!("rejected: {err}");
    }

    Ok(())
}
