//! fOS Select - Selector Predicate Adapter
//!
//! Bridges a CSS selection engine to a document tree it does not own.
//!
//! The host implements a narrow [`TreeCapability`] (tag name, attributes,
//! siblings, ancestors, emptiness, plus optional UI state). The
//! [`SelectorAdapter`] derives every selector predicate the engine asks for
//! from those primitives, and [`StyleContext`] decodes the engine's computed
//! style text into a [`StyleResult`].
//!
//! # Example
//! ```rust,ignore
//! use fos_select::{SelectorAdapter, AdapterConfig};
//!
//! let adapter = SelectorAdapter::new(tree, AdapterConfig::default());
//! assert!(adapter.is_root(&root)?);
//! let parent = adapter.named_parent(&child, "div")?;
//! ```

mod adapter;
mod attributes;
mod capability;
mod config;
mod engine;
mod handlers;
mod matching;
mod pseudo;
mod siblings;
mod style;
pub mod font;
pub mod registry;
pub mod sheet;

pub use adapter::{DynamicState, SelectorAdapter, matches_nth};
pub use attributes::AttributeIndex;
pub use capability::{AncestorEntry, Attribute, NodeEntry, SiblingEntry, TreeCapability};
pub use config::{AdapterConfig, DEFAULT_FONT_SIZE};
pub use engine::{EngineError, EngineStatus, StyleContext, StyleEngine, StyleRequest};
pub use handlers::{HandlerTable, HandlerTableBuilder};
pub use matching::{AttributeOperator, CaseSensitivity};
pub use pseudo::PseudoElement;
pub use sheet::{CssLevel, MediaList, MediaType, Origin, SheetOptions};
pub use siblings::{SiblingResolver, self_index};
pub use style::StyleResult;

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, SelectError>;

/// Adapter error
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// A required tree capability was not supplied at registration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The host tree returned data that violates the capability contract
    #[error("Malformed tree: {0}")]
    MalformedTree(String),

    /// An argument outside the accepted set (pseudo-element, sheet option, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The selection engine reported a failure
    #[error(transparent)]
    Engine(#[from] EngineError),
}
