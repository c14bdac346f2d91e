//! Style engine boundary
//!
//! The cascade itself lives in an external engine. This module defines what
//! the adapter expects from it and wraps the style-query round trip:
//! validate the pseudo-element, gather inline style, ask the engine, decode
//! its answer.

use std::fmt;

use crate::sheet::{MediaType, SheetOptions};
use crate::{PseudoElement, SelectorAdapter, StyleResult, TreeCapability};

/// Failure statuses an engine may report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineStatus {
    InvalidElement,
    InvalidPseudoElement,
    CreateContext,
    CreateSheet,
    CreateStyle,
    ComposeStyle,
    DestroyContext,
    DestroySheet,
    DestroyStyle,
    DestroyNodeData,
    InvalidLevel,
    InvalidOrigin,
    InvalidMedia,
    AppendData,
    DataDone,
    AppendSheet,
    HandlerLength,
}

impl EngineStatus {
    /// Map a numeric status; 0 (success) and unknown codes yield `None`
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            1 => Self::InvalidElement,
            2 => Self::InvalidPseudoElement,
            3 => Self::CreateContext,
            4 => Self::CreateSheet,
            5 => Self::CreateStyle,
            6 => Self::ComposeStyle,
            7 => Self::DestroyContext,
            8 => Self::DestroySheet,
            9 => Self::DestroyStyle,
            10 => Self::DestroyNodeData,
            11 => Self::InvalidLevel,
            12 => Self::InvalidOrigin,
            13 => Self::InvalidMedia,
            14 => Self::AppendData,
            15 => Self::DataDone,
            16 => Self::AppendSheet,
            17 => Self::HandlerLength,
            _ => return None,
        })
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidElement => "Invalid element!",
            Self::InvalidPseudoElement => "Invalid pseudo-element!",
            Self::CreateContext => "Unable to create selection context!",
            Self::CreateSheet => "Unable to create stylesheet!",
            Self::CreateStyle => "Unable to create computed style for element!",
            Self::ComposeStyle => "Unable to compose computed style with parent!",
            Self::DestroyContext => "Unable to destroy selection context!",
            Self::DestroySheet => "Unable to destroy stylesheet!",
            Self::DestroyStyle => "Unable to destroy computed style for element!",
            Self::DestroyNodeData => "Unable to destroy node data!",
            Self::InvalidLevel => "Invalid CSS level!",
            Self::InvalidOrigin => "Invalid stylesheet origin!",
            Self::InvalidMedia => "Invalid media type!",
            Self::AppendData => "Unable to append data to stylesheet!",
            Self::DataDone => "Unable to declare the data on the stylesheet as done!",
            Self::AppendSheet => "Unable to append stylesheet to selection context!",
            Self::HandlerLength => "Invalid length of handler functions array!",
        }
    }
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Failure reported by the engine, carrying its own diagnostic text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EngineError {
    pub status: EngineStatus,
    pub message: String,
}

impl EngineError {
    /// Error with the status's standard message
    pub fn new(status: EngineStatus) -> Self {
        Self {
            status,
            message: status.message().to_string(),
        }
    }

    /// Error with engine-specific diagnostic text
    pub fn with_message(status: EngineStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<EngineStatus> for EngineError {
    fn from(status: EngineStatus) -> Self {
        Self::new(status)
    }
}

/// One computed-style query handed to the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleRequest<'a, N> {
    pub node: &'a N,
    pub pseudo: PseudoElement,
    pub media: MediaType,
    /// The node's own `style` attribute, or ""
    pub inline_style: &'a str,
}

/// External selection and cascade engine
pub trait StyleEngine<N> {
    /// Register a stylesheet
    fn add_sheet(&mut self, css: &str, options: &SheetOptions) -> Result<(), EngineError>;

    /// Drop every registered stylesheet
    fn reset(&mut self) -> Result<(), EngineError>;

    /// Compute a node's style, answering selector questions through
    /// `adapter`. Returns `property: value` lines.
    fn select_style<T>(
        &mut self,
        adapter: &SelectorAdapter<T>,
        request: &StyleRequest<'_, N>,
    ) -> Result<String, EngineError>
    where
        T: TreeCapability<Node = N>;
}

/// An adapter paired with the engine that consults it
#[derive(Debug)]
pub struct StyleContext<E, T> {
    engine: E,
    adapter: SelectorAdapter<T>,
}

impl<E, T> StyleContext<E, T>
where
    T: TreeCapability,
    E: StyleEngine<T::Node>,
{
    pub fn new(engine: E, adapter: SelectorAdapter<T>) -> Self {
        Self { engine, adapter }
    }

    pub fn adapter(&self) -> &SelectorAdapter<T> {
        &self.adapter
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Add a stylesheet to the selection context
    pub fn add_sheet(&mut self, css: &str, options: &SheetOptions) -> crate::Result<()> {
        tracing::debug!(
            "Adding stylesheet ({} bytes, level {}, media {})",
            css.len(),
            options.level.as_str(),
            options.media
        );
        self.engine.add_sheet(css, options)?;
        Ok(())
    }

    /// Remove all stylesheets
    pub fn reset(&mut self) -> crate::Result<()> {
        tracing::debug!("Resetting selection context");
        self.engine.reset()?;
        Ok(())
    }

    /// Computed style of `node` (or one of its pseudo-elements) for screen media
    pub fn get_style(&mut self, node: &T::Node, pseudo: Option<&str>) -> crate::Result<StyleResult> {
        self.get_style_for_media(node, pseudo, MediaType::Screen)
    }

    /// Computed style of `node` for the given media.
    ///
    /// The pseudo-element is validated before the engine is involved.
    pub fn get_style_for_media(
        &mut self,
        node: &T::Node,
        pseudo: Option<&str>,
        media: MediaType,
    ) -> crate::Result<StyleResult> {
        let pseudo = PseudoElement::validate(pseudo)?;
        let attributes = self.adapter.attributes(node);

        let request = StyleRequest {
            node,
            pseudo,
            media,
            inline_style: attributes.inline_style(),
        };

        tracing::debug!("Style query for {:?} ({}, {})", node, pseudo, media.as_str());
        let raw = self.engine.select_style(&self.adapter, &request)?;
        Ok(StyleResult::decode(&raw))
    }

    pub fn into_parts(self) -> (E, SelectorAdapter<T>) {
        (self.engine, self.adapter)
    }
}
