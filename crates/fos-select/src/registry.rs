//! Process-wide adapter registration
//!
//! For embeddings where the engine can only reach one global handler set.
//! Prefer passing a [`SelectorAdapter`] explicitly; this slot exists for
//! callers that cannot.
//!
//! Registration replaces whatever was installed before. Readers hold an
//! `Arc`, so a replacement never invalidates a query already in flight.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{AdapterConfig, HandlerTable, SelectError, SelectorAdapter};

/// Adapter type stored in the global slot
pub type GlobalAdapter = SelectorAdapter<HandlerTable<String>>;

static INSTALLED: RwLock<Option<Arc<GlobalAdapter>>> = parking_lot::const_rwlock(None);

/// Install `handlers` as the process-wide tree capability
pub fn register(handlers: HandlerTable<String>) -> Arc<GlobalAdapter> {
    register_with_config(handlers, AdapterConfig::default())
}

/// Install with a specific configuration
pub fn register_with_config(handlers: HandlerTable<String>, config: AdapterConfig) -> Arc<GlobalAdapter> {
    let adapter = Arc::new(SelectorAdapter::new(handlers, config));
    let previous = INSTALLED.write().replace(Arc::clone(&adapter));

    if previous.is_some() {
        tracing::info!("Tree capability re-registered");
    } else {
        tracing::info!("Tree capability registered");
    }

    adapter
}

/// The installed adapter
pub fn installed() -> crate::Result<Arc<GlobalAdapter>> {
    INSTALLED.read().clone().ok_or_else(|| {
        SelectError::Configuration("no tree capability has been registered".to_string())
    })
}

/// Whether a tree capability is installed
pub fn is_registered() -> bool {
    INSTALLED.read().is_some()
}

/// Remove the installed adapter, returning it
pub fn unregister() -> Option<Arc<GlobalAdapter>> {
    let previous = INSTALLED.write().take();
    if previous.is_some() {
        tracing::info!("Tree capability unregistered");
    }
    previous
}
