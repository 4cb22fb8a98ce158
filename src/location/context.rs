//! Location provider scope
//!
//! Installs a hydrated [`LocationStore`] as Dioxus context. Components read and
//! change the selection through a [`LocationHandle`]; every component that reads
//! it re-renders when the selection changes.

use crate::location::LocationStore;
use crate::storage::KeyValueStore;
use crate::types::{Location, LocationError};
use dioxus::prelude::*;

/// Copyable access to the provided [`LocationStore`].
#[derive(Clone, Copy)]
pub struct LocationHandle {
    store: Signal<LocationStore>,
}

impl LocationHandle {
    pub fn location(&self) -> Option<Location> {
        self.store.read().location()
    }

    pub fn set_location(&mut self, location: Option<Location>) {
        self.store.write().set_location(location);
    }

    pub fn set_from_value(&mut self, value: &str) -> Result<(), LocationError> {
        self.store.write().set_from_value(value)
    }

    #[cfg(test)]
    pub(crate) fn stored_value(&self) -> Option<String> {
        self.store
            .read()
            .storage()
            .get(crate::location::STORAGE_KEY)
            .ok()
            .flatten()
    }
}

/// Create the location store for this subtree.
///
/// `storage` is called once, on first render; the store is hydrated from it
/// before any descendant reads the location.
pub fn use_location_provider(
    storage: impl FnOnce() -> Box<dyn KeyValueStore>,
) -> LocationHandle {
    let store = use_signal(move || {
        let mut store = LocationStore::new(storage());
        store.hydrate();
        tracing::info!("Location store initialized at {:?}", store.location());
        store
    });
    use_context_provider(|| LocationHandle { store })
}

/// The nearest provided [`LocationHandle`], or [`LocationError::OutsideProvider`].
pub fn try_use_location() -> Result<LocationHandle, LocationError> {
    try_use_context::<LocationHandle>().ok_or(LocationError::OutsideProvider)
}

/// The nearest provided [`LocationHandle`].
///
/// # Panics
///
/// If no ancestor called [`use_location_provider`].
pub fn use_location() -> LocationHandle {
    try_use_location().unwrap_or_else(|e| panic!("{e}"))
}
