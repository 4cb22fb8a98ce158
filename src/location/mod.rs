//! Selected-location state
//!
//! [`LocationStore`] is the single source of truth for the user's selected
//! location. It writes every change through to an injected [`KeyValueStore`]
//! and notifies subscribers after each change. The [`context`] module exposes
//! it to the component tree.

pub mod context;

pub use context::{try_use_location, use_location, use_location_provider, LocationHandle};

use crate::storage::KeyValueStore;
use crate::types::{Location, LocationError};

/// Storage key holding the selected location
pub const STORAGE_KEY: &str = "selectedLocation";

/// Location used until storage says otherwise
pub const DEFAULT_LOCATION: Location = Location::Rajampeta;

/// Identifies a subscriber registered with [`LocationStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(Option<Location>)>;

pub struct LocationStore {
    storage: Box<dyn KeyValueStore>,
    current: Option<Location>,
    hydrated: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl LocationStore {
    /// Create a store at [`DEFAULT_LOCATION`].
    ///
    /// Storage is not read until [`hydrate`](Self::hydrate).
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            current: Some(DEFAULT_LOCATION),
            hydrated: false,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Adopt the persisted location, if it is one of the allowed values.
    ///
    /// Only the first call reads storage.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }
        self.hydrated = true;

        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No stored location, keeping {:?}", self.current);
                return;
            }
            Err(e) => {
                tracing::warn!("Failed to read stored location, keeping default: {}", e);
                return;
            }
        };

        match raw.parse::<Location>() {
            Ok(location) => {
                tracing::info!("Restored location {}", location);
                self.current = Some(location);
                self.notify();
            }
            Err(_) => tracing::debug!("Ignoring stored location {:?}", raw),
        }
    }

    pub fn location(&self) -> Option<Location> {
        self.current
    }

    /// Set the location, writing through to storage. `None` removes the stored entry.
    ///
    /// If the write fails the current location is kept, so memory never
    /// diverges from storage.
    pub fn set_location(&mut self, location: Option<Location>) {
        let written = match location {
            Some(location) => self.storage.set(STORAGE_KEY, location.as_str()),
            None => self.storage.delete(STORAGE_KEY),
        };
        if let Err(e) = written {
            tracing::error!("Failed to store location {:?}: {}", location, e);
            return;
        }

        tracing::debug!("Stored location {:?}", location);
        self.current = location;
        self.notify();
    }

    /// Set the location from a raw selector value. An empty value clears it.
    pub fn set_from_value(&mut self, value: &str) -> Result<(), LocationError> {
        if value.is_empty() {
            self.set_location(None);
            return Ok(());
        }

        let location = value.parse::<Location>()?;
        self.set_location(Some(location));
        Ok(())
    }

    /// Register `subscriber`, called with the new value after every change.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(Option<Location>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    fn notify(&mut self) {
        let current = self.current;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(current);
        }
    }
}
