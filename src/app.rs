//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::location::use_location_provider;
use crate::routes::Route;
use crate::storage::open_local_storage;
use crate::storage::settings::{load_settings, AppSettings};
use dioxus::prelude::*;

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub settings: Signal<AppSettings>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(load_settings())
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        tracing::info!("AppState initialized");
        Self {
            settings: Signal::new(settings),
        }
    }
}

#[component]
pub fn App() -> Element {
    let app_state = use_context_provider(AppState::new);

    let storage_file = app_state.settings.peek().storage_file.clone();
    use_location_provider(move || open_local_storage(&storage_file));

    rsx! {
        Router::<Route> {}
    }
}
