//! UI components
//!
//! This module contains all user interface components built with Dioxus.

pub mod layout;
pub mod location_selector;
pub mod pages;

pub use layout::Layout;
pub use location_selector::LocationSelector;
