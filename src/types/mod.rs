//! Shared type definitions

pub mod location;

pub use location::{Location, LocationError};
