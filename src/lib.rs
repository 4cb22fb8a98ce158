//! Campus Guide Library
//!
//! Core library for the Campus Guide desktop application.

pub mod app;
pub mod location;
pub mod routes;
pub mod storage;
pub mod types;
pub mod ui;
