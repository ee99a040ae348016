//! Backend runtime entry point and public API surface.
//!
//! This crate owns the backend lifecycle, routes bridge messages to services,
//! and manages the shared state (catalog client, cart) used by asynchronous
//! tasks.

mod app;
pub mod cart;
mod config;
mod runtime;
mod services;
mod state;

pub use crate::runtime::{BackendOptions, run};
