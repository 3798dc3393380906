//! Core components of the `stock-alert` crate.
//!
//! This module contains the foundational building blocks shared by every provider:
//! - The [`AlertClient`] and its builder.
//! - The [`AlertError`] type.
//! - The run [`Config`].
//! - Internal response helpers.

/// The HTTP client (`AlertClient`) and its builder.
pub mod client;
/// Run configuration loaded from the environment.
pub mod config;
/// The primary error type (`AlertError`) for the crate.
pub mod error;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::AlertClient`
pub use client::{AlertClient, AlertClientBuilder};
pub use config::Config;
pub use error::AlertError;
