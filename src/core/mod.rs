//! Core components of the `ystockquote-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`YqClient`] and its builder.
//! - The primary [`YqError`] type.
//! - CSV reader settings and the "N/A" sentinel shared by both endpoints.
//! - Internal networking logic.

/// The main client (`YqClient`), builder, and default endpoints.
pub mod client;
/// CSV reader configuration and the unavailable-field sentinel.
pub mod csv;
/// The primary error type (`YqError`) for the crate.
pub mod error;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::YqClient`
pub use client::{MAX_SYMBOLS_PER_REQUEST, YqClient, YqClientBuilder};
pub use error::YqError;
