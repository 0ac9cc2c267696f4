//! Favorites core: the asset model, the shared catalog, and the per-user
//! favorites store.
//!
//! Nothing in this crate performs I/O on the hot path or logs; the transport
//! layer owns serialization, logging, and startup.

pub mod assets;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod types;
