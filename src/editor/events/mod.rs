//! # Events Module
//!
//! Shared input-event types: platform identity and key-name formatting.

pub mod types;

pub use types::{key_name, Platform};
