//! Core types for Greengrocer.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod username;

pub use id::ProductId;
pub use price::{CurrencyCode, Price};
pub use username::{Username, UsernameError};
