//! 1000 Decors Core - Shared types library.
//!
//! This crate provides common types used across all 1000 Decors components:
//! - `storefront` - Public catalog site and admin panel
//! - `cli` - Command-line tools for catalog management
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, slugs, emails, statuses, dimensions,
//!   price estimates and locales

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
