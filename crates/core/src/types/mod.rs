//! Core types for 1000 Decors.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod dimensions;
pub mod email;
pub mod id;
pub mod locale;
pub mod price;
pub mod slug;
pub mod status;

pub use dimensions::Dimensions;
pub use email::{Email, EmailError};
pub use id::*;
pub use locale::Locale;
pub use price::PriceEstimate;
pub use slug::{Slug, SlugError, slugify};
pub use status::{InquiryStatus, StatusParseError};
