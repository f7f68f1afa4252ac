//! 1000 Decors Storefront library.
//!
//! Server-rendered catalog site (French/Arabic) plus the admin panel for
//! products and customer inquiries. Exposed as a library so the binary, the
//! CLI and the integration tests share the same router and data-access layer.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod forms;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
