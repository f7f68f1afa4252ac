//! Session-related types.
//!
//! Types stored in the session for admin access and the visitor's locale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session-stored proof that the visitor passed the admin gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSession {
    /// When the shared secret was accepted.
    pub logged_in_at: DateTime<Utc>,
}

impl AdminSession {
    /// A session starting now.
    #[must_use]
    pub fn now() -> Self {
        Self {
            logged_in_at: Utc::now(),
        }
    }
}

/// Session keys.
pub mod keys {
    /// Key for the admin flag.
    pub const ADMIN: &str = "admin";

    /// Key for the chosen display language.
    pub const LOCALE: &str = "locale";
}
