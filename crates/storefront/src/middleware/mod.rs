//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors, added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions with in-memory store)
//! 5. Security headers (CSP, frame options, etc.)

pub mod auth;
pub mod locale;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{IsAdmin, RequireAdmin, clear_admin, password_matches, set_admin};
pub use locale::{CurrentLocale, set_locale};
pub use request_id::{RequestId, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
