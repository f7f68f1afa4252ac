//! Display language resolution.
//!
//! The locale chosen through `/lang/{code}` lives in the session; visitors
//! who never chose one get French.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use decors_core::Locale;

use crate::models::session_keys;

/// Extractor yielding the visitor's locale.
pub struct CurrentLocale(pub Locale);

impl<S> FromRequestParts<S> for CurrentLocale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let locale = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<Locale>(session_keys::LOCALE)
                .await
                .ok()
                .flatten()
                .unwrap_or_default(),
            None => Locale::default(),
        };

        Ok(Self(locale))
    }
}

/// Persist the visitor's locale.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_locale(
    session: &Session,
    locale: Locale,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::LOCALE, locale).await
}
