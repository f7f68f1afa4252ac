//! Admin gate.
//!
//! A single shared password unlocks the admin panel. On success an
//! [`AdminSession`] is stored in the session; [`RequireAdmin`] guards every
//! admin handler and sends anonymous visitors to the login page.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use secrecy::{ExposeSecret, SecretString};
use tower_sessions::Session;

use crate::models::{AdminSession, session_keys};

/// Login page path.
pub const LOGIN_PATH: &str = "/admin/login";

/// Extractor that requires an authenticated admin session.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireAdmin(admin): RequireAdmin) -> impl IntoResponse {
///     format!("Logged in since {}", admin.logged_in_at)
/// }
/// ```
pub struct RequireAdmin(pub AdminSession);

/// Error returned when the admin session is missing.
pub enum AdminRejection {
    /// Redirect to the login page.
    RedirectToLogin,
    /// No session layer installed.
    NoSession,
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
            Self::NoSession => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminRejection::NoSession)?;

        let admin: AdminSession = session
            .get(session_keys::ADMIN)
            .await
            .ok()
            .flatten()
            .ok_or(AdminRejection::RedirectToLogin)?;

        Ok(Self(admin))
    }
}

/// Extractor that reports whether the visitor is an admin, without rejecting.
pub struct IsAdmin(pub bool);

impl<S> FromRequestParts<S> for IsAdmin
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let logged_in = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<AdminSession>(session_keys::ADMIN)
                .await
                .ok()
                .flatten()
                .is_some(),
            None => false,
        };

        Ok(Self(logged_in))
    }
}

/// Compare a submitted password with the configured secret.
///
/// Runs in time independent of where the first mismatch is.
#[must_use]
pub fn password_matches(submitted: &str, expected: &SecretString) -> bool {
    let expected = expected.expose_secret().as_bytes();
    let submitted = submitted.as_bytes();
    if submitted.len() != expected.len() {
        return false;
    }
    submitted
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

/// Mark the session as authenticated.
///
/// Cycles the session ID first so a pre-login cookie cannot be reused.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::ADMIN, AdminSession::now()).await
}

/// Clear the admin flag (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<AdminSession>(session_keys::ADMIN)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_matches() {
        let secret = SecretString::from("Zq8!mT4#rW2@kL9$");
        assert!(password_matches("Zq8!mT4#rW2@kL9$", &secret));
        assert!(!password_matches("Zq8!mT4#rW2@kL9", &secret));
        assert!(!password_matches("zq8!mT4#rW2@kL9$", &secret));
        assert!(!password_matches("", &secret));
    }
}
