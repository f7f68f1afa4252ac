//! Language switch route handler.

use axum::{
    extract::{Path, Query},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;

use decors_core::Locale;

use crate::error::AppError;
use crate::middleware::set_locale;

/// Query parameters for the language switch.
#[derive(Debug, Deserialize)]
pub struct LangQuery {
    pub next: Option<String>,
}

/// Store the chosen locale and go back to the page the visitor was on.
///
/// Unknown codes leave the locale unchanged.
pub async fn switch(
    session: Session,
    Path(code): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Redirect, AppError> {
    if let Some(locale) = Locale::from_code(&code) {
        set_locale(&session, locale).await?;
    }

    Ok(Redirect::to(safe_next(query.next.as_deref())))
}

/// Base the `next` path is resolved against; only its origin matters.
const SAME_SITE: &str = "http://localhost/";

/// Only same-site relative paths are followed.
///
/// Browsers drop tabs and newlines from a `Location` value, so any control
/// character or whitespace is refused before the path is resolved.
fn safe_next(next: Option<&str>) -> &str {
    let Some(path) = next else {
        return "/";
    };
    if !path.starts_with('/') || path.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return "/";
    }

    let Ok(base) = url::Url::parse(SAME_SITE) else {
        return "/";
    };
    match base.join(path) {
        Ok(resolved) if resolved.origin() == base.origin() => path,
        _ => "/",
    }
}
