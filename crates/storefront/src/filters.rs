//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Maps an inquiry status to its badge colour class.
///
/// Usage in templates: `{{ inquiry.status|status_badge }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn status_badge(status: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(badge_class(&status.to_string()))
}

fn badge_class(status: &str) -> &'static str {
    match status {
        "new" => "badge badge-blue",
        "in-progress" => "badge badge-yellow",
        "completed" => "badge badge-green",
        _ => "badge badge-gray",
    }
}
