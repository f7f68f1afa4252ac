//! Slug preview.

use decors_core::{Slug, SlugError};

/// Print the slug the admin form would generate for `name`.
///
/// # Errors
///
/// Returns [`SlugError::Empty`] if the name has no usable characters.
pub fn preview(name: &str) -> Result<(), SlugError> {
    let slug = Slug::from_name(name)?;
    tracing::info!(%name, "Slug: {slug}");
    Ok(())
}
