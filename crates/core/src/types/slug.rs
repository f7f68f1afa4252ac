//! URL-safe product slugs.
//!
//! A slug is derived from a product name:
//!
//! 1. lowercase and trim the input,
//! 2. drop every character that is not an ASCII word character
//!    (`[A-Za-z0-9_]`), whitespace, or `-`,
//! 3. collapse each run of whitespace, `_` and `-` into a single `-`,
//! 4. strip leading and trailing `-`.
//!
//! The output therefore only contains `[a-z0-9-]`, never starts or ends with
//! `-`, and re-slugifying it is a no-op.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// Nothing usable was left after normalization.
    #[error("slug cannot be empty")]
    Empty,
    /// The input is not already in normalized form.
    #[error("slug is not normalized (expected {expected:?})")]
    NotNormalized {
        /// What the input normalizes to.
        expected: String,
    },
}

/// Generate a slug from arbitrary text.
///
/// ```
/// use decors_core::slugify;
///
/// assert_eq!(slugify("Moroccan Carved Table!"), "moroccan-carved-table");
/// assert_eq!(slugify("  Cèdre -- Massif  "), "cdre-massif");
/// ```
#[must_use]
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered.trim().chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(c);
        }
        // Anything else is stripped without acting as a separator.
    }

    out
}

/// A normalized, URL-safe product slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Build a slug from free text (typically a product name).
    ///
    /// # Errors
    ///
    /// Returns [`SlugError::Empty`] if nothing remains after normalization.
    pub fn from_name(name: &str) -> Result<Self, SlugError> {
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(SlugError::Empty);
        }
        Ok(Self(slug))
    }

    /// Parse an already-normalized slug, e.g. from a URL path.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or not in normalized form.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        let expected = slugify(s);
        if expected.is_empty() {
            return Err(SlugError::Empty);
        }
        if expected != s {
            return Err(SlugError::NotNormalized { expected });
        }
        Ok(Self(expected))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of characters in the slug.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Slugs are never empty once constructed through `parse`/`from_name`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
