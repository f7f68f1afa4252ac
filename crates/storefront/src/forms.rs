//! Form payloads and their validation.
//!
//! Validation runs before anything is sent to the backend. Failures come
//! back as a [`FieldErrors`] map of localized messages keyed by field name,
//! which the templates render next to each input.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use decors_core::{Dimensions, Email, PriceEstimate, Slug, slugify};

use crate::i18n::Translations;
use crate::models::NewProduct;

const MIN_NAME_CHARS: usize = 3;
const MIN_SLUG_CHARS: usize = 3;
const MIN_SHORT_DESC_CHARS: usize = 10;
const MIN_LONG_DESC_CHARS: usize = 20;

/// Per-field validation messages.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    /// Record an error; the first message for a field wins.
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    /// Message for a field, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    /// Whether the field has an error.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// =============================================================================
// Contact form
// =============================================================================

/// Raw contact form as posted.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    /// Slug of the product the visitor came from.
    #[serde(default)]
    pub product: Option<String>,
}

/// A contact submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Check required fields and the email format.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any field is invalid.
    pub fn validate(&self, t: &Translations) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", t.name_required);
        }

        let email = self.email.trim();
        let parsed_email = if email.is_empty() {
            errors.add("email", t.email_required);
            None
        } else {
            Email::parse(email)
                .map_err(|_| errors.add("email", t.invalid_email))
                .ok()
        };

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.add("phone", t.phone_required);
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.add("message", t.message_required);
        }

        match parsed_email {
            Some(email) if errors.is_empty() => Ok(ContactSubmission {
                name: name.to_string(),
                email,
                phone: phone.to_string(),
                message: message.to_string(),
            }),
            _ => Err(errors),
        }
    }

    /// The linked product slug, if present and well-formed.
    #[must_use]
    pub fn product_slug(&self) -> Option<Slug> {
        self.product
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| Slug::parse(s).ok())
    }
}

// =============================================================================
// Product form
// =============================================================================

/// Raw admin product form, filled field by field from the multipart body.
#[derive(Debug, Default, Clone)]
pub struct ProductForm {
    pub name: String,
    pub name_ar: String,
    pub slug: String,
    pub short_desc: String,
    pub short_desc_ar: String,
    pub long_desc: String,
    pub long_desc_ar: String,
    pub price_estimate: String,
    pub width: String,
    pub height: String,
    pub depth: String,
    pub material: String,
    pub category: String,
    pub tags: String,
    /// Existing image URLs ticked for removal (edit form only).
    pub remove_images: Vec<String>,
}

impl ProductForm {
    /// Store a text field by its input name. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: String) {
        let slot = match field {
            "name" => &mut self.name,
            "name_ar" => &mut self.name_ar,
            "slug" => &mut self.slug,
            "short_desc" => &mut self.short_desc,
            "short_desc_ar" => &mut self.short_desc_ar,
            "long_desc" => &mut self.long_desc,
            "long_desc_ar" => &mut self.long_desc_ar,
            "price_estimate" => &mut self.price_estimate,
            "width" => &mut self.width,
            "height" => &mut self.height,
            "depth" => &mut self.depth,
            "material" => &mut self.material,
            "category" => &mut self.category,
            "tags" => &mut self.tags,
            "remove_images" => {
                self.remove_images.push(value);
                return;
            }
            _ => return,
        };
        *slot = value;
    }

    /// Pre-fill the form from a stored product (edit screen).
    #[must_use]
    pub fn from_product(product: &crate::models::Product) -> Self {
        let dims = product.dimensions.unwrap_or_default();
        let number = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
        Self {
            name: product.name.clone(),
            name_ar: product.name_ar.clone().unwrap_or_default(),
            slug: product.slug.to_string(),
            short_desc: product.short_desc.clone(),
            short_desc_ar: product.short_desc_ar.clone().unwrap_or_default(),
            long_desc: product.long_desc.clone(),
            long_desc_ar: product.long_desc_ar.clone().unwrap_or_default(),
            price_estimate: product
                .price_estimate
                .map(|p| p.amount().normalize().to_string())
                .unwrap_or_default(),
            width: number(dims.width),
            height: number(dims.height),
            depth: number(dims.depth),
            material: product.material.clone().unwrap_or_default(),
            category: product.category.clone().unwrap_or_default(),
            tags: product.tags.join(", "),
            remove_images: Vec::new(),
        }
    }

    /// Validate and normalize into an insertable product without images.
    ///
    /// The slug is generated from the name when left blank and is always
    /// normalized.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any field is invalid.
    pub fn validate(&self, t: &Translations) -> Result<NewProduct, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.chars().count() < MIN_NAME_CHARS {
            errors.add("name", t.name_too_short);
        }

        let slug_source = if self.slug.trim().is_empty() {
            name
        } else {
            self.slug.trim()
        };
        let slug = slugify(slug_source);
        if slug.len() < MIN_SLUG_CHARS {
            errors.add("slug", t.slug_too_short);
        }

        let short_desc = self.short_desc.trim();
        if short_desc.chars().count() < MIN_SHORT_DESC_CHARS {
            errors.add("short_desc", t.short_desc_too_short);
        }

        let long_desc = self.long_desc.trim();
        if long_desc.chars().count() < MIN_LONG_DESC_CHARS {
            errors.add("long_desc", t.long_desc_too_short);
        }

        let price_estimate = match parse_price(&self.price_estimate) {
            Ok(price) => price,
            Err(()) => {
                errors.add("price_estimate", t.invalid_number);
                None
            }
        };

        let mut dimension = |field: &'static str, raw: &str| match parse_length(raw) {
            Ok(value) => value,
            Err(()) => {
                errors.add(field, t.invalid_number);
                None
            }
        };
        let width = dimension("width", &self.width);
        let height = dimension("height", &self.height);
        let depth = dimension("depth", &self.depth);

        if !errors.is_empty() {
            return Err(errors);
        }

        let slug = Slug::parse(&slug).map_err(|_| {
            let mut errors = FieldErrors::default();
            errors.add("slug", t.slug_too_short);
            errors
        })?;

        Ok(NewProduct {
            name: name.to_string(),
            name_ar: optional(&self.name_ar),
            slug,
            short_desc: short_desc.to_string(),
            short_desc_ar: optional(&self.short_desc_ar),
            long_desc: long_desc.to_string(),
            long_desc_ar: optional(&self.long_desc_ar),
            price_estimate,
            dimensions: Dimensions::new(width, height, depth),
            material: optional(&self.material),
            category: optional(&self.category),
            tags: parse_tags(&self.tags),
            images: Vec::new(),
        })
    }
}

/// Trimmed text, or `None` when blank.
fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Comma-separated tags, trimmed, blanks dropped.
fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Optional non-negative decimal. Accepts a comma as decimal separator.
fn parse_price(raw: &str) -> Result<Option<PriceEstimate>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let amount = Decimal::from_str(&trimmed.replace(',', ".")).map_err(|_| ())?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(());
    }
    Ok(Some(PriceEstimate::new(amount)))
}

/// Optional non-negative length in centimetres.
fn parse_length(raw: &str) -> Result<Option<f64>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed.replace(',', ".").parse().map_err(|_| ())?;
    if !value.is_finite() || value < 0.0 {
        return Err(());
    }
    Ok(Some(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::i18n::FR;

    fn contact(email: &str) -> ContactForm {
        ContactForm {
            name: "Amina".to_string(),
            email: email.to_string(),
            phone: "+212 600 000 000".to_string(),
            message: "Je voudrais un devis.".to_string(),
            product: None,
        }
    }

    fn product_form() -> ProductForm {
        let mut form = ProductForm::default();
        form.set("name", "Moroccan Carved Table!".to_string());
        form.set("short_desc", "Table sculptée à la main".to_string());
        form.set(
            "long_desc",
            "Une table en cèdre sculptée par nos artisans de Marrakech.".to_string(),
        );
        form
    }

    #[test]
    fn test_contact_valid() {
        let submission = contact("amina@example.ma").validate(&FR).unwrap();
        assert_eq!(submission.email.as_str(), "amina@example.ma");
        assert_eq!(submission.phone, "+212 600 000 000");
    }

    #[test]
    fn test_contact_invalid_email() {
        let errors = contact("not-an-email").validate(&FR).unwrap_err();
        assert_eq!(errors.get("email"), Some(FR.invalid_email));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_contact_required_fields() {
        let errors = ContactForm::default().validate(&FR).unwrap_err();
        assert!(errors.has("name"));
        assert_eq!(errors.get("email"), Some(FR.email_required));
        assert!(errors.has("phone"));
        assert!(errors.has("message"));
    }

    #[test]
    fn test_contact_whitespace_only_is_missing() {
        let mut form = contact("amina@example.ma");
        form.message = "   ".to_string();
        let errors = form.validate(&FR).unwrap_err();
        assert_eq!(errors.get("message"), Some(FR.message_required));
    }

    #[test]
    fn test_contact_product_slug() {
        let mut form = contact("a@b.co");
        form.product = Some("table-atlas".to_string());
        assert_eq!(form.product_slug().unwrap().as_str(), "table-atlas");
        form.product = Some("Not A Slug".to_string());
        assert!(form.product_slug().is_none());
    }

    #[test]
    fn test_product_slug_generated_from_name() {
        let product = product_form().validate(&FR).unwrap();
        assert_eq!(product.slug.as_str(), "moroccan-carved-table");
        assert!(product.dimensions.is_none());
        assert!(product.price_estimate.is_none());
    }

    #[test]
    fn test_product_slug_normalized() {
        let mut form = product_form();
        form.set("slug", "  Table Atlas__XL ".to_string());
        let product = form.validate(&FR).unwrap();
        assert_eq!(product.slug.as_str(), "table-atlas-xl");
    }

    #[test]
    fn test_product_minimum_lengths() {
        let mut form = ProductForm::default();
        form.set("name", "Ab".to_string());
        form.set("short_desc", "court".to_string());
        form.set("long_desc", "encore trop court".to_string());
        let errors = form.validate(&FR).unwrap_err();
        assert_eq!(errors.get("name"), Some(FR.name_too_short));
        assert_eq!(errors.get("slug"), Some(FR.slug_too_short));
        assert_eq!(errors.get("short_desc"), Some(FR.short_desc_too_short));
        assert_eq!(errors.get("long_desc"), Some(FR.long_desc_too_short));
    }

    #[test]
    fn test_product_numbers() {
        let mut form = product_form();
        form.set("price_estimate", "4500,50".to_string());
        form.set("width", "120".to_string());
        form.set("depth", "60.5".to_string());
        form.set("tags", " cèdre, salon ,, ".to_string());
        let product = form.validate(&FR).unwrap();
        assert_eq!(
            product.price_estimate.unwrap().amount(),
            Decimal::from_str("4500.50").unwrap()
        );
        let dims = product.dimensions.unwrap();
        assert_eq!(dims.width, Some(120.0));
        assert_eq!(dims.height, None);
        assert_eq!(dims.depth, Some(60.5));
        assert_eq!(product.tags, ["cèdre", "salon"]);
    }

    #[test]
    fn test_product_rejects_negative_numbers() {
        let mut form = product_form();
        form.set("price_estimate", "-10".to_string());
        form.set("height", "-1".to_string());
        form.set("width", "abc".to_string());
        let errors = form.validate(&FR).unwrap_err();
        assert!(errors.has("price_estimate"));
        assert!(errors.has("height"));
        assert!(errors.has("width"));
    }

    #[test]
    fn test_optional_text_blank_is_none() {
        let mut form = product_form();
        form.set("material", "   ".to_string());
        form.set("category", "Tables".to_string());
        let product = form.validate(&FR).unwrap();
        assert_eq!(product.material, None);
        assert_eq!(product.category.as_deref(), Some("Tables"));
    }

    #[test]
    fn test_remove_images_accumulate() {
        let mut form = ProductForm::default();
        form.set("remove_images", "a".to_string());
        form.set("remove_images", "b".to_string());
        assert_eq!(form.remove_images, ["a", "b"]);
    }
}
