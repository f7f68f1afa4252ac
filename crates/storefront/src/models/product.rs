//! Product records as stored in the `products` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use decors_core::{Dimensions, Locale, PriceEstimate, ProductId, Slug};

/// Number of products shown in the home page "featured" strip.
pub const FEATURED_LIMIT: usize = 6;

/// Categories offered by the gallery filter.
pub const CATEGORIES: &[&str] = &["Tables", "Chairs", "Cabinets", "Decor", "Beds"];

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    pub slug: Slug,
    pub short_desc: String,
    #[serde(default)]
    pub short_desc_ar: Option<String>,
    pub long_desc: String,
    #[serde(default)]
    pub long_desc_ar: Option<String>,
    #[serde(default)]
    pub price_estimate: Option<PriceEstimate>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Name in the given locale, falling back to French.
    #[must_use]
    pub fn localized_name(&self, locale: Locale) -> &str {
        locale.pick(&self.name, self.name_ar.as_deref())
    }

    /// Short description in the given locale, falling back to French.
    #[must_use]
    pub fn localized_short_desc(&self, locale: Locale) -> &str {
        locale.pick(&self.short_desc, self.short_desc_ar.as_deref())
    }

    /// Long description in the given locale, falling back to French.
    #[must_use]
    pub fn localized_long_desc(&self, locale: Locale) -> &str {
        locale.pick(&self.long_desc, self.long_desc_ar.as_deref())
    }

    /// First image, used for cards and thumbnails.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Payload for inserting a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub name_ar: Option<String>,
    pub slug: Slug,
    pub short_desc: String,
    pub short_desc_ar: Option<String>,
    pub long_desc: String,
    pub long_desc_ar: Option<String>,
    pub price_estimate: Option<PriceEstimate>,
    pub dimensions: Option<Dimensions>,
    pub material: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial update of a product.
///
/// `None` leaves a column untouched. For nullable columns the inner option
/// distinguishes "set to NULL" (`Some(None)`) from "set to value".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_desc_ar: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_desc_ar: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_estimate: Option<Option<PriceEstimate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Option<Dimensions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProductChanges {
    /// Changes that only replace the image list.
    #[must_use]
    pub fn images(images: Vec<String>) -> Self {
        Self {
            images: Some(images),
            ..Self::default()
        }
    }

    /// Apply these changes to an in-memory record.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name.clone_from(name);
        }
        if let Some(name_ar) = &self.name_ar {
            product.name_ar.clone_from(name_ar);
        }
        if let Some(slug) = &self.slug {
            product.slug = slug.clone();
        }
        if let Some(short_desc) = &self.short_desc {
            product.short_desc.clone_from(short_desc);
        }
        if let Some(short_desc_ar) = &self.short_desc_ar {
            product.short_desc_ar.clone_from(short_desc_ar);
        }
        if let Some(long_desc) = &self.long_desc {
            product.long_desc.clone_from(long_desc);
        }
        if let Some(long_desc_ar) = &self.long_desc_ar {
            product.long_desc_ar.clone_from(long_desc_ar);
        }
        if let Some(price_estimate) = self.price_estimate {
            product.price_estimate = price_estimate;
        }
        if let Some(dimensions) = &self.dimensions {
            product.dimensions.clone_from(dimensions);
        }
        if let Some(material) = &self.material {
            product.material.clone_from(material);
        }
        if let Some(category) = &self.category {
            product.category.clone_from(category);
        }
        if let Some(tags) = &self.tags {
            product.tags.clone_from(tags);
        }
        if let Some(images) = &self.images {
            product.images.clone_from(images);
        }
        if let Some(updated_at) = self.updated_at {
            product.updated_at = updated_at;
        }
    }
}

impl From<NewProduct> for ProductChanges {
    /// Full replacement of every editable column.
    fn from(p: NewProduct) -> Self {
        Self {
            name: Some(p.name),
            name_ar: Some(p.name_ar),
            slug: Some(p.slug),
            short_desc: Some(p.short_desc),
            short_desc_ar: Some(p.short_desc_ar),
            long_desc: Some(p.long_desc),
            long_desc_ar: Some(p.long_desc_ar),
            price_estimate: Some(p.price_estimate),
            dimensions: Some(p.dimensions),
            material: Some(p.material),
            category: Some(p.category),
            tags: Some(p.tags),
            images: Some(p.images),
            updated_at: None,
        }
    }
}

/// Listing filter for products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProductFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Maximum number of rows (newest first).
    pub limit: Option<usize>,
}

impl ProductFilter {
    /// Every product, newest first.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// The featured strip on the home page.
    #[must_use]
    pub fn featured() -> Self {
        Self {
            category: None,
            limit: Some(FEATURED_LIMIT),
        }
    }

    /// Products in one category. A blank category means no filter.
    #[must_use]
    pub fn category(category: Option<&str>) -> Self {
        Self {
            category: category
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from),
            limit: None,
        }
    }
}
