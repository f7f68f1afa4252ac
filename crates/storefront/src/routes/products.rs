//! Product detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use decors_core::{Locale, Slug};

use crate::backend::StoreError;
use crate::error::AppError;
use crate::filters;
use crate::i18n::Translations;
use crate::models::{Product, ProductFilter};
use crate::routes::PageContext;
use crate::routes::pages::NotFoundTemplate;
use crate::state::AppState;

/// How many same-category products the detail page suggests.
const RELATED_LIMIT: usize = 3;

/// Product summary shown in grids (home, gallery, related).
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub slug: String,
    pub name: String,
    pub short_desc: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub price: Option<String>,
}

impl ProductCard {
    /// Localized card for a product.
    #[must_use]
    pub fn new(product: &Product, locale: Locale) -> Self {
        Self {
            slug: product.slug.to_string(),
            name: product.localized_name(locale).to_string(),
            short_desc: product.localized_short_desc(locale).to_string(),
            category: product.category.clone(),
            image: product.cover_image().map(String::from),
            price: format_price(product, locale),
        }
    }

    /// Cards for a list of products.
    #[must_use]
    pub fn from_products(products: &[Product], locale: Locale) -> Vec<Self> {
        products.iter().map(|p| Self::new(p, locale)).collect()
    }
}

/// Displayed price, `None` when there is no (or a zero) estimate.
fn format_price(product: &Product, locale: Locale) -> Option<String> {
    product
        .price_estimate
        .filter(|p| !p.is_zero())
        .map(|p| p.display(locale))
}

/// WhatsApp deep link asking about a product.
///
/// The message reads `{inquire}: {name} ({slug})`.
#[must_use]
pub fn whatsapp_link(number: &str, t: &Translations, product: &Product) -> String {
    let text = format!("{}: {} ({})", t.inquire, product.name, product.slug);
    format!("https://wa.me/{number}?text={}", urlencoding::encode(&text))
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub page: PageContext,
    pub slug: String,
    pub name: String,
    pub short_desc: String,
    pub long_desc: String,
    pub images: Vec<String>,
    pub category: Option<String>,
    pub material: Option<String>,
    pub dimensions: Option<String>,
    pub price: Option<String>,
    pub tags: Vec<String>,
    pub whatsapp_href: String,
    pub related: Vec<ProductCard>,
}

/// Display product detail page.
///
/// Unknown or malformed slugs render the not-found page.
#[instrument(skip(state, page))]
pub async fn show(
    State(state): State<AppState>,
    page: PageContext,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let Ok(slug) = Slug::parse(&slug) else {
        return Ok(not_found(page));
    };

    let product = match state.catalog().product(&slug).await {
        Ok(product) => product,
        Err(StoreError::NotFound(_)) => return Ok(not_found(page)),
        Err(e) => return Err(e.into()),
    };

    let related = match &product.category {
        Some(category) => {
            let siblings = state
                .catalog()
                .list(&ProductFilter::category(Some(category)))
                .await
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Failed to load related products");
                    std::sync::Arc::default()
                });
            siblings
                .iter()
                .filter(|p| p.id != product.id)
                .take(RELATED_LIMIT)
                .map(|p| ProductCard::new(p, page.locale))
                .collect()
        }
        None => Vec::new(),
    };

    let locale = page.locale;
    let whatsapp_href = format!("/product/{}/whatsapp", product.slug);

    Ok(ProductTemplate {
        slug: product.slug.to_string(),
        name: product.localized_name(locale).to_string(),
        short_desc: product.localized_short_desc(locale).to_string(),
        long_desc: product.localized_long_desc(locale).to_string(),
        price: format_price(&product, locale),
        dimensions: product.dimensions.map(|d| d.display()),
        images: product.images,
        category: product.category,
        material: product.material,
        tags: product.tags,
        whatsapp_href,
        related,
        page,
    }
    .into_response())
}

/// Redirect to the WhatsApp inquiry link for a product.
///
/// Without a configured number the visitor lands on the contact form,
/// pre-linked to the product.
#[instrument(skip(state, page))]
pub async fn whatsapp(
    State(state): State<AppState>,
    page: PageContext,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let Ok(slug) = Slug::parse(&slug) else {
        return Ok(not_found(page));
    };

    let product = match state.catalog().product(&slug).await {
        Ok(product) => product,
        Err(StoreError::NotFound(_)) => return Ok(not_found(page)),
        Err(e) => return Err(e.into()),
    };

    let target = match &state.config().whatsapp_number {
        Some(number) => whatsapp_link(number, page.t, &product),
        None => format!("/contact?product={}", product.slug),
    };
    Ok(Redirect::to(&target).into_response())
}

fn not_found(page: PageContext) -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate { page }).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::i18n::FR;

    fn product() -> Product {
        serde_json::from_value(serde_json::json!({
            "id": "5f0e4c1e-9a1b-4f7a-8d55-0d1f2c3b4a59",
            "created_at": "2024-03-01T10:00:00Z",
            "updated_at": "2024-03-01T10:00:00Z",
            "name": "Table Atlas",
            "name_ar": "طاولة الأطلس",
            "slug": "table-atlas",
            "short_desc": "Table basse en cèdre",
            "long_desc": "Table basse en cèdre sculptée à la main",
            "price_estimate": 0,
            "tags": [],
            "images": []
        }))
        .unwrap()
    }

    #[test]
    fn test_whatsapp_link_text() {
        let link = whatsapp_link("212600000000", &FR, &product());
        assert_eq!(
            link,
            "https://wa.me/212600000000?text=Demander%20sur%20WhatsApp%3A%20Table%20Atlas%20%28table-atlas%29"
        );
    }

    #[test]
    fn test_card_localized_and_zero_price_hidden() {
        let card = ProductCard::new(&product(), Locale::Ar);
        assert_eq!(card.name, "طاولة الأطلس");
        assert_eq!(card.short_desc, "Table basse en cèdre");
        assert_eq!(card.price, None);
        assert_eq!(card.image, None);
    }
}
