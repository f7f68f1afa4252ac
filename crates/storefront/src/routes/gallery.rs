//! Gallery route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::models::{CATEGORIES, ProductFilter};
use crate::routes::PageContext;
use crate::routes::products::ProductCard;
use crate::state::AppState;

/// Query parameters for the gallery.
#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
}

/// Gallery page template.
#[derive(Template, WebTemplate)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub page: PageContext,
    pub products: Vec<ProductCard>,
    pub categories: &'static [&'static str],
    pub selected: Option<String>,
}

impl GalleryTemplate {
    /// Whether a category chip is the active filter.
    #[must_use]
    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.as_deref() == Some(category)
    }
}

/// Display the catalog, optionally filtered by category.
#[instrument(skip(state, page))]
pub async fn index(
    State(state): State<AppState>,
    page: PageContext,
    Query(query): Query<GalleryQuery>,
) -> Result<GalleryTemplate, AppError> {
    let filter = ProductFilter::category(query.category.as_deref());
    let products = state.catalog().list(&filter).await?;

    Ok(GalleryTemplate {
        products: ProductCard::from_products(&products, page.locale),
        categories: CATEGORIES,
        selected: filter.category,
        page,
    })
}
