//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::routes::PageContext;
use crate::routes::products::ProductCard;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    pub featured: Vec<ProductCard>,
}

/// Display the home page with the newest products.
#[instrument(skip(state, page))]
pub async fn home(
    State(state): State<AppState>,
    page: PageContext,
) -> Result<HomeTemplate, AppError> {
    let products = state.catalog().featured().await?;

    Ok(HomeTemplate {
        featured: ProductCard::from_products(&products, page.locale),
        page,
    })
}
