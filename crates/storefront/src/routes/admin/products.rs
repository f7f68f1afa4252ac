//! Admin product management.
//!
//! Create and edit forms are multipart so photos travel with the text
//! fields. The product row is written first, then images are uploaded
//! concurrently and attached. A failed upload never loses the row: the
//! edit form comes back with a warning naming the files that failed.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use decors_core::{Locale, ProductId};

use crate::backend::StoreError;
use crate::catalog::ImageUpload;
use crate::error::{AppError, add_breadcrumb};
use crate::filters;
use crate::forms::{FieldErrors, ProductForm};
use crate::i18n::Translations;
use crate::middleware::RequireAdmin;
use crate::models::{CATEGORIES, Product, ProductChanges, ProductFilter};
use crate::routes::PageContext;
use crate::state::AppState;

/// Multipart field carrying new photos.
const IMAGES_FIELD: &str = "images";

// =============================================================================
// Product table
// =============================================================================

/// Query parameters for the product table.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Free-text search over names and slug.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Flash set by a redirect after save or delete.
    #[serde(default)]
    pub notice: Option<String>,
}

/// One row of the product table.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub category: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
}

impl ProductRow {
    fn new(product: &Product, locale: Locale) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            slug: product.slug.to_string(),
            category: product.category.clone(),
            price: product.price_estimate.map(|p| p.display(locale)),
            image: product.cover_image().map(String::from),
        }
    }
}

/// Product table template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/products.html")]
pub struct ProductsTemplate {
    pub page: PageContext,
    pub products: Vec<ProductRow>,
    pub total: usize,
    pub query: String,
    pub categories: &'static [&'static str],
    pub selected: Option<String>,
    pub notice: Option<&'static str>,
}

impl ProductsTemplate {
    #[must_use]
    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.as_deref() == Some(category)
    }
}

/// Whether a product matches the admin search box.
///
/// Case-insensitive substring match on the French name, the Arabic name and
/// the slug. A blank query matches everything.
#[must_use]
pub fn matches_search(product: &Product, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(&needle)
        || product.slug.as_str().contains(&needle)
        || product
            .name_ar
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(&needle))
}

fn notice_message(t: &Translations, notice: Option<&str>) -> Option<&'static str> {
    match notice? {
        "saved" => Some(t.product_saved),
        "deleted" => Some(t.product_deleted),
        _ => None,
    }
}

/// Display the product table.
#[instrument(skip(state, page))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    page: PageContext,
    Query(query): Query<ProductsQuery>,
) -> Result<ProductsTemplate, AppError> {
    let filter = ProductFilter::category(query.category.as_deref());
    let all = state.catalog().list(&filter).await?;
    let search = query.q.unwrap_or_default();

    let products: Vec<ProductRow> = all
        .iter()
        .filter(|p| matches_search(p, &search))
        .map(|p| ProductRow::new(p, page.locale))
        .collect();

    Ok(ProductsTemplate {
        total: all.len(),
        products,
        query: search,
        categories: CATEGORIES,
        selected: filter.category,
        notice: notice_message(page.t, query.notice.as_deref()),
        page,
    })
}

// =============================================================================
// Create / edit form
// =============================================================================

/// Create and edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/product_form.html")]
pub struct ProductFormTemplate {
    pub page: PageContext,
    pub form: ProductForm,
    pub errors: FieldErrors,
    /// Set when editing an existing product.
    pub product_id: Option<ProductId>,
    /// Images already attached to the product.
    pub images: Vec<String>,
    pub categories: &'static [&'static str],
    /// File names whose upload failed.
    pub upload_failures: Vec<String>,
}

impl ProductFormTemplate {
    fn new(page: PageContext, form: ProductForm) -> Self {
        Self {
            page,
            form,
            errors: FieldErrors::default(),
            product_id: None,
            images: Vec::new(),
            categories: CATEGORIES,
            upload_failures: Vec::new(),
        }
    }

    /// Edit form for a stored product.
    fn for_product(page: PageContext, product: &Product) -> Self {
        Self {
            product_id: Some(product.id),
            images: product.images.clone(),
            ..Self::new(page, ProductForm::from_product(product))
        }
    }

    /// Where the form posts.
    #[must_use]
    pub fn action(&self) -> String {
        self.product_id.map_or_else(
            || "/admin/products/new".to_string(),
            |id| format!("/admin/products/{id}"),
        )
    }

    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.product_id.is_some()
    }

    #[must_use]
    pub fn is_category(&self, category: &str) -> bool {
        self.form.category == category
    }

    #[must_use]
    pub fn is_marked_for_removal(&self, url: &str) -> bool {
        self.form.remove_images.iter().any(|u| u == url)
    }

    fn invalid(mut self, errors: FieldErrors) -> Response {
        self.errors = errors;
        (StatusCode::UNPROCESSABLE_ENTITY, self).into_response()
    }
}

/// Split a multipart body into text fields and image files.
///
/// Empty file inputs (no file chosen) are skipped.
async fn read_product_form(
    mut multipart: Multipart,
) -> Result<(ProductForm, Vec<ImageUpload>), AppError> {
    let mut form = ProductForm::default();
    let mut uploads = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == IMAGES_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            if !file_name.is_empty() && !bytes.is_empty() {
                uploads.push(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            form.set(&name, value);
        }
    }

    Ok((form, uploads))
}

/// Display the create form.
pub async fn new_page(RequireAdmin(_): RequireAdmin, page: PageContext) -> ProductFormTemplate {
    ProductFormTemplate::new(page, ProductForm::default())
}

/// Create a product and upload its images.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    page: PageContext,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (form, uploads) = read_product_form(multipart).await?;

    let new_product = match form.validate(page.t) {
        Ok(product) => product,
        Err(errors) => return Ok(ProductFormTemplate::new(page, form).invalid(errors)),
    };

    let product = match state.catalog().create(&new_product).await {
        Ok(product) => product,
        Err(StoreError::Conflict(_)) => {
            let mut errors = FieldErrors::default();
            errors.add("slug", page.t.slug_taken);
            return Ok(ProductFormTemplate::new(page, form).invalid(errors));
        }
        Err(e) => return Err(e.into()),
    };
    add_breadcrumb(
        "catalog",
        "Product created",
        Some(&[("slug", product.slug.as_str())]),
    );

    let outcome = state.catalog().upload_images(product.id, uploads).await;
    let product = if outcome.urls.is_empty() {
        product
    } else {
        state
            .catalog()
            .update(product.id, ProductChanges::images(outcome.urls.clone()))
            .await?
    };

    if !outcome.is_complete() {
        tracing::warn!(failed = outcome.failed.len(), "Some images failed to upload");
        let mut template = ProductFormTemplate::for_product(page, &product);
        template.upload_failures = outcome.failed;
        return Ok(template.into_response());
    }

    Ok(Redirect::to("/admin/products?notice=saved").into_response())
}

/// Display the edit form.
#[instrument(skip(state, page))]
pub async fn edit_page(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    page: PageContext,
    Path(id): Path<ProductId>,
) -> Result<ProductFormTemplate, AppError> {
    let product = state.catalog().product_by_id(id).await?;
    Ok(ProductFormTemplate::for_product(page, &product))
}

/// Update a product: text fields, removed images and new uploads.
#[instrument(skip(state, page, multipart), fields(product_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    page: PageContext,
    Path(id): Path<ProductId>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let existing = state.catalog().product_by_id(id).await?;
    let (form, uploads) = read_product_form(multipart).await?;

    let invalid_form = |page: PageContext, form: ProductForm| ProductFormTemplate {
        product_id: Some(id),
        images: existing.images.clone(),
        ..ProductFormTemplate::new(page, form)
    };

    let new_product = match form.validate(page.t) {
        Ok(product) => product,
        Err(errors) => return Ok(invalid_form(page, form).invalid(errors)),
    };

    let (kept, removed): (Vec<String>, Vec<String>) = existing
        .images
        .iter()
        .cloned()
        .partition(|url| !form.remove_images.contains(url));

    let outcome = state.catalog().upload_images(id, uploads).await;
    let mut images = kept;
    images.extend(outcome.urls.iter().cloned());

    let changes = ProductChanges {
        images: Some(images),
        ..ProductChanges::from(new_product)
    };

    let product = match state.catalog().update(id, changes).await {
        Ok(product) => product,
        Err(StoreError::Conflict(_)) => {
            // The row was not touched; drop the blobs uploaded for it.
            state.catalog().remove_images(&outcome.urls).await;
            let mut errors = FieldErrors::default();
            errors.add("slug", page.t.slug_taken);
            return Ok(invalid_form(page, form).invalid(errors));
        }
        Err(e) => return Err(e.into()),
    };
    add_breadcrumb(
        "catalog",
        "Product updated",
        Some(&[("slug", product.slug.as_str())]),
    );

    if !removed.is_empty() {
        let deleted = state.catalog().remove_images(&removed).await;
        tracing::info!(deleted, requested = removed.len(), "Removed product images");
    }

    if !outcome.is_complete() {
        tracing::warn!(failed = outcome.failed.len(), "Some images failed to upload");
        let mut template = ProductFormTemplate::for_product(page, &product);
        template.upload_failures = outcome.failed;
        return Ok(template.into_response());
    }

    Ok(Redirect::to("/admin/products?notice=saved").into_response())
}

/// Delete a product and its stored images.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<ProductId>,
) -> Result<Redirect, AppError> {
    let removed = state.catalog().delete(id).await?;
    add_breadcrumb("catalog", "Product deleted", None);
    tracing::info!(images_removed = removed, "Product deleted from admin");
    Ok(Redirect::to("/admin/products?notice=deleted"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::i18n::FR;

    fn product(name: &str, name_ar: Option<&str>, slug: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": "5f0e4c1e-9a1b-4f7a-8d55-0d1f2c3b4a59",
            "created_at": "2024-03-01T10:00:00Z",
            "updated_at": "2024-03-01T10:00:00Z",
            "name": name,
            "name_ar": name_ar,
            "slug": slug,
            "short_desc": "Table basse en cèdre",
            "long_desc": "Table basse en cèdre sculptée à la main",
        }))
        .unwrap()
    }

    #[test]
    fn test_search_matches_names_and_slug() {
        let table = product("Table Atlas", Some("طاولة الأطلس"), "table-atlas");
        assert!(matches_search(&table, ""));
        assert!(matches_search(&table, "  atlas "));
        assert!(matches_search(&table, "TABLE-AT"));
        assert!(matches_search(&table, "الأطلس"));
        assert!(!matches_search(&table, "chaise"));
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(notice_message(&FR, Some("saved")), Some(FR.product_saved));
        assert_eq!(notice_message(&FR, Some("deleted")), Some(FR.product_deleted));
        assert_eq!(notice_message(&FR, Some("other")), None);
        assert_eq!(notice_message(&FR, None), None);
    }
}
