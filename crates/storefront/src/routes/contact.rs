//! Contact form route handlers.
//!
//! Submissions become inquiries in the backend. Validation happens here
//! first; invalid forms are re-rendered with per-field messages and never
//! reach the backend.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use decors_core::ProductId;

use crate::backend::StoreError;
use crate::filters;
use crate::forms::{ContactForm, FieldErrors};
use crate::middleware::RequestId;
use crate::models::{NewInquiry, ProductRef};
use crate::routes::PageContext;
use crate::state::AppState;

/// Query parameters for the contact page.
#[derive(Debug, Deserialize)]
pub struct ContactQuery {
    /// Slug of the product the visitor is asking about.
    pub product: Option<String>,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: PageContext,
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub product: Option<ProductRef>,
    pub success: bool,
    /// Request ID quoted in the failure banner.
    pub failure: Option<String>,
}

impl ContactTemplate {
    fn new(page: PageContext, form: ContactForm, product: Option<ProductRef>) -> Self {
        Self {
            page,
            form,
            errors: FieldErrors::default(),
            product,
            success: false,
            failure: None,
        }
    }
}

/// Resolve the optional product link; unknown slugs are dropped.
async fn linked_product(state: &AppState, form: &ContactForm) -> Option<(ProductRef, ProductId)> {
    let slug = form.product_slug()?;
    match state.catalog().product(&slug).await {
        Ok(product) => Some((
            ProductRef {
                name: product.name,
                slug: product.slug,
            },
            product.id,
        )),
        Err(StoreError::NotFound(_)) => None,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to resolve linked product");
            None
        }
    }
}

/// Display the contact form.
#[instrument(skip(state, page))]
pub async fn show(
    State(state): State<AppState>,
    page: PageContext,
    Query(query): Query<ContactQuery>,
) -> ContactTemplate {
    let form = ContactForm {
        product: query.product,
        ..ContactForm::default()
    };
    let product = linked_product(&state, &form).await.map(|(p, _)| p);
    ContactTemplate::new(page, form, product)
}

/// Submit the contact form.
#[instrument(skip(state, page, form, request_id))]
pub async fn submit(
    State(state): State<AppState>,
    page: PageContext,
    Extension(request_id): Extension<RequestId>,
    Form(form): Form<ContactForm>,
) -> Response {
    // Rejected forms keep the product slug in the hidden field only.
    let submission = match form.validate(page.t) {
        Ok(submission) => submission,
        Err(errors) => {
            tracing::debug!(fields = errors.len(), "Contact form rejected");
            let mut template = ContactTemplate::new(page, form, None);
            template.errors = errors;
            return (StatusCode::UNPROCESSABLE_ENTITY, template).into_response();
        }
    };

    let (product, product_id) = match linked_product(&state, &form).await {
        Some((product, id)) => (Some(product), Some(id)),
        None => (None, None),
    };

    let inquiry = NewInquiry {
        name: submission.name,
        email: submission.email.into_inner(),
        phone: submission.phone,
        message: submission.message,
        product_id,
    };

    match state.inquiries().submit(&inquiry).await {
        Ok(_) => {
            let cleared = ContactForm {
                product: form.product,
                ..ContactForm::default()
            };
            let mut template = ContactTemplate::new(page, cleared, product);
            template.success = true;
            template.into_response()
        }
        Err(e) => {
            let event_id = sentry::capture_error(&e);
            tracing::error!(error = %e, sentry_event_id = %event_id, "Failed to store inquiry");
            let mut template = ContactTemplate::new(page, form, product);
            template.failure = Some(request_id.to_string());
            (StatusCode::BAD_GATEWAY, template).into_response()
        }
    }
}
