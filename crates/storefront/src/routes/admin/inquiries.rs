//! Admin inquiry management.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use decors_core::{InquiryId, InquiryStatus};

use crate::error::{AppError, add_breadcrumb};
use crate::filters;
use crate::i18n::Translations;
use crate::middleware::RequireAdmin;
use crate::models::{InquiryFilter, InquiryListing};
use crate::routes::PageContext;
use crate::state::AppState;

/// Query parameters for the inquiry list.
#[derive(Debug, Default, Deserialize)]
pub struct InquiriesQuery {
    /// Status to show; blank or unknown means all.
    #[serde(default)]
    pub status: Option<String>,
}

impl InquiriesQuery {
    fn filter(&self) -> InquiryFilter {
        parse_status(self.status.as_deref())
            .map_or_else(InquiryFilter::default, InquiryFilter::with_status)
    }
}

fn parse_status(raw: Option<&str>) -> Option<InquiryStatus> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

/// A status option in the filter and the per-row select.
#[derive(Debug, Clone, Copy)]
pub struct StatusOption {
    pub value: &'static str,
    pub label: &'static str,
}

fn status_options(t: &Translations) -> Vec<StatusOption> {
    InquiryStatus::ALL
        .iter()
        .map(|s| StatusOption {
            value: s.as_str(),
            label: t.status_label(*s),
        })
        .collect()
}

/// One inquiry as shown in the list.
#[derive(Debug, Clone)]
pub struct InquiryRow {
    pub id: String,
    pub date: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: &'static str,
    pub status_label: &'static str,
    pub product_name: Option<String>,
    pub product_slug: Option<String>,
    pub mailto: String,
    /// `None` when the phone has no digits.
    pub whatsapp: Option<String>,
}

impl InquiryRow {
    fn new(listing: &InquiryListing, t: &Translations) -> Self {
        let inquiry = &listing.inquiry;
        Self {
            id: inquiry.id.to_string(),
            date: inquiry.created_at.format("%d/%m/%Y %H:%M").to_string(),
            name: inquiry.name.clone(),
            email: inquiry.email.clone(),
            phone: inquiry.phone.clone(),
            message: inquiry.message.clone(),
            status: inquiry.status.as_str(),
            status_label: t.status_label(inquiry.status),
            product_name: listing.product.as_ref().map(|p| p.name.clone()),
            product_slug: listing.product.as_ref().map(|p| p.slug.to_string()),
            mailto: format!("mailto:{}", inquiry.email),
            whatsapp: whatsapp_reply(&inquiry.phone),
        }
    }
}

/// `wa.me` link for a free-form phone number, keeping only its digits.
#[must_use]
pub fn whatsapp_reply(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    (!digits.is_empty()).then(|| format!("https://wa.me/{digits}"))
}

/// Inquiry list template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/inquiries.html")]
pub struct InquiriesTemplate {
    pub page: PageContext,
    pub inquiries: Vec<InquiryRow>,
    pub statuses: Vec<StatusOption>,
    /// Active filter value, empty for all.
    pub filter: String,
}

impl InquiriesTemplate {
    #[must_use]
    pub fn is_filter(&self, value: &str) -> bool {
        self.filter == value
    }
}

/// Display inquiries, newest first.
#[instrument(skip(state, page))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    page: PageContext,
    Query(query): Query<InquiriesQuery>,
) -> Result<InquiriesTemplate, AppError> {
    let filter = query.filter();
    let listings = state.inquiries().list(filter).await?;

    Ok(InquiriesTemplate {
        inquiries: listings.iter().map(|l| InquiryRow::new(l, page.t)).collect(),
        statuses: status_options(page.t),
        filter: filter.status.map(|s| s.as_str().to_string()).unwrap_or_default(),
        page,
    })
}

/// Status change form data.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
    /// List filter to return to.
    #[serde(default)]
    pub filter: Option<String>,
}

fn back_to_list(filter: Option<&str>) -> Redirect {
    match parse_status(filter) {
        Some(status) => Redirect::to(&format!("/admin/inquiries?status={status}")),
        None => Redirect::to("/admin/inquiries"),
    }
}

/// Change an inquiry's status.
#[instrument(skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<InquiryId>,
    Form(form): Form<StatusForm>,
) -> Result<Redirect, AppError> {
    let status: InquiryStatus = form
        .status
        .parse()
        .map_err(|e: decors_core::StatusParseError| AppError::BadRequest(e.to_string()))?;

    state.inquiries().set_status(id, status).await?;
    add_breadcrumb(
        "inquiries",
        "Inquiry status changed",
        Some(&[("status", status.as_str())]),
    );
    Ok(back_to_list(form.filter.as_deref()))
}

/// Form data carried by the delete button.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub filter: Option<String>,
}

/// Delete an inquiry.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<InquiryId>,
    Form(form): Form<DeleteForm>,
) -> Result<Redirect, AppError> {
    state.inquiries().delete(id).await?;
    add_breadcrumb("inquiries", "Inquiry deleted", None);
    Ok(back_to_list(form.filter.as_deref()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::i18n::FR;

    #[test]
    fn test_whatsapp_reply_keeps_digits() {
        assert_eq!(
            whatsapp_reply("+212 600-00 00 00").as_deref(),
            Some("https://wa.me/212600000000")
        );
        assert_eq!(whatsapp_reply("n/a"), None);
    }

    #[test]
    fn test_query_filter() {
        let query = InquiriesQuery {
            status: Some("archived".to_string()),
        };
        assert_eq!(query.filter().status, Some(InquiryStatus::Archived));

        let blank = InquiriesQuery {
            status: Some(String::new()),
        };
        assert_eq!(blank.filter(), InquiryFilter::default());

        let unknown = InquiriesQuery {
            status: Some("closed".to_string()),
        };
        assert_eq!(unknown.filter(), InquiryFilter::default());
    }

    #[test]
    fn test_row_from_listing() {
        let listing: InquiryListing = serde_json::from_value(serde_json::json!({
            "id": "6f1c2d8e-3b4a-4c5d-9e6f-7a8b9c0d1e2f",
            "created_at": "2024-05-04T09:30:00Z",
            "name": "Youssef",
            "email": "youssef@example.ma",
            "phone": "+212 611 22 33 44",
            "message": "Bonjour",
            "status": "in-progress",
            "products": { "name": "Table Atlas", "slug": "table-atlas" }
        }))
        .unwrap();

        let row = InquiryRow::new(&listing, &FR);
        assert_eq!(row.date, "04/05/2024 09:30");
        assert_eq!(row.status, "in-progress");
        assert_eq!(row.status_label, "En cours");
        assert_eq!(row.product_slug.as_deref(), Some("table-atlas"));
        assert_eq!(row.mailto, "mailto:youssef@example.ma");
        assert_eq!(row.whatsapp.as_deref(), Some("https://wa.me/212611223344"));
    }

    #[test]
    fn test_status_options_in_order() {
        let options = status_options(&FR);
        let values: Vec<_> = options.iter().map(|o| o.value).collect();
        assert_eq!(values, ["new", "in-progress", "completed", "archived"]);
    }
}
