//! Customer inquiries submitted through the contact form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use decors_core::{InquiryId, InquiryStatus, ProductId, Slug};

/// An inquiry row.
///
/// The email is kept as a plain string: rows written before validation
/// existed must still decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: InquiryId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub status: InquiryStatus,
}

/// Payload for inserting an inquiry. Status defaults to `new` server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub product_id: Option<ProductId>,
}

/// Name and slug of the product an inquiry refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub name: String,
    pub slug: Slug,
}

/// An inquiry joined with its product, as listed in the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryListing {
    #[serde(flatten)]
    pub inquiry: Inquiry,
    /// Embedded resource from `select=*,products(name,slug)`.
    #[serde(rename = "products", default)]
    pub product: Option<ProductRef>,
}

/// Listing filter for inquiries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InquiryFilter {
    pub status: Option<InquiryStatus>,
}

impl InquiryFilter {
    /// Only inquiries with the given status.
    #[must_use]
    pub const fn with_status(status: InquiryStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// Whether an inquiry passes this filter.
    #[must_use]
    pub fn matches(&self, inquiry: &Inquiry) -> bool {
        self.status.is_none_or(|s| s == inquiry.status)
    }
}
