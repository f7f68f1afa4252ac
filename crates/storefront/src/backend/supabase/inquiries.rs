//! `inquiries` table over PostgREST.

use async_trait::async_trait;
use serde_json::json;
use tracing::instrument;

use decors_core::{InquiryId, InquiryStatus};

use super::SupabaseClient;
use crate::backend::{InquiryStore, StoreResult};
use crate::models::{Inquiry, InquiryFilter, InquiryListing, NewInquiry};

const TABLE: &str = "inquiries";

/// Embedded select joining the referenced product's name and slug.
const LISTING_SELECT: &str = "*,products(name,slug)";

#[async_trait]
impl InquiryStore for SupabaseClient {
    #[instrument(skip(self))]
    async fn list(&self, filter: &InquiryFilter) -> StoreResult<Vec<InquiryListing>> {
        let mut query: Vec<(&str, String)> = vec![
            ("select", LISTING_SELECT.to_string()),
            ("order", "created_at.desc".to_string()),
        ];
        if let Some(status) = filter.status {
            query.push(("status", format!("eq.{status}")));
        }

        let request = self.client.get(self.table_url(TABLE)).query(&query);
        Self::fetch(request, "inquiries").await
    }

    #[instrument(skip(self, inquiry), fields(product_id = ?inquiry.product_id))]
    async fn create(&self, inquiry: &NewInquiry) -> StoreResult<Inquiry> {
        let request = self
            .client
            .post(self.table_url(TABLE))
            .query(&[("select", "*")])
            .json(inquiry);
        let request = Self::single(Self::returning(request));
        Self::fetch(request, "inquiry").await
    }

    #[instrument(skip(self), fields(inquiry_id = %id, status = %status))]
    async fn update_status(&self, id: InquiryId, status: InquiryStatus) -> StoreResult<Inquiry> {
        let request = self
            .client
            .patch(self.table_url(TABLE))
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))])
            .json(&json!({ "status": status }));
        let request = Self::single(Self::returning(request));
        Self::fetch(request, &format!("inquiry {id}")).await
    }

    #[instrument(skip(self), fields(inquiry_id = %id))]
    async fn delete(&self, id: InquiryId) -> StoreResult<()> {
        let request = self
            .client
            .delete(self.table_url(TABLE))
            .query(&[("id", format!("eq.{id}"))]);
        Self::execute(request, &format!("inquiry {id}")).await
    }
}
