//! Product images in Supabase Storage.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::json;
use tracing::instrument;

use decors_core::ProductId;

use super::SupabaseClient;
use crate::backend::{ImageStore, object_path, storage_path_from_url};

impl SupabaseClient {
    fn object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{path}", self.base_url, self.bucket)
    }
}

#[async_trait]
impl ImageStore for SupabaseClient {
    #[instrument(skip(self, bytes), fields(product_id = %product_id, size = bytes.len()))]
    async fn upload(
        &self,
        product_id: ProductId,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Option<String> {
        let path = object_path(product_id, file_name);

        let result = self
            .client
            .post(self.object_url(&path))
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => Some(self.public_url(&path)),
            Ok(response) => {
                let status = response.status();
                let message = response.text().await.unwrap_or_default();
                tracing::error!(
                    status = status.as_u16(),
                    message = %message,
                    path = %path,
                    "Image upload rejected"
                );
                None
            }
            Err(e) => {
                tracing::error!(error = %e, path = %path, "Image upload failed");
                None
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, public_url: &str) -> bool {
        let Some(path) = storage_path_from_url(public_url, &self.bucket) else {
            tracing::warn!("Image URL is not in the product bucket");
            return false;
        };

        let result = self
            .client
            .delete(format!(
                "{}/storage/v1/object/{}",
                self.base_url, self.bucket
            ))
            .json(&json!({ "prefixes": [path] }))
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                let status = response.status();
                let message = response.text().await.unwrap_or_default();
                tracing::error!(
                    status = status.as_u16(),
                    message = %message,
                    path = %path,
                    "Image delete rejected"
                );
                false
            }
            Err(e) => {
                tracing::error!(error = %e, path = %path, "Image delete failed");
                false
            }
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{path}",
            self.base_url, self.bucket
        )
    }
}
