//! Data access for products, inquiries and product images.
//!
//! Each entity has one repository trait. [`supabase`] implements them over
//! the hosted PostgREST and Storage APIs; [`memory`] keeps everything in
//! process for tests and local tooling.
//!
//! Handlers never call these traits directly: they go through the cached
//! services in [`crate::catalog`].

pub mod memory;
pub mod supabase;

use async_trait::async_trait;
use thiserror::Error;

use decors_core::{InquiryId, InquiryStatus, ProductId, Slug};

use crate::models::{
    Inquiry, InquiryFilter, InquiryListing, NewInquiry, NewProduct, Product, ProductChanges,
    ProductFilter,
};

pub use memory::MemoryBackend;
pub use supabase::SupabaseClient;

/// Errors returned by a backend store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the request; carries its message.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// No row matched.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (duplicate slug).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The response body did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type alias for `StoreError`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Product table operations.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Products matching the filter, newest first.
    async fn list(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>>;

    /// Single product by slug.
    async fn get_by_slug(&self, slug: &Slug) -> StoreResult<Product>;

    /// Single product by id.
    async fn get_by_id(&self, id: ProductId) -> StoreResult<Product>;

    /// Insert a product and return the stored row.
    async fn create(&self, product: &NewProduct) -> StoreResult<Product>;

    /// Apply a partial update and return the stored row.
    async fn update(&self, id: ProductId, changes: &ProductChanges) -> StoreResult<Product>;

    /// Remove a product.
    async fn delete(&self, id: ProductId) -> StoreResult<()>;

    /// Cheap round-trip used by the readiness probe.
    async fn ping(&self) -> StoreResult<()>;
}

/// Inquiry table operations.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Inquiries matching the filter, newest first, joined with their product.
    async fn list(&self, filter: &InquiryFilter) -> StoreResult<Vec<InquiryListing>>;

    /// Insert an inquiry and return the stored row.
    async fn create(&self, inquiry: &NewInquiry) -> StoreResult<Inquiry>;

    /// Change an inquiry's status and return the stored row.
    async fn update_status(&self, id: InquiryId, status: InquiryStatus) -> StoreResult<Inquiry>;

    /// Remove an inquiry.
    async fn delete(&self, id: InquiryId) -> StoreResult<()>;
}

/// Blob storage for product images.
///
/// Failures never surface as errors: uploads yield `None` and deletes yield
/// `false`, and the cause is logged.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store an image under the product's folder and return its public URL.
    async fn upload(
        &self,
        product_id: ProductId,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Option<String>;

    /// Remove the object a public URL points to.
    async fn delete(&self, public_url: &str) -> bool;

    /// Public URL for an object path inside the bucket.
    fn public_url(&self, path: &str) -> String;
}

/// Object path for a new upload: `{id}/{id}-{random}.{ext}`.
///
/// The extension comes from the original file name; files without one are
/// stored as `.bin`.
#[must_use]
pub fn object_path(product_id: ProductId, file_name: &str) -> String {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map_or_else(|| "bin".to_string(), str::to_ascii_lowercase);
    format!("{product_id}/{product_id}-{}.{ext}", random_base36(10))
}

/// Extract the object path from a public URL of the given bucket.
///
/// Returns `None` when the URL does not contain `{bucket}/` or nothing
/// follows it.
#[must_use]
pub fn storage_path_from_url<'a>(public_url: &'a str, bucket: &str) -> Option<&'a str> {
    let marker = format!("{bucket}/");
    let (_, path) = public_url.split_once(&marker)?;
    let path = path.split(['?', '#']).next().unwrap_or(path);
    (!path.is_empty()).then_some(path)
}

fn random_base36(len: usize) -> String {
    use rand::Rng;

    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            char::from(ALPHABET.get(idx).copied().unwrap_or(b'0'))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_object_path_layout() {
        let id = ProductId::generate();
        let path = object_path(id, "Photo Table.JPG");
        let (folder, file) = path.split_once('/').unwrap();
        assert_eq!(folder, id.to_string());
        assert!(file.starts_with(&format!("{id}-")));
        assert!(
            std::path::Path::new(file)
                .extension()
                .is_some_and(|ext| ext == "jpg")
        );
    }

    #[test]
    fn test_object_path_without_extension() {
        let path = object_path(ProductId::generate(), "image");
        assert!(
            std::path::Path::new(&path)
                .extension()
                .is_some_and(|ext| ext == "bin")
        );
    }

    #[test]
    fn test_storage_path_from_url() {
        let url = "https://abc.supabase.co/storage/v1/object/public/product-images/p1/p1-xyz.png";
        assert_eq!(
            storage_path_from_url(url, "product-images"),
            Some("p1/p1-xyz.png")
        );
    }

    #[test]
    fn test_storage_path_from_malformed_url() {
        assert_eq!(
            storage_path_from_url("https://cdn.example.com/a.png", "product-images"),
            None
        );
        assert_eq!(
            storage_path_from_url("https://x/product-images/", "product-images"),
            None
        );
    }

    #[test]
    fn test_random_base36() {
        let s = random_base36(12);
        assert_eq!(s.len(), 12);
        assert!(s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
