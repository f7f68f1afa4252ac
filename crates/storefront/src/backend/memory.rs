//! In-process backend used by the integration tests and the CLI's dry runs.
//!
//! Mirrors the behaviour of the hosted tables closely enough for the web
//! layer: newest-first ordering, unique slugs, the inquiry/product join and
//! public image URLs in the same shape as Supabase Storage.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use decors_core::{InquiryId, InquiryStatus, ProductId, Slug};

use super::{
    ImageStore, InquiryStore, ProductStore, StoreError, StoreResult, object_path,
    storage_path_from_url,
};
use crate::config::DEFAULT_IMAGE_BUCKET;
use crate::models::{
    Inquiry, InquiryFilter, InquiryListing, NewInquiry, NewProduct, Product, ProductChanges,
    ProductFilter, ProductRef,
};

/// Base URL used when building public image URLs.
const DEFAULT_BASE_URL: &str = "http://localhost:54321";

/// Products, inquiries and image blobs held in memory.
///
/// Rows are kept newest first.
pub struct MemoryBackend {
    base_url: String,
    products: RwLock<Vec<Product>>,
    inquiries: RwLock<Vec<Inquiry>>,
    objects: RwLock<HashMap<String, Vec<u8>>>,
    fail_uploads: AtomicBool,
    product_reads: AtomicUsize,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl MemoryBackend {
    /// Empty backend whose image URLs start with `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            products: RwLock::new(Vec::new()),
            inquiries: RwLock::new(Vec::new()),
            objects: RwLock::new(HashMap::new()),
            fail_uploads: AtomicBool::new(false),
            product_reads: AtomicUsize::new(0),
        }
    }

    /// Make every subsequent upload fail (or succeed again).
    pub fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    /// Number of stored image objects.
    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }

    /// Number of single-product reads served so far.
    pub fn product_reads(&self) -> usize {
        self.product_reads.load(Ordering::SeqCst)
    }

    /// Number of stored inquiries.
    pub async fn inquiry_count(&self) -> usize {
        self.inquiries.read().await.len()
    }

    fn slug_taken(products: &[Product], slug: &Slug, except: Option<ProductId>) -> bool {
        products
            .iter()
            .any(|p| &p.slug == slug && Some(p.id) != except)
    }

    fn duplicate_slug(slug: &Slug) -> StoreError {
        StoreError::Conflict(format!(
            "duplicate key value violates unique constraint \"products_slug_key\" (slug {slug})"
        ))
    }
}

#[async_trait]
impl ProductStore for MemoryBackend {
    async fn list(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
        let products = self.products.read().await;
        let matching = products
            .iter()
            .filter(|p| {
                filter
                    .category
                    .as_ref()
                    .is_none_or(|c| p.category.as_ref() == Some(c))
            })
            .take(filter.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(matching)
    }

    async fn get_by_slug(&self, slug: &Slug) -> StoreResult<Product> {
        self.product_reads.fetch_add(1, Ordering::SeqCst);
        self.products
            .read()
            .await
            .iter()
            .find(|p| &p.slug == slug)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("product {slug}")))
    }

    async fn get_by_id(&self, id: ProductId) -> StoreResult<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("product {id}")))
    }

    async fn create(&self, product: &NewProduct) -> StoreResult<Product> {
        let mut products = self.products.write().await;
        if Self::slug_taken(&products, &product.slug, None) {
            return Err(Self::duplicate_slug(&product.slug));
        }

        let now = Utc::now();
        let stored = Product {
            id: ProductId::generate(),
            created_at: now,
            updated_at: now,
            name: product.name.clone(),
            name_ar: product.name_ar.clone(),
            slug: product.slug.clone(),
            short_desc: product.short_desc.clone(),
            short_desc_ar: product.short_desc_ar.clone(),
            long_desc: product.long_desc.clone(),
            long_desc_ar: product.long_desc_ar.clone(),
            price_estimate: product.price_estimate,
            dimensions: product.dimensions,
            material: product.material.clone(),
            category: product.category.clone(),
            tags: product.tags.clone(),
            images: product.images.clone(),
        };
        products.insert(0, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: ProductId, changes: &ProductChanges) -> StoreResult<Product> {
        let mut products = self.products.write().await;
        if let Some(slug) = &changes.slug
            && Self::slug_taken(&products, slug, Some(id))
        {
            return Err(Self::duplicate_slug(slug));
        }

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("product {id}")))?;
        changes.apply_to(product);
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> StoreResult<()> {
        self.products.write().await.retain(|p| p.id != id);
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl InquiryStore for MemoryBackend {
    async fn list(&self, filter: &InquiryFilter) -> StoreResult<Vec<InquiryListing>> {
        let inquiries = self.inquiries.read().await;
        let products = self.products.read().await;

        let listings = inquiries
            .iter()
            .filter(|i| filter.matches(i))
            .map(|inquiry| {
                let product = inquiry.product_id.and_then(|pid| {
                    products.iter().find(|p| p.id == pid).map(|p| ProductRef {
                        name: p.name.clone(),
                        slug: p.slug.clone(),
                    })
                });
                InquiryListing {
                    inquiry: inquiry.clone(),
                    product,
                }
            })
            .collect();
        Ok(listings)
    }

    async fn create(&self, inquiry: &NewInquiry) -> StoreResult<Inquiry> {
        let stored = Inquiry {
            id: InquiryId::generate(),
            created_at: Utc::now(),
            name: inquiry.name.clone(),
            email: inquiry.email.clone(),
            phone: inquiry.phone.clone(),
            message: inquiry.message.clone(),
            product_id: inquiry.product_id,
            status: InquiryStatus::New,
        };
        self.inquiries.write().await.insert(0, stored.clone());
        Ok(stored)
    }

    async fn update_status(&self, id: InquiryId, status: InquiryStatus) -> StoreResult<Inquiry> {
        let mut inquiries = self.inquiries.write().await;
        let inquiry = inquiries
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("inquiry {id}")))?;
        inquiry.status = status;
        Ok(inquiry.clone())
    }

    async fn delete(&self, id: InquiryId) -> StoreResult<()> {
        self.inquiries.write().await.retain(|i| i.id != id);
        Ok(())
    }
}

#[async_trait]
impl ImageStore for MemoryBackend {
    async fn upload(
        &self,
        product_id: ProductId,
        file_name: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Option<String> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            tracing::error!(file_name, "Image upload failed");
            return None;
        }

        let path = object_path(product_id, file_name);
        let url = self.public_url(&path);
        self.objects.write().await.insert(path, bytes);
        Some(url)
    }

    async fn delete(&self, public_url: &str) -> bool {
        let Some(path) = storage_path_from_url(public_url, DEFAULT_IMAGE_BUCKET) else {
            return false;
        };
        self.objects.write().await.remove(path).is_some()
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{DEFAULT_IMAGE_BUCKET}/{path}",
            self.base_url
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_product(name: &str, category: Option<&str>) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            name_ar: None,
            slug: Slug::from_name(name).unwrap(),
            short_desc: "Courte description".to_string(),
            short_desc_ar: None,
            long_desc: "Une description bien plus longue".to_string(),
            long_desc_ar: None,
            price_estimate: None,
            dimensions: None,
            material: None,
            category: category.map(String::from),
            tags: Vec::new(),
            images: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_by_slug() {
        let backend = MemoryBackend::default();
        let created = ProductStore::create(&backend, &new_product("Table Basse", Some("Tables")))
            .await
            .unwrap();
        let fetched = backend.get_by_slug(&created.slug).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts() {
        let backend = MemoryBackend::default();
        ProductStore::create(&backend, &new_product("Pouf", None))
            .await
            .unwrap();
        let err = ProductStore::create(&backend, &new_product("pouf", None))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_list_newest_first_with_filters() {
        let backend = MemoryBackend::default();
        for name in ["Chaise A", "Table B", "Chaise C"] {
            let category = if name.starts_with("Chaise") { "Chairs" } else { "Tables" };
            ProductStore::create(&backend, &new_product(name, Some(category)))
                .await
                .unwrap();
        }

        let chairs = ProductStore::list(&backend, &ProductFilter::category(Some("Chairs")))
            .await
            .unwrap();
        let names: Vec<_> = chairs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Chaise C", "Chaise A"]);

        let limited = ProductStore::list(
            &backend,
            &ProductFilter {
                category: None,
                limit: Some(2),
            },
        )
        .await
        .unwrap();
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].name, "Chaise C");
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let backend = MemoryBackend::default();
        let err = backend.get_by_id(ProductId::generate()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_inquiry_listing_joins_product() {
        let backend = MemoryBackend::default();
        let product = ProductStore::create(&backend, &new_product("Miroir Zellige", None))
            .await
            .unwrap();
        InquiryStore::create(
            &backend,
            &NewInquiry {
                name: "Amina".to_string(),
                email: "amina@example.ma".to_string(),
                phone: "0600000000".to_string(),
                message: "Disponible ?".to_string(),
                product_id: Some(product.id),
            },
        )
        .await
        .unwrap();

        let listings = InquiryStore::list(&backend, &InquiryFilter::default())
            .await
            .unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].product.as_ref().unwrap().slug, product.slug);
        assert_eq!(listings[0].inquiry.status, InquiryStatus::New);
    }

    #[tokio::test]
    async fn test_upload_and_delete_image() {
        let backend = MemoryBackend::default();
        let url = backend
            .upload(ProductId::generate(), "photo.png", "image/png", vec![1, 2, 3])
            .await
            .unwrap();
        assert!(url.contains("/storage/v1/object/public/product-images/"));
        assert_eq!(backend.object_count().await, 1);

        assert!(ImageStore::delete(&backend, &url).await);
        assert!(!ImageStore::delete(&backend, &url).await);
        assert!(!ImageStore::delete(&backend, "https://elsewhere/x.png").await);
    }

    #[tokio::test]
    async fn test_failing_uploads() {
        let backend = MemoryBackend::default();
        backend.set_fail_uploads(true);
        let url = backend
            .upload(ProductId::generate(), "photo.png", "image/png", vec![1])
            .await;
        assert!(url.is_none());
        assert_eq!(backend.object_count().await, 0);
    }
}
