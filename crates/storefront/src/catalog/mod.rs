//! Cached services over the backend stores.
//!
//! [`Catalog`] serves products and owns image handling; [`InquiryBook`]
//! serves customer inquiries. Reads go through a `moka` cache; every
//! successful write invalidates the affected entries so the next read is
//! fresh. Product writes also drop cached inquiry listings, which embed the
//! product name and slug.

pub mod cache;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;
use tracing::instrument;

use decors_core::{InquiryId, InquiryStatus, ProductId, Slug};

use crate::backend::{ImageStore, InquiryStore, ProductStore, StoreResult};
use crate::models::{
    Inquiry, InquiryFilter, InquiryListing, NewInquiry, NewProduct, Product, ProductChanges,
    ProductFilter,
};
use cache::{CacheKey, CacheValue, ReadCache};

/// A file received from the admin product form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Result of uploading a batch of images.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    /// Public URLs of the stored images, in submission order.
    pub urls: Vec<String>,
    /// File names that could not be stored.
    pub failed: Vec<String>,
}

impl UploadOutcome {
    /// Whether every file was stored.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Product catalog with read caching and image storage.
#[derive(Clone)]
pub struct Catalog {
    products: Arc<dyn ProductStore>,
    images: Arc<dyn ImageStore>,
    cache: ReadCache,
    inquiries: InquiryBook,
}

impl Catalog {
    /// Create a catalog. `inquiries` is the book whose listings embed products.
    #[must_use]
    pub fn new(
        products: Arc<dyn ProductStore>,
        images: Arc<dyn ImageStore>,
        inquiries: InquiryBook,
        ttl: Duration,
    ) -> Self {
        Self {
            products,
            images,
            cache: ReadCache::new(ttl),
            inquiries,
        }
    }

    /// Products matching a filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the listing cannot be fetched.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: &ProductFilter) -> StoreResult<Arc<Vec<Product>>> {
        let cache_key = CacheKey::Products(filter.clone());

        if let Some(CacheValue::Products(products)) = self.cache.get(&cache_key).await {
            tracing::debug!("Cache hit for products");
            return Ok(products);
        }

        let seen = self.cache.generation();
        let products = Arc::new(self.products.list(filter).await?);
        self.cache
            .fill(cache_key, CacheValue::Products(Arc::clone(&products)), seen)
            .await;
        Ok(products)
    }

    /// The home page selection.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the listing cannot be fetched.
    pub async fn featured(&self) -> StoreResult<Arc<Vec<Product>>> {
        self.list(&ProductFilter::featured()).await
    }

    /// One product by slug.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has this slug.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn product(&self, slug: &Slug) -> StoreResult<Product> {
        let cache_key = CacheKey::Product(slug.clone());

        if let Some(CacheValue::Product(product)) = self.cache.get(&cache_key).await {
            tracing::debug!("Cache hit for product");
            return Ok(*product);
        }

        let seen = self.cache.generation();
        let product = self.products.get_by_slug(slug).await?;
        self.cache
            .fill(cache_key, CacheValue::Product(Box::new(product.clone())), seen)
            .await;
        Ok(product)
    }

    /// One product by id, uncached (admin edit screen).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the product does not exist.
    pub async fn product_by_id(&self, id: ProductId) -> StoreResult<Product> {
        self.products.get_by_id(id).await
    }

    /// Insert a product.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` on a duplicate slug.
    #[instrument(skip(self, product), fields(slug = %product.slug))]
    pub async fn create(&self, product: &NewProduct) -> StoreResult<Product> {
        let created = self.products.create(product).await?;
        self.invalidate().await;
        tracing::info!(product_id = %created.id, "Product created");
        Ok(created)
    }

    /// Apply a partial update, stamping `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the product is gone, or
    /// `StoreError::Conflict` if the new slug is taken.
    #[instrument(skip(self, changes), fields(product_id = %id))]
    pub async fn update(&self, id: ProductId, changes: ProductChanges) -> StoreResult<Product> {
        let changes = ProductChanges {
            updated_at: Some(Utc::now()),
            ..changes
        };
        let updated = self.products.update(id, &changes).await?;
        self.invalidate().await;
        tracing::info!("Product updated");
        Ok(updated)
    }

    /// Delete a product, then its stored images.
    ///
    /// Image removal is best-effort: failures are logged and the number of
    /// images actually removed is returned.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the product cannot be loaded or deleted.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete(&self, id: ProductId) -> StoreResult<usize> {
        let product = self.products.get_by_id(id).await?;
        self.products.delete(id).await?;
        self.invalidate().await;

        let removed = self.remove_images(&product.images).await;
        if removed < product.images.len() {
            tracing::warn!(
                removed,
                total = product.images.len(),
                "Some product images could not be deleted"
            );
        }
        tracing::info!("Product deleted");
        Ok(removed)
    }

    /// Upload images for a product concurrently.
    ///
    /// Failed files are reported in the outcome; successful ones are kept.
    #[instrument(skip(self, uploads), fields(product_id = %product_id, count = uploads.len()))]
    pub async fn upload_images(
        &self,
        product_id: ProductId,
        uploads: Vec<ImageUpload>,
    ) -> UploadOutcome {
        let results = join_all(uploads.into_iter().map(|upload| async move {
            let url = self
                .images
                .upload(
                    product_id,
                    &upload.file_name,
                    &upload.content_type,
                    upload.bytes,
                )
                .await;
            (upload.file_name, url)
        }))
        .await;

        let mut outcome = UploadOutcome::default();
        for (file_name, url) in results {
            match url {
                Some(url) => outcome.urls.push(url),
                None => outcome.failed.push(file_name),
            }
        }
        outcome
    }

    /// Delete stored images by public URL. Returns how many were removed.
    pub async fn remove_images(&self, urls: &[String]) -> usize {
        join_all(urls.iter().map(|url| self.images.delete(url)))
            .await
            .into_iter()
            .filter(|removed| *removed)
            .count()
    }

    /// Readiness check against the product table.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the table is unreachable.
    pub async fn ping(&self) -> StoreResult<()> {
        self.products.ping().await
    }

    /// Drop every cached product read and every cached inquiry listing.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
        self.inquiries.invalidate().await;
    }
}

/// Customer inquiries with read caching.
#[derive(Clone)]
pub struct InquiryBook {
    store: Arc<dyn InquiryStore>,
    cache: ReadCache,
}

impl InquiryBook {
    /// Create an inquiry book.
    #[must_use]
    pub fn new(store: Arc<dyn InquiryStore>, ttl: Duration) -> Self {
        Self {
            store,
            cache: ReadCache::new(ttl),
        }
    }

    /// Inquiries matching a filter, newest first, joined with their product.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the listing cannot be fetched.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: InquiryFilter) -> StoreResult<Arc<Vec<InquiryListing>>> {
        let cache_key = CacheKey::Inquiries(filter);

        if let Some(CacheValue::Inquiries(listings)) = self.cache.get(&cache_key).await {
            tracing::debug!("Cache hit for inquiries");
            return Ok(listings);
        }

        let seen = self.cache.generation();
        let listings = Arc::new(self.store.list(&filter).await?);
        self.cache
            .fill(cache_key, CacheValue::Inquiries(Arc::clone(&listings)), seen)
            .await;
        Ok(listings)
    }

    /// Record a new inquiry.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the insert fails.
    #[instrument(skip(self, inquiry), fields(product_id = ?inquiry.product_id))]
    pub async fn submit(&self, inquiry: &NewInquiry) -> StoreResult<Inquiry> {
        let created = self.store.create(inquiry).await?;
        self.invalidate().await;
        tracing::info!(inquiry_id = %created.id, "Inquiry received");
        Ok(created)
    }

    /// Move an inquiry to a new status.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the inquiry is gone.
    #[instrument(skip(self), fields(inquiry_id = %id, status = %status))]
    pub async fn set_status(&self, id: InquiryId, status: InquiryStatus) -> StoreResult<Inquiry> {
        let updated = self.store.update_status(id, status).await?;
        self.invalidate().await;
        Ok(updated)
    }

    /// Delete an inquiry.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the delete fails.
    #[instrument(skip(self), fields(inquiry_id = %id))]
    pub async fn delete(&self, id: InquiryId) -> StoreResult<()> {
        self.store.delete(id).await?;
        self.invalidate().await;
        Ok(())
    }

    /// Drop every cached listing.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::{MemoryBackend, StoreError};

    fn services() -> (Arc<MemoryBackend>, Catalog) {
        let backend = Arc::new(MemoryBackend::default());
        let ttl = Duration::from_secs(300);
        let book = InquiryBook::new(backend.clone(), ttl);
        let catalog = Catalog::new(backend.clone(), backend.clone(), book, ttl);
        (backend, catalog)
    }

    fn table(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            name_ar: None,
            slug: Slug::from_name(name).unwrap(),
            short_desc: "Table en noyer massif".to_string(),
            short_desc_ar: None,
            long_desc: "Table en noyer massif, finition huilée à la main.".to_string(),
            long_desc_ar: None,
            price_estimate: None,
            dimensions: None,
            material: Some("Noyer".to_string()),
            category: Some("Tables".to_string()),
            tags: vec!["noyer".to_string()],
            images: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_list_refreshes_after_create() {
        let (_, catalog) = services();
        assert!(catalog.list(&ProductFilter::all()).await.unwrap().is_empty());

        catalog.create(&table("Table Atlas")).await.unwrap();
        assert_eq!(catalog.list(&ProductFilter::all()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rename_invalidates_old_and_new_slug() {
        let (_, catalog) = services();
        let created = catalog.create(&table("Table Atlas")).await.unwrap();
        catalog.product(&created.slug).await.unwrap();

        let new_slug = Slug::from_name("Table Rif").unwrap();
        catalog
            .update(
                created.id,
                ProductChanges {
                    name: Some("Table Rif".to_string()),
                    slug: Some(new_slug.clone()),
                    ..ProductChanges::default()
                },
            )
            .await
            .unwrap();

        assert!(matches!(
            catalog.product(&created.slug).await,
            Err(StoreError::NotFound(_))
        ));
        let renamed = catalog.product(&new_slug).await.unwrap();
        assert_eq!(renamed.name, "Table Rif");
        assert!(renamed.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_images() {
        let (backend, catalog) = services();
        let created = catalog.create(&table("Table Atlas")).await.unwrap();
        let outcome = catalog
            .upload_images(
                created.id,
                vec![
                    ImageUpload {
                        file_name: "a.jpg".to_string(),
                        content_type: "image/jpeg".to_string(),
                        bytes: vec![1],
                    },
                    ImageUpload {
                        file_name: "b.png".to_string(),
                        content_type: "image/png".to_string(),
                        bytes: vec![2],
                    },
                ],
            )
            .await;
        assert!(outcome.is_complete());
        catalog
            .update(created.id, ProductChanges::images(outcome.urls))
            .await
            .unwrap();
        assert_eq!(backend.object_count().await, 2);

        let removed = catalog.delete(created.id).await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(backend.object_count().await, 0);
        assert!(catalog.list(&ProductFilter::all()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_uploads_are_reported() {
        let (backend, catalog) = services();
        backend.set_fail_uploads(true);
        let outcome = catalog
            .upload_images(
                ProductId::generate(),
                vec![ImageUpload {
                    file_name: "a.jpg".to_string(),
                    content_type: "image/jpeg".to_string(),
                    bytes: vec![1],
                }],
            )
            .await;
        assert!(!outcome.is_complete());
        assert_eq!(outcome.failed, ["a.jpg"]);
    }

    #[tokio::test]
    async fn test_inquiry_status_filter_sees_update() {
        let (_, catalog) = services();
        let book = catalog.inquiries.clone();
        let inquiry = book
            .submit(&NewInquiry {
                name: "Karim".to_string(),
                email: "karim@example.ma".to_string(),
                phone: "0611111111".to_string(),
                message: "Délai de fabrication ?".to_string(),
                product_id: None,
            })
            .await
            .unwrap();

        let archived = InquiryFilter::with_status(InquiryStatus::Archived);
        assert!(book.list(archived).await.unwrap().is_empty());

        book.set_status(inquiry.id, InquiryStatus::Archived)
            .await
            .unwrap();
        let listed = book.list(archived).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].inquiry.id, inquiry.id);

        book.delete(inquiry.id).await.unwrap();
        assert!(book.list(InquiryFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_product_rename_refreshes_inquiry_join() {
        let (_, catalog) = services();
        let book = catalog.inquiries.clone();
        let product = catalog.create(&table("Table Atlas")).await.unwrap();
        book.submit(&NewInquiry {
            name: "Karim".to_string(),
            email: "karim@example.ma".to_string(),
            phone: "0611111111".to_string(),
            message: "Prix ?".to_string(),
            product_id: Some(product.id),
        })
        .await
        .unwrap();
        book.list(InquiryFilter::default()).await.unwrap();

        catalog
            .update(
                product.id,
                ProductChanges {
                    name: Some("Table Toubkal".to_string()),
                    ..ProductChanges::default()
                },
            )
            .await
            .unwrap();

        let listed = book.list(InquiryFilter::default()).await.unwrap();
        assert_eq!(listed[0].product.as_ref().unwrap().name, "Table Toubkal");
    }

    /// Product store whose listings are read immediately but delivered late.
    struct SlowListing(Arc<MemoryBackend>);

    #[async_trait::async_trait]
    impl ProductStore for SlowListing {
        async fn list(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
            let snapshot = ProductStore::list(self.0.as_ref(), filter).await?;
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(snapshot)
        }

        async fn get_by_slug(&self, slug: &Slug) -> StoreResult<Product> {
            self.0.get_by_slug(slug).await
        }

        async fn get_by_id(&self, id: ProductId) -> StoreResult<Product> {
            self.0.get_by_id(id).await
        }

        async fn create(&self, product: &NewProduct) -> StoreResult<Product> {
            ProductStore::create(self.0.as_ref(), product).await
        }

        async fn update(&self, id: ProductId, changes: &ProductChanges) -> StoreResult<Product> {
            self.0.update(id, changes).await
        }

        async fn delete(&self, id: ProductId) -> StoreResult<()> {
            ProductStore::delete(self.0.as_ref(), id).await
        }

        async fn ping(&self) -> StoreResult<()> {
            self.0.ping().await
        }
    }

    #[tokio::test]
    async fn test_listing_in_flight_during_create_is_not_cached() {
        let backend = Arc::new(MemoryBackend::default());
        let ttl = Duration::from_secs(300);
        let book = InquiryBook::new(backend.clone(), ttl);
        let catalog = Catalog::new(
            Arc::new(SlowListing(backend.clone())),
            backend.clone(),
            book,
            ttl,
        );

        let all = ProductFilter::all();
        let (stale, created) = tokio::join!(catalog.list(&all), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            catalog.create(&table("Table Atlas")).await
        });
        assert!(stale.unwrap().is_empty());
        created.unwrap();

        let fresh = catalog.list(&ProductFilter::all()).await.unwrap();
        assert_eq!(fresh.len(), 1);
    }
}
