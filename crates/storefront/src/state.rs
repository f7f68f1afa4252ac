//! Application state shared across handlers.

use std::sync::Arc;

use crate::backend::{ImageStore, InquiryStore, ProductStore, StoreResult, SupabaseClient};
use crate::catalog::{Catalog, InquiryBook};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the cached catalog services and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    inquiries: InquiryBook,
}

impl AppState {
    /// Create state backed by the configured Supabase project.
    ///
    /// # Errors
    ///
    /// Returns an error if the Supabase HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> StoreResult<Self> {
        let client = Arc::new(SupabaseClient::new(&config.supabase)?);
        Ok(Self::with_stores(
            config,
            client.clone(),
            client.clone(),
            client,
        ))
    }

    /// Create state over arbitrary stores (in-memory backend in tests).
    #[must_use]
    pub fn with_stores(
        config: StorefrontConfig,
        products: Arc<dyn ProductStore>,
        inquiries: Arc<dyn InquiryStore>,
        images: Arc<dyn ImageStore>,
    ) -> Self {
        let inquiries = InquiryBook::new(inquiries, config.cache_ttl);
        let catalog = Catalog::new(products, images, inquiries.clone(), config.cache_ttl);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                inquiries,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get the inquiry book.
    #[must_use]
    pub fn inquiries(&self) -> &InquiryBook {
        &self.inner.inquiries
    }
}
