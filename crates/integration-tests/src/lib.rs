//! End-to-end tests for the 1000 Decors storefront.
//!
//! Each test starts the full router (sessions, middleware, templates) on an
//! ephemeral port, backed by the in-memory stores, and drives it over HTTP
//! with a cookie-keeping `reqwest` client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p decors-integration-tests
//! ```
//!
//! No Supabase project is needed.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response, redirect};
use secrecy::SecretString;

use decors_core::Slug;
use decors_storefront::backend::{MemoryBackend, ProductStore};
use decors_storefront::config::{DEFAULT_IMAGE_BUCKET, StorefrontConfig, SupabaseConfig};
use decors_storefront::models::Product;
use decors_storefront::routes;
use decors_storefront::state::AppState;

/// Admin password used by every test server.
pub const ADMIN_PASSWORD: &str = "Zq8!mT4#rW2@kL9$";

/// Storage origin the in-memory backend builds image URLs from.
pub const STORAGE_URL: &str = "http://localhost:54321";

/// Configuration for a test server.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        base_url: "http://127.0.0.1".to_string(),
        supabase: SupabaseConfig {
            url: STORAGE_URL.to_string(),
            anon_key: SecretString::from("test-anon-key"),
            image_bucket: DEFAULT_IMAGE_BUCKET.to_string(),
        },
        admin_password: SecretString::from(ADMIN_PASSWORD),
        whatsapp_number: Some("212600000000".to_string()),
        cache_ttl: Duration::from_secs(300),
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// A running storefront plus a client with its own cookie jar.
pub struct TestContext {
    pub base_url: String,
    pub client: Client,
    pub backend: Arc<MemoryBackend>,
}

impl TestContext {
    /// Start a server on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound or the client cannot be built.
    pub async fn new() -> Self {
        let backend = Arc::new(MemoryBackend::new(STORAGE_URL));
        let state = AppState::with_stores(
            test_config(),
            backend.clone(),
            backend.clone(),
            backend.clone(),
        );
        let app = routes::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        let client = Client::builder()
            .cookie_store(true)
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: format!("http://{addr}"),
            client,
            backend,
        }
    }

    /// Absolute URL for a path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a path.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// GET a path and return the status with the body text.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn page(&self, path: &str) -> (u16, String) {
        let resp = self.get(path).await;
        let status = resp.status().as_u16();
        let body = resp.text().await.expect("Failed to read body");
        (status, body)
    }

    /// POST a url-encoded form.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// POST a multipart form.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn post_multipart(&self, path: &str, form: reqwest::multipart::Form) -> Response {
        self.client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .expect("Multipart POST failed")
    }

    /// Log in as admin with the shared password.
    ///
    /// # Panics
    ///
    /// Panics if the login is rejected.
    pub async fn login(&self) {
        let resp = self
            .post_form("/admin/login", &[("password", ADMIN_PASSWORD)])
            .await;
        assert!(
            resp.status().is_redirection(),
            "login failed: {}",
            resp.status()
        );
    }

    /// Look a product up directly in the backend.
    ///
    /// # Panics
    ///
    /// Panics if the slug is malformed.
    pub async fn stored_product(&self, slug: &str) -> Option<Product> {
        let slug = Slug::parse(slug).expect("Invalid slug");
        ProductStore::get_by_slug(self.backend.as_ref(), &slug)
            .await
            .ok()
    }
}

/// The `Location` header of a redirect.
///
/// # Panics
///
/// Panics if the response has no valid `Location` header.
#[must_use]
pub fn location(resp: &Response) -> String {
    resp.headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("Missing Location header")
        .to_string()
}

/// Text fields of a valid product form.
#[must_use]
pub fn product_form(name: &str) -> reqwest::multipart::Form {
    reqwest::multipart::Form::new()
        .text("name", name.to_string())
        .text("name_ar", "طاولة الأطلس")
        .text("slug", "")
        .text("short_desc", "Table basse en cèdre massif")
        .text(
            "long_desc",
            "Table basse en cèdre massif, sculptée à la main à Marrakech.",
        )
        .text("price_estimate", "4500")
        .text("width", "120")
        .text("height", "45")
        .text("depth", "")
        .text("material", "Cèdre")
        .text("category", "Tables")
        .text("tags", "cèdre, salon")
}

/// A small JPEG-typed file part.
///
/// # Panics
///
/// Panics if the MIME type is rejected.
#[must_use]
pub fn image_part(file_name: &str) -> reqwest::multipart::Part {
    reqwest::multipart::Part::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
        .file_name(file_name.to_string())
        .mime_str("image/jpeg")
        .expect("Invalid MIME type")
}
