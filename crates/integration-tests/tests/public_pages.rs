//! Public pages, health checks, language switching and response headers.

use decors_integration_tests::{STORAGE_URL, TestContext, location};
use reqwest::StatusCode;

#[tokio::test]
async fn test_health_endpoints() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.page("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");

    let (status, _) = ctx.page("/health/ready").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_public_pages_render_in_french_by_default() {
    let ctx = TestContext::new().await;

    for path in ["/", "/gallery", "/about", "/contact"] {
        let (status, body) = ctx.page(path).await;
        assert_eq!(status, 200, "{path}");
        assert!(body.contains(r#"<html lang="fr" dir="ltr">"#), "{path}");
        assert!(body.contains("Accueil"), "{path}");
    }
}

#[tokio::test]
async fn test_unknown_paths_render_not_found() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.page("/nope").await;
    assert_eq!(status, 404);
    assert!(body.contains("Page introuvable"));

    let (status, _) = ctx.page("/product/does-not-exist").await;
    assert_eq!(status, 404);

    let (status, _) = ctx.page("/product/Not%20A%20Slug").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_language_switch_persists_in_session() {
    let ctx = TestContext::new().await;

    let resp = ctx.get("/lang/ar?next=%2Fabout").await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/about");

    let (_, body) = ctx.page("/about").await;
    assert!(body.contains(r#"<html lang="ar" dir="rtl">"#));
    assert!(body.contains("الرئيسية"));

    // Still Arabic on the next page
    let (_, body) = ctx.page("/gallery").await;
    assert!(body.contains(r#"dir="rtl""#));

    let resp = ctx.get("/lang/fr?next=%2F").await;
    assert_eq!(location(&resp), "/");
    let (_, body) = ctx.page("/").await;
    assert!(body.contains(r#"dir="ltr""#));
}

#[tokio::test]
async fn test_language_switch_rejects_offsite_redirects() {
    let ctx = TestContext::new().await;

    let resp = ctx.get("/lang/ar?next=https%3A%2F%2Fevil.example").await;
    assert_eq!(location(&resp), "/");

    let resp = ctx.get("/lang/ar?next=%2F%2Fevil.example").await;
    assert_eq!(location(&resp), "/");

    // Tab and newline are stripped by browsers, leaving `//evil.example`
    let resp = ctx.get("/lang/ar?next=%2F%09%2Fevil.example").await;
    assert_eq!(location(&resp), "/");

    let resp = ctx.get("/lang/ar?next=%2F%0A%2Fevil.example").await;
    assert_eq!(location(&resp), "/");

    let resp = ctx.get("/lang/ar?next=%2F%5Cevil.example").await;
    assert_eq!(location(&resp), "/");
}

#[tokio::test]
async fn test_security_headers() {
    let ctx = TestContext::new().await;

    let resp = ctx.get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
    assert!(headers.contains_key("x-request-id"));

    let csp = headers["content-security-policy"].to_str().unwrap_or_default();
    assert!(csp.contains(&format!("img-src 'self' data: {STORAGE_URL}")));
    assert!(!headers.contains_key("cache-control"));

    let resp = ctx.get("/admin/login").await;
    assert_eq!(resp.headers()["cache-control"], "no-store, max-age=0");
}

#[tokio::test]
async fn test_whatsapp_redirect_for_unknown_product() {
    let ctx = TestContext::new().await;
    let (status, _) = ctx.page("/product/missing-piece/whatsapp").await;
    assert_eq!(status, 404);
}
