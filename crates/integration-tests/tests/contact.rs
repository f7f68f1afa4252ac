//! Contact form submissions.

use decors_integration_tests::TestContext;
use reqwest::StatusCode;

fn contact(email: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", "Amina".to_string()),
        ("email", email.to_string()),
        ("phone", "+212 600 00 00 00".to_string()),
        ("message", "Je voudrais un devis pour une table.".to_string()),
    ]
}

async fn submit(ctx: &TestContext, form: &[(&'static str, String)]) -> (StatusCode, String) {
    let fields: Vec<(&str, &str)> = form.iter().map(|(k, v)| (*k, v.as_str())).collect();
    let resp = ctx.post_form("/contact", &fields).await;
    let status = resp.status();
    (status, resp.text().await.unwrap_or_default())
}

#[tokio::test]
async fn test_invalid_email_blocks_submission() {
    let ctx = TestContext::new().await;

    let (status, body) = submit(&ctx, &contact("not-an-email")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Adresse e-mail invalide"));
    // The visitor's input is kept
    assert!(body.contains(r#"value="Amina""#));
    assert_eq!(ctx.backend.inquiry_count().await, 0);
}

#[tokio::test]
async fn test_invalid_form_skips_product_lookup() {
    let ctx = TestContext::new().await;

    let mut form = contact("not-an-email");
    form.push(("product", "table-atlas".to_string()));
    let (status, body) = submit(&ctx, &form).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains(r#"name="product" value="table-atlas""#));
    assert_eq!(ctx.backend.product_reads(), 0);
    assert_eq!(ctx.backend.inquiry_count().await, 0);
}

#[tokio::test]
async fn test_missing_fields_are_reported() {
    let ctx = TestContext::new().await;

    let (status, body) = submit(&ctx, &[("name", String::new())]).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Le nom est obligatoire"));
    assert!(body.contains("Le message est obligatoire"));
    assert_eq!(ctx.backend.inquiry_count().await, 0);
}

#[tokio::test]
async fn test_valid_submission_is_stored() {
    let ctx = TestContext::new().await;

    let (status, body) = submit(&ctx, &contact("amina@example.ma")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Votre message a bien été envoyé"));
    // Fields are cleared after success
    assert!(!body.contains(r#"value="Amina""#));
    assert_eq!(ctx.backend.inquiry_count().await, 1);
}

#[tokio::test]
async fn test_submission_linked_to_product() {
    let ctx = TestContext::new().await;
    ctx.login().await;
    ctx.post_multipart(
        "/admin/products/new",
        decors_integration_tests::product_form("Table Atlas"),
    )
    .await;

    let (status, page) = ctx.page("/contact?product=table-atlas").await;
    assert_eq!(status, 200);
    assert!(page.contains(r#"name="product" value="table-atlas""#));
    assert!(page.contains("Table Atlas"));

    let mut form = contact("amina@example.ma");
    form.push(("product", "table-atlas".to_string()));
    let (status, _) = submit(&ctx, &form).await;
    assert_eq!(status, StatusCode::OK);

    let (_, inquiries) = ctx.page("/admin/inquiries").await;
    assert!(inquiries.contains("Amina"));
    assert!(inquiries.contains(r#"href="/product/table-atlas""#));
}

#[tokio::test]
async fn test_unknown_product_link_is_ignored() {
    let ctx = TestContext::new().await;

    let mut form = contact("amina@example.ma");
    form.push(("product", "no-such-piece".to_string()));
    let (status, _) = submit(&ctx, &form).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ctx.backend.inquiry_count().await, 1);
}
