//! Inquiry management: status changes, filtering and deletion.

use decors_core::InquiryId;
use decors_integration_tests::{TestContext, location};
use decors_storefront::backend::InquiryStore;
use decors_storefront::models::InquiryFilter;

async fn submit_inquiry(ctx: &TestContext, name: &str) {
    let resp = ctx
        .post_form(
            "/contact",
            &[
                ("name", name),
                ("email", "client@example.ma"),
                ("phone", "+212 611 22 33 44"),
                ("message", "Bonjour, est-ce disponible ?"),
            ],
        )
        .await;
    assert!(resp.status().is_success());
}

async fn inquiry_id(ctx: &TestContext, name: &str) -> InquiryId {
    InquiryStore::list(ctx.backend.as_ref(), &InquiryFilter::default())
        .await
        .expect("list inquiries")
        .into_iter()
        .find(|l| l.inquiry.name == name)
        .map(|l| l.inquiry.id)
        .expect("inquiry not found")
}

#[tokio::test]
async fn test_inquiries_listed_newest_first_with_reply_links() {
    let ctx = TestContext::new().await;
    submit_inquiry(&ctx, "Youssef").await;
    submit_inquiry(&ctx, "Khadija").await;
    ctx.login().await;

    let (status, body) = ctx.page("/admin/inquiries").await;
    assert_eq!(status, 200);
    let khadija = body.find("Khadija").expect("Khadija listed");
    let youssef = body.find("Youssef").expect("Youssef listed");
    assert!(khadija < youssef);

    assert!(body.contains("mailto:client@example.ma"));
    assert!(body.contains("https://wa.me/212611223344"));
    assert!(body.contains("badge badge-blue"));
}

#[tokio::test]
async fn test_archived_status_shows_in_filtered_list() {
    let ctx = TestContext::new().await;
    submit_inquiry(&ctx, "Youssef").await;
    submit_inquiry(&ctx, "Khadija").await;
    ctx.login().await;

    // Warm the cache for both filters
    assert!(ctx.page("/admin/inquiries?status=new").await.1.contains("Youssef"));
    assert!(!ctx.page("/admin/inquiries?status=archived").await.1.contains("Youssef"));

    let id = inquiry_id(&ctx, "Youssef").await;
    let resp = ctx
        .post_form(
            &format!("/admin/inquiries/{id}/status"),
            &[("status", "archived"), ("filter", "new")],
        )
        .await;
    assert_eq!(location(&resp), "/admin/inquiries?status=new");

    let (_, archived) = ctx.page("/admin/inquiries?status=archived").await;
    assert!(archived.contains("Youssef"));
    assert!(!archived.contains("Khadija"));
    assert!(archived.contains("Archivée"));

    let (_, new) = ctx.page("/admin/inquiries?status=new").await;
    assert!(!new.contains("Youssef"));
    assert!(new.contains("Khadija"));
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let ctx = TestContext::new().await;
    submit_inquiry(&ctx, "Youssef").await;
    ctx.login().await;

    let id = inquiry_id(&ctx, "Youssef").await;
    let resp = ctx
        .post_form(&format!("/admin/inquiries/{id}/status"), &[("status", "closed")])
        .await;
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_removes_inquiry_from_list() {
    let ctx = TestContext::new().await;
    submit_inquiry(&ctx, "Youssef").await;
    submit_inquiry(&ctx, "Khadija").await;
    ctx.login().await;

    assert!(ctx.page("/admin/inquiries").await.1.contains("Youssef"));

    let id = inquiry_id(&ctx, "Youssef").await;
    let resp = ctx
        .post_form(&format!("/admin/inquiries/{id}/delete"), &[("filter", "")])
        .await;
    assert_eq!(location(&resp), "/admin/inquiries");

    let (_, body) = ctx.page("/admin/inquiries").await;
    assert!(!body.contains("Youssef"));
    assert!(body.contains("Khadija"));
    assert_eq!(ctx.backend.inquiry_count().await, 1);
}
