//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! Adds restrictive security headers to all responses. The only external
//! origin the pages load from is Supabase Storage (product images).

use axum::{
    extract::{Request, State},
    http::{
        HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Build the CSP, allowing images from the storage origin.
///
/// ```text
/// default-src 'none';
/// script-src 'self';
/// style-src 'self';
/// font-src 'self';
/// img-src 'self' data: <storage origin>;
/// connect-src 'self';
/// frame-src 'none';
/// object-src 'none';
/// base-uri 'self';
/// form-action 'self';
/// frame-ancestors 'none'
/// ```
#[must_use]
pub fn content_security_policy(storage_url: &str, upgrade_insecure: bool) -> String {
    let img_origin = url::Url::parse(storage_url)
        .map(|u| u.origin().ascii_serialization())
        .unwrap_or_default();

    let mut csp = format!(
        "default-src 'none'; \
         script-src 'self'; \
         style-src 'self'; \
         font-src 'self'; \
         img-src 'self' data: {img_origin}; \
         connect-src 'self'; \
         frame-src 'none'; \
         object-src 'none'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors 'none'"
    );
    if upgrade_insecure {
        csp.push_str("; upgrade-insecure-requests");
    }
    csp
}

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY` - Prevent clickjacking
/// - `X-Content-Type-Options: nosniff` - Prevent MIME sniffing
/// - `Referrer-Policy: strict-origin-when-cross-origin` - `wa.me` links keep working
/// - `Content-Security-Policy` - See [`content_security_policy`]
/// - `Permissions-Policy` - Deny sensitive features
/// - `Cache-Control: no-store` on admin pages
/// - `Cross-Origin-Opener-Policy: same-origin` - Process isolation
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let is_admin = request.uri().path().starts_with("/admin");
    let mut response = next.run(request).await;

    let config = state.config();
    let csp = content_security_policy(&config.supabase.url, config.is_secure());

    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    if let Ok(value) = HeaderValue::from_str(&csp) {
        headers.insert(CONTENT_SECURITY_POLICY, value);
    }

    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "camera=(), \
             geolocation=(), \
             microphone=(), \
             payment=(), \
             usb=(), \
             interest-cohort=()",
        ),
    );

    // Admin screens show customer contact details
    if is_admin {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store, max-age=0"));
    }

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csp_allows_storage_origin() {
        let csp = content_security_policy("https://abc.supabase.co", false);
        assert!(csp.contains("img-src 'self' data: https://abc.supabase.co;"));
        assert!(!csp.contains("upgrade-insecure-requests"));
    }

    #[test]
    fn test_csp_upgrade_when_secure() {
        let csp = content_security_policy("https://abc.supabase.co", true);
        assert!(csp.ends_with("upgrade-insecure-requests"));
    }
}
