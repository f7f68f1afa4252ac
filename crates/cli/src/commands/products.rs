//! Catalog listing.

use decors_storefront::backend::ProductStore;
use decors_storefront::models::ProductFilter;

/// List products from the configured backend, newest first.
///
/// # Errors
///
/// Returns an error if the backend is not configured or unreachable.
pub async fn list(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::connect()?;
    let products = client.list(&ProductFilter::category(category)).await?;

    tracing::info!("{} product(s)", products.len());
    for product in products.iter() {
        let price = product
            .price_estimate
            .map_or_else(|| "-".to_string(), |p| p.amount().normalize().to_string());
        tracing::info!(
            "  {:<36}  {:<32}  {:<10}  {:>8}  {} image(s)",
            product.id,
            product.slug,
            product.category.as_deref().unwrap_or("-"),
            price,
            product.images.len()
        );
    }
    Ok(())
}
