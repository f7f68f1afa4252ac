//! CLI command implementations.

pub mod products;
pub mod seed;
pub mod slug;

use decors_storefront::backend::SupabaseClient;
use decors_storefront::config::SupabaseConfig;

/// Connect to the Supabase project named by the environment.
///
/// # Errors
///
/// Returns an error if the Supabase variables are missing or invalid.
pub fn connect() -> Result<SupabaseClient, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = SupabaseConfig::from_env()?;
    tracing::info!(url = %config.url, "Using Supabase project");
    Ok(SupabaseClient::new(&config)?)
}
