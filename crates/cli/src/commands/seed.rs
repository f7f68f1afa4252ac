//! Seed the catalog from a YAML file.
//!
//! Each entry becomes one product. Slugs are generated from the name unless
//! given. Entries whose slug already exists are skipped, so the command can
//! be re-run safely.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{error, info, warn};

use decors_core::{Dimensions, PriceEstimate, Slug, SlugError};
use decors_storefront::backend::{ProductStore, StoreError};
use decors_storefront::models::{CATEGORIES, NewProduct};

/// One product entry in the seed file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedProduct {
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    pub short_desc: String,
    #[serde(default)]
    pub short_desc_ar: Option<String>,
    pub long_desc: String,
    #[serde(default)]
    pub long_desc_ar: Option<String>,
    #[serde(default)]
    pub price_estimate: Option<PriceEstimate>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl SeedProduct {
    /// The slug this entry will be stored under.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError`] if neither the slug nor the name yields one.
    pub fn slug(&self) -> Result<Slug, SlugError> {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => Slug::from_name(slug),
            _ => Slug::from_name(&self.name),
        }
    }

    fn into_new_product(self, slug: Slug) -> NewProduct {
        NewProduct {
            name: self.name.trim().to_string(),
            name_ar: self.name_ar,
            slug,
            short_desc: self.short_desc.trim().to_string(),
            short_desc_ar: self.short_desc_ar,
            long_desc: self.long_desc.trim().to_string(),
            long_desc_ar: self.long_desc_ar,
            price_estimate: self.price_estimate,
            dimensions: self.dimensions.filter(|d| !d.is_empty()),
            material: self.material,
            category: self.category,
            tags: self.tags,
            images: self.images,
        }
    }
}

/// Seed file layout: a top-level `products` list.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    pub products: Vec<SeedProduct>,
}

/// Outcome of a seeding run.
#[derive(Debug, Default)]
pub struct SeedResult {
    pub inserted: usize,
    /// Slugs that already existed.
    pub skipped: Vec<String>,
    /// `(slug, error)` for entries the backend rejected.
    pub errors: Vec<(String, String)>,
}

/// Check a seed file before anything is sent to the backend.
///
/// Returns one message per problem; an empty list means the file is valid.
#[must_use]
pub fn validate(file: &SeedFile) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for (index, product) in file.products.iter().enumerate() {
        let entry = index + 1;
        if product.name.trim().chars().count() < 3 {
            problems.push(format!("entry {entry}: name must be at least 3 characters"));
        }
        if product.short_desc.trim().chars().count() < 10 {
            problems.push(format!("entry {entry}: short_desc must be at least 10 characters"));
        }
        if product.long_desc.trim().chars().count() < 20 {
            problems.push(format!("entry {entry}: long_desc must be at least 20 characters"));
        }
        if let Some(category) = &product.category
            && !CATEGORIES.contains(&category.as_str())
        {
            problems.push(format!(
                "entry {entry}: unknown category {category:?} (expected one of {})",
                CATEGORIES.join(", ")
            ));
        }
        match product.slug() {
            Ok(slug) if slug.len() < 3 => {
                problems.push(format!("entry {entry}: slug {slug} is too short"));
            }
            Ok(slug) => {
                if !seen.insert(slug.clone()) {
                    problems.push(format!("entry {entry}: duplicate slug {slug}"));
                }
            }
            Err(e) => problems.push(format!("entry {entry}: {e}")),
        }
    }

    problems
}

/// Insert every entry, skipping slugs that already exist.
///
/// Call [`validate`] first; entries without a usable slug are reported as
/// errors here.
pub async fn seed(store: &dyn ProductStore, file: SeedFile) -> SeedResult {
    let mut result = SeedResult::default();

    for product in file.products {
        let slug = match product.slug() {
            Ok(slug) => slug,
            Err(e) => {
                result.errors.push((product.name.clone(), e.to_string()));
                continue;
            }
        };
        let label = slug.to_string();

        match store.create(&product.into_new_product(slug)).await {
            Ok(created) => {
                info!(slug = %created.slug, id = %created.id, "Inserted product");
                result.inserted += 1;
            }
            Err(StoreError::Conflict(_)) => {
                warn!(slug = %label, "Product already exists, skipping");
                result.skipped.push(label);
            }
            Err(e) => result.errors.push((label, e.to_string())),
        }
    }

    result
}

/// Seed products from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML file
/// * `dry_run` - Validate only, do not contact the backend
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, fails validation,
/// or the backend is not configured.
pub async fn products(file_path: &str, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading products from file");

    let content = tokio::fs::read_to_string(path).await?;
    let file: SeedFile = serde_yaml::from_str(&content)?;

    info!(products = file.products.len(), "Parsed seed file");

    let problems = validate(&file);
    if !problems.is_empty() {
        error!("Seed file validation failed:");
        for problem in &problems {
            error!("  - {problem}");
        }
        return Err(format!("{} validation errors found", problems.len()).into());
    }

    info!("Seed file validated successfully");
    if dry_run {
        return Ok(());
    }

    let client = super::connect()?;
    let result = seed(&client, file).await;

    info!("Seeding complete!");
    info!("  Inserted: {}", result.inserted);
    info!("  Skipped (already exist): {}", result.skipped.len());

    if !result.errors.is_empty() {
        error!("  Errors: {}", result.errors.len());
        for (slug, err) in &result.errors {
            error!("    - {slug}: {err}");
        }
        return Err(format!("{} products failed to insert", result.errors.len()).into());
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use decors_storefront::backend::MemoryBackend;
    use decors_storefront::models::ProductFilter;

    const SAMPLE: &str = r#"
products:
  - name: "Table Atlas"
    name_ar: "طاولة الأطلس"
    short_desc: "Table basse en cèdre massif"
    long_desc: "Table basse en cèdre massif, sculptée à la main à Marrakech."
    price_estimate: 4500
    dimensions: { width: 120, height: 45, depth: 60 }
    material: "Cèdre"
    category: "Tables"
    tags: ["cèdre", "salon"]
  - name: "Chaise Fès"
    slug: "chaise-fes"
    short_desc: "Chaise en noyer peinte"
    long_desc: "Chaise en noyer peinte de motifs traditionnels de Fès."
    category: "Chairs"
"#;

    fn sample() -> SeedFile {
        serde_yaml::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn test_sample_is_valid() {
        let file = sample();
        assert!(validate(&file).is_empty());
        assert_eq!(file.products[0].slug().unwrap().as_str(), "table-atlas");
        assert_eq!(file.products[1].slug().unwrap().as_str(), "chaise-fes");
        assert_eq!(
            file.products[0].price_estimate.unwrap().amount(),
            rust_decimal::Decimal::from(4500)
        );
    }

    #[test]
    fn test_validate_reports_problems() {
        let mut file = sample();
        file.products[1].slug = Some("Table Atlas".to_string());
        file.products[1].category = Some("Lamps".to_string());
        file.products[1].short_desc = "court".to_string();

        let problems = validate(&file);
        assert_eq!(problems.len(), 3);
        assert!(problems.iter().any(|p| p.contains("duplicate slug table-atlas")));
        assert!(problems.iter().any(|p| p.contains("unknown category")));
        assert!(problems.iter().any(|p| p.contains("short_desc")));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let yaml = "products:\n  - name: x\n    short_desc: y\n    long_desc: z\n    colour: red\n";
        assert!(serde_yaml::from_str::<SeedFile>(yaml).is_err());
    }

    #[tokio::test]
    async fn test_seed_skips_existing() {
        let store = MemoryBackend::default();

        let first = seed(&store, sample()).await;
        assert_eq!(first.inserted, 2);
        assert!(first.errors.is_empty());

        let second = seed(&store, sample()).await;
        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, ["table-atlas", "chaise-fes"]);

        let listed = store.list(&ProductFilter::all()).await.unwrap();
        assert_eq!(listed.len(), 2);
    }
}
