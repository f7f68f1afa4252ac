//! `products` table over PostgREST.

use async_trait::async_trait;
use tracing::instrument;

use decors_core::{ProductId, Slug};

use super::SupabaseClient;
use crate::backend::{ProductStore, StoreResult};
use crate::models::{NewProduct, Product, ProductChanges, ProductFilter};

const TABLE: &str = "products";

#[async_trait]
impl ProductStore for SupabaseClient {
    #[instrument(skip(self))]
    async fn list(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
        let mut query: Vec<(&str, String)> = vec![
            ("select", "*".to_string()),
            ("order", "created_at.desc".to_string()),
        ];
        if let Some(category) = &filter.category {
            query.push(("category", format!("eq.{category}")));
        }
        if let Some(limit) = filter.limit {
            query.push(("limit", limit.to_string()));
        }

        let request = self.client.get(self.table_url(TABLE)).query(&query);
        Self::fetch(request, "products").await
    }

    #[instrument(skip(self), fields(slug = %slug))]
    async fn get_by_slug(&self, slug: &Slug) -> StoreResult<Product> {
        let request = self
            .client
            .get(self.table_url(TABLE))
            .query(&[("select", "*".to_string()), ("slug", format!("eq.{slug}"))]);
        Self::fetch(Self::single(request), &format!("product {slug}")).await
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn get_by_id(&self, id: ProductId) -> StoreResult<Product> {
        let request = self
            .client
            .get(self.table_url(TABLE))
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))]);
        Self::fetch(Self::single(request), &format!("product {id}")).await
    }

    #[instrument(skip(self, product), fields(slug = %product.slug))]
    async fn create(&self, product: &NewProduct) -> StoreResult<Product> {
        let request = self
            .client
            .post(self.table_url(TABLE))
            .query(&[("select", "*")])
            .json(product);
        let request = Self::single(Self::returning(request));
        Self::fetch(request, &format!("product {}", product.slug)).await
    }

    #[instrument(skip(self, changes), fields(product_id = %id))]
    async fn update(&self, id: ProductId, changes: &ProductChanges) -> StoreResult<Product> {
        let request = self
            .client
            .patch(self.table_url(TABLE))
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))])
            .json(changes);
        let request = Self::single(Self::returning(request));
        Self::fetch(request, &format!("product {id}")).await
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete(&self, id: ProductId) -> StoreResult<()> {
        let request = self
            .client
            .delete(self.table_url(TABLE))
            .query(&[("id", format!("eq.{id}"))]);
        Self::execute(request, &format!("product {id}")).await
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> StoreResult<()> {
        let request = self
            .client
            .get(self.table_url(TABLE))
            .query(&[("select", "id"), ("limit", "1")]);
        Self::execute(request, "products").await
    }
}
