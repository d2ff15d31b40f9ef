use shopfront_core::{Page, Product, ProductSearch};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// Public catalog browsing. No authentication required; the bearer header is
/// still attached when a session exists (the backend ignores it here).
pub struct ProductsService<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /products` — one page of the catalog.
    pub async fn list(&self, page: u32, size: u32) -> ApiResult<Page<Product>> {
        self.client
            .get_json_query(
                "/products",
                &[("page", page.to_string()), ("size", size.to_string())],
            )
            .await
    }

    /// `GET /products/{id}`.
    pub async fn get(&self, id: i64) -> ApiResult<Product> {
        self.client.get_json(&format!("/products/{id}")).await
    }

    /// `GET /products/search` with optional name/category filters.
    pub async fn search(&self, search: &ProductSearch) -> ApiResult<Page<Product>> {
        let mut query = vec![
            ("page", search.page.to_string()),
            ("size", search.size.to_string()),
        ];
        if let Some(name) = &search.name {
            query.push(("name", name.clone()));
        }
        if let Some(category_id) = search.category_id {
            query.push(("categoryId", category_id.to_string()));
        }

        self.client.get_json_query("/products/search", &query).await
    }
}
