use shopfront_core::{AdminStats, Page, Product, ProductRequest, UpdateUserRequest, UserAccount};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// Back-office endpoints. The backend enforces the admin role; a non-admin
/// session gets a 403, which surfaces as [`crate::ApiError::Forbidden`]
/// without disturbing the session.
pub struct AdminService<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /admin/stats` — dashboard counters.
    pub async fn stats(&self) -> ApiResult<AdminStats> {
        self.client.get_json("/admin/stats").await
    }

    /// `GET /admin/users` — paged user listing.
    pub async fn users(&self, page: u32, size: u32) -> ApiResult<Page<UserAccount>> {
        self.client
            .get_json_query(
                "/admin/users",
                &[("page", page.to_string()), ("size", size.to_string())],
            )
            .await
    }

    /// `PUT /admin/users/{id}` — enable/disable or change roles.
    pub async fn update_user(&self, id: i64, update: &UpdateUserRequest) -> ApiResult<UserAccount> {
        self.client.put_json(&format!("/admin/users/{id}"), update).await
    }

    /// `POST /admin/products`.
    pub async fn create_product(&self, product: &ProductRequest) -> ApiResult<Product> {
        self.client.post_json("/admin/products", product).await
    }

    /// `PUT /admin/products/{id}`.
    pub async fn update_product(&self, id: i64, product: &ProductRequest) -> ApiResult<Product> {
        self.client.put_json(&format!("/admin/products/{id}"), product).await
    }

    /// `DELETE /admin/products/{id}`.
    pub async fn delete_product(&self, id: i64) -> ApiResult<()> {
        self.client.delete_discard(&format!("/admin/products/{id}")).await
    }
}
