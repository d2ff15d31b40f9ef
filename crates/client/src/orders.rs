use shopfront_core::{Order, OrderRequest};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// Order placement and history. All endpoints require a session.
pub struct OrdersService<'a> {
    client: &'a ApiClient,
}

impl<'a> OrdersService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /orders` — place an order for the current user.
    pub async fn create(&self, order: &OrderRequest) -> ApiResult<Order> {
        self.client.post_json("/orders", order).await
    }

    /// `GET /orders/my-orders` — the current user's order history.
    pub async fn my_orders(&self) -> ApiResult<Vec<Order>> {
        self.client.get_json("/orders/my-orders").await
    }
}
