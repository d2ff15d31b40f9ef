use shopfront_core::{UpdateProfileRequest, UserAccount};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// Self-service profile endpoints.
pub struct UsersService<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /users/me` — the authoritative profile (fresher than the token's
    /// claims, which only carry subject and roles).
    pub async fn me(&self) -> ApiResult<UserAccount> {
        self.client.get_json("/users/me").await
    }

    /// `PUT /users/me`.
    pub async fn update_me(&self, update: &UpdateProfileRequest) -> ApiResult<UserAccount> {
        self.client.put_json("/users/me", update).await
    }
}
