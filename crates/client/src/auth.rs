use shopfront_core::{AuthResponse, LoginRequest, RegisterRequest};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// Login, registration and logout.
pub struct AuthService<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login`. On success the issued token is persisted; every
    /// subsequent session predicate and bearer request sees it immediately.
    ///
    /// A 401 here surfaces as [`crate::ApiError::InvalidCredentials`] and
    /// stores nothing; transport failures surface as
    /// [`crate::ApiError::Network`] so the UI can tell the two apart.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<AuthResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let resp: AuthResponse = self.client.post_json_public("/auth/login", &body).await?;
        self.client.session().store_token(&resp.token)?;
        Ok(resp)
    }

    /// `POST /auth/register`. Creates the account; does not log in (the
    /// backend answers with a plain confirmation, not a token).
    pub async fn register(&self, username: &str, email: &str, password: &str) -> ApiResult<()> {
        let body = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        self.client.post_discard_public("/auth/register", &body).await
    }

    /// Drop the persisted session. Local only; the backend keeps no session
    /// state worth revoking.
    pub fn logout(&self) {
        self.client.session().logout();
    }
}
