use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use shopfront_session::SessionManager;

use crate::admin::AdminService;
use crate::auth::AuthService;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::orders::OrdersService;
use crate::products::ProductsService;
use crate::users::UsersService;

/// How a request authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    /// Attach the stored bearer token when present; a 401 means the session
    /// died and must be purged.
    Bearer,
    /// Login/registration: credentials travel in the body, no bearer header,
    /// and a 401 means "wrong credentials", not "session expired".
    CredentialExchange,
}

/// HTTP client for the storefront backend.
///
/// Owns the base URL, the transport timeout, and the 401/403 discipline;
/// everything else is typed pass-through in the per-resource services.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionManager,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: SessionManager) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    pub fn products(&self) -> ProductsService<'_> {
        ProductsService::new(self)
    }

    pub fn orders(&self) -> OrdersService<'_> {
        OrdersService::new(self)
    }

    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    pub fn admin(&self) -> AdminService<'_> {
        AdminService::new(self)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{path}", self.base_url))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send_json(self.request(Method::GET, path), AuthMode::Bearer)
            .await
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        self.send_json(self.request(Method::GET, path).query(query), AuthMode::Bearer)
            .await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_json(self.request(Method::POST, path).json(body), AuthMode::Bearer)
            .await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_json(self.request(Method::PUT, path).json(body), AuthMode::Bearer)
            .await
    }

    /// DELETE where the backend answers with a human-readable body we drop.
    pub(crate) async fn delete_discard(&self, path: &str) -> ApiResult<()> {
        self.send_discard(self.request(Method::DELETE, path), AuthMode::Bearer)
            .await
    }

    /// POST without the bearer header; 401 maps to invalid credentials.
    pub(crate) async fn post_json_public<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_json(
            self.request(Method::POST, path).json(body),
            AuthMode::CredentialExchange,
        )
        .await
    }

    /// POST without the bearer header, success body discarded.
    pub(crate) async fn post_discard_public<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        self.send_discard(
            self.request(Method::POST, path).json(body),
            AuthMode::CredentialExchange,
        )
        .await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        mode: AuthMode,
    ) -> ApiResult<T> {
        let resp = self.dispatch(req, mode).await?;
        Ok(resp.json().await?)
    }

    async fn send_discard(&self, req: RequestBuilder, mode: AuthMode) -> ApiResult<()> {
        self.dispatch(req, mode).await?;
        Ok(())
    }

    /// Send, attach the bearer token if applicable, and map non-2xx statuses
    /// to the error taxonomy. 401 on a bearer request purges the session; a
    /// 403 leaves it intact.
    async fn dispatch(&self, req: RequestBuilder, mode: AuthMode) -> ApiResult<Response> {
        let req = match (mode, self.session.token()) {
            (AuthMode::Bearer, Some(token)) => req.bearer_auth(token),
            _ => req,
        };

        let resp = req.send().await.map_err(ApiError::from)?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = read_error_message(resp).await;
        debug!(status = status.as_u16(), %message, "backend rejected request");

        Err(match status {
            StatusCode::UNAUTHORIZED => match mode {
                AuthMode::CredentialExchange => ApiError::InvalidCredentials(message),
                AuthMode::Bearer => {
                    warn!("received 401, session is no longer valid, purging token");
                    self.session.logout();
                    ApiError::SessionExpired
                }
            },
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::Validation(message)
            }
            StatusCode::CONFLICT => ApiError::Conflict(message),
            _ => ApiError::Server {
                status: status.as_u16(),
                message,
            },
        })
    }
}

/// Best-effort extraction of the backend's error message: a JSON body with a
/// `message` (or `error`) field, otherwise the raw text.
async fn read_error_message(resp: Response) -> String {
    let text = resp.text().await.unwrap_or_default();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }

    if text.is_empty() {
        "request failed".to_string()
    } else {
        text
    }
}
