//! `shopfront-client` — typed async bindings for the storefront REST backend.
//!
//! One [`ApiClient`] per backend; per-resource services hang off it:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use shopfront_client::{ApiClient, ClientConfig};
//! use shopfront_session::{FileTokenStore, SessionManager};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let session = SessionManager::new(Arc::new(FileTokenStore::new()?));
//! let client = ApiClient::new(ClientConfig::from_env(), session)?;
//!
//! client.auth().login("alice", "s3cret").await?;
//! let catalog = client.products().list(0, 10).await?;
//! # let _ = catalog;
//! # Ok(())
//! # }
//! ```
//!
//! Every authenticated request carries `Authorization: Bearer <token>` when a
//! token is stored. A 401 on any authenticated endpoint purges the session
//! and surfaces [`ApiError::SessionExpired`]; a 403 surfaces
//! [`ApiError::Forbidden`] without touching the session.

pub mod admin;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod orders;
pub mod products;
pub mod users;

pub use admin::AdminService;
pub use auth::AuthService;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use http::ApiClient;
pub use orders::OrdersService;
pub use products::ProductsService;
pub use users::UsersService;
