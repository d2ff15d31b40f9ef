//! `shopfront-core` — transfer models for the storefront backend wire.
//!
//! This crate contains **pure data** shapes (no HTTP, no storage, no policy).
//! Every record here is owned by the backend; the client holds them only
//! transiently per view, with no local cache or consistency logic.

pub mod auth;
pub mod order;
pub mod page;
pub mod product;
pub mod user;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use order::{Order, OrderItem, OrderItemRequest, OrderRequest};
pub use page::Page;
pub use product::{Product, ProductRequest, ProductSearch};
pub use user::{AdminStats, UpdateProfileRequest, UpdateUserRequest, UserAccount};
