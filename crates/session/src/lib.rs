//! `shopfront-session` — client-side session and authorization model.
//!
//! Single source of truth for "is there a usable credential, and what can its
//! holder do". The persisted token is the only durable state; every predicate
//! decodes it fresh from the store, so there is no claims cache to invalidate.
//!
//! This crate is intentionally decoupled from HTTP: logging in (which *mints*
//! the token) lives in `shopfront-client`; this crate owns everything after
//! the token exists.

pub mod claims;

#[cfg(test)]
pub(crate) mod testutil;
pub mod guard;
pub mod roles;
pub mod session;
pub mod store;
pub mod token;

pub use claims::{Claims, RoleClaim, TokenValidationError, validate_claims};
pub use guard::{GuardOutcome, GuardPolicy, evaluate};
pub use roles::{ROLE_PREFIX, Role, effective_role};
pub use session::SessionManager;
pub use store::{FileTokenStore, MemoryTokenStore, StoreError, TokenStore};
pub use token::{TokenDecodeError, decode_claims};
