use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::claims::{Claims, validate_claims};
use crate::roles::{Role, effective_role};
use crate::store::{StoreError, TokenStore};
use crate::token::decode_claims;

/// Single source of truth for "is there a usable credential, and what can its
/// holder do".
///
/// Every call decodes fresh from the store; nothing is cached, so a token
/// written by `store_token` is visible to the very next predicate call and
/// there is no invalidation hazard.
///
/// Absence of a session is never an error here: predicates return
/// `false`/`None`. Decode failures are downgraded internally (logged, token
/// purged) and never escape this boundary.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn TokenStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Raw token accessor for the outbound HTTP layer. No validation and no
    /// purge-on-expiry: purging is the predicates' job, so the HTTP layer
    /// never fights the guards over state.
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "token store read failed");
                None
            }
        }
    }

    /// Persist a freshly issued token. Called by the login/register flow;
    /// every other operation sees the new token immediately.
    pub fn store_token(&self, token: &str) -> Result<(), StoreError> {
        self.store.save(token)
    }

    /// Unconditionally drop the persisted token. Idempotent: with no token
    /// stored this is a no-op, never an error. Store failures are logged and
    /// swallowed; from the caller's point of view the session is gone.
    pub fn logout(&self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "failed to clear persisted token");
        }
    }

    /// Is there a stored, decodable, unexpired token?
    ///
    /// Broken tokens are purged on sight (same rule as expiry), so an invalid
    /// state is never observable twice.
    pub fn is_authenticated(&self) -> bool {
        self.valid_claims(Utc::now()).is_some()
    }

    /// The effective role of the current session, `None` when there is no
    /// valid session or the token carries no role claim at all.
    pub fn user_role(&self) -> Option<Role> {
        let claims = self.valid_claims(Utc::now())?;
        effective_role(&claims)
    }

    /// Full decoded claims of a valid session, with the same purge side
    /// effects as [`SessionManager::is_authenticated`].
    pub fn current_user(&self) -> Option<Claims> {
        self.valid_claims(Utc::now())
    }

    /// Decode and validate against the supplied clock; purge on decode
    /// failure or expiry.
    fn valid_claims(&self, now: DateTime<Utc>) -> Option<Claims> {
        let token = self.token()?;

        let claims = match decode_claims(&token) {
            Ok(claims) => claims,
            Err(err) => {
                // Malformed token: treated as "no session", purged so the
                // state cannot be observed twice. Never surfaced to callers.
                debug!(error = %err, "stored token is undecodable, purging");
                self.logout();
                return None;
            }
        };

        if validate_claims(&claims, now).is_err() {
            debug!(sub = %claims.sub, "stored token expired, purging");
            self.logout();
            return None;
        }

        Some(claims)
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish_non_exhaustive()
    }
}
