use crate::roles::Role;
use crate::session::SessionManager;

/// Protection level of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Always renders, no checks.
    Public,
    /// Requires a valid session.
    Authenticated,
    /// Requires a valid session *and* the elevated role.
    AdminOnly,
}

/// What the consumer should do with the attempted navigation.
///
/// The two redirect targets are deliberately distinct: `RedirectToLogin`
/// means "prove who you are", `RedirectToForbidden` means "you are known,
/// but not allowed". An admin-only view never sends an authenticated
/// non-admin to the login view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    RedirectToLogin,
    RedirectToForbidden,
}

/// Evaluate a guard policy against the current session.
///
/// Pure policy check over the session predicates: no IO of its own, no
/// panics. Runs fresh on every navigation — outcomes are never cached, so a
/// token expiring mid-session is caught on the next evaluation (the
/// predicates purge the stale token as a side effect).
pub fn evaluate(policy: GuardPolicy, session: &SessionManager) -> GuardOutcome {
    match policy {
        GuardPolicy::Public => GuardOutcome::Render,
        GuardPolicy::Authenticated => {
            if session.is_authenticated() {
                GuardOutcome::Render
            } else {
                GuardOutcome::RedirectToLogin
            }
        }
        GuardPolicy::AdminOnly => {
            if !session.is_authenticated() {
                return GuardOutcome::RedirectToLogin;
            }
            match session.user_role() {
                Some(Role::Admin) => GuardOutcome::Render,
                _ => GuardOutcome::RedirectToForbidden,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::Utc;

    use crate::store::{MemoryTokenStore, TokenStore};
    use crate::testutil::token_with_roles;

    fn session_with(token: Option<&str>) -> (SessionManager, Arc<MemoryTokenStore>) {
        let store = Arc::new(MemoryTokenStore::new());
        if let Some(token) = token {
            store.save(token).unwrap();
        }
        (SessionManager::new(store.clone()), store)
    }

    fn fresh(roles: &str) -> String {
        token_with_roles("alice", Utc::now().timestamp() + 3600, roles.into())
    }

    #[test]
    fn public_always_renders() {
        let (session, _) = session_with(None);
        assert_eq!(evaluate(GuardPolicy::Public, &session), GuardOutcome::Render);
    }

    #[test]
    fn authenticated_view_renders_for_valid_session() {
        let token = fresh("ROLE_USER");
        let (session, _) = session_with(Some(&token));
        assert_eq!(
            evaluate(GuardPolicy::Authenticated, &session),
            GuardOutcome::Render
        );
    }

    #[test]
    fn unauthenticated_visitor_goes_to_login_not_forbidden() {
        let (session, _) = session_with(None);
        assert_eq!(
            evaluate(GuardPolicy::Authenticated, &session),
            GuardOutcome::RedirectToLogin
        );
        assert_eq!(
            evaluate(GuardPolicy::AdminOnly, &session),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn authenticated_non_admin_goes_to_forbidden_not_login() {
        let token = fresh("ROLE_USER");
        let (session, _) = session_with(Some(&token));
        assert_eq!(
            evaluate(GuardPolicy::AdminOnly, &session),
            GuardOutcome::RedirectToForbidden
        );
    }

    #[test]
    fn admin_renders_admin_views() {
        let token = fresh("ROLE_USER,ROLE_ADMIN");
        let (session, _) = session_with(Some(&token));
        assert_eq!(
            evaluate(GuardPolicy::AdminOnly, &session),
            GuardOutcome::Render
        );
    }

    #[test]
    fn authenticated_session_without_role_claim_is_not_admin() {
        let token = crate::testutil::encode_token(&serde_json::json!({
            "sub": "carol",
            "exp": Utc::now().timestamp() + 3600,
        }));
        let (session, _) = session_with(Some(&token));
        assert_eq!(
            evaluate(GuardPolicy::AdminOnly, &session),
            GuardOutcome::RedirectToForbidden
        );
    }

    #[test]
    fn expired_session_redirects_and_purges() {
        let token = token_with_roles("bob", Utc::now().timestamp() - 60, "ROLE_ADMIN".into());
        let (session, store) = session_with(Some(&token));

        assert_eq!(
            evaluate(GuardPolicy::Authenticated, &session),
            GuardOutcome::RedirectToLogin
        );
        // The stale credential is gone: the next navigation starts clean.
        assert_eq!(store.load().unwrap(), None);
    }
}
