use serde::{Deserialize, Serialize};

use crate::claims::{Claims, RoleClaim};

/// Conventional prefix some authorization stacks put on role names; stripped
/// before any comparison.
pub const ROLE_PREFIX: &str = "ROLE_";

/// The single effective role presented to the rest of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collapse whatever role shape the token carries into one effective role.
///
/// Normalization happens in one place (never re-derived at call sites):
/// 1. pick the populated claim field, in order `roles`, `role`, `authorities`;
/// 2. split comma-joined strings, trim entries, drop empties;
/// 3. strip one leading `ROLE_` from each candidate;
/// 4. elevated wins over standard: any `ADMIN` candidate yields [`Role::Admin`];
///    otherwise a populated claim yields [`Role::User`] (including claims whose
///    names are unrecognized); no role claim at all yields `None`.
pub fn effective_role(claims: &Claims) -> Option<Role> {
    let source = claims
        .roles
        .as_ref()
        .or(claims.role.as_ref())
        .or(claims.authorities.as_ref())?;

    let names = normalize(source);
    if names.iter().any(|name| name == "ADMIN") {
        Some(Role::Admin)
    } else {
        // "USER", or present-but-unrecognized: default to the standard role.
        Some(Role::User)
    }
}

/// Parse any supported claim shape into bare, prefix-free role names.
fn normalize(claim: &RoleClaim) -> Vec<String> {
    let raw: Vec<&str> = match claim {
        RoleClaim::One(joined) => joined.split(',').collect(),
        RoleClaim::Many(list) => list.iter().map(String::as_str).collect(),
    };

    raw.iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(strip_prefix)
        .collect()
}

fn strip_prefix(name: &str) -> String {
    name.strip_prefix(ROLE_PREFIX).unwrap_or(name).to_string()
}
