use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A user account as the backend exposes it (own profile and admin listing
/// share this shape).
///
/// `roles` carries the backend's raw role names (`ROLE_USER`, `ROLE_ADMIN`);
/// interpreting them is the session layer's job, not a data concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub enabled: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Self-service profile update (`PUT /users/me`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub username: String,
    pub email: String,
}

/// Admin-side user update (`PUT /admin/users/{id}`); both fields optional,
/// omitted fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// Back-office dashboard counters (`GET /admin/stats`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_products: i64,
    pub total_users: i64,
    pub total_orders: i64,
    pub total_revenue: f64,
    #[serde(default)]
    pub recent_orders: Option<i64>,
    #[serde(default)]
    pub low_stock_products: Option<i64>,
}
