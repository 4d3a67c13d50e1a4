use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use tessera_domain::account::{Account, AccountStatus};

pub mod auth;
pub mod users;

/// Handler for `GET /`.
pub async fn index() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

/// Public view of an account. Never carries the password hash or verification token.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub status: AccountStatus,
    pub provider: String,
    pub provider_id: Option<String>,
    #[serde(serialize_with = "tessera_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "tessera_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            status: account.status,
            provider: account.provider.into(),
            provider_id: account.provider_id,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
