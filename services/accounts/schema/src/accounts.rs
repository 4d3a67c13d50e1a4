use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Unique index on `accounts.email`.
pub const EMAIL_UNIQUE_INDEX: &str = "accounts_email_key";
/// Unique index on `accounts.verification_token`. NULLs never conflict.
pub const VERIFICATION_TOKEN_UNIQUE_INDEX: &str = "accounts_verification_token_key";

/// One registered identity.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub status: Status,
    #[sea_orm(unique)]
    pub verification_token: Option<String>,
    pub provider: String,
    pub provider_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Stored account status, a short string column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "verified")]
    Verified,
    #[sea_orm(string_value = "suspended")]
    Suspended,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
