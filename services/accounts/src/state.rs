use sea_orm::DatabaseConnection;

use tessera_domain::account::ReinstatePolicy;

use crate::infra::db::DbAccountRepository;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub reinstate_policy: ReinstatePolicy,
}

impl AppState {
    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }
}
