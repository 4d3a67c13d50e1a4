#![allow(async_fn_in_trait)]

use tessera_domain::account::Account;
use tessera_domain::id::AccountId;

use crate::error::AccountsServiceError;

/// Storage port for account records.
///
/// Implementations enforce uniqueness of `email` and of non-null
/// `verification_token`, reporting `DuplicateEmail` / `DuplicateToken`.
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountsServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError>;

    async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, AccountsServiceError>;

    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError>;

    /// Overwrite every mutable field of an existing account.
    /// Returns `AccountNotFound` if no row has `account.id`.
    async fn update(&self, account: &Account) -> Result<(), AccountsServiceError>;
}
