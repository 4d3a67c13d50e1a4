use tracing::info;

use tessera_domain::account::{Account, ReinstatePolicy};
use tessera_domain::id::AccountId;

use crate::domain::repository::AccountRepository;
use crate::error::AccountsServiceError;

// ── SuspendAccount ───────────────────────────────────────────────────────────

pub struct SuspendAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> SuspendAccountUseCase<R> {
    pub async fn execute(&self, id: AccountId) -> Result<Account, AccountsServiceError> {
        let mut account = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)?;
        let from = account.status;
        account.suspend();
        self.repo.update(&account).await?;
        info!(account_id = %account.id, %from, "account suspended");
        Ok(account)
    }
}

// ── ReinstateAccount ─────────────────────────────────────────────────────────

pub struct ReinstateAccountUseCase<R: AccountRepository> {
    pub repo: R,
    pub policy: ReinstatePolicy,
}

impl<R: AccountRepository> ReinstateAccountUseCase<R> {
    pub async fn execute(&self, id: AccountId) -> Result<Account, AccountsServiceError> {
        let mut account = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)?;
        account.reinstate(self.policy)?;
        self.repo.update(&account).await?;
        info!(account_id = %account.id, to = %account.status, "account reinstated");
        Ok(account)
    }
}
