use tracing::info;

use tessera_domain::account::Account;
use tessera_domain::id::AccountId;

use crate::domain::repository::AccountRepository;
use crate::error::AccountsServiceError;

// ── IssueVerificationToken ───────────────────────────────────────────────────

pub struct IssueVerificationTokenUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> IssueVerificationTokenUseCase<R> {
    /// Attach a freshly generated token to a pending account, replacing any
    /// previous one.
    pub async fn execute(&self, id: AccountId, token: String) -> Result<(), AccountsServiceError> {
        let mut account = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)?;

        if let Some(holder) = self.repo.find_by_verification_token(&token).await? {
            if holder.id != account.id {
                return Err(AccountsServiceError::DuplicateToken);
            }
        }

        account.set_verification_token(token)?;
        self.repo.update(&account).await
    }
}

// ── ConfirmVerification ──────────────────────────────────────────────────────

pub struct ConfirmVerificationUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> ConfirmVerificationUseCase<R> {
    /// Verify the account holding `token` and retire the token.
    pub async fn execute(&self, token: &str) -> Result<Account, AccountsServiceError> {
        if token.trim().is_empty() {
            return Err(AccountsServiceError::InvalidVerificationToken);
        }
        let mut account = self
            .repo
            .find_by_verification_token(token)
            .await?
            .ok_or(AccountsServiceError::InvalidVerificationToken)?;

        account.mark_verified()?;
        account.clear_verification_token();
        self.repo.update(&account).await?;

        info!(account_id = %account.id, "account verified");
        Ok(account)
    }
}
