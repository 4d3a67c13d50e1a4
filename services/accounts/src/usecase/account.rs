use tessera_domain::account::Account;
use tessera_domain::id::AccountId;

use crate::domain::repository::AccountRepository;
use crate::error::AccountsServiceError;

// ── GetAccount ───────────────────────────────────────────────────────────────

pub struct GetAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> GetAccountUseCase<R> {
    pub async fn execute(&self, id: AccountId) -> Result<Account, AccountsServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)
    }
}

// ── FindAccountByEmail ───────────────────────────────────────────────────────

pub struct FindAccountByEmailUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> FindAccountByEmailUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<Account, AccountsServiceError> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub struct UpdateProfileUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> UpdateProfileUseCase<R> {
    pub async fn execute(
        &self,
        id: AccountId,
        input: UpdateProfileInput,
    ) -> Result<Account, AccountsServiceError> {
        if input.first_name.is_none() && input.last_name.is_none() {
            return Err(AccountsServiceError::MissingData);
        }
        let mut account = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)?;
        account.update_profile(input.first_name, input.last_name);
        self.repo.update(&account).await?;
        Ok(account)
    }
}
