use tracing::info;

use tessera_domain::account::{Account, NewAccount, Provider};

use crate::domain::repository::AccountRepository;
use crate::error::AccountsServiceError;

pub struct RegisterAccountInput {
    pub email: String,
    /// Provider string; `None` means `"local"`.
    pub provider: Option<String>,
    pub provider_id: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub verification_token: Option<String>,
}

pub struct RegisterAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> RegisterAccountUseCase<R> {
    /// Create a `pending` account. The storage layer still has the final say
    /// on uniqueness; the lookups here just give the common case a clean error.
    pub async fn execute(
        &self,
        input: RegisterAccountInput,
    ) -> Result<Account, AccountsServiceError> {
        let provider = match input.provider.as_deref() {
            Some(name) => Provider::parse(name)?,
            None => Provider::Local,
        };
        let account = Account::new(NewAccount {
            email: input.email,
            provider,
            provider_id: input.provider_id,
            password_hash: input.password_hash,
            first_name: input.first_name,
            last_name: input.last_name,
            verification_token: input.verification_token,
        })?;

        if self.repo.find_by_email(&account.email).await?.is_some() {
            return Err(AccountsServiceError::DuplicateEmail);
        }
        if let Some(token) = account.verification_token.as_deref() {
            if self.repo.find_by_verification_token(token).await?.is_some() {
                return Err(AccountsServiceError::DuplicateToken);
            }
        }

        self.repo.create(&account).await?;
        info!(account_id = %account.id, provider = %account.provider, "account registered");
        Ok(account)
    }
}
