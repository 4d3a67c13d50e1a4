use std::sync::{Arc, Mutex};

use tessera_accounts::domain::repository::AccountRepository;
use tessera_accounts::error::AccountsServiceError;
use tessera_domain::account::{Account, NewAccount};
use tessera_domain::id::AccountId;

// ── MockAccountRepo ──────────────────────────────────────────────────────────

/// In-memory store with the same uniqueness rules as the `accounts` table.
#[derive(Clone, Default)]
pub struct MockAccountRepo {
    pub accounts: Arc<Mutex<Vec<Account>>>,
}

impl MockAccountRepo {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a shared handle to the internal account list for post-execution inspection.
    pub fn accounts_handle(&self) -> Arc<Mutex<Vec<Account>>> {
        Arc::clone(&self.accounts)
    }

    pub fn stored(&self, id: AccountId) -> Option<Account> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }
}

fn check_unique(existing: &[Account], account: &Account) -> Result<(), AccountsServiceError> {
    for other in existing.iter().filter(|a| a.id != account.id) {
        if other.email == account.email {
            return Err(AccountsServiceError::DuplicateEmail);
        }
        if account.verification_token.is_some()
            && other.verification_token == account.verification_token
        {
            return Err(AccountsServiceError::DuplicateToken);
        }
    }
    Ok(())
}

impl AccountRepository for MockAccountRepo {
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountsServiceError> {
        Ok(self.stored(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, AccountsServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.verification_token.as_deref() == Some(token))
            .cloned())
    }

    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        check_unique(&accounts, account)?;
        accounts.push(account.clone());
        Ok(())
    }

    async fn update(&self, account: &Account) -> Result<(), AccountsServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        check_unique(&accounts, account)?;
        let slot = accounts
            .iter_mut()
            .find(|a| a.id == account.id)
            .ok_or(AccountsServiceError::AccountNotFound)?;
        *slot = account.clone();
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_account(email: &str) -> Account {
    Account::new(NewAccount::local(email, "$argon2id$hash")).unwrap()
}

pub fn pending_account(email: &str, token: &str) -> Account {
    Account::new(NewAccount {
        verification_token: Some(token.to_owned()),
        ..NewAccount::local(email, "$argon2id$hash")
    })
    .unwrap()
}

pub fn suspended_account(email: &str) -> Account {
    let mut account = test_account(email);
    account.suspend();
    account
}
