use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr,
};

use tessera_accounts_schema::accounts::{
    self, EMAIL_UNIQUE_INDEX, Status, VERIFICATION_TOKEN_UNIQUE_INDEX,
};
use tessera_domain::account::{Account, AccountStatus, Provider};
use tessera_domain::id::AccountId;

use crate::domain::repository::AccountRepository;
use crate::error::AccountsServiceError;

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountsServiceError> {
        let model = accounts::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find account by id")?;
        model.map(account_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find account by email")?;
        model.map(account_from_model).transpose()
    }

    async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, AccountsServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::VerificationToken.eq(token))
            .one(&self.db)
            .await
            .context("find account by verification token")?;
        model.map(account_from_model).transpose()
    }

    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError> {
        accounts::ActiveModel {
            id: Set(account.id.0),
            email: Set(account.email.clone()),
            password_hash: Set(account.password_hash.clone()),
            first_name: Set(account.first_name.clone()),
            last_name: Set(account.last_name.clone()),
            status: Set(status_to_column(account.status)),
            verification_token: Set(account.verification_token.clone()),
            provider: Set(account.provider.to_string()),
            provider_id: Set(account.provider_id.clone()),
            created_at: Set(account.created_at),
            updated_at: Set(account.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "create account"))?;
        Ok(())
    }

    async fn update(&self, account: &Account) -> Result<(), AccountsServiceError> {
        // id, email, provider and created_at are fixed after creation.
        accounts::ActiveModel {
            id: Set(account.id.0),
            password_hash: Set(account.password_hash.clone()),
            first_name: Set(account.first_name.clone()),
            last_name: Set(account.last_name.clone()),
            status: Set(status_to_column(account.status)),
            verification_token: Set(account.verification_token.clone()),
            provider_id: Set(account.provider_id.clone()),
            updated_at: Set(account.updated_at),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(update_error)?;
        Ok(())
    }
}

/// Translate unique-index violations into domain conflicts; everything else is internal.
fn write_error(err: DbErr, context: &'static str) -> AccountsServiceError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        if let Some(conflict) = conflict_from_detail(&detail) {
            return conflict;
        }
    }
    AccountsServiceError::Internal(anyhow::Error::new(err).context(context))
}

/// Map a unique-violation message to the conflict for the index it names.
fn conflict_from_detail(detail: &str) -> Option<AccountsServiceError> {
    if detail.contains(EMAIL_UNIQUE_INDEX) {
        Some(AccountsServiceError::DuplicateEmail)
    } else if detail.contains(VERIFICATION_TOKEN_UNIQUE_INDEX) {
        Some(AccountsServiceError::DuplicateToken)
    } else {
        None
    }
}

fn update_error(err: DbErr) -> AccountsServiceError {
    match err {
        DbErr::RecordNotUpdated => AccountsServiceError::AccountNotFound,
        e => write_error(e, "update account"),
    }
}

fn status_to_column(status: AccountStatus) -> Status {
    match status {
        AccountStatus::Pending => Status::Pending,
        AccountStatus::Verified => Status::Verified,
        AccountStatus::Suspended => Status::Suspended,
    }
}

fn status_from_column(status: Status) -> AccountStatus {
    match status {
        Status::Pending => AccountStatus::Pending,
        Status::Verified => AccountStatus::Verified,
        Status::Suspended => AccountStatus::Suspended,
    }
}

fn account_from_model(model: accounts::Model) -> Result<Account, AccountsServiceError> {
    let provider = Provider::parse(&model.provider)
        .with_context(|| format!("stored provider for account {}", model.id))?;
    Ok(Account {
        id: AccountId(model.id),
        email: model.email,
        password_hash: model.password_hash,
        first_name: model.first_name,
        last_name: model.last_name,
        status: status_from_column(model.status),
        verification_token: model.verification_token,
        provider,
        provider_id: model.provider_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
