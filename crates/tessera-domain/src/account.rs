//! Account record model and its lifecycle rules.
//!
//! An [`Account`] is one registered identity. This module only validates and
//! transforms records; storage, hashing and token generation live elsewhere.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::AccountId;

/// Provider string for accounts that authenticate with a local password.
pub const LOCAL_PROVIDER: &str = "local";

/// Errors raised by account construction and status transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition {
        from: AccountStatus,
        to: AccountStatus,
    },
}

/// Lifecycle stage of an account.
///
/// Wire format: `"pending"`, `"verified"`, `"suspended"`. No other string parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Pending,
    Verified,
    Suspended,
}

impl AccountStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Suspended => "suspended",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            "suspended" => Ok(Self::Suspended),
            _ => Err(AccountError::InvalidInput("unknown account status")),
        }
    }
}

/// Authentication source of an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Provider {
    #[default]
    Local,
    /// A federated identity provider, e.g. `"github"`.
    External(String),
}

impl Provider {
    /// Parse a provider string. `"local"` is the local provider; any other
    /// non-empty string names a federated provider.
    pub fn parse(s: &str) -> Result<Self, AccountError> {
        match s.trim() {
            "" => Err(AccountError::InvalidInput("provider must not be empty")),
            LOCAL_PROVIDER => Ok(Self::Local),
            other => Ok(Self::External(other.to_owned())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Local => LOCAL_PROVIDER,
            Self::External(name) => name,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Provider {
    type Error = AccountError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Provider> for String {
    fn from(p: Provider) -> Self {
        match p {
            Provider::Local => LOCAL_PROVIDER.to_owned(),
            Provider::External(name) => name,
        }
    }
}

/// Status a suspended account returns to when reinstated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReinstatePolicy {
    /// The account must prove control of its email again.
    #[default]
    Pending,
    Verified,
}

impl ReinstatePolicy {
    pub fn target(self) -> AccountStatus {
        match self {
            Self::Pending => AccountStatus::Pending,
            Self::Verified => AccountStatus::Verified,
        }
    }
}

impl FromStr for ReinstatePolicy {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            _ => Err(AccountError::InvalidInput(
                "reinstate status must be pending or verified",
            )),
        }
    }
}

/// Construction arguments for [`Account::new`].
#[derive(Debug, Clone, Default)]
pub struct NewAccount {
    pub email: String,
    pub provider: Provider,
    pub provider_id: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub verification_token: Option<String>,
}

impl NewAccount {
    pub fn local(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: Some(password_hash.into()),
            ..Default::default()
        }
    }

    pub fn external(
        email: impl Into<String>,
        provider: Provider,
        provider_id: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            provider,
            provider_id: Some(provider_id.into()),
            ..Default::default()
        }
    }
}

/// One registered identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub status: AccountStatus,
    pub verification_token: Option<String>,
    pub provider: Provider,
    pub provider_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Build a new `pending` account stamped with the current time.
    pub fn new(input: NewAccount) -> Result<Self, AccountError> {
        Self::new_at(input, Utc::now())
    }

    /// Build a new `pending` account with `created_at = updated_at = now`.
    ///
    /// Empty strings in optional fields count as absent. The provider is
    /// normalised through [`Provider::parse`]. Local accounts need a password
    /// hash; external accounts need a provider id.
    pub fn new_at(input: NewAccount, now: DateTime<Utc>) -> Result<Self, AccountError> {
        if input.email.trim().is_empty() {
            return Err(AccountError::InvalidInput("email must not be empty"));
        }
        let provider = Provider::parse(input.provider.as_str())?;
        let password_hash = present(input.password_hash);
        let provider_id = present(input.provider_id);
        match provider {
            Provider::Local if password_hash.is_none() => {
                return Err(AccountError::InvalidInput(
                    "local accounts require a password hash",
                ));
            }
            Provider::External(_) if provider_id.is_none() => {
                return Err(AccountError::InvalidInput(
                    "external accounts require a provider id",
                ));
            }
            _ => {}
        }
        Ok(Self {
            id: AccountId::generate(),
            email: input.email,
            password_hash,
            first_name: present(input.first_name),
            last_name: present(input.last_name),
            status: AccountStatus::Pending,
            verification_token: present(input.verification_token),
            provider,
            provider_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// `pending → verified`.
    pub fn mark_verified(&mut self) -> Result<(), AccountError> {
        self.transition(AccountStatus::Verified, |from| from == AccountStatus::Pending)
    }

    /// Any status → `suspended`. Suspending twice only refreshes `updated_at`.
    pub fn suspend(&mut self) {
        self.status = AccountStatus::Suspended;
        self.touch();
    }

    /// `suspended → policy.target()`.
    pub fn reinstate(&mut self, policy: ReinstatePolicy) -> Result<(), AccountError> {
        self.transition(policy.target(), |from| from == AccountStatus::Suspended)
    }

    /// Replace the verification token. A token only drives `pending → verified`,
    /// so other statuses report that transition as refused.
    pub fn set_verification_token(&mut self, token: String) -> Result<(), AccountError> {
        if token.trim().is_empty() {
            return Err(AccountError::InvalidInput(
                "verification token must not be empty",
            ));
        }
        if self.status != AccountStatus::Pending {
            return Err(AccountError::InvalidTransition {
                from: self.status,
                to: AccountStatus::Verified,
            });
        }
        self.verification_token = Some(token);
        self.touch();
        Ok(())
    }

    /// Drop the verification token, returning the previous value.
    pub fn clear_verification_token(&mut self) -> Option<String> {
        let previous = self.verification_token.take();
        self.touch();
        previous
    }

    /// Replace the given display names. `None` keeps the current value; an
    /// empty string clears it.
    pub fn update_profile(&mut self, first_name: Option<String>, last_name: Option<String>) {
        if let Some(name) = first_name {
            self.first_name = present(Some(name));
        }
        if let Some(name) = last_name {
            self.last_name = present(Some(name));
        }
        self.touch();
    }

    fn transition(
        &mut self,
        to: AccountStatus,
        allowed: impl FnOnce(AccountStatus) -> bool,
    ) -> Result<(), AccountError> {
        if !allowed(self.status) {
            return Err(AccountError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        self.touch();
        Ok(())
    }

    // never moves backwards, even if the wall clock does
    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
