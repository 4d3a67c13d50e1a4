use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tessera_domain::account::{AccountError, AccountStatus};

/// Accounts service error variants.
#[derive(Debug, thiserror::Error)]
pub enum AccountsServiceError {
    #[error("account not found")]
    AccountNotFound,
    #[error("email already registered")]
    DuplicateEmail,
    #[error("verification token already in use")]
    DuplicateToken,
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition {
        from: AccountStatus,
        to: AccountStatus,
    },
    #[error("invalid verification token")]
    InvalidVerificationToken,
    #[error("missing data")]
    MissingData,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccountsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::DuplicateToken => "DUPLICATE_TOKEN",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::InvalidVerificationToken => "INVALID_VERIFICATION_TOKEN",
            Self::MissingData => "MISSING_DATA",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<AccountError> for AccountsServiceError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidInput(reason) => Self::InvalidInput(reason),
            AccountError::InvalidTransition { from, to } => Self::InvalidTransition { from, to },
        }
    }
}

impl IntoResponse for AccountsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::AccountNotFound => StatusCode::NOT_FOUND,
            Self::DuplicateEmail | Self::DuplicateToken | Self::InvalidTransition { .. } => {
                StatusCode::CONFLICT
            }
            Self::InvalidInput(_) | Self::InvalidVerificationToken | Self::MissingData => {
                StatusCode::BAD_REQUEST
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are already visible in the TraceLayer span; only 500s carry a chain worth logging.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
