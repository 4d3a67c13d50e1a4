//! Endpoints called by the upstream auth service (`Service` role only).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use tessera_auth_types::identity::IdentityHeaders;
use tessera_domain::id::AccountId;
use tessera_domain::role::Role;

use crate::error::AccountsServiceError;
use crate::handlers::AccountResponse;
use crate::state::AppState;
use crate::usecase::account::FindAccountByEmailUseCase;
use crate::usecase::registration::{RegisterAccountInput, RegisterAccountUseCase};
use crate::usecase::verification::{ConfirmVerificationUseCase, IssueVerificationTokenUseCase};

fn require_service(identity: &IdentityHeaders) -> Result<(), AccountsServiceError> {
    if identity.has_role(Role::Service) {
        Ok(())
    } else {
        Err(AccountsServiceError::Forbidden)
    }
}

// ── POST /api/v1/auth/register ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub provider: Option<String>,
    pub provider_id: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub verification_token: Option<String>,
}

pub async fn register(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AccountsServiceError> {
    require_service(&identity)?;
    let usecase = RegisterAccountUseCase {
        repo: state.account_repo(),
    };
    let account = usecase
        .execute(RegisterAccountInput {
            email: body.email,
            provider: body.provider,
            provider_id: body.provider_id,
            password_hash: body.password_hash,
            first_name: body.first_name,
            last_name: body.last_name,
            verification_token: body.verification_token,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(account.into())))
}

// ── GET /api/v1/auth/accounts?email= ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct LookupQuery {
    pub email: String,
}

/// Account view for credential checks; includes the stored password hash.
#[derive(Serialize)]
pub struct CredentialResponse {
    #[serde(flatten)]
    pub account: AccountResponse,
    pub password_hash: Option<String>,
}

pub async fn lookup_account(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<CredentialResponse>, AccountsServiceError> {
    require_service(&identity)?;
    let usecase = FindAccountByEmailUseCase {
        repo: state.account_repo(),
    };
    let mut account = usecase.execute(&query.email).await?;
    let password_hash = account.password_hash.take();
    Ok(Json(CredentialResponse {
        account: account.into(),
        password_hash,
    }))
}

// ── PUT /api/v1/auth/accounts/{id}/verification-token ────────────────────────

#[derive(Deserialize)]
pub struct VerificationTokenRequest {
    pub token: String,
}

pub async fn issue_verification_token(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
    Json(body): Json<VerificationTokenRequest>,
) -> Result<StatusCode, AccountsServiceError> {
    require_service(&identity)?;
    let usecase = IssueVerificationTokenUseCase {
        repo: state.account_repo(),
    };
    usecase.execute(id, body.token).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /api/v1/auth/verify ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyRequest {
    pub token: String,
}

pub async fn verify(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<VerifyRequest>,
) -> Result<Json<AccountResponse>, AccountsServiceError> {
    require_service(&identity)?;
    let usecase = ConfirmVerificationUseCase {
        repo: state.account_repo(),
    };
    let account = usecase.execute(&body.token).await?;
    Ok(Json(account.into()))
}
