use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use tessera_auth_types::identity::IdentityHeaders;
use tessera_domain::id::AccountId;
use tessera_domain::role::Role;

use crate::error::AccountsServiceError;
use crate::handlers::AccountResponse;
use crate::state::AppState;
use crate::usecase::account::{GetAccountUseCase, UpdateProfileInput, UpdateProfileUseCase};
use crate::usecase::moderation::{ReinstateAccountUseCase, SuspendAccountUseCase};

fn require_admin(identity: &IdentityHeaders) -> Result<(), AccountsServiceError> {
    if identity.has_role(Role::Admin) {
        Ok(())
    } else {
        Err(AccountsServiceError::Forbidden)
    }
}

// ── GET /api/v1/users/@me ────────────────────────────────────────────────────

pub async fn get_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<AccountResponse>, AccountsServiceError> {
    let usecase = GetAccountUseCase {
        repo: state.account_repo(),
    };
    let account = usecase.execute(identity.account_id).await?;
    Ok(Json(account.into()))
}

// ── PATCH /api/v1/users/@me ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateMeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub async fn update_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<UpdateMeRequest>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = UpdateProfileUseCase {
        repo: state.account_repo(),
    };
    usecase
        .execute(
            identity.account_id,
            UpdateProfileInput {
                first_name: body.first_name,
                last_name: body.last_name,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /api/v1/users/{id} ───────────────────────────────────────────────────

pub async fn get_account(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> Result<Json<AccountResponse>, AccountsServiceError> {
    if identity.account_id != id {
        require_admin(&identity)?;
    }
    let usecase = GetAccountUseCase {
        repo: state.account_repo(),
    };
    let account = usecase.execute(id).await?;
    Ok(Json(account.into()))
}

// ── POST /api/v1/users/{id}/suspend ──────────────────────────────────────────

pub async fn suspend_account(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> Result<Json<AccountResponse>, AccountsServiceError> {
    require_admin(&identity)?;
    let usecase = SuspendAccountUseCase {
        repo: state.account_repo(),
    };
    let account = usecase.execute(id).await?;
    Ok(Json(account.into()))
}

// ── POST /api/v1/users/{id}/reinstate ────────────────────────────────────────

pub async fn reinstate_account(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> Result<Json<AccountResponse>, AccountsServiceError> {
    require_admin(&identity)?;
    let usecase = ReinstateAccountUseCase {
        repo: state.account_repo(),
        policy: state.reinstate_policy,
    };
    let account = usecase.execute(id).await?;
    Ok(Json(account.into()))
}
