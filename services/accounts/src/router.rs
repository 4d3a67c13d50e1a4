use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use tessera_core::health::{health, healthz, readyz};
use tessera_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    auth::{issue_verification_token, lookup_account, register, verify},
    index,
    users::{get_account, get_me, reinstate_account, suspend_account, update_me},
};
use crate::state::AppState;

pub const API_PREFIX: &str = "/api/v1";

pub fn build_router(state: AppState) -> Router {
    let auth = Router::new()
        .route("/register", post(register))
        .route("/accounts", get(lookup_account))
        .route(
            "/accounts/{id}/verification-token",
            put(issue_verification_token),
        )
        .route("/verify", post(verify));

    let users = Router::new()
        .route("/@me", get(get_me).patch(update_me))
        .route("/{id}", get(get_account))
        .route("/{id}/suspend", post(suspend_account))
        .route("/{id}/reinstate", post(reinstate_account));

    Router::new()
        .route("/", get(index))
        // Health
        .route("/health", get(health))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest(&format!("{API_PREFIX}/auth"), auth)
        .nest(&format!("{API_PREFIX}/users"), users)
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
