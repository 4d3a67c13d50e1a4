//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;

use tessera_domain::id::AccountId;
use tessera_domain::role::Role;

pub const X_TESSERA_USER_ID: &str = "x-tessera-user-id";
pub const X_TESSERA_USER_ROLE: &str = "x-tessera-user-role";

/// Caller identity injected by the gateway via `x-tessera-user-id` and `x-tessera-user-role`.
///
/// Returns 401 if either header is absent, the id is not a UUID, or the role
/// is not a known wire value. Role enforcement (403) is done by handlers.
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub account_id: AccountId,
    pub role: Role,
}

impl IdentityHeaders {
    pub fn has_role(&self, min: Role) -> bool {
        self.role >= min
    }
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // Headers are read up front; the returned future owns the results.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let account_id = parts
            .headers
            .get(X_TESSERA_USER_ID)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<AccountId>().ok());

        let role = parts
            .headers
            .get(X_TESSERA_USER_ROLE)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u8>().ok())
            .and_then(Role::from_u8);

        async move {
            let account_id = account_id.ok_or(StatusCode::UNAUTHORIZED)?;
            let role = role.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { account_id, role })
        }
    }
}
