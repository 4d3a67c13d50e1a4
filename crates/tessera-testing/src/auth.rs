//! Mock caller identity for integration tests.
//!
//! Services behind the gateway receive `x-tessera-user-id` + `x-tessera-user-role`
//! headers. Tests build them with [`MockAuth`] so no real gateway is needed.

use http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use tessera_auth_types::identity::{X_TESSERA_USER_ID, X_TESSERA_USER_ROLE};
use tessera_domain::id::AccountId;
use tessera_domain::role::Role;

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub account_id: AccountId,
    pub role: Role,
}

impl MockAuth {
    pub fn new(account_id: AccountId, role: Role) -> Self {
        Self { account_id, role }
    }

    pub fn member(account_id: AccountId) -> Self {
        Self::new(account_id, Role::Member)
    }

    pub fn admin() -> Self {
        Self::new(AccountId(Uuid::new_v4()), Role::Admin)
    }

    /// The upstream auth service.
    pub fn service() -> Self {
        Self::new(AccountId(Uuid::nil()), Role::Service)
    }

    /// Header name/value pairs as the gateway would inject them.
    pub fn header_pairs(&self) -> [(HeaderName, HeaderValue); 2] {
        [
            (
                HeaderName::from_static(X_TESSERA_USER_ID),
                HeaderValue::from_str(&self.account_id.to_string()).unwrap(),
            ),
            (
                HeaderName::from_static(X_TESSERA_USER_ROLE),
                HeaderValue::from(u16::from(self.role.as_u8())),
            ),
        ]
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        self.header_pairs().into_iter().collect()
    }
}
