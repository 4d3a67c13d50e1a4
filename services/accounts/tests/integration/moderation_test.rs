use tessera_accounts::error::AccountsServiceError;
use tessera_accounts::usecase::moderation::{ReinstateAccountUseCase, SuspendAccountUseCase};
use tessera_domain::account::{AccountStatus, ReinstatePolicy};
use tessera_domain::id::AccountId;

use crate::helpers::{MockAccountRepo, pending_account, suspended_account, test_account};

// ── SuspendAccountUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_suspend_pending_account() {
    let account = test_account("ada@example.com");
    let repo = MockAccountRepo::new(vec![account.clone()]);
    let usecase = SuspendAccountUseCase { repo: repo.clone() };

    let suspended = usecase.execute(account.id).await.unwrap();

    assert_eq!(suspended.status, AccountStatus::Suspended);
    assert!(suspended.updated_at >= account.updated_at);
    assert_eq!(
        repo.stored(account.id).unwrap().status,
        AccountStatus::Suspended
    );
}

#[tokio::test]
async fn should_suspend_verified_account() {
    let mut account = test_account("ada@example.com");
    account.mark_verified().unwrap();
    let usecase = SuspendAccountUseCase {
        repo: MockAccountRepo::new(vec![account.clone()]),
    };

    let suspended = usecase.execute(account.id).await.unwrap();
    assert_eq!(suspended.status, AccountStatus::Suspended);
}

#[tokio::test]
async fn should_keep_suspended_account_suspended() {
    let account = suspended_account("ada@example.com");
    let usecase = SuspendAccountUseCase {
        repo: MockAccountRepo::new(vec![account.clone()]),
    };

    let again = usecase.execute(account.id).await.unwrap();
    assert_eq!(again.status, AccountStatus::Suspended);
}

#[tokio::test]
async fn should_keep_verification_token_when_suspending() {
    let account = pending_account("ada@example.com", "verify-me");
    let usecase = SuspendAccountUseCase {
        repo: MockAccountRepo::new(vec![account.clone()]),
    };

    let suspended = usecase.execute(account.id).await.unwrap();
    assert_eq!(suspended.verification_token.as_deref(), Some("verify-me"));
}

#[tokio::test]
async fn should_reject_suspending_unknown_account() {
    let usecase = SuspendAccountUseCase {
        repo: MockAccountRepo::empty(),
    };

    let result = usecase.execute(AccountId::generate()).await;
    assert!(matches!(result, Err(AccountsServiceError::AccountNotFound)));
}

// ── ReinstateAccountUseCase ──────────────────────────────────────────────────

#[tokio::test]
async fn should_reinstate_to_pending_by_default() {
    let account = suspended_account("ada@example.com");
    let repo = MockAccountRepo::new(vec![account.clone()]);
    let usecase = ReinstateAccountUseCase {
        repo: repo.clone(),
        policy: ReinstatePolicy::default(),
    };

    let reinstated = usecase.execute(account.id).await.unwrap();

    assert_eq!(reinstated.status, AccountStatus::Pending);
    assert_eq!(
        repo.stored(account.id).unwrap().status,
        AccountStatus::Pending
    );
}

#[tokio::test]
async fn should_reinstate_to_verified_when_configured() {
    let account = suspended_account("ada@example.com");
    let usecase = ReinstateAccountUseCase {
        repo: MockAccountRepo::new(vec![account.clone()]),
        policy: ReinstatePolicy::Verified,
    };

    let reinstated = usecase.execute(account.id).await.unwrap();
    assert_eq!(reinstated.status, AccountStatus::Verified);
}

#[tokio::test]
async fn should_reject_reinstating_active_account() {
    let account = test_account("ada@example.com");
    let repo = MockAccountRepo::new(vec![account.clone()]);
    let usecase = ReinstateAccountUseCase {
        repo: repo.clone(),
        policy: ReinstatePolicy::Pending,
    };

    let result = usecase.execute(account.id).await;
    assert!(
        matches!(
            result,
            Err(AccountsServiceError::InvalidTransition {
                from: AccountStatus::Pending,
                ..
            })
        ),
        "expected InvalidTransition, got {result:?}"
    );
    assert_eq!(repo.stored(account.id).unwrap(), account);
}

#[tokio::test]
async fn should_reject_reinstating_unknown_account() {
    let usecase = ReinstateAccountUseCase {
        repo: MockAccountRepo::empty(),
        policy: ReinstatePolicy::Pending,
    };

    let result = usecase.execute(AccountId::generate()).await;
    assert!(matches!(result, Err(AccountsServiceError::AccountNotFound)));
}
