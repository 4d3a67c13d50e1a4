use tessera_accounts::error::AccountsServiceError;
use tessera_accounts::usecase::registration::{RegisterAccountInput, RegisterAccountUseCase};
use tessera_domain::account::{AccountStatus, Provider};

use crate::helpers::{MockAccountRepo, pending_account, test_account};

fn local_input(email: &str) -> RegisterAccountInput {
    RegisterAccountInput {
        email: email.to_owned(),
        provider: None,
        provider_id: None,
        password_hash: Some("$argon2id$hash".to_owned()),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        verification_token: Some("verify-me".to_owned()),
    }
}

// ── RegisterAccountUseCase ───────────────────────────────────────────────────

#[tokio::test]
async fn should_register_local_account_as_pending() {
    let repo = MockAccountRepo::empty();
    let accounts = repo.accounts_handle();
    let usecase = RegisterAccountUseCase { repo };

    let account = usecase.execute(local_input("ada@example.com")).await.unwrap();

    assert_eq!(account.status, AccountStatus::Pending);
    assert_eq!(account.provider, Provider::Local);
    assert_eq!(account.verification_token.as_deref(), Some("verify-me"));
    assert_eq!(account.created_at, account.updated_at);

    let stored = accounts.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], account);
}

#[tokio::test]
async fn should_register_external_account_without_password() {
    let usecase = RegisterAccountUseCase {
        repo: MockAccountRepo::empty(),
    };

    let account = usecase
        .execute(RegisterAccountInput {
            provider: Some("github".to_owned()),
            provider_id: Some("gh-1234".to_owned()),
            password_hash: None,
            verification_token: None,
            ..local_input("octo@example.com")
        })
        .await
        .unwrap();

    assert_eq!(account.provider, Provider::External("github".to_owned()));
    assert_eq!(account.provider_id.as_deref(), Some("gh-1234"));
    assert!(account.password_hash.is_none());
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let usecase = RegisterAccountUseCase {
        repo: MockAccountRepo::new(vec![test_account("ada@example.com")]),
    };

    let result = usecase.execute(local_input("ada@example.com")).await;
    assert!(
        matches!(result, Err(AccountsServiceError::DuplicateEmail)),
        "expected DuplicateEmail, got {result:?}"
    );
    assert_eq!(usecase.repo.accounts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_verification_token() {
    let usecase = RegisterAccountUseCase {
        repo: MockAccountRepo::new(vec![pending_account("first@example.com", "verify-me")]),
    };

    let result = usecase.execute(local_input("second@example.com")).await;
    assert!(
        matches!(result, Err(AccountsServiceError::DuplicateToken)),
        "expected DuplicateToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_local_account_without_password_hash() {
    let usecase = RegisterAccountUseCase {
        repo: MockAccountRepo::empty(),
    };

    let result = usecase
        .execute(RegisterAccountInput {
            password_hash: Some("  ".to_owned()),
            ..local_input("ada@example.com")
        })
        .await;
    assert!(
        matches!(result, Err(AccountsServiceError::InvalidInput(_))),
        "expected InvalidInput, got {result:?}"
    );
    assert!(usecase.repo.accounts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_external_account_without_provider_id() {
    let usecase = RegisterAccountUseCase {
        repo: MockAccountRepo::empty(),
    };

    let result = usecase
        .execute(RegisterAccountInput {
            provider: Some("google".to_owned()),
            provider_id: None,
            ..local_input("ada@example.com")
        })
        .await;
    assert!(matches!(result, Err(AccountsServiceError::InvalidInput(_))));
}

#[tokio::test]
async fn should_reject_blank_email() {
    let usecase = RegisterAccountUseCase {
        repo: MockAccountRepo::empty(),
    };

    let result = usecase.execute(local_input("")).await;
    assert!(matches!(result, Err(AccountsServiceError::InvalidInput(_))));
}

#[tokio::test]
async fn should_assign_distinct_ids() {
    let usecase = RegisterAccountUseCase {
        repo: MockAccountRepo::empty(),
    };

    let first = usecase
        .execute(RegisterAccountInput {
            verification_token: None,
            ..local_input("a@example.com")
        })
        .await
        .unwrap();
    let second = usecase
        .execute(RegisterAccountInput {
            verification_token: None,
            ..local_input("b@example.com")
        })
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn should_require_password_hash_when_provider_names_local() {
    let usecase = RegisterAccountUseCase {
        repo: MockAccountRepo::empty(),
    };

    let result = usecase
        .execute(RegisterAccountInput {
            provider: Some(" local ".to_owned()),
            provider_id: Some("x".to_owned()),
            password_hash: None,
            ..local_input("ada@example.com")
        })
        .await;
    assert!(
        matches!(result, Err(AccountsServiceError::InvalidInput(_))),
        "expected InvalidInput, got {result:?}"
    );
    assert!(usecase.repo.accounts.lock().unwrap().is_empty());
}
