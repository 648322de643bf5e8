use perkstack_api::error::ApiError;
use perkstack_api::usecase::auth::{
    GetMeUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use perkstack_auth_types::token::validate_access_token;
use perkstack_domain::id::UserId;
use perkstack_domain::user::UserRole;
use perkstack_testing::auth::TEST_JWT_SECRET;

use crate::helpers::{FakePasswords, MockUserRepo, test_user};

fn register_usecase(users: MockUserRepo) -> RegisterUseCase<MockUserRepo, FakePasswords> {
    RegisterUseCase {
        users,
        passwords: FakePasswords,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

fn login_usecase(users: MockUserRepo) -> LoginUseCase<MockUserRepo, FakePasswords> {
    LoginUseCase {
        users,
        passwords: FakePasswords,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

fn registration(email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        name: "Grace".to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// ── Register ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_user_and_issue_token() {
    let repo = MockUserRepo::empty();
    let users = repo.users_handle();
    let uc = register_usecase(repo);

    let session = uc
        .execute(registration(" Grace@Startup.IO ", "long-enough"))
        .await
        .unwrap();

    assert_eq!(session.user.email, "grace@startup.io");
    assert_eq!(session.user.role, UserRole::User);
    assert_ne!(session.user.password_hash, "long-enough");

    let info = validate_access_token(&session.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, session.user.id);
    assert_eq!(info.role, UserRole::User);
    assert_eq!(info.access_token_exp, session.token_exp);

    assert_eq!(users.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_email_regardless_of_case() {
    let existing = test_user();
    let uc = register_usecase(MockUserRepo::new(vec![existing.clone()]));

    let result = uc
        .execute(registration(&existing.email.to_uppercase(), "long-enough"))
        .await;

    assert!(
        matches!(result, Err(ApiError::EmailAlreadyExists)),
        "expected EmailAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_short_password_without_creating_user() {
    let repo = MockUserRepo::empty();
    let users = repo.users_handle();
    let uc = register_usecase(repo);

    let result = uc.execute(registration("grace@startup.io", "short")).await;

    assert!(
        matches!(result, Err(ApiError::InvalidInput(_))),
        "expected InvalidInput, got {result:?}"
    );
    assert!(users.lock().unwrap().is_empty());
}

// ── Login ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_with_correct_password() {
    let user = test_user();
    let uc = login_usecase(MockUserRepo::new(vec![user.clone()]));

    let session = uc
        .execute(LoginInput {
            email: user.email.to_uppercase(),
            password: "correct-horse".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(session.user.id, user.id);
    let info = validate_access_token(&session.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
}

#[tokio::test]
async fn should_reject_wrong_password_and_unknown_email_alike() {
    let user = test_user();
    let uc = login_usecase(MockUserRepo::new(vec![user.clone()]));

    let wrong_password = uc
        .execute(LoginInput {
            email: user.email.clone(),
            password: "battery-staple".to_owned(),
        })
        .await;
    let unknown_email = uc
        .execute(LoginInput {
            email: "nobody@startup.io".to_owned(),
            password: "correct-horse".to_owned(),
        })
        .await;

    assert!(matches!(wrong_password, Err(ApiError::InvalidCredentials)));
    assert!(matches!(unknown_email, Err(ApiError::InvalidCredentials)));
}

// ── GetMe ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_current_user() {
    let user = test_user();
    let uc = GetMeUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
    };
    let me = uc.execute(user.id).await.unwrap();
    assert_eq!(me.email, user.email);
}

#[tokio::test]
async fn should_return_user_not_found_for_deleted_subject() {
    let uc = GetMeUseCase {
        users: MockUserRepo::empty(),
    };
    let result = uc.execute(UserId::new()).await;
    assert!(
        matches!(result, Err(ApiError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}
