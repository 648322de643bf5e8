use std::sync::Arc;

use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, Statement, Value};
use uuid::Uuid;

use perkstack_api::domain::repository::ClaimRepository;
use perkstack_api::domain::types::Claim;
use perkstack_api::error::ApiError;
use perkstack_api::infra::db::DbClaimRepository;
use perkstack_api_schema::claims;
use perkstack_domain::claim::{ClaimCode, ClaimStatus};
use perkstack_domain::id::{ClaimId, DealId, UserId};

fn new_claim(user_id: UserId, deal_id: DealId) -> Claim {
    let now = Utc::now();
    Claim {
        id: ClaimId::new(),
        user_id,
        deal_id,
        status: ClaimStatus::Approved,
        code: ClaimCode::from_suffix("ABC123XYZ").unwrap(),
        created_at: now,
        updated_at: now,
    }
}

fn stored_row(claim: &Claim, lock_scope: Option<DealId>) -> claims::Model {
    claims::Model {
        id: claim.id.0,
        user_id: claim.user_id.0,
        deal_id: claim.deal_id.0,
        status: claim.status.as_str().to_owned(),
        claim_code: claim.code.as_str().to_owned(),
        lock_scope: lock_scope.map(|d| d.0),
        created_at: claim.created_at,
        updated_at: claim.updated_at,
    }
}

fn into_log(repo: DbClaimRepository) -> Vec<Statement> {
    let db: DatabaseConnection = Arc::try_unwrap(repo.db)
        .ok()
        .expect("repository is the only connection holder");
    db.into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().to_vec())
        .collect()
}

/// Value bound to `column` in an `INSERT INTO t (a, b, ..) VALUES ($1, $2, ..)`.
fn bound_value(stmt: &Statement, column: &str) -> Value {
    let columns = stmt
        .sql
        .split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(cols, _)| cols)
        .unwrap();
    let position = columns
        .split(',')
        .position(|c| c.trim().trim_matches('"') == column)
        .unwrap_or_else(|| panic!("{column} not in {}", stmt.sql));
    stmt.values.as_ref().unwrap().0[position].clone()
}

#[tokio::test]
async fn should_bind_lock_scope_to_deal_for_locked_claim() {
    let user_id = UserId::new();
    let deal_id = DealId::new();
    let claim = new_claim(user_id, deal_id);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_row(&claim, Some(deal_id))]])
        .into_connection();
    let repo = DbClaimRepository { db: Arc::new(db) };

    let inserted = repo.insert(&claim, Some(deal_id)).await.unwrap();

    assert!(inserted);
    let log = into_log(repo);
    assert_eq!(log.len(), 1);
    assert!(log[0].sql.starts_with(r#"INSERT INTO "claims""#));
    assert_eq!(bound_value(&log[0], "lock_scope"), Value::from(deal_id.0));
    assert_eq!(bound_value(&log[0], "user_id"), Value::from(user_id.0));
}

#[tokio::test]
async fn should_bind_null_lock_scope_for_unlocked_claim() {
    let claim = new_claim(UserId::new(), DealId::new());
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_row(&claim, None)]])
        .into_connection();
    let repo = DbClaimRepository { db: Arc::new(db) };

    let inserted = repo.insert(&claim, None).await.unwrap();

    assert!(inserted);
    let log = into_log(repo);
    assert_eq!(log.len(), 1);
    assert_eq!(bound_value(&log[0], "lock_scope"), Value::from(None::<Uuid>));
}

#[tokio::test]
async fn should_report_storage_failure_as_internal() {
    let claim = new_claim(UserId::new(), DealId::new());
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection reset".to_owned())])
        .into_connection();
    let repo = DbClaimRepository { db: Arc::new(db) };

    let err = repo.insert(&claim, None).await.unwrap_err();

    assert!(matches!(err, ApiError::Internal(_)));
    assert_eq!(err.kind(), "INTERNAL");
}
