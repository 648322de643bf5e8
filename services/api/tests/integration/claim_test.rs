use std::sync::Arc;

use perkstack_api::error::ApiError;
use perkstack_api::usecase::claim::{ClaimDealUseCase, ListClaimsUseCase};
use perkstack_domain::claim::{CLAIM_CODE_PREFIX, CLAIM_CODE_SUFFIX_LEN, ClaimStatus};
use perkstack_domain::id::{DealId, UserId};

use crate::helpers::{MockClaimRepo, MockDealRepo, test_deal};

fn claim_usecase(deals: &MockDealRepo) -> ClaimDealUseCase<MockDealRepo, MockClaimRepo> {
    ClaimDealUseCase {
        deals: deals.clone(),
        claims: MockClaimRepo::new(deals.clone()),
    }
}

#[tokio::test]
async fn should_create_approved_claim_with_code() {
    let deal = test_deal("Notion", "Productivity", false);
    let deals = MockDealRepo::new(vec![deal.clone()]);
    let uc = claim_usecase(&deals);
    let stored = uc.claims.claims_handle();
    let user_id = UserId::new();

    let claim = uc.execute(user_id, deal.id).await.unwrap();

    assert_eq!(claim.user_id, user_id);
    assert_eq!(claim.deal_id, deal.id);
    assert_eq!(claim.status, ClaimStatus::Approved);
    let suffix = claim
        .code
        .as_str()
        .strip_prefix(CLAIM_CODE_PREFIX)
        .expect("code carries the CLAIM- prefix");
    assert_eq!(suffix.len(), CLAIM_CODE_SUFFIX_LEN);
    assert!(
        suffix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );

    let stored = stored.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].0.id, claim.id);
    assert_eq!(stored[0].1, None, "unlocked deal must not carry a lock scope");
}

#[tokio::test]
async fn should_reject_second_claim_on_locked_deal() {
    let deal = test_deal("AWS", "Cloud", true);
    let deals = MockDealRepo::new(vec![deal.clone()]);
    let uc = claim_usecase(&deals);
    let stored = uc.claims.claims_handle();
    let user_id = UserId::new();

    uc.execute(user_id, deal.id).await.unwrap();
    let second = uc.execute(user_id, deal.id).await;

    assert!(
        matches!(second, Err(ApiError::AlreadyClaimed)),
        "expected AlreadyClaimed, got {second:?}"
    );
    let stored = stored.lock().unwrap();
    assert_eq!(stored.len(), 1, "no second record for a locked deal");
    assert_eq!(stored[0].1, Some(deal.id));
}

#[tokio::test]
async fn should_let_other_users_claim_same_locked_deal() {
    let deal = test_deal("Stripe", "Finance", true);
    let deals = MockDealRepo::new(vec![deal.clone()]);
    let uc = claim_usecase(&deals);

    uc.execute(UserId::new(), deal.id).await.unwrap();
    uc.execute(UserId::new(), deal.id).await.unwrap();

    assert_eq!(uc.claims.claims_handle().lock().unwrap().len(), 2);
}

#[tokio::test]
async fn should_allow_repeated_claims_on_unlocked_deal() {
    let deal = test_deal("Miro", "Productivity", false);
    let deals = MockDealRepo::new(vec![deal.clone()]);
    let uc = claim_usecase(&deals);
    let user_id = UserId::new();

    let first = uc.execute(user_id, deal.id).await.unwrap();
    let second = uc.execute(user_id, deal.id).await.unwrap();
    let third = uc.execute(user_id, deal.id).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(second.id, third.id);
    assert_eq!(uc.claims.claims_handle().lock().unwrap().len(), 3);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_deal() {
    let deals = MockDealRepo::new(vec![test_deal("Linear", "Productivity", false)]);
    let uc = claim_usecase(&deals);

    let result = uc.execute(UserId::new(), DealId::new()).await;

    assert!(
        matches!(result, Err(ApiError::DealNotFound)),
        "expected DealNotFound, got {result:?}"
    );
    assert!(uc.claims.claims_handle().lock().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn should_accept_exactly_one_of_concurrent_locked_claims() {
    let deal = test_deal("OpenAI", "AI", true);
    let deals = MockDealRepo::new(vec![deal.clone()]);
    let uc = Arc::new(claim_usecase(&deals));
    let user_id = UserId::new();
    let deal_id = deal.id;

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let uc = Arc::clone(&uc);
            tokio::spawn(async move { uc.execute(user_id, deal_id).await })
        })
        .collect();

    let mut succeeded = 0;
    let mut rejected = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => succeeded += 1,
            Err(ApiError::AlreadyClaimed) => rejected += 1,
            Err(e) => panic!("unexpected error: {e:?}"),
        }
    }

    assert_eq!(succeeded, 1);
    assert_eq!(rejected, 7);
    assert_eq!(uc.claims.claims_handle().lock().unwrap().len(), 1);
}

// ── ListClaims ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_empty_list_for_user_without_claims() {
    let deals = MockDealRepo::empty();
    let uc = ListClaimsUseCase {
        claims: MockClaimRepo::new(deals),
    };

    let claims = uc.execute(UserId::new()).await.unwrap();
    assert!(claims.is_empty());
}

#[tokio::test]
async fn should_list_only_own_claims_with_deal_in_order() {
    let locked = test_deal("HubSpot", "Marketing", true);
    let unlocked = test_deal("Typeform", "Marketing", false);
    let deals = MockDealRepo::new(vec![locked.clone(), unlocked.clone()]);
    let claim_uc = claim_usecase(&deals);
    let me = UserId::new();

    let first = claim_uc.execute(me, locked.id).await.unwrap();
    claim_uc.execute(UserId::new(), unlocked.id).await.unwrap();
    let second = claim_uc.execute(me, unlocked.id).await.unwrap();

    let list_uc = ListClaimsUseCase {
        claims: claim_uc.claims.clone(),
    };
    let claims = list_uc.execute(me).await.unwrap();

    assert_eq!(claims.len(), 2);
    assert_eq!(claims[0].claim.id, first.id);
    assert_eq!(claims[1].claim.id, second.id);
    let deal = claims[0].deal.as_ref().expect("deal is embedded");
    assert_eq!(deal.id, locked.id);
    assert_eq!(deal.title, "HubSpot");
}
