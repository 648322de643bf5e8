use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use perkstack_core::health::{healthz, readyz};
use perkstack_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    auth::{login, me, register},
    claim::{claim_deal, list_my_claims},
    deal::{get_deal, list_categories, list_deals, seed_catalog},
};
use crate::state::AppState;

fn api_routes() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        // Deals
        .route("/deals", get(list_deals))
        .route("/deals/categories", get(list_categories))
        .route("/deals/seed", post(seed_catalog))
        .route("/deals/{id}", get(get_deal))
        // Claims
        .route("/deals/{id}/claim", post(claim_deal))
        .route("/deals/user/claims", get(list_my_claims))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes())
        // Top to bottom is outermost to innermost. `Cors` needs a `Default`
        // response body, so it must sit inside `TraceLayer`.
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
