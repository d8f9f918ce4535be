//! HTTP routes for scoring endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_scoring_result, score_submission, ScoringAppState};

/// Creates the scoring router with all routes.
pub fn scoring_routes(state: ScoringAppState) -> Router {
    Router::new()
        .route(
            "/api/organizations/:org_id/tests/:test_id/takers/:taker_id/score",
            post(score_submission),
        )
        .route(
            "/api/organizations/:org_id/tests/:test_id/takers/:taker_id/result",
            get(get_scoring_result),
        )
        .with_state(state)
}
