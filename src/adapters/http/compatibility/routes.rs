//! HTTP routes for compatibility endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    build_ad_hoc_matrix, get_team_compatibility, list_pair_scores, set_pair_score,
    CompatibilityAppState,
};

/// Creates the compatibility router with all routes.
pub fn compatibility_routes(state: CompatibilityAppState) -> Router {
    Router::new()
        // GET + PUT /api/organizations/:org_id/compatibility/pairs
        .route(
            "/api/organizations/:org_id/compatibility/pairs",
            get(list_pair_scores).put(set_pair_score),
        )
        // POST /api/organizations/:org_id/compatibility/matrix
        .route(
            "/api/organizations/:org_id/compatibility/matrix",
            post(build_ad_hoc_matrix),
        )
        // GET /api/organizations/:org_id/teams/:team_id/compatibility
        .route(
            "/api/organizations/:org_id/teams/:team_id/compatibility",
            get(get_team_compatibility),
        )
        .with_state(state)
}
