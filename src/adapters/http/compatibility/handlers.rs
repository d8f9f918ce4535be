//! HTTP handlers for compatibility endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};

use crate::application::handlers::{
    BuildAdHocMatrixCommand, BuildAdHocMatrixHandler, BuildTeamMatrixHandler, BuildTeamMatrixQuery,
    ListPairScoresHandler, SetPairScoreCommand, SetPairScoreHandler,
};
use crate::domain::foundation::{DomainError, OrganizationId, TeamId};
use crate::ports::{CompatibilityPairRepository, TeamRosterReader};

use super::super::error::ApiError;
use super::dto::{
    AdHocMatrixRequest, CompatibilityPair, PairListResponse, SetPairScoreRequest,
    TeamCompatibility,
};

/// Shared state for compatibility endpoints.
#[derive(Clone)]
pub struct CompatibilityAppState {
    pub pairs: Arc<dyn CompatibilityPairRepository>,
    pub rosters: Arc<dyn TeamRosterReader>,
    pub max_roster_size: usize,
    pub verbose_errors: bool,
}

impl CompatibilityAppState {
    pub fn set_pair_score_handler(&self) -> SetPairScoreHandler {
        SetPairScoreHandler::new(self.pairs.clone())
    }

    pub fn list_pair_scores_handler(&self) -> ListPairScoresHandler {
        ListPairScoresHandler::new(self.pairs.clone())
    }

    pub fn build_team_matrix_handler(&self) -> BuildTeamMatrixHandler {
        BuildTeamMatrixHandler::new(self.rosters.clone(), self.pairs.clone(), self.max_roster_size)
    }

    pub fn build_ad_hoc_matrix_handler(&self) -> BuildAdHocMatrixHandler {
        BuildAdHocMatrixHandler::new(self.pairs.clone(), self.max_roster_size)
    }

    fn error(&self, err: DomainError) -> ApiError {
        ApiError::from_domain(err, self.verbose_errors)
    }
}

fn parse_org(org_id: &str) -> Result<OrganizationId, ApiError> {
    org_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid organization ID format"))
}

/// GET /api/organizations/:org_id/compatibility/pairs
pub async fn list_pair_scores(
    State(state): State<CompatibilityAppState>,
    Path(org_id): Path<String>,
) -> Result<Json<PairListResponse>, ApiError> {
    let organization_id = parse_org(&org_id)?;
    let pairs = state
        .list_pair_scores_handler()
        .handle(organization_id)
        .await
        .map_err(|e| state.error(e))?;

    Ok(Json(PairListResponse { pairs }))
}

/// PUT /api/organizations/:org_id/compatibility/pairs
pub async fn set_pair_score(
    State(state): State<CompatibilityAppState>,
    Path(org_id): Path<String>,
    payload: Result<Json<SetPairScoreRequest>, JsonRejection>,
) -> Result<Json<CompatibilityPair>, ApiError> {
    let organization_id = parse_org(&org_id)?;
    let Json(request) = payload?;

    let pair = state
        .set_pair_score_handler()
        .handle(SetPairScoreCommand {
            organization_id,
            a_key: request.a_key,
            b_key: request.b_key,
            score: request.score,
        })
        .await
        .map_err(|e| state.error(e))?;

    Ok(Json(pair))
}

/// GET /api/organizations/:org_id/teams/:team_id/compatibility
pub async fn get_team_compatibility(
    State(state): State<CompatibilityAppState>,
    Path((org_id, team_id)): Path<(String, String)>,
) -> Result<Json<TeamCompatibility>, ApiError> {
    let organization_id = parse_org(&org_id)?;
    let team_id: TeamId = team_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid team ID format"))?;

    let result = state
        .build_team_matrix_handler()
        .handle(BuildTeamMatrixQuery {
            organization_id,
            team_id,
        })
        .await
        .map_err(|e| state.error(e))?;

    Ok(Json(result))
}

/// POST /api/organizations/:org_id/compatibility/matrix
pub async fn build_ad_hoc_matrix(
    State(state): State<CompatibilityAppState>,
    Path(org_id): Path<String>,
    payload: Result<Json<AdHocMatrixRequest>, JsonRejection>,
) -> Result<Json<TeamCompatibility>, ApiError> {
    let organization_id = parse_org(&org_id)?;
    let Json(request) = payload?;

    let result = state
        .build_ad_hoc_matrix_handler()
        .handle(BuildAdHocMatrixCommand {
            organization_id,
            members: request.into_members(),
        })
        .await
        .map_err(|e| state.error(e))?;

    Ok(Json(result))
}
