//! HTTP handlers for scoring endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};

use crate::application::handlers::{
    GetScoringResultHandler, GetScoringResultQuery, ScoreSubmissionCommand, ScoreSubmissionHandler,
};
use crate::domain::foundation::{OrganizationId, TakerId, TestId};
use crate::ports::{ScoringResultRepository, WeightTableReader};

use super::super::error::ApiError;
use super::dto::{ScoreSubmissionRequest, ScoreSubmissionResponse, ScoringResultResponse};

/// Shared state for scoring endpoints.
#[derive(Clone)]
pub struct ScoringAppState {
    pub weight_tables: Arc<dyn WeightTableReader>,
    pub results: Arc<dyn ScoringResultRepository>,
    pub max_answers_per_submission: usize,
    pub verbose_errors: bool,
}

impl ScoringAppState {
    pub fn score_submission_handler(&self) -> ScoreSubmissionHandler {
        ScoreSubmissionHandler::new(
            self.weight_tables.clone(),
            self.results.clone(),
            self.max_answers_per_submission,
        )
    }

    pub fn get_result_handler(&self) -> GetScoringResultHandler {
        GetScoringResultHandler::new(self.results.clone())
    }
}

fn parse_path(
    org_id: &str,
    test_id: &str,
    taker_id: &str,
) -> Result<(OrganizationId, TestId, TakerId), ApiError> {
    let org = org_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid organization ID format"))?;
    let test = test_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid test ID format"))?;
    let taker = taker_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid taker ID format"))?;
    Ok((org, test, taker))
}

/// POST /api/organizations/:org_id/tests/:test_id/takers/:taker_id/score
pub async fn score_submission(
    State(state): State<ScoringAppState>,
    Path((org_id, test_id, taker_id)): Path<(String, String, String)>,
    payload: Result<Json<ScoreSubmissionRequest>, JsonRejection>,
) -> Result<Json<ScoreSubmissionResponse>, ApiError> {
    let (organization_id, test_id, taker_id) = parse_path(&org_id, &test_id, &taker_id)?;
    let Json(request) = payload?;
    let answers = request
        .into_answers()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let result = state
        .score_submission_handler()
        .handle(ScoreSubmissionCommand {
            organization_id,
            test_id,
            taker_id,
            answers,
        })
        .await
        .map_err(|e| ApiError::from_domain(e, state.verbose_errors))?;

    Ok(Json(ScoreSubmissionResponse {
        result: ScoringResultResponse::from(&result.record),
        skipped_answers: result.skipped_answers,
    }))
}

/// GET /api/organizations/:org_id/tests/:test_id/takers/:taker_id/result
pub async fn get_scoring_result(
    State(state): State<ScoringAppState>,
    Path((org_id, test_id, taker_id)): Path<(String, String, String)>,
) -> Result<Json<ScoringResultResponse>, ApiError> {
    let (organization_id, test_id, taker_id) = parse_path(&org_id, &test_id, &taker_id)?;

    let record = state
        .get_result_handler()
        .handle(GetScoringResultQuery {
            organization_id,
            test_id,
            taker_id,
        })
        .await
        .map_err(|e| ApiError::from_domain(e, state.verbose_errors))?;

    Ok(Json(ScoringResultResponse::from(&record)))
}
