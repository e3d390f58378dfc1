//! Axum route handlers for the Analysis API.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::analysis::export::results_to_csv;
use crate::analysis::models::{AnalyzeRequest, CampaignAnalysisResult};
use crate::analysis::scoring::finalize_results;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/analyze
///
/// Full analysis pipeline: validate → assemble prompt → oracle call →
/// finalize (count check, local composite, recommendation tier).
/// Validation failures never reach the oracle.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Vec<CampaignAnalysisResult>>, AppError> {
    let input = request.validate()?;

    let rows = state.oracle.score(&input).await?;
    let results = finalize_results(&input.campaigns, rows)?;

    info!(
        "Analyzed {} campaign messages (objective: {:?})",
        results.len(),
        input.objective
    );

    Ok(Json(results))
}

/// POST /api/analyze/export
///
/// Renders a previously returned result set as CSV. Pure formatting — no
/// oracle call, no state.
pub async fn handle_export(
    Json(results): Json<Vec<CampaignAnalysisResult>>,
) -> impl IntoResponse {
    let csv = results_to_csv(&results);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"campaign-analysis.csv\"",
            ),
        ],
        csv,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{AnalysisInput, CampaignGoalDetails, ComponentScores, Cta};
    use crate::analysis::oracle::ScoringOracle;
    use crate::analysis::scoring::{OracleScoreRow, RECOMMEND_STRONG};
    use async_trait::async_trait;
    use serde_json::Map;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Oracle double: returns uniform 5.0 rows and counts invocations, so
    /// tests can assert the oracle is never reached on invalid input.
    struct FixedOracle {
        calls: AtomicUsize,
    }

    impl FixedOracle {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ScoringOracle for FixedOracle {
        async fn score(&self, input: &AnalysisInput) -> Result<Vec<OracleScoreRow>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(input
                .campaigns
                .iter()
                .map(|campaign| OracleScoreRow {
                    campaign: campaign.clone(),
                    scores: ComponentScores {
                        subjective_fit: 5.0,
                        clarity_and_impact: 5.0,
                        combined_emotion: 5.0,
                        cta_strength: 5.0,
                        trend_relevance: 5.0,
                        stepps_shareability: 5.0,
                    },
                    confidence_score: 5.0,
                    recommendation: RECOMMEND_STRONG.to_string(),
                })
                .collect())
        }
    }

    fn make_state(oracle: Arc<FixedOracle>) -> AppState {
        AppState { oracle }
    }

    fn full_request() -> AnalyzeRequest {
        AnalyzeRequest {
            campaigns: Some(vec![
                "Own the morning".to_string(),
                "Sleep in, we deliver".to_string(),
            ]),
            keywords: Some(vec!["morning routine".to_string()]),
            ctas: Some(vec![Cta {
                text: "Start free".to_string(),
                extra: Map::new(),
            }]),
            objective: Some("awareness".to_string()),
            details: Some(CampaignGoalDetails::default()),
        }
    }

    #[tokio::test]
    async fn test_analyze_returns_one_result_per_campaign_in_order() {
        let oracle = FixedOracle::new();
        let state = make_state(oracle.clone());

        let Json(results) = handle_analyze(State(state), Json(full_request()))
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].campaign, "Own the morning");
        assert_eq!(results[1].campaign, "Sleep in, we deliver");
        assert_eq!(results[0].confidence_score, 5.00);
        assert_eq!(results[0].recommendation, RECOMMEND_STRONG);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected_before_the_oracle() {
        let oracle = FixedOracle::new();
        let state = make_state(oracle.clone());

        let mut request = full_request();
        request.keywords = None;

        let err = handle_analyze(State(state), Json(request)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unrecognized_objective_still_analyzes() {
        let oracle = FixedOracle::new();
        let state = make_state(oracle.clone());

        let mut request = full_request();
        request.objective = Some("go viral".to_string());

        let Json(results) = handle_analyze(State(state), Json(request)).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_export_sets_csv_content_type() {
        let response = handle_export(Json(vec![])).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type, "text/csv; charset=utf-8");
    }
}
