//! Result aggregation — the weighted composite score and recommendation tier.
//!
//! The oracle is instructed to apply the same formula, but its arithmetic is
//! never trusted: the composite and recommendation are recomputed here from
//! the six component scores it returns.

use serde::{Deserialize, Serialize};

use crate::analysis::models::{CampaignAnalysisResult, ComponentScores};
use crate::errors::AppError;

/// Weights of the six component scores. Must sum to 1.0.
pub const WEIGHT_SUBJECTIVE_FIT: f64 = 0.25;
pub const WEIGHT_CLARITY_AND_IMPACT: f64 = 0.20;
pub const WEIGHT_COMBINED_EMOTION: f64 = 0.20;
pub const WEIGHT_CTA_STRENGTH: f64 = 0.15;
pub const WEIGHT_TREND_RELEVANCE: f64 = 0.10;
pub const WEIGHT_STEPPS_SHAREABILITY: f64 = 0.10;

pub const RECOMMEND_STRONG: &str = "Strong potential to succeed";
pub const RECOMMEND_REVISE: &str = "Good, but revise key elements";
pub const RECOMMEND_REWORK: &str = "Needs rework before launch";

/// One raw row of the oracle's declared output contract. The composite and
/// recommendation fields are parsed for contract completeness but replaced
/// by local computation in `finalize_results`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleScoreRow {
    pub campaign: String,
    #[serde(flatten)]
    pub scores: ComponentScores,
    pub confidence_score: f64,
    pub recommendation: String,
}

/// Weighted composite of the six component scores, rounded to two decimals.
pub fn composite_score(scores: &ComponentScores) -> f64 {
    let raw = WEIGHT_SUBJECTIVE_FIT * scores.subjective_fit
        + WEIGHT_CLARITY_AND_IMPACT * scores.clarity_and_impact
        + WEIGHT_COMBINED_EMOTION * scores.combined_emotion
        + WEIGHT_CTA_STRENGTH * scores.cta_strength
        + WEIGHT_TREND_RELEVANCE * scores.trend_relevance
        + WEIGHT_STEPPS_SHAREABILITY * scores.stepps_shareability;
    (raw * 100.0).round() / 100.0
}

/// Three-tier recommendation label. The 4.0 and 3.0 boundaries are inclusive
/// of the tier above them.
pub fn recommendation(composite: f64) -> &'static str {
    if composite >= 4.0 {
        RECOMMEND_STRONG
    } else if composite >= 3.0 {
        RECOMMEND_REVISE
    } else {
        RECOMMEND_REWORK
    }
}

/// Turns raw oracle rows into final result records.
///
/// Enforces the one-record-per-campaign invariant (a count mismatch is a
/// protocol error), rebinds each record's campaign text from the submitted
/// input so ordering is owned by the caller rather than the oracle's echo,
/// and recomputes the composite and recommendation locally.
pub fn finalize_results(
    campaigns: &[String],
    rows: Vec<OracleScoreRow>,
) -> Result<Vec<CampaignAnalysisResult>, AppError> {
    if rows.len() != campaigns.len() {
        return Err(AppError::Protocol(format!(
            "oracle returned {} score rows for {} campaign messages",
            rows.len(),
            campaigns.len()
        )));
    }

    Ok(campaigns
        .iter()
        .zip(rows)
        .map(|(campaign, row)| {
            let confidence_score = composite_score(&row.scores);
            CampaignAnalysisResult {
                campaign: campaign.clone(),
                scores: row.scores,
                confidence_score,
                recommendation: recommendation(confidence_score).to_string(),
            }
        })
        .collect())
}
