//! Data model for the campaign analysis pipeline.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Marketing objective selected by the caller. Drives which scoring-guidance
/// block the request assembler includes in the oracle prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    Awareness,
    Consideration,
    Sales,
    Loyalty,
    /// Balanced weighting across all criteria. Fallback for empty or
    /// unrecognized objective strings — never an error.
    #[default]
    Neutral,
}

impl Objective {
    /// Parses a caller-supplied objective string, case-insensitively.
    /// Anything unrecognized (including the empty string) maps to `Neutral`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "awareness" => Objective::Awareness,
            "consideration" => Objective::Consideration,
            "sales" => Objective::Sales,
            "loyalty" => Objective::Loyalty,
            _ => Objective::Neutral,
        }
    }
}

/// Optional targeting context for an analysis. All fields are free text;
/// an all-empty value is valid and simply omits the context block from
/// the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignGoalDetails {
    pub target_audience: Option<String>,
    pub brand_tone: Option<String>,
    pub key_message: Option<String>,
}

impl CampaignGoalDetails {
    /// True when at least one targeting field carries a non-blank value.
    pub fn has_any(&self) -> bool {
        [&self.target_audience, &self.brand_tone, &self.key_message]
            .iter()
            .any(|f| f.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false))
    }
}

/// A call-to-action example. Only `text` is consumed by the pipeline;
/// callers may attach arbitrary auxiliary fields (sub-scores, labels) which
/// are preserved through deserialization but ignored by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cta {
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The six component scores returned by the oracle, each on a 1.0–5.0 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    pub subjective_fit: f64,
    pub clarity_and_impact: f64,
    pub combined_emotion: f64,
    pub cta_strength: f64,
    pub trend_relevance: f64,
    pub stepps_shareability: f64,
}

/// One score record per submitted campaign message. Built once from the
/// oracle response and never mutated afterwards: the composite and
/// recommendation are recomputed locally, not taken from the oracle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignAnalysisResult {
    pub campaign: String,
    #[serde(flatten)]
    pub scores: ComponentScores,
    /// Weighted composite, 0.00–5.00, two-decimal precision.
    pub confidence_score: f64,
    pub recommendation: String,
}

/// Raw request body for POST /api/analyze. Every field is optional at the
/// serde layer so a missing key becomes a 400 validation error rather than
/// an opaque deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub campaigns: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub ctas: Option<Vec<Cta>>,
    pub objective: Option<String>,
    pub details: Option<CampaignGoalDetails>,
}

/// Fully-validated analysis input. Construction is the only validation
/// gate — downstream code never re-checks presence.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub campaigns: Vec<String>,
    pub keywords: Vec<String>,
    pub ctas: Vec<Cta>,
    pub objective: Objective,
    pub details: CampaignGoalDetails,
}

impl AnalyzeRequest {
    /// Validates field presence. Each of campaigns, keywords, ctas,
    /// objective, and details must appear in the request body; the
    /// *value* of objective may still be unrecognized and falls back
    /// to `Objective::Neutral`.
    pub fn validate(self) -> Result<AnalysisInput, AppError> {
        let campaigns = self
            .campaigns
            .ok_or_else(|| AppError::Validation("'campaigns' is required".to_string()))?;
        let keywords = self
            .keywords
            .ok_or_else(|| AppError::Validation("'keywords' is required".to_string()))?;
        let ctas = self
            .ctas
            .ok_or_else(|| AppError::Validation("'ctas' is required".to_string()))?;
        let objective = self
            .objective
            .ok_or_else(|| AppError::Validation("'objective' is required".to_string()))?;
        let details = self
            .details
            .ok_or_else(|| AppError::Validation("'details' is required".to_string()))?;

        if campaigns.iter().all(|c| c.trim().is_empty()) {
            return Err(AppError::Validation(
                "'campaigns' must contain at least one non-empty message".to_string(),
            ));
        }

        Ok(AnalysisInput {
            campaigns,
            keywords,
            ctas,
            objective: Objective::parse(&objective),
            details,
        })
    }
}
