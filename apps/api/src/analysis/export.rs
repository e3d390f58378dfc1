//! Result export — renders a set of analysis results as delimited text.
//!
//! One header row from the wire field names, one row per result. String
//! fields are always quoted with embedded quotes doubled; numeric fields are
//! written bare so they round-trip through `f64` parsing unchanged.

use crate::analysis::models::CampaignAnalysisResult;

/// Column order matches the JSON wire shape of `CampaignAnalysisResult`.
pub const CSV_HEADER: &str = "campaign,subjectiveFit,clarityAndImpact,combinedEmotion,\
                              ctaStrength,trendRelevance,steppsShareability,\
                              confidenceScore,recommendation";

/// Renders all result records as CSV. An empty result set yields just the
/// header row.
pub fn results_to_csv(results: &[CampaignAnalysisResult]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for result in results {
        out.push_str(&quote(&result.campaign));
        for score in [
            result.scores.subjective_fit,
            result.scores.clarity_and_impact,
            result.scores.combined_emotion,
            result.scores.cta_strength,
            result.scores.trend_relevance,
            result.scores.stepps_shareability,
            result.confidence_score,
        ] {
            out.push(',');
            out.push_str(&score.to_string());
        }
        out.push(',');
        out.push_str(&quote(&result.recommendation));
        out.push('\n');
    }

    out
}

/// Quotes a string field, doubling any embedded quote characters.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
