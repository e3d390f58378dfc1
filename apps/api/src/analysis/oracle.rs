//! Scoring Oracle Adapter — pluggable, trait-based access to the external
//! generative model that performs the qualitative analysis.
//!
//! `AppState` holds an `Arc<dyn ScoringOracle>`, so handlers and tests never
//! depend on the concrete LLM transport.

use async_trait::async_trait;
use tracing::debug;

use crate::analysis::models::AnalysisInput;
use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::analysis::scoring::OracleScoreRow;
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// The scoring oracle trait. Implement this to swap backends without
/// touching the endpoint, handler, or caller code.
#[async_trait]
pub trait ScoringOracle: Send + Sync {
    /// Scores every campaign message in `input`, returning one raw row per
    /// message. Rows are unvalidated — `finalize_results` owns the count
    /// check and composite recomputation.
    async fn score(&self, input: &AnalysisInput) -> Result<Vec<OracleScoreRow>, AppError>;
}

/// Production oracle backed by the LLM client. Assembles the instruction
/// payload, declares the JSON array contract, and parses the reply.
pub struct LlmScoringOracle {
    llm: LlmClient,
}

impl LlmScoringOracle {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ScoringOracle for LlmScoringOracle {
    async fn score(&self, input: &AnalysisInput) -> Result<Vec<OracleScoreRow>, AppError> {
        let prompt = build_analysis_prompt(input);
        debug!(
            "Scoring {} campaign messages (objective: {:?}, prompt: {} chars)",
            input.campaigns.len(),
            input.objective,
            prompt.len()
        );

        let rows: Vec<OracleScoreRow> = self
            .llm
            .call_json(&prompt, ANALYSIS_SYSTEM)
            .await
            .map_err(AppError::from)?;

        Ok(rows)
    }
}
