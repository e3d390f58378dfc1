// All LLM prompt constants and assembly for the Analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::analysis::models::{AnalysisInput, Objective};

/// System prompt for campaign scoring — enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str =
    "You are an expert marketing analyst scoring candidate campaign messages. \
    You MUST respond with valid JSON only — a JSON array of score objects. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Scoring guidance per marketing objective. Exactly one block is included
/// in each assembled prompt.
const AWARENESS_GUIDANCE: &str = "\
    OBJECTIVE: AWARENESS. Reward messages that are memorable, distinctive, and \
    easy to recall after a single exposure. Weigh clarityAndImpact and \
    steppsShareability generously; a message that spreads the brand name matters \
    more here than one that closes a sale.";

const CONSIDERATION_GUIDANCE: &str = "\
    OBJECTIVE: CONSIDERATION. Reward messages that invite comparison and give the \
    audience a concrete reason to learn more. Weigh combinedEmotion and \
    trendRelevance generously; the message should pull the reader one step deeper, \
    not demand an immediate purchase.";

const SALES_GUIDANCE: &str = "\
    OBJECTIVE: SALES. Reward messages that drive immediate action: urgency, a \
    clear offer, a frictionless next step. Weigh ctaStrength and clarityAndImpact \
    generously; vague inspirational copy should score poorly against this objective.";

const LOYALTY_GUIDANCE: &str = "\
    OBJECTIVE: LOYALTY. Reward messages that speak to existing customers: \
    recognition, belonging, exclusive value. Weigh subjectiveFit and \
    combinedEmotion generously; acquisition-style hard sells should score poorly \
    against this objective.";

/// Fallback block for an absent or unrecognized objective.
const NEUTRAL_GUIDANCE: &str = "\
    OBJECTIVE: GENERAL. No single marketing objective was specified. Apply the \
    scoring criteria with balanced weighting and do not favor any one criterion \
    beyond the composite formula below.";

/// The six 1–5 scoring criteria, defined once and included verbatim in
/// every assembled prompt.
const CRITERIA_DEFINITIONS: &str = "\
SCORING CRITERIA — score each campaign message on every criterion from 1.0 (poor) to 5.0 (excellent):
- subjectiveFit: how well the message suits the stated objective, audience, tone, and key message.
- clarityAndImpact: is the message instantly understandable, specific, and striking?
- combinedEmotion: strength of the emotional response evoked, positive or negative, that motivates engagement.
- ctaStrength: how effectively the message and the provided CTA examples convert attention into action.
- trendRelevance: how naturally the message connects to the provided trending keywords.
- steppsShareability: social currency, triggers, emotion, public visibility, practical value, and story — would people pass this on?";

/// The composite formula the oracle must apply. The caller recomputes this
/// locally from the component scores, so oracle arithmetic drift is harmless,
/// but declaring it keeps the oracle's recommendation text consistent.
const FORMULA_BLOCK: &str = "\
COMPOSITE FORMULA:
confidenceScore = 0.25*subjectiveFit + 0.20*clarityAndImpact + 0.20*combinedEmotion
                + 0.15*ctaStrength + 0.10*trendRelevance + 0.10*steppsShareability
Round confidenceScore to two decimal places.

RECOMMENDATION TIERS:
- confidenceScore >= 4.0: \"Strong potential to succeed\"
- 3.0 <= confidenceScore < 4.0: \"Good, but revise key elements\"
- confidenceScore < 3.0: \"Needs rework before launch\"";

/// Declared output contract. One object per campaign message, in the same
/// order the messages were submitted.
const SCHEMA_BLOCK: &str = r#"Return a JSON ARRAY with EXACTLY one object per campaign message, in submission order:
[
  {
    "campaign": "the exact campaign message text",
    "subjectiveFit": 4.0,
    "clarityAndImpact": 4.5,
    "combinedEmotion": 3.5,
    "ctaStrength": 4.0,
    "trendRelevance": 3.0,
    "steppsShareability": 3.5,
    "confidenceScore": 3.88,
    "recommendation": "Good, but revise key elements"
  }
]"#;

/// Selects the guidance block for an objective.
pub fn objective_guidance(objective: Objective) -> &'static str {
    match objective {
        Objective::Awareness => AWARENESS_GUIDANCE,
        Objective::Consideration => CONSIDERATION_GUIDANCE,
        Objective::Sales => SALES_GUIDANCE,
        Objective::Loyalty => LOYALTY_GUIDANCE,
        Objective::Neutral => NEUTRAL_GUIDANCE,
    }
}

/// Assembles the full instruction payload for one analysis request.
///
/// Layout: objective guidance → optional campaign context → inputs
/// (campaigns, keywords, CTA texts as JSON arrays) → criteria definitions →
/// composite formula → output schema.
pub fn build_analysis_prompt(input: &AnalysisInput) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(objective_guidance(input.objective).to_string());

    if input.details.has_any() {
        let mut context = String::from(
            "CAMPAIGN CONTEXT — when a message clashes with any of the following, \
             penalize its subjectiveFit score:",
        );
        if let Some(audience) = non_blank(&input.details.target_audience) {
            context.push_str(&format!("\n- Target audience: {audience}"));
        }
        if let Some(tone) = non_blank(&input.details.brand_tone) {
            context.push_str(&format!("\n- Brand tone: {tone}"));
        }
        if let Some(message) = non_blank(&input.details.key_message) {
            context.push_str(&format!("\n- Key message: {message}"));
        }
        sections.push(context);
    }

    let cta_texts: Vec<&str> = input.ctas.iter().map(|c| c.text.as_str()).collect();

    sections.push(format!(
        "CAMPAIGN MESSAGES to score:\n{}",
        json_array(&input.campaigns)
    ));
    sections.push(format!(
        "TRENDING KEYWORDS:\n{}",
        json_array(&input.keywords)
    ));
    sections.push(format!("CTA EXAMPLES:\n{}", json_array(&cta_texts)));

    sections.push(CRITERIA_DEFINITIONS.to_string());
    sections.push(FORMULA_BLOCK.to_string());
    sections.push(SCHEMA_BLOCK.to_string());

    sections.join("\n\n")
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Serializes a string slice as a JSON array literal for prompt embedding.
/// serde_json handles quoting, so campaign text can never break the prompt
/// structure.
fn json_array<S: AsRef<str>>(items: &[S]) -> String {
    let values: Vec<&str> = items.iter().map(|s| s.as_ref()).collect();
    serde_json::to_string(&values).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{CampaignGoalDetails, Cta};
    use serde_json::Map;

    fn make_input(objective: Objective, details: CampaignGoalDetails) -> AnalysisInput {
        AnalysisInput {
            campaigns: vec!["Own the morning".to_string()],
            keywords: vec!["morning routine".to_string()],
            ctas: vec![Cta {
                text: "Start free".to_string(),
                extra: Map::new(),
            }],
            objective,
            details,
        }
    }

    #[test]
    fn test_each_objective_selects_its_own_block() {
        let pairs = [
            (Objective::Awareness, "OBJECTIVE: AWARENESS"),
            (Objective::Consideration, "OBJECTIVE: CONSIDERATION"),
            (Objective::Sales, "OBJECTIVE: SALES"),
            (Objective::Loyalty, "OBJECTIVE: LOYALTY"),
            (Objective::Neutral, "OBJECTIVE: GENERAL"),
        ];
        for (objective, marker) in pairs {
            assert!(objective_guidance(objective).contains(marker));
        }
    }

    #[test]
    fn test_prompt_includes_inputs_and_contract() {
        let input = make_input(Objective::Sales, CampaignGoalDetails::default());
        let prompt = build_analysis_prompt(&input);
        assert!(prompt.contains("Own the morning"));
        assert!(prompt.contains("morning routine"));
        assert!(prompt.contains("Start free"));
        assert!(prompt.contains("SCORING CRITERIA"));
        assert!(prompt.contains("COMPOSITE FORMULA"));
        assert!(prompt.contains("Return a JSON ARRAY"));
    }

    #[test]
    fn test_context_block_omitted_without_details() {
        let input = make_input(Objective::Neutral, CampaignGoalDetails::default());
        let prompt = build_analysis_prompt(&input);
        assert!(!prompt.contains("CAMPAIGN CONTEXT"));
    }

    #[test]
    fn test_context_block_lists_supplied_details() {
        let details = CampaignGoalDetails {
            target_audience: Some("urban commuters".to_string()),
            brand_tone: Some("confident".to_string()),
            key_message: None,
        };
        let prompt = build_analysis_prompt(&make_input(Objective::Awareness, details));
        assert!(prompt.contains("CAMPAIGN CONTEXT"));
        assert!(prompt.contains("Target audience: urban commuters"));
        assert!(prompt.contains("Brand tone: confident"));
        assert!(!prompt.contains("Key message:"));
    }

    #[test]
    fn test_campaign_text_with_quotes_stays_json_safe() {
        let mut input = make_input(Objective::Sales, CampaignGoalDetails::default());
        input.campaigns = vec!["Say \"yes\" to more".to_string()];
        let prompt = build_analysis_prompt(&input);
        assert!(prompt.contains(r#"Say \"yes\" to more"#));
    }
}
