//! Parsing of model replies into narrative fields.
//!
//! Replies are expected to be a JSON object, but models often wrap it in a
//! code fence or a sentence; everything outside the outermost braces is
//! ignored.

use serde::Deserialize;

use crate::NarrativeError;

pub const MAX_RECOMMENDATIONS: usize = 5;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketEvaluation {
    pub evaluation: String,
    pub key_considerations: String,
}

#[derive(Deserialize)]
struct StrategicPlan {
    recommendations: Vec<String>,
}

fn json_object(raw: &str) -> Result<&str, NarrativeError> {
    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&raw[start..=end]),
        _ => Err(NarrativeError::Malformed("no JSON object in reply".to_string())),
    }
}

pub fn parse_evaluation(raw: &str) -> Result<MarketEvaluation, NarrativeError> {
    let parsed: MarketEvaluation = serde_json::from_str(json_object(raw)?)
        .map_err(|e| NarrativeError::Malformed(e.to_string()))?;
    let evaluation = parsed.evaluation.trim().to_string();
    let key_considerations = parsed.key_considerations.trim().to_string();
    if evaluation.is_empty() {
        return Err(NarrativeError::Incomplete("evaluation"));
    }
    if key_considerations.is_empty() {
        return Err(NarrativeError::Incomplete("keyConsiderations"));
    }
    Ok(MarketEvaluation {
        evaluation,
        key_considerations,
    })
}

/// Trimmed, non-empty recommendations, at most [`MAX_RECOMMENDATIONS`].
pub fn parse_recommendations(raw: &str) -> Result<Vec<String>, NarrativeError> {
    let plan: StrategicPlan = serde_json::from_str(json_object(raw)?)
        .map_err(|e| NarrativeError::Malformed(e.to_string()))?;
    let recs: Vec<String> = plan
        .recommendations
        .into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .take(MAX_RECOMMENDATIONS)
        .collect();
    if recs.is_empty() {
        return Err(NarrativeError::Incomplete("recommendations"));
    }
    Ok(recs)
}
