use serde_json::Value;

use crate::models::{CompetitorInsights, CompetitorMention, RawIntent, Sentiment};

use super::LlmError;

/// Parse model output as JSON, tolerating surrounding prose.
///
/// Strict parse first; on failure, retry on the substring between the
/// first `{` and the last `}` before giving up.
pub fn lenient_json(raw: &str) -> Result<Value, LlmError> {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return Ok(value);
    }

    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if end > start {
            if let Ok(value) = serde_json::from_str::<Value>(&raw[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(LlmError::UnparsableJson {
        snippet: raw.chars().take(200).collect(),
    })
}

/// Coerce a JSON value to a string: strings pass through, numbers and
/// booleans are rendered, everything else becomes empty
pub fn as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Look up a field and coerce it to a string, defaulting to empty
pub fn string_field(value: &Value, field: &str) -> String {
    value.get(field).map(as_string).unwrap_or_default()
}

/// Coerce a field to a list of strings; anything but an array yields
/// an empty list, non-string elements are rendered or dropped
pub fn string_list(value: &Value, field: &str) -> Vec<String> {
    match value.get(field) {
        Some(Value::Array(items)) => items
            .iter()
            .map(as_string)
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Qualitative analysis fields as returned by the model, before the
/// intent vector is normalized and metrics are merged back in
#[derive(Debug, Clone)]
pub struct ModelAnalysis {
    pub summary: String,
    pub intent: RawIntent,
    pub signals: Vec<String>,
    pub blockers: Vec<String>,
    pub next_steps: Vec<String>,
    pub follow_up_timing: String,
    pub follow_up_email: String,
    pub follow_up_call_script: String,
    /// Model-supplied coaching observations; overrides the local list
    /// only when non-empty
    pub observations: Vec<String>,
    pub competitors: Vec<CompetitorMention>,
    pub competitor_insights: Option<CompetitorInsights>,
}

/// Convert a raw model payload into analysis fields, field by field.
///
/// Missing or oddly-shaped fields degrade to empty defaults instead of
/// failing the whole payload.
pub fn parse_analysis_payload(raw: &str) -> Result<ModelAnalysis, LlmError> {
    let value = lenient_json(raw)?;
    if !value.is_object() {
        return Err(LlmError::UnparsableJson {
            snippet: raw.chars().take(200).collect(),
        });
    }

    let follow_up = value.get("followUp").cloned().unwrap_or(Value::Null);
    let coaching = value.get("coaching").cloned().unwrap_or(Value::Null);

    Ok(ModelAnalysis {
        summary: string_field(&value, "summary"),
        intent: parse_intent(value.get("intent")),
        signals: string_list(&value, "signals"),
        blockers: string_list(&value, "blockers"),
        next_steps: string_list(&value, "nextSteps"),
        follow_up_timing: string_field(&follow_up, "timing"),
        follow_up_email: string_field(&follow_up, "emailDraft"),
        follow_up_call_script: string_field(&follow_up, "callScript"),
        observations: string_list(&coaching, "observations"),
        competitors: parse_competitors(value.get("competitors")),
        competitor_insights: parse_competitor_insights(value.get("competitorInsights")),
    })
}

/// Extract the four intent buckets, clamping each at zero
fn parse_intent(value: Option<&Value>) -> RawIntent {
    let Some(value) = value else {
        return RawIntent::default();
    };

    let bucket = |field: &str| {
        value
            .get(field)
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
            .max(0.0)
    };

    RawIntent {
        buy_now: bucket("buyNow"),
        buy_soon: bucket("buySoon"),
        later: bucket("later"),
        no_fit: bucket("noFit"),
    }
}

/// Competitor mentions: unnamed entries are dropped, unrecognized
/// sentiment becomes neutral
fn parse_competitors(value: Option<&Value>) -> Vec<CompetitorMention> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| CompetitorMention {
            name: string_field(item, "name"),
            context: string_field(item, "context"),
            sentiment: Sentiment::parse_lenient(&string_field(item, "sentiment")),
            quote: string_field(item, "quote"),
        })
        .filter(|c| !c.name.is_empty())
        .collect()
}

fn parse_competitor_insights(value: Option<&Value>) -> Option<CompetitorInsights> {
    let value = value?;
    if !value.is_object() {
        return None;
    }

    let top_threat = match string_field(value, "topThreat") {
        s if s.is_empty() => None,
        s => Some(s),
    };

    Some(CompetitorInsights {
        top_threat,
        positioning: string_list(value, "positioning"),
    })
}
