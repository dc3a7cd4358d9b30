use serde::{Deserialize, Serialize};

use super::{CoachingMetrics, IntentScore};

/// Incoming analysis request: the transcript plus optional call metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub transcript: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Suggested follow-up actions after the call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    pub timing: String,
    pub email_draft: String,
    pub call_script: String,
}

/// Sentiment attached to a competitor mention
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Parse a model-supplied sentiment string, defaulting to neutral
    /// for anything outside the three known values
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

/// A competitor product mentioned during the call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorMention {
    pub name: String,
    pub context: String,
    pub sentiment: Sentiment,
    pub quote: String,
}

/// Aggregated competitive read across all mentions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorInsights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_threat: Option<String>,
    #[serde(default)]
    pub positioning: Vec<String>,
}

/// Complete analysis output, whether model-generated or synthesized by
/// the fallback path. Coaching metrics are always the locally computed
/// ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub summary: String,
    pub intent: IntentScore,
    pub signals: Vec<String>,
    pub blockers: Vec<String>,
    pub next_steps: Vec<String>,
    pub follow_up: FollowUp,
    pub coaching: CoachingMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitors: Option<Vec<CompetitorMention>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitor_insights: Option<CompetitorInsights>,
}

/// A persisted analysis: outcome plus identity, timestamp, and the echoed
/// request metadata. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
}

impl AnalysisRecord {
    /// Wrap an outcome with a fresh id and timestamp, echoing the
    /// request metadata
    pub fn new(request: &AnalysisRequest, outcome: AnalysisOutcome) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            meeting_date: request.meeting_date.clone(),
            account_name: request.account_name.clone(),
            participants: request.participants.clone(),
            seller_name: request.seller_name.clone(),
            notes: request.notes.clone(),
            outcome,
        }
    }
}

/// Trimmed projection of a record for listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub id: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    pub summary: String,
    pub intent: IntentScore,
}

impl From<&AnalysisRecord> for AnalysisSummary {
    fn from(record: &AnalysisRecord) -> Self {
        Self {
            id: record.id.clone(),
            created_at: record.created_at.clone(),
            meeting_date: record.meeting_date.clone(),
            account_name: record.account_name.clone(),
            summary: record.outcome.summary.clone(),
            intent: record.outcome.intent,
        }
    }
}

/// Kind of follow-up draft the improve operation rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftKind {
    Email,
    CallScript,
}

/// Structured coaching advice for a single observation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingAdvice {
    pub observation: String,
    pub why_it_matters: String,
    pub actionable_tips: Vec<String>,
    pub example_phrases: Vec<String>,
    pub related_metrics: Vec<String>,
}

/// Optional metric context supplied with an advice request
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talk_ratio: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_buy_likelihood: Option<u32>,
}
