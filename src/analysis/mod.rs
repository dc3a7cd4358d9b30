pub mod advice;
pub mod fallback;
pub mod improve;
pub mod intent;

pub use advice::*;
pub use fallback::*;
pub use improve::*;
pub use intent::*;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::coaching::{compute_coaching_metrics, CoachingConfig};
use crate::llm::{
    build_analysis_prompt, parse_analysis_payload, AnthropicClient, LlmError,
    ANALYSIS_SYSTEM_PROMPT,
};
use crate::models::{
    AnalysisOutcome, AnalysisRecord, AnalysisRequest, CoachingMetrics, FollowUp,
};
use crate::store::AnalysisStore;

/// Transcript analysis orchestrator.
///
/// Coaching metrics are always computed locally and treated as ground
/// truth; the external model only fills in the qualitative fields. Any
/// model failure is absorbed into the fallback path, so `analyze` never
/// fails. When a store is injected, every record produced by
/// `analyze_to_record` is persisted through it.
pub struct Analyzer {
    client: Option<AnthropicClient>,
    store: Option<Arc<dyn AnalysisStore>>,
    config: CoachingConfig,
}

impl Analyzer {
    pub fn new(client: Option<AnthropicClient>) -> Self {
        Self {
            client,
            store: None,
            config: CoachingConfig::default(),
        }
    }

    pub fn with_config(client: Option<AnthropicClient>, config: CoachingConfig) -> Self {
        Self {
            client,
            store: None,
            config,
        }
    }

    /// Inject a storage backend; subsequent records are saved through it
    pub fn with_store(mut self, store: Arc<dyn AnalysisStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Analyze a transcript, producing a complete outcome
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisOutcome {
        let coaching = compute_coaching_metrics(
            &request.transcript,
            request.seller_name.as_deref(),
            &self.config,
        );

        if let Some(client) = &self.client {
            match self.analyze_with_model(client, request, &coaching).await {
                Ok(outcome) => return outcome,
                Err(e) => warn!("Model analysis failed, using fallback: {}", e),
            }
        } else {
            info!("No model credential configured; using fallback analysis");
        }

        fallback_analysis(request, coaching)
    }

    /// Analyze, wrap in a record with id and timestamp, and persist it
    /// through the injected store if one is configured
    pub async fn analyze_to_record(&self, request: &AnalysisRequest) -> AnalysisRecord {
        let outcome = self.analyze(request).await;
        let record = AnalysisRecord::new(request, outcome);

        if let Some(store) = &self.store {
            store.save(record.clone());
            debug!("Analysis {} saved to store", record.id);
        }

        record
    }

    async fn analyze_with_model(
        &self,
        client: &AnthropicClient,
        request: &AnalysisRequest,
        coaching: &CoachingMetrics,
    ) -> Result<AnalysisOutcome, LlmError> {
        let prompt = build_analysis_prompt(request, coaching);
        let raw = client.send_message(ANALYSIS_SYSTEM_PROMPT, &prompt).await?;
        debug!("Model returned {} bytes of analysis payload", raw.len());

        let model = parse_analysis_payload(&raw)?;

        // Model observations win only when present and non-empty; the
        // numeric metrics are always ours
        let mut coaching = coaching.clone();
        if !model.observations.is_empty() {
            coaching.observations = model.observations;
        }

        Ok(AnalysisOutcome {
            summary: model.summary,
            intent: normalize_intent(&model.intent),
            signals: model.signals,
            blockers: model.blockers,
            next_steps: model.next_steps,
            follow_up: FollowUp {
                timing: model.follow_up_timing,
                email_draft: model.follow_up_email,
                call_script: model.follow_up_call_script,
            },
            coaching,
            competitors: if model.competitors.is_empty() {
                None
            } else {
                Some(model.competitors)
            },
            competitor_insights: model.competitor_insights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IntentBucket;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_analyze_without_client_falls_back() {
        let analyzer = Analyzer::new(None);
        let request = AnalysisRequest {
            transcript: "Alex: What challenges are you facing?\nJordan: Reporting is slow."
                .to_string(),
            seller_name: Some("Alex".to_string()),
            ..Default::default()
        };

        let outcome = analyzer.analyze(&request).await;

        // Fallback intent distribution, real local metrics
        assert_eq!(outcome.intent.primary, IntentBucket::BuySoon);
        assert_eq!(outcome.intent.total(), 100);
        assert_eq!(outcome.coaching.question_score.seller_questions, 1);
        assert!(outcome.coaching.talk_ratio.seller_words > 0);
    }

    #[tokio::test]
    async fn test_analyze_to_record_stamps_identity() {
        let analyzer = Analyzer::new(None);
        let request = AnalysisRequest {
            transcript: "Alex: hi".to_string(),
            account_name: Some("Acme".to_string()),
            ..Default::default()
        };

        let record = analyzer.analyze_to_record(&request).await;
        assert!(!record.id.is_empty());
        assert!(!record.created_at.is_empty());
        assert_eq!(record.account_name.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn test_analyze_to_record_persists_through_store() {
        let store = Arc::new(MemoryStore::new());
        let analyzer = Analyzer::new(None).with_store(store.clone());

        let request = AnalysisRequest {
            transcript: "Alex: What would success look like?\nJordan: Fewer surprises."
                .to_string(),
            seller_name: Some("Alex".to_string()),
            ..Default::default()
        };

        let first = analyzer.analyze_to_record(&request).await;
        let second = analyzer.analyze_to_record(&request).await;

        assert_eq!(store.len(), 2);
        // Newest first, both retrievable by id
        let listed = store.list(10);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
        let fetched = store.get(&first.id).unwrap();
        assert_eq!(fetched.outcome.summary, first.outcome.summary);
    }

    #[tokio::test]
    async fn test_analyze_to_record_works_without_store() {
        let analyzer = Analyzer::new(None);
        let request = AnalysisRequest {
            transcript: "Alex: hi".to_string(),
            ..Default::default()
        };
        let record = analyzer.analyze_to_record(&request).await;
        assert!(!record.id.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_is_deterministic_without_model() {
        let analyzer = Analyzer::new(None);
        let request = AnalysisRequest {
            transcript: "Alex: How is the rollout going?\nJordan: Slowly.".to_string(),
            seller_name: Some("Alex".to_string()),
            ..Default::default()
        };

        let first = analyzer.analyze(&request).await;
        let second = analyzer.analyze(&request).await;
        assert_eq!(first.coaching, second.coaching);
        assert_eq!(first.intent, second.intent);
        assert_eq!(first.summary, second.summary);
    }
}
