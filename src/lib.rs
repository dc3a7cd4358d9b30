pub mod analysis;
pub mod coaching;
pub mod llm;
pub mod models;
pub mod store;

pub use analysis::{
    coaching_advice, fallback_analysis, improve_draft, normalize_intent, Analyzer,
};
pub use coaching::{
    classify_speaker, compute_coaching_metrics, extract_utterances, CoachingConfig, RoleKeywords,
};
pub use llm::{AnthropicClient, AnthropicConfig, LlmError};
pub use models::{
    AdviceContext, AnalysisOutcome, AnalysisRecord, AnalysisRequest, AnalysisSummary,
    CoachingAdvice, CoachingMetrics, DraftKind, IntentBucket, IntentScore, RawIntent, SpeakerRole,
    Utterance,
};
pub use store::{AnalysisStore, MemoryStore};
