pub mod extract;
pub mod metrics;
pub mod roles;

pub use extract::*;
pub use metrics::*;
pub use roles::*;

/// Configuration for the deterministic coaching pipeline
#[derive(Debug, Clone)]
pub struct CoachingConfig {
    /// Phrases marking a seller question as open (exploratory framing)
    pub open_question_hints: Vec<String>,
    /// Keyword lists for speaker role classification
    pub keywords: RoleKeywords,
}

impl Default for CoachingConfig {
    fn default() -> Self {
        Self {
            open_question_hints: vec![
                "what".to_string(),
                "how".to_string(),
                "why".to_string(),
                "tell me".to_string(),
                "walk me".to_string(),
                "help me understand".to_string(),
                "can you share".to_string(),
                "could you describe".to_string(),
            ],
            keywords: RoleKeywords::default(),
        }
    }
}
