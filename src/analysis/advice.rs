use tracing::warn;

use crate::llm::{
    build_advice_system_prompt, build_advice_user_prompt, lenient_json, string_field, string_list,
    AnthropicClient, LlmError,
};
use crate::models::{AdviceContext, CoachingAdvice};

/// Get structured coaching advice for an observation.
///
/// Model-backed when a client is available; any failure (or no client)
/// degrades to canned advice. Never fails.
pub async fn coaching_advice(
    client: Option<&AnthropicClient>,
    observation: &str,
    seller_name: Option<&str>,
    context: &AdviceContext,
) -> CoachingAdvice {
    if let Some(client) = client {
        match request_advice(client, observation, seller_name, context).await {
            Ok(advice) => return advice,
            Err(e) => warn!("Coaching advice request failed, using canned advice: {}", e),
        }
    }

    fallback_advice(observation)
}

async fn request_advice(
    client: &AnthropicClient,
    observation: &str,
    seller_name: Option<&str>,
    context: &AdviceContext,
) -> Result<CoachingAdvice, LlmError> {
    let system = build_advice_system_prompt(seller_name, context);
    let user = build_advice_user_prompt(observation);
    let raw = client.send_message(&system, &user).await?;
    let value = lenient_json(&raw)?;

    // Per-field defaults: a thin payload still yields usable advice
    let why_it_matters = match string_field(&value, "whyItMatters") {
        s if s.is_empty() => "This observation highlights an area for improvement.".to_string(),
        s => s,
    };
    let actionable_tips = non_empty_or(
        string_list(&value, "actionableTips"),
        &["Practice this skill in your next call."],
    );
    let example_phrases = non_empty_or(
        string_list(&value, "examplePhrases"),
        &["\"Can you tell me more about that?\""],
    );
    let related_metrics = non_empty_or(
        string_list(&value, "relatedMetrics"),
        &["Talk ratio", "Question quality"],
    );

    Ok(CoachingAdvice {
        observation: observation.to_string(),
        why_it_matters,
        actionable_tips,
        example_phrases,
        related_metrics,
    })
}

fn non_empty_or(values: Vec<String>, defaults: &[&str]) -> Vec<String> {
    if values.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        values
    }
}

/// Canned advice used when the model is unavailable or fails
pub fn fallback_advice(observation: &str) -> CoachingAdvice {
    CoachingAdvice {
        observation: observation.to_string(),
        why_it_matters:
            "This observation highlights an area for improvement in your sales conversations."
                .to_string(),
        actionable_tips: vec![
            "Review your recent calls and identify specific moments where this occurred."
                .to_string(),
            "Practice with a colleague or manager to develop new habits.".to_string(),
            "Set a specific goal for your next call related to this area.".to_string(),
        ],
        example_phrases: vec![
            "\"That's a great point. Can you tell me more about...?\"".to_string(),
            "\"I want to make sure I understand your needs. What would success look like for you?\""
                .to_string(),
            "\"Before I continue, what questions do you have so far?\"".to_string(),
        ],
        related_metrics: vec![
            "Talk ratio".to_string(),
            "Question quality".to_string(),
            "Discovery depth".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_client_returns_canned_advice() {
        let advice = coaching_advice(
            None,
            "Seller talk ratio is high",
            Some("Alex"),
            &AdviceContext::default(),
        )
        .await;

        assert_eq!(advice.observation, "Seller talk ratio is high");
        assert_eq!(advice.actionable_tips.len(), 3);
        assert!(advice.why_it_matters.contains("area for improvement"));
    }

    #[test]
    fn test_non_empty_or_prefers_values() {
        let values = vec!["keep me".to_string()];
        assert_eq!(non_empty_or(values, &["default"]), vec!["keep me"]);
        assert_eq!(non_empty_or(Vec::new(), &["default"]), vec!["default"]);
    }
}
