use crate::models::{AdviceContext, AnalysisRequest, CoachingMetrics, DraftKind};

/// System prompt for the transcript analysis call
pub const ANALYSIS_SYSTEM_PROMPT: &str =
    "You are an expert sales analyst who provides concise, actionable insights.";

/// Build the user prompt for a transcript analysis request.
///
/// The locally computed coaching metrics are embedded verbatim and the
/// model is told not to change them; the orchestrator discards whatever
/// numbers come back anyway.
pub fn build_analysis_prompt(request: &AnalysisRequest, coaching: &CoachingMetrics) -> String {
    let participants = request
        .participants
        .as_ref()
        .filter(|p| !p.is_empty())
        .map(|p| p.join(", "))
        .unwrap_or_else(|| "Unknown".to_string());
    let metrics_json = serde_json::to_string_pretty(coaching).unwrap_or_else(|_| "{}".to_string());

    let mut prompt = String::new();

    prompt.push_str("You are a sales meeting analyst. Return ONLY valid JSON, no markdown.\n\n");

    prompt.push_str("Meeting metadata:\n");
    prompt.push_str(&format!(
        "- Account: {}\n",
        request.account_name.as_deref().unwrap_or("Unknown")
    ));
    prompt.push_str(&format!(
        "- Date: {}\n",
        request.meeting_date.as_deref().unwrap_or("Unknown")
    ));
    prompt.push_str(&format!(
        "- Seller: {}\n",
        request.seller_name.as_deref().unwrap_or("Unknown")
    ));
    prompt.push_str(&format!("- Participants: {}\n", participants));
    prompt.push_str(&format!(
        "- Notes: {}\n\n",
        request.notes.as_deref().unwrap_or("None")
    ));

    prompt.push_str("Computed coaching metrics (do not change these numbers):\n");
    prompt.push_str(&metrics_json);
    prompt.push_str("\n\n");

    prompt.push_str("Return JSON with this exact shape:\n");
    prompt.push_str(
        r#"{
  "summary": "string",
  "intent": {
    "buyNow": number,
    "buySoon": number,
    "later": number,
    "noFit": number,
    "primary": "BuyNow|BuySoon|Later|NoFit"
  },
  "signals": ["string", "..."],
  "blockers": ["string", "..."],
  "nextSteps": ["string", "..."],
  "followUp": {
    "timing": "string",
    "emailDraft": "string",
    "callScript": "string"
  },
  "coaching": {
    "talkRatio": { "sellerPct": number, "customerPct": number, "sellerWords": number, "customerWords": number },
    "questionScore": { "sellerQuestions": number, "openQuestions": number, "score": number },
    "observations": ["string", "..."]
  },
  "competitors": [
    {
      "name": "competitor company name",
      "context": "brief description of why/how they were mentioned",
      "sentiment": "positive|negative|neutral",
      "quote": "exact quote from transcript mentioning competitor"
    }
  ],
  "competitorInsights": {
    "topThreat": "name of most threatening competitor or null if none",
    "positioning": ["counter-positioning suggestion 1", "suggestion 2"]
  }
}
"#,
    );

    prompt.push_str("\nRules:\n");
    prompt.push_str("- intent values must sum to 100.\n");
    prompt.push_str("- keep arrays 3-5 items when possible.\n");
    prompt.push_str("- use plain text, no markdown.\n");
    prompt.push_str("- be concise and actionable.\n");
    prompt.push_str(
        "- competitors: identify any competitor companies mentioned in the transcript.\n",
    );
    prompt.push_str(
        "- if no competitors mentioned, return empty array for competitors and null for competitorInsights.\n",
    );

    prompt.push_str("\nTranscript:\n");
    prompt.push_str(&request.transcript);

    prompt
}

/// System prompt for improving a follow-up draft
pub fn improve_system_prompt(kind: DraftKind) -> &'static str {
    match kind {
        DraftKind::Email => {
            r#"You are an expert sales copywriter. Improve the following sales follow-up email to be more:
- Professional and personalized
- Clear and concise
- Action-oriented with specific next steps
- Properly formatted with clear paragraphs
- Free of spelling and grammar errors

Keep the same general message and intent, but make it more compelling and polished.
Return ONLY the improved email text, no explanations."#
        }
        DraftKind::CallScript => {
            r#"You are an expert sales coach. Improve the following call script to be more:
- Conversational and natural
- Well-structured with clear sections
- Question-focused to drive discovery
- Easy to follow with numbered steps
- Free of spelling and grammar errors

Keep the same general approach, but make it more effective and easier to use.
Return ONLY the improved script text, no explanations."#
        }
    }
}

/// Build the system prompt for a coaching-advice request
pub fn build_advice_system_prompt(seller_name: Option<&str>, context: &AdviceContext) -> String {
    let mut context_lines = Vec::new();
    if let Some(name) = seller_name {
        context_lines.push(format!("Salesperson: {}", name));
    }
    if let Some(ratio) = context.talk_ratio {
        context_lines.push(format!("Current talk ratio: {}% seller", ratio));
    }
    if let Some(score) = context.question_score {
        context_lines.push(format!("Question quality score: {}%", score));
    }
    if let Some(likelihood) = context.avg_buy_likelihood {
        context_lines.push(format!("Average buy likelihood: {}%", likelihood));
    }

    let mut prompt = String::new();
    prompt.push_str(
        "You are an expert B2B sales coach with 20+ years of experience training top-performing sales teams.\n",
    );
    prompt.push_str(
        "Your role is to provide actionable, specific coaching advice based on observed behaviors in sales calls.\n\n",
    );

    if !context_lines.is_empty() {
        prompt.push_str("Context:\n");
        prompt.push_str(&context_lines.join("\n"));
        prompt.push_str("\n\n");
    }

    prompt.push_str(
        r#"Based on the observation provided, give coaching advice in the following JSON format:
{
  "whyItMatters": "A 2-3 sentence explanation of why this behavior impacts sales outcomes",
  "actionableTips": ["3-4 specific, practical tips the salesperson can implement immediately"],
  "examplePhrases": ["3-4 word-for-word phrases or questions they can use in their next call"],
  "relatedMetrics": ["2-3 metrics they should track to measure improvement"]
}

Be specific, practical, and encouraging. Focus on improvement, not criticism.
Return ONLY valid JSON, no additional text."#,
    );

    prompt
}

/// User prompt for a coaching-advice request
pub fn build_advice_user_prompt(observation: &str) -> String {
    format!("Coaching observation: \"{}\"", observation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionScore, TalkRatio};

    fn sample_metrics() -> CoachingMetrics {
        CoachingMetrics {
            talk_ratio: TalkRatio {
                seller_pct: 60,
                customer_pct: 40,
                seller_words: 120,
                customer_words: 80,
            },
            question_score: QuestionScore {
                seller_questions: 4,
                open_questions: 3,
                score: 75,
            },
            observations: vec![],
        }
    }

    #[test]
    fn test_analysis_prompt_embeds_metrics_and_transcript() {
        let request = AnalysisRequest {
            transcript: "Alex: What matters most to you?".to_string(),
            account_name: Some("Acme".to_string()),
            seller_name: Some("Alex".to_string()),
            participants: Some(vec!["Alex".to_string(), "Jordan".to_string()]),
            ..Default::default()
        };

        let prompt = build_analysis_prompt(&request, &sample_metrics());

        assert!(prompt.contains("- Account: Acme"));
        assert!(prompt.contains("- Participants: Alex, Jordan"));
        assert!(prompt.contains("\"sellerPct\": 60"));
        assert!(prompt.contains("do not change these numbers"));
        assert!(prompt.contains("Transcript:\nAlex: What matters most to you?"));
    }

    #[test]
    fn test_analysis_prompt_defaults_missing_metadata() {
        let request = AnalysisRequest {
            transcript: "hello".to_string(),
            ..Default::default()
        };
        let prompt = build_analysis_prompt(&request, &sample_metrics());

        assert!(prompt.contains("- Account: Unknown"));
        assert!(prompt.contains("- Participants: Unknown"));
        assert!(prompt.contains("- Notes: None"));
    }

    #[test]
    fn test_improve_prompts_differ_by_kind() {
        let email = improve_system_prompt(DraftKind::Email);
        let script = improve_system_prompt(DraftKind::CallScript);
        assert!(email.contains("follow-up email"));
        assert!(script.contains("call script"));
        assert_ne!(email, script);
    }

    #[test]
    fn test_advice_prompt_includes_context_lines() {
        let context = AdviceContext {
            talk_ratio: Some(82),
            question_score: Some(40),
            avg_buy_likelihood: None,
        };
        let prompt = build_advice_system_prompt(Some("Alex"), &context);

        assert!(prompt.contains("Salesperson: Alex"));
        assert!(prompt.contains("Current talk ratio: 82% seller"));
        assert!(prompt.contains("Question quality score: 40%"));
        assert!(!prompt.contains("Average buy likelihood"));
    }

    #[test]
    fn test_advice_prompt_without_context() {
        let prompt = build_advice_system_prompt(None, &AdviceContext::default());
        assert!(!prompt.contains("Context:"));
        assert!(prompt.contains("Return ONLY valid JSON"));
    }
}
