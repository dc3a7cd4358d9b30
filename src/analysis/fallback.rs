use crate::models::{
    AnalysisOutcome, AnalysisRequest, CoachingMetrics, CompetitorInsights, CompetitorMention,
    FollowUp, IntentBucket, IntentScore, Sentiment,
};

/// Competitor product names scanned for when the model is unavailable.
/// Static configuration, not runtime-configurable.
const COMPETITOR_KEYWORDS: [&str; 17] = [
    "salesforce",
    "hubspot",
    "gong",
    "chorus",
    "outreach",
    "salesloft",
    "zoho",
    "pipedrive",
    "freshsales",
    "close",
    "copper",
    "zendesk sell",
    "microsoft dynamics",
    "oracle",
    "sap",
    "competitor",
    "alternative",
];

/// Synthesize a static, clearly-labeled analysis when the external model
/// is unavailable or fails.
///
/// The coaching metrics are the real locally-computed ones; everything
/// qualitative is canned, plus a best-effort competitor keyword scan.
pub fn fallback_analysis(request: &AnalysisRequest, coaching: CoachingMetrics) -> AnalysisOutcome {
    let detected = scan_competitors(&request.transcript);

    let competitors = if detected.is_empty() {
        None
    } else {
        Some(
            detected
                .iter()
                .map(|name| CompetitorMention {
                    name: capitalize(name),
                    context: "Mentioned in transcript (fallback detection)".to_string(),
                    sentiment: Sentiment::Neutral,
                    quote: "Enable AI analysis for exact quotes".to_string(),
                })
                .collect(),
        )
    };

    let competitor_insights = detected.first().map(|first| CompetitorInsights {
        top_threat: Some(capitalize(first)),
        positioning: vec![
            "Add an API key for detailed counter-positioning suggestions".to_string(),
        ],
    });

    AnalysisOutcome {
        summary: "Transcript analyzed with a fallback model. Add an API key for richer insights."
            .to_string(),
        intent: IntentScore {
            buy_now: 25,
            buy_soon: 35,
            later: 25,
            no_fit: 15,
            primary: IntentBucket::BuySoon,
        },
        signals: vec!["No strong intent cues detected from the transcript.".to_string()],
        blockers: vec!["Budget, timeline, and decision-maker clarity are unconfirmed.".to_string()],
        next_steps: vec![
            "Confirm the decision timeline and stakeholders.".to_string(),
            "Share a tailored recap and proposed next meeting.".to_string(),
            "Align on success criteria for the buyer.".to_string(),
        ],
        follow_up: FollowUp {
            timing: "Within 48 hours".to_string(),
            email_draft: "Thanks again for the conversation. I wanted to recap key goals and \
                          confirm timeline and stakeholders before our next step."
                .to_string(),
            call_script: "I wanted to confirm the decision timeline and who needs to be involved \
                          so we can move forward."
                .to_string(),
        },
        coaching,
        competitors,
        competitor_insights,
    }
}

/// Case-insensitive substring scan of the transcript against the fixed
/// competitor keyword list, in list order
fn scan_competitors(transcript: &str) -> Vec<&'static str> {
    let lower = transcript.to_lowercase();
    COMPETITOR_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lower.contains(keyword))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
