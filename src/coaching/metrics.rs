use crate::models::{CoachingMetrics, QuestionScore, SpeakerRole, TalkRatio};

use super::{classify_speaker, extract_utterances, CoachingConfig};

/// Compute deterministic coaching metrics for a transcript.
///
/// Pure function: the same transcript and seller-name hint always yield
/// identical metrics, which is why downstream consumers treat these
/// numbers as ground truth.
pub fn compute_coaching_metrics(
    transcript: &str,
    seller_name: Option<&str>,
    config: &CoachingConfig,
) -> CoachingMetrics {
    let utterances = extract_utterances(transcript);

    let mut seller_words = 0usize;
    let mut customer_words = 0usize;
    let mut unknown_words = 0usize;
    let mut seller_questions = 0usize;
    let mut open_questions = 0usize;

    for utterance in &utterances {
        let role = classify_speaker(&utterance.speaker, seller_name, &config.keywords);
        let words = utterance.word_count();
        match role {
            SpeakerRole::Seller => seller_words += words,
            SpeakerRole::Customer => customer_words += words,
            SpeakerRole::Unknown => unknown_words += words,
        }

        if role == SpeakerRole::Seller && utterance.is_question() {
            seller_questions += 1;
            let lower = utterance.text.to_lowercase();
            if config
                .open_question_hints
                .iter()
                .any(|hint| lower.contains(hint))
            {
                open_questions += 1;
            }
        }
    }

    tracing::debug!(
        "Word counts: seller={}, customer={}, unknown={}",
        seller_words,
        customer_words,
        unknown_words
    );

    let known_words = seller_words + customer_words;
    let seller_pct = if known_words > 0 {
        (seller_words as f64 / known_words as f64 * 100.0).round() as u32
    } else {
        50
    };
    let customer_pct = 100 - seller_pct;

    let score = if seller_questions > 0 {
        (open_questions as f64 / seller_questions as f64 * 100.0).round() as u32
    } else {
        0
    };

    let mut observations = Vec::new();
    if known_words == 0 {
        observations.push("Speaker labels were not detected; talk ratio is estimated.".to_string());
    } else if seller_pct > 70 {
        observations.push("Seller talk ratio is high; aim for more buyer airtime.".to_string());
    }
    if seller_questions == 0 {
        observations.push("No seller questions detected; add more discovery.".to_string());
    }

    CoachingMetrics {
        talk_ratio: TalkRatio {
            seller_pct,
            customer_pct,
            seller_words,
            customer_words,
        },
        question_score: QuestionScore {
            seller_questions,
            open_questions,
            score,
        },
        observations,
    }
}
