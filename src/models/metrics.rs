use serde::{Deserialize, Serialize};

/// Percentage split of spoken words between seller and customer roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkRatio {
    /// Seller share of known words, 0-100
    pub seller_pct: u32,
    /// Customer share of known words, always 100 - seller_pct
    pub customer_pct: u32,
    pub seller_words: usize,
    pub customer_words: usize,
}

impl TalkRatio {
    /// Words attributed to either known role
    pub fn known_words(&self) -> usize {
        self.seller_words + self.customer_words
    }
}

/// Question-quality summary for the seller's side of the call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionScore {
    /// Seller utterances containing a question mark
    pub seller_questions: usize,
    /// Subset framed as open questions (what/how/why/...)
    pub open_questions: usize,
    /// round(open/seller * 100), or 0 when no seller questions
    pub score: u32,
}

/// Deterministic coaching metrics computed locally from the transcript.
///
/// The orchestrator treats these as ground truth and instructs the model
/// not to alter them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingMetrics {
    pub talk_ratio: TalkRatio,
    pub question_score: QuestionScore,
    /// Qualitative notes derived from the numbers
    pub observations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let metrics = CoachingMetrics {
            talk_ratio: TalkRatio {
                seller_pct: 60,
                customer_pct: 40,
                seller_words: 12,
                customer_words: 8,
            },
            question_score: QuestionScore {
                seller_questions: 2,
                open_questions: 1,
                score: 50,
            },
            observations: vec![],
        };

        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["talkRatio"]["sellerPct"], 60);
        assert_eq!(json["questionScore"]["sellerQuestions"], 2);
    }

    #[test]
    fn test_known_words() {
        let ratio = TalkRatio {
            seller_pct: 50,
            customer_pct: 50,
            seller_words: 7,
            customer_words: 3,
        };
        assert_eq!(ratio.known_words(), 10);
    }
}
