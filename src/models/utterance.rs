use serde::{Deserialize, Serialize};

/// One speaker turn extracted from a transcript line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    /// Speaker label as written in the transcript, or "unknown"
    pub speaker: String,
    /// The spoken text - never rewritten by the pipeline
    pub text: String,
}

impl Utterance {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }

    /// Utterance for a line with no recognizable speaker label
    pub fn unattributed(text: impl Into<String>) -> Self {
        Self::new("unknown", text)
    }

    /// Number of whitespace-separated words in the text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Whether the text contains a literal question mark
    pub fn is_question(&self) -> bool {
        self.text.contains('?')
    }
}

/// Role assigned to a speaker label - derived per utterance, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerRole {
    Seller,
    Customer,
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        let u = Utterance::new("Alex", "What challenges are you facing?");
        assert_eq!(u.word_count(), 5);
        assert!(u.is_question());
    }

    #[test]
    fn test_word_count_collapses_whitespace() {
        let u = Utterance::unattributed("  spaced   out   text ");
        assert_eq!(u.speaker, "unknown");
        assert_eq!(u.word_count(), 3);
        assert!(!u.is_question());
    }
}
