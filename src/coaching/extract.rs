use crate::models::Utterance;

/// Longest speaker label the extractor will accept before a colon.
/// Bounds false-positive label detection on prose containing colons.
const MAX_LABEL_CHARS: usize = 50;

/// Split raw transcript text into ordered speaker/utterance pairs.
///
/// Lines are trimmed and empty lines dropped. A line yields a labeled
/// utterance when its first colon closes a 1-50 character label and is
/// followed by at least one character of text; anything else becomes an
/// unattributed utterance carrying the whole line.
pub fn extract_utterances(transcript: &str) -> Vec<Utterance> {
    transcript
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match split_labeled_line(line) {
            Some((speaker, text)) => Utterance::new(speaker, text),
            None => Utterance::unattributed(line),
        })
        .collect()
}

/// Try to split a trimmed line into (label, text) at its first colon
fn split_labeled_line(line: &str) -> Option<(&str, &str)> {
    let colon = line.find(':')?;
    let label = &line[..colon];

    let label_chars = label.chars().count();
    if label_chars == 0 || label_chars > MAX_LABEL_CHARS {
        return None;
    }

    let text = line[colon + 1..].trim();
    if text.is_empty() {
        return None;
    }

    Some((label.trim(), text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_labeled_lines() {
        let transcript = "Alex: What challenges are you facing?\nJordan: We need better reporting.";
        let utterances = extract_utterances(transcript);

        assert_eq!(utterances.len(), 2);
        assert_eq!(utterances[0].speaker, "Alex");
        assert_eq!(utterances[0].text, "What challenges are you facing?");
        assert_eq!(utterances[1].speaker, "Jordan");
    }

    #[test]
    fn test_preserves_transcript_order() {
        let transcript = "B: second speaker first\nA: then the other\nB: and back";
        let speakers: Vec<_> = extract_utterances(transcript)
            .into_iter()
            .map(|u| u.speaker)
            .collect();
        assert_eq!(speakers, vec!["B", "A", "B"]);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let transcript = "Alex: hello\r\n\r\n   \r\nJordan: hi\r\n";
        let utterances = extract_utterances(transcript);
        assert_eq!(utterances.len(), 2);
        assert_eq!(utterances[1].text, "hi");
    }

    #[test]
    fn test_unlabeled_line_is_unknown() {
        let utterances = extract_utterances("Just some text with no colons at all");
        assert_eq!(utterances.len(), 1);
        assert_eq!(utterances[0].speaker, "unknown");
        assert_eq!(utterances[0].text, "Just some text with no colons at all");
    }

    #[test]
    fn test_long_label_degrades_to_unknown() {
        let label = "x".repeat(51);
        let line = format!("{label}: this is prose, not a speaker label");
        let utterances = extract_utterances(&line);
        assert_eq!(utterances[0].speaker, "unknown");
        assert_eq!(utterances[0].text, line);
    }

    #[test]
    fn test_fifty_char_label_is_accepted() {
        let label = "x".repeat(50);
        let line = format!("{label}: still a label");
        let utterances = extract_utterances(&line);
        assert_eq!(utterances[0].speaker, label);
    }

    #[test]
    fn test_label_with_no_text_is_unknown() {
        let utterances = extract_utterances("Alex:   ");
        assert_eq!(utterances[0].speaker, "unknown");
        assert_eq!(utterances[0].text, "Alex:");
    }

    #[test]
    fn test_text_may_contain_colons() {
        let utterances = extract_utterances("Alex: the ratio is 3:1 right now");
        assert_eq!(utterances[0].speaker, "Alex");
        assert_eq!(utterances[0].text, "the ratio is 3:1 right now");
    }

    #[test]
    fn test_empty_transcript() {
        assert!(extract_utterances("").is_empty());
        assert!(extract_utterances("\n\n  \n").is_empty());
    }
}
