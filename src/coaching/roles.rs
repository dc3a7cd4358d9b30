use crate::models::SpeakerRole;

/// Keyword lists used to classify speaker labels
#[derive(Debug, Clone)]
pub struct RoleKeywords {
    /// Role titles that identify the selling side
    pub seller_hints: Vec<String>,
    /// Customer roles and common executive/functional titles
    pub customer_hints: Vec<String>,
}

impl Default for RoleKeywords {
    fn default() -> Self {
        Self {
            // Deliberately excludes the bare abbreviation "ae": as a
            // substring match it would tag any label containing those
            // two letters (e.g. "Michael", "Raelene") as the seller.
            seller_hints: vec![
                "sales rep".to_string(),
                "account executive".to_string(),
                "seller".to_string(),
                "host".to_string(),
                "presenter".to_string(),
            ],
            customer_hints: vec![
                "customer".to_string(),
                "client".to_string(),
                "prospect".to_string(),
                "buyer".to_string(),
                "cto".to_string(),
                "cfo".to_string(),
                "ceo".to_string(),
                "vp".to_string(),
                "director".to_string(),
                "manager".to_string(),
                "admin".to_string(),
                "engineer".to_string(),
                "analyst".to_string(),
            ],
        }
    }
}

/// Assign a role to a speaker label.
///
/// Priority order, first match wins:
/// 1. label contains the seller-name hint
/// 2. label contains a seller role keyword
/// 3. label contains a customer role/title keyword
/// 4. a seller hint exists, the label is someone else, and it starts
///    with a proper name - assume customer
/// 5. unknown
///
/// The hint match must dominate: a label containing both a customer
/// title and the seller's name is still the seller.
pub fn classify_speaker(
    speaker: &str,
    seller_name: Option<&str>,
    keywords: &RoleKeywords,
) -> SpeakerRole {
    let normalized = speaker.trim().to_lowercase();

    if let Some(name) = seller_name {
        if normalized.contains(&name.to_lowercase()) {
            return SpeakerRole::Seller;
        }
    }

    if keywords.seller_hints.iter().any(|h| normalized.contains(h)) {
        return SpeakerRole::Seller;
    }

    if keywords.customer_hints.iter().any(|h| normalized.contains(h)) {
        return SpeakerRole::Customer;
    }

    // Named speaker who isn't the seller - likely the customer
    if seller_name.is_some() {
        let first_word = speaker
            .split(|c: char| c.is_whitespace() || c == '(')
            .next()
            .unwrap_or("");
        if looks_like_proper_name(first_word) {
            return SpeakerRole::Customer;
        }
    }

    SpeakerRole::Unknown
}

/// One capitalized ASCII word of letters only, at least two characters
fn looks_like_proper_name(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    let mut rest_len = 0;
    for c in chars {
        if !c.is_ascii_lowercase() {
            return false;
        }
        rest_len += 1;
    }
    rest_len > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> RoleKeywords {
        RoleKeywords::default()
    }

    #[test]
    fn test_seller_name_hint_matches() {
        let role = classify_speaker("Alex Rivera", Some("Alex"), &keywords());
        assert_eq!(role, SpeakerRole::Seller);
    }

    #[test]
    fn test_seller_name_hint_is_case_insensitive() {
        let role = classify_speaker("ALEX (Host)", Some("alex"), &keywords());
        assert_eq!(role, SpeakerRole::Seller);
    }

    #[test]
    fn test_hint_dominates_customer_title() {
        // Label carries both a customer title and the seller's name;
        // the hint must win
        let role = classify_speaker("Alex (CTO)", Some("Alex"), &keywords());
        assert_eq!(role, SpeakerRole::Seller);
    }

    #[test]
    fn test_seller_role_keyword() {
        assert_eq!(
            classify_speaker("Sales Rep", None, &keywords()),
            SpeakerRole::Seller
        );
        assert_eq!(
            classify_speaker("Account Executive 2", None, &keywords()),
            SpeakerRole::Seller
        );
    }

    #[test]
    fn test_customer_title_keyword() {
        assert_eq!(
            classify_speaker("Jordan (CTO)", None, &keywords()),
            SpeakerRole::Customer
        );
        assert_eq!(
            classify_speaker("Prospect", None, &keywords()),
            SpeakerRole::Customer
        );
    }

    #[test]
    fn test_named_non_seller_defaults_to_customer() {
        let role = classify_speaker("Jordan", Some("Alex"), &keywords());
        assert_eq!(role, SpeakerRole::Customer);
    }

    #[test]
    fn test_named_speaker_without_hint_is_unknown() {
        // Without a seller hint there is nothing to contrast against
        let role = classify_speaker("Jordan", None, &keywords());
        assert_eq!(role, SpeakerRole::Unknown);
    }

    #[test]
    fn test_non_name_label_with_hint_is_unknown() {
        assert_eq!(
            classify_speaker("speaker 2", Some("Alex"), &keywords()),
            SpeakerRole::Unknown
        );
        assert_eq!(
            classify_speaker("UNKNOWN", Some("Alex"), &keywords()),
            SpeakerRole::Unknown
        );
    }

    #[test]
    fn test_name_containing_ae_is_not_seller() {
        // "michael" contains the letters "ae"; only whole role titles
        // mark a seller, so the label falls through to the named-customer rule
        assert_eq!(
            classify_speaker("Michael", Some("Alex"), &keywords()),
            SpeakerRole::Customer
        );
    }

    #[test]
    fn test_parenthesized_name_still_counts() {
        let role = classify_speaker("Jordan(she/her)", Some("Alex"), &keywords());
        assert_eq!(role, SpeakerRole::Customer);
    }
}
