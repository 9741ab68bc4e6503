//! Crisis keyword detection.

/// Canonical crisis phrases. Matching is plain substring containment on the
/// lowercased message, so short entries such as `jump` also match inside
/// longer words.
pub const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "not worth living",
    "want to die",
    "hurt myself",
    "self harm",
    "cut myself",
    "overdose",
    "jump",
    "bridge",
    "crisis",
    "emergency",
    "harm myself",
    "end my life",
    "suicidal thoughts",
];

/// Fixed safety message returned for every crisis match. Never randomised.
pub const CRISIS_RESPONSE: &str = "I'm deeply concerned about what you're sharing with me. Your life has value and meaning, even when it doesn't feel that way right now.

🚨 IMMEDIATE HELP IS AVAILABLE:

• **National Suicide Prevention Lifeline: 988** (available 24/7)
• **Crisis Text Line: Text HOME to 741741**
• **Emergency Services: 911**
• **International Association for Suicide Prevention: https://www.iasp.info/resources/Crisis_Centres/**

You are not alone in this. There are trained professionals who want to help you through this difficult time. Please reach out to one of these resources immediately.

Your feelings are valid, but they are temporary. Help is available, and recovery is possible. 💙";

/// Returns true when `message` contains any crisis phrase, ignoring case.
pub fn is_crisis_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_every_keyword_case_insensitively() {
        for keyword in CRISIS_KEYWORDS {
            assert!(is_crisis_message(keyword), "{keyword}");
            assert!(is_crisis_message(&keyword.to_uppercase()), "{keyword}");
            assert!(is_crisis_message(&format!("lately I {keyword} again")));
        }
    }

    #[test]
    fn test_plain_messages_are_not_crisis() {
        assert!(!is_crisis_message("I had a long day at work"));
        assert!(!is_crisis_message(""));
    }

    #[test]
    fn test_substring_semantics() {
        // Containment, not tokenisation.
        assert!(is_crisis_message("my son loves jumping rope"));
    }

    #[test]
    fn test_response_lists_hotlines() {
        assert!(CRISIS_RESPONSE.contains("988"));
        assert!(CRISIS_RESPONSE.contains("741741"));
        assert!(CRISIS_RESPONSE.contains("911"));
    }
}
