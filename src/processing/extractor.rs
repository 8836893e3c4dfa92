//! Pattern-based contact field extraction

use regex::Regex;

/// Sentinel used when no name pattern matches.
pub const UNKNOWN_NAME: &str = "Unknown";
/// Sentinel used when an email or phone pattern finds nothing.
pub const NOT_FOUND: &str = "Not Found";

/// Contact fields recovered from a resume. Fields that could not be
/// extracted carry their sentinel value instead of being absent, so
/// downstream consumers always see a complete record.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub struct EntityExtractor {
    name_strategies: Vec<Regex>,
    email_regex: Regex,
    phone_regex: Regex,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor {
    pub fn new() -> Self {
        // Name strategies are tried in priority order until one matches.
        // Resume headers commonly render the name in capitals, so the
        // all-caps pattern goes first; the mixed-case pair is the fallback.
        let name_strategies = vec![
            Regex::new(r"\b([A-Z][A-Z]+(?:\s[A-Z][A-Z]+)+)\b").expect("Invalid uppercase name regex"),
            Regex::new(r"\b[A-Z][a-zA-Z]+\s[A-Z][a-zA-Z]+\b").expect("Invalid mixed-case name regex"),
        ];

        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        let phone_regex = Regex::new(r"\+?\d[\d\s\-]{8,}\d")
            .expect("Invalid phone regex");

        Self {
            name_strategies,
            email_regex,
            phone_regex,
        }
    }

    /// Extract name, email and phone from whitespace-normalized text.
    /// Only the first match in document order is used for each field;
    /// a field with no match degrades to its sentinel, never to an error.
    pub fn extract(&self, normalized: &str) -> ContactDetails {
        ContactDetails {
            name: self
                .extract_name(normalized)
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            email: self
                .first_match(&self.email_regex, normalized)
                .unwrap_or_else(|| NOT_FOUND.to_string()),
            phone: self
                .first_match(&self.phone_regex, normalized)
                .unwrap_or_else(|| NOT_FOUND.to_string()),
        }
    }

    fn extract_name(&self, text: &str) -> Option<String> {
        self.name_strategies
            .iter()
            .find_map(|strategy| self.first_match(strategy, text))
    }

    fn first_match(&self, pattern: &Regex, text: &str) -> Option<String> {
        pattern.find(text).map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_name_preferred() {
        let extractor = EntityExtractor::new();
        let details = extractor.extract("JOHN SMITH Senior Developer at Acme Corp");

        assert_eq!(details.name, "JOHN SMITH");
    }

    #[test]
    fn test_mixed_case_name_fallback() {
        let extractor = EntityExtractor::new();
        let details = extractor.extract("resume of Jane Doe, software engineer");

        assert_eq!(details.name, "Jane Doe");
    }

    #[test]
    fn test_email_and_phone_extraction() {
        let extractor = EntityExtractor::new();
        let details =
            extractor.extract("JOHN SMITH john.smith@mail.com +1 555-123-4567 Python SQL");

        assert_eq!(details.name, "JOHN SMITH");
        assert_eq!(details.email, "john.smith@mail.com");
        assert_eq!(details.phone, "+1 555-123-4567");
    }

    #[test]
    fn test_sentinels_on_empty_input() {
        let extractor = EntityExtractor::new();
        let details = extractor.extract("");

        assert_eq!(details.name, UNKNOWN_NAME);
        assert_eq!(details.email, NOT_FOUND);
        assert_eq!(details.phone, NOT_FOUND);
    }

    #[test]
    fn test_no_email_yields_sentinel() {
        let extractor = EntityExtractor::new();
        let details = extractor.extract("JANE DOE 12 years of Python experience");

        assert_eq!(details.email, NOT_FOUND);
    }

    #[test]
    fn test_first_match_wins() {
        let extractor = EntityExtractor::new();
        let details =
            extractor.extract("ALICE BROWN BOB GREEN alice@mail.com bob@mail.com");

        // Consecutive capitals merge into one leftmost match
        assert_eq!(details.name, "ALICE BROWN BOB GREEN");
        assert_eq!(details.email, "alice@mail.com");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = EntityExtractor::new();
        let text = "MARY JONES mary.jones@corp.io +44 7700 900123";

        assert_eq!(extractor.extract(text), extractor.extract(text));
    }
}
