//! Skill tokenization and gap analysis

use regex::Regex;
use std::collections::HashSet;

/// Tokenizes resume text and role skill descriptions.
///
/// The two sides are intentionally asymmetric: the candidate side is a
/// lowercase membership set (duplicates collapsed, order irrelevant), while
/// the role side keeps the canonical ordering of the skill description so
/// gap reports read in the same order recruiters wrote the requirements.
pub struct SkillTokenizer {
    candidate_regex: Regex,
    role_regex: Regex,
}

/// Required-skill tokens split into matched and missing, both preserving the
/// role's canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGapReport {
    pub matched: Vec<String>,
    pub gaps: Vec<String>,
}

impl Default for SkillTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillTokenizer {
    pub fn new() -> Self {
        // '#' and '+' stay in the token alphabet for names like "c#"
        let candidate_regex =
            Regex::new(r"\b[A-Za-z#+]{2,20}\b").expect("Invalid candidate skill regex");
        let role_regex = Regex::new(r"\b[A-Za-z#+]{2,15}\b").expect("Invalid role skill regex");

        Self {
            candidate_regex,
            role_regex,
        }
    }

    /// Derive the candidate's skill set from the full resume text.
    pub fn candidate_skills(&self, text: &str) -> HashSet<String> {
        let lowered = text.to_lowercase();
        self.candidate_regex
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Tokenize a role's skill description into its canonical ordered
    /// sequence. Duplicates are retained here; gap analysis decides how to
    /// treat them.
    pub fn role_skills(&self, description: &str) -> Vec<String> {
        self.role_regex
            .find_iter(description)
            .map(|m| m.as_str().trim().to_lowercase())
            .collect()
    }

    /// Classify each required skill as matched or missing by exact lowercase
    /// membership in the candidate set. Repeated role tokens are reported
    /// once, at their first position.
    pub fn detect_gaps(
        &self,
        required: &[String],
        candidate: &HashSet<String>,
    ) -> SkillGapReport {
        let mut seen = HashSet::new();
        let mut matched = Vec::new();
        let mut gaps = Vec::new();

        for skill in required {
            if !seen.insert(skill.clone()) {
                continue;
            }
            if candidate.contains(skill) {
                matched.push(skill.clone());
            } else {
                gaps.push(skill.clone());
            }
        }

        SkillGapReport { matched, gaps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_skills_are_lowercased_and_deduplicated() {
        let tokenizer = SkillTokenizer::new();
        let skills = tokenizer.candidate_skills("Python SQL python Django SQL");

        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
        assert!(skills.contains("django"));
        assert_eq!(skills.len(), 3);
    }

    #[test]
    fn test_single_letter_tokens_are_skipped() {
        let tokenizer = SkillTokenizer::new();
        let skills = tokenizer.candidate_skills("R C Go ML");

        assert!(!skills.contains("r"));
        assert!(!skills.contains("c"));
        assert!(skills.contains("go"));
        assert!(skills.contains("ml"));
    }

    #[test]
    fn test_role_skills_preserve_order_and_duplicates() {
        let tokenizer = SkillTokenizer::new();
        let skills = tokenizer.role_skills("Python Django Flask SQL Python");

        assert_eq!(skills, vec!["python", "django", "flask", "sql", "python"]);
    }

    #[test]
    fn test_slash_separated_skills_split() {
        let tokenizer = SkillTokenizer::new();
        let skills = tokenizer.role_skills("AWS Docker Kubernetes Linux CI/CD");

        assert_eq!(skills, vec!["aws", "docker", "kubernetes", "linux", "ci", "cd"]);
    }

    #[test]
    fn test_gap_detection_partitions_required_skills() {
        let tokenizer = SkillTokenizer::new();
        let required = tokenizer.role_skills("Python Django Flask SQL APIs");
        let candidate: HashSet<String> =
            ["python", "sql"].iter().map(|s| s.to_string()).collect();

        let report = tokenizer.detect_gaps(&required, &candidate);

        assert_eq!(report.matched, vec!["python", "sql"]);
        assert_eq!(report.gaps, vec!["django", "flask", "apis"]);
    }

    #[test]
    fn test_duplicate_required_skill_reported_once() {
        let tokenizer = SkillTokenizer::new();
        let required = tokenizer.role_skills("SQL Python SQL");
        let candidate: HashSet<String> = ["sql".to_string()].into_iter().collect();

        let report = tokenizer.detect_gaps(&required, &candidate);

        assert_eq!(report.matched, vec!["sql"]);
        assert_eq!(report.gaps, vec!["python"]);
    }

    #[test]
    fn test_empty_candidate_set_yields_all_gaps() {
        let tokenizer = SkillTokenizer::new();
        let required = tokenizer.role_skills("HTML CSS JavaScript React UI UX");

        let report = tokenizer.detect_gaps(&required, &HashSet::new());

        assert!(report.matched.is_empty());
        assert_eq!(
            report.gaps,
            vec!["html", "css", "javascript", "react", "ui", "ux"]
        );
    }
}
