//! Pipeline entry point: screen one resume against one role

use crate::error::Result;
use crate::processing::embeddings::{EmbeddingBackend, SimilarityScorer};
use crate::processing::extractor::EntityExtractor;
use crate::processing::normalizer::collapse_whitespace;
use crate::processing::skills::SkillTokenizer;
use crate::processing::taxonomy::RoleTaxonomy;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One screening result, assembled once and never mutated. Fields that could
/// not be extracted carry sentinel strings rather than being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source_filename: String,
    pub job_category: String,
    pub role: String,
    pub similarity: f32,
    pub matched_skills: Vec<String>,
    pub skill_gaps: Vec<String>,
}

/// Coordinates the profiling pipeline: normalization, entity extraction,
/// skill tokenization, taxonomy lookup, similarity scoring and gap analysis.
/// The taxonomy and embedding backend are injected at construction so tests
/// can substitute both.
pub struct Profiler {
    taxonomy: RoleTaxonomy,
    extractor: EntityExtractor,
    tokenizer: SkillTokenizer,
    scorer: SimilarityScorer,
}

impl Profiler {
    pub fn new(taxonomy: RoleTaxonomy, backend: Arc<dyn EmbeddingBackend>) -> Self {
        Self {
            taxonomy,
            extractor: EntityExtractor::new(),
            tokenizer: SkillTokenizer::new(),
            scorer: SimilarityScorer::new(backend),
        }
    }

    pub fn taxonomy(&self) -> &RoleTaxonomy {
        &self.taxonomy
    }

    /// Screen already-decoded resume text against a role. Unknown category
    /// or role fails before any extraction work; extraction misses degrade
    /// to sentinel values instead of failing.
    pub fn screen(
        &self,
        decoded_text: &str,
        source_filename: &str,
        job_category: &str,
        role: &str,
    ) -> Result<CandidateProfile> {
        // Taxonomy lookups first: without required skills there is nothing
        // to score or diff
        let roles = self.taxonomy.roles_in(job_category)?;
        if !roles.iter().any(|r| r == role) {
            return Err(crate::error::ProfilerError::UnknownRole(role.to_string()));
        }
        let skill_description = self.taxonomy.skills_for(role)?;

        let normalized = collapse_whitespace(decoded_text);
        let contact = self.extractor.extract(&normalized);
        debug!(
            "Extracted contact fields for {}: name={}",
            source_filename, contact.name
        );

        let candidate_skills = self.tokenizer.candidate_skills(decoded_text);
        let required_skills = self.tokenizer.role_skills(skill_description);
        let gap_report = self.tokenizer.detect_gaps(&required_skills, &candidate_skills);

        let similarity = self.scorer.score(decoded_text, skill_description)?;

        Ok(CandidateProfile {
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            source_filename: source_filename.to_string(),
            job_category: job_category.to_string(),
            role: role.to_string(),
            similarity,
            matched_skills: gap_report.matched,
            skill_gaps: gap_report.gaps,
        })
    }
}
