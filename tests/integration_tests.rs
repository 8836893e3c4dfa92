//! Integration tests for the resume profiler

use resume_profiler::input::manager::InputManager;
use resume_profiler::processing::embeddings::EmbeddingBackend;
use resume_profiler::processing::taxonomy::RoleTaxonomy;
use resume_profiler::storage::CandidateStore;
use resume_profiler::{Profiler, Result};
use std::path::Path;
use std::sync::Arc;

/// Deterministic embedding stand-in so pipeline tests run without model
/// weights: letter-frequency vectors over ASCII letters.
struct LetterCounts;

impl EmbeddingBackend for LetterCounts {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut counts = vec![0.0f32; 26];
        for c in text.to_lowercase().chars() {
            if c.is_ascii_lowercase() {
                counts[(c as u8 - b'a') as usize] += 1.0;
            }
        }
        Ok(counts)
    }
}

fn test_profiler() -> Profiler {
    Profiler::new(RoleTaxonomy::default(), Arc::new(LetterCounts))
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();

    assert!(text.contains("JOHN SMITH"));
    assert!(text.contains("john.smith@mail.com"));
    assert!(text.contains("Flask"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();

    assert!(text.contains("JOHN SMITH"));
    assert!(text.contains("john.smith@mail.com"));
    // Markdown formatting must not leak into the text blob
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_extraction_caching() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let first = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();

    let result = manager.extract_text(Path::new("tests/fixtures/resume.xyz")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();

    let result = manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_screen_fixture_resume_end_to_end() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let profile = test_profiler()
        .screen(
            &text,
            "sample_resume.txt",
            "Software Development",
            "Backend Developer",
        )
        .unwrap();

    assert_eq!(profile.name, "JOHN SMITH");
    assert_eq!(profile.email, "john.smith@mail.com");
    assert_eq!(profile.phone, "+1 555-123-4567");
    assert!(profile.matched_skills.contains(&"python".to_string()));
    assert!(profile.matched_skills.contains(&"sql".to_string()));
    assert!(profile.matched_skills.contains(&"flask".to_string()));
    assert!(profile.skill_gaps.contains(&"django".to_string()));
    assert!(profile.similarity >= 0.0 && profile.similarity <= 1.0);
}

#[tokio::test]
async fn test_screen_and_store_round_trip() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let profile = test_profiler()
        .screen(
            &text,
            "sample_resume.md",
            "Software Development",
            "Backend Developer",
        )
        .unwrap();

    let store = CandidateStore::open_in_memory().unwrap();
    store.insert(&profile).unwrap();

    let stored = store.load_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].profile, profile);
}

#[test]
fn test_unknown_category_fails_before_any_work() {
    let err = test_profiler()
        .screen("any text", "cv.txt", "Basket Weaving", "Backend Developer")
        .unwrap_err();

    assert!(matches!(
        err,
        resume_profiler::ProfilerError::UnknownCategory(_)
    ));
}
