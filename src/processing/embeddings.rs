//! Semantic similarity scoring via Model2Vec static embeddings

use crate::error::{ProfilerError, Result};
use hf_hub::api::tokio::Api;
use log::info;
use model2vec_rs::model::StaticModel;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::fs;

/// Embedding backend behind the similarity scorer. Kept as a trait so the
/// pipeline can run against a substitute backend in tests and the embedding
/// model can be swapped without touching the rest of the pipeline.
pub trait EmbeddingBackend: Send + Sync {
    /// Encode one text into a fixed-dimensional dense vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Production backend: a Model2Vec static embedding model, loaded once per
/// process. Encoding takes `&self`; the embedding cache is the engine's own
/// mutual-exclusion boundary, so a single engine can be shared across
/// concurrent profile computations.
pub struct EmbeddingEngine {
    model: StaticModel,
    cache: Mutex<HashMap<String, Vec<f32>>>,
    model_name: String,
}

impl EmbeddingEngine {
    /// Load a model from a local directory under `models_dir` if one exists,
    /// otherwise pass the name through to model2vec-rs as a Hugging Face
    /// repo id. Loading failure is fatal; there is no fallback scorer.
    pub fn load(model_name: &str, models_dir: &Path) -> Result<Self> {
        let start_time = Instant::now();

        let local = local_model_dir(models_dir, model_name);
        let source: PathBuf = if local.exists() {
            local
        } else {
            PathBuf::from(model_name)
        };

        info!("Loading embedding model from {}", source.display());
        let model = StaticModel::from_pretrained(&source, None, None, None)
            .map_err(|e| ProfilerError::ModelLoading(format!("Failed to load model '{}': {}", model_name, e)))?;
        info!("Embedding model loaded in {:.2?}", start_time.elapsed());

        Ok(Self {
            model,
            cache: Mutex::new(HashMap::new()),
            model_name: model_name.to_string(),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Number of cached embeddings.
    pub fn cache_size(&self) -> usize {
        self.cache.lock().expect("embedding cache poisoned").len()
    }
}

impl EmbeddingBackend for EmbeddingEngine {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut cache = self.cache.lock().expect("embedding cache poisoned");
        if let Some(cached) = cache.get(text) {
            return Ok(cached.clone());
        }

        let embedding = self.model.encode_single(text);
        cache.insert(text.to_string(), embedding.clone());
        Ok(embedding)
    }
}

/// Cosine similarity between two embedding vectors, in [-1, 1].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(ProfilerError::Embedding(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Ok(0.0);
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}

/// Scores resume text against a role's skill description with one shared
/// embedding backend. Scores are clamped to [0, 1]: skill text rarely embeds
/// to a negative cosine, and reporting stays consistent when it does.
pub struct SimilarityScorer {
    backend: Arc<dyn EmbeddingBackend>,
}

impl SimilarityScorer {
    pub fn new(backend: Arc<dyn EmbeddingBackend>) -> Self {
        Self { backend }
    }

    pub fn score(&self, text_a: &str, text_b: &str) -> Result<f32> {
        let a = self.backend.embed(text_a)?;
        let b = self.backend.embed(text_b)?;
        Ok(cosine_similarity(&a, &b)?.clamp(0.0, 1.0))
    }
}

/// Local directory a model repo downloads into.
pub fn local_model_dir(models_dir: &Path, model_name: &str) -> PathBuf {
    let dir_name = model_name.rsplit('/').next().unwrap_or(model_name);
    models_dir.join(dir_name)
}

/// Download a Model2Vec model from the Hugging Face Hub into `models_dir`,
/// returning the local directory. Already-downloaded models are reused.
pub async fn download_model(repo_id: &str, models_dir: &Path) -> Result<PathBuf> {
    let model_dir = local_model_dir(models_dir, repo_id);
    if model_dir.join("model.safetensors").exists() {
        info!("Model {} already downloaded", repo_id);
        return Ok(model_dir);
    }

    fs::create_dir_all(&model_dir).await?;

    let api = Api::new()
        .map_err(|e| ProfilerError::ModelLoading(format!("Failed to initialize HF API: {}", e)))?;
    let repo = api.model(repo_id.to_string());

    // tokenizer + weights + config are required by StaticModel; the README
    // is a nice-to-have
    let required_files = ["tokenizer.json", "model.safetensors", "config.json"];
    for file in &required_files {
        let fetched = repo.get(file).await.map_err(|e| {
            ProfilerError::ModelLoading(format!("Failed to download {}: {}", file, e))
        })?;
        fs::copy(&fetched, model_dir.join(file)).await?;
        info!("Downloaded {}", file);
    }

    if let Ok(readme) = repo.get("README.md").await {
        let _ = fs::copy(&readme, model_dir.join("README.md")).await;
    }

    Ok(model_dir)
}

/// List model directories present under `models_dir`.
pub fn list_downloaded_models(models_dir: &Path) -> Result<Vec<String>> {
    let mut models = Vec::new();

    if !models_dir.exists() {
        return Ok(models);
    }

    for entry in std::fs::read_dir(models_dir)? {
        let entry = entry?;
        if entry.path().join("model.safetensors").exists() {
            models.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    models.sort();
    Ok(models)
}
