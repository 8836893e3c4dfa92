//! Resume profiler: resume screening and skill-gap analysis tool

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;
mod storage;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, ModelAction};
use colored::Colorize;
use config::Config;
use error::{ProfilerError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::ProfileFormatter;
use processing::embeddings::{self, EmbeddingEngine};
use processing::profiler::Profiler;
use processing::taxonomy::RoleTaxonomy;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use storage::CandidateStore;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Screen {
            resumes,
            category,
            role,
            embedding,
            output,
            no_store,
        } => {
            screen_resumes(resumes, category, role, embedding, output, no_store, &config).await
        }

        Commands::Roles { category } => {
            let taxonomy = RoleTaxonomy::default();
            let categories: Vec<String> = match category {
                Some(c) => {
                    taxonomy.roles_in(&c)?; // fail early on unknown category
                    vec![c]
                }
                None => taxonomy.categories().map(|c| c.to_string()).collect(),
            };

            for name in categories {
                println!("{}", name.bold().cyan());
                for role in taxonomy.roles_in(&name)? {
                    println!("  {:<24} {}", role, taxonomy.skills_for(role)?.dimmed());
                }
            }
            Ok(())
        }

        Commands::Candidates { output } => {
            let format = cli::parse_output_format(&output).map_err(ProfilerError::InvalidInput)?;
            let store = CandidateStore::open(config.database_path())?;
            let rows = store.load_all()?;

            let formatter = ProfileFormatter::new(format, config.output.color_output);
            println!("{}", formatter.format_listing(&rows)?);
            Ok(())
        }

        Commands::Models { action } => match action {
            ModelAction::Download { model } => {
                let repo_id = model.unwrap_or_else(|| config.models.embedding_model.clone());
                println!("Downloading embedding model: {}", repo_id);
                let dir = embeddings::download_model(&repo_id, config.models_dir()).await?;
                println!("Model available at {}", dir.display());
                Ok(())
            }
            ModelAction::List => {
                let models = embeddings::list_downloaded_models(config.models_dir())?;
                if models.is_empty() {
                    println!("No models downloaded yet. Run `resume-profiler models download`.");
                } else {
                    for model in models {
                        println!("{}", model);
                    }
                }
                Ok(())
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Reset) => {
                let config = Config::default();
                config.save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
            _ => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ProfilerError::Configuration(e.to_string()))?;
                println!("{}", content);
                Ok(())
            }
        },
    }
}

async fn screen_resumes(
    resumes: Vec<PathBuf>,
    category: String,
    role: String,
    embedding: Option<String>,
    output: String,
    no_store: bool,
    config: &Config,
) -> Result<()> {
    for path in &resumes {
        cli::validate_file_extension(path, &["pdf", "txt", "md"])
            .map_err(|e| ProfilerError::InvalidInput(format!("Resume file: {}", e)))?;
    }
    let format = cli::parse_output_format(&output).map_err(ProfilerError::InvalidInput)?;

    info!("Screening {} resume(s) for {} / {}", resumes.len(), category, role);

    let model_name = embedding.unwrap_or_else(|| config.models.embedding_model.clone());
    let engine = EmbeddingEngine::load(&model_name, config.models_dir())?;
    let profiler = Profiler::new(RoleTaxonomy::default(), Arc::new(engine));

    let store = if no_store {
        None
    } else {
        Some(CandidateStore::open(config.database_path())?)
    };

    let mut input_manager = InputManager::new();
    let formatter = ProfileFormatter::new(format, config.output.color_output);

    let progress = ProgressBar::new(resumes.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .expect("Invalid progress template"),
    );

    let mut rendered = Vec::new();
    for path in &resumes {
        progress.set_message(path.display().to_string());

        let text = input_manager.extract_text(path).await?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let profile = profiler.screen(&text, &filename, &category, &role)?;

        if let Some(store) = &store {
            store.insert(&profile)?;
        }

        rendered.push(formatter.format_profile(&profile)?);
        progress.inc(1);
    }
    progress.finish_and_clear();

    for item in rendered {
        println!("{}", item);
    }

    Ok(())
}
