//! SQLite-backed candidate store

use crate::error::Result;
use crate::processing::profiler::CandidateProfile;
use chrono::Utc;
use log::info;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A persisted screening result. The store assigns the id and timestamp;
/// the embedded profile is stored exactly as assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub id: i64,
    pub recorded_at: String,
    pub profile: CandidateProfile,
}

/// Append-only store for assembled candidate profiles. Enumeration returns
/// rows in insertion order.
pub struct CandidateStore {
    conn: Connection,
}

impl CandidateStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS candidates (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                recorded_at TEXT NOT NULL,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                filename TEXT NOT NULL,
                job_category TEXT NOT NULL,
                role TEXT NOT NULL,
                similarity REAL NOT NULL,
                matched_skills TEXT NOT NULL,
                skill_gaps TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Append one profile, returning its assigned id.
    pub fn insert(&self, profile: &CandidateProfile) -> Result<i64> {
        let recorded_at = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO candidates
                (recorded_at, name, email, phone, filename, job_category, role,
                 similarity, matched_skills, skill_gaps)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                recorded_at,
                profile.name,
                profile.email,
                profile.phone,
                profile.source_filename,
                profile.job_category,
                profile.role,
                profile.similarity as f64,
                profile.matched_skills.join(", "),
                profile.skill_gaps.join(", "),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        info!("Stored candidate profile #{} ({})", id, profile.source_filename);
        Ok(id)
    }

    /// All stored profiles, oldest first.
    pub fn load_all(&self) -> Result<Vec<StoredProfile>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, recorded_at, name, email, phone, filename, job_category,
                    role, similarity, matched_skills, skill_gaps
             FROM candidates ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(StoredProfile {
                id: row.get(0)?,
                recorded_at: row.get(1)?,
                profile: CandidateProfile {
                    name: row.get(2)?,
                    email: row.get(3)?,
                    phone: row.get(4)?,
                    source_filename: row.get(5)?,
                    job_category: row.get(6)?,
                    role: row.get(7)?,
                    similarity: row.get::<_, f64>(8)? as f32,
                    matched_skills: split_skills(&row.get::<_, String>(9)?),
                    skill_gaps: split_skills(&row.get::<_, String>(10)?),
                },
            })
        })?;

        let mut profiles = Vec::new();
        for row in rows {
            profiles.push(row?);
        }
        Ok(profiles)
    }

    /// Number of stored profiles.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM candidates", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn split_skills(joined: &str) -> Vec<String> {
    joined
        .split(", ")
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
