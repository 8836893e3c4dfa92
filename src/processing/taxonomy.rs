//! Static job category and role-skill lookup tables

use crate::error::{ProfilerError, Result};
use std::collections::BTreeMap;

/// Two-level lookup table: job category -> role names, role name -> canonical
/// skill description. Constructed once, never mutated afterwards, safe to
/// share across threads by reference.
#[derive(Debug, Clone)]
pub struct RoleTaxonomy {
    categories: BTreeMap<String, Vec<String>>,
    role_skills: BTreeMap<String, String>,
}

impl Default for RoleTaxonomy {
    fn default() -> Self {
        let categories = [
            (
                "Software Development",
                vec![
                    "Frontend Developer",
                    "Backend Developer",
                    "Full Stack Developer",
                ],
            ),
            ("Data & Analytics", vec!["Data Scientist", "Data Analyst"]),
            ("Cloud & DevOps", vec!["DevOps Engineer", "Cloud Engineer"]),
        ];

        let role_skills = [
            ("Frontend Developer", "HTML CSS JavaScript React UI UX"),
            ("Backend Developer", "Python Django Flask SQL APIs"),
            ("Full Stack Developer", "HTML CSS JS Node React Python SQL"),
            (
                "Data Scientist",
                "Python SQL Machine Learning Statistics Pandas Numpy",
            ),
            (
                "Data Analyst",
                "Python SQL Excel Tableau PowerBI Pandas Numpy",
            ),
            ("DevOps Engineer", "AWS Docker Kubernetes Linux CI/CD"),
            ("Cloud Engineer", "AWS Azure GCP Terraform DevOps"),
        ];

        Self::new(
            categories
                .into_iter()
                .map(|(c, roles)| {
                    (
                        c.to_string(),
                        roles.into_iter().map(|r| r.to_string()).collect(),
                    )
                })
                .collect(),
            role_skills
                .into_iter()
                .map(|(r, s)| (r.to_string(), s.to_string()))
                .collect(),
        )
    }
}

impl RoleTaxonomy {
    /// Build a taxonomy from explicit tables. Primarily used by tests that
    /// need a substitute taxonomy; production code uses `Default`.
    pub fn new(
        categories: BTreeMap<String, Vec<String>>,
        role_skills: BTreeMap<String, String>,
    ) -> Self {
        Self {
            categories,
            role_skills,
        }
    }

    /// All known category names, in stable order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(|c| c.as_str())
    }

    /// Role names belonging to a category.
    pub fn roles_in(&self, category: &str) -> Result<&[String]> {
        self.categories
            .get(category)
            .map(|roles| roles.as_slice())
            .ok_or_else(|| ProfilerError::UnknownCategory(category.to_string()))
    }

    /// Canonical skill description for a role.
    pub fn skills_for(&self, role: &str) -> Result<&str> {
        self.role_skills
            .get(role)
            .map(|s| s.as_str())
            .ok_or_else(|| ProfilerError::UnknownRole(role.to_string()))
    }
}
