//! Formatters for screening results and the stored candidate listing

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::profiler::CandidateProfile;
use crate::storage::StoredProfile;
use colored::Colorize;
use unicode_segmentation::UnicodeSegmentation;

pub struct ProfileFormatter {
    format: OutputFormat,
    use_colors: bool,
}

impl ProfileFormatter {
    pub fn new(format: OutputFormat, use_colors: bool) -> Self {
        Self { format, use_colors }
    }

    /// Render a single screening result.
    pub fn format_profile(&self, profile: &CandidateProfile) -> Result<String> {
        match self.format {
            OutputFormat::Console => Ok(self.profile_console(profile)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(profile)?),
            OutputFormat::Markdown => Ok(Self::profile_markdown(profile)),
        }
    }

    /// Render the stored candidate listing.
    pub fn format_listing(&self, rows: &[StoredProfile]) -> Result<String> {
        match self.format {
            OutputFormat::Console => Ok(self.listing_console(rows)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Markdown => Ok(Self::listing_markdown(rows)),
        }
    }

    fn profile_console(&self, profile: &CandidateProfile) -> String {
        let mut out = String::new();

        let header = format!("Candidate profile: {}", profile.source_filename);
        out.push_str(&self.paint_header(&header));
        out.push('\n');

        out.push_str(&format!("  Name:   {}\n", profile.name));
        out.push_str(&format!("  Email:  {}\n", profile.email));
        out.push_str(&format!("  Phone:  {}\n", profile.phone));
        out.push_str(&format!(
            "  Target: {} ({})\n",
            profile.role, profile.job_category
        ));
        out.push_str(&format!(
            "  Fit score: {}\n",
            self.paint_score(profile.similarity)
        ));
        out.push_str(&format!(
            "  Matched skills: {}\n",
            join_or_dash(&profile.matched_skills)
        ));
        out.push_str(&format!(
            "  Skill gaps:     {}\n",
            join_or_dash(&profile.skill_gaps)
        ));

        out
    }

    fn listing_console(&self, rows: &[StoredProfile]) -> String {
        if rows.is_empty() {
            return "No stored candidates.\n".to_string();
        }

        let mut out = String::new();
        out.push_str(&self.paint_header(&format!("Stored candidates ({})", rows.len())));
        out.push('\n');
        out.push_str(&format!(
            "  {:<4} {:<22} {:<22} {:<22} {:>6}\n",
            "ID", "Name", "Role", "File", "Fit"
        ));

        for row in rows {
            out.push_str(&format!(
                "  {:<4} {:<22} {:<22} {:<22} {:>5.1}%\n",
                row.id,
                truncate(&row.profile.name, 20),
                truncate(&row.profile.role, 20),
                truncate(&row.profile.source_filename, 20),
                row.profile.similarity * 100.0,
            ));
        }

        out
    }

    fn profile_markdown(profile: &CandidateProfile) -> String {
        let mut out = String::new();
        out.push_str(&format!("## {}\n\n", profile.source_filename));
        out.push_str(&format!("- **Name:** {}\n", profile.name));
        out.push_str(&format!("- **Email:** {}\n", profile.email));
        out.push_str(&format!("- **Phone:** {}\n", profile.phone));
        out.push_str(&format!(
            "- **Target role:** {} ({})\n",
            profile.role, profile.job_category
        ));
        out.push_str(&format!(
            "- **Fit score:** {:.1}%\n",
            profile.similarity * 100.0
        ));
        out.push_str(&format!(
            "- **Matched skills:** {}\n",
            join_or_dash(&profile.matched_skills)
        ));
        out.push_str(&format!(
            "- **Skill gaps:** {}\n",
            join_or_dash(&profile.skill_gaps)
        ));
        out
    }

    fn listing_markdown(rows: &[StoredProfile]) -> String {
        let mut out = String::new();
        out.push_str("| ID | Name | Role | File | Fit |\n");
        out.push_str("|----|------|------|------|-----|\n");
        for row in rows {
            out.push_str(&format!(
                "| {} | {} | {} | {} | {:.1}% |\n",
                row.id,
                row.profile.name,
                row.profile.role,
                row.profile.source_filename,
                row.profile.similarity * 100.0,
            ));
        }
        out
    }

    fn paint_header(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_score(&self, similarity: f32) -> String {
        let rendered = format!("{:.1}%", similarity * 100.0);
        if !self.use_colors {
            return rendered;
        }
        if similarity >= 0.7 {
            rendered.green().bold().to_string()
        } else if similarity >= 0.4 {
            rendered.yellow().to_string()
        } else {
            rendered.red().to_string()
        }
    }
}

fn join_or_dash(skills: &[String]) -> String {
    if skills.is_empty() {
        "(none)".to_string()
    } else {
        skills.join(", ")
    }
}

fn truncate(text: &str, max_graphemes: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max_graphemes {
        text.to_string()
    } else {
        format!("{}…", graphemes[..max_graphemes].concat())
    }
}
