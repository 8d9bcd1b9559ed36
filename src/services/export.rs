//! Report Export
//!
//! Renders a completed critique as a downloadable artifact. A pure formatting
//! transform of already-final data; nothing here feeds back into the analysis
//! flow.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::analysis::AnalysisResult;
use crate::utils::error::AppResult;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain serialized text
    Text,
    /// Markdown document
    Markdown,
    /// Serialized structured data
    Json,
}

impl ReportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
        }
    }
}

/// Render a critique in the requested format.
pub fn render(result: &AnalysisResult, format: ReportFormat) -> AppResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(result)),
        ReportFormat::Markdown => Ok(render_markdown(result)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// Download file name for a critique: `Song_Analysis_<safe_title>.<ext>`.
pub fn export_file_name(result: &AnalysisResult, format: ReportFormat) -> String {
    format!(
        "Song_Analysis_{}.{}",
        safe_title(&result.title),
        format.extension()
    )
}

/// Lowercase the title and replace anything non-alphanumeric with '_'.
fn safe_title(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str("Song Analysis Report\n");
    out.push_str("====================\n\n");
    out.push_str(&format!("Title: {}\n", result.title));
    out.push_str(&format!(
        "Overall Score: {:.1}/10.0\n\n",
        result.overall_score
    ));

    out.push_str("First Impression\n");
    out.push_str(&format!("{}\n\n", result.first_impression));

    out.push_str("Score Breakdown\n");
    for (title, category) in result.score_categories() {
        out.push_str(&format!("{}: {:.1}/10.0\n", title, category.score));
        out.push_str(&format!("{}\n\n", category.feedback));
    }

    for (heading, items) in [
        ("Strengths", &result.strengths),
        ("Weaknesses", &result.weaknesses),
        ("Suggestions", &result.suggestions),
    ] {
        out.push_str(&format!("{}\n", heading));
        for item in items {
            out.push_str(&format!("- {}\n", item));
        }
        out.push('\n');
    }

    out.push_str("Artist Comparisons\n");
    for comparison in &result.artist_comparisons {
        out.push_str(&format!("{}: {}\n", comparison.artist, comparison.reason));
    }
    out.push('\n');

    out.push_str("Suggested Genres\n");
    for genre in &result.suggested_genres {
        out.push_str(&format!("{}: {}\n", genre.name, genre.reason));
    }
    out.push('\n');

    out.push_str("Final Verdict\n");
    out.push_str(&format!("{}\n", result.final_verdict));
    out
}

fn render_markdown(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str("# Song Analysis Report\n\n");
    out.push_str(&format!("## {}\n\n", result.title));
    out.push_str(&format!(
        "**Overall Score:** {:.1}/10.0\n\n",
        result.overall_score
    ));
    out.push_str(&format!("*{}*\n\n", result.first_impression));

    out.push_str("## Score Breakdown\n\n");
    for (title, category) in result.score_categories() {
        out.push_str(&format!("### {}: {:.1}/10.0\n\n", title, category.score));
        out.push_str(&format!("{}\n\n", category.feedback));
    }

    for (heading, items) in [
        ("Strengths", &result.strengths),
        ("Weaknesses", &result.weaknesses),
        ("Suggestions", &result.suggestions),
    ] {
        out.push_str(&format!("## {}\n\n", heading));
        for item in items {
            out.push_str(&format!("- {}\n", item));
        }
        out.push('\n');
    }

    out.push_str("## Artist Comparisons\n\n");
    for comparison in &result.artist_comparisons {
        out.push_str(&format!(
            "- **{}** — {}\n",
            comparison.artist, comparison.reason
        ));
    }
    out.push('\n');

    out.push_str("## Suggested Genres\n\n");
    for genre in &result.suggested_genres {
        out.push_str(&format!("- **{}** — {}\n", genre.name, genre.reason));
    }
    out.push('\n');

    out.push_str("## Final Verdict\n\n");
    out.push_str(&format!("{}\n", result.final_verdict));
    out
}
