//! Analysis Models
//!
//! Data structures for a structured song critique, matching the JSON shape the
//! analysis service is required to emit (camelCase on the wire).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scored evaluation dimension with its written feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisCategory {
    /// Score on a 0.0 to 10.0 scale, one decimal place.
    pub score: f64,
    /// Detailed feedback for this category (2-3 sentences).
    pub feedback: String,
}

/// A comparable artist with the reason for the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistComparison {
    pub artist: String,
    pub reason: String,
}

/// A genre that fits the song, with the reason for the suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedGenre {
    pub name: String,
    pub reason: String,
}

/// A complete song critique.
///
/// Created transiently from the analysis service's reply; `id` and `created_at`
/// are assigned by the history store once (and only if) the record is saved.
/// Records are always replaced wholesale, never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Document id, present only once persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Song title as supplied by the caller (the service's echo is discarded).
    pub title: String,
    /// Persistence timestamp, absent until saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Originality and uniqueness.
    pub creativity: AnalysisCategory,
    /// Ability to evoke emotion.
    pub emotional_impact: AnalysisCategory,
    /// Quality and artistry of the lyrics.
    pub lyricism: AnalysisCategory,
    /// Structure, flow, and technical construction.
    pub craftsmanship: AnalysisCategory,
    /// Potential to connect with a target audience.
    pub audience_appeal: AnalysisCategory,
    /// Viability for mainstream success and radio play.
    pub commercial_potential: AnalysisCategory,
    /// Weighted overall score, 0.0 to 10.0.
    pub overall_score: f64,
    /// One-sentence initial reaction.
    pub first_impression: String,
    /// 3-4 key strengths.
    pub strengths: Vec<String>,
    /// 3-4 key weaknesses or areas for improvement.
    pub weaknesses: Vec<String>,
    /// 3-4 concrete suggestions for improving the song.
    pub suggestions: Vec<String>,
    /// 2-3 comparable artists.
    pub artist_comparisons: Vec<ArtistComparison>,
    /// 2-3 genres that fit the song.
    pub suggested_genres: Vec<SuggestedGenre>,
    /// 3-5 sentence holistic verdict.
    pub final_verdict: String,
}

impl AnalysisResult {
    /// Apply [`normalize_score`] to the overall score and all six category scores.
    pub fn normalize_scores(&mut self) {
        self.overall_score = normalize_score(self.overall_score);
        self.creativity.score = normalize_score(self.creativity.score);
        self.emotional_impact.score = normalize_score(self.emotional_impact.score);
        self.lyricism.score = normalize_score(self.lyricism.score);
        self.craftsmanship.score = normalize_score(self.craftsmanship.score);
        self.audience_appeal.score = normalize_score(self.audience_appeal.score);
        self.commercial_potential.score = normalize_score(self.commercial_potential.score);
    }

    /// The six scored categories with their display titles, in report order.
    pub fn score_categories(&self) -> [(&'static str, &AnalysisCategory); 6] {
        [
            ("Creativity", &self.creativity),
            ("Emotional Impact", &self.emotional_impact),
            ("Lyricism", &self.lyricism),
            ("Craftsmanship", &self.craftsmanship),
            ("Audience Appeal", &self.audience_appeal),
            ("Commercial Potential", &self.commercial_potential),
        ]
    }
}

/// Normalize a model-reported score to the 0.0-10.0 scale.
///
/// Values above 10 are assumed to be on a 0-100 scale and divided by 10.
/// The result is rounded to one decimal place and clamped to [0.0, 10.0]
/// (a reply of 105 yields 10.0, a negative reply yields 0.0).
pub fn normalize_score(score: f64) -> f64 {
    let scaled = if score > 10.0 { score / 10.0 } else { score };
    let rounded = (scaled * 10.0).round() / 10.0;
    rounded.clamp(0.0, 10.0)
}
