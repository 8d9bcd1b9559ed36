//! Analysis Request Builder
//!
//! Pure, synchronous construction of the two halves of an analysis request:
//! the natural-language instruction block and the strict response schema the
//! service is contractually required to emit. The schema is the enforcement
//! mechanism; no prompt text is permitted to override it.

use std::collections::HashMap;

use serde::Serialize;

use crate::utils::error::{AppError, AppResult};

/// Maximum accepted song title length.
pub const MAX_TITLE_LEN: usize = 100;
/// Maximum accepted lyrics length.
pub const MAX_LYRICS_LEN: usize = 10_000;
/// Maximum accepted music description length.
pub const MAX_DESCRIPTION_LEN: usize = 500;
/// Maximum accepted genre length.
pub const MAX_GENRE_LEN: usize = 50;

/// Validated input for one analysis submission.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub title: String,
    pub lyrics: String,
    pub music_description: String,
    pub genre: String,
}

impl AnalysisRequest {
    /// Validate and build a request. Title and lyrics are required; empty or
    /// whitespace-only values are rejected before anything is sent anywhere.
    pub fn new(
        title: impl Into<String>,
        lyrics: impl Into<String>,
        music_description: impl Into<String>,
        genre: impl Into<String>,
    ) -> AppResult<Self> {
        let title = title.into().trim().to_string();
        let lyrics = lyrics.into().trim().to_string();
        let music_description = music_description.into().trim().to_string();
        let genre = genre.into().trim().to_string();

        if title.is_empty() {
            return Err(AppError::validation("Please provide a song title."));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(AppError::validation(format!(
                "The song title must be {} characters or fewer.",
                MAX_TITLE_LEN
            )));
        }
        if lyrics.is_empty() {
            return Err(AppError::validation("Please provide the song lyrics."));
        }
        if lyrics.chars().count() > MAX_LYRICS_LEN {
            return Err(AppError::validation(format!(
                "The lyrics must be {} characters or fewer.",
                MAX_LYRICS_LEN
            )));
        }
        if music_description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(AppError::validation(format!(
                "The music description must be {} characters or fewer.",
                MAX_DESCRIPTION_LEN
            )));
        }
        if genre.chars().count() > MAX_GENRE_LEN {
            return Err(AppError::validation(format!(
                "The genre must be {} characters or fewer.",
                MAX_GENRE_LEN
            )));
        }

        Ok(Self {
            title,
            lyrics,
            music_description,
            genre,
        })
    }

    /// The instruction block sent alongside the response schema. Embeds all
    /// four fields verbatim; optional fields render as "Not provided" so the
    /// service analyzes lyrics alone when no description is given.
    pub fn instruction(&self) -> String {
        let genre = if self.genre.is_empty() {
            "Not provided"
        } else {
            self.genre.as_str()
        };
        let music_description = if self.music_description.is_empty() {
            "Not provided."
        } else {
            self.music_description.as_str()
        };

        format!(
            "You are a world-class A&R executive and music critic with a deep understanding of \
             music theory, songwriting, and market trends.\n\
             Analyze the following song. Provide a detailed, constructive, and unbiased \
             critique. Your feedback should be professional and helpful for the artist.\n\n\
             **Rules for Analysis:**\n\
             - **Be Forgiving with User Input:** The user may provide song structure labels like \
             \"[Verse]\", \"Verse:\", \"V1\", etc. Recognize these as valid. Similarly, accept \
             common synonyms like \"Hook\" for \"Chorus\". Do not penalize for formatting \
             variations.\n\
             - **Music Description Context:** The user's music description may be simple (e.g., \
             \"upbeat country\") or complex. Use whatever information is provided as context. A \
             simple description is just as valid as a technical one. If no description is \
             provided, analyze based on lyrics alone.\n\
             - **Genre Context:** If a genre is provided by the user, use it as the primary lens \
             for your analysis. Evaluate how well the song fits that genre. Always provide 2-3 \
             genre suggestions, even if the user provided one.\n\
             - **Scoring:** All scores MUST be on a 0.0 to 10.0 scale, with one decimal place. \
             The overall score should be a weighted average, not a simple average.\n\
             - **Final Verdict:** The verdict should be a balanced summary, considering artistic \
             merit, commercial potential, and niche appeal, not just \"Grammy potential\".\n\n\
             **Song Title:** \"{title}\"\n\n\
             **Provided Genre (if any):** {genre}\n\n\
             **Lyrics:**\n\
             ---\n\
             {lyrics}\n\
             ---\n\n\
             **Music Description (for context):**\n\
             ---\n\
             {music_description}\n\
             ---\n\n\
             Evaluate the song based on the defined criteria in the JSON schema.",
            title = self.title,
            genre = genre,
            lyrics = self.lyrics,
            music_description = music_description,
        )
    }
}

/// JSON Schema subset understood by the analysis service's structured-output
/// constraint.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, ResponseSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,
}

impl ResponseSchema {
    /// Create a string schema
    pub fn string(description: Option<&str>) -> Self {
        Self {
            schema_type: "STRING".to_string(),
            description: description.map(|s| s.to_string()),
            properties: None,
            required: None,
            items: None,
        }
    }

    /// Create a number schema
    pub fn number(description: Option<&str>) -> Self {
        Self {
            schema_type: "NUMBER".to_string(),
            description: description.map(|s| s.to_string()),
            properties: None,
            required: None,
            items: None,
        }
    }

    /// Create an object schema
    pub fn object(
        description: Option<&str>,
        properties: HashMap<String, ResponseSchema>,
        required: Vec<&str>,
    ) -> Self {
        Self {
            schema_type: "OBJECT".to_string(),
            description: description.map(|s| s.to_string()),
            properties: Some(properties),
            required: Some(required.into_iter().map(|s| s.to_string()).collect()),
            items: None,
        }
    }

    /// Create an array schema
    pub fn array(description: Option<&str>, items: ResponseSchema) -> Self {
        Self {
            schema_type: "ARRAY".to_string(),
            description: description.map(|s| s.to_string()),
            properties: None,
            required: None,
            items: Some(Box::new(items)),
        }
    }
}

/// Schema for one scored category.
fn category_schema(description: &str) -> ResponseSchema {
    let mut properties = HashMap::new();
    properties.insert(
        "score".to_string(),
        ResponseSchema::number(Some("A score from 0.0 to 10.0, can be a float.")),
    );
    properties.insert(
        "feedback".to_string(),
        ResponseSchema::string(Some("Detailed feedback for this category (2-3 sentences).")),
    );
    ResponseSchema::object(Some(description), properties, vec!["score", "feedback"])
}

/// Schema for a `{name-or-artist, reason}` pair.
fn pair_schema(subject_field: &str, subject_description: &str, reason_description: &str) -> ResponseSchema {
    let mut properties = HashMap::new();
    properties.insert(
        subject_field.to_string(),
        ResponseSchema::string(Some(subject_description)),
    );
    properties.insert(
        "reason".to_string(),
        ResponseSchema::string(Some(reason_description)),
    );
    ResponseSchema::object(None, properties, vec![subject_field, "reason"])
}

/// The full output-shape constraint for an analysis reply: every critique
/// field with per-field type and cardinality requirements.
pub fn analysis_response_schema() -> ResponseSchema {
    let mut properties = HashMap::new();
    properties.insert(
        "title".to_string(),
        ResponseSchema::string(Some("The title of the song being analyzed.")),
    );
    properties.insert(
        "creativity".to_string(),
        category_schema("Evaluation of the song's originality and uniqueness."),
    );
    properties.insert(
        "emotionalImpact".to_string(),
        category_schema("Evaluation of the song's ability to evoke emotion."),
    );
    properties.insert(
        "lyricism".to_string(),
        category_schema("Evaluation of the quality and artistry of the lyrics."),
    );
    properties.insert(
        "craftsmanship".to_string(),
        category_schema("Evaluation of the song's structure, flow, and technical construction."),
    );
    properties.insert(
        "audienceAppeal".to_string(),
        category_schema("Evaluation of the song's potential to connect with a target audience."),
    );
    properties.insert(
        "commercialPotential".to_string(),
        category_schema("Evaluation of the song's viability for mainstream success and radio play."),
    );
    properties.insert(
        "overallScore".to_string(),
        ResponseSchema::number(Some(
            "The overall weighted average score for the song, from 0.0 to 10.0.",
        )),
    );
    properties.insert(
        "firstImpression".to_string(),
        ResponseSchema::string(Some("A concise, one-sentence initial reaction to the song.")),
    );
    properties.insert(
        "strengths".to_string(),
        ResponseSchema::array(
            Some("A list of 3-4 key strengths of the song, as bullet points."),
            ResponseSchema::string(None),
        ),
    );
    properties.insert(
        "weaknesses".to_string(),
        ResponseSchema::array(
            Some("A list of 3-4 key weaknesses or areas for improvement, as bullet points."),
            ResponseSchema::string(None),
        ),
    );
    properties.insert(
        "suggestions".to_string(),
        ResponseSchema::array(
            Some("A list of 3-4 concrete suggestions for improving the song, as bullet points."),
            ResponseSchema::string(None),
        ),
    );
    properties.insert(
        "artistComparisons".to_string(),
        ResponseSchema::array(
            Some("A list of 2-3 artists that the song is similar to."),
            pair_schema(
                "artist",
                "The name of a comparable artist.",
                "A brief explanation for the comparison.",
            ),
        ),
    );
    properties.insert(
        "suggestedGenres".to_string(),
        ResponseSchema::array(
            Some("A list of 2-3 genres that fit the song."),
            pair_schema(
                "name",
                "The name of a suitable genre.",
                "A brief explanation for the genre suggestion.",
            ),
        ),
    );
    properties.insert(
        "finalVerdict".to_string(),
        ResponseSchema::string(Some(
            "A final, summary paragraph (3-5 sentences) providing a holistic verdict on the \
             song that balances artistic merit, commercial potential, and niche appeal.",
        )),
    );

    ResponseSchema::object(
        None,
        properties,
        vec![
            "title",
            "creativity",
            "emotionalImpact",
            "lyricism",
            "craftsmanship",
            "audienceAppeal",
            "commercialPotential",
            "overallScore",
            "firstImpression",
            "strengths",
            "weaknesses",
            "suggestions",
            "artistComparisons",
            "suggestedGenres",
            "finalVerdict",
        ],
    )
}
