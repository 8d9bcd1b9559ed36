//! Shared test doubles for the integration scenarios.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use versecritic::models::analysis::{
    AnalysisCategory, AnalysisResult, ArtistComparison, SuggestedGenre,
};
use versecritic::services::analysis::{
    AnalysisRequest, AnalysisService, CritiqueModel, ModelError, ModelResult,
};
use versecritic::services::history::{HistoryError, HistoryResult, HistoryStore};
use versecritic::services::identity::IdentityService;
use versecritic::state::App;

fn category(score: f64) -> AnalysisCategory {
    AnalysisCategory {
        score,
        feedback: "feedback".to_string(),
    }
}

/// A schema-valid model reply, as the hosted service would emit it.
pub fn model_reply(title: &str, overall: f64) -> AnalysisResult {
    AnalysisResult {
        id: None,
        title: title.to_string(),
        created_at: None,
        creativity: category(8.0),
        emotional_impact: category(7.5),
        lyricism: category(8.5),
        craftsmanship: category(7.0),
        audience_appeal: category(8.0),
        commercial_potential: category(6.5),
        overall_score: overall,
        first_impression: "A promising track.".to_string(),
        strengths: vec!["s1".to_string(), "s2".to_string(), "s3".to_string()],
        weaknesses: vec!["w1".to_string(), "w2".to_string(), "w3".to_string()],
        suggestions: vec!["g1".to_string(), "g2".to_string(), "g3".to_string()],
        artist_comparisons: vec![ArtistComparison {
            artist: "Someone".to_string(),
            reason: "Similar mood.".to_string(),
        }],
        suggested_genres: vec![SuggestedGenre {
            name: "Folk".to_string(),
            reason: "Fits the tone.".to_string(),
        }],
        final_verdict: "Worth refining.".to_string(),
    }
}

/// A saved history item with an id and timestamp, as the store would return it.
pub fn history_item(id: &str, title: &str) -> AnalysisResult {
    let mut item = model_reply(title, 8.0);
    item.id = Some(id.to_string());
    item.created_at = Some(Utc::now());
    item
}

/// Critique model scripted with a fixed outcome, counting its calls.
pub struct ScriptedModel {
    outcome: Result<AnalysisResult, ModelError>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn succeeding(reply: AnalysisResult) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(reply),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: ModelError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CritiqueModel for ScriptedModel {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn generate(&self, _request: &AnalysisRequest) -> ModelResult<AnalysisResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// History store recording every save.
#[derive(Default)]
pub struct RecordingStore {
    saved: Mutex<Vec<(String, AnalysisResult)>>,
    listing: Mutex<Vec<AnalysisResult>>,
}

impl RecordingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_listing(listing: Vec<AnalysisResult>) -> Arc<Self> {
        let store = Self::default();
        *store.listing.lock().unwrap() = listing;
        Arc::new(store)
    }

    pub fn saved(&self) -> Vec<(String, AnalysisResult)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistoryStore for RecordingStore {
    async fn save(&self, owner_id: &str, analysis: &AnalysisResult) -> HistoryResult<String> {
        let mut saved = self.saved.lock().unwrap();
        saved.push((owner_id.to_string(), analysis.clone()));
        Ok(format!("doc-{}", saved.len()))
    }

    async fn list_for_owner(&self, _owner_id: &str) -> HistoryResult<Vec<AnalysisResult>> {
        Ok(self.listing.lock().unwrap().clone())
    }
}

/// History store whose every operation fails.
pub struct FailingStore;

#[async_trait]
impl HistoryStore for FailingStore {
    async fn save(&self, _owner_id: &str, _analysis: &AnalysisResult) -> HistoryResult<String> {
        Err(HistoryError::Rejected {
            status: 503,
            message: "store unavailable".to_string(),
        })
    }

    async fn list_for_owner(&self, _owner_id: &str) -> HistoryResult<Vec<AnalysisResult>> {
        Err(HistoryError::Network("connection refused".to_string()))
    }
}

/// Wire an app from a scripted model and an optional store.
pub fn app_with(
    model: Arc<ScriptedModel>,
    history: Option<Arc<dyn HistoryStore>>,
) -> App {
    App::new(
        AnalysisService::new(model),
        history,
        IdentityService::new(),
    )
}

/// A standard request for submission scenarios.
pub fn request(title: &str) -> AnalysisRequest {
    AnalysisRequest::new(title, "[Verse] la la", "", "").unwrap()
}
