//! Versecritic - AI Song Critique Library
//!
//! Core functionality for structured song critiques:
//! - Analysis pipeline against a hosted critique model (request building,
//!   structured-output constraint, score normalization, error mapping)
//! - View and selection state machines, independent of any rendering layer
//! - Best-effort history persistence and optional identity
//! - Report export (text, markdown, structured data)

pub mod models;
pub mod selection;
pub mod services;
pub mod state;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use models::analysis::{
    normalize_score, AnalysisCategory, AnalysisResult, ArtistComparison, SuggestedGenre,
};
pub use models::example::example_analysis;
pub use models::settings::{AppConfig, PersistenceConfig};
pub use selection::ComparisonSelection;
pub use services::analysis::{AnalysisRequest, AnalysisService, CritiqueModel, GeminiModel};
pub use services::export::ReportFormat;
pub use services::history::{FirestoreStore, HistoryStore};
pub use services::identity::{Identity, IdentityService};
pub use state::App;
pub use utils::error::{AppError, AppResult};
pub use view::{View, ViewState};
