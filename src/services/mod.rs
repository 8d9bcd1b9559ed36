//! Services
//!
//! Business logic: the analysis pipeline, the best-effort history store, the
//! identity service, and report export.

pub mod analysis;
pub mod export;
pub mod history;
pub mod identity;

pub use analysis::{AnalysisRequest, AnalysisService, CritiqueModel, GeminiModel};
pub use export::ReportFormat;
pub use history::{FirestoreStore, HistoryStore};
pub use identity::{Identity, IdentityService};
