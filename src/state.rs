//! Application State
//!
//! The orchestrator tying the services to the view machine. All services are
//! constructed once at startup and injected here; nothing is lazily
//! initialized behind a global.

use std::sync::Arc;

use crate::models::analysis::AnalysisResult;
use crate::models::example::example_analysis;
use crate::selection::ComparisonSelection;
use crate::services::analysis::{AnalysisRequest, AnalysisService};
use crate::services::history::HistoryStore;
use crate::services::identity::IdentityService;
use crate::utils::error::{AppError, AppResult};
use crate::view::ViewState;

/// Application state: services plus the view and selection machines.
pub struct App {
    analysis: AnalysisService,
    history: Option<Arc<dyn HistoryStore>>,
    identity: IdentityService,
    view: ViewState,
    selection: ComparisonSelection,
    analyzing: bool,
}

impl App {
    /// Wire the app from its injected services. `history` is `None` when the
    /// persistence feature is not configured.
    pub fn new(
        analysis: AnalysisService,
        history: Option<Arc<dyn HistoryStore>>,
        identity: IdentityService,
    ) -> Self {
        Self {
            analysis,
            history,
            identity,
            view: ViewState::new(),
            selection: ComparisonSelection::new(),
            analyzing: false,
        }
    }

    /// The current view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The current comparison selection.
    pub fn selection(&self) -> &ComparisonSelection {
        &self.selection
    }

    /// The identity service.
    pub fn identity(&self) -> &IdentityService {
        &self.identity
    }

    /// Whether saved history is available at all.
    pub fn history_enabled(&self) -> bool {
        self.history.is_some()
    }

    /// Submit a song for analysis.
    ///
    /// On success the report view shows the new critique and, for a signed-in
    /// identity, a best-effort save is attempted afterwards; a save failure is
    /// logged and never reverts the already-displayed report. On failure the
    /// input view keeps the error message for display.
    pub async fn submit(&mut self, request: AnalysisRequest) -> AppResult<()> {
        if self.analyzing {
            tracing::warn!("submission ignored: an analysis is already in progress");
            return Ok(());
        }

        self.analyzing = true;
        let outcome = self.analysis.analyze(&request).await;
        self.analyzing = false;

        match outcome {
            Ok(result) => {
                self.view.submit_succeeded(result.clone());
                if let (Some(store), Some(identity)) =
                    (self.history.as_ref(), self.identity.current())
                {
                    if let Err(err) = store.save(&identity.id, &result).await {
                        tracing::warn!(error = %err, "failed to save analysis to history");
                    }
                }
                Ok(())
            }
            Err(err) => {
                self.view.submit_failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Display the canned example report; no network involved.
    pub fn show_example(&mut self) {
        self.view.show_example(example_analysis());
    }

    /// Return to the input form.
    pub fn new_analysis(&mut self) {
        self.view.new_analysis();
    }

    /// Display a report picked from history.
    pub fn select_history_item(&mut self, item: AnalysisResult) {
        self.view.select_history_item(item);
    }

    /// Toggle a history item in the comparison selection.
    pub fn toggle_selection(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// Clear the comparison selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Open the comparison view for the two selected items, resolving them
    /// against the given history list. Returns whether the view changed; a
    /// selection that does not resolve aborts with a log line and no
    /// user-visible signal.
    pub fn compare_selected(&mut self, history: &[AnalysisResult]) -> bool {
        match self.selection.resolve(history) {
            Some((first, second)) => {
                self.view.show_comparison(first.clone(), second.clone());
                true
            }
            None => {
                tracing::warn!(
                    selected = self.selection.len(),
                    "comparison not opened: selection did not resolve to two items"
                );
                false
            }
        }
    }

    /// Fetch the signed-in identity's saved critiques, newest first.
    ///
    /// With history disabled or no identity this is an empty list, not an
    /// error. A fetch failure is logged and reported as a persistence error
    /// for the history surface only; it never touches the analysis flow.
    pub async fn load_history(&self) -> AppResult<Vec<AnalysisResult>> {
        let (store, identity) = match (self.history.as_ref(), self.identity.current()) {
            (Some(store), Some(identity)) => (store, identity),
            _ => return Ok(Vec::new()),
        };

        store.list_for_owner(&identity.id).await.map_err(|err| {
            tracing::warn!(error = %err, "failed to load analysis history");
            AppError::persistence("Could not load history.")
        })
    }
}
