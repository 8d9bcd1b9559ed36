//! View State Machine
//!
//! Decides which of {input, single report, comparison report} is displayed,
//! independent of any rendering layer. The machine holds at most one current
//! payload; entering a new state always replaces it wholesale. The submit
//! error is display-only state attached to the input view, not a machine
//! state of its own.

use crate::models::analysis::AnalysisResult;

/// The currently displayed view.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// The song input form.
    Input,
    /// A single critique report.
    SingleReport(AnalysisResult),
    /// Two critiques side by side.
    ComparisonReport(AnalysisResult, AnalysisResult),
}

/// The view plus the dismissible input-form error message.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    view: View,
    error: Option<String>,
}

impl ViewState {
    /// Start at the input form with no error.
    pub fn new() -> Self {
        Self {
            view: View::Input,
            error: None,
        }
    }

    /// The current view.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// The current input-form error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The single report currently displayed, if any.
    pub fn current_report(&self) -> Option<&AnalysisResult> {
        match &self.view {
            View::SingleReport(result) => Some(result),
            _ => None,
        }
    }

    /// A successful submission displays the new report.
    pub fn submit_succeeded(&mut self, result: AnalysisResult) {
        self.error = None;
        self.view = View::SingleReport(result);
    }

    /// A failed submission stays on the input form with the message attached.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.view = View::Input;
    }

    /// Return to the input form, discarding whatever was held.
    pub fn new_analysis(&mut self) {
        self.error = None;
        self.view = View::Input;
    }

    /// Display the canned example report. No analysis call is involved.
    pub fn show_example(&mut self, example: AnalysisResult) {
        self.error = None;
        self.view = View::SingleReport(example);
    }

    /// Display a report picked from history. Valid from any state.
    pub fn select_history_item(&mut self, item: AnalysisResult) {
        self.error = None;
        self.view = View::SingleReport(item);
    }

    /// Display two reports side by side. Valid from any state; the selection
    /// logic guarantees exactly two resolved items before this is reached.
    pub fn show_comparison(&mut self, first: AnalysisResult, second: AnalysisResult) {
        self.error = None;
        self.view = View::ComparisonReport(first, second);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
