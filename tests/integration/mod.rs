//! Integration Tests Module
//!
//! End-to-end scenarios for the critique flow: submission against a mocked
//! model, failure surfacing, the offline example path, best-effort history
//! persistence, and the history/comparison selection flow.

// Shared mock model and store implementations
mod support;

// Submission, normalization, and error-surfacing scenarios
mod analysis_flow_test;

// History persistence and comparison selection scenarios
mod history_flow_test;
