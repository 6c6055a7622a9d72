//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server keeps no per-request or per-user data; the only thing handlers share
//! is the conversion pipeline, held behind a trait object so tests can swap in
//! stand-ins for the transform and format steps.

use std::sync::Arc;

use crate::svgr::{Pipeline, SvgrPipeline};

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<dyn Pipeline>,
}

impl AppState {
    #[must_use]
    pub fn new(pipeline: Arc<dyn Pipeline>) -> Self {
        Self { pipeline }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SvgrPipeline))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;
