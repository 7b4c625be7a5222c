/// Search lifecycle state owned by the application
///
/// Results, loading flag, error slot and similarity threshold, plus a
/// generation counter so that only the latest search can settle.

use super::data::{filter_by_threshold, ImageSource, ProductResult, SearchInput};
use crate::api::SearchError;

/// Highest threshold the slider can select
pub const MAX_THRESHOLD: u8 = 100;

/// A search that has been started and is waiting for its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    /// Generation stamp to hand back in `finish`
    pub generation: u64,
    /// What to send to the server
    pub source: ImageSource,
}

#[derive(Debug, Default)]
pub struct SearchState {
    results: Vec<ProductResult>,
    is_loading: bool,
    error: Option<String>,
    similarity_threshold: u8,
    generation: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[ProductResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn similarity_threshold(&self) -> u8 {
        self.similarity_threshold
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Results that reach the current threshold, recomputed on every call
    pub fn filtered_results(&self) -> Vec<&ProductResult> {
        filter_by_threshold(&self.results, self.similarity_threshold)
    }

    pub fn set_similarity_threshold(&mut self, threshold: u8) {
        self.similarity_threshold = threshold.min(MAX_THRESHOLD);
    }

    /// Start a new search.
    ///
    /// Without any input only the error is set: no request, no loading
    /// state, results untouched. Otherwise the previous outcome is cleared
    /// and a new generation begins.
    pub fn begin(&mut self, input: SearchInput) -> Result<PendingSearch, SearchError> {
        let Some(source) = input.into_source() else {
            let err = SearchError::MissingInput;
            self.error = Some(err.to_string());
            return Err(err);
        };

        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        self.results.clear();

        Ok(PendingSearch {
            generation: self.generation,
            source,
        })
    }

    /// Settle the search stamped with `generation`.
    ///
    /// Returns false (and changes nothing) when a newer search has started
    /// since; the loading flag belongs to that newer search.
    pub fn finish(
        &mut self,
        generation: u64,
        outcome: Result<Vec<ProductResult>, SearchError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }

        self.is_loading = false;
        match outcome {
            Ok(results) => self.results = results,
            Err(err) => self.error = Some(err.to_string()),
        }
        true
    }
}
