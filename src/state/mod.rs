/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures and derived values (data.rs)
/// - The search lifecycle: results, loading, errors, threshold (search.rs)

pub mod data;
pub mod search;
