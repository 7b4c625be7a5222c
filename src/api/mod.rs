/// Similarity-search API module
///
/// This module handles:
/// - Sending search requests (multipart upload or image URL)
/// - Parsing the JSON response envelope
/// - Downloading product photos and URL previews
/// - The error taxonomy shown to the user

pub mod client;
pub mod error;
pub mod response;

pub use client::SearchClient;
pub use error::SearchError;
