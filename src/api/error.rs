use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong around a search.
///
/// The `Display` text is exactly what the error banner shows, so the
/// transport details are kept in fields and only logged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Neither a file nor a URL was provided
    #[error("Please provide an image or a URL.")]
    MissingInput,

    /// The request never completed or the response could not be read
    #[error("Failed to connect to the server. Please ensure the backend is running.")]
    Connection { detail: String },

    /// The server answered with a non-success status
    #[error("{}", .message.as_deref().unwrap_or("An unknown error occurred."))]
    Server { message: Option<String> },

    /// The selected image could not be read from disk
    #[error("Could not read the selected image: {detail}")]
    ReadFile { path: PathBuf, detail: String },

    /// A product photo or preview could not be downloaded
    #[error("Failed to download {url}: {detail}")]
    Download { url: String, detail: String },
}

impl SearchError {
    pub fn connection(err: impl std::fmt::Display) -> Self {
        SearchError::Connection { detail: err.to_string() }
    }

    /// Server-side failure; an empty message counts as no message
    pub fn server(message: Option<String>) -> Self {
        SearchError::Server {
            message: message.filter(|m| !m.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_messages() {
        assert_eq!(
            SearchError::MissingInput.to_string(),
            "Please provide an image or a URL."
        );
        assert_eq!(
            SearchError::connection("dns error").to_string(),
            "Failed to connect to the server. Please ensure the backend is running."
        );
        assert_eq!(
            SearchError::server(Some("no matches".to_string())).to_string(),
            "no matches"
        );
    }

    #[test]
    fn test_server_message_fallback() {
        assert_eq!(SearchError::server(None).to_string(), "An unknown error occurred.");
        assert_eq!(
            SearchError::server(Some(String::new())).to_string(),
            "An unknown error occurred."
        );
    }
}
