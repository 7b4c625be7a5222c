/// HTTP client for the similarity-search API
///
/// One multipart POST per search, plus plain GETs for product photos
/// and URL previews.

use reqwest::multipart::{Form, Part};
use std::path::Path;

use super::error::SearchError;
use super::response::SearchResponse;
use crate::config::Config;
use crate::state::data::{ImageSource, ProductResult};

/// Multipart field carrying uploaded image bytes
const FIELD_IMAGE_FILE: &str = "image_file";
/// Multipart field carrying a remote image URL
const FIELD_IMAGE_URL: &str = "image_url";

/// Cheap to clone: `reqwest::Client` is reference-counted internally
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(config: &Config) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().unwrap_or_else(|e| {
            log::warn!("⚠️  Could not build tuned HTTP client ({}), using defaults", e);
            reqwest::Client::new()
        });

        SearchClient {
            http,
            endpoint: config.search_endpoint(),
        }
    }

    /// Full URL of the search endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one search request and return the ranked results
    ///
    /// The HTTP status is not inspected: the backend reports failures in
    /// the JSON envelope, and a body that is not an envelope is treated
    /// like a broken connection.
    pub async fn search(&self, source: ImageSource) -> Result<Vec<ProductResult>, SearchError> {
        let form = build_form(source).await?;

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(SearchError::connection)?;

        log::debug!("Search endpoint answered {}", response.status());

        let envelope: SearchResponse = response.json().await.map_err(SearchError::connection)?;
        envelope.into_outcome()
    }

    /// Download an image (product photo or preview) as raw bytes
    pub async fn fetch_image(&self, url: String) -> Result<Vec<u8>, SearchError> {
        let download_error = |e: reqwest::Error| SearchError::Download {
            url: url.clone(),
            detail: e.to_string(),
        };

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(download_error)?;

        let bytes = response.bytes().await.map_err(download_error)?;
        Ok(bytes.to_vec())
    }
}

/// Build the multipart body: exactly one of `image_file` or `image_url`
async fn build_form(source: ImageSource) -> Result<Form, SearchError> {
    match source {
        ImageSource::Url(url) => Ok(Form::new().text(FIELD_IMAGE_URL, url)),
        ImageSource::File(path) => {
            let read_error = |detail: String| SearchError::ReadFile {
                path: path.clone(),
                detail,
            };

            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| read_error(e.to_string()))?;

            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "upload".to_string());

            let part = Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(mime_for(&path))
                .map_err(|e| read_error(e.to_string()))?;

            Ok(Form::new().part(FIELD_IMAGE_FILE, part))
        }
    }
}

/// MIME type from the file extension, octet-stream when unknown
fn mime_for(path: &Path) -> &'static str {
    image::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream")
}
