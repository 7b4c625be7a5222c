/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the search API and the UI layer.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Product identifier as returned by the backend (database key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(id) => write!(f, "{}", id),
            ProductId::Text(id) => f.write_str(id),
        }
    }
}

/// A single visually-similar product returned by a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResult {
    /// Unique product identifier
    pub product_id: ProductId,
    /// Display name (may be long, the card truncates it)
    #[serde(default)]
    pub name: String,
    /// Product category (e.g., "Footwear")
    #[serde(default)]
    pub category: String,
    /// Remote URL of the product photo
    #[serde(default)]
    pub image_url: String,
    /// Distance to the query image: lower = more similar
    #[serde(default, deserialize_with = "score_or_zero")]
    pub similarity_score: f64,
}

/// The backend sends `null` when it has no distance for a product
fn score_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl ProductResult {
    /// Match percentage shown on the card and used by the threshold filter
    pub fn similarity_percent(&self) -> f64 {
        similarity_percent(self.similarity_score)
    }
}

/// Convert a distance score into a 0-100 match percentage.
///
/// `100 / (1 + score)`: 0 maps to 100%, larger distances approach 0%.
/// Negative scores are treated as 0.
pub fn similarity_percent(score: f64) -> f64 {
    100.0 / (1.0 + score.max(0.0))
}

/// Keep the results whose match percentage reaches the threshold,
/// preserving server order
pub fn filter_by_threshold(results: &[ProductResult], threshold: u8) -> Vec<&ProductResult> {
    let threshold = f64::from(threshold);
    results
        .iter()
        .filter(|product| product.similarity_percent() >= threshold)
        .collect()
}

/// Where the query image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Local image file, uploaded as `image_file`
    File(PathBuf),
    /// Remote image, sent as `image_url` for the server to download
    Url(String),
}

/// Snapshot of the uploader inputs handed to the search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    pub image_file: Option<PathBuf>,
    pub image_url: String,
}

impl SearchInput {
    /// Resolve to a single image source. A file wins over a URL and a
    /// blank URL counts as absent.
    pub fn into_source(self) -> Option<ImageSource> {
        if let Some(path) = self.image_file {
            return Some(ImageSource::File(path));
        }

        let url = self.image_url.trim();
        if url.is_empty() {
            None
        } else {
            Some(ImageSource::Url(url.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, score: f64) -> ProductResult {
        ProductResult {
            product_id: ProductId::Number(id),
            name: format!("Product {}", id),
            category: "Shoes".to_string(),
            image_url: format!("http://img.example.com/{}.jpg", id),
            similarity_score: score,
        }
    }

    #[test]
    fn test_percent_of_zero_distance_is_full_match() {
        assert_eq!(similarity_percent(0.0), 100.0);
        assert_eq!(similarity_percent(1.0), 50.0);
    }

    #[test]
    fn test_percent_is_in_range_and_strictly_decreasing() {
        let scores = [0.0, 0.01, 0.5, 1.0, 3.0, 10.0, 1000.0, 1e9];
        for pair in scores.windows(2) {
            let (a, b) = (similarity_percent(pair[0]), similarity_percent(pair[1]));
            assert!(a > b, "{} should be above {}", a, b);
        }
        for score in scores {
            let p = similarity_percent(score);
            assert!(p > 0.0 && p <= 100.0);
        }
    }

    #[test]
    fn test_negative_score_is_clamped() {
        assert_eq!(similarity_percent(-0.5), 100.0);
    }

    #[test]
    fn test_threshold_zero_keeps_everything_in_order() {
        let results = vec![product(1, 0.2), product(2, 5.0), product(3, 80.0)];
        let filtered = filter_by_threshold(&results, 0);
        let ids: Vec<_> = filtered.iter().map(|p| p.product_id.clone()).collect();
        assert_eq!(
            ids,
            vec![ProductId::Number(1), ProductId::Number(2), ProductId::Number(3)]
        );
    }

    #[test]
    fn test_threshold_hundred_keeps_exact_matches_only() {
        let results = vec![product(1, 0.0), product(2, 0.0001), product(3, 0.0)];
        let filtered = filter_by_threshold(&results, 100);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.similarity_score == 0.0));
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        // score 1.0 -> exactly 50%
        let results = vec![product(1, 1.0), product(2, 1.5)];
        let filtered = filter_by_threshold(&results, 50);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].product_id, ProductId::Number(1));
    }

    #[test]
    fn test_file_wins_over_url() {
        let input = SearchInput {
            image_file: Some(PathBuf::from("/tmp/shoe.png")),
            image_url: "http://example.com/a.jpg".to_string(),
        };
        assert_eq!(input.into_source(), Some(ImageSource::File(PathBuf::from("/tmp/shoe.png"))));
    }

    #[test]
    fn test_blank_input_has_no_source() {
        assert_eq!(SearchInput::default().into_source(), None);

        let input = SearchInput { image_file: None, image_url: "   ".to_string() };
        assert_eq!(input.into_source(), None);
    }

    #[test]
    fn test_url_is_trimmed() {
        let input = SearchInput { image_file: None, image_url: " http://example.com/a.jpg ".to_string() };
        assert_eq!(input.into_source(), Some(ImageSource::Url("http://example.com/a.jpg".to_string())));
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::Number(42).to_string(), "42");
        assert_eq!(ProductId::Text("sku-7".to_string()).to_string(), "sku-7");
    }
}
