/// Wire format of `POST /api/v1/search`
///
/// `{ "status": "success", "data": [...] }` or
/// `{ "status": "error", "message": "..." }`

use serde::Deserialize;

use super::error::SearchError;
use crate::state::data::ProductResult;

const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Option<Vec<ProductResult>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SearchResponse {
    /// Turn the envelope into the result set or a server error
    pub fn into_outcome(self) -> Result<Vec<ProductResult>, SearchError> {
        if self.status == STATUS_SUCCESS {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(SearchError::server(self.message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ProductId;

    fn parse(json: &str) -> Result<Vec<ProductResult>, SearchError> {
        serde_json::from_str::<SearchResponse>(json)
            .expect("valid envelope")
            .into_outcome()
    }

    #[test]
    fn test_success_keeps_server_order() {
        let results = parse(
            r#"{"status":"success","data":[
                {"product_id":3,"name":"Red sneaker","category":"Shoes","image_url":"http://x/3.jpg","similarity_score":0.1},
                {"product_id":1,"name":"Blue sneaker","category":"Shoes","image_url":"http://x/1.jpg","similarity_score":0.4},
                {"product_id":2,"name":"Boot","category":"Shoes","image_url":"http://x/2.jpg","similarity_score":0.9}
            ]}"#,
        )
        .unwrap();

        let ids: Vec<_> = results.iter().map(|p| p.product_id.clone()).collect();
        assert_eq!(
            ids,
            vec![ProductId::Number(3), ProductId::Number(1), ProductId::Number(2)]
        );
        assert_eq!(results[0].name, "Red sneaker");
    }

    #[test]
    fn test_error_message_is_passed_through() {
        let err = parse(r#"{"status":"error","message":"no matches"}"#).unwrap_err();
        assert_eq!(err.to_string(), "no matches");
    }

    #[test]
    fn test_error_without_message() {
        let err = parse(r#"{"status":"error"}"#).unwrap_err();
        assert_eq!(err.to_string(), "An unknown error occurred.");

        // e.g. a validation error body without our envelope
        let err = parse(r#"{"detail":"Unprocessable"}"#).unwrap_err();
        assert_eq!(err, SearchError::Server { message: None });
    }

    #[test]
    fn test_success_without_data_is_empty() {
        assert_eq!(parse(r#"{"status":"success"}"#).unwrap(), vec![]);
    }

    #[test]
    fn test_string_ids_null_scores_and_extra_columns() {
        let results = parse(
            r#"{"status":"success","data":[
                {"product_id":"sku-9","name":"Lamp","category":"Home","image_url":"http://x/9.jpg","similarity_score":null,"price":12.5}
            ]}"#,
        )
        .unwrap();

        assert_eq!(results[0].product_id, ProductId::Text("sku-9".to_string()));
        assert_eq!(results[0].similarity_score, 0.0);
        assert_eq!(results[0].similarity_percent(), 100.0);
    }
}
