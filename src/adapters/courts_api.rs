use crate::domain::model::Court;
use crate::domain::ports::CourtLookup;
use crate::utils::error::{FinderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Compacts a postcode for use as a query parameter: inner whitespace is
/// stripped and letters uppercased, e.g. "e14 4pu" -> "E144PU".
pub fn normalize_postcode(postcode: &str) -> String {
    postcode
        .split_whitespace()
        .collect::<String>()
        .to_uppercase()
}

/// HTTP client for the courts and tribunals finder service.
///
/// One GET per postcode; the response is a JSON array of the ten nearest
/// courts, sorted by ascending distance.
pub struct CourtsApiClient {
    client: Client,
    endpoint: String,
}

impl CourtsApiClient {
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl CourtLookup for CourtsApiClient {
    async fn nearest_courts(&self, postcode: &str) -> Result<Vec<Court>> {
        let postcode = normalize_postcode(postcode);

        tracing::debug!(
            "Making API request to: {} (postcode={})",
            self.endpoint,
            postcode
        );
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("postcode", postcode.as_str())])
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(FinderError::ApiStatusError {
                status: response.status().as_u16(),
                postcode,
            });
        }

        let courts: Vec<Court> = response.json().await?;
        Ok(courts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn normalizes_postcodes() {
        assert_eq!(normalize_postcode("E14 4PU"), "E144PU");
        assert_eq!(normalize_postcode("e14 4pu"), "E144PU");
        assert_eq!(normalize_postcode("  SW1A  2AA  "), "SW1A2AA");
        assert_eq!(normalize_postcode("E144PU"), "E144PU");
    }

    #[tokio::test]
    async fn decodes_courts_and_ignores_extra_fields() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search/results.json")
                .query_param("postcode", "E144PU");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {
                        "name": "Central London Employment Tribunal",
                        "lat": 51.5158158439741,
                        "lon": -0.118745425821452,
                        "slug": "central-london-employment-tribunal",
                        "types": ["Tribunal"],
                        "address": {"town": "London"},
                        "dx_number": "141420 Bloomsbury 7",
                        "distance": 1.29
                    },
                    {
                        "name": "Thames Magistrates' Court",
                        "types": ["Magistrates Court"],
                        "dx_number": null,
                        "distance": 2.2
                    }
                ]));
        });

        let client = CourtsApiClient::new(server.url("/search/results.json"), 5).unwrap();
        let courts = client.nearest_courts("E14 4PU").await.unwrap();

        api_mock.assert();
        assert_eq!(courts.len(), 2);
        assert_eq!(courts[0].name, "Central London Employment Tribunal");
        assert_eq!(courts[0].dx_number.as_deref(), Some("141420 Bloomsbury 7"));
        assert_eq!(courts[0].distance, 1.29);
        assert_eq!(courts[0].types, vec!["Tribunal".to_string()]);
        assert!(courts[1].dx_number.is_none());
    }

    #[tokio::test]
    async fn handles_missing_dx_number_and_empty_types() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search/results.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"name": "Bare Court", "distance": 4.1, "types": []}
                ]));
        });

        let client = CourtsApiClient::new(server.url("/search/results.json"), 5).unwrap();
        let courts = client.nearest_courts("SW1A 2AA").await.unwrap();

        assert_eq!(courts.len(), 1);
        assert!(courts[0].dx_number.is_none());
        assert!(courts[0].types.is_empty());
    }

    #[tokio::test]
    async fn surfaces_http_status_errors() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/search/results.json");
            then.status(500);
        });

        let client = CourtsApiClient::new(server.url("/search/results.json"), 5).unwrap();
        let err = client.nearest_courts("E14 4PU").await.unwrap_err();

        api_mock.assert();
        match err {
            FinderError::ApiStatusError { status, postcode } => {
                assert_eq!(status, 500);
                assert_eq!(postcode, "E144PU");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn surfaces_malformed_json_as_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search/results.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("not json at all");
        });

        let client = CourtsApiClient::new(server.url("/search/results.json"), 5).unwrap();
        let err = client.nearest_courts("E14 4PU").await.unwrap_err();

        assert!(matches!(err, FinderError::ApiError(_)));
    }
}
