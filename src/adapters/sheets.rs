use crate::domain::model::TabularResponse;
use crate::domain::ports::{ConfigProvider, TableSource};
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Read-only client for the spreadsheet values endpoint:
/// `GET {base}/v4/spreadsheets/{id}/values/{range}?key={key}`.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl SheetsClient {
    pub fn new(base_url: &str, spreadsheet_id: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            api_key: api_key.to_string(),
            timeout: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.base_url(), config.spreadsheet_id(), config.api_key())
            .with_timeout(config.timeout())
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn values_url(&self, range: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| SyncError::ConfigValidationError {
            field: "source.base_url".to_string(),
            message: format!("Invalid URL format: {}", e),
        })?;

        url.path_segments_mut()
            .map_err(|_| SyncError::ConfigValidationError {
                field: "source.base_url".to_string(),
                message: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values", range]);

        if !self.api_key.is_empty() {
            url.query_pairs_mut().append_pair("key", &self.api_key);
        }
        Ok(url)
    }
}

/// The URL with the key replaced, for logs.
fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    if url.query_pairs().any(|(name, _)| name == "key") {
        shown.set_query(Some("key=***"));
    }
    shown.to_string()
}

#[async_trait]
impl TableSource for SheetsClient {
    async fn fetch_table(&self, range: &str) -> Result<TabularResponse> {
        let url = self.values_url(range)?;
        tracing::debug!("Making API request to: {}", redacted(&url));

        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(SyncError::RetrievalError {
                status: status.as_u16(),
                description: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            });
        }

        let body = response.bytes().await?;
        let table: TabularResponse = serde_json::from_slice(&body)?;
        tracing::debug!("Range '{}' returned {} rows", range, table.values.len());
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_values_url_layout() {
        let client = SheetsClient::new("https://sheets.googleapis.com", "abc", "k3y");
        let url = client.values_url("projects").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc/values/projects?key=k3y"
        );
    }

    #[test]
    fn test_values_url_encodes_range_and_keeps_base_path() {
        let client = SheetsClient::new("http://localhost:8080/proxy/", "abc", "");
        let url = client.values_url("Sheet 1!A1:C9").unwrap();
        assert_eq!(url.path(), "/proxy/v4/spreadsheets/abc/values/Sheet%201!A1:C9");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_redacted_hides_key() {
        let client = SheetsClient::new("https://sheets.googleapis.com", "abc", "secret");
        let url = client.values_url("posts").unwrap();
        let shown = redacted(&url);
        assert!(!shown.contains("secret"));
        assert!(shown.ends_with("?key=***"));
    }

    #[tokio::test]
    async fn test_fetch_table_parses_values() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v4/spreadsheets/sheet/values/commons")
                .query_param("key", "k");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "range": "commons!A1:C3",
                    "majorDimension": "ROWS",
                    "values": [["id", "name", "parent_id"], ["c1", "Backend"]]
                }));
        });

        let client = SheetsClient::new(&server.base_url(), "sheet", "k");
        let table = client.fetch_table("commons").await.unwrap();

        api_mock.assert();
        assert_eq!(table.range, "commons!A1:C3");
        assert_eq!(table.values[1], vec!["c1".to_string(), "Backend".to_string()]);
    }

    #[tokio::test]
    async fn test_non_success_status_is_retrieval_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/v4/spreadsheets/sheet/values/projects");
            then.status(403);
        });

        let client = SheetsClient::new(&server.base_url(), "sheet", "bad");
        let err = client.fetch_table("projects").await.unwrap_err();

        api_mock.assert();
        match err {
            SyncError::RetrievalError {
                status,
                description,
            } => {
                assert_eq!(status, 403);
                assert_eq!(description, "Forbidden");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_serialization_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v4/spreadsheets/sheet/values/posts");
            then.status(200).body("<html>not json</html>");
        });

        let client = SheetsClient::new(&server.base_url(), "sheet", "k");
        let err = client.fetch_table("posts").await.unwrap_err();
        assert!(matches!(err, SyncError::SerializationError(_)));
    }
}
