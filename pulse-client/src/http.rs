//! HTTP client for record backend API calls

use crate::{GatewayConfig, GatewayError, GatewayResult, QueryParams};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const PROJECT_ID_HEADER: &str = "x-project-id";
const PUBLIC_KEY_HEADER: &str = "x-public-key";

/// Response to a fetch call
#[derive(Debug, Clone, Deserialize)]
pub struct FetchResponse {
    #[serde(default)]
    pub data: Vec<Value>,
}

/// One created/updated record echoed back by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct MutationResult {
    pub data: Value,
}

/// Response to a create or update call
#[derive(Debug, Clone, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Vec<MutationResult>,
}

/// Response to a delete call
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a delete call
#[derive(Debug, Clone, Serialize)]
pub struct DeleteRequest {
    #[serde(rename = "RecordIds")]
    pub record_ids: Vec<Value>,
}

#[derive(Serialize)]
struct RecordsBody<'a> {
    records: &'a [Value],
}

/// HTTP client for making network requests to the record backend
#[derive(Debug, Clone)]
pub struct RecordHttpClient {
    client: Client,
    base_url: String,
    project_id: String,
    public_key: String,
    token: Option<String>,
}

impl RecordHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            public_key: config.public_key.clone(),
            token: config.token.clone(),
        })
    }

    /// Set the session token
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Clear the session token
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .request(method, &url)
            .header(PROJECT_ID_HEADER, &self.project_id)
            .header(PUBLIC_KEY_HEADER, &self.public_key);

        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        }

        request
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// POST without a body and decode the JSON response
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let response = self.request(reqwest::Method::POST, path).send().await?;
        Self::handle_response(response).await
    }

    /// GET and decode the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Self::handle_response(response).await
    }

    /// Fetch records from a table
    pub async fn fetch_records(
        &self,
        table: &str,
        params: &QueryParams,
    ) -> GatewayResult<FetchResponse> {
        self.post_json(&format!("/api/records/{}/fetch", table), params)
            .await
    }

    /// Create records in a table
    pub async fn create_records(
        &self,
        table: &str,
        records: &[Value],
    ) -> GatewayResult<MutationResponse> {
        let response: MutationResponse = self
            .post_json(&format!("/api/records/{}", table), &RecordsBody { records })
            .await?;
        Self::check_mutation(response)
    }

    /// Update records in a table
    pub async fn update_records(
        &self,
        table: &str,
        records: &[Value],
    ) -> GatewayResult<MutationResponse> {
        let response = self
            .request(reqwest::Method::PUT, &format!("/api/records/{}", table))
            .json(&RecordsBody { records })
            .send()
            .await?;
        let response: MutationResponse = Self::handle_response(response).await?;
        Self::check_mutation(response)
    }

    /// Delete records from a table by id
    pub async fn delete_records(&self, table: &str, ids: &[Value]) -> GatewayResult<()> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/api/records/{}", table))
            .json(&DeleteRequest {
                record_ids: ids.to_vec(),
            })
            .send()
            .await?;
        let response: DeleteResponse = Self::handle_response(response).await?;
        if !response.success {
            return Err(GatewayError::Backend(
                response.message.unwrap_or_else(|| "Delete failed".to_string()),
            ));
        }
        Ok(())
    }

    fn check_mutation(response: MutationResponse) -> GatewayResult<MutationResponse> {
        if !response.success {
            return Err(GatewayError::Backend(
                response
                    .message
                    .unwrap_or_else(|| "Request rejected".to_string()),
            ));
        }
        Ok(response)
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> GatewayResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return match status {
                StatusCode::UNAUTHORIZED => Err(GatewayError::Unauthorized),
                StatusCode::NOT_FOUND => Err(GatewayError::NotFound(text)),
                _ => Err(GatewayError::Backend(text)),
            };
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| GatewayError::InvalidResponse(format!("{}: {}", e, truncate(&bytes))))
    }
}

fn truncate(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.char_indices().nth(200) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delete_request_wire_name() {
        let body = DeleteRequest {
            record_ids: vec![json!(1), json!(2)],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, json!({"RecordIds": [1, 2]}));
    }

    #[test]
    fn test_mutation_response_defaults() {
        let response: MutationResponse = serde_json::from_value(json!({"success": true})).unwrap();
        assert!(response.success);
        assert!(response.results.is_empty());
        assert!(response.message.is_none());
    }
}
