//! Client for the site-planning DCIM system.
//!
//! The DCIM API is NetBox-style REST: resources live under
//! `api/<group>/<resource>/`, authentication is a static `Token` header and
//! list responses wrap the records in `{"count": .., "results": [..]}`.
//! Every resource group shares the same CRUD surface, so [`DcimApi`] is a
//! generic API over an endpoint chain and the named accessors on
//! [`DcimClient`] just pin the chain.

use reqwest::{Client, Method, Response};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DcimClientError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{method} request to {url} failed: status={status}, details={detail}")]
    Http {
        method: String,
        url: String,
        status: u16,
        detail: String,
    },
    #[error("Failed to parse response: {0}")]
    ResponseParsing(String),
    #[error("{0}")]
    InvalidRequest(String),
}

impl DcimClientError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DcimClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub struct DcimClient {
    address: String,
    api_token: Option<String>,
    http: Client,
}

impl DcimClient {
    pub fn new(address: &str, api_token: Option<&str>) -> Result<Self, DcimClientError> {
        Ok(DcimClient {
            address: address.trim_end_matches('/').to_string(),
            api_token: api_token.map(|t| t.to_string()),
            http: Client::builder().build()?,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn sites(&self) -> DcimApi<'_> {
        DcimApi::new(self, "dcim/sites")
    }

    pub fn racks(&self) -> DcimApi<'_> {
        DcimApi::new(self, "dcim/racks")
    }

    pub fn devices(&self) -> DcimApi<'_> {
        DcimApi::new(self, "dcim/devices")
    }

    async fn make_request(
        &self,
        method: Method,
        url: &str,
        query_params: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Response, DcimClientError> {
        let mut full_url = url.to_string();
        if !query_params.is_empty() {
            let query = serde_urlencoded::to_string(query_params)
                .map_err(|e| DcimClientError::InvalidRequest(e.to_string()))?;
            full_url = format!("{}?{}", full_url, query);
        }
        debug!("DCIM request: method={}, url={}", method, full_url);
        let mut builder = self.http.request(method.clone(), &full_url);
        if let Some(token) = &self.api_token {
            builder = builder.header("Authorization", format!("Token {}", token));
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let default_detail = status.to_string();
            let body_text = response.text().await.unwrap_or_default();
            return Err(DcimClientError::Http {
                method: method.to_string(),
                url: full_url,
                status: status.as_u16(),
                detail: extract_detail(&body_text, &default_detail),
            });
        }
        Ok(response)
    }
}

// NetBox reports errors as {"detail": "..."}.
fn extract_detail(body: &str, default_detail: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<Value>(body) {
        if let Some(detail) = parsed.get("detail").and_then(|v| v.as_str()) {
            return detail.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        default_detail.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Generic CRUD API over one DCIM endpoint chain.
pub struct DcimApi<'a> {
    client: &'a DcimClient,
    endpoint_chain: &'static str,
}

impl<'a> DcimApi<'a> {
    fn new(client: &'a DcimClient, endpoint_chain: &'static str) -> Self {
        DcimApi {
            client,
            endpoint_chain,
        }
    }

    fn base_url(&self) -> String {
        format!("{}/api/{}/", self.client.address, self.endpoint_chain)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}{}/", self.base_url(), id)
    }

    pub async fn all(&self, filters: &[(String, String)]) -> Result<Vec<Value>, DcimClientError> {
        // limit=0 disables pagination on the server side
        let mut query_params = vec![("limit".to_string(), "0".to_string())];
        query_params.extend_from_slice(filters);
        let response = self
            .client
            .make_request(Method::GET, &self.base_url(), &query_params, None)
            .await?;
        let body: Value = response
            .json()
            .await
            .map_err(|e| DcimClientError::ResponseParsing(e.to_string()))?;
        match body.get("results").and_then(|v| v.as_array()) {
            Some(results) => Ok(results.clone()),
            None => Err(DcimClientError::ResponseParsing(
                "list response did not include a \"results\" array".to_string(),
            )),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Value, DcimClientError> {
        let response = self
            .client
            .make_request(Method::GET, &self.record_url(id), &[], None)
            .await?;
        response
            .json()
            .await
            .map_err(|e| DcimClientError::ResponseParsing(e.to_string()))
    }

    pub async fn create(&self, obj: &Value) -> Result<Value, DcimClientError> {
        let response = self
            .client
            .make_request(Method::POST, &self.base_url(), &[], Some(obj))
            .await?;
        response
            .json()
            .await
            .map_err(|e| DcimClientError::ResponseParsing(e.to_string()))
    }

    /// The object's `id` attribute addresses the record to replace.
    pub async fn update(&self, obj: &Value) -> Result<(), DcimClientError> {
        let id = match obj.get("id") {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => {
                return Err(DcimClientError::InvalidRequest(
                    "Cannot update object missing \"id\" attribute value".to_string(),
                ))
            }
        };
        self.client
            .make_request(Method::PUT, &self.record_url(&id), &[], Some(obj))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), DcimClientError> {
        self.client
            .make_request(Method::DELETE, &self.record_url(id), &[], None)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_netbox_detail_field() {
        let detail = extract_detail("{\"detail\": \"Not found.\"}", "404 Not Found");
        assert_eq!(detail, "Not found.");
    }

    #[test]
    fn unparseable_body_returned_raw() {
        let detail = extract_detail("<html>boom</html>", "500 Internal Server Error");
        assert_eq!(detail, "<html>boom</html>");
    }

    #[test]
    fn empty_body_uses_status_line() {
        let detail = extract_detail("", "404 Not Found");
        assert_eq!(detail, "404 Not Found");
    }

    #[test]
    fn client_trims_trailing_slashes() {
        let client = DcimClient::new("https://dcim.example.com/", Some("t0k3n")).unwrap();
        assert_eq!(client.address(), "https://dcim.example.com");
    }
}
