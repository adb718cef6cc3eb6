//! Descriptor catalog API. Descriptors travel as YAML documents.

use super::{build_relative_endpoint, TncoClient, TncoClientError, TncoRequest};
use serde_json::Value;

const ENDPOINT: &str = "api/catalog/descriptors";
const YAML_ACCEPT: &str = "application/yaml,application/json";

pub struct DescriptorsApi<'a> {
    client: &'a TncoClient,
}

impl<'a> DescriptorsApi<'a> {
    pub(crate) fn new(client: &'a TncoClient) -> Self {
        DescriptorsApi { client }
    }

    pub async fn all(&self) -> Result<Value, TncoClientError> {
        let request = TncoRequest::get(ENDPOINT).add_header("Accept", YAML_ACCEPT);
        self.client.make_request_for_yaml(request).await
    }

    pub async fn get(&self, name: &str, effective: Option<bool>) -> Result<Value, TncoClientError> {
        let mut request = TncoRequest::get(&build_relative_endpoint(ENDPOINT, name))
            .add_header("Accept", YAML_ACCEPT);
        if let Some(effective) = effective {
            request = request.add_query_param("effective", &effective.to_string());
        }
        self.client.make_request_for_yaml(request).await
    }

    pub async fn create(&self, descriptor: Value) -> Result<(), TncoClientError> {
        let request = TncoRequest::post(ENDPOINT).yaml_body(descriptor);
        self.client.make_request(request).await?;
        Ok(())
    }

    /// The descriptor's `name` attribute addresses the catalog entry to replace.
    pub async fn update(&self, descriptor: Value) -> Result<(), TncoClientError> {
        let name = descriptor
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                TncoClientError::Configuration(
                    "descriptor is missing a \"name\" attribute".to_string(),
                )
            })?
            .to_string();
        let request =
            TncoRequest::put(&build_relative_endpoint(ENDPOINT, &name)).yaml_body(descriptor);
        self.client.make_request(request).await?;
        Ok(())
    }

    pub async fn delete(&self, name: &str) -> Result<(), TncoClientError> {
        let request = TncoRequest::delete(&build_relative_endpoint(ENDPOINT, name));
        self.client.make_request(request).await?;
        Ok(())
    }
}
