//! Resource manager API. Onboarding (create) and re-onboarding (update)
//! answer with a report describing the deployment locations and resource
//! types discovered on the manager.

use super::{build_relative_endpoint, TncoClient, TncoClientError, TncoRequest};
use serde_json::Value;

const ENDPOINT: &str = "api/resource-managers";

pub struct ResourceManagersApi<'a> {
    client: &'a TncoClient,
}

impl<'a> ResourceManagersApi<'a> {
    pub(crate) fn new(client: &'a TncoClient) -> Self {
        ResourceManagersApi { client }
    }

    pub async fn all(&self) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(TncoRequest::get(ENDPOINT))
            .await
    }

    pub async fn get(&self, name: &str) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(TncoRequest::get(&build_relative_endpoint(ENDPOINT, name)))
            .await
    }

    /// Onboard a resource manager; returns the onboarding report.
    pub async fn create(&self, resource_manager: Value) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(TncoRequest::post(ENDPOINT).json_body(resource_manager))
            .await
    }

    /// Re-onboard; the manager's `name` attribute addresses the entry.
    /// Returns the onboarding report.
    pub async fn update(&self, resource_manager: Value) -> Result<Value, TncoClientError> {
        let name = resource_manager
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                TncoClientError::Configuration(
                    "resource manager is missing a \"name\" attribute".to_string(),
                )
            })?
            .to_string();
        self.client
            .make_request_for_json(
                TncoRequest::put(&build_relative_endpoint(ENDPOINT, &name))
                    .json_body(resource_manager),
            )
            .await
    }

    pub async fn delete(&self, name: &str) -> Result<(), TncoClientError> {
        self.client
            .make_request(TncoRequest::delete(&build_relative_endpoint(ENDPOINT, name)))
            .await?;
        Ok(())
    }
}
