//! Deployment location API.

use super::{build_relative_endpoint, TncoClient, TncoClientError, TncoRequest};
use serde_json::Value;

const ENDPOINT: &str = "api/deploymentLocations";

pub struct DeploymentLocationsApi<'a> {
    client: &'a TncoClient,
}

impl<'a> DeploymentLocationsApi<'a> {
    pub(crate) fn new(client: &'a TncoClient) -> Self {
        DeploymentLocationsApi { client }
    }

    pub async fn all(&self) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(TncoRequest::get(ENDPOINT))
            .await
    }

    pub async fn all_with_name(&self, name: &str) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(TncoRequest::get(ENDPOINT).add_query_param("name", name))
            .await
    }

    pub async fn get(&self, name: &str) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(TncoRequest::get(&build_relative_endpoint(ENDPOINT, name)))
            .await
    }

    pub async fn create(&self, location: Value) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(TncoRequest::post(ENDPOINT).json_body(location))
            .await
    }

    /// The location's `id` attribute addresses the entry to replace.
    pub async fn update(&self, location: Value) -> Result<(), TncoClientError> {
        let id = match location.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(TncoClientError::Configuration(
                    "deployment location is missing an \"id\" attribute".to_string(),
                ))
            }
        };
        self.client
            .make_request(
                TncoRequest::put(&build_relative_endpoint(ENDPOINT, &id)).json_body(location),
            )
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), TncoClientError> {
        self.client
            .make_request(TncoRequest::delete(&build_relative_endpoint(ENDPOINT, id)))
            .await?;
        Ok(())
    }
}
