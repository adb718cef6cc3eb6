//! Assembly topology queries and intent submission.

use super::intents::{
    ChangeAssemblyStateIntent, CreateAssemblyIntent, DeleteAssemblyIntent, HealAssemblyIntent,
    UpgradeAssemblyIntent,
};
use super::{build_relative_endpoint, TncoClient, TncoClientError, TncoRequest};
use serde::Serialize;
use serde_json::Value;

const ENDPOINT: &str = "api/topology/assemblies";
const INTENTS_ENDPOINT: &str = "api/intents";

pub struct AssembliesApi<'a> {
    client: &'a TncoClient,
}

impl<'a> AssembliesApi<'a> {
    pub(crate) fn new(client: &'a TncoClient) -> Self {
        AssembliesApi { client }
    }

    /// The top N assemblies, where N is a config property of the target
    /// environment. There is no unbounded "all" listing.
    pub async fn get_topn(&self) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(TncoRequest::get(ENDPOINT))
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Value, TncoClientError> {
        let endpoint = build_relative_endpoint(ENDPOINT, id);
        self.client
            .make_request_for_json(TncoRequest::get(&endpoint))
            .await
    }

    pub async fn all_with_name(&self, name: &str) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(TncoRequest::get(ENDPOINT).add_query_param("name", name))
            .await
    }

    pub async fn all_with_name_containing(
        &self,
        search_string: &str,
    ) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(
                TncoRequest::get(ENDPOINT).add_query_param("nameContains", search_string),
            )
            .await
    }

    pub async fn intent_create(
        &self,
        intent: &CreateAssemblyIntent,
    ) -> Result<Option<String>, TncoClientError> {
        self.submit_intent("createAssembly", intent).await
    }

    pub async fn intent_upgrade(
        &self,
        intent: &UpgradeAssemblyIntent,
    ) -> Result<Option<String>, TncoClientError> {
        self.submit_intent("upgradeAssembly", intent).await
    }

    pub async fn intent_delete(
        &self,
        intent: &DeleteAssemblyIntent,
    ) -> Result<Option<String>, TncoClientError> {
        self.submit_intent("deleteAssembly", intent).await
    }

    pub async fn intent_change_state(
        &self,
        intent: &ChangeAssemblyStateIntent,
    ) -> Result<Option<String>, TncoClientError> {
        self.submit_intent("changeAssemblyState", intent).await
    }

    pub async fn intent_heal(
        &self,
        intent: &HealAssemblyIntent,
    ) -> Result<Option<String>, TncoClientError> {
        self.submit_intent("healAssembly", intent).await
    }

    // Intent responses carry the spawned process identifier in the Location
    // header.
    async fn submit_intent<T: Serialize>(
        &self,
        intent_name: &str,
        intent: &T,
    ) -> Result<Option<String>, TncoClientError> {
        let endpoint = build_relative_endpoint(INTENTS_ENDPOINT, intent_name);
        let body = serde_json::to_value(intent)
            .map_err(|e| TncoClientError::Configuration(e.to_string()))?;
        self.client
            .make_request_for_location(TncoRequest::post(&endpoint).json_body(body))
            .await
    }
}
