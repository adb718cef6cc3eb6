//! Behaviour testing APIs: projects, scenarios and scenario executions.

use super::{build_relative_endpoint, TncoClient, TncoClientError, TncoRequest};
use serde_json::{json, Value};

const PROJECTS_ENDPOINT: &str = "api/behaviour/projects";
const SCENARIOS_ENDPOINT: &str = "api/behaviour/scenarios";
const EXECUTIONS_ENDPOINT: &str = "api/behaviour/executions";

pub struct BehaviourProjectsApi<'a> {
    client: &'a TncoClient,
}

impl<'a> BehaviourProjectsApi<'a> {
    pub(crate) fn new(client: &'a TncoClient) -> Self {
        BehaviourProjectsApi { client }
    }

    pub async fn all(&self) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(TncoRequest::get(PROJECTS_ENDPOINT))
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(TncoRequest::get(&build_relative_endpoint(
                PROJECTS_ENDPOINT,
                id,
            )))
            .await
    }

    pub async fn create(&self, project: Value) -> Result<(), TncoClientError> {
        self.client
            .make_request(TncoRequest::post(PROJECTS_ENDPOINT).json_body(project))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), TncoClientError> {
        self.client
            .make_request(TncoRequest::delete(&build_relative_endpoint(
                PROJECTS_ENDPOINT,
                id,
            )))
            .await?;
        Ok(())
    }
}

pub struct BehaviourScenariosApi<'a> {
    client: &'a TncoClient,
}

impl<'a> BehaviourScenariosApi<'a> {
    pub(crate) fn new(client: &'a TncoClient) -> Self {
        BehaviourScenariosApi { client }
    }

    pub async fn all_in_project(&self, project_id: &str) -> Result<Value, TncoClientError> {
        let endpoint = format!("{}/{}/scenarios", PROJECTS_ENDPOINT, project_id);
        self.client
            .make_request_for_json(TncoRequest::get(&endpoint))
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(TncoRequest::get(&build_relative_endpoint(
                SCENARIOS_ENDPOINT,
                id,
            )))
            .await
    }

    pub async fn create(&self, scenario: Value) -> Result<(), TncoClientError> {
        self.client
            .make_request(TncoRequest::post(SCENARIOS_ENDPOINT).json_body(scenario))
            .await?;
        Ok(())
    }

    /// The scenario's `id` attribute addresses the entry to replace.
    pub async fn update(&self, scenario: Value) -> Result<(), TncoClientError> {
        let id = scenario
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                TncoClientError::Configuration(
                    "scenario is missing an \"id\" attribute".to_string(),
                )
            })?
            .to_string();
        self.client
            .make_request(
                TncoRequest::put(&build_relative_endpoint(SCENARIOS_ENDPOINT, &id))
                    .json_body(scenario),
            )
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), TncoClientError> {
        self.client
            .make_request(TncoRequest::delete(&build_relative_endpoint(
                SCENARIOS_ENDPOINT,
                id,
            )))
            .await?;
        Ok(())
    }
}

pub struct BehaviourScenarioExecutionsApi<'a> {
    client: &'a TncoClient,
}

impl<'a> BehaviourScenarioExecutionsApi<'a> {
    pub(crate) fn new(client: &'a TncoClient) -> Self {
        BehaviourScenarioExecutionsApi { client }
    }

    /// Start an execution of a scenario. Responds with the execution id.
    pub async fn execute(&self, scenario_id: &str) -> Result<Value, TncoClientError> {
        let body = json!({"scenarioId": scenario_id});
        self.client
            .make_request_for_json(TncoRequest::post(EXECUTIONS_ENDPOINT).json_body(body))
            .await
    }

    pub async fn get(&self, execution_id: &str) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(TncoRequest::get(&build_relative_endpoint(
                EXECUTIONS_ENDPOINT,
                execution_id,
            )))
            .await
    }

    pub async fn all_in_project(&self, project_id: &str) -> Result<Value, TncoClientError> {
        self.client
            .make_request_for_json(
                TncoRequest::get(EXECUTIONS_ENDPOINT).add_query_param("projectId", project_id),
            )
            .await
    }

    pub async fn cancel(&self, execution_id: &str) -> Result<(), TncoClientError> {
        let endpoint = format!("{}/{}/cancel", EXECUTIONS_ENDPOINT, execution_id);
        self.client
            .make_request(TncoRequest::post(&endpoint))
            .await?;
        Ok(())
    }

    pub async fn get_progress(&self, execution_id: &str) -> Result<Value, TncoClientError> {
        let endpoint = format!("{}/{}/progress", EXECUTIONS_ENDPOINT, execution_id);
        self.client
            .make_request_for_json(TncoRequest::get(&endpoint))
            .await
    }
}
