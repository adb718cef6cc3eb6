//! Client for TNCO/CP4NA orchestration REST APIs.
//!
//! [`TncoClient`] owns the HTTP transport, the configured [`AuthMethod`] and
//! an [`AuthTracker`] for the session. API groups (assemblies, descriptors,
//! behaviour, deployment locations, resource managers) borrow the client and
//! issue [`TncoRequest`]s through it; the client injects the bearer token,
//! re-running the authentication handshake whenever the tracker reports the
//! cached token as expired.

use crate::auth::{AuthMethod, AuthTracker};
use reqwest::{Client, Method, Response};
use serde_json::{json, Value};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

pub mod assemblies;
pub mod behaviour;
pub mod deployment_locations;
pub mod descriptors;
pub mod intents;
pub mod resource_managers;

pub use assemblies::AssembliesApi;
pub use behaviour::{BehaviourProjectsApi, BehaviourScenarioExecutionsApi, BehaviourScenariosApi};
pub use deployment_locations::DeploymentLocationsApi;
pub use descriptors::DescriptorsApi;
pub use resource_managers::ResourceManagersApi;

#[derive(Debug, Error)]
pub enum TncoClientError {
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
    Auth(String),
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl TncoClientError {
    /// Status code of the upstream response, when this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TncoClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn detail_message(&self) -> Option<&str> {
        match self {
            TncoClientError::Http { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(Value),
    Yaml(Value),
    Form(Vec<(String, String)>),
}

/// A single outbound request to the orchestration API.
#[derive(Debug, Clone)]
pub struct TncoRequest {
    pub method: Method,
    pub endpoint: String,
    pub query_params: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    pub include_auth: bool,
    pub basic_auth: Option<(String, String)>,
    pub override_address: Option<String>,
}

impl TncoRequest {
    pub fn new(method: Method, endpoint: &str) -> Self {
        TncoRequest {
            method,
            endpoint: endpoint.to_string(),
            query_params: Vec::new(),
            headers: Vec::new(),
            body: None,
            include_auth: true,
            basic_auth: None,
            override_address: None,
        }
    }

    pub fn get(endpoint: &str) -> Self {
        TncoRequest::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: &str) -> Self {
        TncoRequest::new(Method::POST, endpoint)
    }

    pub fn put(endpoint: &str) -> Self {
        TncoRequest::new(Method::PUT, endpoint)
    }

    pub fn delete(endpoint: &str) -> Self {
        TncoRequest::new(Method::DELETE, endpoint)
    }

    pub fn add_query_param(mut self, name: &str, value: &str) -> Self {
        self.query_params.push((name.to_string(), value.to_string()));
        self
    }

    pub fn add_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn json_body(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    pub fn yaml_body(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Yaml(body));
        self
    }

    pub fn form_body(mut self, form: Vec<(String, String)>) -> Self {
        self.body = Some(RequestBody::Form(form));
        self
    }

    pub fn without_auth(mut self) -> Self {
        self.include_auth = false;
        self
    }

    pub fn with_basic_auth(mut self, user: &str, password: &str) -> Self {
        self.basic_auth = Some((user.to_string(), password.to_string()));
        self
    }

    pub fn with_override_address(mut self, address: Option<&str>) -> Self {
        self.override_address = address.map(|a| a.to_string());
        self
    }
}

/// Append an identifier segment to a base endpoint.
pub(crate) fn build_relative_endpoint(base_endpoint: &str, id_value: &str) -> String {
    format!("{}/{}", base_endpoint, id_value)
}

pub struct TncoClient {
    address: String,
    http: Client,
    auth_method: Option<AuthMethod>,
    auth_tracker: Mutex<AuthTracker>,
}

impl TncoClient {
    pub fn builder() -> TncoClientBuilder {
        TncoClientBuilder::new()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub async fn make_request(&self, request: TncoRequest) -> Result<Response, TncoClientError> {
        let address = request
            .override_address
            .as_deref()
            .unwrap_or(self.address.as_str());
        let mut url = format!("{}/{}", address, request.endpoint);
        if !request.query_params.is_empty() {
            let query = serde_urlencoded::to_string(&request.query_params)
                .map_err(|e| TncoClientError::Configuration(e.to_string()))?;
            url = format!("{}?{}", url, query);
        }
        debug!("TNCO request: method={}, url={}", request.method, url);

        let mut builder = self.http.request(request.method.clone(), &url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        match &request.body {
            Some(RequestBody::Json(body)) => builder = builder.json(body),
            Some(RequestBody::Yaml(body)) => {
                let text = serde_yaml::to_string(body)
                    .map_err(|e| TncoClientError::Configuration(e.to_string()))?;
                builder = builder
                    .header(reqwest::header::CONTENT_TYPE, "application/yaml")
                    .body(text);
            }
            Some(RequestBody::Form(form)) => builder = builder.form(form),
            None => {}
        }
        if let Some((user, password)) = &request.basic_auth {
            builder = builder.basic_auth(user, Some(password));
        }
        if request.include_auth {
            if let Some(token) = self.access_token().await? {
                builder = builder.bearer_auth(token);
            }
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!("TNCO request returned: url={}, status={}", url, status);
        if !status.is_success() {
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string());
            let default_detail = status.to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(TncoClientError::Http {
                method: request.method.to_string(),
                url,
                status: status.as_u16(),
                detail: extract_error_detail(content_type.as_deref(), &body, &default_detail),
            });
        }
        Ok(response)
    }

    pub async fn make_request_for_json(
        &self,
        request: TncoRequest,
    ) -> Result<Value, TncoClientError> {
        let response = self.make_request(request).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| TncoClientError::ResponseParsing(e.to_string()))
    }

    pub async fn make_request_for_yaml(
        &self,
        request: TncoRequest,
    ) -> Result<Value, TncoClientError> {
        let response = self.make_request(request).await?;
        let text = response.text().await?;
        serde_yaml::from_str::<Value>(&text)
            .map_err(|e| TncoClientError::ResponseParsing(e.to_string()))
    }

    /// Response `Location` header, used by APIs that answer a create/intent
    /// request with the identifier of a spawned process.
    pub async fn make_request_for_location(
        &self,
        request: TncoRequest,
    ) -> Result<Option<String>, TncoClientError> {
        let response = self.make_request(request).await?;
        Ok(response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.rsplit('/').next().unwrap_or(v).to_string()))
    }

    async fn access_token(&self) -> Result<Option<String>, TncoClientError> {
        let auth_method = match &self.auth_method {
            Some(method) => method,
            None => return Ok(None),
        };
        let mut tracker = self.auth_tracker.lock().await;
        if tracker.has_access_expired().await {
            debug!("Requesting new access token");
            // Handshake requests go through make_request without auth, which
            // makes this call recursive at the type level. Boxing breaks the
            // infinitely-sized future.
            let auth_response = Box::pin(self.run_auth_handshake(auth_method)).await?;
            tracker.accept_auth_response(&auth_response);
        }
        match tracker.current_access_token() {
            Some(token) => Ok(Some(token.to_string())),
            None => Err(TncoClientError::Auth(
                "authentication response did not include an access token".to_string(),
            )),
        }
    }

    async fn run_auth_handshake(&self, method: &AuthMethod) -> Result<Value, TncoClientError> {
        let api = self.auth();
        match method {
            AuthMethod::ClientCredentials {
                client_id,
                client_secret,
            } => api.request_client_access(client_id, client_secret).await,
            AuthMethod::UserPass {
                client_id,
                client_secret,
                username,
                password,
            } => {
                api.request_user_access(client_id, client_secret, username, password)
                    .await
            }
            AuthMethod::LegacyLogin {
                username,
                password,
                legacy_auth_address,
            } => {
                api.legacy_login(username, password, legacy_auth_address.as_deref())
                    .await
            }
            // A static token never expires from the client's point of view.
            AuthMethod::Token { token } => Ok(json!({
                "accessToken": token,
                "expiresIn": 315_360_000.0,
            })),
        }
    }

    pub fn auth(&self) -> AuthenticationApi<'_> {
        AuthenticationApi { client: self }
    }

    pub fn assemblies(&self) -> AssembliesApi<'_> {
        AssembliesApi::new(self)
    }

    pub fn descriptors(&self) -> DescriptorsApi<'_> {
        DescriptorsApi::new(self)
    }

    pub fn behaviour_projects(&self) -> BehaviourProjectsApi<'_> {
        BehaviourProjectsApi::new(self)
    }

    pub fn behaviour_scenarios(&self) -> BehaviourScenariosApi<'_> {
        BehaviourScenariosApi::new(self)
    }

    pub fn behaviour_scenario_execs(&self) -> BehaviourScenarioExecutionsApi<'_> {
        BehaviourScenarioExecutionsApi::new(self)
    }

    pub fn deployment_locations(&self) -> DeploymentLocationsApi<'_> {
        DeploymentLocationsApi::new(self)
    }

    pub fn resource_managers(&self) -> ResourceManagersApi<'_> {
        ResourceManagersApi::new(self)
    }
}

#[derive(Default)]
pub struct TncoClientBuilder {
    address: Option<String>,
    auth_method: Option<AuthMethod>,
}

impl TncoClientBuilder {
    pub fn new() -> Self {
        TncoClientBuilder::default()
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = Some(address.trim_end_matches('/').to_string());
        self
    }

    pub fn auth_method(mut self, method: AuthMethod) -> Self {
        self.auth_method = Some(method);
        self
    }

    pub fn build(self) -> Result<TncoClient, TncoClientError> {
        let address = self
            .address
            .ok_or_else(|| TncoClientError::Configuration("missing address".to_string()))?;
        let http = Client::builder().build()?;
        Ok(TncoClient {
            address,
            http,
            auth_method: self.auth_method,
            auth_tracker: Mutex::new(AuthTracker::new()),
        })
    }
}

/// Authentication handshake endpoints.
pub struct AuthenticationApi<'a> {
    client: &'a TncoClient,
}

impl AuthenticationApi<'_> {
    const OAUTH_ENDPOINT: &'static str = "oauth/token";
    const LEGACY_LOGIN_ENDPOINT: &'static str = "ui/api/login";
    const OLDER_LEGACY_LOGIN_ENDPOINT: &'static str = "api/login";

    pub async fn request_client_access(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Value, TncoClientError> {
        let request = TncoRequest::post(Self::OAUTH_ENDPOINT)
            .form_body(vec![(
                "grant_type".to_string(),
                "client_credentials".to_string(),
            )])
            .with_basic_auth(client_id, client_secret)
            .without_auth();
        self.client.make_request_for_json(request).await
    }

    pub async fn request_user_access(
        &self,
        client_id: &str,
        client_secret: &str,
        username: &str,
        password: &str,
    ) -> Result<Value, TncoClientError> {
        let request = TncoRequest::post(Self::OAUTH_ENDPOINT)
            .form_body(vec![
                ("username".to_string(), username.to_string()),
                ("password".to_string(), password.to_string()),
                ("grant_type".to_string(), "password".to_string()),
            ])
            .with_basic_auth(client_id, client_secret)
            .without_auth();
        self.client.make_request_for_json(request).await
    }

    pub async fn legacy_login(
        &self,
        username: &str,
        password: &str,
        legacy_auth_address: Option<&str>,
    ) -> Result<Value, TncoClientError> {
        let body = json!({"username": username, "password": password});
        let request = TncoRequest::post(Self::LEGACY_LOGIN_ENDPOINT)
            .json_body(body.clone())
            .without_auth()
            .with_override_address(legacy_auth_address);
        match self.client.make_request_for_json(request).await {
            Ok(response) => Ok(response),
            Err(TncoClientError::Http { status, .. }) if status == 404 || status == 405 => {
                debug!(
                    "Login endpoint responded with {} status code, may be an older environment, trying {}",
                    status,
                    Self::OLDER_LEGACY_LOGIN_ENDPOINT
                );
                let retry = TncoRequest::post(Self::OLDER_LEGACY_LOGIN_ENDPOINT)
                    .json_body(body)
                    .without_auth()
                    .with_override_address(legacy_auth_address);
                self.client.make_request_for_json(retry).await
            }
            Err(e) => Err(e),
        }
    }
}

/// Best-effort extraction of a human-readable detail message from an error
/// response body. JSON and YAML bodies are searched for `localizedMessage`
/// then `message`; anything unparseable falls back to the raw body text, or
/// to the HTTP status line when there is no body.
pub(crate) fn extract_error_detail(
    content_type: Option<&str>,
    body: &str,
    default_detail: &str,
) -> String {
    let parsed: Option<Value> = match content_type {
        Some(ct) if ct.contains("json") => serde_json::from_str(body).ok(),
        Some(ct) if ct.contains("yaml") => serde_yaml::from_str(body).ok(),
        _ => None,
    };
    if let Some(parsed) = parsed {
        for key in ["localizedMessage", "message"] {
            if let Some(detail) = parsed.get(key).and_then(|v| v.as_str()) {
                return detail.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        default_detail.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_localized_message_from_json_body() {
        let detail = extract_error_detail(
            Some("application/json"),
            "{\"localizedMessage\": \"Assembly not found\", \"message\": \"other\"}",
            "404 Not Found",
        );
        assert_eq!(detail, "Assembly not found");
    }

    #[test]
    fn falls_back_to_message_key() {
        let detail = extract_error_detail(
            Some("application/json"),
            "{\"message\": \"boom\"}",
            "500 Internal Server Error",
        );
        assert_eq!(detail, "boom");
    }

    #[test]
    fn extracts_from_yaml_body() {
        let detail = extract_error_detail(
            Some("application/yaml"),
            "localizedMessage: Descriptor not found\n",
            "404 Not Found",
        );
        assert_eq!(detail, "Descriptor not found");
    }

    #[test]
    fn unparseable_body_returned_raw() {
        let detail = extract_error_detail(
            Some("application/json"),
            "not json at all",
            "502 Bad Gateway",
        );
        assert_eq!(detail, "not json at all");
    }

    #[test]
    fn empty_body_uses_status_line() {
        let detail = extract_error_detail(Some("application/json"), "  ", "503 Service Unavailable");
        assert_eq!(detail, "503 Service Unavailable");
    }

    #[test]
    fn builder_requires_address() {
        let result = TncoClientBuilder::new().build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_trims_trailing_slashes() {
        let client = TncoClient::builder()
            .address("https://tnco.example.com/")
            .auth_method(AuthMethod::Token {
                token: "abc".to_string(),
            })
            .build()
            .unwrap();
        assert_eq!(client.address(), "https://tnco.example.com");
    }
}
