//! Configuration management for named orchestration environments.
//!
//! The configuration file is YAML, stored under the platform config
//! directory (`config_dir()/orchctl/config.yml`) unless overridden with the
//! `ORCHCTL_CONFIG_DIR` environment variable. Each named environment groups
//! the TNCO orchestration settings with an optional DCIM endpoint; one
//! environment may be marked active so commands can omit `--environment`.

use crate::auth::AuthMethod;
use crate::dcim::{DcimClient, DcimClientError};
use crate::tnco::{TncoClient, TncoClientError};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

pub const DEFAULT_APPLICATION_ID: &str = "orchctl";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";
pub const CONFIG_DIR_ENV_VAR: &str = "ORCHCTL_CONFIG_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data, because of: {cause:?}")]
    FailedToLoadData { cause: Box<dyn std::error::Error> },
    #[error("failed to write configuration data to file, because of: {cause:?}")]
    FailedToWriteData { cause: Box<dyn std::error::Error> },
    #[error("missing value for property {name:?}")]
    MissingRequiredPropertyValue { name: String },
    #[error("no environment named {name:?} in the configuration")]
    NoSuchEnvironment { name: String },
    #[error("no environment specified and no active environment set")]
    NoActiveEnvironment,
    #[error("{0}")]
    ClientError(#[from] TncoClientError),
    #[error("{0}")]
    DcimClientError(#[from] DcimClientError),
}

/// Authentication mode of a TNCO environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    ClientCredentials,
    UserPass,
    Legacy,
    Token,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TncoEnvironment {
    pub address: Url,
    #[serde(default)]
    pub auth_mode: AuthMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Separate address for the legacy login API, when it is not served from
    /// the main API address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_address: Option<Url>,
}

impl TncoEnvironment {
    fn require<'a>(
        value: &'a Option<String>,
        name: &str,
    ) -> Result<&'a str, ConfigurationError> {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigurationError::MissingRequiredPropertyValue {
                name: name.to_string(),
            })
    }

    fn auth_method(&self) -> Result<AuthMethod, ConfigurationError> {
        match self.auth_mode {
            AuthMode::ClientCredentials => Ok(AuthMethod::ClientCredentials {
                client_id: Self::require(&self.client_id, "client_id")?.to_string(),
                client_secret: Self::require(&self.client_secret, "client_secret")?.to_string(),
            }),
            AuthMode::UserPass => Ok(AuthMethod::UserPass {
                client_id: Self::require(&self.client_id, "client_id")?.to_string(),
                client_secret: Self::require(&self.client_secret, "client_secret")?.to_string(),
                username: Self::require(&self.username, "username")?.to_string(),
                password: Self::require(&self.password, "password")?.to_string(),
            }),
            AuthMode::Legacy => Ok(AuthMethod::LegacyLogin {
                username: Self::require(&self.username, "username")?.to_string(),
                password: Self::require(&self.password, "password")?.to_string(),
                legacy_auth_address: self.auth_address.as_ref().map(|a| a.to_string()),
            }),
            AuthMode::Token => Ok(AuthMethod::Token {
                token: Self::require(&self.token, "token")?.to_string(),
            }),
        }
    }

    pub fn build_client(&self) -> Result<TncoClient, ConfigurationError> {
        let client = TncoClient::builder()
            .address(self.address.as_str())
            .auth_method(self.auth_method()?)
            .build()?;
        Ok(client)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcimEnvironment {
    pub address: Url,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
}

impl DcimEnvironment {
    pub fn build_client(&self) -> Result<DcimClient, ConfigurationError> {
        let client = DcimClient::new(self.address.as_str(), self.api_token.as_deref())?;
        Ok(client)
    }
}

/// One named group of endpoints the CLI can target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tnco: Option<TncoEnvironment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dcim: Option<DcimEnvironment>,
}

impl EnvironmentGroup {
    pub fn tnco(&self) -> Result<&TncoEnvironment, ConfigurationError> {
        self.tnco
            .as_ref()
            .ok_or_else(|| ConfigurationError::MissingRequiredPropertyValue {
                name: "tnco".to_string(),
            })
    }

    pub fn dcim(&self) -> Result<&DcimEnvironment, ConfigurationError> {
        self.dcim
            .as_ref()
            .ok_or_else(|| ConfigurationError::MissingRequiredPropertyValue {
                name: "dcim".to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    active_environment: Option<String>,
    #[serde(default)]
    environments: BTreeMap<String, EnvironmentGroup>,
}

impl Configuration {
    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        if let Ok(config_dir_str) = std::env::var(CONFIG_DIR_ENV_VAR) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match config_dir() {
            Some(configuration_directory) => {
                let mut default_config_file_path = configuration_directory;
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    pub fn load_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        debug!("Loading configuration from {:?}...", default_file_path);
        Configuration::load_from_file(default_file_path)
    }

    /// Load the default configuration, creating an empty one if none exists.
    /// Friendlier for first-time users than failing with "file not found".
    pub fn load_or_create_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        match Configuration::load_from_file(default_file_path.clone()) {
            Ok(configuration) => Ok(configuration),
            Err(ConfigurationError::FailedToLoadData { cause }) => {
                let not_found = cause
                    .downcast_ref::<std::io::Error>()
                    .map(|e| e.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false);
                if not_found {
                    debug!("Configuration file not found, creating default configuration");
                    let default_configuration = Configuration::default();
                    default_configuration.save(&default_file_path)?;
                    Ok(default_configuration)
                } else {
                    Err(ConfigurationError::FailedToLoadData { cause })
                }
            }
            Err(e) => Err(e),
        }
    }

    pub fn load_from_file(path: PathBuf) -> Result<Configuration, ConfigurationError> {
        let raw = fs::read_to_string(path)
            .map_err(|cause| ConfigurationError::FailedToLoadData {
                cause: Box::new(cause),
            })?;
        serde_yaml::from_str(&raw).map_err(|cause| ConfigurationError::FailedToLoadData {
            cause: Box::new(cause),
        })
    }

    pub fn save(&self, path: &PathBuf) -> Result<(), ConfigurationError> {
        let configuration_directory = path
            .parent()
            .ok_or(ConfigurationError::FailedToFindConfigurationDirectory)?;
        fs::create_dir_all(configuration_directory)
            .map_err(|_| ConfigurationError::FailedToFindConfigurationDirectory)?;
        let mut file = File::create(path)
            .map_err(|cause| ConfigurationError::FailedToWriteData {
                cause: Box::new(cause),
            })?;
        let raw = serde_yaml::to_string(self)
            .map_err(|cause| ConfigurationError::FailedToWriteData {
                cause: Box::new(cause),
            })?;
        file.write_all(raw.as_bytes())
            .map_err(|cause| ConfigurationError::FailedToWriteData {
                cause: Box::new(cause),
            })
    }

    pub fn save_to_default(&self) -> Result<(), ConfigurationError> {
        self.save(&Self::get_default_configuration_file_path()?)
    }

    pub fn environment_names(&self) -> Vec<&str> {
        self.environments.keys().map(|k| k.as_str()).collect()
    }

    pub fn environments(&self) -> &BTreeMap<String, EnvironmentGroup> {
        &self.environments
    }

    pub fn environment(&self, name: &str) -> Result<&EnvironmentGroup, ConfigurationError> {
        self.environments
            .get(name)
            .ok_or_else(|| ConfigurationError::NoSuchEnvironment {
                name: name.to_string(),
            })
    }

    /// The named environment, or the active one when no name is given.
    pub fn environment_or_active(
        &self,
        name: Option<&str>,
    ) -> Result<&EnvironmentGroup, ConfigurationError> {
        match name {
            Some(name) => self.environment(name),
            None => {
                let active = self
                    .active_environment
                    .as_deref()
                    .ok_or(ConfigurationError::NoActiveEnvironment)?;
                self.environment(active)
            }
        }
    }

    pub fn active_environment(&self) -> Option<&str> {
        self.active_environment.as_deref()
    }

    pub fn add_environment(&mut self, name: &str, environment: EnvironmentGroup) {
        self.environments.insert(name.to_string(), environment);
    }

    pub fn remove_environment(&mut self, name: &str) -> Result<(), ConfigurationError> {
        if self.environments.remove(name).is_none() {
            return Err(ConfigurationError::NoSuchEnvironment {
                name: name.to_string(),
            });
        }
        if self.active_environment.as_deref() == Some(name) {
            self.active_environment = None;
        }
        Ok(())
    }

    pub fn set_active_environment(&mut self, name: &str) -> Result<(), ConfigurationError> {
        self.environment(name)?;
        self.active_environment = Some(name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_environment() -> EnvironmentGroup {
        EnvironmentGroup {
            description: Some("dev environment".to_string()),
            tnco: Some(TncoEnvironment {
                address: Url::parse("https://tnco.example.com").unwrap(),
                auth_mode: AuthMode::ClientCredentials,
                client_id: Some("orchctl".to_string()),
                client_secret: Some("s3cret".to_string()),
                username: None,
                password: None,
                token: None,
                auth_address: None,
            }),
            dcim: Some(DcimEnvironment {
                address: Url::parse("https://dcim.example.com").unwrap(),
                api_token: Some("t0k3n".to_string()),
            }),
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yml");
        let mut configuration = Configuration::default();
        configuration.add_environment("dev", sample_environment());
        configuration.set_active_environment("dev").unwrap();
        configuration.save(&path).unwrap();

        let loaded = Configuration::load_from_file(path).unwrap();
        assert_eq!(loaded, configuration);
        assert_eq!(loaded.active_environment(), Some("dev"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = Configuration::load_from_file(dir.path().join("nope.yml"));
        assert!(matches!(
            result,
            Err(ConfigurationError::FailedToLoadData { .. })
        ));
    }

    #[test]
    fn environment_or_active_requires_an_active_environment() {
        let configuration = Configuration::default();
        assert!(matches!(
            configuration.environment_or_active(None),
            Err(ConfigurationError::NoActiveEnvironment)
        ));
    }

    #[test]
    fn set_active_environment_rejects_unknown_names() {
        let mut configuration = Configuration::default();
        assert!(matches!(
            configuration.set_active_environment("nope"),
            Err(ConfigurationError::NoSuchEnvironment { .. })
        ));
    }

    #[test]
    fn removing_the_active_environment_clears_it() {
        let mut configuration = Configuration::default();
        configuration.add_environment("dev", sample_environment());
        configuration.set_active_environment("dev").unwrap();
        configuration.remove_environment("dev").unwrap();
        assert_eq!(configuration.active_environment(), None);
    }

    #[test]
    fn client_credentials_mode_requires_client_id() {
        let mut environment = sample_environment();
        environment.tnco.as_mut().unwrap().client_id = None;
        let result = environment.tnco().unwrap().build_client();
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingRequiredPropertyValue { name }) if name == "client_id"
        ));
    }

    #[test]
    fn token_mode_requires_token() {
        let mut environment = sample_environment();
        {
            let tnco = environment.tnco.as_mut().unwrap();
            tnco.auth_mode = AuthMode::Token;
            tnco.token = None;
        }
        let result = environment.tnco().unwrap().build_client();
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingRequiredPropertyValue { name }) if name == "token"
        ));
    }
}
