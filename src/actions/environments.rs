//! Handlers for the env command group.

use crate::{
    actions::{
        utils::{print_output, required_string},
        CliActionError,
    },
    commands::params::{
        PARAMETER_ACTIVATE, PARAMETER_AUTH_ADDRESS, PARAMETER_AUTH_MODE, PARAMETER_CLIENT_ID,
        PARAMETER_CLIENT_SECRET, PARAMETER_DCIM_ADDRESS, PARAMETER_DCIM_TOKEN,
        PARAMETER_DESCRIPTION, PARAMETER_NAME, PARAMETER_PASSWORD, PARAMETER_TNCO_ADDRESS,
        PARAMETER_TOKEN, PARAMETER_USERNAME,
    },
    config::{AuthMode, Configuration, DcimEnvironment, EnvironmentGroup, TncoEnvironment},
    format::Column,
};
use clap::ArgMatches;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

const ENVIRONMENT_COLUMNS: &[Column] = &[
    Column::new("NAME", "name"),
    Column::new("DESCRIPTION", "description"),
    Column::new("TNCO", "tnco_address"),
    Column::new("DCIM", "dcim_address"),
    Column::new("ACTIVE", "active"),
];

fn optional_string(matches: &ArgMatches, name: &str) -> Option<String> {
    matches
        .try_get_one::<String>(name)
        .ok()
        .flatten()
        .cloned()
}

fn parse_address(matches: &ArgMatches, name: &str) -> Result<Option<Url>, CliActionError> {
    match optional_string(matches, name) {
        Some(raw) => {
            let url = Url::parse(&raw).map_err(|e| CliActionError::InvalidArgumentValue {
                name: name.to_string(),
                detail: e.to_string(),
            })?;
            Ok(Some(url))
        }
        None => Ok(None),
    }
}

fn parse_auth_mode(matches: &ArgMatches) -> Result<AuthMode, CliActionError> {
    let raw = optional_string(matches, PARAMETER_AUTH_MODE)
        .unwrap_or_else(|| "client_credentials".to_string());
    match raw.as_str() {
        "client_credentials" => Ok(AuthMode::ClientCredentials),
        "user_pass" => Ok(AuthMode::UserPass),
        "legacy" => Ok(AuthMode::Legacy),
        "token" => Ok(AuthMode::Token),
        other => Err(CliActionError::InvalidArgumentValue {
            name: PARAMETER_AUTH_MODE.to_string(),
            detail: format!("unknown auth mode {other:?}"),
        }),
    }
}

pub async fn add_environment(
    configuration: &mut Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let name = required_string(matches, PARAMETER_NAME)?;
    let tnco_address = parse_address(matches, PARAMETER_TNCO_ADDRESS)?
        .ok_or_else(|| CliActionError::MissingRequiredArgument(PARAMETER_TNCO_ADDRESS.to_string()))?;

    let tnco = TncoEnvironment {
        address: tnco_address,
        auth_mode: parse_auth_mode(matches)?,
        client_id: optional_string(matches, PARAMETER_CLIENT_ID),
        client_secret: optional_string(matches, PARAMETER_CLIENT_SECRET),
        username: optional_string(matches, PARAMETER_USERNAME),
        password: optional_string(matches, PARAMETER_PASSWORD),
        token: optional_string(matches, PARAMETER_TOKEN),
        auth_address: parse_address(matches, PARAMETER_AUTH_ADDRESS)?,
    };
    let dcim = match parse_address(matches, PARAMETER_DCIM_ADDRESS)? {
        Some(address) => Some(DcimEnvironment {
            address,
            api_token: optional_string(matches, PARAMETER_DCIM_TOKEN),
        }),
        None => None,
    };

    configuration.add_environment(
        name,
        EnvironmentGroup {
            description: optional_string(matches, PARAMETER_DESCRIPTION),
            tnco: Some(tnco),
            dcim,
        },
    );
    if matches.get_flag(PARAMETER_ACTIVATE) {
        configuration.set_active_environment(name)?;
    }
    configuration.save_to_default()?;
    debug!("Environment {:?} saved", name);
    println!("Environment {name} saved");
    Ok(())
}

pub async fn list_environments(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let rows: Vec<Value> = configuration
        .environments()
        .iter()
        .map(|(name, environment)| {
            json!({
                "name": name,
                "description": environment.description,
                "tnco_address": environment.tnco.as_ref().map(|t| t.address.to_string()),
                "dcim_address": environment.dcim.as_ref().map(|d| d.address.to_string()),
                "active": configuration.active_environment() == Some(name.as_str()),
            })
        })
        .collect();
    print_output(&Value::Array(rows), matches, ENVIRONMENT_COLUMNS)
}

pub async fn get_environment(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let name = required_string(matches, PARAMETER_NAME)?;
    let environment = configuration.environment(name)?;
    print_output(
        &serde_json::to_value(environment)?,
        matches,
        ENVIRONMENT_COLUMNS,
    )
}

pub async fn use_environment(
    configuration: &mut Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let name = required_string(matches, PARAMETER_NAME)?;
    configuration.set_active_environment(name)?;
    configuration.save_to_default()?;
    println!("Active environment set to {name}");
    Ok(())
}

pub async fn remove_environment(
    configuration: &mut Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let name = required_string(matches, PARAMETER_NAME)?;
    configuration.remove_environment(name)?;
    configuration.save_to_default()?;
    println!("Environment {name} removed");
    Ok(())
}

pub async fn show_configuration_path() -> Result<(), CliActionError> {
    let path = Configuration::get_default_configuration_file_path()?;
    println!("{}", path.display());
    Ok(())
}
