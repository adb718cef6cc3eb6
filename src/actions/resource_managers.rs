//! Handlers for the resourcemanager command group.
//!
//! Create and update return an onboarding report describing the deployment
//! locations and resource types the manager contributed.

use crate::{
    actions::{
        utils::{
            cli_params_from_matches, load_file_content, print_output, report_ignored_missing,
            required_string, tnco_client, MissingDetector,
        },
        CliActionError,
    },
    commands::params::{PARAMETER_FILE, PARAMETER_IGNORE_MISSING, PARAMETER_NAME},
    config::Configuration,
    format::Column,
    identifier::{resolve_identity, Identifier},
};
use clap::ArgMatches;
use serde_json::{Map, Value};
use tracing::debug;

const DISPLAY_NAME: &str = "Resource Manager";
const MISSING: MissingDetector = MissingDetector::StatusCode(404);

const RESOURCE_MANAGER_COLUMNS: &[Column] = &[
    Column::new("NAME", "name"),
    Column::new("TYPE", "type"),
    Column::new("URL", "url"),
];

fn identifiers() -> Vec<Identifier> {
    vec![Identifier::arg_and_attr(PARAMETER_NAME)]
}

fn resolve_name(matches: &ArgMatches) -> Result<(String, Option<Map<String, Value>>), CliActionError> {
    let cli_params = cli_params_from_matches(matches);
    let file_content = match matches.try_get_one::<String>(PARAMETER_FILE).ok().flatten() {
        Some(path) => Some(load_file_content(path)?),
        None => None,
    };
    let candidates = identifiers();
    let identity = resolve_identity(&candidates, &cli_params, file_content.as_ref(), true)?
        .ok_or_else(|| CliActionError::MissingRequiredArgument(PARAMETER_NAME.to_string()))?;
    Ok((identity.value_as_string(), file_content))
}

pub async fn list_resource_managers(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let client = tnco_client(configuration, matches)?;
    let resource_managers = client.resource_managers().all().await?;
    print_output(&resource_managers, matches, RESOURCE_MANAGER_COLUMNS)
}

pub async fn get_resource_manager(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let name = required_string(matches, PARAMETER_NAME)?;
    let client = tnco_client(configuration, matches)?;
    let resource_manager = client.resource_managers().get(name).await?;
    print_output(&resource_manager, matches, RESOURCE_MANAGER_COLUMNS)
}

pub async fn create_resource_manager(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let path = required_string(matches, PARAMETER_FILE)?;
    let content = load_file_content(path)?;
    let client = tnco_client(configuration, matches)?;
    let report = client
        .resource_managers()
        .create(Value::Object(content))
        .await?;
    print_output(&report, matches, RESOURCE_MANAGER_COLUMNS)
}

pub async fn update_resource_manager(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let (name, file_content) = resolve_name(matches)?;
    let mut content = file_content
        .ok_or_else(|| CliActionError::MissingRequiredArgument(PARAMETER_FILE.to_string()))?;
    content
        .entry("name".to_string())
        .or_insert_with(|| Value::String(name.clone()));

    let client = tnco_client(configuration, matches)?;
    let report = client
        .resource_managers()
        .update(Value::Object(content))
        .await?;
    print_output(&report, matches, RESOURCE_MANAGER_COLUMNS)
}

pub async fn delete_resource_manager(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let (name, _) = resolve_name(matches)?;
    let client = tnco_client(configuration, matches)?;
    match client.resource_managers().delete(&name).await {
        Ok(()) => {
            println!("Removed resource manager: {name}");
            Ok(())
        }
        Err(e) if matches.get_flag(PARAMETER_IGNORE_MISSING) && MISSING.matches_tnco(&e) => {
            debug!("Delete of {} failed as missing: {}", name, e);
            report_ignored_missing(DISPLAY_NAME, &name);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
