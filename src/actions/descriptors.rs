//! Handlers for the descriptor command group.

use crate::{
    actions::{
        utils::{
            load_file_content, print_output, report_ignored_missing, required_string, tnco_client,
            MissingDetector,
        },
        CliActionError,
    },
    commands::params::{PARAMETER_EFFECTIVE, PARAMETER_FILE, PARAMETER_IGNORE_MISSING, PARAMETER_NAME},
    config::Configuration,
    format::Column,
    identifier::{resolve_identity, Identifier},
};
use clap::ArgMatches;
use serde_json::Value;
use tracing::debug;

const DISPLAY_NAME: &str = "Descriptor";
const MISSING: MissingDetector = MissingDetector::StatusCode(404);

const DESCRIPTOR_COLUMNS: &[Column] = &[
    Column::new("NAME", "name"),
    Column::new("DESCRIPTION", "description"),
];

fn identifiers() -> Vec<Identifier> {
    vec![Identifier::arg_and_attr(PARAMETER_NAME)]
}

pub async fn list_descriptors(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let client = tnco_client(configuration, matches)?;
    let descriptors = client.descriptors().all().await?;
    print_output(&descriptors, matches, DESCRIPTOR_COLUMNS)
}

pub async fn get_descriptor(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let name = required_string(matches, PARAMETER_NAME)?;
    let effective = matches.get_flag(PARAMETER_EFFECTIVE).then_some(true);
    let client = tnco_client(configuration, matches)?;
    let descriptor = client.descriptors().get(name, effective).await?;
    print_output(&descriptor, matches, DESCRIPTOR_COLUMNS)
}

pub async fn create_descriptor(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let path = required_string(matches, PARAMETER_FILE)?;
    let content = load_file_content(path)?;
    let client = tnco_client(configuration, matches)?;
    client.descriptors().create(Value::Object(content)).await?;
    println!("Created descriptor from {path}");
    Ok(())
}

pub async fn update_descriptor(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let path = required_string(matches, PARAMETER_FILE)?;
    let content = load_file_content(path)?;
    let client = tnco_client(configuration, matches)?;
    client.descriptors().update(Value::Object(content)).await?;
    println!("Updated descriptor from {path}");
    Ok(())
}

pub async fn delete_descriptor(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let cli_params = super::utils::cli_params_from_matches(matches);
    let file_content = match matches.try_get_one::<String>(PARAMETER_FILE).ok().flatten() {
        Some(path) => Some(load_file_content(path)?),
        None => None,
    };
    let candidates = identifiers();
    let identity = resolve_identity(&candidates, &cli_params, file_content.as_ref(), true)?
        .ok_or_else(|| CliActionError::MissingRequiredArgument(PARAMETER_NAME.to_string()))?;
    let name = identity.value_as_string();

    let client = tnco_client(configuration, matches)?;
    match client.descriptors().delete(&name).await {
        Ok(()) => {
            println!("Removed descriptor: {name}");
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
