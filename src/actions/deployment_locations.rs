//! Handlers for the deploymentlocation command group.

use crate::{
    actions::{
        utils::{
            cli_params_from_matches, load_file_content, object_content_from_matches, print_output,
            report_ignored_missing, required_string, tnco_client, MissingDetector,
        },
        CliActionError,
    },
    commands::params::{PARAMETER_FILE, PARAMETER_IGNORE_MISSING, PARAMETER_NAME, PARAMETER_SET},
    config::Configuration,
    format::Column,
    identifier::{resolve_identity, Identifier},
    validation::ValidationPipeline,
};
use clap::ArgMatches;
use serde_json::{Map, Value};
use tracing::debug;

const DISPLAY_NAME: &str = "Deployment Location";
const MISSING: MissingDetector = MissingDetector::StatusCode(404);

const LOCATION_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("RM", "resourceManager"),
    Column::new("INFRASTRUCTURE", "infrastructureType"),
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

pub async fn list_deployment_locations(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let client = tnco_client(configuration, matches)?;
    let api = client.deployment_locations();
    let locations = match matches.try_get_one::<String>(PARAMETER_NAME).ok().flatten() {
        Some(name) => api.all_with_name(name).await?,
        None => api.all().await?,
    };
    print_output(&locations, matches, LOCATION_COLUMNS)
}

pub async fn get_deployment_location(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let name = required_string(matches, PARAMETER_NAME)?;
    let client = tnco_client(configuration, matches)?;
    let location = client.deployment_locations().get(name).await?;
    print_output(&location, matches, LOCATION_COLUMNS)
}

pub async fn create_deployment_location(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let cli_params = cli_params_from_matches(matches);
    ValidationPipeline::new()
        .mutually_exclusive(PARAMETER_FILE, PARAMETER_SET)
        .require_any(&[PARAMETER_FILE, PARAMETER_SET])
        .run(&cli_params)?;
    let content = object_content_from_matches(matches)?
        .ok_or_else(|| CliActionError::MissingRequiredArgument(PARAMETER_FILE.to_string()))?;

    let client = tnco_client(configuration, matches)?;
    let created = client
        .deployment_locations()
        .create(Value::Object(content))
        .await?;
    print_output(&created, matches, LOCATION_COLUMNS)
}

pub async fn update_deployment_location(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let cli_params = cli_params_from_matches(matches);
    ValidationPipeline::new()
        .mutually_exclusive(PARAMETER_FILE, PARAMETER_SET)
        .run(&cli_params)?;
    let (name, _) = resolve_name(matches)?;
    let mut content = object_content_from_matches(matches)?
        .ok_or_else(|| CliActionError::MissingRequiredArgument(PARAMETER_FILE.to_string()))?;

    let client = tnco_client(configuration, matches)?;
    // The update endpoint addresses the record by its ID; fetch it when the
    // supplied content does not carry one.
    if !content.contains_key("id") {
        let existing = client.deployment_locations().get(&name).await?;
        match existing.get("id") {
            Some(id) => {
                content.insert("id".to_string(), id.clone());
            }
            None => {
                return Err(CliActionError::NotFound {
                    kind: DISPLAY_NAME.to_string(),
                    id: name,
                })
            }
        }
    }
    content
        .entry("name".to_string())
        .or_insert_with(|| Value::String(name.clone()));
    client
        .deployment_locations()
        .update(Value::Object(content))
        .await?;
    println!("Updated deployment location: {name}");
    Ok(())
}

pub async fn delete_deployment_location(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let (name, _) = resolve_name(matches)?;
    let client = tnco_client(configuration, matches)?;
    match client.deployment_locations().delete(&name).await {
        Ok(()) => {
            println!("Removed deployment location: {name}");
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
