//! Handlers for the assembly command group.
//!
//! Reads go straight to the topology API; lifecycle changes are submitted as
//! intents and the handler reports the identifier of the spawned process.

use crate::{
    actions::{
        utils::{
            cli_params_from_matches, load_file_content, print_output, report_ignored_missing,
            required_string, tnco_client, MissingDetector,
        },
        CliActionError,
    },
    commands::params::{
        PARAMETER_BROKEN_COMPONENT, PARAMETER_FILE, PARAMETER_ID, PARAMETER_IGNORE_MISSING,
        PARAMETER_INTENDED_STATE, PARAMETER_NAME, PARAMETER_NAME_CONTAINS, PARAMETER_SET,
    },
    config::Configuration,
    format::Column,
    identifier::{resolve_identity, strip_identifier_params, Identifier},
    tnco::intents::{
        ChangeAssemblyStateIntent, CreateAssemblyIntent, DeleteAssemblyIntent, HealAssemblyIntent,
        UpgradeAssemblyIntent,
    },
    validation::ValidationPipeline,
};
use clap::ArgMatches;
use serde_json::{Map, Value};
use tracing::debug;

const DISPLAY_NAME: &str = "Assembly";

// The topology API reports a missing assembly as a 500 with a descriptive
// message, so a status-code detector would misclassify genuine failures.
const MISSING: MissingDetector = MissingDetector::MessageContains("Cannot find assembly instance");

const ASSEMBLY_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("DESCRIPTOR", "descriptorName"),
    Column::new("STATE", "state"),
];

fn target_identifiers() -> Vec<Identifier> {
    vec![
        Identifier::arg_and_attr(PARAMETER_NAME),
        Identifier::arg_and_attr(PARAMETER_ID).with_opts(&["--id"]),
    ]
}

/// The resolved target of a lifecycle command: exactly one of name or ID,
/// plus the file content when `-f` was given.
struct AssemblyTarget {
    id: Option<String>,
    name: Option<String>,
    file_content: Option<Map<String, Value>>,
}

fn resolve_target(matches: &ArgMatches) -> Result<AssemblyTarget, CliActionError> {
    let cli_params = cli_params_from_matches(matches);
    let file_content = match matches.try_get_one::<String>(PARAMETER_FILE).ok().flatten() {
        Some(path) => Some(load_file_content(path)?),
        None => None,
    };
    let candidates = target_identifiers();
    let identity = resolve_identity(&candidates, &cli_params, file_content.as_ref(), true)?
        .ok_or_else(|| CliActionError::MissingRequiredArgument(PARAMETER_NAME.to_string()))?;
    let value = identity.value_as_string();
    let is_id = identity.identifier.obj_attribute.as_deref() == Some(PARAMETER_ID);
    Ok(AssemblyTarget {
        id: is_id.then(|| value.clone()),
        name: (!is_id).then_some(value),
        file_content,
    })
}

fn report_accepted(process_id: Option<String>) {
    match process_id {
        Some(id) => println!("Accepted - Process: {id}"),
        None => println!("Accepted"),
    }
}

fn string_attr(content: &Map<String, Value>, key: &str) -> Option<String> {
    match content.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    }
}

fn object_attr(content: &Map<String, Value>, key: &str) -> Option<Map<String, Value>> {
    match content.get(key) {
        Some(Value::Object(map)) => Some(map.clone()),
        _ => None,
    }
}

pub async fn list_assemblies(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let client = tnco_client(configuration, matches)?;
    let assemblies = client.assemblies().get_topn().await?;
    print_output(&assemblies, matches, ASSEMBLY_COLUMNS)
}

pub async fn get_assembly(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let candidates = vec![
        Identifier::param(PARAMETER_ID),
        Identifier::param(PARAMETER_NAME).with_opts(&["--name"]),
        Identifier::param(PARAMETER_NAME_CONTAINS).with_opts(&["--name-contains"]),
    ];
    let cli_params = cli_params_from_matches(matches);
    let identity = resolve_identity(&candidates, &cli_params, None, true)?
        .ok_or_else(|| CliActionError::MissingRequiredArgument(PARAMETER_ID.to_string()))?;
    let value = identity.value_as_string();

    let client = tnco_client(configuration, matches)?;
    let api = client.assemblies();
    let result = match identity.identifier.param_name.as_deref() {
        Some(PARAMETER_NAME) => api.all_with_name(&value).await?,
        Some(PARAMETER_NAME_CONTAINS) => api.all_with_name_containing(&value).await?,
        _ => api.get(&value).await?,
    };
    print_output(&result, matches, ASSEMBLY_COLUMNS)
}

pub async fn create_assembly(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let cli_params = cli_params_from_matches(matches);
    ValidationPipeline::new()
        .mutually_exclusive(PARAMETER_FILE, PARAMETER_SET)
        .require_any(&[PARAMETER_FILE, PARAMETER_SET])
        .run(&cli_params)?;
    let content = super::utils::object_content_from_matches(matches)?
        .ok_or_else(|| CliActionError::MissingRequiredArgument(PARAMETER_FILE.to_string()))?;

    let assembly_name = string_attr(&content, "assemblyName")
        .or_else(|| string_attr(&content, PARAMETER_NAME))
        .ok_or_else(|| CliActionError::MissingRequiredArgument("assemblyName".to_string()))?;
    let descriptor_name = string_attr(&content, "descriptorName")
        .ok_or_else(|| CliActionError::MissingRequiredArgument("descriptorName".to_string()))?;

    let intent = CreateAssemblyIntent {
        assembly_name: Some(assembly_name),
        descriptor_name: Some(descriptor_name),
        intended_state: string_attr(&content, "intendedState"),
        properties: object_attr(&content, "properties"),
    };
    let client = tnco_client(configuration, matches)?;
    let process_id = client.assemblies().intent_create(&intent).await?;
    report_accepted(process_id);
    Ok(())
}

pub async fn upgrade_assembly(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let target = resolve_target(matches)?;
    // Whatever identified the assembly in the file must not leak into the
    // upgrade payload.
    let extras = target
        .file_content
        .as_ref()
        .map(|content| strip_identifier_params(&target_identifiers(), content))
        .unwrap_or_default();

    let intent = UpgradeAssemblyIntent {
        assembly_id: target.id,
        assembly_name: target.name,
        descriptor_name: string_attr(&extras, "descriptorName"),
        properties: object_attr(&extras, "properties"),
    };
    let client = tnco_client(configuration, matches)?;
    let process_id = client.assemblies().intent_upgrade(&intent).await?;
    report_accepted(process_id);
    Ok(())
}

pub async fn delete_assembly(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let target = resolve_target(matches)?;
    let shown = target
        .name
        .clone()
        .or_else(|| target.id.clone())
        .unwrap_or_default();
    let intent = DeleteAssemblyIntent {
        assembly_id: target.id,
        assembly_name: target.name,
    };
    let client = tnco_client(configuration, matches)?;
    match client.assemblies().intent_delete(&intent).await {
        Ok(process_id) => {
            report_accepted(process_id);
            Ok(())
        }
        Err(e) if matches.get_flag(PARAMETER_IGNORE_MISSING) && MISSING.matches_tnco(&e) => {
            debug!("Delete of {} failed as missing: {}", shown, e);
            report_ignored_missing(DISPLAY_NAME, &shown);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn change_assembly_state(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let target = resolve_target(matches)?;
    let intended_state = required_string(matches, PARAMETER_INTENDED_STATE)?;
    let intent = ChangeAssemblyStateIntent {
        assembly_id: target.id,
        assembly_name: target.name,
        intended_state: Some(intended_state.to_string()),
    };
    let client = tnco_client(configuration, matches)?;
    let process_id = client.assemblies().intent_change_state(&intent).await?;
    report_accepted(process_id);
    Ok(())
}

pub async fn heal_assembly(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let target = resolve_target(matches)?;
    let broken_component = required_string(matches, PARAMETER_BROKEN_COMPONENT)?;
    let intent = HealAssemblyIntent {
        assembly_id: target.id,
        assembly_name: target.name,
        broken_component_name: Some(broken_component.to_string()),
        ..HealAssemblyIntent::default()
    };
    let client = tnco_client(configuration, matches)?;
    let process_id = client.assemblies().intent_heal(&intent).await?;
    report_accepted(process_id);
    Ok(())
}
