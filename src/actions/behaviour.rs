//! Handlers for the behaviour command group.

use crate::{
    actions::{
        utils::{
            cli_params_from_matches, load_file_content, print_output, report_ignored_missing,
            required_string, tnco_client, MissingDetector,
        },
        CliActionError,
    },
    commands::params::{
        PARAMETER_FILE, PARAMETER_IGNORE_MISSING, PARAMETER_NAME, PARAMETER_PROJECT,
        PARAMETER_SCENARIO,
    },
    config::Configuration,
    format::Column,
    identifier::{resolve_identity, Identifier},
    tnco::TncoClientError,
};
use clap::ArgMatches;
use serde_json::{Map, Value};
use tracing::debug;

const MISSING: MissingDetector = MissingDetector::StatusCode(404);

const PROJECT_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("DESCRIPTION", "description"),
];

const SCENARIO_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("PROJECT", "projectId"),
];

const EXECUTION_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("SCENARIO", "scenarioId"),
    Column::new("STATUS", "status"),
];

/// Resolve the target of a delete-style subcommand: positional name, or the
/// named attribute of the `-f` file.
fn resolve_target(
    matches: &ArgMatches,
    candidates: &[Identifier],
) -> Result<String, CliActionError> {
    let cli_params = cli_params_from_matches(matches);
    let file_content: Option<Map<String, Value>> =
        match matches.try_get_one::<String>(PARAMETER_FILE).ok().flatten() {
            Some(path) => Some(load_file_content(path)?),
            None => None,
        };
    let identity = resolve_identity(candidates, &cli_params, file_content.as_ref(), true)?
        .ok_or_else(|| CliActionError::MissingRequiredArgument(PARAMETER_NAME.to_string()))?;
    Ok(identity.value_as_string())
}

async fn report_delete(
    result: Result<(), TncoClientError>,
    matches: &ArgMatches,
    display_name: &str,
    id: &str,
) -> Result<(), CliActionError> {
    match result {
        Ok(()) => {
            println!("Removed {}: {id}", display_name.to_lowercase());
            Ok(())
        }
        Err(e) if matches.get_flag(PARAMETER_IGNORE_MISSING) && MISSING.matches_tnco(&e) => {
            debug!("Delete of {} failed as missing: {}", id, e);
            report_ignored_missing(display_name, id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn list_projects(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let client = tnco_client(configuration, matches)?;
    let projects = client.behaviour_projects().all().await?;
    print_output(&projects, matches, PROJECT_COLUMNS)
}

pub async fn get_project(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let id = required_string(matches, PARAMETER_NAME)?;
    let client = tnco_client(configuration, matches)?;
    let project = client.behaviour_projects().get(id).await?;
    print_output(&project, matches, PROJECT_COLUMNS)
}

pub async fn create_project(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let path = required_string(matches, PARAMETER_FILE)?;
    let content = load_file_content(path)?;
    let client = tnco_client(configuration, matches)?;
    client
        .behaviour_projects()
        .create(Value::Object(content))
        .await?;
    println!("Created behaviour project from {path}");
    Ok(())
}

pub async fn delete_project(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let candidates = vec![
        Identifier::arg_and_attr(PARAMETER_NAME),
        Identifier::attr("id"),
    ];
    let id = resolve_target(matches, &candidates)?;
    let client = tnco_client(configuration, matches)?;
    let result = client.behaviour_projects().delete(&id).await;
    report_delete(result, matches, "Behaviour Project", &id).await
}

pub async fn list_scenarios(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let project_id = required_string(matches, PARAMETER_PROJECT)?;
    let client = tnco_client(configuration, matches)?;
    let scenarios = client.behaviour_scenarios().all_in_project(project_id).await?;
    print_output(&scenarios, matches, SCENARIO_COLUMNS)
}

pub async fn get_scenario(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let id = required_string(matches, PARAMETER_NAME)?;
    let client = tnco_client(configuration, matches)?;
    let scenario = client.behaviour_scenarios().get(id).await?;
    print_output(&scenario, matches, SCENARIO_COLUMNS)
}

pub async fn create_scenario(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let path = required_string(matches, PARAMETER_FILE)?;
    let content = load_file_content(path)?;
    let client = tnco_client(configuration, matches)?;
    client
        .behaviour_scenarios()
        .create(Value::Object(content))
        .await?;
    println!("Created scenario from {path}");
    Ok(())
}

pub async fn update_scenario(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let path = required_string(matches, PARAMETER_FILE)?;
    let content = load_file_content(path)?;
    if !content.contains_key("id") {
        return Err(CliActionError::MissingRequiredArgument("id".to_string()));
    }
    let client = tnco_client(configuration, matches)?;
    client
        .behaviour_scenarios()
        .update(Value::Object(content))
        .await?;
    println!("Updated scenario from {path}");
    Ok(())
}

pub async fn delete_scenario(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    // The positional argument is the scenario ID; a file identifies the
    // scenario through its id attribute.
    let candidates = vec![Identifier::param_and_attr(PARAMETER_NAME, "id")];
    let id = resolve_target(matches, &candidates)?;
    let client = tnco_client(configuration, matches)?;
    let result = client.behaviour_scenarios().delete(&id).await;
    report_delete(result, matches, "Scenario", &id).await
}

pub async fn start_execution(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let scenario_id = required_string(matches, PARAMETER_SCENARIO)?;
    let client = tnco_client(configuration, matches)?;
    let execution = client.behaviour_scenario_execs().execute(scenario_id).await?;
    match execution.get("id").and_then(Value::as_str) {
        Some(id) => println!("Started execution: {id}"),
        None => println!("Started execution"),
    }
    Ok(())
}

pub async fn get_execution(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let id = required_string(matches, PARAMETER_NAME)?;
    let client = tnco_client(configuration, matches)?;
    let execution = client.behaviour_scenario_execs().get(id).await?;
    print_output(&execution, matches, EXECUTION_COLUMNS)
}

pub async fn cancel_execution(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let id = required_string(matches, PARAMETER_NAME)?;
    let client = tnco_client(configuration, matches)?;
    client.behaviour_scenario_execs().cancel(id).await?;
    println!("Requested cancellation of execution: {id}");
    Ok(())
}

pub async fn list_executions(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let project_id = required_string(matches, PARAMETER_PROJECT)?;
    let client = tnco_client(configuration, matches)?;
    let executions = client
        .behaviour_scenario_execs()
        .all_in_project(project_id)
        .await?;
    print_output(&executions, matches, EXECUTION_COLUMNS)
}

pub async fn execution_progress(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let id = required_string(matches, PARAMETER_NAME)?;
    let client = tnco_client(configuration, matches)?;
    let progress = client.behaviour_scenario_execs().get_progress(id).await?;
    print_output(&progress, matches, EXECUTION_COLUMNS)
}
