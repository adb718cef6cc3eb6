//! Handlers for the dcim command group.

use crate::{
    actions::{
        utils::{
            dcim_client, load_file_content, print_output, report_ignored_missing, required_string,
            MissingDetector,
        },
        CliActionError,
    },
    commands::params::{PARAMETER_FILE, PARAMETER_IGNORE_MISSING, PARAMETER_NAME},
    config::Configuration,
    format::Column,
};
use clap::ArgMatches;
use serde_json::Value;
use tracing::debug;

const MISSING: MissingDetector = MissingDetector::StatusCode(404);

const SITE_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("SLUG", "slug"),
    Column::new("STATUS", "status"),
];

const RACK_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("SITE", "site"),
    Column::new("STATUS", "status"),
];

const DEVICE_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("SITE", "site"),
    Column::new("STATUS", "status"),
];

fn name_filter(matches: &ArgMatches) -> Vec<(String, String)> {
    match matches.try_get_one::<String>(PARAMETER_NAME).ok().flatten() {
        Some(name) => vec![("name".to_string(), name.clone())],
        None => Vec::new(),
    }
}

pub async fn list_sites(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let client = dcim_client(configuration, matches)?;
    let sites = client.sites().all(&name_filter(matches)).await?;
    print_output(&Value::Array(sites), matches, SITE_COLUMNS)
}

pub async fn get_site(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let id = required_string(matches, PARAMETER_NAME)?;
    let client = dcim_client(configuration, matches)?;
    let site = client.sites().get(id).await?;
    print_output(&site, matches, SITE_COLUMNS)
}

pub async fn create_site(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let path = required_string(matches, PARAMETER_FILE)?;
    let content = load_file_content(path)?;
    let client = dcim_client(configuration, matches)?;
    let created = client.sites().create(&Value::Object(content)).await?;
    print_output(&created, matches, SITE_COLUMNS)
}

pub async fn delete_site(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let id = required_string(matches, PARAMETER_NAME)?;
    let client = dcim_client(configuration, matches)?;
    match client.sites().delete(id).await {
        Ok(()) => {
            println!("Removed site: {id}");
            Ok(())
        }
        Err(e) if matches.get_flag(PARAMETER_IGNORE_MISSING) && MISSING.matches_dcim(&e) => {
            debug!("Delete of {} failed as missing: {}", id, e);
            report_ignored_missing("Site", id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn list_racks(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let client = dcim_client(configuration, matches)?;
    let racks = client.racks().all(&name_filter(matches)).await?;
    print_output(&Value::Array(racks), matches, RACK_COLUMNS)
}

pub async fn get_rack(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let id = required_string(matches, PARAMETER_NAME)?;
    let client = dcim_client(configuration, matches)?;
    let rack = client.racks().get(id).await?;
    print_output(&rack, matches, RACK_COLUMNS)
}

pub async fn list_devices(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let client = dcim_client(configuration, matches)?;
    let devices = client.devices().all(&name_filter(matches)).await?;
    print_output(&Value::Array(devices), matches, DEVICE_COLUMNS)
}

pub async fn get_device(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let id = required_string(matches, PARAMETER_NAME)?;
    let client = dcim_client(configuration, matches)?;
    let device = client.devices().get(id).await?;
    print_output(&device, matches, DEVICE_COLUMNS)
}
