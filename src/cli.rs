//! Dispatch of parsed CLI commands to their action handlers.

use crate::{
    actions,
    commands::params::{
        COMMAND_ADD, COMMAND_ASSEMBLY, COMMAND_BEHAVIOUR, COMMAND_CANCEL, COMMAND_CHANGESTATE,
        COMMAND_CREATE, COMMAND_DCIM, COMMAND_DELETE, COMMAND_DEPLOYMENT_LOCATION,
        COMMAND_DESCRIPTOR, COMMAND_DEVICE, COMMAND_ENV, COMMAND_EXECUTION, COMMAND_GET,
        COMMAND_HEAL, COMMAND_LIST, COMMAND_PATH, COMMAND_PROGRESS, COMMAND_PROJECT,
        COMMAND_RACK, COMMAND_REMOVE, COMMAND_RESOURCE_MANAGER, COMMAND_SCENARIO, COMMAND_SITE,
        COMMAND_START, COMMAND_UPDATE, COMMAND_UPGRADE, COMMAND_USE,
    },
    config::Configuration,
    error::CliError,
};
use clap::ArgMatches;
use tracing::debug;

fn unsupported(context: &str, matches: &ArgMatches) -> Result<(), CliError> {
    let name = matches
        .subcommand()
        .map(|(n, _)| n.to_string())
        .unwrap_or_default();
    debug!("Unsupported subcommand {:?} under {:?}", name, context);
    Err(CliError::UnsupportedSubcommand(name))
}

/// Execute the parsed command tree.
pub async fn execute_command(matches: &ArgMatches) -> Result<(), CliError> {
    let mut configuration = Configuration::load_or_create_default()?;

    match matches.subcommand() {
        Some((COMMAND_ENV, sub)) => execute_env_command(&mut configuration, sub).await,
        Some((COMMAND_DESCRIPTOR, sub)) => execute_descriptor_command(&configuration, sub).await,
        Some((COMMAND_ASSEMBLY, sub)) => execute_assembly_command(&configuration, sub).await,
        Some((COMMAND_DEPLOYMENT_LOCATION, sub)) => {
            execute_deployment_location_command(&configuration, sub).await
        }
        Some((COMMAND_RESOURCE_MANAGER, sub)) => {
            execute_resource_manager_command(&configuration, sub).await
        }
        Some((COMMAND_BEHAVIOUR, sub)) => execute_behaviour_command(&configuration, sub).await,
        Some((COMMAND_DCIM, sub)) => execute_dcim_command(&configuration, sub).await,
        _ => unsupported("root", matches),
    }
}

async fn execute_env_command(
    configuration: &mut Configuration,
    matches: &ArgMatches,
) -> Result<(), CliError> {
    use actions::environments;
    match matches.subcommand() {
        Some((COMMAND_ADD, sub)) => Ok(environments::add_environment(configuration, sub).await?),
        Some((COMMAND_LIST, sub)) => Ok(environments::list_environments(configuration, sub).await?),
        Some((COMMAND_GET, sub)) => Ok(environments::get_environment(configuration, sub).await?),
        Some((COMMAND_USE, sub)) => Ok(environments::use_environment(configuration, sub).await?),
        Some((COMMAND_REMOVE, sub)) => {
            Ok(environments::remove_environment(configuration, sub).await?)
        }
        Some((COMMAND_PATH, _)) => Ok(environments::show_configuration_path().await?),
        _ => unsupported(COMMAND_ENV, matches),
    }
}

async fn execute_descriptor_command(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliError> {
    use actions::descriptors;
    match matches.subcommand() {
        Some((COMMAND_LIST, sub)) => Ok(descriptors::list_descriptors(configuration, sub).await?),
        Some((COMMAND_GET, sub)) => Ok(descriptors::get_descriptor(configuration, sub).await?),
        Some((COMMAND_CREATE, sub)) => {
            Ok(descriptors::create_descriptor(configuration, sub).await?)
        }
        Some((COMMAND_UPDATE, sub)) => {
            Ok(descriptors::update_descriptor(configuration, sub).await?)
        }
        Some((COMMAND_DELETE, sub)) => {
            Ok(descriptors::delete_descriptor(configuration, sub).await?)
        }
        _ => unsupported(COMMAND_DESCRIPTOR, matches),
    }
}

async fn execute_assembly_command(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliError> {
    use actions::assemblies;
    match matches.subcommand() {
        Some((COMMAND_LIST, sub)) => Ok(assemblies::list_assemblies(configuration, sub).await?),
        Some((COMMAND_GET, sub)) => Ok(assemblies::get_assembly(configuration, sub).await?),
        Some((COMMAND_CREATE, sub)) => Ok(assemblies::create_assembly(configuration, sub).await?),
        Some((COMMAND_UPGRADE, sub)) => Ok(assemblies::upgrade_assembly(configuration, sub).await?),
        Some((COMMAND_DELETE, sub)) => Ok(assemblies::delete_assembly(configuration, sub).await?),
        Some((COMMAND_CHANGESTATE, sub)) => {
            Ok(assemblies::change_assembly_state(configuration, sub).await?)
        }
        Some((COMMAND_HEAL, sub)) => Ok(assemblies::heal_assembly(configuration, sub).await?),
        _ => unsupported(COMMAND_ASSEMBLY, matches),
    }
}

async fn execute_deployment_location_command(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliError> {
    use actions::deployment_locations;
    match matches.subcommand() {
        Some((COMMAND_LIST, sub)) => {
            Ok(deployment_locations::list_deployment_locations(configuration, sub).await?)
        }
        Some((COMMAND_GET, sub)) => {
            Ok(deployment_locations::get_deployment_location(configuration, sub).await?)
        }
        Some((COMMAND_CREATE, sub)) => {
            Ok(deployment_locations::create_deployment_location(configuration, sub).await?)
        }
        Some((COMMAND_UPDATE, sub)) => {
            Ok(deployment_locations::update_deployment_location(configuration, sub).await?)
        }
        Some((COMMAND_DELETE, sub)) => {
            Ok(deployment_locations::delete_deployment_location(configuration, sub).await?)
        }
        _ => unsupported(COMMAND_DEPLOYMENT_LOCATION, matches),
    }
}

async fn execute_resource_manager_command(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliError> {
    use actions::resource_managers;
    match matches.subcommand() {
        Some((COMMAND_LIST, sub)) => {
            Ok(resource_managers::list_resource_managers(configuration, sub).await?)
        }
        Some((COMMAND_GET, sub)) => {
            Ok(resource_managers::get_resource_manager(configuration, sub).await?)
        }
        Some((COMMAND_CREATE, sub)) => {
            Ok(resource_managers::create_resource_manager(configuration, sub).await?)
        }
        Some((COMMAND_UPDATE, sub)) => {
            Ok(resource_managers::update_resource_manager(configuration, sub).await?)
        }
        Some((COMMAND_DELETE, sub)) => {
            Ok(resource_managers::delete_resource_manager(configuration, sub).await?)
        }
        _ => unsupported(COMMAND_RESOURCE_MANAGER, matches),
    }
}

async fn execute_behaviour_command(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliError> {
    use actions::behaviour;
    match matches.subcommand() {
        Some((COMMAND_PROJECT, project)) => match project.subcommand() {
            Some((COMMAND_LIST, sub)) => Ok(behaviour::list_projects(configuration, sub).await?),
            Some((COMMAND_GET, sub)) => Ok(behaviour::get_project(configuration, sub).await?),
            Some((COMMAND_CREATE, sub)) => Ok(behaviour::create_project(configuration, sub).await?),
            Some((COMMAND_DELETE, sub)) => Ok(behaviour::delete_project(configuration, sub).await?),
            _ => unsupported(COMMAND_PROJECT, project),
        },
        Some((COMMAND_SCENARIO, scenario)) => match scenario.subcommand() {
            Some((COMMAND_LIST, sub)) => Ok(behaviour::list_scenarios(configuration, sub).await?),
            Some((COMMAND_GET, sub)) => Ok(behaviour::get_scenario(configuration, sub).await?),
            Some((COMMAND_CREATE, sub)) => {
                Ok(behaviour::create_scenario(configuration, sub).await?)
            }
            Some((COMMAND_UPDATE, sub)) => {
                Ok(behaviour::update_scenario(configuration, sub).await?)
            }
            Some((COMMAND_DELETE, sub)) => {
                Ok(behaviour::delete_scenario(configuration, sub).await?)
            }
            _ => unsupported(COMMAND_SCENARIO, scenario),
        },
        Some((COMMAND_EXECUTION, execution)) => match execution.subcommand() {
            Some((COMMAND_START, sub)) => Ok(behaviour::start_execution(configuration, sub).await?),
            Some((COMMAND_GET, sub)) => Ok(behaviour::get_execution(configuration, sub).await?),
            Some((COMMAND_CANCEL, sub)) => {
                Ok(behaviour::cancel_execution(configuration, sub).await?)
            }
            Some((COMMAND_LIST, sub)) => Ok(behaviour::list_executions(configuration, sub).await?),
            Some((COMMAND_PROGRESS, sub)) => {
                Ok(behaviour::execution_progress(configuration, sub).await?)
            }
            _ => unsupported(COMMAND_EXECUTION, execution),
        },
        _ => unsupported(COMMAND_BEHAVIOUR, matches),
    }
}

async fn execute_dcim_command(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<(), CliError> {
    use actions::dcim;
    match matches.subcommand() {
        Some((COMMAND_SITE, site)) => match site.subcommand() {
            Some((COMMAND_LIST, sub)) => Ok(dcim::list_sites(configuration, sub).await?),
            Some((COMMAND_GET, sub)) => Ok(dcim::get_site(configuration, sub).await?),
            Some((COMMAND_CREATE, sub)) => Ok(dcim::create_site(configuration, sub).await?),
            Some((COMMAND_DELETE, sub)) => Ok(dcim::delete_site(configuration, sub).await?),
            _ => unsupported(COMMAND_SITE, site),
        },
        Some((COMMAND_RACK, rack)) => match rack.subcommand() {
            Some((COMMAND_LIST, sub)) => Ok(dcim::list_racks(configuration, sub).await?),
            Some((COMMAND_GET, sub)) => Ok(dcim::get_rack(configuration, sub).await?),
            _ => unsupported(COMMAND_RACK, rack),
        },
        Some((COMMAND_DEVICE, device)) => match device.subcommand() {
            Some((COMMAND_LIST, sub)) => Ok(dcim::list_devices(configuration, sub).await?),
            Some((COMMAND_GET, sub)) => Ok(dcim::get_device(configuration, sub).await?),
            _ => unsupported(COMMAND_DEVICE, device),
        },
        _ => unsupported(COMMAND_DCIM, matches),
    }
}
