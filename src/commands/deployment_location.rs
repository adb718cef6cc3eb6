//! Deployment location command definitions.

use crate::commands::params::{
    file_parameter, format_pretty_parameter, format_with_headers_parameter,
    ignore_missing_parameter, name_argument, output_parameter, set_parameter, COMMAND_CREATE,
    COMMAND_DELETE, COMMAND_DEPLOYMENT_LOCATION, COMMAND_GET, COMMAND_LIST, COMMAND_UPDATE,
    PARAMETER_NAME,
};
use clap::{Arg, Command};

/// Create the deploymentlocation command with all its subcommands.
pub fn deployment_location_command() -> Command {
    Command::new(COMMAND_DEPLOYMENT_LOCATION)
        .about("Manage deployment locations")
        .visible_alias("dl")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List deployment locations")
                .visible_alias("ls")
                .arg(
                    Arg::new(PARAMETER_NAME)
                        .long(PARAMETER_NAME)
                        .num_args(1)
                        .help("Only list locations with this name"),
                )
                .arg(output_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get a deployment location by name")
                .arg(name_argument(true))
                .arg(output_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a deployment location")
                .arg(file_parameter())
                .arg(set_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update a deployment location")
                .arg(name_argument(false))
                .arg(file_parameter())
                .arg(set_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a deployment location")
                .arg(name_argument(false))
                .arg(file_parameter())
                .arg(ignore_missing_parameter()),
        )
}
