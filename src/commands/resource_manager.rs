//! Resource manager command definitions.

use crate::commands::params::{
    file_parameter, format_pretty_parameter, format_with_headers_parameter,
    ignore_missing_parameter, name_argument, output_parameter, COMMAND_CREATE, COMMAND_DELETE,
    COMMAND_GET, COMMAND_LIST, COMMAND_RESOURCE_MANAGER, COMMAND_UPDATE,
};
use clap::Command;

/// Create the resourcemanager command with all its subcommands.
pub fn resource_manager_command() -> Command {
    Command::new(COMMAND_RESOURCE_MANAGER)
        .about("Manage onboarded resource managers")
        .visible_alias("rm")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List resource managers")
                .visible_alias("ls")
                .arg(output_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get a resource manager by name")
                .arg(name_argument(true))
                .arg(output_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Onboard a resource manager from a file")
                .arg(file_parameter().required(true))
                .arg(output_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update a resource manager")
                .arg(name_argument(false))
                .arg(file_parameter())
                .arg(output_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Remove a resource manager")
                .arg(name_argument(false))
                .arg(file_parameter())
                .arg(ignore_missing_parameter()),
        )
}
