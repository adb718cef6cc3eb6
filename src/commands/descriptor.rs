//! Descriptor command definitions.

use crate::commands::params::{
    file_parameter, format_pretty_parameter, format_with_headers_parameter,
    ignore_missing_parameter, name_argument, output_parameter, COMMAND_CREATE, COMMAND_DELETE,
    COMMAND_DESCRIPTOR, COMMAND_GET, COMMAND_LIST, COMMAND_UPDATE, PARAMETER_EFFECTIVE,
};
use clap::{Arg, ArgAction, Command};

/// Create the descriptor command with all its subcommands.
pub fn descriptor_command() -> Command {
    Command::new(COMMAND_DESCRIPTOR)
        .about("Manage assembly descriptors in the catalog")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List all descriptors")
                .visible_alias("ls")
                .arg(output_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get a descriptor by name")
                .arg(name_argument(true))
                .arg(
                    Arg::new(PARAMETER_EFFECTIVE)
                        .long(PARAMETER_EFFECTIVE)
                        .action(ArgAction::SetTrue)
                        .help("Return the effective descriptor with inherited content resolved"),
                )
                .arg(output_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a descriptor from a file")
                .arg(file_parameter().required(true)),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update a descriptor from a file")
                .arg(file_parameter().required(true)),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a descriptor")
                .arg(name_argument(false))
                .arg(file_parameter())
                .arg(ignore_missing_parameter()),
        )
}
