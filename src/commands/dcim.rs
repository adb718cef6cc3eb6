//! DCIM command definitions.

use crate::commands::params::{
    file_parameter, format_pretty_parameter, format_with_headers_parameter,
    ignore_missing_parameter, name_argument, output_parameter, COMMAND_CREATE, COMMAND_DCIM,
    COMMAND_DELETE, COMMAND_DEVICE, COMMAND_GET, COMMAND_LIST, COMMAND_RACK, COMMAND_SITE,
    PARAMETER_NAME,
};
use clap::{Arg, Command};

fn name_filter_parameter() -> Arg {
    Arg::new(PARAMETER_NAME)
        .long(PARAMETER_NAME)
        .num_args(1)
        .help("Only list records with this name")
}

/// Create the dcim command with all its subcommands.
pub fn dcim_command() -> Command {
    Command::new(COMMAND_DCIM)
        .about("Query and manage the DCIM system")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_SITE)
                .about("Manage DCIM sites")
                .subcommand_required(true)
                .subcommand(
                    Command::new(COMMAND_LIST)
                        .about("List sites")
                        .visible_alias("ls")
                        .arg(name_filter_parameter())
                        .arg(output_parameter())
                        .arg(format_pretty_parameter())
                        .arg(format_with_headers_parameter()),
                )
                .subcommand(
                    Command::new(COMMAND_GET)
                        .about("Get a site by ID")
                        .arg(name_argument(true))
                        .arg(output_parameter())
                        .arg(format_pretty_parameter())
                        .arg(format_with_headers_parameter()),
                )
                .subcommand(
                    Command::new(COMMAND_CREATE)
                        .about("Create a site from a file")
                        .arg(file_parameter().required(true)),
                )
                .subcommand(
                    Command::new(COMMAND_DELETE)
                        .about("Delete a site by ID")
                        .arg(name_argument(true))
                        .arg(ignore_missing_parameter()),
                ),
        )
        .subcommand(
            Command::new(COMMAND_RACK)
                .about("Query DCIM racks")
                .subcommand_required(true)
                .subcommand(
                    Command::new(COMMAND_LIST)
                        .about("List racks")
                        .visible_alias("ls")
                        .arg(name_filter_parameter())
                        .arg(output_parameter())
                        .arg(format_pretty_parameter())
                        .arg(format_with_headers_parameter()),
                )
                .subcommand(
                    Command::new(COMMAND_GET)
                        .about("Get a rack by ID")
                        .arg(name_argument(true))
                        .arg(output_parameter())
                        .arg(format_pretty_parameter())
                        .arg(format_with_headers_parameter()),
                ),
        )
        .subcommand(
            Command::new(COMMAND_DEVICE)
                .about("Query DCIM devices")
                .subcommand_required(true)
                .subcommand(
                    Command::new(COMMAND_LIST)
                        .about("List devices")
                        .visible_alias("ls")
                        .arg(name_filter_parameter())
                        .arg(output_parameter())
                        .arg(format_pretty_parameter())
                        .arg(format_with_headers_parameter()),
                )
                .subcommand(
                    Command::new(COMMAND_GET)
                        .about("Get a device by ID")
                        .arg(name_argument(true))
                        .arg(output_parameter())
                        .arg(format_pretty_parameter())
                        .arg(format_with_headers_parameter()),
                ),
        )
}
