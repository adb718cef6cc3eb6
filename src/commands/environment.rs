//! Environment command definitions.
//!
//! Environments are named entries in the configuration file grouping the
//! orchestration and DCIM endpoints a command targets.

use crate::commands::params::{
    format_pretty_parameter, format_with_headers_parameter, name_argument, output_parameter,
    COMMAND_ADD, COMMAND_ENV, COMMAND_GET, COMMAND_LIST, COMMAND_PATH, COMMAND_REMOVE,
    COMMAND_USE, PARAMETER_ACTIVATE, PARAMETER_AUTH_ADDRESS, PARAMETER_AUTH_MODE,
    PARAMETER_CLIENT_ID, PARAMETER_CLIENT_SECRET, PARAMETER_DCIM_ADDRESS, PARAMETER_DCIM_TOKEN,
    PARAMETER_DESCRIPTION, PARAMETER_PASSWORD, PARAMETER_TNCO_ADDRESS, PARAMETER_TOKEN,
    PARAMETER_USERNAME,
};
use clap::{Arg, ArgAction, Command};

/// Create the env command with all its subcommands.
pub fn env_command() -> Command {
    Command::new(COMMAND_ENV)
        .about("Manage configured environments")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_ADD)
                .about("Add or replace a named environment")
                .arg(name_argument(true))
                .arg(
                    Arg::new(PARAMETER_TNCO_ADDRESS)
                        .long(PARAMETER_TNCO_ADDRESS)
                        .num_args(1)
                        .required(true)
                        .help("Base address of the orchestration API"),
                )
                .arg(
                    Arg::new(PARAMETER_AUTH_MODE)
                        .long(PARAMETER_AUTH_MODE)
                        .num_args(1)
                        .default_value("client_credentials")
                        .value_parser(["client_credentials", "user_pass", "legacy", "token"])
                        .help("Authentication mode for the orchestration API"),
                )
                .arg(
                    Arg::new(PARAMETER_CLIENT_ID)
                        .long(PARAMETER_CLIENT_ID)
                        .num_args(1)
                        .help("OAuth client ID"),
                )
                .arg(
                    Arg::new(PARAMETER_CLIENT_SECRET)
                        .long(PARAMETER_CLIENT_SECRET)
                        .num_args(1)
                        .help("OAuth client secret"),
                )
                .arg(
                    Arg::new(PARAMETER_USERNAME)
                        .long(PARAMETER_USERNAME)
                        .num_args(1)
                        .help("Username for user_pass or legacy authentication"),
                )
                .arg(
                    Arg::new(PARAMETER_PASSWORD)
                        .long(PARAMETER_PASSWORD)
                        .num_args(1)
                        .help("Password for user_pass or legacy authentication"),
                )
                .arg(
                    Arg::new(PARAMETER_TOKEN)
                        .long(PARAMETER_TOKEN)
                        .num_args(1)
                        .help("Static bearer token"),
                )
                .arg(
                    Arg::new(PARAMETER_AUTH_ADDRESS)
                        .long(PARAMETER_AUTH_ADDRESS)
                        .num_args(1)
                        .help("Separate address serving the legacy login API"),
                )
                .arg(
                    Arg::new(PARAMETER_DCIM_ADDRESS)
                        .long(PARAMETER_DCIM_ADDRESS)
                        .num_args(1)
                        .help("Base address of the DCIM API"),
                )
                .arg(
                    Arg::new(PARAMETER_DCIM_TOKEN)
                        .long(PARAMETER_DCIM_TOKEN)
                        .num_args(1)
                        .help("API token for the DCIM API"),
                )
                .arg(
                    Arg::new(PARAMETER_DESCRIPTION)
                        .long(PARAMETER_DESCRIPTION)
                        .num_args(1)
                        .help("Human-readable description of the environment"),
                )
                .arg(
                    Arg::new(PARAMETER_ACTIVATE)
                        .long(PARAMETER_ACTIVATE)
                        .action(ArgAction::SetTrue)
                        .help("Make this the active environment"),
                ),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List configured environments")
                .visible_alias("ls")
                .arg(output_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Show one configured environment")
                .arg(name_argument(true))
                .arg(output_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_USE)
                .about("Set the active environment")
                .arg(name_argument(true)),
        )
        .subcommand(
            Command::new(COMMAND_REMOVE)
                .about("Remove a configured environment")
                .arg(name_argument(true)),
        )
        .subcommand(
            Command::new(COMMAND_PATH).about("Print the path of the configuration file"),
        )
}
