//! Assembly command definitions.
//!
//! Lifecycle operations (create, upgrade, delete, changestate, heal) are
//! submitted as intents; the remaining subcommands read topology state.

use crate::commands::params::{
    file_parameter, format_pretty_parameter, format_with_headers_parameter, id_parameter,
    ignore_missing_parameter, name_argument, output_parameter, set_parameter, COMMAND_ASSEMBLY,
    COMMAND_CHANGESTATE, COMMAND_CREATE, COMMAND_DELETE, COMMAND_GET, COMMAND_HEAL, COMMAND_LIST,
    COMMAND_UPGRADE, PARAMETER_BROKEN_COMPONENT, PARAMETER_ID, PARAMETER_INTENDED_STATE,
    PARAMETER_NAME, PARAMETER_NAME_CONTAINS, PARAMETER_TOPN,
};
use clap::{Arg, Command};

/// Create the assembly command with all its subcommands.
pub fn assembly_command() -> Command {
    Command::new(COMMAND_ASSEMBLY)
        .about("Manage assembly instances in the topology")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List the most recently changed assemblies")
                .visible_alias("ls")
                .arg(
                    Arg::new(PARAMETER_TOPN)
                        .long(PARAMETER_TOPN)
                        .num_args(0)
                        .help("Ignored, kept for script compatibility (list always returns the top assemblies)"),
                )
                .arg(output_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get assemblies by ID, name or name fragment")
                .arg(Arg::new(PARAMETER_ID).num_args(1).required(false).help("ID of the assembly"))
                .arg(
                    Arg::new(PARAMETER_NAME)
                        .long(PARAMETER_NAME)
                        .num_args(1)
                        .help("Full name of the assembly"),
                )
                .arg(
                    Arg::new(PARAMETER_NAME_CONTAINS)
                        .long(PARAMETER_NAME_CONTAINS)
                        .num_args(1)
                        .help("Fragment the assembly name must contain"),
                )
                .arg(output_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Request creation of an assembly")
                .arg(file_parameter())
                .arg(set_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPGRADE)
                .about("Request an upgrade of an assembly")
                .arg(name_argument(false))
                .arg(id_parameter())
                .arg(file_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Request deletion of an assembly")
                .arg(name_argument(false))
                .arg(id_parameter())
                .arg(file_parameter())
                .arg(ignore_missing_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CHANGESTATE)
                .about("Request a state change of an assembly")
                .arg(name_argument(false))
                .arg(id_parameter())
                .arg(file_parameter())
                .arg(
                    Arg::new(PARAMETER_INTENDED_STATE)
                        .long(PARAMETER_INTENDED_STATE)
                        .num_args(1)
                        .required(true)
                        .help("State the assembly should move to"),
                ),
        )
        .subcommand(
            Command::new(COMMAND_HEAL)
                .about("Request healing of a broken component of an assembly")
                .arg(name_argument(false))
                .arg(id_parameter())
                .arg(file_parameter())
                .arg(
                    Arg::new(PARAMETER_BROKEN_COMPONENT)
                        .long(PARAMETER_BROKEN_COMPONENT)
                        .num_args(1)
                        .required(true)
                        .help("ID, name or metric key of the broken component"),
                ),
        )
}
