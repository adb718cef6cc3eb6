//! Behaviour testing command definitions.
//!
//! Behaviour assets live in projects; scenarios belong to a project and
//! executions are runs of a scenario.

use crate::commands::params::{
    file_parameter, format_pretty_parameter, format_with_headers_parameter,
    ignore_missing_parameter, name_argument, output_parameter, COMMAND_BEHAVIOUR, COMMAND_CANCEL,
    COMMAND_CREATE, COMMAND_DELETE, COMMAND_EXECUTION, COMMAND_GET, COMMAND_LIST,
    COMMAND_PROGRESS, COMMAND_PROJECT, COMMAND_SCENARIO, COMMAND_START, COMMAND_UPDATE,
    PARAMETER_PROJECT, PARAMETER_SCENARIO,
};
use clap::{Arg, Command};

fn project_parameter(required: bool) -> Arg {
    Arg::new(PARAMETER_PROJECT)
        .long(PARAMETER_PROJECT)
        .num_args(1)
        .required(required)
        .help("ID of the behaviour project")
}

fn output_args(command: Command) -> Command {
    command
        .arg(output_parameter())
        .arg(format_pretty_parameter())
        .arg(format_with_headers_parameter())
}

/// Create the behaviour command with all its subcommands.
pub fn behaviour_command() -> Command {
    Command::new(COMMAND_BEHAVIOUR)
        .about("Manage behaviour testing projects, scenarios and executions")
        .subcommand_required(true)
        .subcommand(project_command())
        .subcommand(scenario_command())
        .subcommand(execution_command())
}

fn project_command() -> Command {
    Command::new(COMMAND_PROJECT)
        .about("Manage behaviour projects")
        .subcommand_required(true)
        .subcommand(output_args(
            Command::new(COMMAND_LIST)
                .about("List behaviour projects")
                .visible_alias("ls"),
        ))
        .subcommand(output_args(
            Command::new(COMMAND_GET)
                .about("Get a behaviour project by ID")
                .arg(name_argument(true)),
        ))
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a behaviour project")
                .arg(file_parameter().required(true)),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a behaviour project")
                .arg(name_argument(false))
                .arg(file_parameter())
                .arg(ignore_missing_parameter()),
        )
}

fn scenario_command() -> Command {
    Command::new(COMMAND_SCENARIO)
        .about("Manage behaviour scenarios")
        .subcommand_required(true)
        .subcommand(output_args(
            Command::new(COMMAND_LIST)
                .about("List scenarios in a project")
                .visible_alias("ls")
                .arg(project_parameter(true)),
        ))
        .subcommand(output_args(
            Command::new(COMMAND_GET)
                .about("Get a scenario by ID")
                .arg(name_argument(true)),
        ))
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a scenario from a file")
                .arg(file_parameter().required(true)),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update a scenario from a file")
                .arg(file_parameter().required(true)),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a scenario")
                .arg(name_argument(false))
                .arg(file_parameter())
                .arg(ignore_missing_parameter()),
        )
}

fn execution_command() -> Command {
    Command::new(COMMAND_EXECUTION)
        .about("Manage scenario executions")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_START)
                .about("Start an execution of a scenario")
                .arg(
                    Arg::new(PARAMETER_SCENARIO)
                        .long(PARAMETER_SCENARIO)
                        .num_args(1)
                        .required(true)
                        .help("ID of the scenario to execute"),
                ),
        )
        .subcommand(output_args(
            Command::new(COMMAND_GET)
                .about("Get an execution by ID")
                .arg(name_argument(true)),
        ))
        .subcommand(
            Command::new(COMMAND_CANCEL)
                .about("Cancel a running execution")
                .arg(name_argument(true)),
        )
        .subcommand(output_args(
            Command::new(COMMAND_LIST)
                .about("List executions in a project")
                .visible_alias("ls")
                .arg(project_parameter(true)),
        ))
        .subcommand(output_args(
            Command::new(COMMAND_PROGRESS)
                .about("Show the progress of an execution")
                .arg(name_argument(true)),
        ))
}
