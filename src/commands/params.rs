//! Shared command and parameter definitions for the CLI.
//!
//! Command and parameter names are defined once here so the command factories
//! and the action handlers agree on them.

use crate::format::OutputFormat;
use clap::{Arg, ArgAction};

// CRUD operations
pub const COMMAND_CREATE: &str = "create";
pub const COMMAND_GET: &str = "get";
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_UPDATE: &str = "update";
pub const COMMAND_DELETE: &str = "delete";

// Environment commands
pub const COMMAND_ENV: &str = "env";
pub const COMMAND_ADD: &str = "add";
pub const COMMAND_USE: &str = "use";
pub const COMMAND_REMOVE: &str = "remove";
pub const COMMAND_PATH: &str = "path";

// Resource commands
pub const COMMAND_DESCRIPTOR: &str = "descriptor";
pub const COMMAND_ASSEMBLY: &str = "assembly";
pub const COMMAND_DEPLOYMENT_LOCATION: &str = "deploymentlocation";
pub const COMMAND_RESOURCE_MANAGER: &str = "resourcemanager";
pub const COMMAND_BEHAVIOUR: &str = "behaviour";
pub const COMMAND_DCIM: &str = "dcim";

// Assembly lifecycle commands
pub const COMMAND_UPGRADE: &str = "upgrade";
pub const COMMAND_CHANGESTATE: &str = "changestate";
pub const COMMAND_HEAL: &str = "heal";

// Behaviour commands
pub const COMMAND_PROJECT: &str = "project";
pub const COMMAND_SCENARIO: &str = "scenario";
pub const COMMAND_EXECUTION: &str = "execution";
pub const COMMAND_START: &str = "start";
pub const COMMAND_CANCEL: &str = "cancel";
pub const COMMAND_PROGRESS: &str = "progress";

// DCIM commands
pub const COMMAND_SITE: &str = "site";
pub const COMMAND_RACK: &str = "rack";
pub const COMMAND_DEVICE: &str = "device";

// Parameter names
pub const PARAMETER_OUTPUT: &str = "output";
pub const PARAMETER_PRETTY: &str = "pretty";
pub const PARAMETER_HEADERS: &str = "headers";
pub const PARAMETER_ENVIRONMENT: &str = "environment";
pub const PARAMETER_NAME: &str = "name";
pub const PARAMETER_ID: &str = "id";
pub const PARAMETER_FILE: &str = "file";
pub const PARAMETER_SET: &str = "set";
pub const PARAMETER_IGNORE_MISSING: &str = "ignore-missing";
pub const PARAMETER_EFFECTIVE: &str = "effective";
pub const PARAMETER_TOPN: &str = "topn";
pub const PARAMETER_NAME_CONTAINS: &str = "name-contains";
pub const PARAMETER_INTENDED_STATE: &str = "intended-state";
pub const PARAMETER_BROKEN_COMPONENT: &str = "broken-component";
pub const PARAMETER_PROJECT: &str = "project";
pub const PARAMETER_SCENARIO: &str = "scenario";

// Environment settings parameters
pub const PARAMETER_TNCO_ADDRESS: &str = "tnco-address";
pub const PARAMETER_AUTH_MODE: &str = "auth-mode";
pub const PARAMETER_CLIENT_ID: &str = "client-id";
pub const PARAMETER_CLIENT_SECRET: &str = "client-secret";
pub const PARAMETER_USERNAME: &str = "username";
pub const PARAMETER_PASSWORD: &str = "password";
pub const PARAMETER_TOKEN: &str = "token";
pub const PARAMETER_AUTH_ADDRESS: &str = "auth-address";
pub const PARAMETER_DCIM_ADDRESS: &str = "dcim-address";
pub const PARAMETER_DCIM_TOKEN: &str = "dcim-token";
pub const PARAMETER_DESCRIPTION: &str = "description";
pub const PARAMETER_ACTIVATE: &str = "activate";

/// Create the global output format parameter.
pub fn output_parameter() -> Arg {
    Arg::new(PARAMETER_OUTPUT)
        .short('o')
        .long(PARAMETER_OUTPUT)
        .num_args(1)
        .required(false)
        .env("ORCHCTL_OUTPUT")
        .default_value("json")
        .help("Output data format")
        .value_parser(OutputFormat::names())
}

pub fn format_pretty_parameter() -> Arg {
    Arg::new(PARAMETER_PRETTY)
        .long(PARAMETER_PRETTY)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Pretty-print JSON output")
}

pub fn format_with_headers_parameter() -> Arg {
    Arg::new(PARAMETER_HEADERS)
        .long(PARAMETER_HEADERS)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Include a header row in CSV output")
}

/// Create the global environment selector parameter.
pub fn environment_parameter() -> Arg {
    Arg::new(PARAMETER_ENVIRONMENT)
        .short('e')
        .long(PARAMETER_ENVIRONMENT)
        .num_args(1)
        .required(false)
        .env("ORCHCTL_ENVIRONMENT")
        .global(true)
        .help("Name of the configured environment to target (defaults to the active environment)")
}

/// Positional name argument for target resolution.
pub fn name_argument(required: bool) -> Arg {
    Arg::new(PARAMETER_NAME)
        .num_args(1)
        .required(required)
        .help("Name of the target")
}

pub fn id_parameter() -> Arg {
    Arg::new(PARAMETER_ID)
        .long(PARAMETER_ID)
        .num_args(1)
        .required(false)
        .help("ID of the target")
}

pub fn file_parameter() -> Arg {
    Arg::new(PARAMETER_FILE)
        .short('f')
        .long(PARAMETER_FILE)
        .num_args(1)
        .required(false)
        .value_name("FILE")
        .help("Path to a YAML or JSON file holding the object content")
}

pub fn set_parameter() -> Arg {
    Arg::new(PARAMETER_SET)
        .long(PARAMETER_SET)
        .num_args(1)
        .action(ArgAction::Append)
        .required(false)
        .value_name("KEY=VALUE")
        .help("Set an attribute of the object (repeatable, not usable with --file)")
}

pub fn ignore_missing_parameter() -> Arg {
    Arg::new(PARAMETER_IGNORE_MISSING)
        .long(PARAMETER_IGNORE_MISSING)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Succeed (with a warning) when the target does not exist")
}
