//! CLI command definitions and argument parsing.
//!
//! Each resource has its own command-factory module; `create_cli_commands`
//! assembles the full tree and parses the process arguments.

use clap::{ArgMatches, Command};

pub mod assembly;
pub mod behaviour;
pub mod dcim;
pub mod deployment_location;
pub mod descriptor;
pub mod environment;
pub mod params;
pub mod resource_manager;

/// The full command tree, without parsing anything.
pub fn root_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(params::environment_parameter())
        .subcommand(environment::env_command())
        .subcommand(descriptor::descriptor_command())
        .subcommand(assembly::assembly_command())
        .subcommand(deployment_location::deployment_location_command())
        .subcommand(resource_manager::resource_manager_command())
        .subcommand(behaviour::behaviour_command())
        .subcommand(dcim::dcim_command())
}

/// Create and configure all CLI commands, then parse the process arguments.
pub fn create_cli_commands() -> ArgMatches {
    root_command().get_matches()
}

#[cfg(test)]
mod tests {
    use super::*;
    use params::*;

    #[test]
    fn command_tree_is_well_formed() {
        root_command().debug_assert();
    }

    #[test]
    fn every_resource_command_is_present() {
        let root = root_command();
        for name in [
            COMMAND_ENV,
            COMMAND_DESCRIPTOR,
            COMMAND_ASSEMBLY,
            COMMAND_DEPLOYMENT_LOCATION,
            COMMAND_RESOURCE_MANAGER,
            COMMAND_BEHAVIOUR,
            COMMAND_DCIM,
        ] {
            assert!(
                root.find_subcommand(name).is_some(),
                "missing subcommand {name}"
            );
        }
    }

    #[test]
    fn assembly_changestate_requires_intended_state() {
        let result = root_command().try_get_matches_from([
            "orchctl",
            COMMAND_ASSEMBLY,
            COMMAND_CHANGESTATE,
            "my-assembly",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn delete_accepts_name_file_and_ignore_missing() {
        let matches = root_command()
            .try_get_matches_from([
                "orchctl",
                COMMAND_ASSEMBLY,
                COMMAND_DELETE,
                "my-assembly",
                "--ignore-missing",
            ])
            .unwrap();
        let (_, assembly) = matches.subcommand().unwrap();
        let (_, delete) = assembly.subcommand().unwrap();
        assert_eq!(
            delete.get_one::<String>(PARAMETER_NAME).map(|s| s.as_str()),
            Some("my-assembly")
        );
        assert!(delete.get_flag(PARAMETER_IGNORE_MISSING));
    }

    #[test]
    fn dcim_rack_commands_parse() {
        let matches = root_command()
            .try_get_matches_from(["orchctl", COMMAND_DCIM, COMMAND_RACK, COMMAND_GET, "rack-1"])
            .unwrap();
        let (_, dcim) = matches.subcommand().unwrap();
        let (group, rack) = dcim.subcommand().unwrap();
        assert_eq!(group, COMMAND_RACK);
        let (_, get) = rack.subcommand().unwrap();
        assert_eq!(
            get.get_one::<String>(PARAMETER_NAME).map(|s| s.as_str()),
            Some("rack-1")
        );
    }

    #[test]
    fn output_and_environment_bind_to_env_vars() {
        assert_eq!(
            output_parameter().get_env(),
            Some(std::ffi::OsStr::new("ORCHCTL_OUTPUT"))
        );
        assert_eq!(
            environment_parameter().get_env(),
            Some(std::ffi::OsStr::new("ORCHCTL_ENVIRONMENT"))
        );
    }

    #[test]
    fn resource_aliases_resolve() {
        for (alias, name) in [
            ("dl", COMMAND_DEPLOYMENT_LOCATION),
            ("rm", COMMAND_RESOURCE_MANAGER),
        ] {
            let root = root_command();
            let found = root.find_subcommand(alias);
            assert_eq!(found.map(|c| c.get_name()), Some(name));
        }
    }
}
