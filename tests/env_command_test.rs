#[cfg(test)]
mod env_command_tests {
    use assert_cmd::prelude::*;
    use predicates::prelude::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn orchctl(config_dir: &TempDir) -> Command {
        let mut cmd = Command::cargo_bin("orchctl").unwrap();
        cmd.env("ORCHCTL_CONFIG_DIR", config_dir.path());
        cmd
    }

    #[test]
    fn env_path_points_into_the_override_directory() {
        let config_dir = TempDir::new().unwrap();
        orchctl(&config_dir)
            .args(["env", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                config_dir.path().to_str().unwrap(),
            ))
            .stdout(predicate::str::contains("config.yml"));
    }

    #[test]
    fn env_add_use_and_list_round_trip() {
        let config_dir = TempDir::new().unwrap();
        orchctl(&config_dir)
            .args([
                "env",
                "add",
                "dev",
                "--tnco-address",
                "https://tnco.example.com",
                "--client-id",
                "orchctl",
                "--client-secret",
                "s3cret",
                "--activate",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Environment dev saved"));

        orchctl(&config_dir)
            .args(["env", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("dev"))
            .stdout(predicate::str::contains("https://tnco.example.com"));

        orchctl(&config_dir)
            .args(["env", "get", "dev", "-o", "yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("address: https://tnco.example.com/"));
    }

    #[test]
    fn env_use_rejects_unknown_environment() {
        let config_dir = TempDir::new().unwrap();
        orchctl(&config_dir)
            .args(["env", "use", "nope"])
            .assert()
            .failure()
            .code(78)
            .stderr(predicate::str::contains("no environment named"));
    }

    #[test]
    fn env_remove_clears_the_entry() {
        let config_dir = TempDir::new().unwrap();
        orchctl(&config_dir)
            .args([
                "env",
                "add",
                "stale",
                "--tnco-address",
                "https://tnco.example.com",
            ])
            .assert()
            .success();

        orchctl(&config_dir)
            .args(["env", "remove", "stale"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Environment stale removed"));

        orchctl(&config_dir)
            .args(["env", "get", "stale"])
            .assert()
            .failure()
            .code(78);
    }

    #[test]
    fn commands_without_an_environment_fail_with_config_error() {
        let config_dir = TempDir::new().unwrap();
        orchctl(&config_dir)
            .args(["descriptor", "list"])
            .assert()
            .failure()
            .code(78)
            .stderr(predicate::str::contains("no active environment"));
    }

    #[test]
    fn invalid_tnco_address_is_a_usage_error() {
        let config_dir = TempDir::new().unwrap();
        orchctl(&config_dir)
            .args(["env", "add", "bad", "--tnco-address", "not a url"])
            .assert()
            .failure()
            .code(64)
            .stderr(predicate::str::contains("Invalid value for tnco-address"));
    }
}
