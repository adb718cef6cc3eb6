//! Shared helpers for the action handlers.
//!
//! Handlers work with loosely-typed payloads (`serde_json::Map`); the helpers
//! here turn parsed CLI matches and `-f` files into those maps, pick output
//! formats and render results.

use crate::{
    actions::CliActionError,
    commands::params::{
        PARAMETER_ENVIRONMENT, PARAMETER_FILE, PARAMETER_HEADERS, PARAMETER_OUTPUT,
        PARAMETER_PRETTY, PARAMETER_SET,
    },
    config::Configuration,
    dcim::{DcimClient, DcimClientError},
    format::{format_value, Column, OutputFormat, OutputFormatOptions},
    tnco::{TncoClient, TncoClientError},
};
use clap::parser::ValueSource;
use clap::ArgMatches;
use serde_json::{Map, Value};
use std::fs;
use tracing::trace;

/// Decides whether an upstream error means the target does not exist.
/// Most APIs report a clean 404; a few bury it in the error message.
#[derive(Debug, Clone, Copy)]
pub enum MissingDetector {
    StatusCode(u16),
    MessageContains(&'static str),
}

impl MissingDetector {
    pub fn is_missing(&self, status: Option<u16>, detail: Option<&str>) -> bool {
        match self {
            MissingDetector::StatusCode(expected) => status == Some(*expected),
            MissingDetector::MessageContains(fragment) => {
                detail.map(|d| d.contains(fragment)).unwrap_or(false)
            }
        }
    }

    pub fn matches_tnco(&self, error: &TncoClientError) -> bool {
        self.is_missing(error.status_code(), error.detail_message())
    }

    pub fn matches_dcim(&self, error: &DcimClientError) -> bool {
        self.is_missing(error.status_code(), None)
    }
}

/// Warning printed when `--ignore-missing` swallows a missing target.
pub fn report_ignored_missing(display_name: &str, id: &str) {
    println!("No {display_name} found with name {id} (ignoring)");
}

/// Load a `-f` file as an object. YAML and JSON are both accepted.
pub fn load_file_content(path: &str) -> Result<Map<String, Value>, CliActionError> {
    let raw = fs::read_to_string(path).map_err(|cause| CliActionError::FileError {
        path: path.to_string(),
        cause,
    })?;
    let value: Value =
        serde_yaml::from_str(&raw).map_err(|e| CliActionError::InvalidFileContent {
            path: path.to_string(),
            detail: e.to_string(),
        })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CliActionError::InvalidFileContent {
            path: path.to_string(),
            detail: format!("expected a mapping, found {other}"),
        }),
    }
}

/// Parse repeated `--set key=value` pairs into an object. Values are read as
/// YAML scalars so numbers and booleans come through typed.
pub fn parse_set_values<'a>(
    values: impl Iterator<Item = &'a String>,
) -> Result<Map<String, Value>, CliActionError> {
    let mut content = Map::new();
    for pair in values {
        let (key, raw_value) = pair
            .split_once('=')
            .ok_or_else(|| CliActionError::InvalidSetValue(pair.clone()))?;
        if key.is_empty() {
            return Err(CliActionError::InvalidSetValue(pair.clone()));
        }
        let value = serde_yaml::from_str::<Value>(raw_value)
            .unwrap_or_else(|_| Value::String(raw_value.to_string()));
        content.insert(key.to_string(), value);
    }
    Ok(content)
}

/// Collect the explicitly supplied parameters of a command into a map for
/// the identifier resolver and payload building. Defaulted parameters are
/// skipped so they never masquerade as user input.
pub fn cli_params_from_matches(matches: &ArgMatches) -> Map<String, Value> {
    let mut params = Map::new();
    for id in matches.ids() {
        let name = id.as_str();
        if matches!(matches.value_source(name), Some(ValueSource::DefaultValue)) {
            continue;
        }
        if let Ok(Some(values)) = matches.try_get_many::<String>(name) {
            let values: Vec<Value> = values
                .map(|v| Value::String(v.clone()))
                .collect();
            let value = if values.len() == 1 {
                values.into_iter().next().unwrap_or(Value::Null)
            } else {
                Value::Array(values)
            };
            params.insert(name.to_string(), value);
        } else if let Ok(Some(flag)) = matches.try_get_one::<bool>(name) {
            params.insert(name.to_string(), Value::Bool(*flag));
        }
    }
    trace!("Collected CLI parameters: {:?}", params.keys());
    params
}

/// Object content for create/update style commands: `-f` file when given,
/// else accumulated `--set` pairs, else nothing.
pub fn object_content_from_matches(
    matches: &ArgMatches,
) -> Result<Option<Map<String, Value>>, CliActionError> {
    if let Ok(Some(path)) = matches.try_get_one::<String>(PARAMETER_FILE) {
        return Ok(Some(load_file_content(path)?));
    }
    if let Ok(Some(values)) = matches.try_get_many::<String>(PARAMETER_SET) {
        let values: Vec<&String> = values.collect();
        if !values.is_empty() {
            return Ok(Some(parse_set_values(values.into_iter())?));
        }
    }
    Ok(None)
}

/// Output format selected on the command, including the pretty/headers flags.
pub fn output_format_from_matches(
    matches: &ArgMatches,
) -> Result<OutputFormat, CliActionError> {
    let format_name = matches
        .try_get_one::<String>(PARAMETER_OUTPUT)
        .ok()
        .flatten()
        .map(|s| s.as_str())
        .unwrap_or("json");
    let options = OutputFormatOptions {
        pretty: matches
            .try_get_one::<bool>(PARAMETER_PRETTY)
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false),
        with_headers: matches
            .try_get_one::<bool>(PARAMETER_HEADERS)
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false),
    };
    Ok(OutputFormat::from_string_with_options(format_name, options)?)
}

/// Render a result payload in the selected format and print it.
pub fn print_output(
    value: &Value,
    matches: &ArgMatches,
    columns: &[Column],
) -> Result<(), CliActionError> {
    let format = output_format_from_matches(matches)?;
    let rendered = format_value(value, &format, columns)?;
    println!("{}", rendered.trim_end_matches('\n'));
    Ok(())
}

/// A parameter clap should have enforced; missing means a programming error
/// in the command tree, reported as a usage problem rather than a panic.
pub fn required_string<'a>(
    matches: &'a ArgMatches,
    name: &str,
) -> Result<&'a str, CliActionError> {
    matches
        .try_get_one::<String>(name)
        .ok()
        .flatten()
        .map(|s| s.as_str())
        .ok_or_else(|| CliActionError::MissingRequiredArgument(name.to_string()))
}

/// Name of the environment targeted by this invocation, when given.
pub fn environment_name(matches: &ArgMatches) -> Option<&str> {
    matches
        .try_get_one::<String>(PARAMETER_ENVIRONMENT)
        .ok()
        .flatten()
        .map(|s| s.as_str())
}

/// Build a TNCO client for the targeted environment.
pub fn tnco_client(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<TncoClient, CliActionError> {
    let environment = configuration.environment_or_active(environment_name(matches))?;
    Ok(environment.tnco()?.build_client()?)
}

/// Build a DCIM client for the targeted environment.
pub fn dcim_client(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<DcimClient, CliActionError> {
    let environment = configuration.environment_or_active(environment_name(matches))?;
    Ok(environment.dcim()?.build_client()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn set_values_parse_typed_scalars() {
        let pairs = vec![
            "descriptorName=assembly::t::1.0".to_string(),
            "replicas=3".to_string(),
            "enabled=true".to_string(),
        ];
        let content = parse_set_values(pairs.iter()).unwrap();
        assert_eq!(
            Value::Object(content),
            json!({
                "descriptorName": "assembly::t::1.0",
                "replicas": 3,
                "enabled": true
            })
        );
    }

    #[test]
    fn set_value_without_equals_is_rejected() {
        let pairs = vec!["nonsense".to_string()];
        assert!(matches!(
            parse_set_values(pairs.iter()),
            Err(CliActionError::InvalidSetValue(p)) if p == "nonsense"
        ));
    }

    #[test]
    fn file_content_accepts_yaml_and_json() {
        let mut yaml_file = NamedTempFile::new().unwrap();
        writeln!(yaml_file, "name: a\nproperties:\n  size: small").unwrap();
        let content = load_file_content(yaml_file.path().to_str().unwrap()).unwrap();
        assert_eq!(content.get("name"), Some(&json!("a")));

        let mut json_file = NamedTempFile::new().unwrap();
        writeln!(json_file, "{{\"name\": \"b\"}}").unwrap();
        let content = load_file_content(json_file.path().to_str().unwrap()).unwrap();
        assert_eq!(content.get("name"), Some(&json!("b")));
    }

    #[test]
    fn file_content_must_be_a_mapping() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "- just\n- a\n- list").unwrap();
        assert!(matches!(
            load_file_content(file.path().to_str().unwrap()),
            Err(CliActionError::InvalidFileContent { .. })
        ));
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        assert!(matches!(
            load_file_content("/definitely/not/here.yml"),
            Err(CliActionError::FileError { path, .. }) if path == "/definitely/not/here.yml"
        ));
    }

    #[test]
    fn status_code_detector() {
        let detector = MissingDetector::StatusCode(404);
        assert!(detector.is_missing(Some(404), None));
        assert!(!detector.is_missing(Some(500), Some("nothing here")));
    }

    #[test]
    fn message_detector() {
        let detector = MissingDetector::MessageContains("Cannot find assembly instance");
        assert!(detector.is_missing(
            Some(500),
            Some("Cannot find assembly instance with name abc")
        ));
        assert!(!detector.is_missing(Some(500), Some("unrelated failure")));
        assert!(!detector.is_missing(Some(404), None));
    }
}
