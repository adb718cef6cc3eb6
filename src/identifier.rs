//! Target-identifier resolution for CLI commands.
//!
//! Most commands can address the object they operate on in more than one way:
//! a positional argument, a named option (e.g. `--id`) or an attribute inside
//! a payload file passed with `-f`. Each way of addressing a resource is
//! declared as an [`Identifier`]; [`resolve_identity`] picks exactly one of
//! them for a given invocation, or composes a usage error describing every
//! accepted alternative.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentifierError {
    #[error("{0}")]
    UsageError(String),
}

/// One declared way of addressing a resource: an optional CLI parameter name
/// (with optional flag spellings) and/or an attribute name on the payload
/// object. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub obj_attribute: Option<String>,
    pub param_name: Option<String>,
    pub param_opts: Vec<String>,
}

impl Identifier {
    /// Identifier resolvable from a CLI parameter only.
    pub fn param(name: &str) -> Self {
        Identifier {
            obj_attribute: None,
            param_name: Some(name.to_string()),
            param_opts: Vec::new(),
        }
    }

    /// Identifier resolvable from a file attribute only.
    pub fn attr(name: &str) -> Self {
        Identifier {
            obj_attribute: Some(name.to_string()),
            param_name: None,
            param_opts: Vec::new(),
        }
    }

    /// Identifier where the CLI parameter and the object attribute share a name.
    pub fn arg_and_attr(name: &str) -> Self {
        Identifier {
            obj_attribute: Some(name.to_string()),
            param_name: Some(name.to_string()),
            param_opts: Vec::new(),
        }
    }

    /// Identifier with a CLI parameter mapped to a differently-named attribute.
    pub fn param_and_attr(param_name: &str, obj_attribute: &str) -> Self {
        Identifier {
            obj_attribute: Some(obj_attribute.to_string()),
            param_name: Some(param_name.to_string()),
            param_opts: Vec::new(),
        }
    }

    /// Attach the flag spellings shown in usage errors (e.g. `-n, --name`).
    pub fn with_opts(mut self, opts: &[&str]) -> Self {
        self.param_opts = opts.iter().map(|o| o.to_string()).collect();
        self
    }

    /// Display name used in usage errors: flag spellings joined by `, ` when
    /// declared, otherwise the bare parameter name.
    pub fn cli_display_name(&self) -> Option<String> {
        if !self.param_opts.is_empty() {
            return Some(self.param_opts.join(", "));
        }
        self.param_name.clone()
    }
}

/// The resolved outcome of identifier resolution for one command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity<'a> {
    pub identifier: &'a Identifier,
    pub value: Value,
    pub from_params: bool,
    pub from_file: bool,
}

impl Identity<'_> {
    /// The resolved value as a string, for use in endpoint paths.
    pub fn value_as_string(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

// `None` and `false` both count as "not provided", so flag-style identifiers
// such as `--latest` do not match when the flag was left unset.
fn is_set(value: Option<&Value>) -> bool {
    match value {
        None => false,
        Some(Value::Null) => false,
        Some(Value::Bool(false)) => false,
        Some(_) => true,
    }
}

/// Determine which single identity the user supplied.
///
/// Candidates are checked in caller-supplied order: first against the CLI
/// parameters, then (only if no CLI parameter matched) against the file
/// content. The two passes are strictly ordered, so any CLI value beats any
/// file value regardless of candidate priority. Returns `Ok(None)` when
/// nothing matched and `required` is false.
pub fn resolve_identity<'a>(
    candidates: &'a [Identifier],
    cli_params: &Map<String, Value>,
    file_content: Option<&Map<String, Value>>,
    required: bool,
) -> Result<Option<Identity<'a>>, IdentifierError> {
    for candidate in candidates {
        let Some(param_name) = candidate.param_name.as_deref() else {
            continue;
        };
        if is_set(cli_params.get(param_name)) {
            return Ok(Some(Identity {
                identifier: candidate,
                value: cli_params.get(param_name).cloned().unwrap_or(Value::Null),
                from_params: true,
                from_file: false,
            }));
        }
    }
    if let Some(content) = file_content {
        for candidate in candidates {
            let Some(attr) = candidate.obj_attribute.as_deref() else {
                continue;
            };
            if is_set(content.get(attr)) {
                return Ok(Some(Identity {
                    identifier: candidate,
                    value: content.get(attr).cloned().unwrap_or(Value::Null),
                    from_params: false,
                    from_file: true,
                }));
            }
        }
    }
    if required {
        return Err(IdentifierError::UsageError(compose_missing_identity_error(
            candidates,
        )));
    }
    Ok(None)
}

fn quoted_list(entries: &[String]) -> String {
    entries
        .iter()
        .map(|e| format!("\"{}\"", e))
        .collect::<Vec<String>>()
        .join(", ")
}

fn compose_missing_identity_error(candidates: &[Identifier]) -> String {
    let cli_names: Vec<String> = candidates
        .iter()
        .filter_map(|c| c.cli_display_name())
        .collect();
    let attr_names: Vec<String> = candidates
        .iter()
        .filter_map(|c| c.obj_attribute.clone())
        .collect();

    let mut message = String::from("Must identify the target by specifying");
    if cli_names.len() == 1 {
        message.push_str(&format!(" the \"{}\" parameter", cli_names[0]));
    } else if cli_names.len() > 1 {
        message.push_str(&format!(" one parameter from [{}]", quoted_list(&cli_names)));
    }
    if !attr_names.is_empty() {
        message.push_str(" or by including");
        if attr_names.len() == 1 {
            message.push_str(&format!(" the \"{}\" attribute", attr_names[0]));
        } else {
            message.push_str(&format!(
                " one of the following attributes [{}]",
                quoted_list(&attr_names)
            ));
        }
        message.push_str(" in the given object/file");
    }
    message
}

/// Remove identifier parameters from a parameter map, leaving only the values
/// that should feed the request payload.
pub fn strip_identifier_params(
    candidates: &[Identifier],
    params: &Map<String, Value>,
) -> Map<String, Value> {
    let identifier_names: Vec<&str> = candidates
        .iter()
        .filter_map(|c| c.param_name.as_deref())
        .collect();
    params
        .iter()
        .filter(|(k, _)| !identifier_names.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn display_name_uses_opts_if_set() {
        let identifier = Identifier::param_and_attr("name", "personName").with_opts(&["--name"]);
        assert_eq!(identifier.cli_display_name(), Some("--name".to_string()));
    }

    #[test]
    fn display_name_joins_multiple_opts() {
        let identifier = Identifier::param("name").with_opts(&["-n", "--name"]);
        assert_eq!(identifier.cli_display_name(), Some("-n, --name".to_string()));
    }

    #[test]
    fn display_name_uses_param_name_if_opts_not_set() {
        let identifier = Identifier::param_and_attr("name", "personName");
        assert_eq!(identifier.cli_display_name(), Some("name".to_string()));
    }

    #[test]
    fn display_name_empty_for_attr_only_identifier() {
        let identifier = Identifier::attr("personName");
        assert_eq!(identifier.cli_display_name(), None);
    }

    #[test]
    fn resolves_from_param() {
        let identifiers = vec![Identifier::param_and_attr("unique_name", "uniqueName")];
        let cli_params = params(&[("unique_name", json!("eNB-A"))]);
        let result = resolve_identity(&identifiers, &cli_params, None, false)
            .unwrap()
            .unwrap();
        assert_eq!(result.identifier, &identifiers[0]);
        assert_eq!(result.value, json!("eNB-A"));
        assert!(result.from_params);
        assert!(!result.from_file);
    }

    #[test]
    fn resolves_from_file() {
        let identifiers = vec![
            Identifier::param_and_attr("unique_name", "uniqueName"),
            Identifier::param_and_attr("unique_slug", "uniqueSlug").with_opts(&["--id"]),
            Identifier::attr("id"),
        ];
        let file_content = params(&[
            ("uniqueName", json!("eNB-A")),
            ("uniqueSlug", json!("enb-a")),
        ]);
        let result = resolve_identity(&identifiers, &Map::new(), Some(&file_content), false)
            .unwrap()
            .unwrap();
        assert_eq!(result.identifier, &identifiers[0]);
        assert_eq!(result.value, json!("eNB-A"));
        assert!(result.from_file);
        assert!(!result.from_params);
    }

    #[test]
    fn first_param_match_wins_in_candidate_order() {
        let identifiers = vec![
            Identifier::param_and_attr("unique_name", "uniqueName"),
            Identifier::param_and_attr("unique_slug", "uniqueSlug").with_opts(&["--id"]),
        ];
        let cli_params = params(&[
            ("unique_name", json!("eNB-A")),
            ("unique_slug", json!("enb-a")),
        ]);
        let result = resolve_identity(&identifiers, &cli_params, None, false)
            .unwrap()
            .unwrap();
        assert_eq!(result.identifier, &identifiers[0]);
        assert_eq!(result.value, json!("eNB-A"));
    }

    #[test]
    fn param_pass_beats_file_pass_regardless_of_candidate_order() {
        // Candidate A is earlier and has a file value; candidate B is later
        // but has a CLI value. The CLI pass runs first, so B wins.
        let identifiers = vec![
            Identifier::param_and_attr("unique_name", "uniqueName"),
            Identifier::param_and_attr("unique_slug", "uniqueSlug"),
        ];
        let cli_params = params(&[("unique_slug", json!("enb-a"))]);
        let file_content = params(&[("uniqueName", json!("eNB-A"))]);
        let result = resolve_identity(&identifiers, &cli_params, Some(&file_content), false)
            .unwrap()
            .unwrap();
        assert_eq!(result.identifier, &identifiers[1]);
        assert_eq!(result.value, json!("enb-a"));
        assert!(result.from_params);
    }

    #[test]
    fn false_counts_as_unset() {
        let identifiers = vec![Identifier::arg_and_attr("latest")];
        let cli_params = params(&[("latest", json!(false))]);
        let file_content = params(&[("latest", json!(false))]);
        let result =
            resolve_identity(&identifiers, &cli_params, Some(&file_content), false).unwrap();
        assert!(result.is_none());

        let cli_params = params(&[("latest", json!(true))]);
        let result = resolve_identity(&identifiers, &cli_params, None, false)
            .unwrap()
            .unwrap();
        assert_eq!(result.value, json!(true));
    }

    #[test]
    fn no_match_not_required_returns_none() {
        let identifiers = vec![Identifier::param_and_attr("name", "name")];
        let result = resolve_identity(&identifiers, &Map::new(), None, false).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn missing_single_cli_only() {
        let identifiers = vec![Identifier::param("name")];
        let err = resolve_identity(&identifiers, &Map::new(), None, true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Must identify the target by specifying the \"name\" parameter"
        );
    }

    #[test]
    fn missing_single_file_only() {
        let identifiers = vec![Identifier::attr("id")];
        let err = resolve_identity(&identifiers, &Map::new(), None, true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Must identify the target by specifying or by including the \"id\" attribute in the given object/file"
        );
    }

    #[test]
    fn missing_multi_cli_only() {
        let identifiers = vec![
            Identifier::param("unique_name"),
            Identifier::param("unique_slug").with_opts(&["--id"]),
        ];
        let err = resolve_identity(&identifiers, &Map::new(), None, true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Must identify the target by specifying one parameter from [\"unique_name\", \"--id\"]"
        );
    }

    #[test]
    fn missing_multi_file_only() {
        let identifiers = vec![Identifier::attr("id"), Identifier::attr("name")];
        let err = resolve_identity(&identifiers, &Map::new(), None, true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Must identify the target by specifying or by including one of the following attributes [\"id\", \"name\"] in the given object/file"
        );
    }

    #[test]
    fn missing_mixed_candidates() {
        let identifiers = vec![
            Identifier::param("unique_name"),
            Identifier::param("unique_slug").with_opts(&["--id"]),
            Identifier::attr("id"),
        ];
        let err = resolve_identity(&identifiers, &Map::new(), None, true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Must identify the target by specifying one parameter from [\"unique_name\", \"--id\"] or by including the \"id\" attribute in the given object/file"
        );
    }

    #[test]
    fn missing_mixed_with_multiple_attrs() {
        let identifiers = vec![
            Identifier::param_and_attr("name", "name"),
            Identifier::attr("id"),
        ];
        let err = resolve_identity(&identifiers, &Map::new(), None, true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Must identify the target by specifying the \"name\" parameter or by including one of the following attributes [\"name\", \"id\"] in the given object/file"
        );
    }

    #[test]
    fn strip_removes_identifier_params_only() {
        let identifiers = vec![
            Identifier::param_and_attr("unique_name", "uniqueName"),
            Identifier::param_and_attr("unique_slug", "uniqueSlug").with_opts(&["--id"]),
            Identifier::attr("id"),
        ];
        let cli_params = params(&[
            ("unique_name", json!("eNB-A")),
            ("unique_slug", json!("enb-a")),
            ("status", json!("Active")),
        ]);
        let stripped = strip_identifier_params(&identifiers, &cli_params);
        assert_eq!(stripped, params(&[("status", json!("Active"))]));
    }
}
