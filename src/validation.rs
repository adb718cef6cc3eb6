//! Pre-flight validation of parsed command parameters.
//!
//! Handlers assemble a [`ValidationPipeline`] of ordered checks and run it
//! against the parameter map before doing any work. The first failing check
//! aborts with a usage error.

use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

/// True when the parameter is present with a usable value. `Null` and
/// `Bool(false)` count as unset, matching how flags parse.
pub fn is_set(params: &Map<String, Value>, name: &str) -> bool {
    match params.get(name) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(_) => true,
    }
}

type Predicate = Box<dyn Fn(&Map<String, Value>) -> bool>;
type MessageFn = Box<dyn Fn(&Map<String, Value>) -> String>;

struct Check {
    predicate: Predicate,
    message: MessageFn,
}

#[derive(Default)]
pub struct ValidationPipeline {
    checks: Vec<Check>,
}

impl ValidationPipeline {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Add a check. The predicate returns true when the parameters are valid;
    /// the message fn produces the usage error otherwise.
    pub fn check(
        mut self,
        predicate: impl Fn(&Map<String, Value>) -> bool + 'static,
        message: impl Fn(&Map<String, Value>) -> String + 'static,
    ) -> Self {
        self.checks.push(Check {
            predicate: Box::new(predicate),
            message: Box::new(message),
        });
        self
    }

    /// Reject parameter maps where both named parameters are set.
    pub fn mutually_exclusive(self, first: &str, second: &str) -> Self {
        let first = first.to_string();
        let second = second.to_string();
        let message = format!("Cannot use \"{first}\" together with \"{second}\"");
        self.check(
            move |params| !(is_set(params, &first) && is_set(params, &second)),
            move |_| message.clone(),
        )
    }

    /// Require at least one of the named parameters to be set.
    pub fn require_any(self, names: &[&str]) -> Self {
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        let message = format!(
            "Must set at least one of: {}",
            names.join(", ")
        );
        self.check(
            move |params| names.iter().any(|n| is_set(params, n)),
            move |_| message.clone(),
        )
    }

    pub fn run(&self, params: &Map<String, Value>) -> Result<(), ValidationError> {
        for check in &self.checks {
            if !(check.predicate)(params) {
                return Err(ValidationError {
                    message: (check.message)(params),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn empty_pipeline_passes() {
        assert!(ValidationPipeline::new().run(&Map::new()).is_ok());
    }

    #[test]
    fn first_failing_check_wins() {
        let pipeline = ValidationPipeline::new()
            .check(|_| false, |_| "first".to_string())
            .check(|_| false, |_| "second".to_string());
        let error = pipeline.run(&Map::new()).unwrap_err();
        assert_eq!(error.message, "first");
    }

    #[test]
    fn mutually_exclusive_rejects_both_set() {
        let pipeline = ValidationPipeline::new().mutually_exclusive("file", "set");
        let error = pipeline
            .run(&params(json!({"file": "a.yml", "set": ["k=v"]})))
            .unwrap_err();
        assert_eq!(
            error.message,
            "Cannot use \"file\" together with \"set\""
        );
    }

    #[test]
    fn mutually_exclusive_allows_one_or_neither() {
        let pipeline = ValidationPipeline::new().mutually_exclusive("file", "set");
        assert!(pipeline.run(&params(json!({"file": "a.yml"}))).is_ok());
        assert!(pipeline.run(&Map::new()).is_ok());
    }

    #[test]
    fn false_flags_count_as_unset() {
        let pipeline = ValidationPipeline::new().mutually_exclusive("file", "set");
        assert!(pipeline
            .run(&params(json!({"file": "a.yml", "set": false})))
            .is_ok());
    }

    #[test]
    fn require_any_rejects_when_none_set() {
        let pipeline = ValidationPipeline::new().require_any(&["name", "id"]);
        let error = pipeline.run(&params(json!({"name": null}))).unwrap_err();
        assert_eq!(error.message, "Must set at least one of: name, id");
    }
}
