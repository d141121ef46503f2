//! Typed access to the incoming request parameter mapping.

use serde_json::{Map, Value};

use crate::error::ProcessError;

/// Read-only view over one job's input mapping.
///
/// Values arrive as JSON strings, numbers or booleans and are rendered to
/// the plain strings the container entrypoints expect. A JSON `null` counts
/// as absent.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRequest<'a> {
    inputs: &'a Map<String, Value>,
}

impl<'a> ProcessRequest<'a> {
    pub fn new(inputs: &'a Map<String, Value>) -> Self {
        Self { inputs }
    }

    /// Fetch a required parameter, failing with a message that names it.
    pub fn required(&self, name: &'static str, hint: &'static str) -> Result<String, ProcessError> {
        self.get(name)
            .ok_or(ProcessError::MissingParameter { name, hint })
    }

    /// Fetch an optional parameter, substituting `default` when absent.
    pub fn optional(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    fn get(&self, name: &str) -> Option<String> {
        self.inputs.get(name).and_then(render)
    }
}

/// Render a JSON value as a container argument string.
///
/// Booleans become `"True"`/`"False"`, the convention the R workflow
/// scripts parse.
fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn inputs(value: Value) -> Map<String, Value> {
        value.as_object().expect("object").clone()
    }

    #[test]
    fn required_present() {
        let map = inputs(json!({"input_data": "https://example.org/a.csv"}));
        let request = ProcessRequest::new(&map);
        assert_eq!(
            request.required("input_data", "hint").expect("present"),
            "https://example.org/a.csv"
        );
    }

    #[test]
    fn required_missing_names_the_parameter() {
        let map = inputs(json!({}));
        let request = ProcessRequest::new(&map);
        let err = request
            .required("colname_value", "Please provide a column name.")
            .expect_err("must fail");
        assert_matches!(
            err,
            ProcessError::MissingParameter {
                name: "colname_value",
                ..
            }
        );
        assert_eq!(
            err.to_string(),
            "Missing parameter \"colname_value\". Please provide a column name."
        );
    }

    #[test]
    fn null_counts_as_absent() {
        let map = inputs(json!({"input_data": null}));
        let request = ProcessRequest::new(&map);
        assert!(request.required("input_data", "hint").is_err());
        assert_eq!(request.optional("input_data", "fallback"), "fallback");
    }

    #[test]
    fn numbers_and_booleans_render_as_text() {
        let map = inputs(json!({
            "output_option": 1,
            "p_value_threshold": 0.05,
            "year_starts_at_dec1": true
        }));
        let request = ProcessRequest::new(&map);
        assert_eq!(request.optional("output_option", ""), "1");
        assert_eq!(request.optional("p_value_threshold", ""), "0.05");
        assert_eq!(request.optional("year_starts_at_dec1", ""), "True");
    }

    #[test]
    fn optional_falls_back_to_default() {
        let map = inputs(json!({}));
        let request = ProcessRequest::new(&map);
        assert_eq!(request.optional("colname_long", "long"), "long");
    }
}
