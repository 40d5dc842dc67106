use serde::Serialize;
use serde_json::Value;

/// JSON-schema input/output contract of an action
#[derive(Debug, Clone, Serialize)]
pub struct ActionSchema {
    pub input: Value,
    pub output: Value,
}

impl ActionSchema {
    pub fn new(input: Value, output: Value) -> Self {
        Self { input, output }
    }

    /// Names listed under the input schema's `required` array
    pub fn required_inputs(&self) -> Vec<&str> {
        self.input
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Names listed under the output schema's `properties`
    pub fn output_names(&self) -> Vec<&str> {
        self.output
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| props.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
