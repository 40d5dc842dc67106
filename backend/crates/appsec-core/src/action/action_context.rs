use crate::{CoreError, Result as CoreErrorResult};

use log::info;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Per-invocation state handed to [`crate::TemplateAction::handler`].
#[derive(Debug, Default)]
pub struct ActionContext {
    input: Value,
    outputs: Map<String, Value>,
    log_stream: Vec<String>,
}

impl ActionContext {
    pub fn new(input: Value) -> Self {
        Self {
            input,
            outputs: Map::new(),
            log_stream: Vec::new(),
        }
    }

    pub fn input(&self) -> &Value {
        &self.input
    }

    /// Decode the raw input into a typed value
    #[track_caller]
    pub fn parse_input<T: DeserializeOwned>(&self) -> CoreErrorResult<T> {
        serde_json::from_value(self.input.clone())
            .map_err(|e| CoreError::invalid_input(e.to_string()))
    }

    /// Emit a named output. Re-emitting a key overwrites it.
    pub fn output<V: Into<Value>>(&mut self, key: &str, value: V) {
        self.outputs.insert(key.to_string(), value.into());
    }

    pub fn outputs(&self) -> &Map<String, Value> {
        &self.outputs
    }

    pub fn into_outputs(self) -> Map<String, Value> {
        self.outputs
    }

    /// Informational log line, recorded on the context and forwarded to `log`
    pub fn info<S: Into<String>>(&mut self, message: S) {
        let message = message.into();
        info!("{message}");
        self.log_stream.push(message);
    }

    pub fn log_lines(&self) -> &[String] {
        &self.log_stream
    }
}
