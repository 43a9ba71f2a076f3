//! Lenient view over the incoming JSON request object.
//!
//! The request shape is owned by the HTTP layer; this wrapper only reads the
//! fields the pipeline cares about and tolerates everything else.

use serde_json::Value;

#[derive(Debug, Clone, Copy)]
pub struct ChartRequest<'a> {
    payload: &'a Value,
}

impl<'a> ChartRequest<'a> {
    pub fn new(payload: &'a Value) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &'a Value {
        self.payload
    }

    pub fn source_type(&self) -> Option<&'a str> {
        self.payload.get("source_type").and_then(Value::as_str)
    }

    pub fn is_transit(&self) -> bool {
        self.payload
            .get("is_transit")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn synastry_data(&self) -> Option<&'a Value> {
        self.payload.get("synastry_data").filter(|v| v.is_object())
    }

    pub fn user_preferences(&self) -> Option<&'a Value> {
        self.payload
            .get("user_preferences")
            .filter(|v| v.is_object())
    }

    pub fn theme(&self) -> Option<&'a str> {
        self.payload
            .get("options")
            .and_then(|o| o.get("theme"))
            .and_then(Value::as_str)
    }
}
