use serde::Deserialize;
use serde_json::{Map, Value};

// API: https://developer.cisco.com/meraki/api-v1/get-organizations/
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Organization {
    fields: Map<String, Value>,
}

impl Organization {
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
