use serde::Deserialize;
use serde_json::{Map, Value};

// API: https://developer.cisco.com/meraki/api-v1/get-organization-devices/
// Every field is kept, in the order the API sent them, since inventory reports export all of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Device {
    fields: Map<String, Value>,
}

#[derive(Debug, PartialEq)]
pub struct Detail<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl Device {
    pub fn serial(&self) -> Option<&str> {
        self.str_field("serial")
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn notes(&self) -> Option<&str> {
        self.str_field("notes")
    }

    /// `wan1Ip`, `wan2Ip` or `wan3Ip`.
    pub fn wan_ip(&self, wan: u8) -> Option<&str> {
        self.str_field(&format!("wan{}Ip", wan))
    }

    /// `None` when the API did not send a list.
    pub fn tags(&self) -> Option<Vec<&str>> {
        let tags = self.fields.get("tags")?.as_array()?;
        Some(tags.iter().filter_map(Value::as_str).collect())
    }

    /// `None` when the API did not send a list. Entries that are not objects are skipped.
    pub fn details(&self) -> Option<Vec<Detail<'_>>> {
        let details = self.fields.get("details")?.as_array()?;
        Some(
            details
                .iter()
                .filter_map(Value::as_object)
                .map(|detail| Detail {
                    name: detail.get("name").and_then(Value::as_str).unwrap_or_default(),
                    value: detail.get("value").and_then(Value::as_str).unwrap_or_default(),
                })
                .collect(),
        )
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}
