use serde_json::Value;

pub trait PlainText {
    /// Renders a JSON value the way it reads in a spreadsheet cell: strings without quotes,
    /// `null` as nothing, anything nested as compact JSON.
    fn plain_text(&self) -> String;
}

impl PlainText for Value {
    fn plain_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), "")]
    #[case(json!("MX67"), "MX67")]
    #[case(json!(true), "true")]
    #[case(json!(1000), "1000")]
    #[case(json!(-8.0476), "-8.0476")]
    #[case(json!(["a", 1]), r#"["a",1]"#)]
    #[case(json!({ "enabled": true }), r#"{"enabled":true}"#)]
    fn renders_plain_text(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.plain_text(), expected);
    }
}
