use dioxus_dom_props::{PropValue, Props};
use serde::Deserialize;

/// One element captured from a running app.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementInput {
    pub tag: String,

    #[serde(default)]
    pub props: serde_json::Map<String, serde_json::Value>,

    #[serde(default)]
    pub debug_id: Option<String>,
}

impl ElementInput {
    pub fn props(&self) -> Props {
        self.props
            .iter()
            .map(|(name, value)| (name.clone(), prop_value(value)))
            .collect()
    }
}

/// Parse the JSON array of elements the checker reads.
pub fn parse_elements(json: &str) -> serde_json::Result<Vec<ElementInput>> {
    serde_json::from_str(json)
}

// Functions do not survive serialization, so captured listeners are written as objects.
fn prop_value(value: &serde_json::Value) -> PropValue {
    use serde_json::Value;

    match value {
        Value::Null => PropValue::None,
        Value::Bool(b) => PropValue::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => PropValue::Int(i),
            None => PropValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => PropValue::Text(s.clone()),
        Value::Array(_) => PropValue::Text(value.to_string()),
        Value::Object(_) => PropValue::Listener,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_values_map_to_prop_values() {
        let elements = parse_elements(
            r#"[{
                "tag": "input",
                "props": {
                    "value": null,
                    "disabled": true,
                    "tabIndex": 2,
                    "step": 0.5,
                    "title": "hi",
                    "onClick": {},
                    "data-list": [1, 2]
                },
                "debug_id": "src/main.rs:3:5"
            }]"#,
        )
        .unwrap();

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].debug_id.as_deref(), Some("src/main.rs:3:5"));

        let props = elements[0].props();
        let values: Vec<_> = props.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
        assert_eq!(
            values,
            vec![
                ("value".to_string(), PropValue::None),
                ("disabled".to_string(), PropValue::Bool(true)),
                ("tabIndex".to_string(), PropValue::Int(2)),
                ("step".to_string(), PropValue::Float(0.5)),
                ("title".to_string(), PropValue::Text("hi".to_string())),
                ("onClick".to_string(), PropValue::Listener),
                ("data-list".to_string(), PropValue::Text("[1,2]".to_string())),
            ]
        );
    }

    #[test]
    fn props_and_debug_id_are_optional() {
        let elements = parse_elements(r#"[{ "tag": "div" }]"#).unwrap();
        assert!(elements[0].props().is_empty());
        assert_eq!(elements[0].debug_id, None);
    }
}
