//! Structured parameters attached to an error.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// Insertion-ordered parameter map.
///
/// Values are arbitrary JSON values; strings render without quotes.
pub type Params = IndexMap<String, JsonValue>;

/// Render parameters as `key: {value}` entries joined with ` | `.
pub(crate) fn render(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}: {{{}}}", key, render_value(value)))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_in_insertion_order() {
        let mut params = Params::new();
        params.insert("zeta".to_string(), json!("last-alphabetically"));
        params.insert("alpha".to_string(), json!(3));
        params.insert("flag".to_string(), json!(true));

        assert_eq!(
            render(&params),
            "zeta: {last-alphabetically} | alpha: {3} | flag: {true}"
        );
    }

    #[test]
    fn upsert_keeps_original_position() {
        let mut params = Params::new();
        params.insert("a".to_string(), json!("1"));
        params.insert("b".to_string(), json!("2"));
        params.insert("a".to_string(), json!("3"));

        assert_eq!(render(&params), "a: {3} | b: {2}");
    }
}
