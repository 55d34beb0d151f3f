use crate::config::HumanizeOptions;
use crate::engine::humanize_string;
use log::debug;
use serde_json::{Map, Value};

/// Humanizes every string in `value`, mapping keys included, and returns the rebuilt value with
/// the summed count. Numbers, booleans and null pass through untouched.
///
/// When two keys clean to the same string, the later value wins and keeps the first key's slot.
pub fn humanize_json(value: &Value, options: Option<&HumanizeOptions>) -> (Value, usize) {
    match value {
        Value::String(s) => {
            let result = humanize_string(s, options);
            (Value::String(result.text), result.count)
        }
        Value::Object(map) => {
            let mut cleaned = Map::with_capacity(map.len());
            let mut total = 0;
            for (key, v) in map {
                let key = humanize_string(key, options);
                let (v, count) = humanize_json(v, options);
                total += key.count + count;
                if cleaned.insert(key.text, v).is_some() {
                    debug!("humanized keys collided, keeping the later value");
                }
            }
            (Value::Object(cleaned), total)
        }
        Value::Array(items) => {
            let mut total = 0;
            let cleaned: Vec<Value> = items
                .iter()
                .map(|item| {
                    let (item, count) = humanize_json(item, options);
                    total += count;
                    item
                })
                .collect();
            (Value::Array(cleaned), total)
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => (value.clone(), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_leaf() {
        let (cleaned, count) = humanize_json(&json!("a\u{2014}b"), None);
        assert_eq!(cleaned, json!("a-b"));
        assert_eq!(count, 1);
    }

    #[test]
    fn test_scalars_pass_through() {
        for value in [json!(null), json!(true), json!(false), json!(42), json!(-1.5)] {
            let (cleaned, count) = humanize_json(&value, None);
            assert_eq!(cleaned, value);
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn test_non_string_leaves() {
        let data = json!({"a": 1, "b": [2, 3, null], "c": {"d": false}});
        let (cleaned, count) = humanize_json(&data, None);
        assert_eq!(cleaned, data);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_key_is_humanized() {
        let data = json!({"hello\u{200b}world": "v"});
        let (cleaned, count) = humanize_json(&data, None);
        assert_eq!(cleaned, json!({"helloworld": "v"}));
        assert_eq!(count, 1);
    }

    #[test]
    fn test_key_order_is_preserved() {
        let data = json!({"zeta\u{a0}": 1, "alpha": 2, "mid\u{2026}": 3});
        let (cleaned, _) = humanize_json(&data, None);
        let keys: Vec<&String> = cleaned.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta ", "alpha", "mid..."]);
    }

    #[test]
    fn test_key_collision_is_last_write_wins() {
        let data = json!({"a\u{200b}b": "first", "x": 0, "ab": "second"});
        let (cleaned, count) = humanize_json(&data, None);
        let map = cleaned.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["ab"], json!("second"));
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["ab", "x"]);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_array_order_and_length() {
        let data = json!(["\u{201C}a\u{201D}", 1, ["b\u{2019}"], {"k": "c  "}]);
        let (cleaned, count) = humanize_json(&data, None);
        assert_eq!(cleaned, json!(["\"a\"", 1, ["b'"], {"k": "c"}]));
        assert_eq!(count, 2 + 1 + 2);
    }

    #[test]
    fn test_input_is_left_alone() {
        let data = json!({"k\u{2014}": ["v\u{2014}"]});
        let before = data.clone();
        let _ = humanize_json(&data, None);
        assert_eq!(data, before);
    }

    #[test]
    fn test_options_reach_every_level() {
        let options = HumanizeOptions {
            transform_dashes: false,
            ..HumanizeOptions::default()
        };
        let data = json!({"a\u{2014}": {"b": ["c\u{2014}\u{200b}"]}});
        let (cleaned, count) = humanize_json(&data, Some(&options));
        assert_eq!(cleaned, json!({"a\u{2014}": {"b": ["c\u{2014}"]}}));
        assert_eq!(count, 1);
    }
}
