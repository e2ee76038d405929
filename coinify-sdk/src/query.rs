//! Query-string encoding in the form the Coinify API expects.
//!
//! Follows the conventions of PHP's `http_build_query`, which the API's
//! reference client used:
//!
//! * booleans become `1` / `0`;
//! * `null` values are dropped;
//! * lists expand to indexed brackets, `key[0]=a&key[1]=b`;
//! * nested objects expand to named brackets, `key[sub]=v`.
//!
//! Keys and values are form-encoded (space as `+`).

use serde_json::Value;
use url::form_urlencoded;

use crate::objects::Params;

/// Encode `params` as a query string, in insertion order, without a leading `?`.
pub fn build_query(params: &Params) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten(key.clone(), value, &mut pairs);
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

fn flatten(key: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push((key, if *b { "1" } else { "0" }.to_owned())),
        Value::Number(n) => out.push((key, n.to_string())),
        Value::String(s) => out.push((key, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(format!("{key}[{index}]"), item, out);
            }
        }
        Value::Object(fields) => {
            for (name, item) in fields {
                flatten(format!("{key}[{name}]"), item, out);
            }
        }
    }
}
