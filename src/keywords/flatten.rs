// Depth-first flattening of nested JSON documents into their text leaves.

use serde_json::Value;

/// Nesting depth past which flattening stops descending.
///
/// Panel documents are a few levels deep; anything past this contributes
/// no further text.
pub const MAX_FLATTEN_DEPTH: usize = 32;

/// Collect the string, number, and boolean leaves of `value`, depth-first.
///
/// Arrays and objects are traversed the same way (objects in key order as
/// stored). Nulls contribute nothing.
pub fn flatten_leaves(value: &Value) -> Vec<String> {
    let mut out = Vec::new();
    collect(value, 0, &mut out);
    out
}

fn collect(value: &Value, depth: usize, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.push(s.clone()),
        Value::Number(n) => out.push(n.to_string()),
        Value::Bool(b) => out.push(b.to_string()),
        Value::Null => {}
        Value::Array(items) => {
            if depth >= MAX_FLATTEN_DEPTH {
                return;
            }
            for item in items {
                collect(item, depth + 1, out);
            }
        }
        Value::Object(map) => {
            if depth >= MAX_FLATTEN_DEPTH {
                return;
            }
            for item in map.values() {
                collect(item, depth + 1, out);
            }
        }
    }
}
