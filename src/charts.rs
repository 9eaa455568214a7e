// Comparison breakdowns: the data behind the donut charts.
//
// Counts the values of one field across result rows and turns them into
// slices with shares. Long tails fold into a single "other" slice.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Label of the slice that absorbs values past the slice limit.
pub const OTHER_LABEL: &str = "기타";

/// One donut segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub count: u32,
    /// Fraction of matched rows, 0.0 to 1.0
    pub share: f64,
}

/// A donut chart for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Donut {
    pub field: String,
    /// Rows that had a usable value for `field`
    pub total: u32,
    pub slices: Vec<Slice>,
}

/// Break down `field` across `rows` into at most `max_slices` slices.
///
/// Strings, numbers, and booleans count as values; rows without the field,
/// with a null/nested value, or that are not objects are skipped. Slices are
/// ordered by count, ties in first-seen order. When there are more distinct
/// values than `max_slices`, those beyond the first `max_slices - 1` are folded
/// into one `OTHER_LABEL` slice, so `max_slices == 1` yields a single slice.
/// `max_slices == 0` means no limit.
pub fn distribution(rows: &[Value], field: &str, max_slices: usize) -> Donut {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, u32)> = Vec::new();

    for row in rows {
        let Some(label) = row.get(field).and_then(value_label) else {
            continue;
        };
        match index.get(&label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label.clone(), counts.len());
                counts.push((label, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let total: u32 = counts.iter().map(|(_, c)| c).sum();

    if max_slices > 0 && counts.len() > max_slices {
        let tail: u32 = counts[max_slices - 1..].iter().map(|(_, c)| c).sum();
        counts.truncate(max_slices - 1);
        counts.push((OTHER_LABEL.to_string(), tail));
    }

    let slices = counts
        .into_iter()
        .map(|(label, count)| Slice {
            label,
            count,
            share: if total > 0 {
                count as f64 / total as f64
            } else {
                0.0
            },
        })
        .collect();

    Donut {
        field: field.to_string(),
        total,
        slices,
    }
}

/// One donut per field, in the order given.
pub fn compare(rows: &[Value], fields: &[String], max_slices: usize) -> Vec<Donut> {
    fields
        .iter()
        .map(|field| distribution(rows, field, max_slices))
        .collect()
}

fn value_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
