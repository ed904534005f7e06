//! Expectation checks against a JSON snapshot of the node.

use serde_json::Value;

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

/// Walk a dotted path (`alignment.x`, `slots.0.end`) through objects and arrays.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(root, |value, segment| match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Numbers match within `tolerance`; everything else must be equal.
pub fn evaluate_expect(
    property: &str,
    expected: &Value,
    tolerance: f64,
    snapshot: &Value,
) -> AssertionResult {
    let Some(actual) = lookup(snapshot, property) else {
        return AssertionResult::Failed {
            code: "missing_property".to_string(),
            message: format!("{property}: property not found"),
        };
    };
    let matches = match (actual.as_f64(), expected.as_f64()) {
        (Some(a), Some(b)) => (a - b).abs() <= tolerance,
        _ => actual == expected,
    };
    if matches {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "value_mismatch".to_string(),
            message: format!("{property}: expected {expected}, got {actual}"),
        }
    }
}
