//! Shape-tolerant extraction over untyped Crexi payloads.
//!
//! The response layout is not documented, so listings and suites are located
//! through ordered key lookups before anything is projected into records.

use serde_json::Value;

/// Top-level keys that may hold the listings array, highest priority first
pub const LISTING_KEYS: [&str; 3] = ["results", "data", "listings"];

/// First non-empty listings array under [`LISTING_KEYS`], else empty
pub fn extract_listings(payload: &Value) -> &[Value] {
    LISTING_KEYS
        .iter()
        .filter_map(|key| payload.get(*key).and_then(Value::as_array))
        .find(|listings| !listings.is_empty())
        .map(|listings| listings.as_slice())
        .unwrap_or(&[])
}

/// Suites of a listing. A listing without suites counts as its own single suite.
pub fn suites_of(listing: &Value) -> Vec<&Value> {
    match listing.get("suites").and_then(Value::as_array) {
        Some(suites) if !suites.is_empty() => suites.iter().collect(),
        _ => vec![listing],
    }
}

/// Value of the first key that is present and not null
pub fn first_present<'a>(object: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}

/// Scalars rendered as text. Strings are taken verbatim, not JSON-quoted.
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Numbers, or strings that parse as numbers
pub fn value_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub fn string_field(object: &Value, keys: &[&str]) -> Option<String> {
    first_present(object, keys).and_then(value_to_string)
}

pub fn number_field(object: &Value, keys: &[&str]) -> Option<f64> {
    first_present(object, keys).and_then(value_to_number)
}

/// Identifier coerced to a string; empty when no key matches
pub fn id_field(object: &Value, keys: &[&str]) -> String {
    string_field(object, keys).unwrap_or_default()
}

/// Listing-level value first, then the suite-level one
pub fn shared_field(
    listing: &Value,
    listing_key: &str,
    suite: &Value,
    suite_key: &str,
) -> Option<String> {
    string_field(listing, &[listing_key]).or_else(|| string_field(suite, &[suite_key]))
}
