//! Field coercion
//!
//! Typed accessors for the loosely structured fields of an API document.
//! Every accessor takes the default to use when the field is absent or
//! malformed and never fails; malformed values are logged at `trace` level.

use chrono::{DateTime, NaiveDateTime, Utc};

use super::document::Node;

/// Wire format of every timestamp the tracker API returns
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S UTC";

/// Values accepted as boolean true (case-sensitive)
const TRUE_VALUES: [&str; 2] = ["true", "True"];

fn raw<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    node.child(name).and_then(|field| field.text.as_deref())
}

/// Text content of the first `name` field, or `default` if absent or empty
pub fn text(node: &Node, name: &str, default: Option<&str>) -> Option<String> {
    raw(node, name).or(default).map(str::to_owned)
}

/// Base-10 integer value of the field
pub fn integer(node: &Node, name: &str, default: i64) -> i64 {
    match raw(node, name) {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::trace!(field = name, value, "Not an integer, using default");
            default
        }),
        None => default,
    }
}

/// Floating point value of the field
pub fn real(node: &Node, name: &str, default: f64) -> f64 {
    match raw(node, name) {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::trace!(field = name, value, "Not a number, using default");
            default
        }),
        None => default,
    }
}

/// `true` iff the field reads exactly `true` or `True`.
///
/// Any other present value is `false`; only an absent field yields `default`.
pub fn boolean(node: &Node, name: &str, default: bool) -> bool {
    match raw(node, name) {
        Some(value) => TRUE_VALUES.contains(&value),
        None => default,
    }
}

/// Timestamp in [`TIMESTAMP_FORMAT`]
pub fn timestamp(
    node: &Node,
    name: &str,
    default: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    match raw(node, name) {
        Some(value) => match NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT) {
            Ok(parsed) => Some(parsed.and_utc()),
            Err(_) => {
                tracing::trace!(field = name, value, "Not a timestamp, using default");
                default
            }
        },
        None => default,
    }
}

/// Render a timestamp the way the API writes it
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}
