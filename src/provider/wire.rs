//! Lenient scalar readers over untyped JSON nodes.
//!
//! Missing members and JSON `null` always fall back to the caller's default. Scalars of the
//! wrong type are coerced where a sensible reading exists instead of failing the whole decode.

// self
use crate::_prelude::*;

const NANOS_PER_MILLI: i128 = 1_000_000;
const UNSET_MILLIS: i64 = -1;

/// Reads `field` as text, returning `None` when it is missing or null.
pub(crate) fn string(node: &Value, field: &str) -> Option<String> {
	match node.get(field)? {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		Value::Bool(b) => Some(b.to_string()),
		Value::Number(n) => Some(n.to_string()),
		Value::Array(_) | Value::Object(_) => Some(String::new()),
	}
}

/// Reads `field` as a boolean, falling back to `default` when no reading exists.
///
/// Integers read as `true` when non-zero; strings must be exactly `true` or `false` once trimmed.
pub(crate) fn boolean(node: &Value, field: &str, default: bool) -> bool {
	match node.get(field) {
		Some(Value::Bool(b)) => *b,
		Some(Value::Number(n)) => match n.as_i64() {
			Some(i) => i != 0,
			None => default,
		},
		Some(Value::String(s)) => match s.trim() {
			"true" => true,
			"false" => false,
			_ => default,
		},
		_ => default,
	}
}

/// Reads `field` as epoch milliseconds.
///
/// Integers are taken as-is, fractional numbers are truncated toward zero, booleans read as `1`
/// or `0`, and strings are parsed the same way. `-1` marks an unset instant. Anything else,
/// including instants outside the representable range, reads as `None`.
pub(crate) fn timestamp(node: &Value, field: &str) -> Option<OffsetDateTime> {
	let millis = match node.get(field)? {
		Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
		Value::String(s) => {
			let s = s.trim();

			s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().and_then(truncate))
		},
		Value::Bool(b) => Some(i64::from(*b)),
		_ => None,
	}?;

	if millis == UNSET_MILLIS {
		return None;
	}

	from_millis(millis)
}

fn truncate(value: f64) -> Option<i64> {
	// `as` saturates; out-of-range instants are rejected by `from_millis`.
	value.is_finite().then(|| value.trunc() as i64)
}

pub(crate) fn from_millis(millis: i64) -> Option<OffsetDateTime> {
	OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * NANOS_PER_MILLI).ok()
}

pub(crate) fn to_millis(instant: OffsetDateTime) -> i64 {
	// Any valid `OffsetDateTime` fits in i64 milliseconds.
	instant.unix_timestamp_nanos().div_euclid(NANOS_PER_MILLI) as i64
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	use time::macros;
	// self
	use super::*;

	#[test]
	fn strings_coerce_scalars() {
		let node = json!({ "s": "x", "n": 42, "b": false, "nul": null, "o": { "k": 1 } });

		assert_eq!(string(&node, "s").as_deref(), Some("x"));
		assert_eq!(string(&node, "n").as_deref(), Some("42"));
		assert_eq!(string(&node, "b").as_deref(), Some("false"));
		assert_eq!(string(&node, "nul"), None);
		assert_eq!(string(&node, "missing"), None);
		assert_eq!(string(&node, "o").as_deref(), Some(""));
	}

	#[test]
	fn booleans_fall_back_to_default() {
		let node = json!({
			"t": true,
			"zero": 0,
			"one": 7,
			"txt": " false ",
			"upper": "FALSE",
			"junk": "maybe",
		});

		assert!(boolean(&node, "t", false));
		assert!(!boolean(&node, "zero", true));
		assert!(boolean(&node, "one", false));
		assert!(!boolean(&node, "txt", true));
		assert!(boolean(&node, "upper", true));
		assert!(!boolean(&node, "upper", false));
		assert!(boolean(&node, "junk", true));
		assert!(boolean(&node, "missing", true));
		assert!(boolean(&json!([1, 2]), "t", true));
	}

	#[test]
	fn timestamps_read_epoch_millis() {
		let instant = macros::datetime!(2025-11-10 12:00:00.123 UTC);
		let millis = to_millis(instant);
		let node = json!({ "n": millis, "s": millis.to_string(), "bad": "soon", "huge": i64::MAX });

		assert_eq!(timestamp(&node, "n"), Some(instant));
		assert_eq!(timestamp(&node, "s"), Some(instant));
		assert_eq!(timestamp(&node, "bad"), None);
		assert_eq!(timestamp(&node, "huge"), None);
		assert_eq!(timestamp(&node, "missing"), None);
	}

	#[test]
	fn fractional_and_boolean_timestamps_truncate() {
		let node = json!({
			"float": 1_762_776_000_123.9_f64,
			"float_text": " 1762776000123.9 ",
			"negative": -1.5,
			"yes": true,
			"no": false,
		});
		let instant = macros::datetime!(2025-11-10 12:00:00.123 UTC);

		assert_eq!(timestamp(&node, "float"), Some(instant));
		assert_eq!(timestamp(&node, "float_text"), Some(instant));
		assert_eq!(timestamp(&node, "negative"), None);
		assert_eq!(timestamp(&node, "yes"), from_millis(1));
		assert_eq!(timestamp(&node, "no"), Some(OffsetDateTime::UNIX_EPOCH));
	}

	#[test]
	fn minus_one_marks_an_unset_instant() {
		let node = json!({ "n": -1, "s": "-1", "other": -2 });

		assert_eq!(timestamp(&node, "n"), None);
		assert_eq!(timestamp(&node, "s"), None);
		assert_eq!(timestamp(&node, "other"), from_millis(-2));
	}

	#[test]
	fn pre_epoch_millis_round_down() {
		let instant = macros::datetime!(1969-12-31 23:59:59.9995 UTC);

		assert_eq!(to_millis(instant), -1);
		assert_eq!(from_millis(-1), Some(macros::datetime!(1969-12-31 23:59:59.999 UTC)));
	}
}
