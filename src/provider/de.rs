//! Decoding of untyped provider payloads.
//!
//! Decoding is total over JSON input: unknown `type` tokens, missing names, or blank zones all
//! produce a provider that the validator will later reject. The only faults are input that is not
//! JSON and a present `config` payload that does not fit the resolved kind.

// crates.io
use serde::{Deserializer, de::Error as DeError};
// self
use crate::{
	_prelude::*,
	error::ParseError,
	obs::{self, PipelineOutcome, PipelineSpan, PipelineStage},
	provider::{DEFAULT_KIND_TOKEN, MfaProvider, MfaProviderConfig, MfaProviderKind, field, wire},
};

/// Decodes a provider from raw JSON text.
pub fn deserialize(raw: &str) -> Result<MfaProvider, ParseError> {
	let node =
		serde_json::from_str::<Value>(raw).map_err(|source| ParseError::Malformed { source })?;

	from_value(&node)
}

/// Decodes a provider from an already-parsed JSON tree.
///
/// A tree that is not an object decodes as if every member were missing.
pub fn from_value(node: &Value) -> Result<MfaProvider, ParseError> {
	let _span = PipelineSpan::new(PipelineStage::Deserialize).entered();
	let result = decode(node);

	obs::record_pipeline_outcome(PipelineStage::Deserialize, match &result {
		Ok(_) => PipelineOutcome::Success,
		Err(_) => PipelineOutcome::Failure,
	});

	result
}

fn decode(node: &Value) -> Result<MfaProvider, ParseError> {
	let token = wire::string(node, field::TYPE).unwrap_or_else(|| DEFAULT_KIND_TOKEN.to_owned());
	let kind = MfaProviderKind::resolve(&token);
	let config = match kind {
		Some(kind) => Some(decode_config(kind, node.get(field::CONFIG))?),
		None => {
			obs::unresolved_kind(&token);

			None
		},
	};

	Ok(MfaProvider {
		id: wire::string(node, field::ID),
		name: wire::string(node, field::NAME),
		identity_zone_id: wire::string(node, field::IDENTITY_ZONE_ID),
		active: wire::boolean(node, field::ACTIVE, true),
		kind,
		config,
		created: wire::timestamp(node, field::CREATED),
		last_modified: wire::timestamp(node, field::LAST_MODIFIED),
	})
}

/// Parses the `config` member for a resolved kind, defaulting when no payload was supplied.
fn decode_config(
	kind: MfaProviderKind,
	member: Option<&Value>,
) -> Result<MfaProviderConfig, ParseError> {
	let payload = match member {
		None | Some(Value::Null) => return Ok(MfaProviderConfig::default_for(kind)),
		Some(Value::String(text)) if text.trim().is_empty() =>
			return Ok(MfaProviderConfig::default_for(kind)),
		Some(Value::String(text)) => serde_json::from_str::<Value>(text)
			.map_err(|source| ParseError::ConfigText { kind, source })?,
		Some(other) => other.clone(),
	};

	if payload.is_null() {
		return Ok(MfaProviderConfig::default_for(kind));
	}

	MfaProviderConfig::parse(kind, &payload)
}

impl<'de> Deserialize<'de> for MfaProvider {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let node = Value::deserialize(deserializer)?;

		from_value(&node).map_err(D::Error::custom)
	}
}
