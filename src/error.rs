//! Pipeline-level error types shared by the deserializer and validator.

// self
use crate::{_prelude::*, provider::MfaProviderKind};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by [`process`](crate::process).
#[derive(Debug, ThisError)]
pub enum Error {
	/// Raw input or a present config payload could not be parsed.
	#[error(transparent)]
	Parse(#[from] ParseError),
	/// The provider was parsed but violates an invariant.
	#[error(transparent)]
	Validation(#[from] crate::provider::ValidationError),
}

/// Parse faults raised by the deserializer.
///
/// Semantic problems (unknown `type` tokens, missing names, blank zones) never land here; they
/// are left for the validator.
#[derive(Debug, ThisError)]
pub enum ParseError {
	/// Raw input is not a JSON document.
	#[error("Provider payload is not valid JSON.")]
	Malformed {
		/// Underlying JSON syntax failure.
		#[source]
		source: serde_json::Error,
	},
	/// A textual `config` member does not hold JSON.
	#[error("The {kind} config string is not valid JSON.")]
	ConfigText {
		/// Variant whose config was being decoded.
		kind: MfaProviderKind,
		/// Underlying JSON syntax failure.
		#[source]
		source: serde_json::Error,
	},
	/// A present `config` payload is not a JSON object.
	#[error("The {kind} config must be a JSON object, found {found}.")]
	ConfigNotObject {
		/// Variant whose config was being decoded.
		kind: MfaProviderKind,
		/// JSON type of the rejected payload.
		found: &'static str,
	},
	/// A present `config` payload does not match the variant's shape.
	#[error("The {kind} config does not match the expected shape at `{}`.", .source.path())]
	Config {
		/// Variant whose config was being decoded.
		kind: MfaProviderKind,
		/// Structured failure carrying the offending member path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl ParseError {
	/// Returns the variant whose config failed to parse, if the fault is config-specific.
	pub fn kind(&self) -> Option<MfaProviderKind> {
		match self {
			Self::Malformed { .. } => None,
			Self::ConfigText { kind, .. }
			| Self::ConfigNotObject { kind, .. }
			| Self::Config { kind, .. } => Some(*kind),
		}
	}
}
