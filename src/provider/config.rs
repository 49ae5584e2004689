//! Variant-specific config payloads carried by MFA providers.
//!
//! [`MfaProviderConfig`] is a closed union with one arm per [`MfaProviderKind`]. Each arm wraps
//! a payload type implementing [`ConfigVariant`], which knows how to parse itself, how to build
//! a usable default, and which invariants it owns.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, error::ParseError, provider::MfaProviderKind};

const DESCRIPTION_MAX_LEN: usize = 255;

/// Violations raised by a variant's own validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ConfigViolation {
	/// OTP length outside the supported range.
	#[error("Authenticator digits must be between {min} and {max}.")]
	DigitsOutOfRange {
		/// Smallest accepted length.
		min: u8,
		/// Largest accepted length.
		max: u8,
		/// Rejected value.
		digits: u8,
	},
	/// OTP step of zero seconds.
	#[error("Authenticator duration must be positive.")]
	NonPositiveDuration,
	/// Issuer label that is blank or contains a `:` separator.
	#[error("Authenticator issuer is invalid.")]
	InvalidIssuer,
	/// Description longer than the stored column allows.
	#[error("Authenticator description is too long.")]
	DescriptionTooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Errors returned by [`MfaProvider::config_as`](crate::provider::MfaProvider::config_as).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
pub enum ConfigAccessError {
	/// The provider carries no config.
	#[error("Provider has no config.")]
	MissingConfig,
	/// The provider's config belongs to another kind.
	#[error("Provider config is {found}, not {expected}.")]
	VariantMismatch {
		/// Kind requested by the caller.
		expected: MfaProviderKind,
		/// Kind actually carried by the provider.
		found: MfaProviderKind,
	},
}

/// Capability shared by every config payload.
pub trait ConfigVariant: Sized + Default + DeserializeOwned + Serialize {
	/// Kind this payload belongs to.
	const KIND: MfaProviderKind;

	/// Parses a structured payload into this shape.
	///
	/// Only JSON objects are accepted; arrays would otherwise fill fields by position.
	fn parse(payload: &Value) -> Result<Self, ParseError> {
		if !payload.is_object() {
			return Err(ParseError::ConfigNotObject { kind: Self::KIND, found: json_type(payload) });
		}

		serde_path_to_error::deserialize(payload)
			.map_err(|source| ParseError::Config { kind: Self::KIND, source })
	}

	/// Checks the invariants owned by this variant.
	fn validate(&self) -> Result<(), ConfigViolation>;

	/// Borrows this payload out of the union when the arm matches.
	fn extract(config: &MfaProviderConfig) -> Option<&Self>;

	/// Wraps this payload into the union.
	fn into_config(self) -> MfaProviderConfig;
}

fn json_type(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// Config payload for a provider, one arm per kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MfaProviderConfig {
	/// Config for [`MfaProviderKind::GoogleAuthenticator`].
	GoogleAuthenticator(GoogleAuthenticatorConfig),
}
impl MfaProviderConfig {
	/// Kind of the wrapped payload.
	pub fn kind(&self) -> MfaProviderKind {
		match self {
			Self::GoogleAuthenticator(_) => MfaProviderKind::GoogleAuthenticator,
		}
	}

	/// Builds the default payload for `kind`.
	pub fn default_for(kind: MfaProviderKind) -> Self {
		match kind {
			MfaProviderKind::GoogleAuthenticator =>
				GoogleAuthenticatorConfig::default().into_config(),
		}
	}

	/// Parses `payload` into the shape selected by `kind`.
	pub fn parse(kind: MfaProviderKind, payload: &Value) -> Result<Self, ParseError> {
		match kind {
			MfaProviderKind::GoogleAuthenticator =>
				GoogleAuthenticatorConfig::parse(payload)
					.map(GoogleAuthenticatorConfig::into_config),
		}
	}

	/// Runs the wrapped payload's own validation.
	pub fn validate(&self) -> Result<(), ConfigViolation> {
		match self {
			Self::GoogleAuthenticator(config) => config.validate(),
		}
	}
}
impl From<GoogleAuthenticatorConfig> for MfaProviderConfig {
	fn from(config: GoogleAuthenticatorConfig) -> Self {
		config.into_config()
	}
}

/// HMAC algorithms accepted for TOTP generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OtpAlgorithm {
	#[default]
	/// HMAC-SHA1, the authenticator-app default.
	Sha1,
	/// HMAC-SHA256.
	Sha256,
	/// HMAC-SHA512.
	Sha512,
}

/// TOTP tunables for an authenticator-app provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoogleAuthenticatorConfig {
	/// Free-form description shown to administrators.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub provider_description: Option<String>,
	/// Issuer label embedded in enrollment URIs.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub issuer: Option<String>,
	/// HMAC algorithm.
	pub algorithm: OtpAlgorithm,
	/// Number of digits per code.
	pub digits: u8,
	/// Code validity window in seconds.
	pub duration: u32,
}
impl GoogleAuthenticatorConfig {
	/// Shortest accepted code length.
	pub const MIN_DIGITS: u8 = 6;
	/// Longest accepted code length.
	pub const MAX_DIGITS: u8 = 8;

	/// Sets the issuer label.
	pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
		self.issuer = Some(issuer.into());

		self
	}

	/// Sets the administrator-facing description.
	pub fn with_provider_description(mut self, description: impl Into<String>) -> Self {
		self.provider_description = Some(description.into());

		self
	}
}
impl Default for GoogleAuthenticatorConfig {
	fn default() -> Self {
		Self {
			provider_description: None,
			issuer: None,
			algorithm: OtpAlgorithm::Sha1,
			digits: Self::MIN_DIGITS,
			duration: 30,
		}
	}
}
impl ConfigVariant for GoogleAuthenticatorConfig {
	const KIND: MfaProviderKind = MfaProviderKind::GoogleAuthenticator;

	fn validate(&self) -> Result<(), ConfigViolation> {
		if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&self.digits) {
			return Err(ConfigViolation::DigitsOutOfRange {
				min: Self::MIN_DIGITS,
				max: Self::MAX_DIGITS,
				digits: self.digits,
			});
		}
		if self.duration == 0 {
			return Err(ConfigViolation::NonPositiveDuration);
		}
		if self
			.issuer
			.as_deref()
			.is_some_and(|issuer| issuer.trim().is_empty() || issuer.contains(':'))
		{
			return Err(ConfigViolation::InvalidIssuer);
		}
		if self
			.provider_description
			.as_deref()
			.is_some_and(|description| description.chars().count() > DESCRIPTION_MAX_LEN)
		{
			return Err(ConfigViolation::DescriptionTooLong { max: DESCRIPTION_MAX_LEN });
		}

		Ok(())
	}

	fn extract(config: &MfaProviderConfig) -> Option<&Self> {
		match config {
			MfaProviderConfig::GoogleAuthenticator(inner) => Some(inner),
		}
	}

	fn into_config(self) -> MfaProviderConfig {
		MfaProviderConfig::GoogleAuthenticator(self)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn default_config_is_valid() {
		let config = GoogleAuthenticatorConfig::default();

		config.validate().expect("Default authenticator config should validate.");
		assert_eq!(config.digits, 6);
		assert_eq!(config.duration, 30);
		assert_eq!(config.algorithm, OtpAlgorithm::Sha1);
		assert_eq!(
			MfaProviderConfig::default_for(MfaProviderKind::GoogleAuthenticator),
			MfaProviderConfig::from(config)
		);
	}

	#[test]
	fn empty_object_parses_to_defaults() {
		let config = GoogleAuthenticatorConfig::parse(&json!({}))
			.expect("An empty object should fill every field from defaults.");

		assert_eq!(config, GoogleAuthenticatorConfig::default());
	}

	#[test]
	fn parse_reports_the_failing_member() {
		let err = GoogleAuthenticatorConfig::parse(&json!({ "digits": "six" }))
			.expect_err("A textual digit count must not parse.");

		match err {
			ParseError::Config { kind, source } => {
				assert_eq!(kind, MfaProviderKind::GoogleAuthenticator);
				assert_eq!(source.path().to_string(), "digits");
			},
			other => panic!("Unexpected parse error: {other:?}."),
		}
	}

	#[test]
	fn non_object_payloads_are_rejected() {
		for (payload, found) in [
			(json!([]), "an array"),
			(json!(["d", "Iss", "SHA1", 7, 45]), "an array"),
			(json!(6), "a number"),
			(json!(true), "a boolean"),
			(json!("{}"), "a string"),
		] {
			let err = GoogleAuthenticatorConfig::parse(&payload)
				.expect_err("Only objects may fill the authenticator shape.");

			assert!(
				matches!(
					err,
					ParseError::ConfigNotObject { kind: MfaProviderKind::GoogleAuthenticator, found: f }
						if f == found
				),
				"Unexpected parse error for {payload}: {err:?}."
			);
		}
	}

	#[test]
	fn validation_runs_in_order() {
		let config = GoogleAuthenticatorConfig {
			digits: 4,
			duration: 0,
			issuer: Some("a:b".into()),
			..Default::default()
		};

		assert_eq!(
			config.validate(),
			Err(ConfigViolation::DigitsOutOfRange { min: 6, max: 8, digits: 4 })
		);

		let config = GoogleAuthenticatorConfig { digits: 8, ..config };

		assert_eq!(config.validate(), Err(ConfigViolation::NonPositiveDuration));

		let config = GoogleAuthenticatorConfig { duration: 60, ..config };

		assert_eq!(config.validate(), Err(ConfigViolation::InvalidIssuer));

		let config = config.with_issuer("Example").with_provider_description("x".repeat(256));

		assert_eq!(config.validate(), Err(ConfigViolation::DescriptionTooLong { max: 255 }));

		let config = config.with_provider_description("Primary TOTP");

		assert_eq!(config.validate(), Ok(()));
	}

	#[test]
	fn blank_issuer_is_rejected() {
		let config = GoogleAuthenticatorConfig::default().with_issuer("  ");

		assert_eq!(config.validate(), Err(ConfigViolation::InvalidIssuer));
	}

	#[test]
	fn serialization_omits_absent_labels() {
		let value = serde_json::to_value(MfaProviderConfig::from(
			GoogleAuthenticatorConfig::default().with_issuer("Example"),
		))
		.expect("Config should serialize.");

		assert_eq!(
			value,
			json!({ "issuer": "Example", "algorithm": "SHA1", "digits": 6, "duration": 30 })
		);
	}
}
