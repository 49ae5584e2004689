//! Registry mapping wire discriminator tokens to provider kinds.

// crates.io
use serde::{Deserializer, Serializer, de::Error as DeError, ser::Error as SerError};
// self
use crate::_prelude::*;

/// Token substituted when a payload omits its `type` member.
pub const DEFAULT_KIND_TOKEN: &str = "google-authenticator";

/// Ordered `(token, kind)` pairs; the single source for both lookup directions.
const REGISTRY: &[(&str, MfaProviderKind)] =
	&[(DEFAULT_KIND_TOKEN, MfaProviderKind::GoogleAuthenticator)];

/// Error returned when parsing a token that is not registered.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown MFA provider type `{token}`.")]
pub struct UnknownKindError {
	/// Token that failed to resolve.
	pub token: String,
}

/// Closed set of supported MFA provider kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MfaProviderKind {
	/// Time-based one-time passwords generated by an authenticator app.
	GoogleAuthenticator,
}
impl MfaProviderKind {
	/// Every constructible kind.
	pub const ALL: [MfaProviderKind; 1] = [MfaProviderKind::GoogleAuthenticator];

	/// Resolves a wire token; unknown tokens yield `None` rather than an error.
	pub fn resolve(token: &str) -> Option<Self> {
		REGISTRY.iter().find(|(candidate, _)| *candidate == token).map(|(_, kind)| *kind)
	}

	/// Returns the registered wire token for this kind, if any.
	pub fn unresolve(self) -> Option<&'static str> {
		REGISTRY.iter().find(|(_, kind)| *kind == self).map(|(token, _)| *token)
	}

	/// Alias of [`unresolve`](Self::unresolve).
	pub fn token(self) -> Option<&'static str> {
		self.unresolve()
	}
}
impl Display for MfaProviderKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self.unresolve() {
			Some(token) => f.write_str(token),
			None => Debug::fmt(self, f),
		}
	}
}
impl FromStr for MfaProviderKind {
	type Err = UnknownKindError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::resolve(s).ok_or_else(|| UnknownKindError { token: s.to_owned() })
	}
}
impl Serialize for MfaProviderKind {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let token = self
			.unresolve()
			.ok_or_else(|| S::Error::custom(format!("{self:?} has no registered token")))?;

		serializer.serialize_str(token)
	}
}
impl<'de> Deserialize<'de> for MfaProviderKind {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let token = String::deserialize(deserializer)?;

		token.parse().map_err(D::Error::custom)
	}
}
