//! The assembled MFA provider record, its builder, and its wire serialization.

// crates.io
use serde::{Serializer, ser::SerializeMap};
// self
use crate::{
	_prelude::*,
	provider::{ConfigAccessError, ConfigVariant, MfaProviderConfig, MfaProviderKind, wire},
};

/// Wire member names of a provider payload.
pub mod field {
	/// Opaque persistence identifier.
	pub const ID: &str = "id";
	/// Display name.
	pub const NAME: &str = "name";
	/// Discriminator token.
	pub const TYPE: &str = "type";
	/// Activation flag.
	pub const ACTIVE: &str = "active";
	/// Variant-specific payload.
	pub const CONFIG: &str = "config";
	/// Owning identity zone.
	pub const IDENTITY_ZONE_ID: &str = "identityZoneId";
	/// Creation instant (epoch milliseconds).
	pub const CREATED: &str = "created";
	/// Last modification instant (epoch milliseconds); the only snake_case member.
	pub const LAST_MODIFIED: &str = "last_modified";
}

/// Immutable MFA provider record.
///
/// Construction never enforces invariants; call [`validate`](Self::validate) before trusting a
/// value. Derive modified copies through the `with_*` constructors or [`MfaProvider::builder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MfaProvider {
	pub(crate) id: Option<String>,
	pub(crate) name: Option<String>,
	pub(crate) identity_zone_id: Option<String>,
	pub(crate) active: bool,
	pub(crate) kind: Option<MfaProviderKind>,
	pub(crate) config: Option<MfaProviderConfig>,
	pub(crate) created: Option<OffsetDateTime>,
	pub(crate) last_modified: Option<OffsetDateTime>,
}
impl MfaProvider {
	/// Returns a builder seeded with an active, empty provider.
	pub fn builder() -> MfaProviderBuilder {
		MfaProviderBuilder::default()
	}

	/// Opaque identifier; absent until persisted.
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Display name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Identity zone the provider belongs to.
	pub fn identity_zone_id(&self) -> Option<&str> {
		self.identity_zone_id.as_deref()
	}

	/// Whether the provider is enabled.
	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Resolved kind, or `None` when the wire token was not recognized.
	pub fn kind(&self) -> Option<MfaProviderKind> {
		self.kind
	}

	/// Variant payload, if any.
	pub fn config(&self) -> Option<&MfaProviderConfig> {
		self.config.as_ref()
	}

	/// Borrows the config as the payload type `T`.
	///
	/// Fails with [`ConfigAccessError::VariantMismatch`] when the provider is of another kind.
	pub fn config_as<T>(&self) -> Result<&T, ConfigAccessError>
	where
		T: ConfigVariant,
	{
		let config = self.config.as_ref().ok_or(ConfigAccessError::MissingConfig)?;

		T::extract(config).ok_or(ConfigAccessError::VariantMismatch {
			expected: T::KIND,
			found: config.kind(),
		})
	}

	/// Creation instant.
	pub fn created(&self) -> Option<OffsetDateTime> {
		self.created
	}

	/// Last modification instant.
	pub fn last_modified(&self) -> Option<OffsetDateTime> {
		self.last_modified
	}

	/// Returns a copy with `id` replaced.
	pub fn with_id(self, id: impl Into<String>) -> Self {
		Self { id: Some(id.into()), ..self }
	}

	/// Returns a copy with `name` replaced.
	pub fn with_name(self, name: impl Into<String>) -> Self {
		Self { name: Some(name.into()), ..self }
	}

	/// Returns a copy moved into another identity zone.
	pub fn with_identity_zone_id(self, zone: impl Into<String>) -> Self {
		Self { identity_zone_id: Some(zone.into()), ..self }
	}

	/// Returns a copy with the activation flag replaced.
	pub fn with_active(self, active: bool) -> Self {
		Self { active, ..self }
	}

	/// Returns a copy carrying `config`; the kind follows the config.
	pub fn with_config(self, config: impl Into<MfaProviderConfig>) -> Self {
		let config = config.into();

		Self { kind: Some(config.kind()), config: Some(config), ..self }
	}

	/// Returns a copy of another kind; a config of a different kind is dropped.
	pub fn with_kind(self, kind: MfaProviderKind) -> Self {
		let config = self.config.filter(|config| config.kind() == kind);

		Self { kind: Some(kind), config, ..self }
	}

	/// Returns a copy with the creation instant replaced.
	pub fn with_created(self, created: OffsetDateTime) -> Self {
		Self { created: Some(created), ..self }
	}

	/// Returns a copy with the last modification instant replaced.
	pub fn with_last_modified(self, last_modified: OffsetDateTime) -> Self {
		Self { last_modified: Some(last_modified), ..self }
	}
}
impl Default for MfaProvider {
	fn default() -> Self {
		Self {
			id: None,
			name: None,
			identity_zone_id: None,
			active: true,
			kind: None,
			config: None,
			created: None,
			last_modified: None,
		}
	}
}
impl Serialize for MfaProvider {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(None)?;

		if let Some(id) = &self.id {
			map.serialize_entry(field::ID, id)?;
		}
		if let Some(name) = &self.name {
			map.serialize_entry(field::NAME, name)?;
		}
		if let Some(kind) = &self.kind {
			map.serialize_entry(field::TYPE, kind)?;
		}

		map.serialize_entry(field::ACTIVE, &self.active)?;

		if let Some(config) = &self.config {
			map.serialize_entry(field::CONFIG, config)?;
		}
		if let Some(zone) = &self.identity_zone_id {
			map.serialize_entry(field::IDENTITY_ZONE_ID, zone)?;
		}
		if let Some(created) = self.created {
			map.serialize_entry(field::CREATED, &wire::to_millis(created))?;
		}
		if let Some(last_modified) = self.last_modified {
			map.serialize_entry(field::LAST_MODIFIED, &wire::to_millis(last_modified))?;
		}

		map.end()
	}
}

/// Builder for [`MfaProvider`] values.
///
/// [`build`](Self::build) is infallible; invariants are checked by the validator.
#[derive(Debug, Default)]
pub struct MfaProviderBuilder {
	provider: MfaProvider,
}
impl MfaProviderBuilder {
	/// Sets the opaque identifier.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.provider.id = Some(id.into());

		self
	}

	/// Sets the display name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.provider.name = Some(name.into());

		self
	}

	/// Sets the owning identity zone.
	pub fn identity_zone_id(mut self, zone: impl Into<String>) -> Self {
		self.provider.identity_zone_id = Some(zone.into());

		self
	}

	/// Sets the activation flag.
	pub fn active(mut self, active: bool) -> Self {
		self.provider.active = active;

		self
	}

	/// Sets the kind, dropping a config of a different kind.
	pub fn kind(mut self, kind: MfaProviderKind) -> Self {
		self.provider = self.provider.with_kind(kind);

		self
	}

	/// Sets the config together with its kind.
	pub fn config(mut self, config: impl Into<MfaProviderConfig>) -> Self {
		self.provider = self.provider.with_config(config);

		self
	}

	/// Sets the creation instant.
	pub fn created(mut self, created: OffsetDateTime) -> Self {
		self.provider.created = Some(created);

		self
	}

	/// Sets the last modification instant.
	pub fn last_modified(mut self, last_modified: OffsetDateTime) -> Self {
		self.provider.last_modified = Some(last_modified);

		self
	}

	/// Finishes the provider without validating it.
	pub fn build(self) -> MfaProvider {
		self.provider
	}
}
