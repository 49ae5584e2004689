//! Ordered, fail-fast validation of assembled providers.

// self
use crate::{
	_prelude::*,
	obs::{self, PipelineOutcome, PipelineSpan, PipelineStage},
	provider::{ConfigViolation, MfaProvider},
};

const NAME_MAX_LEN: usize = 255;

/// First invariant a provider was found to violate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ValidationError {
	/// Name is missing or empty.
	#[error("Provider name must be set.")]
	NameRequired,
	/// Name is too long or contains characters other than ASCII letters and digits.
	#[error("Provider name invalid.")]
	NameInvalid,
	/// Kind is missing, usually because the `type` token was not recognized.
	#[error("Provider type must be set.")]
	TypeRequired,
	/// Config is missing.
	#[error("Provider config must be set.")]
	ConfigRequired,
	/// Identity zone is missing or blank.
	#[error("Provider must belong to a scope.")]
	ScopeRequired,
	/// The config's own validation failed.
	#[error(transparent)]
	Config(#[from] ConfigViolation),
}
impl ValidationError {
	/// Stable label grouping violations by the check that raised them.
	pub fn kind(&self) -> ViolationKind {
		match self {
			Self::NameRequired => ViolationKind::NameRequired,
			Self::NameInvalid => ViolationKind::NameInvalid,
			Self::TypeRequired => ViolationKind::TypeRequired,
			Self::ConfigRequired => ViolationKind::ConfigRequired,
			Self::ScopeRequired => ViolationKind::ScopeRequired,
			Self::Config(_) => ViolationKind::Config,
		}
	}
}

/// Check that produced a [`ValidationError`], in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViolationKind {
	/// Name presence.
	NameRequired,
	/// Name length and charset.
	NameInvalid,
	/// Kind presence.
	TypeRequired,
	/// Config presence.
	ConfigRequired,
	/// Identity zone presence.
	ScopeRequired,
	/// Variant-owned checks.
	Config,
}
impl ViolationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ViolationKind::NameRequired => "name_required",
			ViolationKind::NameInvalid => "name_invalid",
			ViolationKind::TypeRequired => "type_required",
			ViolationKind::ConfigRequired => "config_required",
			ViolationKind::ScopeRequired => "scope_required",
			ViolationKind::Config => "config",
		}
	}
}
impl Display for ViolationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Validates `provider`, returning the first violated invariant.
pub fn validate(provider: &MfaProvider) -> Result<(), ValidationError> {
	let _span = PipelineSpan::new(PipelineStage::Validate).entered();
	let result = check(provider);

	match &result {
		Ok(()) => obs::record_pipeline_outcome(PipelineStage::Validate, PipelineOutcome::Success),
		Err(e) => {
			obs::violation(e.kind());
			obs::record_pipeline_outcome(PipelineStage::Validate, PipelineOutcome::Failure);
		},
	}

	result
}

fn check(provider: &MfaProvider) -> Result<(), ValidationError> {
	let name = provider.name().unwrap_or_default();

	if name.is_empty() {
		return Err(ValidationError::NameRequired);
	}
	if name.chars().count() > NAME_MAX_LEN || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
		return Err(ValidationError::NameInvalid);
	}
	if provider.kind().is_none() {
		return Err(ValidationError::TypeRequired);
	}

	let config = provider.config().ok_or(ValidationError::ConfigRequired)?;

	if provider.identity_zone_id().is_none_or(|zone| zone.trim().is_empty()) {
		return Err(ValidationError::ScopeRequired);
	}

	config.validate()?;

	Ok(())
}

impl MfaProvider {
	/// Validates the provider; see [`validate`].
	pub fn validate(&self) -> Result<(), ValidationError> {
		validate(self)
	}

	/// Validates the provider and hands it back on success.
	pub fn into_validated(self) -> Result<Self, ValidationError> {
		validate(&self)?;

		Ok(self)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::provider::{GoogleAuthenticatorConfig, MfaProviderKind};

	fn valid() -> MfaProvider {
		MfaProvider::builder()
			.name("p1")
			.identity_zone_id("z1")
			.config(GoogleAuthenticatorConfig::default())
			.build()
	}

	#[test]
	fn valid_provider_passes() {
		valid().validate().expect("Fixture provider should validate.");
		valid().into_validated().expect("Fixture provider should be handed back.");
	}

	#[test]
	fn name_rules() {
		assert_eq!(MfaProvider::default().validate(), Err(ValidationError::NameRequired));
		assert_eq!(valid().with_name("").validate(), Err(ValidationError::NameRequired));
		assert_eq!(valid().with_name(" ").validate(), Err(ValidationError::NameInvalid));
		assert_eq!(valid().with_name("bad name!").validate(), Err(ValidationError::NameInvalid));
		assert_eq!(valid().with_name("naïve").validate(), Err(ValidationError::NameInvalid));
		assert_eq!(valid().with_name("a".repeat(256)).validate(), Err(ValidationError::NameInvalid));
		assert_eq!(valid().with_name("a".repeat(255)).validate(), Ok(()));
	}

	#[test]
	fn checks_run_in_fixed_order() {
		let provider = MfaProvider::builder().name("p1").build();

		assert_eq!(provider.validate(), Err(ValidationError::TypeRequired));

		let provider = provider.with_kind(MfaProviderKind::GoogleAuthenticator);

		assert_eq!(provider.validate(), Err(ValidationError::ConfigRequired));

		let provider = provider
			.with_config(GoogleAuthenticatorConfig { digits: 9, ..Default::default() });

		assert_eq!(provider.validate(), Err(ValidationError::ScopeRequired));

		let provider = provider.with_identity_zone_id("\t");

		assert_eq!(provider.validate(), Err(ValidationError::ScopeRequired));

		let provider = provider.with_identity_zone_id("z1");
		let err = provider.validate().expect_err("Config violation should surface last.");

		assert_eq!(
			err,
			ValidationError::Config(ConfigViolation::DigitsOutOfRange { min: 6, max: 8, digits: 9 })
		);
		assert_eq!(err.kind(), ViolationKind::Config);
		assert_eq!(err.to_string(), "Authenticator digits must be between 6 and 8.");
	}

	#[test]
	fn inactive_providers_still_validate() {
		assert_eq!(valid().with_active(false).validate(), Ok(()));
	}

	#[test]
	fn violation_kinds_follow_check_order() {
		assert!(ViolationKind::NameRequired < ViolationKind::NameInvalid);
		assert!(ViolationKind::ScopeRequired < ViolationKind::Config);
		assert_eq!(ValidationError::ScopeRequired.kind().to_string(), "scope_required");
	}
}
