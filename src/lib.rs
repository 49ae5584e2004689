//! Polymorphic MFA provider records: lenient wire decoding keyed by a `type` discriminator and an
//! ordered, fail-fast validation stage that recurses into variant-specific rules.
//!
//! The pipeline has two entry points. [`provider::deserialize`] turns raw JSON into an
//! [`MfaProvider`](provider::MfaProvider) without judging its contents, and
//! [`provider::validate`] reports the first unmet invariant. [`process`] chains both.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod obs;
pub mod provider;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;

	pub use crate::error::Result;
}

#[cfg(test)] use color_eyre as _;

// self
use crate::{_prelude::*, provider::MfaProvider};

/// Deserializes `raw` and validates the resulting provider in one call.
///
/// Parse faults surface as [`error::Error::Parse`]; the first violated invariant surfaces as
/// [`error::Error::Validation`].
pub fn process(raw: &str) -> Result<MfaProvider> {
	let provider = provider::deserialize(raw)?;

	provider.validate()?;

	Ok(provider)
}
