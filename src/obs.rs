//! Optional observability helpers for the decode/validate pipeline.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run each stage inside an `mfa_provider.pipeline` span carrying a `stage`
//!   field, and to emit `debug` events for unresolved `type` tokens and validation violations.
//! - Enable `metrics` to increment the `mfa_provider_pipeline_total` counter for every stage
//!   run, labeled by `stage` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Pipeline stages observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineStage {
	/// Raw payload to provider record.
	Deserialize,
	/// Ordered invariant checks.
	Validate,
}
impl PipelineStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			PipelineStage::Deserialize => "deserialize",
			PipelineStage::Validate => "validate",
		}
	}
}
impl Display for PipelineStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each stage run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineOutcome {
	/// The stage produced a value.
	Success,
	/// The stage returned an error to the caller.
	Failure,
}
impl PipelineOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			PipelineOutcome::Success => "success",
			PipelineOutcome::Failure => "failure",
		}
	}
}
impl Display for PipelineOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
