// self
use crate::{_prelude::*, obs::PipelineStage, provider::ViolationKind};

/// A span builder used by pipeline stages.
#[derive(Clone, Debug)]
pub struct PipelineSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl PipelineSpan {
	/// Creates a new span tagged with the provided stage.
	pub fn new(stage: PipelineStage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("mfa_provider.pipeline", stage = stage.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Enters the span for the rest of the stage.
	pub fn entered(self) -> PipelineSpanGuard {
		#[cfg(feature = "tracing")]
		{
			PipelineSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			PipelineSpanGuard {}
		}
	}
}

/// RAII guard returned by [`PipelineSpan::entered`].
pub struct PipelineSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for PipelineSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("PipelineSpanGuard(..)")
	}
}

/// Notes a `type` token that did not resolve to a known kind.
pub fn unresolved_kind(token: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(token, "MFA provider type token did not resolve; config discarded.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = token;
	}
}

/// Notes the violation that stopped validation.
pub fn violation(kind: ViolationKind) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(violation = kind.as_str(), "MFA provider failed validation.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = kind;
	}
}
