// self
use crate::obs::{PipelineOutcome, PipelineStage};

/// Records a stage outcome via the global metrics recorder (when enabled).
pub fn record_pipeline_outcome(stage: PipelineStage, outcome: PipelineOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"mfa_provider_pipeline_total",
			"stage" => stage.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_pipeline_outcome_noop_without_metrics() {
		record_pipeline_outcome(PipelineStage::Deserialize, PipelineOutcome::Failure);
	}
}
