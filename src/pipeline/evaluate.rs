use tracing::debug;

use crate::calc::CalcError;
use crate::calc::impact::compute_financial_impact;
use crate::calc::metrics::{FramedMetrics, compute_framed};
use crate::calc::round2;
use crate::input::EvaluationArtifact;
use crate::model::{BusinessParameters, MetricFraming, framing::framing_order};
use crate::report::{DefaultRateComparison, InputMeta, SummaryData, ToolMeta};

#[derive(Debug, Clone)]
pub struct EvaluateInputs<'a> {
    pub artifact: &'a EvaluationArtifact,
    pub params: &'a BusinessParameters,
    pub framings: &'a [MetricFraming],
    pub tool: ToolMeta,
}

/// Runs both calculators over one artifact and assembles the summary.
pub fn run_evaluate(inputs: &EvaluateInputs<'_>) -> Result<SummaryData, CalcError> {
    inputs.params.validate()?;
    let matrix = &inputs.artifact.matrix;

    let mut fraud_alert = None;
    let mut approval = None;
    let mut framings = Vec::new();
    for &framing in framing_order() {
        if !inputs.framings.contains(&framing) {
            continue;
        }
        framings.push(framing);
        let framed = compute_framed(matrix, framing);
        debug!("{} metrics: {:?}", framed.framing().name(), framed.entries());
        match framed {
            FramedMetrics::FraudAlert(m) => fraud_alert = Some(m),
            FramedMetrics::Approval(m) => approval = Some(m),
        }
    }

    let default_rates = approval.map(|a| DefaultRateComparison {
        without_model: a.default_rate_without_model,
        with_model: a.predicted_default_rate,
        reduction_points: round2(a.default_rate_without_model - a.predicted_default_rate),
    });

    let impact = compute_financial_impact(
        matrix,
        inputs.params.avg_value,
        inputs.params.interest_rate,
    )?;
    let roi = match inputs.params.project_cost {
        Some(cost) => Some(impact.roi(cost)?),
        None => None,
    };

    Ok(SummaryData {
        tool: inputs.tool.clone(),
        input: InputMeta {
            source: inputs.artifact.source.clone(),
            total: matrix.total(),
            reported_accuracy: inputs.artifact.accuracy,
        },
        confusion_matrix: *matrix,
        parameters: *inputs.params,
        framings,
        fraud_alert,
        approval,
        default_rates,
        net_impact: impact.net_impact(),
        impact,
        roi,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/evaluate.rs"]
mod tests;
