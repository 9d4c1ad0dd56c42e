use serde::Serialize;

use crate::calc::{percent, round2};
use crate::model::{ConfusionMatrix, MetricFraming};

/// Alert-quality percentages, each in 0..=100 and rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsResult {
    pub precision_of_alerts: f64,
    pub recall_of_fraud: f64,
    pub false_positive_rate: f64,
    pub false_negative_rate: f64,
    pub alert_rate: f64,
    pub non_alert_rate: f64,
    pub f1_score: f64,
    pub accuracy: f64,
}

impl MetricsResult {
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("precision_of_alerts", self.precision_of_alerts),
            ("recall_of_fraud", self.recall_of_fraud),
            ("false_positive_rate", self.false_positive_rate),
            ("false_negative_rate", self.false_negative_rate),
            ("alert_rate", self.alert_rate),
            ("non_alert_rate", self.non_alert_rate),
            ("f1_score", self.f1_score),
            ("accuracy", self.accuracy),
        ]
    }
}

/// Loan approval view of the same matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApprovalMetrics {
    pub default_rate_without_model: f64,
    pub predicted_default_rate: f64,
    pub good_customer_capture_rate: f64,
    pub approval_rate: f64,
    pub rejection_rate: f64,
}

impl ApprovalMetrics {
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("default_rate_without_model", self.default_rate_without_model),
            ("predicted_default_rate", self.predicted_default_rate),
            ("good_customer_capture_rate", self.good_customer_capture_rate),
            ("approval_rate", self.approval_rate),
            ("rejection_rate", self.rejection_rate),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "framing", rename_all = "snake_case")]
pub enum FramedMetrics {
    FraudAlert(MetricsResult),
    Approval(ApprovalMetrics),
}

impl FramedMetrics {
    pub fn framing(&self) -> MetricFraming {
        match self {
            FramedMetrics::FraudAlert(_) => MetricFraming::FraudAlert,
            FramedMetrics::Approval(_) => MetricFraming::Approval,
        }
    }

    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        match self {
            FramedMetrics::FraudAlert(m) => m.entries(),
            FramedMetrics::Approval(m) => m.entries(),
        }
    }
}

pub fn compute_metrics(matrix: &ConfusionMatrix) -> MetricsResult {
    let tp = matrix.true_positives;
    let fp = matrix.false_positives;
    let fn_ = matrix.false_negatives;
    let total = matrix.total();

    let precision = percent(tp, matrix.alerts());
    let recall = percent(tp, matrix.actual_fraud());
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    let alert_rate = round2(percent(matrix.alerts(), total));
    let non_alert_rate = if total == 0 {
        0.0
    } else {
        round2(100.0 - alert_rate)
    };

    MetricsResult {
        precision_of_alerts: round2(precision),
        recall_of_fraud: round2(recall),
        false_positive_rate: round2(percent(fp, matrix.actual_legitimate())),
        false_negative_rate: round2(percent(fn_, matrix.actual_fraud())),
        alert_rate,
        non_alert_rate,
        f1_score: round2(f1),
        accuracy: round2(percent(matrix.correct(), total)),
    }
}

pub fn compute_approval_metrics(matrix: &ConfusionMatrix) -> ApprovalMetrics {
    let tp = matrix.true_positives;
    let fp = matrix.false_positives;
    let total = matrix.total();

    let approval_rate = round2(percent(matrix.alerts(), total));
    let rejection_rate = if total == 0 {
        0.0
    } else {
        round2(100.0 - approval_rate)
    };

    ApprovalMetrics {
        default_rate_without_model: round2(percent(tp + fp, total)),
        predicted_default_rate: round2(percent(fp, matrix.actual_legitimate())),
        good_customer_capture_rate: round2(percent(tp, matrix.actual_fraud())),
        approval_rate,
        rejection_rate,
    }
}

pub fn compute_framed(matrix: &ConfusionMatrix, framing: MetricFraming) -> FramedMetrics {
    match framing {
        MetricFraming::FraudAlert => FramedMetrics::FraudAlert(compute_metrics(matrix)),
        MetricFraming::Approval => FramedMetrics::Approval(compute_approval_metrics(matrix)),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/calc/metrics.rs"]
mod tests;
