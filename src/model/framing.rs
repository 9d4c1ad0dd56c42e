use serde::Serialize;

/// Which business question a metric set answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFraming {
    /// Quality of fraud alerts: precision, recall, error rates.
    FraudAlert,
    /// Loan approval view: default rates, capture and approval rates.
    Approval,
}

impl MetricFraming {
    pub fn name(self) -> &'static str {
        match self {
            MetricFraming::FraudAlert => "fraud_alert",
            MetricFraming::Approval => "approval",
        }
    }
}

pub fn framing_order() -> &'static [MetricFraming] {
    &[MetricFraming::FraudAlert, MetricFraming::Approval]
}
