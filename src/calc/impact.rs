use serde::Serialize;

use crate::calc::{CalcError, check_result, require_finite, require_positive};
use crate::model::ConfusionMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    GainGoodCustomers,
    LossApprovedFraud,
    LossRejectedGoodCustomers,
    SavingsRejectedFraud,
}

impl Scenario {
    pub fn key(self) -> &'static str {
        match self {
            Scenario::GainGoodCustomers => "gain_good_customers",
            Scenario::LossApprovedFraud => "loss_approved_fraud",
            Scenario::LossRejectedGoodCustomers => "loss_rejected_good_customers",
            Scenario::SavingsRejectedFraud => "savings_rejected_fraud",
        }
    }

    /// Position in [`scenario_order`].
    pub fn index(self) -> usize {
        match self {
            Scenario::GainGoodCustomers => 0,
            Scenario::LossApprovedFraud => 1,
            Scenario::LossRejectedGoodCustomers => 2,
            Scenario::SavingsRejectedFraud => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scenario::GainGoodCustomers => "Gain from good customers",
            Scenario::LossApprovedFraud => "Loss from approved fraud",
            Scenario::LossRejectedGoodCustomers => "Loss from rejected good customers",
            Scenario::SavingsRejectedFraud => "Savings from rejected fraud",
        }
    }
}

pub fn scenario_order() -> &'static [Scenario] {
    &[
        Scenario::GainGoodCustomers,
        Scenario::LossApprovedFraud,
        Scenario::LossRejectedGoodCustomers,
        Scenario::SavingsRejectedFraud,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactRow {
    pub scenario: Scenario,
    pub label: &'static str,
    pub value: f64,
}

/// Four signed scenario values in [`scenario_order`]; losses are negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ImpactResult {
    rows: [ImpactRow; 4],
}

impl ImpactResult {
    pub fn rows(&self) -> &[ImpactRow] {
        &self.rows
    }

    pub fn value(&self, scenario: Scenario) -> f64 {
        self.rows[scenario.index()].value
    }

    pub fn savings_fraud_rejected(&self) -> f64 {
        self.value(Scenario::SavingsRejectedFraud)
    }

    /// Sum of all rows in table order.
    pub fn net_impact(&self) -> f64 {
        self.rows.iter().map(|r| r.value).sum()
    }

    pub fn roi(&self, project_cost: f64) -> Result<RoiResult, CalcError> {
        compute_roi(self.savings_fraud_rejected(), project_cost)
    }
}

pub fn compute_financial_impact(
    matrix: &ConfusionMatrix,
    avg_value: f64,
    interest_rate: f64,
) -> Result<ImpactResult, CalcError> {
    require_positive("avg_value", avg_value)?;
    require_finite("interest_rate", interest_rate)?;

    let tn = matrix.true_negatives as f64;
    let fp = matrix.false_positives as f64;
    let fn_ = matrix.false_negatives as f64;
    let tp = matrix.true_positives as f64;

    let gain_good = tn * avg_value * interest_rate;
    let loss_fraud_approved = fp * avg_value;
    let loss_good_rejected = fn_ * avg_value * interest_rate;
    let savings_fraud_rejected = tp * avg_value;

    let values = [
        gain_good,
        negate(loss_fraud_approved),
        negate(loss_good_rejected),
        savings_fraud_rejected,
    ];
    let order = scenario_order();
    for (scenario, &value) in order.iter().zip(values.iter()) {
        check_result(scenario.key(), value)?;
    }
    let rows = std::array::from_fn(|i| ImpactRow {
        scenario: order[i],
        label: order[i].label(),
        value: values[i],
    });
    let impact = ImpactResult { rows };
    check_result("net_impact", impact.net_impact())?;
    Ok(impact)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiResult {
    pub project_cost: f64,
    pub net_return: f64,
    pub roi_percent: f64,
}

pub fn compute_roi(savings_fraud_rejected: f64, project_cost: f64) -> Result<RoiResult, CalcError> {
    require_positive("project_cost", project_cost)?;
    require_finite("savings_fraud_rejected", savings_fraud_rejected)?;
    let net_return = check_result("net_return", savings_fraud_rejected - project_cost)?;
    let roi_percent = check_result("roi_percent", net_return / project_cost * 100.0)?;
    Ok(RoiResult {
        project_cost,
        net_return,
        roi_percent,
    })
}

// Keeps zero losses as +0.0 so reports never print "-0.00".
fn negate(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { -x }
}

#[cfg(test)]
#[path = "../../tests/src_inline/calc/impact.rs"]
mod tests;
