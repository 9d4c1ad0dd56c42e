use serde::Serialize;
use thiserror::Error;

use crate::calc::impact::{ImpactResult, RoiResult};
use crate::calc::metrics::{ApprovalMetrics, MetricsResult};
use crate::model::{BusinessParameters, ConfusionMatrix, MetricFraming};

pub mod json;
pub mod text;
pub mod tsv;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
    pub git_hash: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub source: String,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_accuracy: Option<f64>,
}

/// Default rate before and after the model, in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DefaultRateComparison {
    pub without_model: f64,
    pub with_model: f64,
    pub reduction_points: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub confusion_matrix: ConfusionMatrix,
    pub parameters: BusinessParameters,
    pub framings: Vec<MetricFraming>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud_alert: Option<MetricsResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval: Option<ApprovalMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_rates: Option<DefaultRateComparison>,
    pub impact: ImpactResult,
    pub net_impact: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi: Option<RoiResult>,
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_pct(v: f64) -> String {
    format!("{:.2}%", v)
}

/// Two decimals with thousands separators, e.g. `-50,000.00`.
pub fn format_money(v: f64) -> String {
    let raw = format!("{:.2}", v.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, &d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(d as char);
    }
    let negative = v < 0.0 && raw.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
