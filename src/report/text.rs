use crate::calc::impact::RoiResult;
use crate::calc::metrics::{ApprovalMetrics, MetricsResult};
use crate::report::{DefaultRateComparison, SummaryData, format_money, format_pct};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Fraud Model Performance & Financial Impact Report\n");
    out.push_str("=================================================\n\n");

    let [[tn, fp], [fn_, tp]] = data.confusion_matrix.rows();
    out.push_str("1. Evaluation input\n");
    out.push_str(&format!("Source: {}\n", data.input.source));
    out.push_str(&format!(
        "Confusion matrix [[TN, FP], [FN, TP]]: [[{tn}, {fp}], [{fn_}, {tp}]]\n"
    ));
    out.push_str(&format!("Transactions evaluated: {}\n", data.input.total));
    let framings = data.framings.iter().map(|f| f.name()).collect::<Vec<_>>();
    out.push_str(&format!("Metric framings: {}\n", framings.join(", ")));
    if let Some(acc) = data.input.reported_accuracy {
        out.push_str(&format!("Reported accuracy: {}\n", format_pct(acc * 100.0)));
    }
    if data.input.total == 0 {
        out.push_str("Note: the matrix is empty; all rates are reported as 0.\n");
    }
    out.push('\n');

    let mut section = 2;
    if let Some(m) = &data.fraud_alert {
        out.push_str(&format!("{section}. Alert quality\n"));
        push_alert_quality(&mut out, m);
        section += 1;
    }
    if let Some(m) = &data.approval {
        out.push_str(&format!("{section}. Approval view\n"));
        push_approval(&mut out, m, data.default_rates.as_ref());
        section += 1;
    }

    out.push_str(&format!("{section}. Financial impact\n"));
    out.push_str(&format!(
        "Average transaction value: {}\nInterest rate: {}\n",
        format_money(data.parameters.avg_value),
        format_pct(data.parameters.interest_rate * 100.0)
    ));
    for row in data.impact.rows() {
        out.push_str(&format!("{}: {}\n", row.label, format_money(row.value)));
    }
    out.push_str(&format!(
        "Net impact: {}\n\n",
        format_money(data.net_impact)
    ));
    section += 1;

    out.push_str(&format!("{section}. Return on investment\n"));
    match &data.roi {
        Some(roi) => push_roi(&mut out, roi),
        None => out.push_str("Project cost not provided; ROI not computed.\n"),
    }

    out
}

fn push_alert_quality(out: &mut String, m: &MetricsResult) {
    out.push_str(&format!(
        "Precision of alerts: {}\n",
        format_pct(m.precision_of_alerts)
    ));
    out.push_str(&format!("Recall of fraud: {}\n", format_pct(m.recall_of_fraud)));
    out.push_str(&format!("F1 score: {}\n", format_pct(m.f1_score)));
    out.push_str(&format!(
        "False positive rate: {}\n",
        format_pct(m.false_positive_rate)
    ));
    out.push_str(&format!(
        "False negative rate: {}\n",
        format_pct(m.false_negative_rate)
    ));
    out.push_str(&format!(
        "Alert rate: {} (not alerted: {})\n",
        format_pct(m.alert_rate),
        format_pct(m.non_alert_rate)
    ));
    out.push_str(&format!("Accuracy: {}\n", format_pct(m.accuracy)));
    out.push_str(&format!("{}\n\n", alert_quality_statement(m)));
}

fn push_approval(out: &mut String, m: &ApprovalMetrics, rates: Option<&DefaultRateComparison>) {
    out.push_str(&format!(
        "Approval rate: {} (rejected: {})\n",
        format_pct(m.approval_rate),
        format_pct(m.rejection_rate)
    ));
    out.push_str(&format!(
        "Good customer capture rate: {}\n",
        format_pct(m.good_customer_capture_rate)
    ));
    if let Some(r) = rates {
        out.push_str(&format!(
            "Default rate without model: {}\nDefault rate with model: {}\n",
            format_pct(r.without_model),
            format_pct(r.with_model)
        ));
        out.push_str(&format!(
            "Conclusion: {}\n",
            default_rate_statement(r.reduction_points)
        ));
    }
    out.push('\n');
}

fn push_roi(out: &mut String, roi: &RoiResult) {
    out.push_str(&format!("Project cost: {}\n", format_money(roi.project_cost)));
    out.push_str(&format!("Net return: {}\n", format_money(roi.net_return)));
    out.push_str(&format!("ROI: {}\n", format_pct(roi.roi_percent)));
    let verdict = if roi.net_return > 0.0 {
        "the model pays for itself"
    } else if roi.net_return == 0.0 {
        "the model breaks even"
    } else {
        "savings do not cover the project cost"
    };
    out.push_str(&format!("Conclusion: {}\n", verdict));
}

fn alert_quality_statement(m: &MetricsResult) -> &'static str {
    if m.precision_of_alerts >= 80.0 && m.recall_of_fraud >= 80.0 {
        "Alerts are precise and catch most fraud."
    } else if m.recall_of_fraud >= 80.0 {
        "Most fraud is caught, at the cost of many false alerts."
    } else if m.precision_of_alerts >= 80.0 {
        "Alerts are precise but a large share of fraud is missed."
    } else {
        "Alert quality is low on both precision and recall."
    }
}

fn default_rate_statement(reduction_points: f64) -> &'static str {
    if reduction_points > 0.0 {
        "the model lowers the default rate"
    } else if reduction_points == 0.0 {
        "the model does not change the default rate"
    } else {
        "the model raises the default rate"
    }
}
