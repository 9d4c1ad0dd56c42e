use super::*;
use crate::model::ConfusionMatrix;

fn artifact() -> EvaluationArtifact {
    EvaluationArtifact {
        matrix: ConfusionMatrix::new(700, 50, 30, 220),
        accuracy: Some(0.92),
        source: "metrics.json".to_string(),
    }
}

fn tool() -> ToolMeta {
    ToolMeta {
        name: "kira-fraudimpact".to_string(),
        version: "0.0.0".to_string(),
        git_hash: None,
    }
}

#[test]
fn test_evaluate_both_framings() {
    let artifact = artifact();
    let params = BusinessParameters {
        project_cost: Some(80_000.0),
        ..BusinessParameters::default_v1()
    };
    let summary = run_evaluate(&EvaluateInputs {
        artifact: &artifact,
        params: &params,
        framings: &[MetricFraming::Approval, MetricFraming::FraudAlert],
        tool: tool(),
    })
    .unwrap();

    assert_eq!(
        summary.framings,
        vec![MetricFraming::FraudAlert, MetricFraming::Approval]
    );
    assert_eq!(summary.fraud_alert.unwrap().precision_of_alerts, 81.48);
    assert_eq!(summary.approval.unwrap().approval_rate, 27.0);

    let rates = summary.default_rates.unwrap();
    assert_eq!(rates.without_model, 27.0);
    assert_eq!(rates.with_model, 6.67);
    assert_eq!(rates.reduction_points, 20.33);

    assert_eq!(summary.input.total, 1000);
    assert_eq!(summary.input.reported_accuracy, Some(0.92));
    assert!((summary.net_impact - 364_300.0).abs() < 1e-6);
    let roi = summary.roi.unwrap();
    assert!((roi.net_return - 140_000.0).abs() < 1e-6);
    assert!((roi.roi_percent - 175.0).abs() < 1e-6);
}

#[test]
fn test_evaluate_single_framing_without_roi() {
    let artifact = artifact();
    let params = BusinessParameters::default_v1();
    let summary = run_evaluate(&EvaluateInputs {
        artifact: &artifact,
        params: &params,
        framings: &[MetricFraming::FraudAlert],
        tool: tool(),
    })
    .unwrap();

    assert!(summary.fraud_alert.is_some());
    assert!(summary.approval.is_none());
    assert!(summary.default_rates.is_none());
    assert!(summary.roi.is_none());
}

#[test]
fn test_evaluate_rejects_zero_project_cost() {
    let artifact = artifact();
    let params = BusinessParameters {
        project_cost: Some(0.0),
        ..BusinessParameters::default_v1()
    };
    let err = run_evaluate(&EvaluateInputs {
        artifact: &artifact,
        params: &params,
        framings: &[MetricFraming::FraudAlert],
        tool: tool(),
    })
    .unwrap_err();
    assert!(matches!(
        err,
        CalcError::InvalidBusinessParameter { name: "project_cost", .. }
    ));
}

#[test]
fn test_evaluate_empty_matrix() {
    let artifact = EvaluationArtifact {
        matrix: ConfusionMatrix::default(),
        accuracy: None,
        source: "inline counts".to_string(),
    };
    let params = BusinessParameters::default_v1();
    let summary = run_evaluate(&EvaluateInputs {
        artifact: &artifact,
        params: &params,
        framings: &[MetricFraming::FraudAlert, MetricFraming::Approval],
        tool: tool(),
    })
    .unwrap();

    assert_eq!(summary.fraud_alert.unwrap().non_alert_rate, 0.0);
    assert_eq!(summary.approval.unwrap().rejection_rate, 0.0);
    assert_eq!(summary.net_impact, 0.0);
}

#[test]
fn test_evaluate_rejects_overflowing_impact() {
    let artifact = artifact();
    let params = BusinessParameters {
        avg_value: f64::MAX / 2.0,
        ..BusinessParameters::default_v1()
    };
    let err = run_evaluate(&EvaluateInputs {
        artifact: &artifact,
        params: &params,
        framings: &[MetricFraming::FraudAlert],
        tool: tool(),
    })
    .unwrap_err();
    assert!(matches!(err, CalcError::NonFiniteResult { .. }));
}
