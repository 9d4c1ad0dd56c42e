use super::*;

#[test]
fn test_try_from_rows_layout() {
    let m = ConfusionMatrix::try_from_rows(&[vec![700.0, 50.0], vec![30.0, 220.0]]).unwrap();
    assert_eq!(m.true_negatives, 700);
    assert_eq!(m.false_positives, 50);
    assert_eq!(m.false_negatives, 30);
    assert_eq!(m.true_positives, 220);
    assert_eq!(m.total(), 1000);
    assert_eq!(m.alerts(), 270);
    assert_eq!(m.actual_fraud(), 250);
    assert_eq!(m.actual_legitimate(), 750);
    assert_eq!(m.correct(), 920);
    assert_eq!(m.rows(), [[700, 50], [30, 220]]);
}

#[test]
fn test_try_from_rows_rejects_wrong_shape() {
    let three_rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
    assert!(matches!(
        ConfusionMatrix::try_from_rows(&three_rows),
        Err(CalcError::InvalidMatrixShape(_))
    ));

    let ragged = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
    assert!(matches!(
        ConfusionMatrix::try_from_rows(&ragged),
        Err(CalcError::InvalidMatrixShape(_))
    ));

    assert!(ConfusionMatrix::try_from_rows(&[]).is_err());
}

#[test]
fn test_try_from_rows_rejects_bad_counts() {
    for bad in [-1.0, 2.5, f64::NAN, f64::INFINITY] {
        let rows = vec![vec![1.0, bad], vec![3.0, 4.0]];
        let err = ConfusionMatrix::try_from_rows(&rows).unwrap_err();
        match err {
            CalcError::InvalidMatrixShape(msg) => assert!(msg.contains("[0][1]")),
            other => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn test_zero_matrix_is_valid() {
    let m = ConfusionMatrix::try_from_rows(&[vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();
    assert_eq!(m, ConfusionMatrix::default());
    assert_eq!(m.total(), 0);
}

#[test]
fn test_serializes_as_nested_rows() {
    let m = ConfusionMatrix::new(1, 2, 3, 4);
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "[[1,2],[3,4]]");
}
