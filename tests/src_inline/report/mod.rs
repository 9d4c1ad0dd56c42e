use super::*;

#[test]
fn test_format_money() {
    assert_eq!(format_money(0.0), "0.00");
    assert_eq!(format_money(999.5), "999.50");
    assert_eq!(format_money(203_000.0), "203,000.00");
    assert_eq!(format_money(-50_000.0), "-50,000.00");
    assert_eq!(format_money(1_234_567.891), "1,234,567.89");
    assert_eq!(format_money(-0.001), "0.00");
}

#[test]
fn test_format_pct() {
    assert_eq!(format_pct(81.48), "81.48%");
    assert_eq!(format_pct(175.0), "175.00%");
    assert_eq!(format_f64_2(-8700.0), "-8700.00");
}
