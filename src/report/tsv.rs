use crate::report::{SummaryData, format_f64_2};

pub fn render_impact_tsv(data: &SummaryData) -> String {
    let mut out = String::from("scenario\tlabel\tvalue\n");
    for row in data.impact.rows() {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            row.scenario.key(),
            row.label,
            format_f64_2(row.value)
        ));
    }
    out.push_str(&format!(
        "net\tNet impact\t{}\n",
        format_f64_2(data.net_impact)
    ));
    out
}
