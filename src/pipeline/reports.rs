use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::report::ReportError;
use crate::report::SummaryData;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::tsv::render_impact_tsv;

pub const SUMMARY_FILE: &str = "summary.json";
pub const IMPACT_FILE: &str = "impact.tsv";
pub const REPORT_FILE: &str = "report.txt";

pub fn write_reports(summary: &SummaryData, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let json = render_summary_json(summary)?;
    write_text(&out_dir.join(SUMMARY_FILE), &json)?;

    write_text(&out_dir.join(IMPACT_FILE), &render_impact_tsv(summary))?;

    write_text(&out_dir.join(REPORT_FILE), &render_report_text(summary))?;

    info!("reports written to {}", out_dir.display());
    Ok(())
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

/// Commit of the checkout at `repo_root` (the run's working directory),
/// recorded next to the results. Not the commit the tool was built from.
pub fn read_git_hash(repo_root: &Path) -> Option<String> {
    let head = repo_root.join(".git/HEAD");
    let content = fs::read_to_string(head).ok()?;
    if let Some(ref_line) = content.strip_prefix("ref: ") {
        let ref_path = repo_root.join(".git").join(ref_line.trim());
        return fs::read_to_string(ref_path)
            .ok()
            .map(|s| s.trim().to_string());
    }
    Some(content.trim().to_string())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/reports.rs"]
mod tests;
