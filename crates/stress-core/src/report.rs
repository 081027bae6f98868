use std::fs;
use std::path::Path;

use log::{error, info};

use crate::region::BrainRegion;

pub const DEFAULT_REPORT_FILE: &str = "stress_analysis.txt";
pub const REPORT_HEADER: &str = "--- Laporan Aktivasi Otak ---";

/// Text layout of the persisted report: header, one line per region in
/// input order, a blank line, then the status report line.
pub fn render_report(regions: &[BrainRegion], status_report: &str) -> String {
    let mut out = String::new();
    out.push_str(REPORT_HEADER);
    out.push('\n');
    for region in regions {
        out.push_str(&region.info());
        out.push('\n');
    }
    out.push('\n');
    out.push_str(status_report);
    out.push('\n');
    out
}

/// Overwrite `path` with the rendered report.
///
/// Fire-and-forget: I/O failures are logged with the path and cause and
/// never reach the caller.
pub fn save_analysis_report(regions: &[BrainRegion], status_report: &str, path: impl AsRef<Path>) {
    let path = path.as_ref();
    match fs::write(path, render_report(regions, status_report)) {
        Ok(()) => info!("analysis report saved to '{}'", path.display()),
        Err(e) => error!("failed to save report to file '{}': {}", path.display(), e),
    }
}
