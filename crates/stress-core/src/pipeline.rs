use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::analyzer::{status_report, StressAnalyzer, StressStatus};
use crate::error::PipelineError;
use crate::extract::parse_brain_log;
use crate::region::BrainRegion;
use crate::report::save_analysis_report;

/// What to do with a record whose activation parses but lies outside
/// [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Fail the whole analysis.
    #[default]
    Reject,
    /// Drop the record and keep going.
    Skip,
}

/// Outcome of one analysis: the regions in input order and their status.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub regions: Vec<BrainRegion>,
    pub status: StressStatus,
}

impl Analysis {
    pub fn status_report(&self) -> String {
        status_report(self.status)
    }

    /// Region info lines, a blank line, then the status report line.
    pub fn display_text(&self) -> String {
        let lines: Vec<String> = self.regions.iter().map(BrainRegion::info).collect();
        format!("{}\n\n{}", lines.join("\n"), self.status_report())
    }

    pub fn save(&self, path: impl AsRef<Path>) {
        save_analysis_report(&self.regions, &self.status_report(), path);
    }
}

/// Extract, build regions and classify.
///
/// An empty extraction is [`PipelineError::InvalidLog`], never a
/// "no regions, not stressed" result.
pub fn analyze_log(log_text: &str, policy: OutOfRangePolicy) -> Result<Analysis, PipelineError> {
    let records = parse_brain_log(log_text);
    if records.is_empty() {
        return Err(PipelineError::InvalidLog);
    }

    let mut regions = Vec::with_capacity(records.len());
    for record in records {
        match BrainRegion::with_activation(record.name, record.role, record.activation) {
            Ok(region) => regions.push(region),
            Err(e) => match policy {
                OutOfRangePolicy::Reject => return Err(e.into()),
                OutOfRangePolicy::Skip => warn!("{}; skipped", e),
            },
        }
    }

    if regions.is_empty() {
        return Err(PipelineError::InvalidLog);
    }

    let status = StressAnalyzer::status(&regions);
    Ok(Analysis { regions, status })
}
