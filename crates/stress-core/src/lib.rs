pub mod analyzer;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod region;
pub mod report;

#[cfg(test)]
mod tests;

pub use analyzer::{StressAnalyzer, StressSignals, StressStatus};
pub use error::{ExtractError, PipelineError, RegionError};
pub use extract::{parse_brain_log, try_parse_brain_log, RegionRecord};
pub use pipeline::{analyze_log, Analysis, OutOfRangePolicy};
pub use region::BrainRegion;
pub use report::{render_report, save_analysis_report, DEFAULT_REPORT_FILE};
