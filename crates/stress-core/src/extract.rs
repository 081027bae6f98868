use log::{error, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ExtractError;

/// `Region=<name>; Role=<role>; Activation=<number>`
const LOG_PATTERN: &str = r"Region=(\w+); Role=([\w\s]+); Activation=([0-9.]+)";

static LOG_REGEX: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(LOG_PATTERN));

/// One matched log entry with its activation already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    pub name: String,
    pub role: String,
    pub activation: f64,
}

/// Extract every record in order of appearance.
///
/// Entries whose activation capture is not a number (e.g. `.` or `1.2.3`)
/// are skipped with a warning; the rest are still returned. Duplicate
/// region names are kept as separate records.
pub fn try_parse_brain_log(log_text: &str) -> Result<Vec<RegionRecord>, ExtractError> {
    let regex = (*LOG_REGEX)
        .as_ref()
        .map_err(|e| ExtractError::Pattern(e.to_string()))?;

    let mut matched = false;
    let mut records = Vec::new();
    for caps in regex.captures_iter(log_text) {
        matched = true;
        let name = &caps[1];
        let role = &caps[2];
        let raw = &caps[3];
        match raw.parse::<f64>() {
            Ok(activation) => records.push(RegionRecord {
                name: name.to_string(),
                role: role.to_string(),
                activation,
            }),
            Err(_) => {
                warn!(
                    "activation value '{}' is not valid for region {}; skipped",
                    raw, name
                );
            }
        }
    }

    if !matched {
        return Err(ExtractError::NoMatches);
    }
    Ok(records)
}

/// Lenient wrapper around [`try_parse_brain_log`]: failures are logged and
/// yield an empty list, which callers must treat as an invalid log.
pub fn parse_brain_log(log_text: &str) -> Vec<RegionRecord> {
    match try_parse_brain_log(log_text) {
        Ok(records) => records,
        Err(e) => {
            error!("parsing failed: {}", e);
            Vec::new()
        }
    }
}
