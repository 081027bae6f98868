use std::collections::HashMap;
use std::fmt;

use crate::region::BrainRegion;

pub const AMYGDALA: &str = "Amygdala";
pub const PREFRONTAL_CORTEX: &str = "PrefrontalCortex";
pub const HIPPOCAMPUS: &str = "Hippocampus";

/// Amygdala counts as active strictly above this level.
pub const AMYGDALA_ACTIVE_ABOVE: f64 = 0.7;
/// Prefrontal cortex counts as low strictly below this level.
pub const PREFRONTAL_LOW_BELOW: f64 = 0.4;
/// Hippocampus counts as low strictly below this level.
pub const HIPPOCAMPUS_LOW_BELOW: f64 = 0.5;

// Missing readings never produce a stress signal.
const AMYGDALA_DEFAULT: f64 = 0.0;
const PREFRONTAL_DEFAULT: f64 = 1.0;
const HIPPOCAMPUS_DEFAULT: f64 = 1.0;

const STATUS_REPORT_PREFIX: &str = "Status Deteksi Stres: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressStatus {
    Stressed,
    Normal,
}

impl StressStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StressStatus::Stressed => "STRESSED",
            StressStatus::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for StressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three threshold checks the rule is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressSignals {
    pub amygdala_active: bool,
    pub prefrontal_low: bool,
    pub hippocampus_low: bool,
}

impl StressSignals {
    /// Amygdala high AND (prefrontal low OR hippocampus low).
    pub fn is_stressed(&self) -> bool {
        self.amygdala_active && (self.prefrontal_low || self.hippocampus_low)
    }
}

/// Stateless stress classifier over a snapshot of regions.
#[derive(Debug, Clone, Copy)]
pub struct StressAnalyzer;

impl StressAnalyzer {
    pub fn signals(regions: &[BrainRegion]) -> StressSignals {
        // Later entries overwrite earlier ones with the same name.
        let activations: HashMap<&str, f64> = regions
            .iter()
            .map(|r| (r.name(), r.activation()))
            .collect();

        let amygdala = activations.get(AMYGDALA).copied().unwrap_or(AMYGDALA_DEFAULT);
        let prefrontal = activations
            .get(PREFRONTAL_CORTEX)
            .copied()
            .unwrap_or(PREFRONTAL_DEFAULT);
        let hippocampus = activations
            .get(HIPPOCAMPUS)
            .copied()
            .unwrap_or(HIPPOCAMPUS_DEFAULT);

        StressSignals {
            amygdala_active: amygdala > AMYGDALA_ACTIVE_ABOVE,
            prefrontal_low: prefrontal < PREFRONTAL_LOW_BELOW,
            hippocampus_low: hippocampus < HIPPOCAMPUS_LOW_BELOW,
        }
    }

    pub fn is_stressed(regions: &[BrainRegion]) -> bool {
        Self::signals(regions).is_stressed()
    }

    pub fn status(regions: &[BrainRegion]) -> StressStatus {
        if Self::is_stressed(regions) {
            StressStatus::Stressed
        } else {
            StressStatus::Normal
        }
    }

    /// Status report line, e.g. `Status Deteksi Stres: NORMAL`.
    pub fn report(regions: &[BrainRegion]) -> String {
        status_report(Self::status(regions))
    }
}

pub fn status_report(status: StressStatus) -> String {
    format!("{}{}", STATUS_REPORT_PREFIX, status)
}
