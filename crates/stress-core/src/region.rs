use std::fmt;

use crate::error::RegionError;

/// A brain region with a normalized activation level.
///
/// The activation is only reachable through [`BrainRegion::set_activation`],
/// which enforces the closed interval [0.0, 1.0].
#[derive(Debug, Clone, PartialEq)]
pub struct BrainRegion {
    name: String,
    role: String,
    activation: f64,
}

impl BrainRegion {
    pub const MIN_ACTIVATION: f64 = 0.0;
    pub const MAX_ACTIVATION: f64 = 1.0;

    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            activation: 0.0,
        }
    }

    /// Build a region and apply the validating setter in one step.
    pub fn with_activation(
        name: impl Into<String>,
        role: impl Into<String>,
        value: f64,
    ) -> Result<Self, RegionError> {
        let mut region = Self::new(name, role);
        region.set_activation(value)?;
        Ok(region)
    }

    pub fn set_activation(&mut self, value: f64) -> Result<(), RegionError> {
        // NaN fails the range check as well.
        if !(Self::MIN_ACTIVATION..=Self::MAX_ACTIVATION).contains(&value) {
            return Err(RegionError::ActivationOutOfRange {
                region: self.name.clone(),
                value,
            });
        }
        self.activation = value;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn activation(&self) -> f64 {
        self.activation
    }

    /// One-line summary, e.g. `Amygdala (Fear Center): 0.85`.
    pub fn info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BrainRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {:.2}", self.name, self.role, self.activation)
    }
}
