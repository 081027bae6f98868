use thiserror::Error;

/// Raised when a region's activation would leave the normalized range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    #[error("activation {value} for region {region} must be between 0.0 and 1.0")]
    ActivationOutOfRange { region: String, value: f64 },
}

#[derive(Debug, Clone, Error)]
pub enum ExtractError {
    #[error("log has no valid Region/Role/Activation entries or is empty")]
    NoMatches,
    #[error("extraction pattern unavailable: {0}")]
    Pattern(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("log contained no usable region entries")]
    InvalidLog,
    #[error("region rejected: {0}")]
    Region(#[from] RegionError),
}
