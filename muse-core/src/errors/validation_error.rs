/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid weight bounds: floor {floor} exceeds ceiling {ceiling}")]
    InvalidBounds { floor: f64, ceiling: f64 },

    #[error("invalid thresholds: low {low} exceeds high {high}")]
    InvalidThresholds { low: f64, high: f64 },

    #[error("step '{name}' must be non-negative, got {value}")]
    NegativeStep { name: String, value: f64 },

    #[error("malformed config: {reason}")]
    Malformed { reason: String },
}
