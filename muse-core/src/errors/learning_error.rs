/// Learning-path errors.
#[derive(Debug, thiserror::Error)]
pub enum LearningError {
    #[error("invalid engagement metric {value}: must be finite and non-negative")]
    InvalidMetric { value: f64 },
}
