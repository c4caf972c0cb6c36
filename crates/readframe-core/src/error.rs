use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("unsupported genetic code: {0}")]
    UnsupportedGeneticCode(u8),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
