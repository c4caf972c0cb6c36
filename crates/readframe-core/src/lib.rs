pub mod alignment;
pub mod codon;
pub mod error;
pub mod operations;
pub mod orf;
pub mod protein;
pub mod sequence;

pub use error::AnalysisError;
pub use sequence::*;
