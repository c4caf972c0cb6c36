pub mod detect;
pub mod export;
pub mod fasta;
pub mod fetch;
pub mod input;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Empty accession id")]
    EmptyAccession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Fasta,
    Plain,
    Unknown,
}
