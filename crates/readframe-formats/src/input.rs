//! Input extraction: pasted text or uploaded file content, FASTA or raw.

use readframe_core::sequence::{clean_dna, clean_protein};

use crate::{detect, fasta, FileFormat};

/// Extract a nucleotide sequence from user input. FASTA input contributes
/// its first record; anything else is treated as raw sequence text. The
/// result is cleaned to the `{A,C,G,T,N}` alphabet. Input that yields
/// nothing is not an error — the caller treats an empty string as
/// "no sequence provided".
pub fn extract_dna(text: &str) -> String {
    extract(text, clean_dna)
}

/// Extract a protein sequence from user input; cleaned to the 20 standard
/// amino acids plus `'*'`.
pub fn extract_protein(text: &str) -> String {
    extract(text, clean_protein)
}

fn extract(text: &str, clean: fn(&str) -> String) -> String {
    match detect::detect_format(text) {
        FileFormat::Fasta => match fasta::parse(text) {
            Ok(records) => clean(&records[0].sequence),
            Err(_) => String::new(),
        },
        FileFormat::Plain => clean(text),
        FileFormat::Unknown => String::new(),
    }
}
