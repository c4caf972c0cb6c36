use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sequence {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub sequence: String,
}

impl Sequence {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            sequence: sequence.into().to_uppercase(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

fn dna_filter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^ACGTN]").expect("literal pattern"))
}

fn protein_filter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^ACDEFGHIKLMNPQRSTVWY*]").expect("literal pattern"))
}

/// Clean pasted nucleotide input: uppercase, then drop everything outside
/// the `{A,C,G,T,N}` alphabet (whitespace and newlines included).
pub fn clean_dna(raw: &str) -> String {
    dna_filter()
        .replace_all(&raw.to_uppercase(), "")
        .into_owned()
}

/// Clean pasted protein input: uppercase, keep the 20 standard amino acids
/// and the stop symbol `'*'`.
pub fn clean_protein(raw: &str) -> String {
    protein_filter()
        .replace_all(&raw.to_uppercase(), "")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sequence() {
        let seq = Sequence::new("test", "atcgatcg");
        assert_eq!(seq.name, "test");
        assert_eq!(seq.sequence, "ATCGATCG");
        assert_eq!(seq.len(), 8);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_clean_dna() {
        assert_eq!(clean_dna("atg gcc\nta\r\nn"), "ATGGCCTAN");
        assert_eq!(clean_dna("ATG-CC..TT123"), "ATGCCTT");
        assert_eq!(clean_dna(""), "");
    }

    #[test]
    fn test_clean_dna_drops_protein_letters() {
        // E, F, etc. are amino-acid letters, not bases
        assert_eq!(clean_dna("EFATGQ"), "ATG");
    }

    #[test]
    fn test_clean_protein_keeps_stop_symbol() {
        assert_eq!(clean_protein("maivmgr*"), "MAIVMGR*");
        assert_eq!(clean_protein("MK V\nJ12"), "MKV");
    }
}
