use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// The genetic codes offered by the translation engine, keyed by their
/// NCBI translation table ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneticCode {
    Standard,
    VertebrateMitochondrial,
    YeastMitochondrial,
    Bacterial,
    AlternativeYeastNuclear,
}

impl GeneticCode {
    pub const ALL: [GeneticCode; 5] = [
        GeneticCode::Standard,
        GeneticCode::VertebrateMitochondrial,
        GeneticCode::YeastMitochondrial,
        GeneticCode::Bacterial,
        GeneticCode::AlternativeYeastNuclear,
    ];

    /// Resolve an NCBI translation table id. Unknown ids are a caller
    /// error, never a silent fallback to the standard code.
    pub fn from_ncbi_id(id: u8) -> Result<Self, AnalysisError> {
        match id {
            1 => Ok(GeneticCode::Standard),
            2 => Ok(GeneticCode::VertebrateMitochondrial),
            3 => Ok(GeneticCode::YeastMitochondrial),
            11 => Ok(GeneticCode::Bacterial),
            12 => Ok(GeneticCode::AlternativeYeastNuclear),
            other => Err(AnalysisError::UnsupportedGeneticCode(other)),
        }
    }

    pub fn ncbi_id(&self) -> u8 {
        match self {
            GeneticCode::Standard => 1,
            GeneticCode::VertebrateMitochondrial => 2,
            GeneticCode::YeastMitochondrial => 3,
            GeneticCode::Bacterial => 11,
            GeneticCode::AlternativeYeastNuclear => 12,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GeneticCode::Standard => "Standard",
            GeneticCode::VertebrateMitochondrial => "Vertebrate Mitochondrial",
            GeneticCode::YeastMitochondrial => "Yeast Mitochondrial",
            GeneticCode::Bacterial => "Bacterial",
            GeneticCode::AlternativeYeastNuclear => "Alternative Yeast Nuclear",
        }
    }
}

/// A codon-to-amino-acid translation table. Stop codons map to `'*'`.
pub struct CodonTable {
    pub name: String,
    pub id: u8,
    table: HashMap<String, char>,
}

impl CodonTable {
    /// Standard genetic code (NCBI table 1)
    pub fn standard() -> Self {
        let mut table = HashMap::new();
        let codons = [
            ("TTT", 'F'), ("TTC", 'F'), ("TTA", 'L'), ("TTG", 'L'),
            ("CTT", 'L'), ("CTC", 'L'), ("CTA", 'L'), ("CTG", 'L'),
            ("ATT", 'I'), ("ATC", 'I'), ("ATA", 'I'), ("ATG", 'M'),
            ("GTT", 'V'), ("GTC", 'V'), ("GTA", 'V'), ("GTG", 'V'),
            ("TCT", 'S'), ("TCC", 'S'), ("TCA", 'S'), ("TCG", 'S'),
            ("CCT", 'P'), ("CCC", 'P'), ("CCA", 'P'), ("CCG", 'P'),
            ("ACT", 'T'), ("ACC", 'T'), ("ACA", 'T'), ("ACG", 'T'),
            ("GCT", 'A'), ("GCC", 'A'), ("GCA", 'A'), ("GCG", 'A'),
            ("TAT", 'Y'), ("TAC", 'Y'), ("TAA", '*'), ("TAG", '*'),
            ("CAT", 'H'), ("CAC", 'H'), ("CAA", 'Q'), ("CAG", 'Q'),
            ("AAT", 'N'), ("AAC", 'N'), ("AAA", 'K'), ("AAG", 'K'),
            ("GAT", 'D'), ("GAC", 'D'), ("GAA", 'E'), ("GAG", 'E'),
            ("TGT", 'C'), ("TGC", 'C'), ("TGA", '*'), ("TGG", 'W'),
            ("CGT", 'R'), ("CGC", 'R'), ("CGA", 'R'), ("CGG", 'R'),
            ("AGT", 'S'), ("AGC", 'S'), ("AGA", 'R'), ("AGG", 'R'),
            ("GGT", 'G'), ("GGC", 'G'), ("GGA", 'G'), ("GGG", 'G'),
        ];

        for (codon, aa) in &codons {
            table.insert(codon.to_string(), *aa);
        }

        CodonTable {
            name: "Standard".to_string(),
            id: 1,
            table,
        }
    }

    /// Vertebrate mitochondrial code (NCBI table 2)
    pub fn vertebrate_mitochondrial() -> Self {
        let mut ct = Self::standard();
        ct.name = "Vertebrate Mitochondrial".to_string();
        ct.id = 2;
        ct.set("AGA", '*');
        ct.set("AGG", '*');
        ct.set("ATA", 'M');
        ct.set("TGA", 'W');
        ct
    }

    /// Yeast mitochondrial code (NCBI table 3)
    pub fn yeast_mitochondrial() -> Self {
        let mut ct = Self::standard();
        ct.name = "Yeast Mitochondrial".to_string();
        ct.id = 3;
        ct.set("ATA", 'M');
        ct.set("CTT", 'T');
        ct.set("CTC", 'T');
        ct.set("CTA", 'T');
        ct.set("CTG", 'T');
        ct.set("TGA", 'W');
        ct
    }

    /// Bacterial/archaeal code (NCBI table 11)
    pub fn bacterial() -> Self {
        // Same codon assignments as the standard code; the table differs
        // only in which codons can initiate, which translation ignores.
        let mut ct = Self::standard();
        ct.name = "Bacterial".to_string();
        ct.id = 11;
        ct
    }

    /// Alternative yeast nuclear code (NCBI table 12)
    pub fn alternative_yeast_nuclear() -> Self {
        let mut ct = Self::standard();
        ct.name = "Alternative Yeast Nuclear".to_string();
        ct.id = 12;
        ct.set("CTG", 'S');
        ct
    }

    pub fn for_code(code: GeneticCode) -> Self {
        match code {
            GeneticCode::Standard => Self::standard(),
            GeneticCode::VertebrateMitochondrial => Self::vertebrate_mitochondrial(),
            GeneticCode::YeastMitochondrial => Self::yeast_mitochondrial(),
            GeneticCode::Bacterial => Self::bacterial(),
            GeneticCode::AlternativeYeastNuclear => Self::alternative_yeast_nuclear(),
        }
    }

    fn set(&mut self, codon: &str, aa: char) {
        self.table.insert(codon.to_string(), aa);
    }

    /// Translate a single codon to an amino acid. Codons not in the table
    /// (including any containing an ambiguous base) yield `'X'`.
    pub fn translate_codon(&self, codon: &str) -> char {
        self.table
            .get(&codon.to_uppercase())
            .copied()
            .unwrap_or('X')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = CodonTable::standard();
        assert_eq!(table.translate_codon("ATG"), 'M');
        assert_eq!(table.translate_codon("TAA"), '*');
        assert_eq!(table.translate_codon("TGA"), '*');
        assert_eq!(table.translate_codon("GCT"), 'A');
        assert_eq!(table.translate_codon("atg"), 'M');
        assert_eq!(table.translate_codon("ANG"), 'X');
        assert_eq!(table.translate_codon("XXX"), 'X');
    }

    #[test]
    fn test_vertebrate_mitochondrial_differences() {
        let table = CodonTable::vertebrate_mitochondrial();
        assert_eq!(table.translate_codon("AGA"), '*');
        assert_eq!(table.translate_codon("AGG"), '*');
        assert_eq!(table.translate_codon("ATA"), 'M');
        assert_eq!(table.translate_codon("TGA"), 'W');
        // unchanged assignments
        assert_eq!(table.translate_codon("ATG"), 'M');
        assert_eq!(table.translate_codon("TAA"), '*');
    }

    #[test]
    fn test_yeast_mitochondrial_differences() {
        let table = CodonTable::yeast_mitochondrial();
        assert_eq!(table.translate_codon("CTT"), 'T');
        assert_eq!(table.translate_codon("CTG"), 'T');
        assert_eq!(table.translate_codon("ATA"), 'M');
        assert_eq!(table.translate_codon("TGA"), 'W');
    }

    #[test]
    fn test_alternative_yeast_nuclear_differences() {
        let table = CodonTable::alternative_yeast_nuclear();
        assert_eq!(table.translate_codon("CTG"), 'S');
        assert_eq!(table.translate_codon("CTT"), 'L');
    }

    #[test]
    fn test_bacterial_matches_standard_assignments() {
        let standard = CodonTable::standard();
        let bacterial = CodonTable::bacterial();
        for codon in ["ATG", "TGA", "CTG", "GGG", "AGA"] {
            assert_eq!(
                standard.translate_codon(codon),
                bacterial.translate_codon(codon)
            );
        }
        assert_eq!(bacterial.id, 11);
    }

    #[test]
    fn test_from_ncbi_id() {
        assert_eq!(GeneticCode::from_ncbi_id(1), Ok(GeneticCode::Standard));
        assert_eq!(GeneticCode::from_ncbi_id(11), Ok(GeneticCode::Bacterial));
        assert_eq!(
            GeneticCode::from_ncbi_id(7),
            Err(AnalysisError::UnsupportedGeneticCode(7))
        );
    }

    #[test]
    fn test_ids_round_trip() {
        for code in GeneticCode::ALL {
            assert_eq!(GeneticCode::from_ncbi_id(code.ncbi_id()), Ok(code));
            assert_eq!(CodonTable::for_code(code).id, code.ncbi_id());
        }
    }
}
