//! Protein physicochemical properties.
//!
//! Computes the metrics the analyzer page surfaces from a validated amino
//! acid sequence: molecular weight, isoelectric point and charge curve,
//! GRAVY, aromaticity, instability index, secondary-structure fractions,
//! residue composition, and a sliding-window hydropathy profile.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// The 20 standard amino acids in index order.
pub const AMINO_ACIDS: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

/// Map an amino acid byte to its index 0-19. None for non-standard residues.
fn aa_index(aa: u8) -> Option<usize> {
    match aa {
        b'A' => Some(0),
        b'C' => Some(1),
        b'D' => Some(2),
        b'E' => Some(3),
        b'F' => Some(4),
        b'G' => Some(5),
        b'H' => Some(6),
        b'I' => Some(7),
        b'K' => Some(8),
        b'L' => Some(9),
        b'M' => Some(10),
        b'N' => Some(11),
        b'P' => Some(12),
        b'Q' => Some(13),
        b'R' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'V' => Some(17),
        b'W' => Some(18),
        b'Y' => Some(19),
        _ => None,
    }
}

/// Kyte-Doolittle (1982) hydropathy values, indexed by `aa_index`.
const KYTE_DOOLITTLE: [f64; 20] = [
    1.8,  // A
    2.5,  // C
    -3.5, // D
    -3.5, // E
    2.8,  // F
    -0.4, // G
    -3.2, // H
    4.5,  // I
    -3.9, // K
    3.8,  // L
    1.9,  // M
    -3.5, // N
    -1.6, // P
    -3.5, // Q
    -4.5, // R
    -0.8, // S
    -0.7, // T
    4.2,  // V
    -0.9, // W
    -1.3, // Y
];

/// Average residue masses of the free amino acids, indexed by `aa_index`.
const RESIDUE_WEIGHTS: [f64; 20] = [
    89.09,  // A
    121.16, // C
    133.10, // D
    147.13, // E
    165.19, // F
    75.03,  // G
    155.16, // H
    131.17, // I
    146.19, // K
    131.17, // L
    149.21, // M
    132.12, // N
    115.13, // P
    146.15, // Q
    174.20, // R
    105.09, // S
    119.12, // T
    117.15, // V
    204.23, // W
    181.19, // Y
];

const WATER: f64 = 18.015;

// pKa values (EMBOSS)
const PKA_NTERM: f64 = 9.69;
const PKA_CTERM: f64 = 2.34;
const PKA_D: f64 = 3.65;
const PKA_E: f64 = 4.25;
const PKA_C: f64 = 8.18;
const PKA_Y: f64 = 10.07;
const PKA_H: f64 = 6.00;
const PKA_K: f64 = 10.53;
const PKA_R: f64 = 12.48;

/// Guruprasad (1990) dipeptide instability weight values, indexed
/// `[first][second]` by `aa_index`.
const DIWV: [[f64; 20]; 20] = [
    // A
    [1.0, 44.94, -7.49, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, 1.0, 1.0, 1.0, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    // C
    [1.0, 1.0, 20.26, 1.0, 1.0, 1.0, 33.60, 1.0, 1.0, 20.26, 33.60, 1.0, 20.26, -6.54, 1.0, 1.0, 33.60, -6.54, 24.68, 1.0],
    // D
    [1.0, 1.0, 1.0, 1.0, -6.54, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, 1.0, 1.0, 1.0, -6.54, 20.26, -14.03, 1.0, 1.0, 1.0],
    // E
    [1.0, 44.94, 20.26, 33.60, 1.0, 1.0, -6.54, 20.26, 1.0, 1.0, 1.0, 1.0, 20.26, 20.26, 1.0, 20.26, 1.0, 1.0, -14.03, 1.0],
    // F
    [1.0, 1.0, 13.34, 1.0, 1.0, 1.0, 1.0, 1.0, -14.03, 1.0, 1.0, 1.0, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 33.60],
    // G
    [-7.49, 1.0, 1.0, -6.54, 1.0, 13.34, 1.0, -7.49, -7.49, 1.0, 1.0, -7.49, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, 13.34, -7.49],
    // H
    [1.0, 1.0, 1.0, 1.0, -9.37, -9.37, 1.0, 44.94, 24.68, 1.0, 1.0, 24.68, -1.88, 1.0, 1.0, 1.0, -6.54, 1.0, -1.88, 44.94],
    // I
    [1.0, 1.0, 1.0, 44.94, 1.0, 1.0, 13.34, 1.0, -7.49, 20.26, 1.0, 1.0, -1.88, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0],
    // K
    [1.0, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, -7.49, 1.0, -7.49, 33.60, 1.0, -6.54, 24.64, 33.60, 1.0, 1.0, -7.49, 1.0, 1.0],
    // L
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, 1.0, 20.26, 33.60, 20.26, 1.0, 1.0, 1.0, 24.68, 1.0],
    // M
    [13.34, 1.0, 1.0, 1.0, 1.0, 1.0, 58.28, 1.0, 1.0, 1.0, -1.88, 1.0, 44.94, -6.54, -6.54, 44.94, -1.88, 1.0, 1.0, 24.68],
    // N
    [1.0, -1.88, 1.0, 1.0, -14.03, -14.03, 1.0, 44.94, 24.68, 1.0, 1.0, 1.0, -1.88, -6.54, 1.0, 1.0, -7.49, 1.0, -9.37, 1.0],
    // P
    [20.26, -6.54, -6.54, 18.38, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, -6.54, 1.0, 20.26, 20.26, -6.54, 20.26, 1.0, 20.26, -1.88, 1.0],
    // Q
    [1.0, -6.54, 20.26, 20.26, -6.54, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 20.26, 20.26, 1.0, 44.94, 1.0, -6.54, 1.0, -6.54],
    // R
    [1.0, 1.0, 1.0, 1.0, 1.0, -7.49, 20.26, 1.0, 1.0, 1.0, 1.0, 13.34, 20.26, 20.26, 58.28, 44.94, 1.0, 1.0, 58.28, -6.54],
    // S
    [1.0, 33.60, 1.0, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 44.94, 20.26, 20.26, 20.26, 1.0, 1.0, 1.0, 1.0],
    // T
    [1.0, 1.0, 1.0, 20.26, 13.34, -7.49, 1.0, 1.0, 1.0, 1.0, 1.0, -14.03, 1.0, -6.54, 1.0, 1.0, 1.0, 1.0, -14.03, 1.0],
    // V
    [1.0, 1.0, -14.03, 1.0, 1.0, -7.49, 1.0, 1.0, -1.88, 1.0, 1.0, 1.0, 20.26, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, -6.54],
    // W
    [-14.03, 1.0, 1.0, 1.0, 1.0, -9.37, 24.68, 1.0, 1.0, 13.34, 24.68, 13.34, 1.0, 1.0, 1.0, 1.0, -14.03, -7.49, 1.0, 1.0],
    // Y
    [24.68, 1.0, 24.68, -6.54, 1.0, -7.49, 13.34, 1.0, 1.0, 1.0, 44.94, 1.0, 13.34, 1.0, -15.91, 1.0, -7.49, 1.0, -9.37, 13.34],
];

// Residue sets behind the secondary-structure fraction estimate
const HELIX_RESIDUES: &[u8] = b"VIYFWL";
const TURN_RESIDUES: &[u8] = b"NPGS";
const SHEET_RESIDUES: &[u8] = b"EMAL";

// Display groups used by the analyzer's classification chart
const HYDROPHOBIC_RESIDUES: &[u8] = b"AILMFWV";
const POLAR_RESIDUES: &[u8] = b"STNQY";
const POSITIVE_RESIDUES: &[u8] = b"KRH";
const NEGATIVE_RESIDUES: &[u8] = b"DE";

/// Residue counts and fractions over the 20 standard amino acids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AminoAcidComposition {
    /// Absolute count per amino acid, indexed like [`AMINO_ACIDS`].
    pub counts: [usize; 20],
    /// Fraction (0.0-1.0) per amino acid.
    pub fractions: [f64; 20],
    /// Sequence length.
    pub length: usize,
}

/// Residue counts for the analyzer's four display groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResidueClassification {
    pub hydrophobic: usize,
    pub polar: usize,
    pub positive: usize,
    pub negative: usize,
}

/// Remove stop symbols from a protein string, the usual preparation step
/// before property analysis of a translated ORF.
pub fn strip_stops(seq: &str) -> String {
    seq.replace('*', "")
}

/// A validated protein sequence with property accessors.
pub struct ProteinAnalysis {
    residues: Vec<u8>,
}

impl ProteinAnalysis {
    /// Validate and normalise a protein sequence. The input must be
    /// non-empty and contain only the 20 standard amino acids (stop
    /// symbols must be stripped by the caller first).
    pub fn new(seq: &str) -> Result<Self, AnalysisError> {
        if seq.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "empty protein sequence".to_string(),
            ));
        }
        let residues = seq
            .bytes()
            .map(|b| {
                let upper = b.to_ascii_uppercase();
                if aa_index(upper).is_some() {
                    Ok(upper)
                } else {
                    Err(AnalysisError::InvalidInput(format!(
                        "invalid amino acid '{}' in protein sequence",
                        b as char
                    )))
                }
            })
            .collect::<Result<Vec<u8>, AnalysisError>>()?;
        Ok(Self { residues })
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    /// Molecular weight in Daltons: sum of free-residue masses minus one
    /// water per peptide bond.
    pub fn molecular_weight(&self) -> f64 {
        let sum: f64 = self
            .residues
            .iter()
            .map(|&aa| RESIDUE_WEIGHTS[aa_index(aa).unwrap()])
            .sum();
        sum - (self.residues.len() as f64 - 1.0) * WATER
    }

    /// Net charge at the given pH via Henderson-Hasselbalch with EMBOSS
    /// pKa values.
    pub fn charge_at_ph(&self, ph: f64) -> f64 {
        let mut charge = 0.0;

        // N-terminus (positive)
        charge += 1.0 / (1.0 + 10_f64.powf(ph - PKA_NTERM));
        // C-terminus (negative)
        charge -= 1.0 / (1.0 + 10_f64.powf(PKA_CTERM - ph));

        for &aa in &self.residues {
            match aa {
                b'D' => charge -= 1.0 / (1.0 + 10_f64.powf(PKA_D - ph)),
                b'E' => charge -= 1.0 / (1.0 + 10_f64.powf(PKA_E - ph)),
                b'C' => charge -= 1.0 / (1.0 + 10_f64.powf(PKA_C - ph)),
                b'Y' => charge -= 1.0 / (1.0 + 10_f64.powf(PKA_Y - ph)),
                b'H' => charge += 1.0 / (1.0 + 10_f64.powf(ph - PKA_H)),
                b'K' => charge += 1.0 / (1.0 + 10_f64.powf(ph - PKA_K)),
                b'R' => charge += 1.0 / (1.0 + 10_f64.powf(ph - PKA_R)),
                _ => {}
            }
        }
        charge
    }

    /// Isoelectric point via bisection on the net-charge curve.
    pub fn isoelectric_point(&self) -> f64 {
        let mut lo = 0.0_f64;
        let mut hi = 14.0_f64;

        for _ in 0..100 {
            let mid = (lo + hi) / 2.0;
            let charge = self.charge_at_ph(mid);
            if charge.abs() < 0.001 {
                return mid;
            }
            if charge > 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (lo + hi) / 2.0
    }

    /// GRAVY: mean Kyte-Doolittle hydropathy over the whole sequence.
    pub fn gravy(&self) -> f64 {
        let sum: f64 = self
            .residues
            .iter()
            .map(|&aa| KYTE_DOOLITTLE[aa_index(aa).unwrap()])
            .sum();
        sum / self.residues.len() as f64
    }

    /// Fraction of aromatic residues (F, W, Y).
    pub fn aromaticity(&self) -> f64 {
        let aromatic = self
            .residues
            .iter()
            .filter(|&&aa| matches!(aa, b'F' | b'W' | b'Y'))
            .count();
        aromatic as f64 / self.residues.len() as f64
    }

    /// Guruprasad instability index: `10/L` times the sum of dipeptide
    /// instability weights. Values below 40 predict a stable protein.
    pub fn instability_index(&self) -> f64 {
        let n = self.residues.len();
        if n < 2 {
            return 0.0;
        }
        let sum: f64 = self
            .residues
            .windows(2)
            .map(|pair| DIWV[aa_index(pair[0]).unwrap()][aa_index(pair[1]).unwrap()])
            .sum();
        10.0 / n as f64 * sum
    }

    pub fn is_stable(&self) -> bool {
        self.instability_index() < 40.0
    }

    /// Fractions of residues that tend toward helix, turn, and sheet
    /// conformations. The sets overlap, so the fractions are independent
    /// estimates rather than a partition.
    pub fn secondary_structure_fraction(&self) -> (f64, f64, f64) {
        let n = self.residues.len() as f64;
        let in_set = |set: &[u8]| -> f64 {
            self.residues.iter().filter(|&&aa| set.contains(&aa)).count() as f64 / n
        };
        (
            in_set(HELIX_RESIDUES),
            in_set(TURN_RESIDUES),
            in_set(SHEET_RESIDUES),
        )
    }

    pub fn amino_acid_composition(&self) -> AminoAcidComposition {
        let mut counts = [0usize; 20];
        for &aa in &self.residues {
            counts[aa_index(aa).unwrap()] += 1;
        }
        let len = self.residues.len() as f64;
        let mut fractions = [0.0f64; 20];
        for i in 0..20 {
            fractions[i] = counts[i] as f64 / len;
        }
        AminoAcidComposition {
            counts,
            fractions,
            length: self.residues.len(),
        }
    }

    /// Sliding-window Kyte-Doolittle hydropathy profile. The window must
    /// be odd, at least 1, and no longer than the sequence.
    pub fn hydropathy_profile(&self, window: usize) -> Result<Vec<f64>, AnalysisError> {
        if window == 0 || window % 2 == 0 {
            return Err(AnalysisError::InvalidInput(
                "window size must be odd and >= 1".to_string(),
            ));
        }
        let n = self.residues.len();
        if window > n {
            return Err(AnalysisError::InvalidInput(format!(
                "window size {} exceeds sequence length {}",
                window, n
            )));
        }

        let values: Vec<f64> = self
            .residues
            .iter()
            .map(|&aa| KYTE_DOOLITTLE[aa_index(aa).unwrap()])
            .collect();

        let mut profile = Vec::with_capacity(n - window + 1);
        let mut sum: f64 = values[..window].iter().sum();
        profile.push(sum / window as f64);

        for i in 1..=(n - window) {
            sum += values[i + window - 1] - values[i - 1];
            profile.push(sum / window as f64);
        }

        Ok(profile)
    }

    /// Residue counts for the four display groups: hydrophobic (AILMFWV),
    /// polar (STNQY), positive (KRH), negative (DE).
    pub fn classification(&self) -> ResidueClassification {
        let count = |set: &[u8]| -> usize {
            self.residues.iter().filter(|&&aa| set.contains(&aa)).count()
        };
        ResidueClassification {
            hydrophobic: count(HYDROPHOBIC_RESIDUES),
            polar: count(POLAR_RESIDUES),
            positive: count(POSITIVE_RESIDUES),
            negative: count(NEGATIVE_RESIDUES),
        }
    }
}
