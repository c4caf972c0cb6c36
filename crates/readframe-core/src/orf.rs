use serde::{Deserialize, Serialize};

use crate::codon::{CodonTable, GeneticCode};
use crate::operations::{reverse_complement, translate};

/// An open reading frame: a run of codons starting at an initiator and
/// extending to (not including) the next stop codon or the end of the
/// translated frame.
///
/// `start`/`end` are 0-based nucleotide offsets, end-exclusive, in the
/// coordinate system of the strand the frame was scanned on. `end - start`
/// is always a multiple of 3 and equals `3 * length_aa`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orf {
    pub frame: i8,
    pub start: usize,
    pub end: usize,
    pub length_aa: usize,
    pub protein: String,
}

impl Orf {
    /// Display label for the frame, e.g. `+1` or `-2`.
    pub fn frame_label(&self) -> String {
        format!("{:+}", self.frame)
    }
}

/// Find all open reading frames on the three forward frames.
///
/// Each frame is truncated to a whole number of codons, translated with the
/// selected genetic code, and scanned for every run that begins with `'M'`
/// and continues up to the next stop symbol or the end of the frame. Every
/// occurrence of `'M'` opens its own candidate, so ORFs nested inside a
/// longer one (sharing its stop boundary) are all reported. Candidates
/// shorter than `min_length` amino acids are discarded; `min_length` is
/// inclusive.
///
/// Results are frame-major: all frame `+1` ORFs in left-to-right order,
/// then `+2`, then `+3`. A sequence shorter than one codon yields an empty
/// list, not an error.
pub fn find_orfs(sequence: &str, code: GeneticCode, min_length: usize) -> Vec<Orf> {
    let table = CodonTable::for_code(code);
    let upper = sequence.to_uppercase();
    let mut orfs = Vec::new();

    for offset in 0..3usize {
        if upper.len() < offset + 3 {
            continue;
        }
        scan_frame(&upper, offset, (offset + 1) as i8, &table, min_length, &mut orfs);
    }

    orfs
}

/// Scan all six frames: the three forward frames, then the three frames of
/// the reverse complement with labels remapped to `-1..-3`. Reverse-frame
/// offsets are reported in the reverse strand's own coordinate system.
pub fn find_orfs_six_frame(sequence: &str, code: GeneticCode, min_length: usize) -> Vec<Orf> {
    let mut orfs = find_orfs(sequence, code, min_length);

    let rc = reverse_complement(&sequence.to_uppercase());
    let mut reverse = find_orfs(&rc, code, min_length);
    for orf in &mut reverse {
        orf.frame = -orf.frame;
    }
    orfs.append(&mut reverse);

    orfs
}

fn scan_frame(
    seq: &str,
    offset: usize,
    frame: i8,
    table: &CodonTable,
    min_length: usize,
    orfs: &mut Vec<Orf>,
) {
    let protein = translate(&seq[offset..], table);
    let aa = protein.as_bytes();
    let n = aa.len();
    if n == 0 {
        return;
    }

    // next_stop[i] is the index of the first '*' at or after i (or n),
    // so each candidate is closed in O(1) and the frame scan stays linear.
    let mut next_stop = vec![n; n];
    let mut nearest = n;
    for i in (0..n).rev() {
        if aa[i] == b'*' {
            nearest = i;
        }
        next_stop[i] = nearest;
    }

    for i in 0..n {
        if aa[i] != b'M' {
            continue;
        }
        let j = next_stop[i];
        let length_aa = j - i;
        if length_aa < min_length {
            continue;
        }
        orfs.push(Orf {
            frame,
            start: offset + i * 3,
            end: offset + j * 3,
            length_aa,
            protein: protein[i..j].to_string(),
        });
    }
}
