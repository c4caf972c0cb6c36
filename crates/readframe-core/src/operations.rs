use serde::{Deserialize, Serialize};

use crate::codon::CodonTable;

/// Complement a single DNA base
pub fn complement_base(base: char) -> char {
    match base.to_ascii_uppercase() {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        'R' => 'Y',
        'Y' => 'R',
        'S' => 'S',
        'W' => 'W',
        'K' => 'M',
        'M' => 'K',
        'B' => 'V',
        'V' => 'B',
        'D' => 'H',
        'H' => 'D',
        'N' => 'N',
        other => other,
    }
}

/// Reverse complement of a DNA sequence
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement_base).collect()
}

/// Translate a DNA sequence to amino acids using the given codon table.
/// An incomplete trailing codon is discarded.
pub fn translate(seq: &str, table: &CodonTable) -> String {
    let bases: Vec<char> = seq.to_uppercase().chars().collect();
    let mut protein = String::with_capacity(bases.len() / 3);

    for chunk in bases.chunks(3) {
        if chunk.len() == 3 {
            let codon: String = chunk.iter().collect();
            protein.push(table.translate_codon(&codon));
        }
    }

    protein
}

/// Translate up to (not including) the first stop codon.
pub fn translate_to_stop(seq: &str, table: &CodonTable) -> String {
    let full = translate(seq, table);
    match full.find('*') {
        Some(pos) => full[..pos].to_string(),
        None => full,
    }
}

/// Calculate GC content as a fraction (0.0 to 1.0)
pub fn gc_content(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc_count = seq
        .chars()
        .filter(|c| matches!(c.to_ascii_uppercase(), 'G' | 'C'))
        .count();
    gc_count as f64 / seq.len() as f64
}

/// Translation of a single reading frame. Frame codes are `+1..+3` for the
/// forward strand and `-1..-3` for the reverse complement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameTranslation {
    pub frame: i8,
    pub protein: String,
}

impl FrameTranslation {
    pub fn label(&self) -> String {
        format!("Frame {:+}", self.frame)
    }
}

/// Translate all reading frames of a sequence. Forward frames are always
/// produced; reverse frames (from the reverse complement) are appended when
/// `include_reverse` is set. With `stop_at_first`, each frame's translation
/// is truncated at its first stop codon.
pub fn six_frame_translation(
    seq: &str,
    table: &CodonTable,
    stop_at_first: bool,
    include_reverse: bool,
) -> Vec<FrameTranslation> {
    let upper = seq.to_uppercase();
    let mut frames = Vec::with_capacity(if include_reverse { 6 } else { 3 });

    for offset in 0..3usize {
        frames.push(FrameTranslation {
            frame: (offset + 1) as i8,
            protein: frame_protein(&upper, offset, table, stop_at_first),
        });
    }

    if include_reverse {
        let rc = reverse_complement(&upper);
        for offset in 0..3usize {
            frames.push(FrameTranslation {
                frame: -((offset + 1) as i8),
                protein: frame_protein(&rc, offset, table, stop_at_first),
            });
        }
    }

    frames
}

fn frame_protein(seq: &str, offset: usize, table: &CodonTable, stop_at_first: bool) -> String {
    if seq.len() <= offset {
        return String::new();
    }
    let sub = &seq[offset..];
    if stop_at_first {
        translate_to_stop(sub, table)
    } else {
        translate(sub, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG";

    #[test]
    fn test_complement_base() {
        assert_eq!(complement_base('A'), 'T');
        assert_eq!(complement_base('T'), 'A');
        assert_eq!(complement_base('G'), 'C');
        assert_eq!(complement_base('C'), 'G');
        assert_eq!(complement_base('N'), 'N');
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement("ATCGATCG"), "CGATCGAT");
        assert_eq!(reverse_complement("AAAAAA"), "TTTTTT");
        assert_eq!(reverse_complement(""), "");
    }

    #[test]
    fn test_translate() {
        let table = CodonTable::standard();
        assert_eq!(translate("ATGAAATTT", &table), "MKF");
        assert_eq!(translate("ATGTAA", &table), "M*");
        assert_eq!(translate("AT", &table), ""); // incomplete codon
        assert_eq!(translate("ATGAA", &table), "M"); // trailing pair discarded
    }

    #[test]
    fn test_translate_ambiguous_codon() {
        let table = CodonTable::standard();
        assert_eq!(translate("ATGANA", &table), "MX");
    }

    #[test]
    fn test_translate_to_stop() {
        let table = CodonTable::standard();
        assert_eq!(translate_to_stop("ATGAAATAGGGG", &table), "MK");
        assert_eq!(translate_to_stop("ATGAAA", &table), "MK");
        assert_eq!(translate_to_stop("TAAATG", &table), "");
    }

    #[test]
    fn test_gc_content() {
        assert!((gc_content("ATCG") - 0.5).abs() < f64::EPSILON);
        assert!((gc_content("GGCC") - 1.0).abs() < f64::EPSILON);
        assert!((gc_content("AATT") - 0.0).abs() < f64::EPSILON);
        assert!((gc_content("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_six_frame_forward_only() {
        let table = CodonTable::standard();
        let frames = six_frame_translation(SAMPLE, &table, false, false);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].frame, 1);
        assert_eq!(frames[0].protein, "MAIVMGR*KGAR*");
        assert_eq!(frames[1].protein, "WPL*WAAERVPD");
        assert_eq!(frames[2].protein, "GHCNGPLKGCPI");
    }

    #[test]
    fn test_six_frame_with_reverse() {
        let table = CodonTable::standard();
        let frames = six_frame_translation(SAMPLE, &table, false, true);
        assert_eq!(frames.len(), 6);
        assert_eq!(frames[3].frame, -1);
        assert_eq!(frames[3].protein, "LSGTLSAAHYNGH");
        assert_eq!(frames[4].protein, "YRAPFQRPITMA");
        assert_eq!(frames[5].protein, "IGHPFSGPLQWP");
    }

    #[test]
    fn test_six_frame_stop_at_first() {
        let table = CodonTable::standard();
        let frames = six_frame_translation(SAMPLE, &table, true, false);
        assert_eq!(frames[0].protein, "MAIVMGR");
        assert_eq!(frames[1].protein, "WPL");
    }

    #[test]
    fn test_frame_labels() {
        let ft = FrameTranslation {
            frame: 2,
            protein: String::new(),
        };
        assert_eq!(ft.label(), "Frame +2");
        let rt = FrameTranslation {
            frame: -3,
            protein: String::new(),
        };
        assert_eq!(rt.label(), "Frame -3");
    }

    #[test]
    fn test_six_frame_short_input() {
        let table = CodonTable::standard();
        let frames = six_frame_translation("AT", &table, false, true);
        assert_eq!(frames.len(), 6);
        assert!(frames.iter().all(|f| f.protein.is_empty()));
    }
}
