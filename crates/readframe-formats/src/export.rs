//! Result export formatting: FASTA-like blocks for ORFs and frame
//! translations, the displayed alignment block, and the protein report.

use readframe_core::alignment::AlignmentResult;
use readframe_core::operations::FrameTranslation;
use readframe_core::orf::Orf;
use readframe_core::protein::{AminoAcidComposition, ProteinAnalysis, AMINO_ACIDS};

/// Single-ORF FASTA block. `index` is 1-based and encodes the emission
/// order together with frame and nucleotide range in the header.
pub fn orf_fasta_record(index: usize, orf: &Orf) -> String {
    format!(
        ">ORF_{}_{}_pos_{}-{}\n{}",
        index,
        orf.frame_label(),
        orf.start,
        orf.end,
        orf.protein
    )
}

/// All ORFs as blank-line separated FASTA blocks, in emission order.
pub fn orfs_fasta(orfs: &[Orf]) -> String {
    let mut out = String::new();
    for (i, orf) in orfs.iter().enumerate() {
        out.push_str(&orf_fasta_record(i + 1, orf));
        out.push_str("\n\n");
    }
    out
}

/// All frame translations as FASTA blocks headed by their frame labels.
pub fn frames_fasta(frames: &[FrameTranslation]) -> String {
    let mut out = String::new();
    for frame in frames {
        out.push('>');
        out.push_str(&frame.label());
        out.push('\n');
        out.push_str(&frame.protein);
        out.push_str("\n\n");
    }
    out
}

/// Three-line alignment block with a midline (`|` match, `.` mismatch,
/// space for gaps) and a score trailer.
pub fn alignment_text(aln: &AlignmentResult) -> String {
    let midline: String = aln
        .aligned_query
        .bytes()
        .zip(aln.aligned_target.bytes())
        .map(|(q, t)| {
            if q == b'-' || t == b'-' {
                ' '
            } else if q.to_ascii_uppercase() == t.to_ascii_uppercase() {
                '|'
            } else {
                '.'
            }
        })
        .collect();

    format!(
        "{}\n{}\n{}\n  Score={}\n",
        aln.aligned_query, midline, aln.aligned_target, aln.score
    )
}

/// Plain-text protein properties report.
pub fn protein_report(analysis: &ProteinAnalysis) -> String {
    let len = analysis.len();
    let (helix, turn, sheet) = analysis.secondary_structure_fraction();
    let class = analysis.classification();

    let mut report = format!(
        "Protein Properties Report\n\
         --------------------------\n\
         Length: {}\n\
         Molecular Weight: {:.2} Da\n\
         Isoelectric Point: {:.2}\n\
         Instability Index: {:.2}\n\
         GRAVY: {:.3}\n\
         Aromaticity: {:.3}\n\
         \n\
         Secondary Structure:\n\
         Helix: {:.3}\n\
         Turn: {:.3}\n\
         Sheet: {:.3}\n\
         \n\
         Amino Acid Classification:\n",
        len,
        analysis.molecular_weight(),
        analysis.isoelectric_point(),
        analysis.instability_index(),
        analysis.gravy(),
        analysis.aromaticity(),
        helix,
        turn,
        sheet
    );

    for (group, count) in [
        ("Hydrophobic", class.hydrophobic),
        ("Polar", class.polar),
        ("Positive", class.positive),
        ("Negative", class.negative),
    ] {
        report.push_str(&format!(
            "{}: {} ({:.1}%)\n",
            group,
            count,
            count as f64 / len as f64 * 100.0
        ));
    }

    report
}

/// Amino acid composition as CSV: one row per standard residue.
pub fn composition_csv(comp: &AminoAcidComposition) -> String {
    let mut out = String::from("Amino Acid,Count,Frequency\n");
    for (i, &aa) in AMINO_ACIDS.iter().enumerate() {
        out.push_str(&format!(
            "{},{},{}\n",
            aa as char, comp.counts[i], comp.fractions[i]
        ));
    }
    out
}
