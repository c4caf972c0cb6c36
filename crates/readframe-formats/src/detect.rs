use crate::FileFormat;

/// Auto-detect input format from content
pub fn detect_format(content: &str) -> FileFormat {
    let trimmed = content.trim_start();

    if trimmed.starts_with('>') {
        FileFormat::Fasta
    } else if trimmed.is_empty() {
        FileFormat::Unknown
    } else {
        FileFormat::Plain
    }
}

/// Detect format from file extension
pub fn detect_format_from_extension(path: &str) -> FileFormat {
    let lower = path.to_lowercase();
    if lower.ends_with(".fa") || lower.ends_with(".fasta") || lower.ends_with(".fna") {
        FileFormat::Fasta
    } else if lower.ends_with(".txt") {
        FileFormat::Plain
    } else {
        FileFormat::Unknown
    }
}
