//! URL builders and response parsing for NCBI Entrez E-utilities.
//!
//! No HTTP client lives in this crate — callers perform the request and
//! hand the response body back to [`parse_fetch_response`].

use readframe_core::Sequence;

use crate::{fasta, ParseError};

/// Percent-encode common special characters in a query string value.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    for b in input.bytes() {
        match b {
            b' ' => out.push_str("%20"),
            b'&' => out.push_str("%26"),
            b'=' => out.push_str("%3D"),
            b'+' => out.push_str("%2B"),
            b'#' => out.push_str("%23"),
            _ => out.push(b as char),
        }
    }
    out
}

/// URL builder for NCBI Entrez E-utilities.
pub struct EntrezUrl;

impl EntrezUrl {
    const BASE: &'static str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// Build an esearch URL.
    pub fn esearch(db: &str, term: &str, retmax: usize) -> String {
        format!(
            "{}/esearch.fcgi?db={}&term={}&retmax={}&retmode=xml",
            Self::BASE,
            percent_encode(db),
            percent_encode(term),
            retmax,
        )
    }

    /// Build an efetch URL with one or more IDs.
    pub fn efetch(db: &str, ids: &[&str], rettype: &str, retmode: &str) -> String {
        let id_list = ids.join(",");
        format!(
            "{}/efetch.fcgi?db={}&id={}&rettype={}&retmode={}",
            Self::BASE,
            percent_encode(db),
            percent_encode(&id_list),
            percent_encode(rettype),
            percent_encode(retmode),
        )
    }

    /// Build the efetch URL for a nucleotide accession in FASTA form, the
    /// request behind the front-end's "fetch by accession" field. The
    /// contact email is appended when provided, per the E-utilities usage
    /// guidelines.
    pub fn nucleotide_fasta(accession: &str, email: Option<&str>) -> Result<String, ParseError> {
        let accession = accession.trim();
        if accession.is_empty() {
            return Err(ParseError::EmptyAccession);
        }
        let mut url = Self::efetch("nucleotide", &[accession], "fasta", "text");
        if let Some(email) = email {
            url.push_str("&email=");
            url.push_str(&percent_encode(email));
        }
        Ok(url)
    }
}

/// Parse an efetch FASTA response body into sequence records.
pub fn parse_fetch_response(body: &str) -> Result<Vec<Sequence>, ParseError> {
    fasta::parse(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_efetch_url() {
        let url = EntrezUrl::efetch("nucleotide", &["NM_000546"], "fasta", "text");
        assert_eq!(
            url,
            "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi\
             ?db=nucleotide&id=NM_000546&rettype=fasta&retmode=text"
        );
    }

    #[test]
    fn test_efetch_multiple_ids() {
        let url = EntrezUrl::efetch("nucleotide", &["A1", "B2"], "fasta", "text");
        assert!(url.contains("id=A1,B2"));
    }

    #[test]
    fn test_esearch_url() {
        let url = EntrezUrl::esearch("nucleotide", "p53 human", 10);
        assert!(url.starts_with("https://eutils.ncbi.nlm.nih.gov"));
        assert!(url.contains("term=p53%20human"));
        assert!(url.contains("retmax=10"));
    }

    #[test]
    fn test_nucleotide_fasta_trims_accession() {
        let url = EntrezUrl::nucleotide_fasta("  NM_000546 ", None).unwrap();
        assert!(url.contains("id=NM_000546&"));
    }

    #[test]
    fn test_nucleotide_fasta_appends_email() {
        let url = EntrezUrl::nucleotide_fasta("NM_000546", Some("user@example.com")).unwrap();
        assert!(url.ends_with("&email=user@example.com"));
    }

    #[test]
    fn test_empty_accession_is_an_error() {
        assert!(matches!(
            EntrezUrl::nucleotide_fasta("   ", None),
            Err(ParseError::EmptyAccession)
        ));
    }

    #[test]
    fn test_percent_encode() {
        assert_eq!(percent_encode("a b&c=d"), "a%20b%26c%3Dd");
    }

    #[test]
    fn test_parse_fetch_response() {
        let body = ">NM_000546.6 Homo sapiens tumor protein p53\nATGGAGGAGCCGCAG\n";
        let records = parse_fetch_response(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "NM_000546.6");
        assert_eq!(records[0].sequence, "ATGGAGGAGCCGCAG");
    }
}
