//! Per-session state for the analysis front-end.
//!
//! A fetched sequence is retained across interactions within one session,
//! and the options panel is a plain value validated before use. The store
//! is owned by the caller and passed explicitly into request handling —
//! there is no ambient global state.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use readframe_core::codon::GeneticCode;
use readframe_core::error::AnalysisError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown session: {0}")]
    UnknownSession(Uuid),
    #[error("minimum ORF length must be at least 1")]
    InvalidMinOrfLength,
    #[error(transparent)]
    Options(#[from] AnalysisError),
}

/// A sequence retrieved from the remote nucleotide database, cached for
/// the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedSequence {
    pub accession: String,
    pub content: String,
    pub fetched_at: DateTime<Utc>,
}

/// The options panel: genetic code, display toggles, ORF threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// NCBI translation table id.
    pub genetic_code_id: u8,
    /// Translate the three reverse frames as well.
    pub translate_reverse: bool,
    /// Truncate each frame's translation at its first stop codon.
    pub stop_at_first_stop: bool,
    /// Show the reverse complement of the input.
    pub show_reverse_complement: bool,
    /// Minimum ORF length in amino acids (inclusive).
    pub min_orf_length: usize,
    /// Run the protein property analysis on detected ORFs.
    pub show_protein_properties: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            genetic_code_id: 1,
            translate_reverse: true,
            stop_at_first_stop: false,
            show_reverse_complement: false,
            min_orf_length: 30,
            show_protein_properties: false,
        }
    }
}

impl AnalysisOptions {
    /// Resolve the selected genetic code. An unrecognized id fails fast.
    pub fn genetic_code(&self) -> Result<GeneticCode, AnalysisError> {
        GeneticCode::from_ncbi_id(self.genetic_code_id)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        self.genetic_code()?;
        if self.min_orf_length == 0 {
            return Err(SessionError::InvalidMinOrfLength);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub fetched: Option<FetchedSequence>,
    pub options: AnalysisOptions,
}

/// All live sessions, keyed by session id.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with default state and return its id.
    pub fn create_session(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, SessionState::default());
        id
    }

    pub fn get(&self, session: Uuid) -> Option<&SessionState> {
        self.sessions.get(&session)
    }

    pub fn options_mut(&mut self, session: Uuid) -> Option<&mut AnalysisOptions> {
        self.sessions.get_mut(&session).map(|s| &mut s.options)
    }

    /// Cache a fetched sequence on the session.
    pub fn store_fetched(
        &mut self,
        session: Uuid,
        accession: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<(), SessionError> {
        let state = self
            .sessions
            .get_mut(&session)
            .ok_or(SessionError::UnknownSession(session))?;
        state.fetched = Some(FetchedSequence {
            accession: accession.into(),
            content: content.into(),
            fetched_at: Utc::now(),
        });
        Ok(())
    }

    /// Drop the session's cached fetch, keeping its options.
    pub fn clear_fetched(&mut self, session: Uuid) -> Result<(), SessionError> {
        let state = self
            .sessions
            .get_mut(&session)
            .ok_or(SessionError::UnknownSession(session))?;
        state.fetched = None;
        Ok(())
    }

    /// Reset a session to default state.
    pub fn reset(&mut self, session: Uuid) -> Result<(), SessionError> {
        let state = self
            .sessions
            .get_mut(&session)
            .ok_or(SessionError::UnknownSession(session))?;
        *state = SessionState::default();
        Ok(())
    }

    /// Remove a session entirely, returning its final state.
    pub fn remove(&mut self, session: Uuid) -> Option<SessionState> {
        self.sessions.remove(&session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = AnalysisOptions::default();
        assert_eq!(options.genetic_code_id, 1);
        assert_eq!(options.min_orf_length, 30);
        assert!(options.translate_reverse);
        assert!(!options.stop_at_first_stop);
        assert_eq!(options.genetic_code(), Ok(GeneticCode::Standard));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_unknown_genetic_code_fails_fast() {
        let options = AnalysisOptions {
            genetic_code_id: 99,
            ..Default::default()
        };
        assert_eq!(
            options.genetic_code(),
            Err(AnalysisError::UnsupportedGeneticCode(99))
        );
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_zero_min_orf_length_rejected() {
        let options = AnalysisOptions {
            min_orf_length: 0,
            ..Default::default()
        };
        assert_eq!(options.validate(), Err(SessionError::InvalidMinOrfLength));
    }

    #[test]
    fn test_store_and_clear_fetched() {
        let mut store = SessionStore::new();
        let id = store.create_session();
        assert!(store.get(id).unwrap().fetched.is_none());

        store
            .store_fetched(id, "NM_000546", ">NM_000546\nATGC\n")
            .unwrap();
        let fetched = store.get(id).unwrap().fetched.as_ref().unwrap();
        assert_eq!(fetched.accession, "NM_000546");
        assert!(fetched.content.starts_with('>'));

        store.clear_fetched(id).unwrap();
        assert!(store.get(id).unwrap().fetched.is_none());
    }

    #[test]
    fn test_clear_keeps_options() {
        let mut store = SessionStore::new();
        let id = store.create_session();
        store.options_mut(id).unwrap().min_orf_length = 50;
        store.store_fetched(id, "X", "ATG").unwrap();
        store.clear_fetched(id).unwrap();
        assert_eq!(store.get(id).unwrap().options.min_orf_length, 50);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = SessionStore::new();
        let id = store.create_session();
        store.options_mut(id).unwrap().genetic_code_id = 11;
        store.store_fetched(id, "X", "ATG").unwrap();

        store.reset(id).unwrap();
        let state = store.get(id).unwrap();
        assert!(state.fetched.is_none());
        assert_eq!(state.options, AnalysisOptions::default());
    }

    #[test]
    fn test_unknown_session_errors() {
        let mut store = SessionStore::new();
        let ghost = Uuid::new_v4();
        assert!(matches!(
            store.store_fetched(ghost, "X", "ATG"),
            Err(SessionError::UnknownSession(_))
        ));
        assert!(store.clear_fetched(ghost).is_err());
        assert!(store.reset(ghost).is_err());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut store = SessionStore::new();
        let a = store.create_session();
        let b = store.create_session();
        store.store_fetched(a, "A1", "ATG").unwrap();
        assert!(store.get(a).unwrap().fetched.is_some());
        assert!(store.get(b).unwrap().fetched.is_none());
        assert_eq!(store.len(), 2);

        store.remove(a).unwrap();
        assert_eq!(store.len(), 1);
    }
}
