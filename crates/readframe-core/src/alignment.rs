use serde::{Deserialize, Serialize};

/// Scoring parameters for pairwise alignment with affine gap penalties.
/// A gap of length `L` costs `gap_open + (L - 1) * gap_extend`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringParams {
    /// Score awarded for a matching pair.
    pub match_score: i32,
    /// Penalty for a mismatching pair (should be negative or zero).
    pub mismatch_score: i32,
    /// Penalty for opening a new gap (should be negative).
    pub gap_open: i32,
    /// Penalty for extending an existing gap (should be negative).
    pub gap_extend: i32,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            match_score: 2,
            mismatch_score: -3,
            gap_open: -5,
            gap_extend: -2,
        }
    }
}

impl ScoringParams {
    /// Identity scheme: reward matches, ignore mismatches, charge every
    /// gapped column one point.
    pub fn identity() -> Self {
        Self {
            match_score: 1,
            mismatch_score: 0,
            gap_open: -1,
            gap_extend: -1,
        }
    }

    fn score_pair(&self, a: u8, b: u8) -> i32 {
        if a.to_ascii_uppercase() == b.to_ascii_uppercase() {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

/// The alignment strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    /// End-to-end alignment (Needleman-Wunsch).
    Global,
    /// Best-scoring local region (Smith-Waterman).
    Local,
}

/// Result of a pairwise alignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentResult {
    /// Alignment score.
    pub score: i32,
    /// Start position in the query (0-based, inclusive).
    pub query_start: usize,
    /// End position in the query (0-based, exclusive).
    pub query_end: usize,
    /// Start position in the target (0-based, inclusive).
    pub target_start: usize,
    /// End position in the target (0-based, exclusive).
    pub target_end: usize,
    /// Number of matching columns.
    pub matches: usize,
    /// Number of mismatching columns.
    pub mismatches: usize,
    /// Number of gapped columns.
    pub gaps: usize,
    /// Total alignment length (matches + mismatches + gaps).
    pub alignment_length: usize,
    /// Query with `-` inserted for gaps.
    pub aligned_query: String,
    /// Target with `-` inserted for gaps.
    pub aligned_target: String,
}

impl AlignmentResult {
    /// Percent identity: fraction of aligned columns that are matches.
    pub fn percent_identity(&self) -> f64 {
        if self.alignment_length == 0 {
            return 0.0;
        }
        self.matches as f64 / self.alignment_length as f64 * 100.0
    }

    /// Query coverage: fraction of the query consumed by the alignment.
    pub fn query_coverage(&self, query_len: usize) -> f64 {
        if query_len == 0 {
            return 0.0;
        }
        (self.query_end - self.query_start) as f64 / query_len as f64 * 100.0
    }
}

/// Traceback state: which of the three Gotoh matrices a column came from.
#[derive(Clone, Copy, PartialEq)]
enum TraceState {
    /// Match/mismatch matrix.
    H,
    /// Gap in the query (consuming target).
    E,
    /// Gap in the target (consuming query).
    F,
}

/// Accumulates traceback columns (emitted right to left).
struct Traceback {
    aligned_query: Vec<u8>,
    aligned_target: Vec<u8>,
    matches: usize,
    mismatches: usize,
    gaps: usize,
}

impl Traceback {
    fn new() -> Self {
        Self {
            aligned_query: Vec::new(),
            aligned_target: Vec::new(),
            matches: 0,
            mismatches: 0,
            gaps: 0,
        }
    }

    fn push_pair(&mut self, q: u8, t: u8) {
        self.aligned_query.push(q);
        self.aligned_target.push(t);
        if q.to_ascii_uppercase() == t.to_ascii_uppercase() {
            self.matches += 1;
        } else {
            self.mismatches += 1;
        }
    }

    fn push_gap_in_query(&mut self, t: u8) {
        self.aligned_query.push(b'-');
        self.aligned_target.push(t);
        self.gaps += 1;
    }

    fn push_gap_in_target(&mut self, q: u8) {
        self.aligned_query.push(q);
        self.aligned_target.push(b'-');
        self.gaps += 1;
    }

    fn finish(
        mut self,
        score: i32,
        query_start: usize,
        query_end: usize,
        target_start: usize,
        target_end: usize,
    ) -> AlignmentResult {
        self.aligned_query.reverse();
        self.aligned_target.reverse();
        let alignment_length = self.matches + self.mismatches + self.gaps;
        AlignmentResult {
            score,
            query_start,
            query_end,
            target_start,
            target_end,
            matches: self.matches,
            mismatches: self.mismatches,
            gaps: self.gaps,
            alignment_length,
            aligned_query: String::from_utf8_lossy(&self.aligned_query).into_owned(),
            aligned_target: String::from_utf8_lossy(&self.aligned_target).into_owned(),
        }
    }
}

/// Align two sequences, dispatching on the requested mode.
///
/// Works for DNA and protein strings alike; comparison is case-insensitive
/// identity. Returns `None` when either input is empty, or when a local
/// alignment finds no positively scoring region.
pub fn align(
    query: &[u8],
    target: &[u8],
    mode: AlignmentMode,
    params: &ScoringParams,
) -> Option<AlignmentResult> {
    match mode {
        AlignmentMode::Global => needleman_wunsch_global(query, target, params),
        AlignmentMode::Local => smith_waterman_local(query, target, params),
    }
}

/// Perform global (Needleman-Wunsch) alignment with affine gap penalties.
///
/// Three-matrix Gotoh formulation:
///   H[i][j] = best score ending with a match/mismatch at (i, j)
///   E[i][j] = best score ending with a gap in the query (target consumed)
///   F[i][j] = best score ending with a gap in the target (query consumed)
pub fn needleman_wunsch_global(
    query: &[u8],
    target: &[u8],
    params: &ScoringParams,
) -> Option<AlignmentResult> {
    let m = query.len();
    let n = target.len();
    if m == 0 || n == 0 {
        return None;
    }

    let rows = m + 1;
    let cols = n + 1;
    let neg_inf = i32::MIN / 2;

    let mut h = vec![neg_inf; rows * cols];
    let mut e = vec![neg_inf; rows * cols];
    let mut f = vec![neg_inf; rows * cols];
    let idx = |i: usize, j: usize| -> usize { i * cols + j };

    h[idx(0, 0)] = 0;
    for i in 1..rows {
        h[idx(i, 0)] = params.gap_open + (i as i32 - 1) * params.gap_extend;
        f[idx(i, 0)] = h[idx(i, 0)];
    }
    for j in 1..cols {
        h[idx(0, j)] = params.gap_open + (j as i32 - 1) * params.gap_extend;
        e[idx(0, j)] = h[idx(0, j)];
    }

    for i in 1..rows {
        for j in 1..cols {
            e[idx(i, j)] =
                (h[idx(i, j - 1)] + params.gap_open).max(e[idx(i, j - 1)] + params.gap_extend);
            f[idx(i, j)] =
                (h[idx(i - 1, j)] + params.gap_open).max(f[idx(i - 1, j)] + params.gap_extend);

            let diag = h[idx(i - 1, j - 1)] + params.score_pair(query[i - 1], target[j - 1]);
            h[idx(i, j)] = diag.max(e[idx(i, j)]).max(f[idx(i, j)]);
        }
    }

    // Traceback from (m, n) to (0, 0)
    let mut tb = Traceback::new();
    let mut i = m;
    let mut j = n;
    let mut state = TraceState::H;

    while i > 0 || j > 0 {
        match state {
            TraceState::H => {
                if i > 0 && j > 0 {
                    let diag =
                        h[idx(i - 1, j - 1)] + params.score_pair(query[i - 1], target[j - 1]);
                    if h[idx(i, j)] == diag {
                        tb.push_pair(query[i - 1], target[j - 1]);
                        i -= 1;
                        j -= 1;
                    } else if h[idx(i, j)] == e[idx(i, j)] {
                        state = TraceState::E;
                    } else {
                        state = TraceState::F;
                    }
                } else if j > 0 {
                    state = TraceState::E;
                } else {
                    state = TraceState::F;
                }
            }
            TraceState::E => {
                tb.push_gap_in_query(target[j - 1]);
                if e[idx(i, j)] == h[idx(i, j - 1)] + params.gap_open {
                    state = TraceState::H;
                }
                j -= 1;
            }
            TraceState::F => {
                tb.push_gap_in_target(query[i - 1]);
                if f[idx(i, j)] == h[idx(i - 1, j)] + params.gap_open {
                    state = TraceState::H;
                }
                i -= 1;
            }
        }
    }

    Some(tb.finish(h[idx(m, n)], 0, m, 0, n))
}

/// Perform local (Smith-Waterman) alignment with affine gap penalties.
///
/// Same three-matrix recurrence as the global aligner, but H is clamped at
/// zero and the traceback starts from the best-scoring cell and stops at
/// the first zero. Returns `None` when no region scores above zero.
pub fn smith_waterman_local(
    query: &[u8],
    target: &[u8],
    params: &ScoringParams,
) -> Option<AlignmentResult> {
    let m = query.len();
    let n = target.len();
    if m == 0 || n == 0 {
        return None;
    }

    let rows = m + 1;
    let cols = n + 1;
    let neg_inf = i32::MIN / 2;

    let mut h = vec![0i32; rows * cols];
    let mut e = vec![neg_inf; rows * cols];
    let mut f = vec![neg_inf; rows * cols];
    let idx = |i: usize, j: usize| -> usize { i * cols + j };

    let mut best = 0i32;
    let mut best_i = 0usize;
    let mut best_j = 0usize;

    for i in 1..rows {
        for j in 1..cols {
            e[idx(i, j)] =
                (h[idx(i, j - 1)] + params.gap_open).max(e[idx(i, j - 1)] + params.gap_extend);
            f[idx(i, j)] =
                (h[idx(i - 1, j)] + params.gap_open).max(f[idx(i - 1, j)] + params.gap_extend);

            let diag = h[idx(i - 1, j - 1)] + params.score_pair(query[i - 1], target[j - 1]);
            let val = diag.max(e[idx(i, j)]).max(f[idx(i, j)]).max(0);
            h[idx(i, j)] = val;

            if val > best {
                best = val;
                best_i = i;
                best_j = j;
            }
        }
    }

    if best == 0 {
        return None;
    }

    // Traceback from the maximum until H reaches zero
    let mut tb = Traceback::new();
    let mut i = best_i;
    let mut j = best_j;
    let mut state = TraceState::H;

    loop {
        match state {
            TraceState::H => {
                if i == 0 || j == 0 || h[idx(i, j)] == 0 {
                    break;
                }
                let diag = h[idx(i - 1, j - 1)] + params.score_pair(query[i - 1], target[j - 1]);
                if h[idx(i, j)] == diag {
                    tb.push_pair(query[i - 1], target[j - 1]);
                    i -= 1;
                    j -= 1;
                } else if h[idx(i, j)] == e[idx(i, j)] {
                    state = TraceState::E;
                } else {
                    state = TraceState::F;
                }
            }
            TraceState::E => {
                tb.push_gap_in_query(target[j - 1]);
                if e[idx(i, j)] == h[idx(i, j - 1)] + params.gap_open {
                    state = TraceState::H;
                }
                j -= 1;
            }
            TraceState::F => {
                tb.push_gap_in_target(query[i - 1]);
                if f[idx(i, j)] == h[idx(i - 1, j)] + params.gap_open {
                    state = TraceState::H;
                }
                i -= 1;
            }
        }
    }

    Some(tb.finish(best, i, best_i, j, best_j))
}
