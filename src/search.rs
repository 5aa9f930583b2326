//! Fuzzy name resolution
//!
//! Ranks stored credential names against a free-text query using tiered
//! scoring. Used to silently resolve near-miss `get`/`update` targets and
//! to back the `search` command.

/// Minimum score at which `best` will act on a match without asking
pub const BEST_MATCH_THRESHOLD: u8 = 50;

/// A scored candidate name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The stored name exactly as it appears in the vault
    pub name: String,
    /// Tier score in `[0, 100]`
    pub score: u8,
}

/// Score a candidate name against a query
///
/// Case-insensitive. Tiers are checked in order and the first hit wins:
/// exact (100), prefix (90), substring (80), in-order subsequence (70),
/// word prefix after splitting on whitespace and hyphens (60), and for
/// queries of at least three characters an edit distance of at most 2 (50).
/// Anything else scores 0.
pub fn score(candidate: &str, query: &str) -> u8 {
    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();

    if query.is_empty() {
        return 0;
    }

    if candidate == query {
        return 100;
    }

    if candidate.starts_with(&query) {
        return 90;
    }

    if candidate.contains(&query) {
        return 80;
    }

    // Subsequence match, e.g. "gh" against "github"
    if is_subsequence(&query, &candidate) {
        return 70;
    }

    // Word boundary match
    let mut words = candidate.split(|c: char| c.is_whitespace() || c == '-');
    if words.any(|word| word.starts_with(&query)) {
        return 60;
    }

    // Edit distance for typos; short queries skip this tier entirely
    if query.chars().count() >= 3 && edit_distance(&candidate, &query) <= 2 {
        return 50;
    }

    0
}

/// Score every candidate, drop non-matches, and sort best-first
///
/// The sort is stable: candidates with equal scores keep their input order.
/// An empty query matches nothing.
pub fn rank(candidates: &[String], query: &str) -> Vec<Match> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<Match> = candidates
        .iter()
        .filter_map(|name| {
            let score = score(name, query);
            (score > 0).then(|| Match {
                name: name.clone(),
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// The single best match, if one is confident enough to act on
///
/// Returns the top-ranked match only when its score reaches
/// [`BEST_MATCH_THRESHOLD`]; otherwise the caller should fall back to
/// not-found handling instead of guessing.
pub fn best(candidates: &[String], query: &str) -> Option<Match> {
    rank(candidates, query)
        .into_iter()
        .next()
        .filter(|m| m.score >= BEST_MATCH_THRESHOLD)
}

/// Check whether the characters of `query` appear in `target` in order
fn is_subsequence(query: &str, target: &str) -> bool {
    let mut remaining = query.chars().peekable();
    for c in target.chars() {
        if remaining.peek() == Some(&c) {
            remaining.next();
        }
    }
    remaining.peek().is_none()
}

/// Classic Levenshtein distance over chars, full DP table
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a.len()][b.len()]
}
