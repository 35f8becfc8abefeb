use crate::models::Movie;

/// Minimum similarity for a fuzzy match, on a 0..=1 scale.
const SIMILARITY_CUTOFF: f64 = 0.7;

/// A resolved title, either an exact (case-insensitive) hit or the closest
/// fuzzy match above the cutoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMatch {
    pub title: String,
    pub exact: bool,
}

/// Resolves a free-text query against the catalog titles.
///
/// Exact case-insensitive equality wins first, in catalog order. Otherwise
/// the single best-scoring title at or above the cutoff is reported as a
/// non-exact match; ties resolve to the earliest catalog entry. Returns
/// `None` when nothing comes close enough.
pub fn resolve(catalog: &[Movie], query: &str) -> Option<TitleMatch> {
    let query_lower = query.to_lowercase();

    if let Some(movie) = catalog
        .iter()
        .find(|movie| movie.title.to_lowercase() == query_lower)
    {
        return Some(TitleMatch {
            title: movie.title.clone(),
            exact: true,
        });
    }

    let mut best: Option<(&Movie, f64)> = None;
    for movie in catalog {
        let score = similarity(&query_lower, &movie.title.to_lowercase());
        if score >= SIMILARITY_CUTOFF && best.map_or(true, |(_, s)| score > s) {
            best = Some((movie, score));
        }
    }

    best.map(|(movie, _)| TitleMatch {
        title: movie.title.clone(),
        exact: false,
    })
}

/// Normalized sequence similarity: `2 * M / (len_a + len_b)` where `M` is
/// the total length of the matching blocks found by repeatedly taking the
/// longest common substring and recursing on the pieces to either side.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let matches = matching_len(&a, &b);
    2.0 * matches as f64 / (a.len() + b.len()) as f64
}

/// Total length of matching blocks between `a` and `b`.
fn matching_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Longest common substring, earliest occurrence on ties.
    let mut best_a = 0;
    let mut best_b = 0;
    let mut best_len = 0;
    let mut prev = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut row = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let run = prev[j] + 1;
                row[j + 1] = run;
                if run > best_len {
                    best_len = run;
                    best_a = i + 1 - run;
                    best_b = j + 1 - run;
                }
            }
        }
        prev = row;
    }

    if best_len == 0 {
        return 0;
    }

    best_len
        + matching_len(&a[..best_a], &b[..best_b])
        + matching_len(&a[best_a + best_len..], &b[best_b + best_len..])
}
