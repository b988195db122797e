//! Fuzzy "did you mean" suggestion ranking.
//!
//! Two strategies. Paths rank by plain edit distance inside a prefix
//! bucket (the whole catalog when the bucket is empty), keeping only
//! near misses. Identifiers rank by a composite score: an exact prefix
//! match dominates, a shared leading verb from the fixed vocabulary and
//! tokenized-word overlap refine, and edit-distance similarity
//! contributes only above its floor — short hook names are one
//! substitution away from each other far too often for raw distance to
//! rank them alone.

use hooklint_catalog::{AssetCatalog, HookCatalog};
use hooklint_common::limits::{
    IDENT_SIMILARITY_FLOOR, PATH_SUGGESTION_MAX_DISTANCE,
};
use hooklint_common::text::{normalize_asset_path, split_identifier_words};

/// Verb-like identifier prefixes that mark intent.
const VERB_PREFIXES: &[&str] = &["is", "get", "set", "has", "can", "should", "will", "on"];

/// Classic unit-cost Levenshtein distance, two-row rolling table.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Ranks catalog paths against an invalid path: prefix bucket first,
/// whole catalog as fallback, edit distance ascending, near misses only.
pub fn rank_paths(assets: &AssetCatalog, query: &str, k: usize) -> Vec<String> {
    let normalized = normalize_asset_path(query);
    match assets.bucket(&normalized) {
        Some(bucket) => rank_by_distance(&normalized, bucket.iter().map(|s| s.as_str()), k),
        None => rank_by_distance(&normalized, assets.paths(), k),
    }
}

/// Ranks catalog stems against an invalid short name.
pub fn rank_stems(assets: &AssetCatalog, query: &str, k: usize) -> Vec<String> {
    rank_by_distance(&normalize_asset_path(query), assets.stems(), k)
}

fn rank_by_distance<'a>(
    normalized_query: &str,
    pool: impl Iterator<Item = &'a str>,
    k: usize,
) -> Vec<String> {
    let mut scored: Vec<(usize, &str)> = pool
        .map(|candidate| (levenshtein(normalized_query, candidate), candidate))
        .filter(|&(distance, _)| distance <= PATH_SUGGESTION_MAX_DISTANCE)
        .collect();
    scored.sort_unstable_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(k)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

/// Ranks identifier candidates by composite score, descending, ties
/// broken by candidate name. Zero-scoring candidates are dropped.
pub fn rank_identifiers(query: &str, pool: &[String], k: usize) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = pool
        .iter()
        .map(|candidate| (similarity_score(query, candidate), candidate.as_str()))
        .filter(|&(score, _)| score > 0.0)
        .collect();
    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.1.cmp(b.1))
    });
    scored
        .into_iter()
        .take(k)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

/// Hook names similar to a method name, for "no matching hook" findings.
pub fn suggest_hook_names(catalog: &HookCatalog, name: &str, k: usize) -> Vec<String> {
    let pool: Vec<String> = catalog.names().iter().map(|n| n.to_string()).collect();
    rank_identifiers(name, &pool, k)
}

fn similarity_score(query: &str, candidate: &str) -> f64 {
    if candidate == query {
        // The caller is looking for alternatives, not the query itself.
        return 0.0;
    }
    let query_lower = query.to_lowercase();
    let candidate_lower = candidate.to_lowercase();

    let mut score = 0.0;
    if candidate_lower.starts_with(&query_lower) || query_lower.starts_with(&candidate_lower) {
        score += 10.0;
    }

    let query_words = split_identifier_words(query);
    let candidate_words = split_identifier_words(candidate);
    if let (Some(qv), Some(cv)) = (query_words.first(), candidate_words.first()) {
        if qv == cv && VERB_PREFIXES.contains(&qv.as_str()) {
            score += 2.0;
        }
    }

    if !query_words.is_empty() {
        let overlap = query_words
            .iter()
            .filter(|w| candidate_words.contains(w))
            .count();
        score += 4.0 * overlap as f64 / query_words.len() as f64;
    }

    let max_len = query.chars().count().max(candidate.chars().count());
    if max_len > 0 {
        let similarity = 1.0 - levenshtein(&query_lower, &candidate_lower) as f64 / max_len as f64;
        if similarity > IDENT_SIMILARITY_FLOOR {
            score += 3.0 * similarity;
        }
    }

    score
}

#[cfg(test)]
#[path = "tests/suggest_tests.rs"]
mod tests;
