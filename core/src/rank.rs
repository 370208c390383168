use crate::combine::boolean_match;
use crate::index::InvertedIndex;
use crate::tokenizer::tokenize_opt;
use crate::{DocId, Record};
use serde::Serialize;
use std::collections::HashSet;

pub const MAX_RATING: f64 = 5.0;

/// Per-field include-term hit counts for one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchCounts {
    pub title: usize,
    pub ingredients: usize,
    pub both: usize,
}

/// A scored view over a caller-owned record.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRecord<'a> {
    /// Position in the collection the record was ranked from.
    pub doc_id: DocId,
    pub record: &'a Record,
    /// Rating after normalization; the record's own rating is left untouched.
    pub rating: f64,
    pub matches: MatchCounts,
    pub score: f64,
}

/// Ratings outside (0, 5], or missing, count as 0.
pub fn normalize_rating(rating: Option<f64>) -> f64 {
    match rating {
        Some(r) if r > 0.0 && r <= MAX_RATING => r,
        _ => 0.0,
    }
}

/// Records matching the boolean query, best rated first.
///
/// Equal ratings keep the order the records have in `records`.
pub fn rank_boolean<'a, S: AsRef<str>, T: AsRef<str>>(
    include: &[S],
    exclude: &[T],
    index: &InvertedIndex,
    records: &'a [Record],
) -> Vec<RankedRecord<'a>> {
    let mut ids = boolean_match(include, exclude, index);
    ids.sort_unstable();

    let mut ranked: Vec<RankedRecord<'a>> = ids
        .into_iter()
        .filter_map(|doc_id| {
            let record = records.get(doc_id as usize)?;
            let rating = normalize_rating(record.rating);
            Some(RankedRecord { doc_id, record, rating, matches: MatchCounts::default(), score: rating })
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

fn match_counts<S: AsRef<str>>(record: &Record, include: &[S]) -> MatchCounts {
    let title: HashSet<String> = tokenize_opt(record.title.as_deref()).into_iter().collect();
    let ingredients: HashSet<String> = tokenize_opt(record.ingredients.as_deref()).into_iter().collect();

    let mut counts = MatchCounts::default();
    for term in include.iter().map(|t| AsRef::<str>::as_ref(t)) {
        let in_title = title.contains(term);
        let in_ingredients = ingredients.contains(term);
        counts.title += in_title as usize;
        counts.ingredients += in_ingredients as usize;
        counts.both += (in_title && in_ingredients) as usize;
    }
    counts
}

/// rating/10 + title/2 + ingredients/4 + both
pub fn score(rating: f64, matches: MatchCounts) -> f64 {
    rating / 10.0 + matches.title as f64 / 2.0 + matches.ingredients as f64 / 4.0 + matches.both as f64
}

/// Rank pre-fetched candidates by rating plus title and ingredient term hits.
///
/// Candidates are not re-checked against the query. Equal scores keep input order.
pub fn rank_scored<'a, S: AsRef<str>>(candidates: &'a [Record], include: &[S]) -> Vec<RankedRecord<'a>> {
    let mut ranked: Vec<RankedRecord<'a>> = candidates
        .iter()
        .enumerate()
        .map(|(pos, record)| {
            let rating = normalize_rating(record.rating);
            let matches = match_counts(record, include);
            RankedRecord { doc_id: pos as DocId, record, rating, matches, score: score(rating, matches) }
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
