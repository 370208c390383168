use crate::index::build_index;
use crate::query::Query;
use crate::rank::{rank_boolean, rank_scored, RankedRecord};
use crate::{Field, Record};

/// Result page size.
pub const DEFAULT_QUOTA: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub quota: usize,
}

impl Default for SearchOptions {
    fn default() -> Self { Self { quota: DEFAULT_QUOTA } }
}

/// Rank title candidates, padding with ranked ingredient candidates up to the quota.
///
/// Exclusions are expected to be applied by whoever fetched the candidates.
/// Ingredient candidates are only ranked when the title results fall short,
/// and are appended without de-duplication against the title results.
pub fn search<'a>(
    query: &Query,
    title_candidates: &'a [Record],
    ingredient_candidates: &'a [Record],
    options: SearchOptions,
) -> Vec<RankedRecord<'a>> {
    if title_candidates.is_empty() && ingredient_candidates.is_empty() {
        return Vec::new();
    }

    let mut results = rank_scored(title_candidates, &query.include);
    if results.len() >= options.quota {
        results.truncate(options.quota);
        return results;
    }

    let padding = rank_scored(ingredient_candidates, &query.include);
    let room = options.quota - results.len();
    tracing::debug!(
        title_hits = results.len(),
        ingredient_hits = padding.len(),
        room,
        "padding title results with ingredient results"
    );
    results.extend(padding.into_iter().take(room));
    results
}

/// Boolean search over ingredients, falling back to titles when nothing matches.
pub fn search_boolean<'a>(query: &Query, records: &'a [Record], options: SearchOptions) -> Vec<RankedRecord<'a>> {
    if records.is_empty() {
        return Vec::new();
    }

    let ingredients = build_index(records, Field::Ingredients);
    let mut results = rank_boolean(&query.include, &query.exclude, &ingredients, records);
    if results.is_empty() {
        tracing::debug!("no ingredient matches, retrying on titles");
        let titles = build_index(records, Field::Title);
        results = rank_boolean(&query.include, &query.exclude, &titles, records);
    }
    results.truncate(options.quota);
    results
}
