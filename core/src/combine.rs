//! Boolean combination of postings lists.
//!
//! The merge primitives work on plain document-id lists. Terms missing from
//! the index are skipped rather than treated as an error, so a query with one
//! unknown word still matches on the remaining words.

use crate::index::InvertedIndex;
use crate::DocId;
use std::collections::{BTreeSet, HashSet};

/// Ids present in both lists, in the order of `a`.
pub fn merge_and(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let rhs: HashSet<DocId> = b.iter().copied().collect();
    a.iter().copied().filter(|id| rhs.contains(id)).collect()
}

/// Ids present in either list, de-duplicated and sorted ascending.
pub fn merge_or(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    a.iter().chain(b).copied().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Ids of `a` that do not appear in `b`, in the order of `a`.
pub fn merge_and_not(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let rhs: HashSet<DocId> = b.iter().copied().collect();
    a.iter().copied().filter(|id| !rhs.contains(id)).collect()
}

/// Doc-id lists for the distinct terms that exist in the index.
fn present_postings<S: AsRef<str>>(terms: &[S], index: &InvertedIndex) -> Vec<Vec<DocId>> {
    let mut seen: HashSet<&str> = HashSet::new();
    terms
        .iter()
        .map(|t| AsRef::<str>::as_ref(t))
        .filter(|term| seen.insert(*term))
        .filter_map(|term| index.doc_ids(term))
        .collect()
}

/// Documents containing every known term. Empty when no term is known.
pub fn combine_and_terms<S: AsRef<str>>(terms: &[S], index: &InvertedIndex) -> Vec<DocId> {
    let mut lists = present_postings(terms, index);
    // Shortest list first keeps the running intersection small.
    lists.sort_by_key(Vec::len);
    let mut lists = lists.into_iter();
    let Some(first) = lists.next() else { return Vec::new() };
    lists.fold(first, |acc, next| merge_and(&acc, &next))
}

/// Documents containing any known term, sorted ascending. Empty when no term is known.
pub fn combine_not_terms<S: AsRef<str>>(terms: &[S], index: &InvertedIndex) -> Vec<DocId> {
    let mut lists = present_postings(terms, index);
    lists.sort_by_key(|plist| plist.iter().max().copied());
    let mut lists = lists.into_iter();
    let Some(first) = lists.next() else { return Vec::new() };
    lists.fold(first, |acc, next| merge_or(&acc, &next))
}

/// Documents containing all of `include` and none of `exclude`.
pub fn boolean_match<S: AsRef<str>, T: AsRef<str>>(include: &[S], exclude: &[T], index: &InvertedIndex) -> Vec<DocId> {
    merge_and_not(&combine_and_terms(include, index), &combine_not_terms(exclude, index))
}
