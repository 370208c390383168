use crate::tokenizer::tokenize;
use crate::{DocId, Field, MealType, Posting, Record};
use std::collections::HashMap;

/// Term -> postings for one field of one record collection.
///
/// Built per query and dropped afterwards. Postings come out in ascending
/// `doc_id` order because records are visited in order, but callers that need
/// sortedness should not rely on it.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    pub field: Option<Field>,
    pub postings: HashMap<String, Vec<Posting>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, term: &str) -> Option<&[Posting]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    pub fn contains(&self, term: &str) -> bool { self.postings.contains_key(term) }

    /// Document ids of a term's postings, in postings order.
    pub fn doc_ids(&self, term: &str) -> Option<Vec<DocId>> {
        self.get(term).map(|plist| plist.iter().map(|p| p.doc_id).collect())
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }
}

/// Build an inverted index over `field` of `records`; a record's position is its doc id.
pub fn build_index(records: &[Record], field: Field) -> InvertedIndex {
    let postings = match field {
        Field::MealType => meal_type_postings(records),
        _ => text_postings(records, field),
    };
    tracing::debug!(?field, num_docs = records.len(), num_terms = postings.len(), "built inverted index");
    InvertedIndex { field: Some(field), postings }
}

fn text_postings(records: &[Record], field: Field) -> HashMap<String, Vec<Posting>> {
    let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();
    for (pos, record) in records.iter().enumerate() {
        let Some(text) = record.text(field) else { continue };
        let doc_id = pos as DocId;

        // Counts in first-occurrence order so postings stay deterministic.
        let mut tf_counts: Vec<(String, u32)> = Vec::new();
        let mut slot: HashMap<String, usize> = HashMap::new();
        for term in tokenize(text) {
            match slot.get(&term) {
                Some(&i) => tf_counts[i].1 += 1,
                None => {
                    slot.insert(term.clone(), tf_counts.len());
                    tf_counts.push((term, 1));
                }
            }
        }

        for (term, term_freq) in tf_counts {
            postings.entry(term).or_insert_with(Vec::new).push(Posting { doc_id, term_freq });
        }
    }
    postings
}

fn meal_type_postings(records: &[Record]) -> HashMap<String, Vec<Posting>> {
    let mut postings: HashMap<String, Vec<Posting>> = MealType::ALL
        .iter()
        .map(|m| (m.as_str().to_string(), Vec::new()))
        .collect();
    for (pos, record) in records.iter().enumerate() {
        if let Some(meal) = record.meal_type {
            if let Some(plist) = postings.get_mut(meal.as_str()) {
                plist.push(Posting { doc_id: pos as DocId, term_freq: 1 });
            }
        }
    }
    postings
}
