use serde::{Deserialize, Serialize};

pub mod combine;
pub mod index;
pub mod query;
pub mod rank;
pub mod search;
pub mod tokenizer;

pub use index::{build_index, InvertedIndex};
pub use query::{split_terms, Query};
pub use rank::{normalize_rating, rank_boolean, rank_scored, MatchCounts, RankedRecord};
pub use search::{search, search_boolean, SearchOptions, DEFAULT_QUOTA};

/// Position of a record within the collection an index was built from.
pub type DocId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

/// A recipe as handed over by the storage layer. Never mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub directions: Option<String>,
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Record {
    /// Text of a free-text field, `None` when absent or for the categorical meal type.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Description => self.description.as_deref(),
            Field::Ingredients => self.ingredients.as_deref(),
            Field::Directions => self.directions.as_deref(),
            Field::Categories => self.categories.as_deref(),
            Field::MealType => None,
        }
    }
}

/// Field an inverted index is built over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Ingredients,
    Directions,
    Categories,
    MealType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_freq: u32,
}
