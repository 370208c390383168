use anyhow::Result;
use clap::ValueEnum;
use recipe_core::query::case_variants;
use recipe_core::{search, search_boolean, Field, MatchCounts, MealType, Query, RankedRecord, Record, SearchOptions};
use serde::Serialize;
use std::path::PathBuf;

pub mod allergy;
pub mod fetch;
pub mod load;

use allergy::{allergen_list, Allergy};
use fetch::CandidateFilter;

pub const NO_RESULTS: &str = "No Results Found :(";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Multi-signal ranking over title candidates, padded with ingredient candidates
    #[default]
    Fallback,
    /// Rating-ranked boolean match over ingredients, then titles
    Boolean,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub input: PathBuf,
    pub fav_foods: Option<String>,
    pub omit_foods: Option<String>,
    pub cal_limit: Option<f64>,
    /// Empty means every meal type.
    pub meals: Vec<MealType>,
    pub include_drinks: bool,
    pub allergies: Vec<Allergy>,
    pub quota: usize,
    pub mode: Mode,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hit {
    pub score: f64,
    pub rating: f64,
    pub matches: MatchCounts,
    pub recipe: Record,
}

impl From<RankedRecord<'_>> for Hit {
    fn from(r: RankedRecord<'_>) -> Self {
        Hit { score: r.score, rating: r.rating, matches: r.matches, recipe: r.record.clone() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MealResults {
    pub meal: MealType,
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub message: String,
    pub meals: Vec<MealResults>,
}

impl Report {
    pub fn is_empty(&self) -> bool { self.meals.iter().all(|m| m.hits.is_empty()) }
}

pub fn run(settings: &Settings) -> Result<Report> {
    let records = load::load_records(&settings.input)?;
    Ok(search_corpus(&records, settings))
}

/// Search an already-loaded corpus, one result page per selected meal type.
pub fn search_corpus(records: &[Record], settings: &Settings) -> Report {
    let Some(fav) = settings.fav_foods.as_deref().filter(|f| !f.trim().is_empty()) else {
        return Report { message: String::new(), meals: Vec::new() };
    };
    let query = Query::parse(fav, settings.omit_foods.as_deref());
    let include_variants = case_variants(&query.include);
    let omit_variants = case_variants(&query.exclude);
    let options = SearchOptions { quota: settings.quota };

    let meals: Vec<MealType> = if settings.meals.is_empty() { MealType::ALL.to_vec() } else { settings.meals.clone() };
    let mut results = Vec::with_capacity(meals.len());
    for meal in meals {
        let filter = CandidateFilter {
            meal,
            cal_limit: settings.cal_limit,
            include_drinks: settings.include_drinks,
            allergens: allergen_list(&settings.allergies),
        };
        let hits: Vec<Hit> = match settings.mode {
            Mode::Fallback => {
                let by_title = fetch::by_field(records, &filter, Field::Title, &include_variants, &omit_variants);
                let by_ingredients = fetch::by_field(records, &filter, Field::Ingredients, &include_variants, &omit_variants);
                search(&query, &by_title, &by_ingredients, options).into_iter().map(Hit::from).collect()
            }
            Mode::Boolean => {
                let candidates = fetch::by_any_field(records, &filter, &include_variants);
                search_boolean(&query, &candidates, options).into_iter().map(Hit::from).collect()
            }
        };
        tracing::info!(meal = meal.as_str(), hits = hits.len(), "meal search complete");
        results.push(MealResults { meal, hits });
    }

    let mut report = Report { message: format!("Your search: {fav}"), meals: results };
    if report.is_empty() {
        report.message = NO_RESULTS.to_string();
    }
    report
}
