//! In-memory stand-in for the storage-side candidate query.
//!
//! Matching is plain case-sensitive substring containment, so callers pass
//! the capitalization variants of each term (see [`recipe_core::query::case_variants`]).

use recipe_core::{Field, MealType, Record};

/// Coarse per-record predicates applied before any ranking.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    pub meal: MealType,
    /// `None` admits any calorie count.
    pub cal_limit: Option<f64>,
    pub include_drinks: bool,
    pub allergens: Vec<&'static str>,
}

fn contains_any<S: AsRef<str>>(text: &str, needles: &[S]) -> bool {
    needles.iter().any(|n| text.contains(n.as_ref()))
}

impl CandidateFilter {
    pub fn admits(&self, record: &Record) -> bool {
        if record.meal_type != Some(self.meal) {
            return false;
        }
        if let Some(limit) = self.cal_limit {
            if !record.calories.is_some_and(|c| c <= limit) {
                return false;
            }
        }
        if !self.include_drinks && record.categories.as_deref().is_some_and(|c| c.contains("Drink")) {
            return false;
        }
        !record.ingredients.as_deref().is_some_and(|i| contains_any(i, &self.allergens))
    }
}

/// Records whose `field` contains at least one include variant and no omit variant.
pub fn by_field(records: &[Record], filter: &CandidateFilter, field: Field, include: &[String], omit: &[String]) -> Vec<Record> {
    records
        .iter()
        .filter(|r| filter.admits(r))
        .filter(|r| {
            r.text(field)
                .is_some_and(|text| contains_any(text, include) && !contains_any(text, omit))
        })
        .cloned()
        .collect()
}

/// Records where any free-text field contains at least one include variant.
pub fn by_any_field(records: &[Record], filter: &CandidateFilter, include: &[String]) -> Vec<Record> {
    const FIELDS: [Field; 5] = [Field::Title, Field::Description, Field::Ingredients, Field::Directions, Field::Categories];
    records
        .iter()
        .filter(|r| filter.admits(r))
        .filter(|r| FIELDS.iter().any(|f| r.text(*f).is_some_and(|text| contains_any(text, include))))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dinner(title: &str, ingredients: &str, calories: f64) -> Record {
        Record {
            title: Some(title.into()),
            ingredients: Some(ingredients.into()),
            meal_type: Some(MealType::Dinner),
            calories: Some(calories),
            ..Default::default()
        }
    }

    fn filter() -> CandidateFilter {
        CandidateFilter { meal: MealType::Dinner, cal_limit: None, include_drinks: false, allergens: Vec::new() }
    }

    #[test]
    fn coarse_predicates() {
        let mut f = filter();
        let mut lunch = dinner("Soup", "", 100.0);
        lunch.meal_type = Some(MealType::Lunch);
        assert!(!f.admits(&lunch));

        f.cal_limit = Some(500.0);
        assert!(f.admits(&dinner("Soup", "", 500.0)));
        assert!(!f.admits(&dinner("Stew", "", 501.0)));

        let mut drink = dinner("Lemonade", "lemon", 90.0);
        drink.categories = Some("Drink, Summer".into());
        assert!(!f.admits(&drink));
        f.include_drinks = true;
        assert!(f.admits(&drink));

        f.allergens = vec!["peanut"];
        assert!(!f.admits(&dinner("Satay", "chicken, peanut sauce", 300.0)));
    }

    #[test]
    fn field_matching_with_omit() {
        let records = vec![
            dinner("Garlic Shrimp", "shrimp", 1.0),
            dinner("garlic bread", "bread", 1.0),
            dinner("Shrimp Tacos", "garlic", 1.0),
        ];
        let include = vec!["garlic".to_string(), "Garlic".to_string()];
        let omit = vec!["bread".to_string()];
        let got = by_field(&records, &filter(), Field::Title, &include, &omit);
        assert_eq!(got, vec![records[0].clone()]);
        let got = by_field(&records, &filter(), Field::Ingredients, &include, &[]);
        assert_eq!(got, vec![records[2].clone()]);
    }

    #[test]
    fn any_field_matching() {
        let mut r = dinner("Stew", "beef", 1.0);
        r.directions = Some("add garlic".into());
        let records = vec![r.clone(), dinner("Salad", "lettuce", 1.0)];
        let got = by_any_field(&records, &filter(), &["garlic".to_string()]);
        assert_eq!(got, vec![r]);
    }
}
