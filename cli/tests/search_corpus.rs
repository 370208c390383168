use recipe_core::MealType;
use recipe_search::allergy::Allergy;
use recipe_search::{run, Mode, Settings, NO_RESULTS};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_corpus(dir: &Path) {
    let main = json!([
        {"title": "Banana Smoothie", "ingredients": "banana, milk", "categories": "Drink", "meal_type": "breakfast", "calories": 250, "rating": 4.5},
        {"title": "Banana Bread", "ingredients": "banana, flour, walnut", "meal_type": "breakfast", "calories": 400, "rating": 4.0},
        {"title": "Oatmeal", "ingredients": "oats, banana", "meal_type": "breakfast", "calories": 150, "rating": null},
        {"title": "Apple Pie", "ingredients": "apple, butter", "meal_type": "dinner", "calories": 600}
    ]);
    fs::write(dir.join("recipes.json"), serde_json::to_string(&main).unwrap()).unwrap();
    let extra = [
        json!({"title": "Banana Pancakes", "ingredients": "banana, egg, flour", "meal_type": "breakfast", "calories": 350, "rating": 7}),
        json!({"title": "Chicken Soup", "ingredients": "chicken, carrot", "meal_type": "lunch", "calories": 300, "rating": 3.5}),
    ];
    let lines: Vec<String> = extra.iter().map(|v| v.to_string()).collect();
    fs::write(dir.join("more.jsonl"), lines.join("\n\n")).unwrap();
}

fn settings(dir: &Path, fav: &str) -> Settings {
    Settings {
        input: dir.to_path_buf(),
        fav_foods: Some(fav.to_string()),
        omit_foods: None,
        cal_limit: None,
        meals: vec![MealType::Breakfast],
        include_drinks: false,
        allergies: Vec::new(),
        quota: 10,
        mode: Mode::Fallback,
    }
}

fn titles(report: &recipe_search::Report) -> Vec<String> {
    report.meals[0].hits.iter().filter_map(|h| h.recipe.title.clone()).collect()
}

#[test]
fn fallback_search_over_directory() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let mut s = settings(dir.path(), "banana");
    s.quota = 3;
    let report = run(&s).unwrap();
    assert_eq!(report.message, "Your search: banana");
    // Title hits: bread (4.0) > pancakes (rating 7 normalizes to 0); the drink is filtered out.
    assert_eq!(titles(&report), vec!["Banana Bread", "Banana Pancakes", "Banana Bread"]);
}

#[test]
fn omit_allergy_and_calories() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let mut s = settings(dir.path(), "banana");
    s.omit_foods = Some("flour".into());
    s.include_drinks = true;
    s.cal_limit = Some(300.0);
    s.allergies = vec![Allergy::Dairy];
    let report = run(&s).unwrap();
    assert_eq!(titles(&report), vec!["Oatmeal"]);
}

#[test]
fn boolean_mode_ranks_by_rating() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let mut s = settings(dir.path(), "banana; flour");
    s.mode = Mode::Boolean;
    let report = run(&s).unwrap();
    assert_eq!(titles(&report), vec!["Banana Bread", "Banana Pancakes"]);
}

#[test]
fn no_results_message() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let report = run(&settings(dir.path(), "durian")).unwrap();
    assert_eq!(report.message, NO_RESULTS);
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    let s = settings(&dir.path().join("nope"), "banana");
    assert!(run(&s).is_err());
}
