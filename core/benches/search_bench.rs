use criterion::{criterion_group, criterion_main, Criterion};
use recipe_core::tokenizer::tokenize;
use recipe_core::{build_index, search, Field, Query, Record, SearchOptions};

const INGREDIENTS: &[&str] = &["egg", "butter", "flour", "sugar", "milk", "garlic", "rice", "chicken", "tomato", "basil"];

fn synthetic(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let a = INGREDIENTS[i % INGREDIENTS.len()];
            let b = INGREDIENTS[(i * 7 + 3) % INGREDIENTS.len()];
            Record {
                title: Some(format!("{a} and {b} bake no. {i}")),
                ingredients: Some(format!("2 cups {a}, 1 tbsp {b}, salt, pepper")),
                rating: Some((i % 6) as f64),
                ..Default::default()
            }
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = "1 cup unsalted butter, softened; 2 large eggs, beaten; 3 cups all-purpose flour";
    c.bench_function("tokenize_ingredients", |b| b.iter(|| tokenize(text)));
}

fn bench_index(c: &mut Criterion) {
    let records = synthetic(5_000);
    c.bench_function("build_index_ingredients_5k", |b| b.iter(|| build_index(&records, Field::Ingredients)));
}

fn bench_search(c: &mut Criterion) {
    let records = synthetic(5_000);
    let query = Query::parse("egg, garlic", None);
    c.bench_function("fallback_search_5k", |b| {
        b.iter(|| search(&query, &records[..2_000], &records[2_000..], SearchOptions::default()))
    });
}

criterion_group!(benches, bench_tokenize, bench_index, bench_search);
criterion_main!(benches);
