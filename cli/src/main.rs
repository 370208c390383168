use anyhow::Result;
use clap::Parser;
use recipe_core::{MealType, DEFAULT_QUOTA};
use recipe_search::allergy::Allergy;
use recipe_search::{run, Mode, Settings};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "recipe-search")]
#[command(about = "Search a recipe corpus by favourite and omitted foods", long_about = None)]
struct Args {
    /// Input path (JSON/JSONL file or directory)
    #[arg(long)]
    input: String,
    /// Foods to look for, comma- or semicolon-separated
    #[arg(long)]
    fav_foods: Option<String>,
    /// Foods to leave out, comma- or semicolon-separated
    #[arg(long)]
    omit_foods: Option<String>,
    /// Maximum calories per recipe
    #[arg(long)]
    cal_limit: Option<f64>,
    #[arg(long)]
    breakfast: bool,
    #[arg(long)]
    lunch: bool,
    #[arg(long)]
    dinner: bool,
    /// Keep recipes categorized as drinks
    #[arg(long, default_value_t = false)]
    include_drinks: bool,
    /// Exclude recipes containing these allergens (repeatable)
    #[arg(long = "allergy", value_enum)]
    allergies: Vec<Allergy>,
    /// Results per meal type
    #[arg(long, default_value_t = DEFAULT_QUOTA)]
    quota: usize,
    #[arg(long, value_enum, default_value_t = Mode::Fallback)]
    mode: Mode,
}

impl Args {
    fn into_settings(self) -> Settings {
        let meals = [(self.breakfast, MealType::Breakfast), (self.lunch, MealType::Lunch), (self.dinner, MealType::Dinner)]
            .into_iter()
            .filter_map(|(on, meal)| on.then_some(meal))
            .collect();
        Settings {
            input: self.input.into(),
            fav_foods: self.fav_foods,
            omit_foods: self.omit_foods,
            cal_limit: self.cal_limit,
            meals,
            include_drinks: self.include_drinks,
            allergies: self.allergies,
            quota: self.quota,
            mode: self.mode,
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let settings = Args::parse().into_settings();

    let report = run(&settings)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
