use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Allergy {
    Dairy,
    Egg,
    Fish,
    Peanut,
    Shellfish,
    Soybean,
    TreeNut,
    Wheat,
}

impl Allergy {
    /// Ingredient substrings that rule a recipe out.
    pub fn foods(&self) -> &'static [&'static str] {
        match self {
            Allergy::Dairy => &[
                "butter", "Butter", "cheese", "Cheese", "cream", "Cream", "custard", "Custard", "milk", "Milk",
                "whey", "yogurt", "Yogurt",
            ],
            Allergy::Egg => &["egg", "Egg"],
            Allergy::Fish => &[
                "albacore", "anchov", "Anchov", "carp", "Carp", "cod", "Cod", "fish", "Fish", "herring", "mackerel",
                "pollock", "salmon", "Salmon", "sardine", "tilapia", "trout", "tuna", "Tuna", "yellowfin",
                "yellowtail",
            ],
            Allergy::Peanut => &["peanut", "Peanut"],
            Allergy::Shellfish => &[
                "clam", "Clam", "crab", "Crab", "crawfish", "Crawfish", "crayfish", "lobster", "mussel", "oyster",
                "Oyster", "prawn", "scallop", "shrimp", "Shrimp", "squid",
            ],
            Allergy::Soybean => &["soy", "Soy", "soybean", "Soybean", "soy bean"],
            Allergy::TreeNut => &[
                "almond", "Almond", "cashew", "Cashew", "chestnut", "Chestnut", "hazelnut", "Hazelnut", "hickory",
                "macadamia", "pecan", "Pecan", "pine", "Pine", "pistachio", "Pistachio", "walnut", "Walnut",
            ],
            Allergy::Wheat => &["wheat", "Wheat"],
        }
    }
}

/// All allergen substrings for a set of allergies.
pub fn allergen_list(allergies: &[Allergy]) -> Vec<&'static str> {
    allergies.iter().flat_map(|a| a.foods().iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_allergies() {
        let list = allergen_list(&[Allergy::Egg, Allergy::Peanut]);
        assert_eq!(list, vec!["egg", "Egg", "peanut", "Peanut"]);
        assert!(allergen_list(&[]).is_empty());
    }
}
