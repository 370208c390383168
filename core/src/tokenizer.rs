use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE: Regex = Regex::new(r"[a-z]+").expect("valid regex");
}

/// Tokenize text into lowercase alphabetic terms, in order, keeping duplicates.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    RE.find_iter(&lowered).map(|m| m.as_str().to_string()).collect()
}

/// Like [`tokenize`], but an absent value yields no terms.
pub fn tokenize_opt(text: Option<&str>) -> Vec<String> {
    text.map(tokenize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Banana, milk & 2 cups ICE!");
        assert_eq!(t, vec!["banana", "milk", "cups", "ice"]);
    }

    #[test]
    fn absent_text_is_empty() {
        assert!(tokenize_opt(None).is_empty());
        assert!(tokenize("1/2 -- 3.5").is_empty());
    }
}
