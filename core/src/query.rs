/// Split a raw term list: commas first, semicolons when there is no comma.
///
/// Terms are lowercased and trimmed; empty terms are dropped.
pub fn split_terms(raw: &str) -> Vec<String> {
    let lowered = raw.to_lowercase();
    let mut parts: Vec<&str> = lowered.split(',').collect();
    if parts.len() == 1 {
        parts = lowered.split(';').collect();
    }
    parts
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// First letter upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Spellings of each term for substring matching against case-sensitive text.
///
/// For every term: a title-cased form when it has several words, the term
/// itself, and its capitalized form.
pub fn case_variants<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    let mut out = Vec::new();
    for term in terms.iter().map(|t| AsRef::<str>::as_ref(t)) {
        let words: Vec<&str> = term.split(' ').collect();
        if words.len() > 1 {
            let titled: Vec<String> = words.iter().map(|w| capitalize(w)).collect();
            out.push(titled.join(" ").trim().to_string());
        }
        out.push(term.to_string());
        out.push(capitalize(term));
    }
    out
}

/// Include and exclude terms for one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Query {
    pub fn parse(include: &str, exclude: Option<&str>) -> Self {
        Self {
            include: split_terms(include),
            exclude: exclude.map(split_terms).unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool { self.include.is_empty() }
}
