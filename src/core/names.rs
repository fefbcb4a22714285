// src/core/names.rs
//
// Display-name cleanup ahead of the gender lookup.
// Concatenated names ("JohnDoe") are left joined; only punctuation goes.

use std::sync::OnceLock;

use regex::Regex;

fn punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Literal pattern, cannot fail
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("valid regex"))
}

/// Strip every char that is neither a word char nor whitespace, then trim.
pub fn clean_name(raw: &str) -> String {
    let stripped = punctuation().replace_all(raw, "");
    // The case-boundary pass has nothing left to act on once punctuation is gone.
    stripped.trim().to_string()
}

pub fn clean_names<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    logd!("Cleaning {} names", raw.len());
    raw.iter().map(|n| clean_name(n.as_ref())).collect()
}

/// First space-separated word; empty input gives `""`.
pub fn first_name(clean: &str) -> &str {
    clean.split(' ').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenated_names_stay_joined() {
        assert_eq!(clean_names(&["JohnDoe", "JaneDoe!"]), vec!["JohnDoe", "JaneDoe"]);
    }

    #[test]
    fn strips_punctuation_and_trims() {
        assert_eq!(clean_name("  ~María_José~ "), "María_José");
        assert_eq!(clean_name("Ana (Lectora)"), "Ana Lectora");
        assert_eq!(clean_name("★★★"), "");
    }

    #[test]
    fn first_word() {
        assert_eq!(first_name("Ana Lectora"), "Ana");
        assert_eq!(first_name("JohnDoe"), "JohnDoe");
        assert_eq!(first_name(""), "");
    }
}
