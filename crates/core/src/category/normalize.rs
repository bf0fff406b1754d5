//! Category name normalization.

/// Collapses runs of whitespace into single spaces and trims the ends.
#[must_use]
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a category name: trims, collapses whitespace and title-cases
/// every word. Returns `None` for a blank name.
#[must_use]
pub fn normalize_name(raw: &str) -> Option<String> {
    let words: Vec<String> = raw.split_whitespace().map(title_case_word).collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Case-folded form used for case-insensitive comparisons.
#[must_use]
pub fn fold_for_match(raw: &str) -> String {
    collapse_whitespace(raw).to_lowercase()
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("impostos", "Impostos")]
    #[case("  SERVIÇOS   de terceiros ", "Serviços De Terceiros")]
    #[case("água\te luz", "Água E Luz")]
    #[case("pró-labore", "Pró-labore")]
    #[case("ENERGIA", "Energia")]
    fn test_normalize_name(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_name(raw).as_deref(), Some(expected));
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize_name(""), None);
        assert_eq!(normalize_name(" \n\t "), None);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_name("  juros  SOBRE empréstimo").unwrap();
        assert_eq!(normalize_name(&once).unwrap(), once);
    }

    #[test]
    fn test_fold_for_match() {
        assert_eq!(fold_for_match("  Juros   E Tarifas "), "juros e tarifas");
        assert_eq!(fold_for_match("EMPRÉSTIMO"), "empréstimo");
    }
}
