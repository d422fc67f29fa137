// ── Product name filter ──

/// Case-insensitive subsequence match: every character of `filter` must
/// appear in `name`, in order, with anything in between.
///
/// An empty filter matches everything. Filter characters are literal.
pub fn fuzzy_matches(name: &str, filter: &str) -> bool {
    let mut haystack = name.chars().flat_map(char::to_lowercase);
    filter
        .chars()
        .flat_map(char::to_lowercase)
        .all(|needle| haystack.any(|c| c == needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_all() {
        assert!(fuzzy_matches("Shirt", ""));
        assert!(fuzzy_matches("", ""));
    }

    #[test]
    fn characters_must_appear_in_order() {
        assert!(fuzzy_matches("Brush", "sh"));
        assert!(fuzzy_matches("Shirt", "rt"));
        assert!(!fuzzy_matches("Shoe", "rt"));
        assert!(!fuzzy_matches("Shirt", "ts"));
    }

    #[test]
    fn case_is_ignored() {
        assert!(fuzzy_matches("KOPI susu", "kS"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert!(fuzzy_matches("Teh (es)", "(e"));
        assert!(!fuzzy_matches("Teh", ".*"));
    }
}
