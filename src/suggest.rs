//! "Did you mean" suggestions for unknown placeholder names

/// Compute Levenshtein edit distance between two strings
pub(crate) fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    if a_chars.is_empty() {
        return n;
    }
    if n == 0 {
        return a_chars.len();
    }

    // Single rolling row instead of the full table
    let mut row: Vec<usize> = (0..=n).collect();
    for (i, a_char) in a_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for j in 1..=n {
            let cost = if *a_char == b_chars[j - 1] { 0 } else { 1 };
            let next = (row[j] + 1).min(row[j - 1] + 1).min(diagonal + cost);
            diagonal = row[j];
            row[j] = next;
        }
    }

    row[n]
}

/// Find known names within `max_distance` of `target`, nearest first
///
/// Ties are broken alphabetically so the result does not depend on the
/// iteration order of `known`.
pub(crate) fn find_similar<'a>(
    known: impl IntoIterator<Item = &'a str>,
    target: &str,
    max_distance: usize,
    limit: usize,
) -> Vec<String> {
    let mut candidates: Vec<(usize, &str)> = known
        .into_iter()
        .filter_map(|name| {
            let dist = levenshtein_distance(name, target);
            (dist <= max_distance && dist > 0).then_some((dist, name))
        })
        .collect();

    candidates.sort();
    candidates.dedup();
    candidates
        .into_iter()
        .map(|(_, name)| name.to_string())
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_same() {
        assert_eq!(levenshtein_distance("nameUpper", "nameUpper"), 0);
    }

    #[test]
    fn test_levenshtein_one_off() {
        assert_eq!(levenshtein_distance("nameUpper", "nameUper"), 1);
        assert_eq!(levenshtein_distance("nameLower", "nameLowor"), 1);
    }

    #[test]
    fn test_levenshtein_different() {
        assert_eq!(levenshtein_distance("cat", "dog"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_find_similar_orders_by_distance() {
        let known = ["nameUpper", "nameLower", "title"];
        let suggestions = find_similar(known, "nameUppr", 2, 3);
        assert_eq!(suggestions, vec!["nameUpper".to_string()]);

        let suggestions = find_similar(known, "nameXower", 2, 3);
        assert_eq!(suggestions, vec!["nameLower".to_string()]);
    }

    #[test]
    fn test_find_similar_respects_limit() {
        let known = ["ab", "ac", "ad", "ae"];
        assert_eq!(find_similar(known, "aa", 1, 2), vec!["ab", "ac"]);
    }

    #[test]
    fn test_find_similar_skips_exact_match() {
        assert!(find_similar(["name"], "name", 2, 3).is_empty());
    }
}
