//! Client-side search filter for labeled candidate lists
//!
//! Matching is case-insensitive and token-based. Queries of one or two words
//! are a plain substring test; longer queries require every word to appear
//! somewhere in the label AND the label to contain the first two words of the
//! query in order. Tokens come from splitting on single spaces without
//! collapsing runs, so consecutive or trailing spaces produce empty tokens
//! that match every label (`contains("")` is always true). That leniency is
//! long-standing observed behavior and is kept as-is; see the tests pinning
//! it.

use crate::core::models::DegreeProgram;

/// Items that expose a display label to match search queries against.
pub trait Filterable {
    /// Display label shown in the candidate list
    fn label(&self) -> &str;
}

impl Filterable for DegreeProgram {
    fn label(&self) -> &str {
        &self.name
    }
}

impl Filterable for String {
    fn label(&self) -> &str {
        self
    }
}

impl Filterable for &str {
    fn label(&self) -> &str {
        self
    }
}

/// Filter `items` down to those whose label matches `query`.
///
/// A stable filter: matching items keep their original relative order. An
/// empty query matches everything, and an empty result is a normal outcome,
/// never an error. Cost is O(items × tokens) label scans per call, which is
/// fine for the tens-to-hundreds of candidates a dropdown holds.
#[must_use]
pub fn filter_by_query<'a, T: Filterable>(query: &str, items: &'a [T]) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| label_matches(&item.label().to_lowercase(), &query))
        .collect()
}

/// Filter with a secondary discriminator applied before the query test.
///
/// `in_scope` narrows the candidate list by some context value (for example,
/// requirements scoped to a selected program) and the surviving items are
/// then matched against the query as in [`filter_by_query`].
#[must_use]
pub fn filter_scoped<'a, T, C>(
    query: &str,
    items: &'a [T],
    scope: &C,
    in_scope: impl Fn(&T, &C) -> bool,
) -> Vec<&'a T>
where
    T: Filterable,
{
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| in_scope(item, scope))
        .filter(|item| query.is_empty() || label_matches(&item.label().to_lowercase(), &query))
        .collect()
}

/// Core matching rule. Both `label` and `query` must already be lowercase.
fn label_matches(label: &str, query: &str) -> bool {
    let tokens: Vec<&str> = query.split(' ').collect();

    if tokens.len() <= 2 {
        return label.contains(query);
    }

    if !tokens.iter().all(|token| label.contains(token)) {
        return false;
    }

    // Re-assert word order for the first two tokens only: the label must
    // contain the query prefix up to the second space character.
    let first_two = query
        .match_indices(' ')
        .nth(1)
        .map_or(query, |(idx, _)| &query[..idx]);
    label.contains(first_two)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let items = labels(&["Computer Science", "Computer Engineering"]);
        let matched = filter_by_query("", &items);

        assert_eq!(matched.len(), items.len());
        assert_eq!(matched[0], "Computer Science");
        assert_eq!(matched[1], "Computer Engineering");
    }

    #[test]
    fn test_single_token_substring() {
        let items = labels(&["Computer Science", "Computer Engineering", "Biology"]);

        let matched = filter_by_query("computer", &items);
        assert_eq!(matched.len(), 2);

        let matched = filter_by_query("ology", &items);
        assert_eq!(matched, vec!["Biology"]);
    }

    #[test]
    fn test_two_token_query_is_whole_substring() {
        let items = labels(&["Computer Science", "Computer Engineering"]);

        // "computer science" must appear contiguously, not token-wise
        let matched = filter_by_query("computer science", &items);
        assert_eq!(matched, vec!["Computer Science"]);
    }

    #[test]
    fn test_str_slices_are_filterable() {
        let items = ["Computer Science", "Computer Engineering", "Biology"];

        let matched = filter_by_query("bio", &items);
        assert_eq!(matched.len(), 1);
        assert_eq!(*matched[0], "Biology");
    }

    #[test]
    fn test_case_insensitive() {
        let items = labels(&["Computer Science"]);
        assert_eq!(filter_by_query("COMPUTER SCIENCE", &items).len(), 1);
        assert_eq!(filter_by_query("CoMpUtEr", &items).len(), 1);
    }

    #[test]
    fn test_three_tokens_match_independently_plus_prefix() {
        let items = labels(&[
            "Bachelor of Science in Computer Science - Thread",
            "Bachelor of Arts in Computer Science",
        ]);

        // Every token appears in both labels and both contain "bachelor of"
        let matched = filter_by_query("bachelor of science", &items);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_first_two_token_order_is_asserted() {
        let items = labels(&[
            "Bachelor of Science in Computer Science - Thread",
            "Bachelor of Arts in Computer Science",
        ]);

        // Each token appears in both labels, but neither contains the literal
        // substring "of bachelor", so nothing matches. This is what separates
        // the rule from plain every-token matching.
        let matched = filter_by_query("of bachelor science", &items);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_tokens_out_of_order_past_the_first_two() {
        let items = labels(&["Bachelor of Science in Computer Science"]);

        // First two words in order, remaining token anywhere
        let matched = filter_by_query("bachelor of computer", &items);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let items = labels(&["Computer Science"]);
        assert!(filter_by_query("underwater basket weaving", &items).is_empty());
    }

    #[test]
    fn test_consecutive_spaces_produce_lenient_empty_tokens() {
        let items = labels(&["Bachelor of Science"]);

        // "bachelor  of" splits into ["bachelor", "", "of"]: three tokens, the
        // empty one matches trivially, and the first-two prefix is
        // "bachelor " (up to the second space), which the label contains.
        let matched = filter_by_query("bachelor  of", &items);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_trailing_space_behavior() {
        let items = labels(&["Bachelor of Science", "Bachelor night classes"]);

        // "bachelor of " -> ["bachelor", "of", ""]: three tokens; prefix up to
        // the second space is "bachelor of", so order is still asserted.
        let matched = filter_by_query("bachelor of ", &items);
        assert_eq!(matched, vec!["Bachelor of Science"]);
    }

    #[test]
    fn test_stable_order_preserved() {
        let items = labels(&["CS Minor", "Math Minor", "CS Major", "History"]);
        let matched = filter_by_query("cs", &items);
        assert_eq!(matched, vec!["CS Minor", "CS Major"]);
    }

    #[test]
    fn test_filter_scoped_applies_discriminator_first() {
        let items = vec![
            DegreeProgram::new("bs-cs".to_string(), "Computer Science".to_string()),
            DegreeProgram::new("ms-cs".to_string(), "Computer Science".to_string()),
        ];

        let matched = filter_scoped("computer", &items, &"bs-", |p, prefix| {
            p.id.starts_with(*prefix)
        });
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "bs-cs");
    }

    #[test]
    fn test_filter_scoped_empty_query_keeps_scope_only() {
        let items = vec![
            DegreeProgram::new("bs-cs".to_string(), "Computer Science".to_string()),
            DegreeProgram::new("ms-cs".to_string(), "Computer Science".to_string()),
        ];

        let matched = filter_scoped("", &items, &"ms-", |p, prefix| p.id.starts_with(*prefix));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "ms-cs");
    }
}
