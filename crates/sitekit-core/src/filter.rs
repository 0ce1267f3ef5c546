//! Portfolio filter: show work items whose tag list contains the active tag.

/// Tag that matches every item.
pub const ALL_TAG: &str = "all";

/// Check whether an item with the given whitespace-separated tag list is
/// visible under `filter`.
///
/// Matching is by exact token: `"web"` does not match `"webapp"`.
#[must_use]
pub fn tag_matches(filter: &str, tags: &str) -> bool {
    filter == ALL_TAG || tags.split_whitespace().any(|tag| tag == filter)
}

/// Active filter selection for a set of work items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkFilter {
    active: String,
}

impl Default for WorkFilter {
    fn default() -> Self {
        Self {
            active: ALL_TAG.to_string(),
        }
    }
}

impl WorkFilter {
    /// Create a filter showing every item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active tag.
    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Make `tag` the active filter.
    pub fn select(&mut self, tag: &str) {
        tag.clone_into(&mut self.active);
    }

    /// Check whether an item with these tags is shown.
    #[must_use]
    pub fn shows(&self, tags: &str) -> bool {
        tag_matches(&self.active, tags)
    }

    /// Visibility of each item, in order.
    pub fn visibility<'a, I>(&self, items: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'a str>,
    {
        items.into_iter().map(|tags| self.shows(tags)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ITEMS: [&str; 4] = ["web brand", "brand", "webapp", ""];

    #[test]
    fn test_default_shows_everything() {
        let filter = WorkFilter::new();
        assert_eq!(filter.active(), "all");
        assert_eq!(filter.visibility(ITEMS), vec![true; 4]);
    }

    #[test]
    fn test_exact_token_match() {
        let mut filter = WorkFilter::new();
        filter.select("web");
        assert_eq!(filter.visibility(ITEMS), vec![true, false, false, false]);
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut filter = WorkFilter::new();
        filter.select("web");
        filter.select("brand");
        assert_eq!(filter.active(), "brand");
        assert_eq!(filter.visibility(ITEMS), vec![true, true, false, false]);
    }

    #[test]
    fn test_select_all_again() {
        let mut filter = WorkFilter::new();
        filter.select("brand");
        filter.select(ALL_TAG);
        assert!(filter.visibility(ITEMS).iter().all(|v| *v));
    }

    #[test]
    fn test_tag_list_whitespace() {
        assert!(tag_matches("seo", "  web\tseo\n"));
        assert!(!tag_matches("se", "web seo"));
    }

    #[test]
    fn test_empty_filter_matches_nothing() {
        assert!(!tag_matches("", ""));
        assert!(!tag_matches("", "web"));
    }

    proptest! {
        #[test]
        fn prop_all_shows_every_item(tags in proptest::collection::vec("[a-z ]{0,20}", 0..10)) {
            let filter = WorkFilter::new();
            let shown = filter.visibility(tags.iter().map(String::as_str));
            prop_assert!(shown.iter().all(|v| *v));
        }

        #[test]
        fn prop_shown_iff_token_present(
            tag in "[a-z]{1,6}",
            tags in proptest::collection::vec("[a-z]{1,6}( [a-z]{1,6}){0,3}", 0..10),
        ) {
            prop_assume!(tag != ALL_TAG);
            let mut filter = WorkFilter::new();
            filter.select(&tag);
            for item in &tags {
                let expected = item.split(' ').any(|t| t == tag);
                prop_assert_eq!(filter.shows(item), expected);
            }
        }
    }
}
