//! Client-side search and filtering over in-memory lists.

/// Case-insensitive substring test. A blank needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Types that take part in the free-text search box of a list page.
pub trait Searchable {
    /// Fields the search box looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// True when any search field contains `filter`, ignoring case.
    fn matches_filter(&self, filter: &str) -> bool {
        if filter.trim().is_empty() {
            return true;
        }
        self.search_fields()
            .into_iter()
            .any(|field| contains_ci(field, filter))
    }
}

/// Keeps the items whose search fields contain `filter`.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// A list page's combined filter (search box plus dropdowns).
pub trait ListFilter<T: Clone> {
    fn matches(&self, item: &T) -> bool;

    fn apply(&self, items: &[T]) -> Vec<T> {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, &'static str);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0, self.1]
        }
    }

    #[test]
    fn test_blank_filter_returns_everything() {
        let rows = vec![Row("Asha", "Pune"), Row("Ravi", "Delhi")];
        assert_eq!(filter_list(&rows, ""), rows);
        assert_eq!(filter_list(&rows, "   "), rows);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let rows = vec![Row("Asha", "Pune"), Row("Ravi", "Delhi")];
        assert_eq!(filter_list(&rows, "DEL"), vec![Row("Ravi", "Delhi")]);
        assert_eq!(filter_list(&rows, "sh"), vec![Row("Asha", "Pune")]);
        assert!(filter_list(&rows, "Mumbai").is_empty());
    }

    #[test]
    fn test_contains_ci_trims_needle() {
        assert!(contains_ci("Bhakti Yoga Workshop", "  yoga "));
        assert!(!contains_ci("Bhakti", "yoga"));
    }
}
