//! Search output models

use crate::results::SearchResultGroup;
use std::iter::FusedIterator;

/// Groups produced by one search, consumed once in order.
///
/// Every call to `SearchService::search` returns a fresh value; nothing is
/// cached between calls.
#[derive(Debug)]
pub struct SearchGroups {
    groups: std::vec::IntoIter<SearchResultGroup>,
}

impl SearchGroups {
    pub(crate) fn new(groups: Vec<SearchResultGroup>) -> Self {
        Self {
            groups: groups.into_iter(),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl Iterator for SearchGroups {
    type Item = SearchResultGroup;

    fn next(&mut self) -> Option<Self::Item> {
        self.groups.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.groups.size_hint()
    }
}

impl ExactSizeIterator for SearchGroups {}

impl FusedIterator for SearchGroups {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::SearchResult;

    #[test]
    fn test_groups_are_single_pass() {
        let group =
            SearchResultGroup::new("Pages", vec![SearchResult::new("Home", "", "/", "home")], 10)
                .unwrap();
        let mut groups = SearchGroups::new(vec![group.clone()]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.next(), Some(group));
        assert_eq!(groups.next(), None);
        assert_eq!(groups.next(), None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(SearchGroups::empty().count(), 0);
    }
}
