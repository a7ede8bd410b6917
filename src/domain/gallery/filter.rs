// SPDX-License-Identifier: MPL-2.0
//! Portfolio filtering types for the domain layer.
//!
//! This module contains the pure filter types and the filtered-list query.
//! Nothing here touches the display surface; visibility transitions are
//! planned in the application layer.

use super::item::{Catalog, GalleryItem, ImageRef};
use std::fmt;
use std::ops::Deref;

// =============================================================================
// Filter Tag
// =============================================================================

/// Active portfolio filter.
///
/// `All` shows the whole catalog; `Category` keeps only items carrying the
/// exact same category tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterTag {
    /// Show every item.
    #[default]
    All,
    /// Show only items whose category tag equals this value.
    Category(String),
}

impl FilterTag {
    /// Wire value of the catch-all filter.
    pub const ALL: &'static str = "all";

    /// Parses a filter value as found on the filter bar.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    /// Returns `true` if this filter keeps an item with the given tag.
    #[must_use]
    pub fn matches(&self, category_tag: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => tag == category_tag,
        }
    }

    /// Returns `true` if this filter hides anything.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Category(tag) => tag,
        }
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Filtered List
// =============================================================================

/// Ordered subset of the catalog matching a filter.
///
/// Always derived from scratch by [`compute_filtered_list`]; it is never
/// patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredList {
    items: Vec<GalleryItem>,
}

impl FilteredList {
    /// Position of the item showing `image`, if it passed the filter.
    #[must_use]
    pub fn position_of(&self, image: &ImageRef) -> Option<usize> {
        self.items.iter().position(|item| &item.image == image)
    }

    /// Returns `true` if the catalog item with this id passed the filter.
    #[must_use]
    pub fn contains_id(&self, id: usize) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

impl Deref for FilteredList {
    type Target = [GalleryItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// Selects the catalog items matching `tag`, in catalog order.
///
/// Pure: the catalog is not modified and each item appears at most once.
/// A tag matching nothing yields an empty list.
#[must_use]
pub fn compute_filtered_list(catalog: &Catalog, tag: &FilterTag) -> FilteredList {
    FilteredList {
        items: catalog
            .items()
            .iter()
            .filter(|item| tag.matches(&item.category_tag))
            .cloned()
            .collect(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::item::sample_item;
    use proptest::prelude::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            sample_item("a.jpg", "realism"),
            sample_item("b.jpg", "fineline"),
            sample_item("c.jpg", "realism"),
            sample_item("d.jpg", "blackwork"),
        ])
    }

    #[test]
    fn parse_recognizes_all() {
        assert_eq!(FilterTag::parse("all"), FilterTag::All);
        assert_eq!(
            FilterTag::parse("realism"),
            FilterTag::Category("realism".into())
        );
        assert!(!FilterTag::parse("all").is_active());
        assert!(FilterTag::parse("ALL").is_active());
    }

    #[test]
    fn all_filter_keeps_catalog_order() {
        let list = compute_filtered_list(&catalog(), &FilterTag::All);
        let ids: Vec<usize> = list.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn category_filter_keeps_matching_items_only() {
        let list = compute_filtered_list(&catalog(), &FilterTag::parse("realism"));
        let ids: Vec<usize> = list.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert!(list.contains_id(2));
        assert!(!list.contains_id(1));
    }

    #[test]
    fn unknown_tag_yields_empty_list() {
        let list = compute_filtered_list(&catalog(), &FilterTag::parse("watercolor"));
        assert!(list.is_empty());
    }

    #[test]
    fn position_of_uses_image_identity() {
        let list = compute_filtered_list(&catalog(), &FilterTag::parse("realism"));
        assert_eq!(list.position_of(&ImageRef::new("c.jpg")), Some(1));
        assert_eq!(list.position_of(&ImageRef::new("b.jpg")), None);
    }

    fn arb_catalog() -> impl Strategy<Value = Catalog> {
        prop::collection::vec(prop::sample::select(vec!["a", "b", "c"]), 0..24).prop_map(
            |tags| {
                Catalog::new(
                    tags.iter()
                        .enumerate()
                        .map(|(i, tag)| sample_item(&format!("{i}.jpg"), tag))
                        .collect(),
                )
            },
        )
    }

    proptest! {
        #[test]
        fn filtered_list_is_exactly_the_matching_subsequence(
            catalog in arb_catalog(),
            tag in prop::sample::select(vec!["all", "a", "b", "c", "d"]),
        ) {
            let filter = FilterTag::parse(tag);
            let list = compute_filtered_list(&catalog, &filter);

            let expected: Vec<usize> = catalog
                .items()
                .iter()
                .filter(|item| tag == "all" || item.category_tag == tag)
                .map(|item| item.id)
                .collect();
            let actual: Vec<usize> = list.iter().map(|item| item.id).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
