// SPDX-License-Identifier: MPL-2.0
//! Portfolio item types.

use std::fmt;

/// Opaque handle to an image resource (the image source as declared in the catalog).
///
/// Two items refer to the same picture iff their handles are equal; the lightbox
/// uses this to locate an item inside the filtered list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single piece of the studio portfolio. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Position of the item in the source catalog.
    pub id: usize,
    pub image: ImageRef,
    pub alt_text: String,
    pub title: String,
    /// Machine tag used by the filter bar (e.g. `blackwork`).
    pub category_tag: String,
    /// Human readable category shown under the title.
    pub category_label: String,
}

impl GalleryItem {
    /// Title shown when the catalog entry has none.
    pub const UNTITLED: &'static str = "Untitled";

    /// Returns the title, falling back to [`Self::UNTITLED`] for blank titles.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            Self::UNTITLED
        } else {
            &self.title
        }
    }

    /// Returns the category label, falling back to the raw tag.
    #[must_use]
    pub fn display_category(&self) -> &str {
        if self.category_label.trim().is_empty() {
            &self.category_tag
        } else {
            &self.category_label
        }
    }
}

/// The full, static set of portfolio items in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<GalleryItem>,
}

impl Catalog {
    /// Builds a catalog, renumbering item ids to match their position.
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        let items = items
            .into_iter()
            .enumerate()
            .map(|(id, item)| GalleryItem { id, ..item })
            .collect();
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: usize) -> Option<&GalleryItem> {
        self.items.get(id)
    }

    /// Distinct category tags in first-seen order.
    #[must_use]
    pub fn category_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for item in &self.items {
            if !tags.contains(&item.category_tag.as_str()) {
                tags.push(&item.category_tag);
            }
        }
        tags
    }
}

#[cfg(test)]
pub(crate) fn sample_item(image: &str, tag: &str) -> GalleryItem {
    GalleryItem {
        id: 0,
        image: ImageRef::new(image),
        alt_text: format!("{image} alt"),
        title: format!("{image} title"),
        category_tag: tag.to_string(),
        category_label: tag.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_renumbers_ids_by_position() {
        let catalog = Catalog::new(vec![
            GalleryItem {
                id: 42,
                ..sample_item("a.jpg", "realism")
            },
            sample_item("b.jpg", "fineline"),
        ]);
        assert_eq!(catalog.get(0).map(|i| i.id), Some(0));
        assert_eq!(catalog.get(1).map(|i| i.id), Some(1));
    }

    #[test]
    fn category_tags_are_distinct_in_first_seen_order() {
        let catalog = Catalog::new(vec![
            sample_item("a.jpg", "realism"),
            sample_item("b.jpg", "fineline"),
            sample_item("c.jpg", "realism"),
            sample_item("d.jpg", "blackwork"),
        ]);
        assert_eq!(
            catalog.category_tags(),
            vec!["realism", "fineline", "blackwork"]
        );
    }

    #[test]
    fn display_fallbacks_apply_to_blank_fields() {
        let item = GalleryItem {
            title: "  ".into(),
            category_label: String::new(),
            ..sample_item("a.jpg", "realism")
        };
        assert_eq!(item.display_title(), GalleryItem::UNTITLED);
        assert_eq!(item.display_category(), "realism");
    }
}
