// SPDX-License-Identifier: MPL-2.0
//! Portfolio domain types.
//!
//! This module contains the catalog of portfolio pieces and the pure
//! filtering rules, independent of any presentation concerns.

pub mod filter;
pub mod item;

// Re-export commonly used types
pub use filter::{compute_filtered_list, FilterTag, FilteredList};
pub use item::{Catalog, GalleryItem, ImageRef};
