// SPDX-License-Identifier: MPL-2.0
//! Portfolio and budget data loading.
//!
//! The bundled data file is embedded at build time from `assets/site/`. A
//! studio can replace it with its own file through `[studio] catalog_path`
//! or `--catalog`; a broken replacement falls back to the bundled data.

use crate::domain::budget::{BudgetField, BudgetOption, BudgetOptions};
use crate::domain::gallery::{Catalog, GalleryItem, ImageRef};
use crate::error::{CatalogError, Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(RustEmbed)]
#[folder = "assets/site/"]
struct SiteAsset;

const BUNDLED_CATALOG: &str = "catalog.toml";

/// Everything the site needs from the data file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteData {
    pub catalog: Catalog,
    pub budget_options: BudgetOptions,
    /// Directory image references are relative to. `None` for bundled data.
    pub image_root: Option<PathBuf>,
}

impl SiteData {
    /// Filesystem path of an image, if the data came from disk.
    #[must_use]
    pub fn image_path(&self, image: &ImageRef) -> Option<PathBuf> {
        self.image_root
            .as_ref()
            .map(|root| root.join(image.as_str()))
    }
}

// =============================================================================
// File Schema
// =============================================================================

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<ItemEntry>,
    #[serde(default)]
    budget: BudgetEntries,
}

#[derive(Debug, Deserialize)]
struct ItemEntry {
    image: String,
    #[serde(default)]
    alt: String,
    #[serde(default)]
    title: String,
    category: String,
    #[serde(default)]
    category_label: String,
}

#[derive(Debug, Default, Deserialize)]
struct BudgetEntries {
    #[serde(default)]
    style: Vec<OptionEntry>,
    #[serde(default)]
    size: Vec<OptionEntry>,
    #[serde(default)]
    complexity: Vec<OptionEntry>,
    #[serde(default)]
    body_area: Vec<OptionEntry>,
    #[serde(default)]
    colors: Vec<OptionEntry>,
}

#[derive(Debug, Deserialize)]
struct OptionEntry {
    value: String,
    label: String,
    #[serde(default)]
    multiplier: Option<RawMultiplier>,
}

/// Multipliers may be written as strings or as numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawMultiplier {
    Text(String),
    Number(f64),
}

impl From<OptionEntry> for BudgetOption {
    fn from(entry: OptionEntry) -> Self {
        let option = BudgetOption::new(entry.value, entry.label);
        match entry.multiplier {
            Some(RawMultiplier::Text(raw)) => option.with_multiplier(raw),
            Some(RawMultiplier::Number(value)) => option.with_multiplier(value.to_string()),
            None => option,
        }
    }
}

fn convert(entries: Vec<OptionEntry>) -> Vec<BudgetOption> {
    entries.into_iter().map(BudgetOption::from).collect()
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses and validates a data file.
///
/// # Errors
///
/// Returns a [`CatalogError`] when the text is not valid TOML, declares no
/// items, repeats an image, or leaves a budget option group empty.
pub fn parse(source: &str) -> std::result::Result<(Catalog, BudgetOptions), CatalogError> {
    let file: CatalogFile =
        toml::from_str(source).map_err(|err| CatalogError::Malformed(err.message().to_string()))?;

    if file.items.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(file.items.len());
    for entry in file.items {
        if !seen.insert(entry.image.clone()) {
            return Err(CatalogError::DuplicateImage(entry.image));
        }
        items.push(GalleryItem {
            id: 0,
            image: ImageRef::new(entry.image),
            alt_text: entry.alt,
            title: entry.title,
            category_tag: entry.category,
            category_label: entry.category_label,
        });
    }

    let budget = file.budget;
    let options = BudgetOptions {
        style: convert(budget.style),
        size: convert(budget.size),
        complexity: convert(budget.complexity),
        body_area: convert(budget.body_area),
        colors: convert(budget.colors),
    };
    if let Some(field) = options.first_empty_group() {
        return Err(CatalogError::MissingOptions(BudgetField::group_name(field)));
    }

    Ok((Catalog::new(items), options))
}

// =============================================================================
// Loading
// =============================================================================

/// Loads the data file embedded in the binary.
///
/// # Errors
///
/// Returns [`Error::Catalog`] if the embedded file is missing or invalid.
pub fn load_bundled() -> Result<SiteData> {
    let file = SiteAsset::get(BUNDLED_CATALOG)
        .ok_or_else(|| CatalogError::Malformed(format!("{BUNDLED_CATALOG} not embedded")))?;
    let (catalog, budget_options) = parse(&String::from_utf8_lossy(file.data.as_ref()))?;
    Ok(SiteData {
        catalog,
        budget_options,
        image_root: None,
    })
}

/// Loads a data file from disk. Images resolve relative to its directory.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Catalog`]
/// if it is invalid.
pub fn load_from_path(path: &Path) -> Result<SiteData> {
    let source = fs::read_to_string(path)?;
    let (catalog, budget_options) = parse(&source)?;
    Ok(SiteData {
        catalog,
        budget_options,
        image_root: path.parent().map(Path::to_path_buf),
    })
}

/// Loads the override file if given, else the bundled data.
///
/// A failing override is logged and replaced by the bundled data; the
/// returned i18n key tells the caller to warn the visitor.
///
/// # Errors
///
/// Returns an error only if the bundled data itself cannot be loaded.
pub fn load(override_path: Option<&Path>) -> Result<(SiteData, Option<&'static str>)> {
    let Some(path) = override_path else {
        return load_bundled().map(|data| (data, None));
    };

    match load_from_path(path) {
        Ok(data) => {
            info!(
                path = %path.display(),
                items = data.catalog.len(),
                "catalog loaded"
            );
            Ok((data, None))
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "catalog override rejected, using bundled data");
            let key = match &err {
                Error::Catalog(catalog_err) => catalog_err.i18n_key(),
                _ => "error-catalog-unreadable",
            };
            load_bundled().map(|data| (data, Some(key)))
        }
    }
}
