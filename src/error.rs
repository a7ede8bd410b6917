// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Catalog Error: {0}")]
    Catalog(CatalogError),
    #[error("Hand-off Error: {0}")]
    Handoff(String),
}

/// Specific problems found while loading the portfolio and budget catalog.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The data file is not valid TOML or does not match the schema.
    #[error("Malformed catalog: {0}")]
    Malformed(String),

    /// The catalog declares no portfolio items.
    #[error("Catalog has no portfolio items")]
    Empty,

    /// Two portfolio items share the same image reference.
    #[error("Duplicate image reference: {0}")]
    DuplicateImage(String),

    /// A budget option group is missing or has no options.
    #[error("Budget option group '{0}' has no options")]
    MissingOptions(&'static str),
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Malformed(_) => "error-catalog-malformed",
            CatalogError::Empty => "error-catalog-empty",
            CatalogError::DuplicateImage(_) => "error-catalog-duplicate-image",
            CatalogError::MissingOptions(_) => "error-catalog-missing-options",
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_wraps_into_error() {
        let err: Error = CatalogError::DuplicateImage("a.jpg".into()).into();
        assert_eq!(
            format!("{}", err),
            "Catalog Error: Duplicate image reference: a.jpg"
        );
    }

    #[test]
    fn catalog_error_i18n_keys() {
        assert_eq!(CatalogError::Empty.i18n_key(), "error-catalog-empty");
        assert_eq!(
            CatalogError::Malformed(String::new()).i18n_key(),
            "error-catalog-malformed"
        );
        assert_eq!(
            CatalogError::MissingOptions("style").i18n_key(),
            "error-catalog-missing-options"
        );
    }

    #[test]
    fn toml_error_maps_to_config_variant() {
        let parse = toml::from_str::<toml::Table>("not = valid = toml");
        let err: Error = parse.expect_err("invalid toml").into();
        assert!(matches!(err, Error::Config(_)));
    }
}
