//! Validation errors produced while processing asset lists.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// One validation failure found while processing an asset list.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum AssetsValidatorError {
    #[error("Bad asset name \"{name}\"")]
    #[diagnostic(
        code(tokex::validate::bad_name),
        help("Rename the asset so it matches the configured name_validate_regexp")
    )]
    BadName { name: String },

    #[error("Found duplicate asset \"{asset_name}\"")]
    #[diagnostic(code(tokex::validate::duplicate))]
    FoundDuplicate { asset_name: String },

    #[error("Light theme has {light} assets but dark theme has {dark}")]
    #[diagnostic(code(tokex::validate::count_mismatch))]
    CountMismatch { light: usize, dark: usize },

    #[error("Light theme assets missing from the dark theme: {}", assets.join(", "))]
    #[diagnostic(code(tokex::validate::missing_in_dark))]
    LightAssetsNotFoundInDarkPalette { assets: Vec<String> },

    #[error("Dark theme assets missing from the light theme: {}", assets.join(", "))]
    #[diagnostic(code(tokex::validate::missing_in_light))]
    DarkAssetsNotFoundInLightPalette { assets: Vec<String> },

    #[error(
        "Asset \"{asset_name}\" has platform \"{light}\" in the light theme but \"{dark}\" in the dark theme"
    )]
    #[diagnostic(code(tokex::validate::description_mismatch))]
    DescriptionMismatch {
        asset_name: String,
        light: String,
        dark: String,
    },
}

/// Ordered collection of validation errors from one processing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorGroup {
    errors: Vec<AssetsValidatorError>,
}

impl ErrorGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error.
    pub fn push(&mut self, error: AssetsValidatorError) {
        self.errors.push(error);
    }

    /// Merge another group into this one, keeping order.
    pub fn extend(&mut self, other: ErrorGroup) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetsValidatorError> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<AssetsValidatorError> {
        self.errors
    }
}

impl From<AssetsValidatorError> for ErrorGroup {
    fn from(error: AssetsValidatorError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ErrorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}
