//! Tokenization and validation of the textual inputs.
//!
//! A matching run receives three comma-delimited lists: two toy
//! preference lists and one processing order of animal names. This
//! module turns them into validated sequences before any allocation
//! logic runs. Validation is strict and fails fast: a single unknown or
//! duplicate token aborts the whole run with no partial result.

use std::collections::HashSet;
use std::fmt;

use crate::catalog::Catalog;
use crate::toy::Toy;

/// Error type for matching-run failures.
///
/// Both variants are detected during validation, before allocation
/// starts. The `Display` representations are the fixed wire messages of
/// the original service.
///
/// # Example
///
/// ```
/// use abrigo::MatchError;
///
/// assert_eq!(MatchError::InvalidToy.to_string(), "Brinquedo inválido");
/// assert_eq!(MatchError::InvalidAnimal.to_string(), "Animal inválido");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// A preference list contains a token outside the toy vocabulary,
    /// or repeats a token.
    InvalidToy,
    /// The processing order names an animal missing from the catalog,
    /// or repeats a name.
    InvalidAnimal,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidToy => write!(f, "Brinquedo inválido"),
            MatchError::InvalidAnimal => write!(f, "Animal inválido"),
        }
    }
}

impl std::error::Error for MatchError {}

/// Splits a raw comma-delimited list into trimmed, non-empty items.
pub(crate) fn tokenize(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty())
}

/// Parses and validates one adopter's toy preference list.
///
/// Fails with [`MatchError::InvalidToy`] if any token is outside the
/// vocabulary or appears more than once.
pub(crate) fn parse_preferences(raw: &str) -> Result<Vec<Toy>, MatchError> {
    let mut toys = Vec::new();
    let mut seen = HashSet::new();
    for item in tokenize(raw) {
        let toy: Toy = item.parse().map_err(|_| MatchError::InvalidToy)?;
        if !seen.insert(toy) {
            return Err(MatchError::InvalidToy);
        }
        toys.push(toy);
    }
    Ok(toys)
}

/// Parses and validates the processing order of animal names.
///
/// Fails with [`MatchError::InvalidAnimal`] if any name is absent from
/// the catalog or appears more than once.
pub(crate) fn parse_order(raw: &str, catalog: &Catalog) -> Result<Vec<String>, MatchError> {
    let mut names = Vec::new();
    let mut seen = HashSet::new();
    for item in tokenize(raw) {
        if !catalog.contains(item) {
            return Err(MatchError::InvalidAnimal);
        }
        if !seen.insert(item) {
            return Err(MatchError::InvalidAnimal);
        }
        names.push(item.to_string());
    }
    Ok(names)
}
