use std::fmt;

use crate::allocation::AllocationState;
use crate::catalog::Catalog;
use crate::input::{self, MatchError};
use crate::outcome::Outcome;

/// The resolved placement of one animal: its name and where it ended up.
///
/// `Display` renders the wire form `"<name> - <label>"`.
///
/// # Example
///
/// ```
/// use abrigo::{Adopter, Outcome, Placement};
///
/// let placement = Placement::new("Rex", Outcome::Adopted(Adopter::One));
/// assert_eq!(placement.to_string(), "Rex - pessoa 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    animal: String,
    outcome: Outcome,
}

impl Placement {
    /// Creates a placement entry.
    pub fn new(animal: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            animal: animal.into(),
            outcome,
        }
    }

    /// Returns the animal's name.
    pub fn animal(&self) -> &str {
        &self.animal
    }

    /// Returns where the animal ended up.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.animal, self.outcome)
    }
}

/// The matcher: holds the animal catalog and runs matching rounds.
///
/// `Shelter` is immutable; every call to [`find_adopters`] builds its
/// own run-scoped state, so a single instance can serve concurrent runs.
///
/// [`find_adopters`]: Shelter::find_adopters
///
/// # Example
///
/// ```
/// use abrigo::Shelter;
///
/// let shelter = Shelter::new();
/// let placements = shelter
///     .find_adopters("RATO,BOLA", "RATO,NOVELO", "Rex,Fofo")
///     .unwrap();
///
/// let lines: Vec<String> = placements.iter().map(|p| p.to_string()).collect();
/// assert_eq!(lines, vec!["Fofo - abrigo", "Rex - pessoa 1"]);
/// ```
#[derive(Debug, Clone)]
pub struct Shelter {
    catalog: Catalog,
}

impl Shelter {
    /// Creates a shelter with the bundled animal catalog.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::bundled())
    }

    /// Creates a shelter with a custom catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the shelter's catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs one matching round.
    ///
    /// `prefs_one` and `prefs_two` are the adopters' comma-delimited toy
    /// lists; `order` is the comma-delimited sequence of animal names to
    /// process, in precedence order. Returns one [`Placement`] per named
    /// animal, sorted ascending by name.
    ///
    /// Both preference lists are validated before the order, so a bad
    /// toy token wins over a bad animal name when both are present.
    ///
    /// # Errors
    ///
    /// - [`MatchError::InvalidToy`] if either preference list has an
    ///   unknown or duplicate toy.
    /// - [`MatchError::InvalidAnimal`] if the order has an unknown or
    ///   duplicate animal name.
    pub fn find_adopters(
        &self,
        prefs_one: &str,
        prefs_two: &str,
        order: &str,
    ) -> Result<Vec<Placement>, MatchError> {
        let prefs_one = input::parse_preferences(prefs_one)?;
        let prefs_two = input::parse_preferences(prefs_two)?;
        let order = input::parse_order(order, &self.catalog)?;

        let mut state = AllocationState::new();
        for name in &order {
            // parse_order only admits cataloged names.
            let Some(animal) = self.catalog.get(name) else {
                continue;
            };
            state.place(animal, [&prefs_one, &prefs_two]);
        }

        Ok(state
            .outcomes()
            .map(|(name, outcome)| Placement::new(name, outcome))
            .collect())
    }
}

impl Default for Shelter {
    fn default() -> Self {
        Self::new()
    }
}
