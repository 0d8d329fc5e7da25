use crate::toy::Toy;

/// The kind of an animal.
///
/// The kind selects the matching predicate and the capacity rules that
/// apply during allocation:
///
/// - [`Kind::Cat`] animals count against the one-cat-per-adopter limit.
/// - [`Kind::Tortoise`] animals match their favorites by containment
///   instead of subsequence, and can only join an adopter who already
///   has at least one animal.
/// - [`Kind::Dog`] animals follow the default rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "wire", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Dog,
    Cat,
    Tortoise,
}

/// A catalog entry: an animal with its kind and the toys it wants to
/// see, in the order it wants to see them.
///
/// Records are immutable once constructed; the catalog never changes
/// during a matching run.
///
/// # Example
///
/// ```
/// use abrigo::{Animal, Kind, Toy};
///
/// let rex = Animal::new("Rex", Kind::Dog, [Toy::Rato, Toy::Bola]);
/// assert_eq!(rex.name(), "Rex");
/// assert_eq!(rex.favorites(), &[Toy::Rato, Toy::Bola]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    name: String,
    kind: Kind,
    favorites: Vec<Toy>,
}

impl Animal {
    /// Creates a new animal record.
    pub fn new<I>(name: impl Into<String>, kind: Kind, favorites: I) -> Self
    where
        I: IntoIterator<Item = Toy>,
    {
        Self {
            name: name.into(),
            kind,
            favorites: favorites.into_iter().collect(),
        }
    }

    /// Returns the animal's name, the unique key in the catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the animal's kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the favorite toys, in the order the animal wants them shown.
    pub fn favorites(&self) -> &[Toy] {
        &self.favorites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_accessors() {
        let mimi = Animal::new("Mimi", Kind::Cat, [Toy::Bola, Toy::Laser]);
        assert_eq!(mimi.name(), "Mimi");
        assert_eq!(mimi.kind(), Kind::Cat);
        assert_eq!(mimi.favorites(), &[Toy::Bola, Toy::Laser]);
    }
}
