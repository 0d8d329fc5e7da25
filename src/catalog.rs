//! The shelter's animal registry.

use std::collections::HashMap;

use crate::animal::{Animal, Kind};
use crate::toy::Toy;

/// A read-only registry mapping animal names to their records.
///
/// The catalog is fixed for the lifetime of a [`Shelter`](crate::Shelter):
/// it is built once, passed by reference into every matching run, and
/// never mutated by the matcher.
///
/// # Example
///
/// ```
/// use abrigo::{Animal, Catalog, Kind, Toy};
///
/// // The shelter's own residents:
/// let catalog = Catalog::bundled();
/// assert!(catalog.contains("Rex"));
/// assert_eq!(catalog.get("Loco").unwrap().kind(), Kind::Tortoise);
///
/// // Or a custom registry for testing:
/// let mut catalog = Catalog::new();
/// catalog.insert(Animal::new("Toto", Kind::Dog, [Toy::Bola]));
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    animals: HashMap<String, Animal>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            animals: HashMap::new(),
        }
    }

    /// Creates the bundled catalog of the shelter's seven residents.
    pub fn bundled() -> Self {
        let mut catalog = Self::new();
        catalog.insert(Animal::new("Rex", Kind::Dog, [Toy::Rato, Toy::Bola]));
        catalog.insert(Animal::new("Mimi", Kind::Cat, [Toy::Bola, Toy::Laser]));
        catalog.insert(Animal::new(
            "Fofo",
            Kind::Cat,
            [Toy::Bola, Toy::Rato, Toy::Laser],
        ));
        catalog.insert(Animal::new("Zero", Kind::Cat, [Toy::Rato, Toy::Bola]));
        catalog.insert(Animal::new("Bola", Kind::Dog, [Toy::Caixa, Toy::Novelo]));
        catalog.insert(Animal::new(
            "Bebe",
            Kind::Dog,
            [Toy::Laser, Toy::Rato, Toy::Bola],
        ));
        catalog.insert(Animal::new("Loco", Kind::Tortoise, [Toy::Skate, Toy::Rato]));
        catalog
    }

    /// Adds an animal to the catalog, replacing any existing record with
    /// the same name.
    pub fn insert(&mut self, animal: Animal) {
        self.animals.insert(animal.name().to_string(), animal);
    }

    /// Looks up an animal by name.
    pub fn get(&self, name: &str) -> Option<&Animal> {
        self.animals.get(name)
    }

    /// Returns `true` if the catalog has an animal with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.animals.contains_key(name)
    }

    /// Returns the number of animals in the catalog.
    pub fn len(&self) -> usize {
        self.animals.len()
    }

    /// Returns `true` if the catalog has no animals.
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bundled()
    }
}
