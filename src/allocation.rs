//! The allocation state machine.
//!
//! Animals are processed strictly in the order given; each one resolves
//! to a single terminal outcome and is never revisited. The running
//! per-adopter counts make the processing order significant: an adopter
//! who fills up early stops qualifying for later animals.

use std::collections::BTreeMap;

use crate::animal::{Animal, Kind};
use crate::matching;
use crate::outcome::{Adopter, Outcome};
use crate::toy::Toy;

/// Maximum number of animals one adopter can take in a run.
const MAX_ADOPTIONS: u8 = 3;

/// Maximum number of cats one adopter can take in a run. Cats do not
/// share their toys, read here as one cat per adopter.
const MAX_CATS: u8 = 1;

/// Mutable state scoped to a single matching run.
///
/// Constructed fresh for every run and discarded with it, so concurrent
/// runs never share counters. The outcome map is keyed by animal name in
/// a `BTreeMap`, which yields the lexicographic result order directly.
#[derive(Debug)]
pub(crate) struct AllocationState {
    adoptions: [u8; 2],
    cats: [u8; 2],
    outcomes: BTreeMap<String, Outcome>,
}

impl AllocationState {
    pub(crate) fn new() -> Self {
        Self {
            adoptions: [0; 2],
            cats: [0; 2],
            outcomes: BTreeMap::new(),
        }
    }

    /// Whether `adopter` still has room for an animal of this kind.
    fn can_receive(&self, adopter: Adopter, kind: Kind) -> bool {
        let i = adopter.index();
        if self.adoptions[i] >= MAX_ADOPTIONS {
            return false;
        }
        if kind == Kind::Cat && self.cats[i] >= MAX_CATS {
            return false;
        }
        true
    }

    /// Processes one animal, transitioning it to its terminal outcome.
    ///
    /// `preferences` holds the validated toy lists of adopter one and
    /// adopter two, in that order. The resolution rules:
    ///
    /// 1. An adopter is a candidate if their preferences satisfy the
    ///    animal's favorites and they still have capacity for its kind.
    /// 2. A tortoise additionally requires the adopter to already have
    ///    at least one animal; it can never be a first adoption.
    /// 3. Exactly one candidate adopts. Zero or two candidates send the
    ///    animal to the shelter; a tie is never broken.
    pub(crate) fn place(&mut self, animal: &Animal, preferences: [&[Toy]; 2]) {
        let mut candidates = Vec::new();
        for adopter in Adopter::ALL {
            let offered = preferences[adopter.index()];
            if matching::satisfies(animal, offered) && self.can_receive(adopter, animal.kind()) {
                candidates.push(adopter);
            }
        }

        if animal.kind() == Kind::Tortoise {
            candidates.retain(|adopter| self.adoptions[adopter.index()] >= 1);
        }

        let outcome = match candidates.as_slice() {
            &[winner] => {
                let i = winner.index();
                self.adoptions[i] += 1;
                if animal.kind() == Kind::Cat {
                    self.cats[i] += 1;
                }
                Outcome::Adopted(winner)
            }
            _ => Outcome::Shelter,
        };

        self.outcomes.insert(animal.name().to_string(), outcome);
    }

    /// Returns the resolved outcome for an animal, defaulting to the
    /// shelter for names that were never placed.
    pub(crate) fn outcome_of(&self, name: &str) -> Outcome {
        self.outcomes.get(name).copied().unwrap_or(Outcome::Shelter)
    }

    /// Iterates the completed outcome map in ascending name order.
    pub(crate) fn outcomes(&self) -> impl Iterator<Item = (&str, Outcome)> {
        self.outcomes
            .iter()
            .map(|(name, outcome)| (name.as_str(), *outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::Animal;

    fn dog(name: &str, favorites: &[Toy]) -> Animal {
        Animal::new(name, Kind::Dog, favorites.iter().copied())
    }

    fn cat(name: &str, favorites: &[Toy]) -> Animal {
        Animal::new(name, Kind::Cat, favorites.iter().copied())
    }

    #[test]
    fn test_single_candidate_adopts() {
        let mut state = AllocationState::new();
        let rex = dog("Rex", &[Toy::Rato, Toy::Bola]);
        state.place(&rex, [&[Toy::Rato, Toy::Bola], &[Toy::Laser]]);
        assert_eq!(state.outcome_of("Rex"), Outcome::Adopted(Adopter::One));
    }

    #[test]
    fn test_tie_goes_to_shelter() {
        let mut state = AllocationState::new();
        let rex = dog("Rex", &[Toy::Rato, Toy::Bola]);
        let both = [Toy::Rato, Toy::Bola];
        state.place(&rex, [&both, &both]);
        assert_eq!(state.outcome_of("Rex"), Outcome::Shelter);
    }

    #[test]
    fn test_no_candidate_goes_to_shelter() {
        let mut state = AllocationState::new();
        let rex = dog("Rex", &[Toy::Rato, Toy::Bola]);
        state.place(&rex, [&[Toy::Laser], &[]]);
        assert_eq!(state.outcome_of("Rex"), Outcome::Shelter);
    }

    #[test]
    fn test_adoption_cap_of_three() {
        let mut state = AllocationState::new();
        let prefs = [Toy::Rato];

        for name in ["A1", "A2", "A3"] {
            state.place(&dog(name, &[Toy::Rato]), [&prefs, &[]]);
            assert_eq!(state.outcome_of(name), Outcome::Adopted(Adopter::One));
        }

        // The fourth match is over capacity.
        state.place(&dog("A4", &[Toy::Rato]), [&prefs, &[]]);
        assert_eq!(state.outcome_of("A4"), Outcome::Shelter);
    }

    #[test]
    fn test_one_cat_per_adopter() {
        let mut state = AllocationState::new();
        let prefs = [Toy::Bola];

        state.place(&cat("Mimi", &[Toy::Bola]), [&prefs, &[]]);
        assert_eq!(state.outcome_of("Mimi"), Outcome::Adopted(Adopter::One));

        state.place(&cat("Zero", &[Toy::Bola]), [&prefs, &[]]);
        assert_eq!(state.outcome_of("Zero"), Outcome::Shelter);
    }

    #[test]
    fn test_cat_cap_does_not_block_dogs() {
        let mut state = AllocationState::new();
        let prefs = [Toy::Bola];

        state.place(&cat("Mimi", &[Toy::Bola]), [&prefs, &[]]);
        state.place(&dog("Rex", &[Toy::Bola]), [&prefs, &[]]);
        assert_eq!(state.outcome_of("Rex"), Outcome::Adopted(Adopter::One));
    }

    #[test]
    fn test_capacity_breaks_tie_in_favor_of_remaining_adopter() {
        let mut state = AllocationState::new();
        let prefs = [Toy::Bola];

        // Adopter one takes the first cat and is now at the cat cap.
        state.place(&cat("Mimi", &[Toy::Bola]), [&prefs, &[]]);
        assert_eq!(state.outcome_of("Mimi"), Outcome::Adopted(Adopter::One));

        // Both match the second cat, but only adopter two has cat room.
        state.place(&cat("Zero", &[Toy::Bola]), [&prefs, &prefs]);
        assert_eq!(state.outcome_of("Zero"), Outcome::Adopted(Adopter::Two));
    }

    #[test]
    fn test_tortoise_requires_companionship() {
        let mut state = AllocationState::new();
        let loco = Animal::new("Loco", Kind::Tortoise, [Toy::Skate, Toy::Rato]);
        let prefs = [Toy::Rato, Toy::Skate];

        // First in the order: the adopter has nothing yet.
        state.place(&loco, [&prefs, &[]]);
        assert_eq!(state.outcome_of("Loco"), Outcome::Shelter);
    }

    #[test]
    fn test_tortoise_joins_after_first_adoption() {
        let mut state = AllocationState::new();
        let loco = Animal::new("Loco", Kind::Tortoise, [Toy::Skate, Toy::Rato]);
        let prefs = [Toy::Rato, Toy::Skate];

        state.place(&dog("Rex", &[Toy::Rato]), [&prefs, &[]]);
        state.place(&loco, [&prefs, &[]]);
        assert_eq!(state.outcome_of("Loco"), Outcome::Adopted(Adopter::One));
    }

    #[test]
    fn test_unplaced_name_defaults_to_shelter() {
        let state = AllocationState::new();
        assert_eq!(state.outcome_of("Rex"), Outcome::Shelter);
    }

    #[test]
    fn test_outcomes_iterate_sorted() {
        let mut state = AllocationState::new();
        let prefs = [Toy::Rato];
        state.place(&dog("Zeca", &[Toy::Rato]), [&prefs, &[]]);
        state.place(&dog("Apolo", &[Toy::Rato]), [&prefs, &[]]);

        let names: Vec<_> = state.outcomes().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Apolo", "Zeca"]);
    }
}
