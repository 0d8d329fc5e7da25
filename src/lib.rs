//! Abrigo: a library for matching shelter animals to candidate adopters.
//!
//! Abrigo evaluates two adopters' **toy preferences** against a fixed
//! **catalog** of animals, processed in a caller-supplied order, and
//! resolves each animal to an adopter or back to the shelter.
//!
//! The rules, in precedence order:
//!
//! 1. An animal goes to an adopter whose preference list shows all of
//!    its favorite toys in the animal's order (interleaving allowed).
//! 2. Cats do not share: each adopter can take at most one cat.
//! 3. If both adopters qualify for the same animal, nobody takes it;
//!    a tie always resolves to the shelter.
//! 4. Each adopter can take at most three animals.
//! 5. The tortoise ignores toy order but only joins an adopter who
//!    already has another animal.
//!
//! # Example
//!
//! ```
//! use abrigo::{MatchError, Shelter};
//!
//! let shelter = Shelter::new();
//!
//! let placements = shelter
//!     .find_adopters("RATO,BOLA", "BOLA,LASER", "Rex,Mimi")
//!     .unwrap();
//! let lines: Vec<String> = placements.iter().map(|p| p.to_string()).collect();
//! assert_eq!(lines, vec!["Mimi - pessoa 2", "Rex - pessoa 1"]);
//!
//! // Validation failures abort the whole run.
//! let result = shelter.find_adopters("RATO,XYZ", "BOLA", "Rex");
//! assert_eq!(result, Err(MatchError::InvalidToy));
//! ```

mod allocation;
mod animal;
mod catalog;
mod input;
pub mod matching;
mod outcome;
mod shelter;
mod toy;

#[cfg(feature = "wire")]
pub mod wire;

pub use animal::{Animal, Kind};
pub use catalog::Catalog;
pub use input::MatchError;
pub use outcome::{Adopter, Outcome};
pub use shelter::{Placement, Shelter};
pub use toy::{Toy, UnknownToy};
