//! Preference matching predicates.
//!
//! Whether an adopter's preference list satisfies an animal's favorite
//! toys depends on the animal's kind:
//!
//! - Dogs and cats require their favorites as an **ordered subsequence**
//!   of the preference list: every favorite must appear, in order, with
//!   unrelated toys freely interleaved.
//! - Tortoises only require **containment**: every favorite must appear
//!   somewhere in the preference list, order irrelevant.
//!
//! Both predicates are pure; capacity rules live in the allocation
//! phase.

use crate::animal::{Animal, Kind};
use crate::toy::Toy;

/// Tests whether `required` appears as an ordered subsequence of
/// `offered`.
///
/// Implemented as a single forward scan: a cursor over `required`
/// advances each time the current offered toy matches, and the match
/// succeeds iff the cursor reaches the end.
///
/// # Example
///
/// ```
/// use abrigo::matching::is_subsequence;
/// use abrigo::Toy;
///
/// let required = [Toy::Rato, Toy::Bola];
///
/// // Interleaving is fine as long as the order holds.
/// assert!(is_subsequence(&required, &[Toy::Laser, Toy::Rato, Toy::Caixa, Toy::Bola]));
///
/// // Wrong order fails.
/// assert!(!is_subsequence(&required, &[Toy::Bola, Toy::Rato]));
/// ```
pub fn is_subsequence(required: &[Toy], offered: &[Toy]) -> bool {
    let mut cursor = 0;
    for toy in offered {
        if cursor < required.len() && *toy == required[cursor] {
            cursor += 1;
        }
    }
    cursor == required.len()
}

/// Tests whether every toy in `required` appears somewhere in `offered`.
///
/// # Example
///
/// ```
/// use abrigo::matching::contains_all;
/// use abrigo::Toy;
///
/// let required = [Toy::Skate, Toy::Rato];
///
/// assert!(contains_all(&required, &[Toy::Rato, Toy::Skate]));
/// assert!(contains_all(&required, &[Toy::Skate, Toy::Rato, Toy::Bola]));
/// assert!(!contains_all(&required, &[Toy::Skate]));
/// ```
pub fn contains_all(required: &[Toy], offered: &[Toy]) -> bool {
    required.iter().all(|toy| offered.contains(toy))
}

/// Tests whether an adopter's preference list satisfies an animal's
/// favorites, dispatching on the animal's kind.
pub fn satisfies(animal: &Animal, offered: &[Toy]) -> bool {
    match animal.kind() {
        Kind::Tortoise => contains_all(animal.favorites(), offered),
        Kind::Dog | Kind::Cat => is_subsequence(animal.favorites(), offered),
    }
}
