use std::fmt;

/// One of the two candidate adopters in a matching run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "wire", derive(serde::Serialize, serde::Deserialize))]
pub enum Adopter {
    One,
    Two,
}

impl Adopter {
    /// Both adopters, in evaluation order.
    pub const ALL: [Adopter; 2] = [Adopter::One, Adopter::Two];

    pub(crate) fn index(self) -> usize {
        match self {
            Adopter::One => 0,
            Adopter::Two => 1,
        }
    }

    /// Returns the adopter's wire label.
    pub fn label(self) -> &'static str {
        match self {
            Adopter::One => "pessoa 1",
            Adopter::Two => "pessoa 2",
        }
    }
}

impl fmt::Display for Adopter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The resolved destination of one animal.
///
/// Every animal in the processing order ends in exactly one of these
/// states; there is no unresolved outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "wire", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The animal goes home with an adopter.
    Adopted(Adopter),
    /// The animal stays at the shelter, either because nobody qualified
    /// or because both adopters did (a tie is never broken).
    Shelter,
}

impl Outcome {
    /// Returns the outcome's wire label.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Adopted(adopter) => adopter.label(),
            Outcome::Shelter => "abrigo",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
