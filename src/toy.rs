use std::fmt;
use std::str::FromStr;

/// A toy from the shelter's fixed vocabulary.
///
/// Animals declare the toys they want to see, and adopters declare the
/// toys they can show. Both sides draw from this closed set; any token
/// outside it is rejected during input validation.
///
/// # Example
///
/// ```
/// use abrigo::Toy;
///
/// let toy: Toy = "RATO".parse().unwrap();
/// assert_eq!(toy, Toy::Rato);
/// assert_eq!(toy.to_string(), "RATO");
///
/// assert!("FRISBEE".parse::<Toy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "wire", derive(serde::Serialize, serde::Deserialize))]
pub enum Toy {
    Rato,
    Bola,
    Laser,
    Caixa,
    Novelo,
    Skate,
}

impl Toy {
    /// All toys in the vocabulary.
    pub const ALL: [Toy; 6] = [
        Toy::Rato,
        Toy::Bola,
        Toy::Laser,
        Toy::Caixa,
        Toy::Novelo,
        Toy::Skate,
    ];

    /// Returns the canonical token for this toy, as it appears in input
    /// lists and in the bundled catalog.
    pub fn token(self) -> &'static str {
        match self {
            Toy::Rato => "RATO",
            Toy::Bola => "BOLA",
            Toy::Laser => "LASER",
            Toy::Caixa => "CAIXA",
            Toy::Novelo => "NOVELO",
            Toy::Skate => "SKATE",
        }
    }
}

impl fmt::Display for Toy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when a token is not part of the toy vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToy(pub String);

impl fmt::Display for UnknownToy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown toy: {}", self.0)
    }
}

impl std::error::Error for UnknownToy {}

impl FromStr for Toy {
    type Err = UnknownToy;

    /// Parses a toy token. Matching is exact: tokens are upper-case and
    /// already trimmed by the tokenizer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Toy::ALL
            .into_iter()
            .find(|toy| toy.token() == s)
            .ok_or_else(|| UnknownToy(s.to_string()))
    }
}
