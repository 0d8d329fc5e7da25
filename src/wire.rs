//! Wire-format integration.
//!
//! This module renders a matching run's result in the JSON shape of the
//! original adoption service: `{"lista": [...]}` on success and
//! `{"erro": "..."}` on failure. It exists for callers that sit behind
//! that API; library users can work with [`Placement`] directly.
//!
//! # Example
//!
//! ```
//! use abrigo::Shelter;
//! use abrigo::wire::Response;
//!
//! let shelter = Shelter::new();
//! let response = Response::from(shelter.find_adopters("RATO,BOLA", "BOLA,LASER", "Rex,Mimi"));
//!
//! let json = serde_json::to_string(&response).unwrap();
//! assert_eq!(json, r#"{"lista":["Mimi - pessoa 2","Rex - pessoa 1"]}"#);
//! ```

use serde::{Deserialize, Serialize};

use crate::input::MatchError;
use crate::shelter::Placement;

/// The JSON body of a matching response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    /// Successful run: one rendered line per animal, sorted by name.
    Lista { lista: Vec<String> },
    /// Failed validation: the fixed error message.
    Erro { erro: String },
}

impl From<Result<Vec<Placement>, MatchError>> for Response {
    fn from(result: Result<Vec<Placement>, MatchError>) -> Self {
        match result {
            Ok(placements) => Response::Lista {
                lista: placements.iter().map(|p| p.to_string()).collect(),
            },
            Err(err) => Response::Erro {
                erro: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shelter;

    #[test]
    fn test_success_body() {
        let shelter = Shelter::new();
        let response =
            Response::from(shelter.find_adopters("RATO,BOLA", "RATO,NOVELO", "Rex,Fofo"));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"lista": ["Fofo - abrigo", "Rex - pessoa 1"]})
        );
    }

    #[test]
    fn test_toy_error_body() {
        let shelter = Shelter::new();
        let response = Response::from(shelter.find_adopters("XYZ", "", "Rex"));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"erro": "Brinquedo inválido"})
        );
    }

    #[test]
    fn test_animal_error_body() {
        let shelter = Shelter::new();
        let response = Response::from(shelter.find_adopters("RATO", "", "Rex,Rex"));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"erro": "Animal inválido"})
        );
    }

    #[test]
    fn test_round_trip() {
        let body = r#"{"lista":["Rex - pessoa 1"]}"#;
        let response: Response = serde_json::from_str(body).unwrap();
        assert_eq!(
            response,
            Response::Lista {
                lista: vec!["Rex - pessoa 1".to_string()]
            }
        );
    }
}
