use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// A named point on a route where riders wait.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Stop {
    pub name: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl Stop {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }
}
