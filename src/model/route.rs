use serde::{Deserialize, Serialize};

use super::stop::Stop;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Route {
    /// Unique route identifier, e.g. "T789". Called `route` on the wire.
    #[serde(rename = "route")]
    pub id: String,
    /// Stops in travel order. Matching scans all of them so the order only matters for display.
    pub stops: Vec<Stop>,
}
