use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// One GPS fix reported by the bus. Samples are only ever appended.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehiclePositionSample {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub timestamp: DateTime<Utc>,
}
