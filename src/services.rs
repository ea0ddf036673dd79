//! Request workflows that sit between the HTTP layer and the record store.

pub mod registration;
pub mod route_seeder;
pub mod tracking;

use std::sync::Arc;

use crate::store::RecordStore;

/// Entry point for registering riders and following the bus.
///
/// Holds no state of its own besides the injected store, so one instance is shared
/// by all requests.
#[derive(Clone)]
pub struct TrackerService {
    store: Arc<dyn RecordStore>,
    average_speed_kmh: f64,
}

impl TrackerService {
    /// `average_speed_kmh` must be finite and positive, see [`crate::eta::estimate_eta`].
    pub fn new(store: Arc<dyn RecordStore>, average_speed_kmh: f64) -> Self {
        Self {
            store,
            average_speed_kmh,
        }
    }
}
