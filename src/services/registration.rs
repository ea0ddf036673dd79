//! Registers a rider against a route and pins them to the nearest stop.

use chrono::Utc;
use serde::Serialize;

use super::TrackerService;
use crate::{
    error::TrackerError,
    matcher::{ACCEPTANCE_THRESHOLD_KM, find_nearest_stop},
    model::{UserRegistration, api_model::RegistrationInput},
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegistrationOutcome {
    pub user: UserRegistration,
    pub resolved_stop: String,
    pub distance_km: f64,
}

impl TrackerService {
    /// Validates the input, matches it to a stop of its route and saves the registration.
    ///
    /// Validation happens before the store is touched at all.
    pub async fn register_user(&self, input: RegistrationInput) -> Result<RegistrationOutcome, TrackerError> {
        let registration = input.validate()?;

        let route = self
            .store
            .find_route_by_id(&registration.route_id)
            .await?
            .ok_or_else(|| TrackerError::RouteNotFound(registration.route_id.clone()))?;

        let nearest = find_nearest_stop(&route.stops, registration.coordinate, ACCEPTANCE_THRESHOLD_KM)?;
        let resolved_stop = nearest.stop.name.clone();
        let distance_km = nearest.distance_km;

        let user = UserRegistration {
            name: registration.name,
            email: registration.email,
            phone: registration.phone,
            route_id: route.id,
            coordinate: registration.coordinate,
            resolved_stop: resolved_stop.clone(),
            registered_at: Utc::now(),
        };

        self.store.save_user_registration(&user).await?;

        Ok(RegistrationOutcome {
            user,
            resolved_stop,
            distance_km,
        })
    }
}
