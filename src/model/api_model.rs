use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::sync::LazyLock;

use super::{coordinate::Coordinate, registration::NewRegistration};
use crate::error::ValidationError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Body of a rider registration as sent by the web client.
///
/// Every field is optional at this level so that a missing field turns into a
/// [`ValidationError`] naming it instead of a generic deserialization failure.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RegistrationInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Phones sometimes arrive as JSON numbers
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
}

impl RegistrationInput {
    /// Checks every required field once, before any business logic runs.
    pub fn validate(self) -> Result<NewRegistration, ValidationError> {
        let name = required_text("name", self.name)?;
        let email = required_text("email", self.email)?;
        let phone = required_text("phone", self.phone)?;
        let route_id = required_text("route", self.route)?;
        let latitude = self.latitude.ok_or(ValidationError::Missing("latitude"))?;
        let longitude = self.longitude.ok_or(ValidationError::Missing("longitude"))?;

        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::MalformedEmail(email));
        }

        Ok(NewRegistration {
            name,
            email,
            phone,
            route_id,
            coordinate: Coordinate::checked(latitude, longitude)?,
        })
    }
}

/// Body of a GPS fix posted by the on-board tracker.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VehiclePositionInput {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
}

impl VehiclePositionInput {
    pub fn validate(self) -> Result<Coordinate, ValidationError> {
        let latitude = self.latitude.ok_or(ValidationError::Missing("latitude"))?;
        let longitude = self.longitude.ok_or(ValidationError::Missing("longitude"))?;

        Coordinate::checked(latitude, longitude)
    }
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(ValidationError::Missing(field)),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

// The tracker firmware and some browsers send coordinates as strings like "45.81"
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<TextOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(TextOrNumber::Number(number)) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("{number} is not a valid coordinate"))),
        Some(TextOrNumber::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(TextOrNumber::Text(text)) => text.trim().parse().map(Some).map_err(de::Error::custom),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }),
    )
}
