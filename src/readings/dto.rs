use serde::Deserialize;

/// JSON body for `POST /add_reading`. Every field is optional; a missing
/// field is recorded as null on the reading.
#[derive(Debug, Deserialize)]
pub struct ReadingPayload {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rain: Option<f64>,
}

impl ReadingPayload {
    /// True when no field was supplied at all (`{}`), which the API treats
    /// the same as a missing body.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.humidity.is_none() && self.rain.is_none()
    }
}
