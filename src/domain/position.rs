use crate::domain::GeoLocation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The live reading of the tracker, served by `/api/current-position`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PositionRecord {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(rename = "location")]
    pub location_label: String,
    #[serde(rename = "speed")]
    pub speed_kph: u32,
    #[serde(rename = "altitude")]
    pub altitude_meters: i32,
    pub timestamp: DateTime<Utc>,
}

impl PositionRecord {
    /// A stationary reading at `location`.
    pub fn at(location: &GeoLocation, label: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        PositionRecord {
            latitude: location.latitude,
            longitude: location.longitude,
            location_label: label.into(),
            speed_kph: 0,
            altitude_meters: location.altitude.round() as i32,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_with_the_wire_field_names() {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let location = GeoLocation {
            latitude: 52.520008,
            longitude: 13.404954,
            altitude: 34.0,
        };
        let position = PositionRecord::at(&location, "Berlin, Deutschland", timestamp);

        assert_eq!(
            serde_json::to_value(&position).unwrap(),
            json!({
                "lat": 52.520008,
                "lon": 13.404954,
                "location": "Berlin, Deutschland",
                "speed": 0,
                "altitude": 34,
                "timestamp": "2024-05-01T12:30:00Z",
            })
        );
    }
}
