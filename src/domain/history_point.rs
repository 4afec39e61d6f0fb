use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HistoryPoint {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(rename = "speed")]
    pub speed_kph: u32,
    #[serde(rename = "altitude")]
    pub altitude_meters: i32,
    pub timestamp: DateTime<Utc>,
}
