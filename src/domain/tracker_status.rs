use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TrackerStatus {
    pub online: bool,
    #[serde(rename = "battery")]
    pub battery_percent: u8,
    #[serde(rename = "signal_strength")]
    pub signal_strength_percent: u8,
    pub last_update: DateTime<Utc>,
    pub device_id: String,
}
