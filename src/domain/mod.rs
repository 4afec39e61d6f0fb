mod geo_location;
mod history_point;
mod position;
mod tracker_status;

pub use geo_location::GeoLocation;
pub use history_point::HistoryPoint;
pub use position::PositionRecord;
pub use tracker_status::TrackerStatus;
