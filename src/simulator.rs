use crate::domain::{GeoLocation, HistoryPoint, PositionRecord, TrackerStatus};
use crate::randomness::RandomSource;
use chrono::{DateTime, Utc};
use std::ops::RangeInclusive;

/// Spacing in degrees between consecutive points of the synthetic track.
pub const TRACK_STEP_DEGREES: f64 = 0.001;
pub const HISTORY_LENGTH: usize = 10;

const WALK_OFFSET_DEGREES: RangeInclusive<f64> = -0.001..=0.001;
const WALK_SPEED_KPH: RangeInclusive<u32> = 0..=60;
const TRACK_SPEED_KPH: RangeInclusive<u32> = 0..=80;
const TRACK_ALTITUDE_METERS: RangeInclusive<u32> = 30..=50;
const BATTERY_PERCENT: RangeInclusive<u32> = 60..=100;
const SIGNAL_STRENGTH_PERCENT: RangeInclusive<u32> = 70..=100;

/// Moves `position` one step along a random walk. Altitude and label stay untouched.
///
/// The timestamp never moves backwards, even when the wall clock does.
pub fn advance(position: &mut PositionRecord, random: &mut dyn RandomSource, now: DateTime<Utc>) {
    position.latitude += random.real(WALK_OFFSET_DEGREES);
    position.longitude += random.real(WALK_OFFSET_DEGREES);
    position.speed_kph = random.integer(WALK_SPEED_KPH);
    position.timestamp = now.max(position.timestamp);
}

/// A diagonal track of [`HISTORY_LENGTH`] points heading north-east from `base`, all stamped with `now`.
pub fn history(base: &GeoLocation, random: &mut dyn RandomSource, now: DateTime<Utc>) -> Vec<HistoryPoint> {
    (0..HISTORY_LENGTH)
        .map(|i| {
            let offset = i as f64 * TRACK_STEP_DEGREES;
            HistoryPoint {
                latitude: base.latitude + offset,
                longitude: base.longitude + offset,
                speed_kph: random.integer(TRACK_SPEED_KPH),
                altitude_meters: random.integer(TRACK_ALTITUDE_METERS) as i32,
                timestamp: now,
            }
        })
        .collect()
}

pub fn status(device_id: &str, random: &mut dyn RandomSource, now: DateTime<Utc>) -> TrackerStatus {
    TrackerStatus {
        online: true,
        battery_percent: random.integer(BATTERY_PERCENT) as u8,
        signal_strength_percent: random.integer(SIGNAL_STRENGTH_PERCENT) as u8,
        last_update: now,
        device_id: device_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randomness::{ScriptedRandom, SeededRandom};
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn berlin() -> GeoLocation {
        GeoLocation {
            latitude: 52.520008,
            longitude: 13.404954,
            altitude: 34.0,
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn advance_applies_the_scripted_offsets_and_speed() {
        let mut position = PositionRecord::at(&berlin(), "Berlin, Deutschland", noon());
        let mut random = ScriptedRandom::new(vec![1.0, 0.0, 0.5]);
        let later = noon() + Duration::seconds(5);

        advance(&mut position, &mut random, later);

        assert_eq!(position.latitude, 52.520008 + 0.001);
        assert_eq!(position.longitude, 13.404954 - 0.001);
        assert_eq!(position.speed_kph, 30);
        assert_eq!(position.altitude_meters, 34);
        assert_eq!(position.location_label, "Berlin, Deutschland");
        assert_eq!(position.timestamp, later);
    }

    #[test]
    fn advance_never_moves_the_timestamp_backwards() {
        let mut position = PositionRecord::at(&berlin(), "Berlin, Deutschland", noon());
        let mut random = ScriptedRandom::new(vec![0.5]);

        advance(&mut position, &mut random, noon() - Duration::seconds(1));

        assert_eq!(position.timestamp, noon());
    }

    #[test]
    fn advance_walks_in_bounded_steps() {
        let mut position = PositionRecord::at(&berlin(), "Berlin, Deutschland", noon());
        let mut random = SeededRandom::new(3);

        for _ in 0..500 {
            let previous = position.clone();
            advance(&mut position, &mut random, noon());

            assert!((position.latitude - previous.latitude).abs() <= 0.001 + 1e-12);
            assert!((position.longitude - previous.longitude).abs() <= 0.001 + 1e-12);
            assert!(position.speed_kph <= 60);
        }
    }

    #[test]
    fn history_is_an_exact_diagonal_from_the_base() {
        let mut random = SeededRandom::new(11);
        let points = history(&berlin(), &mut random, noon());

        assert_eq!(points.len(), 10);
        assert_eq!(points[0].latitude, 52.520008);
        assert_eq!(points[0].longitude, 13.404954);
        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.latitude, points[0].latitude + i as f64 * 0.001);
            assert_eq!(point.longitude, points[0].longitude + i as f64 * 0.001);
            assert!(point.speed_kph <= 80);
            assert!((30..=50).contains(&point.altitude_meters));
            assert_eq!(point.timestamp, noon());
        }
    }

    #[test]
    fn history_draws_speed_then_altitude_per_point() {
        let mut random = ScriptedRandom::new(vec![0.0, 1.0]);
        let points = history(&berlin(), &mut random, noon());

        assert!(points.iter().all(|point| point.speed_kph == 0 && point.altitude_meters == 50));
    }

    #[test]
    fn status_is_online_with_scripted_levels() {
        let mut random = ScriptedRandom::new(vec![0.0, 1.0]);

        assert_eq!(
            status("GPS-TRACKER-001", &mut random, noon()),
            TrackerStatus {
                online: true,
                battery_percent: 60,
                signal_strength_percent: 100,
                last_update: noon(),
                device_id: "GPS-TRACKER-001".to_string(),
            }
        );
    }
}
