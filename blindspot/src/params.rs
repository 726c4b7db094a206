use std::ops::RangeInclusive;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use geom::{Distance, Speed};

/// The range the panel offers for the angle between the two roads, in degrees.
pub const INTERSECTION_ANGLE_RANGE: RangeInclusive<f64> = 0.0..=180.0;
/// The range the panel offers for both edges of the blind-spot cone, in degrees.
pub const CONE_ANGLE_RANGE: RangeInclusive<f64> = 0.0..=45.0;
/// The range the panel offers for the car's starting distance, in meters.
pub const START_DISTANCE_RANGE: RangeInclusive<f64> = 0.0..=1000.0;
/// The range the panel offers for the car's speed, in meters per second.
pub const SPEED_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Everything the parameter panel can tune that affects the shadow. Angles stay in degrees, the
/// same units the panel shows; they become `Angle`s only when the geometry is computed.
///
/// Values outside the panel's ranges are kept as-is. Nothing here clamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Degrees between the car's road and the crossing road.
    pub angle_of_intersection: f64,
    /// Degrees from the car's forward axis to the leading edge of the blind spot.
    pub blindspot_leading_angle: f64,
    /// Degrees from the car's forward axis to the trailing edge of the blind spot.
    pub blindspot_trailing_angle: f64,
    /// How far from the intersection the car starts, and returns to on replay.
    pub car_start_distance: Distance,
    pub car_speed: Speed,
}

impl Default for Parameters {
    /// Roughly a mid-sized car doing 40mph, 100m away from a road meeting at 69 degrees.
    fn default() -> Parameters {
        Parameters {
            angle_of_intersection: 69.0,
            blindspot_leading_angle: 19.4,
            blindspot_trailing_angle: 27.1,
            car_start_distance: Distance::const_meters(100.0),
            car_speed: Speed::const_meters_per_second(18.0),
        }
    }
}

impl Parameters {
    /// Loads parameters from a JSON file. Missing fields take their defaults.
    pub fn load(path: &str) -> Result<Parameters> {
        let params: Parameters = abstutil::read_json(path)?;
        for problem in params.out_of_range() {
            warn!("{}: {}", path, problem);
        }
        Ok(params)
    }

    /// Describes every value outside the range the panel would offer.
    pub fn out_of_range(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut check = |name: &str, value: f64, range: &RangeInclusive<f64>| {
            if !range.contains(&value) {
                problems.push(format!(
                    "{} = {} is outside [{}, {}]; keeping it anyway",
                    name,
                    value,
                    range.start(),
                    range.end()
                ));
            }
        };
        check(
            "angle_of_intersection",
            self.angle_of_intersection,
            &INTERSECTION_ANGLE_RANGE,
        );
        check(
            "blindspot_leading_angle",
            self.blindspot_leading_angle,
            &CONE_ANGLE_RANGE,
        );
        check(
            "blindspot_trailing_angle",
            self.blindspot_trailing_angle,
            &CONE_ANGLE_RANGE,
        );
        check(
            "car_start_distance",
            self.car_start_distance.inner_meters(),
            &START_DISTANCE_RANGE,
        );
        check(
            "car_speed",
            self.car_speed.inner_meters_per_second(),
            &SPEED_RANGE,
        );
        problems
    }

    /// Merges the present fields of an update. Non-finite values can't describe any geometry, so
    /// they're dropped with a warning; everything else is taken as-is.
    pub fn apply(&mut self, update: &ParameterUpdate) -> ParameterChanges {
        let mut changes = ParameterChanges::default();

        if let Some(x) = finite("angle_of_intersection", update.angle_of_intersection) {
            changes.geometry |= x != self.angle_of_intersection;
            self.angle_of_intersection = x;
        }
        if let Some(x) = finite("blindspot_leading_angle", update.blindspot_leading_angle) {
            changes.geometry |= x != self.blindspot_leading_angle;
            self.blindspot_leading_angle = x;
        }
        if let Some(x) = finite("blindspot_trailing_angle", update.blindspot_trailing_angle) {
            changes.geometry |= x != self.blindspot_trailing_angle;
            self.blindspot_trailing_angle = x;
        }
        if let Some(x) = finite("car_start_distance", update.car_start_distance) {
            let x = Distance::meters(x);
            changes.start_distance |= x != self.car_start_distance;
            self.car_start_distance = x;
        }
        if let Some(x) = finite("car_speed", update.car_speed) {
            self.car_speed = Speed::meters_per_second(x);
        }

        for problem in self.out_of_range() {
            warn!("{}", problem);
        }
        changes
    }
}

fn finite(name: &str, value: Option<f64>) -> Option<f64> {
    let value = value?;
    if value.is_finite() {
        Some(value)
    } else {
        warn!("Ignoring {} = {}", name, value);
        None
    }
}

/// A partial change to `Parameters`, as sent by the panel when one slider moves. Units match the
/// panel: degrees, meters, and meters per second.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle_of_intersection: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blindspot_leading_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blindspot_trailing_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_start_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_speed: Option<f64>,
}

impl ParameterUpdate {
    pub fn is_empty(&self) -> bool {
        self == &ParameterUpdate::default()
    }
}

/// What a merged `ParameterUpdate` actually changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParameterChanges {
    /// One of the angles moved, so the shadow must be recomputed.
    pub geometry: bool,
    /// The starting distance moved. A paused car follows it.
    pub start_distance: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = Parameters::default();
        assert_eq!(p.angle_of_intersection, 69.0);
        assert_eq!(p.blindspot_leading_angle, 19.4);
        assert_eq!(p.blindspot_trailing_angle, 27.1);
        assert_eq!(p.car_start_distance, Distance::meters(100.0));
        assert_eq!(p.car_speed, Speed::meters_per_second(18.0));
        assert!(p.out_of_range().is_empty());
    }

    #[test]
    fn merge_only_present_fields() {
        let mut p = Parameters::default();
        let changes = p.apply(&ParameterUpdate {
            blindspot_trailing_angle: Some(30.0),
            ..Default::default()
        });
        assert_eq!(
            changes,
            ParameterChanges {
                geometry: true,
                start_distance: false,
            }
        );
        assert_eq!(p.blindspot_trailing_angle, 30.0);
        assert_eq!(p.angle_of_intersection, 69.0);
        assert_eq!(p.blindspot_leading_angle, 19.4);

        // Same value again isn't a change
        let changes = p.apply(&ParameterUpdate {
            blindspot_trailing_angle: Some(30.0),
            car_speed: Some(5.0),
            ..Default::default()
        });
        assert_eq!(changes, ParameterChanges::default());
        assert_eq!(p.car_speed, Speed::meters_per_second(5.0));
    }

    #[test]
    fn out_of_range_is_kept() {
        let mut p = Parameters::default();
        p.apply(&ParameterUpdate {
            angle_of_intersection: Some(200.0),
            blindspot_leading_angle: Some(-5.0),
            car_start_distance: Some(5000.0),
            ..Default::default()
        });
        assert_eq!(p.angle_of_intersection, 200.0);
        assert_eq!(p.blindspot_leading_angle, -5.0);
        assert_eq!(p.car_start_distance, Distance::meters(5000.0));
        assert_eq!(p.out_of_range().len(), 3);
    }

    #[test]
    fn non_finite_is_dropped() {
        let mut p = Parameters::default();
        let changes = p.apply(&ParameterUpdate {
            angle_of_intersection: Some(f64::NAN),
            car_start_distance: Some(f64::INFINITY),
            ..Default::default()
        });
        assert_eq!(changes, ParameterChanges::default());
        assert_eq!(p, Parameters::default());
    }

    #[test]
    fn partial_json() {
        let p: Parameters =
            abstutil::from_json(r#"{ "angle_of_intersection": 90.0, "car_speed": 7.5 }"#).unwrap();
        assert_eq!(p.angle_of_intersection, 90.0);
        assert_eq!(p.car_speed, Speed::meters_per_second(7.5));
        assert_eq!(p.car_start_distance, Distance::meters(100.0));

        let update: ParameterUpdate = abstutil::from_json(r#"{ "car_speed": 3.0 }"#).unwrap();
        assert_eq!(update.car_speed, Some(3.0));
        assert!(update.angle_of_intersection.is_none());
        assert!(!update.is_empty());
        assert_eq!(abstutil::to_json(&ParameterUpdate::default()), "{}");
    }
}
