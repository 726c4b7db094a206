use std::{f64, fmt, ops};

use serde::{Deserialize, Serialize};

/// An angle, stored in radians. Unlike a heading, this is never normalized: 180 degrees stays
/// 180 degrees, which matters when it's the angle between two roads.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64);

impl Angle {
    pub const STRAIGHT: Angle = Angle(f64::consts::PI);

    /// Create an angle in radians.
    pub fn radians(rads: f64) -> Angle {
        if !rads.is_finite() {
            panic!("Bad Angle {}", rads);
        }
        Angle(rads)
    }

    /// Create an angle in degrees.
    pub fn degrees(degs: f64) -> Angle {
        Angle::radians(degs.to_radians())
    }

    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}°", (self.to_degrees() * 10.0).round() / 10.0)
    }
}

impl ops::Add for Angle {
    type Output = Angle;

    fn add(self, other: Angle) -> Angle {
        Angle::radians(self.0 + other.0)
    }
}

impl ops::Sub for Angle {
    type Output = Angle;

    fn sub(self, other: Angle) -> Angle {
        Angle::radians(self.0 - other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_are_not_normalized() {
        assert!((Angle::degrees(180.0) - Angle::STRAIGHT).to_degrees().abs() < 1e-9);
        assert_eq!(Angle::degrees(0.0).sin(), 0.0);
        assert!((Angle::degrees(-30.0).to_degrees() + 30.0).abs() < 1e-9);
        assert!((Angle::degrees(400.0).to_degrees() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn display() {
        assert_eq!(Angle::degrees(19.4).to_string(), "19.4°");
    }
}
