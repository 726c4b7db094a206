use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Distance, EPSILON_DIST};

/// A point in world-space, in meters. `x` runs across the car's road, `y` is height above the
/// ground, and `z` runs along the car's road with the intersection at `z = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pt3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Pt3D {
    pub fn new(x: f64, y: f64, z: f64) -> Pt3D {
        if !x.is_finite() || !y.is_finite() || !z.is_finite() {
            panic!("Bad Pt3D {}, {}, {}", x, y, z);
        }

        Pt3D { x, y, z }
    }

    /// Builds a point from typed offsets.
    pub fn from_dists(x: Distance, y: Distance, z: Distance) -> Pt3D {
        Pt3D::new(x.inner_meters(), y.inner_meters(), z.inner_meters())
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Pt3D {
        Pt3D::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// True if the two points are within `EPSILON_DIST` of each other. Points too far apart for
    /// their distance to fit in an f64 are just unequal.
    pub fn approx_eq(&self, other: Pt3D) -> bool {
        let dist = (other.x - self.x)
            .hypot(other.y - self.y)
            .hypot(other.z - self.z);
        dist <= EPSILON_DIST.inner_meters()
    }
}

impl fmt::Display for Pt3D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pt3D({0}, {1}, {2})", self.x, self.y, self.z)
    }
}
