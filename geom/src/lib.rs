//! Typed units and points for the blind-spot simulation. Everything here is plain data with no
//! knowledge of cars or roads.

pub use crate::angle::Angle;
pub use crate::distance::Distance;
pub use crate::duration::Duration;
pub use crate::pt::Pt3D;
pub use crate::speed::Speed;
pub use crate::units::UnitFmt;

mod angle;
mod distance;
mod duration;
mod pt;
mod speed;
mod units;

// About 0.1 mm. Used to compare geometry coming out of trig.
pub const EPSILON_DIST: Distance = Distance::const_meters(0.0001);
