use serde::{Deserialize, Serialize};

use geom::{Distance, Pt3D};

use crate::edge::{
    blinder_posts, blindspot_edge, shadow_visible, BlinderPosts, EdgeKind, BLINDER_SCALE,
};
use crate::{ParameterChanges, ParameterUpdate, Parameters, SimulationClock, SHADOW_HEIGHT};

/// Where the car is along its road. The intersection is at zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarState {
    pub position_along_road: Distance,
}

/// The shadow of the blind spot on the crossing road. Every vertex hovers at `SHADOW_HEIGHT`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlindspotTriangle {
    /// At the car.
    pub origin: Pt3D,
    /// Where the leading edge meets the crossing road.
    pub leading: Pt3D,
    /// Where the trailing edge meets the crossing road.
    pub trailing: Pt3D,
}

impl BlindspotTriangle {
    /// The shadow for a car at some distance from the intersection.
    pub fn compute(params: &Parameters, car_distance: Distance) -> BlindspotTriangle {
        let lead = blindspot_edge(
            car_distance,
            params.blindspot_leading_angle,
            params.angle_of_intersection,
            EdgeKind::Leading,
        );
        let trail = blindspot_edge(
            car_distance,
            params.blindspot_trailing_angle,
            params.angle_of_intersection,
            EdgeKind::Trailing,
        );
        BlindspotTriangle {
            origin: Pt3D::from_dists(Distance::ZERO, SHADOW_HEIGHT, car_distance),
            leading: lead.to_pt(),
            trailing: trail.to_pt(),
        }
    }

    pub fn vertices(&self) -> [Pt3D; 3] {
        [self.origin, self.leading, self.trailing]
    }

    /// True when all three vertices coincide, like when the car reaches the intersection.
    pub fn is_collapsed(&self) -> bool {
        self.origin.approx_eq(self.leading) && self.origin.approx_eq(self.trailing)
    }
}

/// Owns the tunable parameters and the car, and keeps the shadow consistent with both. Every
/// mutation recomputes the triangle, so `current_triangle` is always up-to-date.
pub struct BlindspotModel {
    params: Parameters,
    car: CarState,
    triangle: BlindspotTriangle,
}

impl BlindspotModel {
    /// Starts with the car at `car_start_distance`.
    pub fn new(params: Parameters) -> BlindspotModel {
        let car = CarState {
            position_along_road: params.car_start_distance,
        };
        let triangle = BlindspotTriangle::compute(&params, car.position_along_road);
        BlindspotModel {
            params,
            car,
            triangle,
        }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn car(&self) -> CarState {
        self.car
    }

    /// Merges a partial update, then recomputes if any angle changed. This doesn't move the car;
    /// see `Simulation::set_parameters` for the panel's behavior.
    pub fn set_parameters(&mut self, update: &ParameterUpdate) -> ParameterChanges {
        let changes = self.params.apply(update);
        if changes.geometry {
            self.recompute();
        }
        changes
    }

    /// Replaces every parameter at once.
    pub fn replace_parameters(&mut self, params: Parameters) {
        self.params = params;
        self.recompute();
    }

    /// Moves the car, but only while the clock is paused. A moving car can't be repositioned;
    /// those attempts are quietly dropped.
    pub fn set_car_position(&mut self, distance: Distance, clock: &SimulationClock) {
        if clock.is_running() {
            debug!("Ignoring car position {} while running", distance);
            return;
        }
        self.move_car(distance);
    }

    /// Moves the car regardless of the clock. The clock and replay use this.
    pub(crate) fn move_car(&mut self, distance: Distance) {
        self.car.position_along_road = distance;
        self.recompute();
    }

    /// Recalculates the shadow from the current parameters and car. Calling this twice without
    /// changing anything gives the exact same triangle.
    pub fn recompute(&mut self) -> BlindspotTriangle {
        self.triangle = BlindspotTriangle::compute(&self.params, self.car.position_along_road);
        self.triangle
    }

    pub fn current_triangle(&self) -> BlindspotTriangle {
        self.triangle
    }

    /// See `edge::shadow_visible`.
    pub fn shadow_visible(&self) -> bool {
        shadow_visible(
            self.car.position_along_road,
            self.params.blindspot_leading_angle,
            self.params.angle_of_intersection,
        )
    }

    /// The blinder posts in world-space, at the car's current position.
    pub fn blinder_posts(&self) -> BlinderPosts {
        blinder_posts(
            self.params.blindspot_leading_angle,
            self.params.blindspot_trailing_angle,
            BLINDER_SCALE,
        )
        .shifted(self.car.position_along_road.inner_meters())
    }
}

impl Default for BlindspotModel {
    fn default() -> BlindspotModel {
        BlindspotModel::new(Parameters::default())
    }
}
