//! Pure trigonometry for the blind-spot shadow. Nothing here has state.
//!
//! Picture the car's road along the z axis with the intersection at `z = 0` and the car at
//! `z = car_distance`, facing toward the intersection. The crossing road passes through the
//! intersection at `intersection_angle` to the car's road. Each edge of the blind-spot cone leaves
//! the car at `cone_angle` from the car's forward axis. The car, the intersection, and the point
//! where an edge meets the crossing road form a triangle, and the law of sines gives the length
//! of the edge:
//!
//! ```text
//! edge_distance / sin(intersection_angle) = car_distance / sin(180 - (cone_angle + intersection_angle))
//! ```

use serde::{Deserialize, Serialize};

use geom::{Angle, Distance, Pt3D};

/// The shadow floats this far above the road, so it doesn't fight with the road surface.
pub const SHADOW_HEIGHT: Distance = Distance::const_meters(0.1);
/// Stands in for an edge that never reaches the crossing road. It's far past anything drawn, but
/// still finite.
pub const SENTINEL_EDGE_DISTANCE: Distance = Distance::const_meters(100_000.0);
/// How far from the car the blinder posts are drawn.
pub const BLINDER_SCALE: Distance = Distance::const_meters(2.195);

// Below this, sin(180 - (cone + intersection)) is treated as zero.
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Which ray bounding the blind-spot cone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    Leading,
    Trailing,
}

/// Where one edge of the cone meets the crossing road.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeOffsets {
    /// From the car, along the edge, to the crossing road.
    pub edge_distance: Distance,
    /// Across the car's road.
    pub lateral: Distance,
    /// Along the car's road, measured from the intersection like the car's own position.
    pub longitudinal: Distance,
}

impl EdgeOffsets {
    /// The vertex of the shadow for this edge.
    pub fn to_pt(&self) -> Pt3D {
        Pt3D::from_dists(self.lateral, SHADOW_HEIGHT, self.longitudinal)
    }
}

/// Computes where one edge of the blind-spot cone meets the crossing road. Both angles are in
/// degrees.
///
/// When the geometry has no finite answer, the edge gets `SENTINEL_EDGE_DISTANCE` instead:
///
/// - The trailing edge points away from the crossing road whenever
///   `180 - intersection_angle < cone_angle`.
/// - Either edge runs parallel to the crossing road when `cone_angle + intersection_angle` is 0 or
///   180.
/// - Either edge's offsets overflow, which only happens absurdly far from the intersection.
///
/// The leading edge has no equivalent of the first rule. When it points away from the road, the
/// law of sines gives a negative distance and the vertex lands behind the car. Callers that care
/// should check `shadow_visible`.
pub fn blindspot_edge(
    car_distance: Distance,
    cone_angle: f64,
    intersection_angle: f64,
    kind: EdgeKind,
) -> EdgeOffsets {
    let theta = Angle::degrees(cone_angle);
    let alpha = Angle::degrees(intersection_angle);
    let car = car_distance.inner_meters();

    let edge = if car == 0.0 {
        // The car sits on the crossing road, so every ray meets it right at the car.
        Some(0.0)
    } else if kind == EdgeKind::Trailing && 180.0 - intersection_angle < cone_angle {
        None
    } else {
        law_of_sines(car, theta, alpha)
    };

    edge.and_then(|edge| offsets(car, edge, theta))
        .unwrap_or_else(|| sentinel_offsets(car, theta))
}

fn law_of_sines(car: f64, theta: Angle, alpha: Angle) -> Option<f64> {
    let numerator = car * alpha.sin();
    let denominator = (Angle::STRAIGHT - (theta + alpha)).sin();
    if denominator.abs() < DEGENERATE_EPSILON {
        return None;
    }
    let dist = numerator / denominator;
    if dist.is_finite() {
        Some(dist)
    } else {
        None
    }
}

fn offsets(car: f64, edge: f64, theta: Angle) -> Option<EdgeOffsets> {
    let lateral = edge * theta.sin();
    let longitudinal = car - edge * theta.cos();
    if !lateral.is_finite() || !longitudinal.is_finite() {
        return None;
    }
    Some(EdgeOffsets {
        edge_distance: Distance::meters(edge),
        lateral: Distance::meters(lateral),
        longitudinal: Distance::meters(longitudinal),
    })
}

// The sentinel is small enough that this never overflows, even for the largest finite car
// distance.
fn sentinel_offsets(car: f64, theta: Angle) -> EdgeOffsets {
    let edge = SENTINEL_EDGE_DISTANCE.inner_meters();
    EdgeOffsets {
        edge_distance: SENTINEL_EDGE_DISTANCE,
        lateral: SENTINEL_EDGE_DISTANCE * theta.sin(),
        longitudinal: Distance::meters(car - edge * theta.cos()),
    }
}

/// Whether the shadow is worth drawing at all: not once the car is past the intersection, and not
/// when the leading edge points away from the crossing road. Angles are in degrees.
pub fn shadow_visible(car_distance: Distance, leading_angle: f64, intersection_angle: f64) -> bool {
    car_distance >= Distance::ZERO && 180.0 - intersection_angle >= leading_angle
}

/// The ground footprints of the posts marking the cone, relative to the car. The car is
/// symmetric, so there's a pair on each side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlinderPosts {
    /// `[leading, trailing]`, with positive x.
    pub right: [Pt3D; 2],
    /// The right pair, mirrored across the car's road.
    pub left: [Pt3D; 2],
}

impl BlinderPosts {
    /// Moves every post along the car's road.
    pub fn shifted(&self, dz: f64) -> BlinderPosts {
        let shift =
            |[lead, trail]: [Pt3D; 2]| [lead.offset(0.0, 0.0, dz), trail.offset(0.0, 0.0, dz)];
        BlinderPosts {
            right: shift(self.right),
            left: shift(self.left),
        }
    }
}

/// Places the blinder posts `scale` away from the car, along each edge of the cone. Angles are in
/// degrees.
pub fn blinder_posts(leading_angle: f64, trailing_angle: f64, scale: Distance) -> BlinderPosts {
    let post = |degrees: f64, side: f64| {
        let theta = Angle::degrees(degrees);
        Pt3D::from_dists(scale * (side * theta.sin()), Distance::ZERO, -(scale * theta.cos()))
    };
    BlinderPosts {
        right: [post(leading_angle, 1.0), post(trailing_angle, 1.0)],
        left: [post(leading_angle, -1.0), post(trailing_angle, -1.0)],
    }
}
