//! The blind-spot shadow of a car approaching an intersection.
//!
//! A driver can't see through the cone between two rays fixed to the car (the "leading" and
//! "trailing" edges, think of an A-pillar). Where that cone lands on the crossing road is the
//! shadow: a triangle with one vertex at the car and one where each edge meets the crossing road.
//!
//! - `edge` has the pure trigonometry.
//! - `BlindspotModel` owns the parameters and the car, and keeps the triangle up-to-date.
//! - `SimulationClock` moves the car toward the intersection while running.
//! - `Simulation` ties those together with the panel actions (reset, replay, play/pause).
//! - `SceneAdapter` is the seam to whatever draws the result, and `runner` drives frames.

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

pub use crate::clock::{ClockState, SimulationClock};
pub use crate::edge::{
    blinder_posts, blindspot_edge, shadow_visible, BlinderPosts, EdgeKind, EdgeOffsets,
    BLINDER_SCALE, SENTINEL_EDGE_DISTANCE, SHADOW_HEIGHT,
};
pub use crate::model::{BlindspotModel, BlindspotTriangle, CarState};
pub use crate::panel::{PanelCommand, Script, ScriptEntry};
pub use crate::params::{ParameterChanges, ParameterUpdate, Parameters};
pub use crate::runner::{run, FixedRate, FixedStep, FrameSource, RunSummary, UPDATE_FREQUENCY};
pub use crate::scene::{LoggingScene, RecordingScene, SceneAdapter, SceneFrame};
pub use crate::sim::Simulation;

mod clock;
pub mod edge;
mod model;
mod panel;
mod params;
mod runner;
mod scene;
mod sim;
