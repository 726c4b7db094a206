use geom::{Angle, Distance, Duration};

use crate::{
    BlindspotModel, ClockState, ParameterChanges, ParameterUpdate, Parameters, SceneFrame,
    SimulationClock,
};

/// One car approaching one intersection. Owns the model and the clock, and implements the actions
/// the panel exposes. Whatever runs the frame loop holds this and calls `on_frame`.
pub struct Simulation {
    model: BlindspotModel,
    clock: SimulationClock,
}

impl Simulation {
    pub fn new(params: Parameters) -> Simulation {
        Simulation {
            model: BlindspotModel::new(params),
            clock: SimulationClock::new(),
        }
    }

    pub fn model(&self) -> &BlindspotModel {
        &self.model
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Merges a partial update from the panel. Moving the starting distance also moves the car,
    /// unless it's currently driving.
    pub fn set_parameters(&mut self, update: &ParameterUpdate) -> ParameterChanges {
        let changes = self.model.set_parameters(update);
        if changes.start_distance {
            let start = self.model.parameters().car_start_distance;
            self.model.set_car_position(start, &self.clock);
        }
        changes
    }

    /// Ignored while running.
    pub fn set_car_position(&mut self, distance: Distance) {
        self.model.set_car_position(distance, &self.clock);
    }

    pub fn toggle_run(&mut self) -> ClockState {
        let state = self.clock.toggle_run();
        info!("Clock is now {:?}", state);
        state
    }

    /// Puts every parameter back to its default, then replays.
    pub fn reset(&mut self) {
        info!("Resetting all parameters");
        self.model.replace_parameters(Parameters::default());
        self.replay();
    }

    /// Sends the car back to its starting distance and pauses. Parameters are untouched.
    pub fn replay(&mut self) {
        self.clock.reset();
        let start = self.model.parameters().car_start_distance;
        self.model.move_car(start);
    }

    /// Handles one frame, `dt` after the previous one, and returns what to draw.
    pub fn on_frame(&mut self, dt: Duration) -> SceneFrame {
        self.clock.advance(dt, &mut self.model);
        self.frame()
    }

    /// What to draw right now.
    pub fn frame(&self) -> SceneFrame {
        SceneFrame {
            time: self.clock.elapsed(),
            state: self.clock.state(),
            car_position: self.model.car().position_along_road,
            crossing_road_angle: Angle::degrees(self.model.parameters().angle_of_intersection),
            triangle: self.model.current_triangle(),
            shadow_visible: self.model.shadow_visible(),
            blinders: self.model.blinder_posts(),
        }
    }
}

impl Default for Simulation {
    fn default() -> Simulation {
        Simulation::new(Parameters::default())
    }
}
