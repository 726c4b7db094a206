use serde::{Deserialize, Serialize};

use geom::{Distance, Duration};

use crate::BlindspotModel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockState {
    Paused,
    Running,
}

/// Drives the car toward the intersection while running. Elapsed time only accumulates while
/// running; pausing freezes it, and resuming carries on from there.
pub struct SimulationClock {
    state: ClockState,
    elapsed: Duration,
}

impl SimulationClock {
    pub fn new() -> SimulationClock {
        SimulationClock {
            state: ClockState::Paused,
            elapsed: Duration::ZERO,
        }
    }

    /// Flips between paused and running, returning the new state.
    pub fn toggle_run(&mut self) -> ClockState {
        self.state = match self.state {
            ClockState::Paused => ClockState::Running,
            ClockState::Running => ClockState::Paused,
        };
        self.state
    }

    pub fn pause(&mut self) {
        self.state = ClockState::Paused;
    }

    /// Pauses and forgets all elapsed time.
    pub fn reset(&mut self) {
        self.state = ClockState::Paused;
        self.elapsed = Duration::ZERO;
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Simulated time spent running.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Accounts for `dt` of real time since the last frame. While running, the car moves
    /// `dt * car_speed` closer to the intersection, stopping right at it. The clock keeps running
    /// after the car stops.
    ///
    /// Returns true if the car moved.
    pub fn advance(&mut self, dt: Duration, model: &mut BlindspotModel) -> bool {
        if !self.is_running() || dt <= Duration::ZERO {
            return false;
        }
        self.elapsed += dt;

        let old = model.car().position_along_road;
        let step = model.parameters().car_speed.inner_meters_per_second() * dt.inner_seconds();
        let moved = old.inner_meters() - step;
        let new = if moved.is_finite() {
            Distance::meters(moved.max(0.0))
        } else if moved < 0.0 {
            // Overshot by more than a float can hold; still just stops at the intersection
            Distance::ZERO
        } else {
            // A huge negative speed can't drive off to infinity
            old
        };
        if new == old {
            return false;
        }
        model.move_car(new);
        if new == Distance::ZERO {
            info!("Car reached the intersection after {}", self.elapsed);
        }
        true
    }
}

impl Default for SimulationClock {
    fn default() -> SimulationClock {
        SimulationClock::new()
    }
}

#[cfg(test)]
mod tests {
    use geom::Speed;

    use super::*;
    use crate::{ParameterUpdate, Parameters};

    #[test]
    fn paused_clock_does_nothing() {
        let mut model = BlindspotModel::default();
        let mut clock = SimulationClock::new();
        assert!(!clock.advance(Duration::seconds(5.0), &mut model));
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(model.car().position_along_road, Distance::meters(100.0));
    }

    #[test]
    fn toggle() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.state(), ClockState::Paused);
        assert_eq!(clock.toggle_run(), ClockState::Running);
        assert!(clock.is_running());
        assert_eq!(clock.toggle_run(), ClockState::Paused);
        clock.toggle_run();
        clock.pause();
        assert!(!clock.is_running());
    }

    #[test]
    fn negative_dt_is_ignored() {
        let mut model = BlindspotModel::default();
        let mut clock = SimulationClock::new();
        clock.toggle_run();
        assert!(!clock.advance(Duration::seconds(-1.0), &mut model));
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }

    #[test]
    fn keeps_running_at_the_intersection() {
        let mut model = BlindspotModel::default();
        let mut clock = SimulationClock::new();
        clock.toggle_run();
        clock.advance(Duration::seconds(10.0), &mut model);
        assert_eq!(model.car().position_along_road, Distance::ZERO);
        assert!(clock.is_running());

        // Time still passes, but the car stays put
        assert!(!clock.advance(Duration::seconds(1.0), &mut model));
        assert_eq!(clock.elapsed(), Duration::seconds(11.0));
        assert_eq!(model.car().position_along_road, Distance::ZERO);
    }

    #[test]
    fn absurd_speed_stops_at_the_intersection() {
        let mut model = BlindspotModel::default();
        model.set_parameters(&ParameterUpdate {
            car_speed: Some(1e308),
            ..Default::default()
        });
        let mut clock = SimulationClock::new();
        clock.toggle_run();
        assert!(clock.advance(Duration::seconds(2.0), &mut model));
        assert_eq!(model.car().position_along_road, Distance::ZERO);
    }

    #[test]
    fn absurd_reverse_speed_stays_put() {
        let mut model = BlindspotModel::new(Parameters {
            car_start_distance: Distance::meters(1e308),
            car_speed: Speed::meters_per_second(-1e308),
            ..Default::default()
        });
        let mut clock = SimulationClock::new();
        clock.toggle_run();
        assert!(!clock.advance(Duration::seconds(2.0), &mut model));
        assert_eq!(model.car().position_along_road, Distance::meters(1e308));
    }

    #[test]
    fn reset_forgets_time() {
        let mut model = BlindspotModel::default();
        let mut clock = SimulationClock::new();
        clock.toggle_run();
        clock.advance(Duration::seconds(1.0), &mut model);
        clock.reset();
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(clock.state(), ClockState::Paused);
    }
}
