use instant::Instant;

use geom::Duration;

use crate::{SceneAdapter, Script, Simulation};

/// How often the real-time loop aims to produce a frame, about 60 per second.
pub const UPDATE_FREQUENCY: std::time::Duration = std::time::Duration::from_millis(1000 / 60);

/// Decides when the next frame happens. Something invoked once per display refresh, whether
/// that's a thread sleeping at a fixed rate, a platform event loop, or a test.
pub trait FrameSource {
    /// Blocks until the next frame is due, then returns the time since the previous one. `None`
    /// means stop.
    fn next_frame(&mut self) -> Option<Duration>;
}

/// Real time: sleeps between frames and measures how long actually passed.
pub struct FixedRate {
    period: std::time::Duration,
    last_frame: Option<Instant>,
    frames_left: Option<usize>,
}

impl FixedRate {
    /// Runs forever if `max_frames` is `None`.
    pub fn new(period: std::time::Duration, max_frames: Option<usize>) -> FixedRate {
        FixedRate {
            period,
            last_frame: None,
            frames_left: max_frames,
        }
    }
}

impl FrameSource for FixedRate {
    fn next_frame(&mut self) -> Option<Duration> {
        if let Some(ref mut n) = self.frames_left {
            if *n == 0 {
                return None;
            }
            *n -= 1;
        }

        let dt = match self.last_frame {
            // The first frame draws the initial state
            None => Duration::ZERO,
            Some(last) => {
                // Measure from when the last frame started, so slow frames don't push every
                // later frame back.
                let deadline = last + self.period;
                let now = Instant::now();
                if deadline > now {
                    std::thread::sleep(deadline - now);
                }
                Duration::from_std(last.elapsed())
            }
        };
        self.last_frame = Some(Instant::now());
        Some(dt)
    }
}

/// Simulated time: every frame is exactly `dt` after the previous one, and nothing sleeps. Runs
/// are reproducible.
pub struct FixedStep {
    dt: Duration,
    frames_left: usize,
    first: bool,
}

impl FixedStep {
    pub fn new(dt: Duration, frames: usize) -> FixedStep {
        FixedStep {
            dt,
            frames_left: frames,
            first: true,
        }
    }
}

impl FrameSource for FixedStep {
    fn next_frame(&mut self) -> Option<Duration> {
        if self.frames_left == 0 {
            return None;
        }
        self.frames_left -= 1;
        if self.first {
            self.first = false;
            return Some(Duration::ZERO);
        }
        Some(self.dt)
    }
}

/// What happened during `run`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub frames: usize,
    /// The sum of every frame's dt, whether or not the clock was running.
    pub wall_time: Duration,
}

/// The frame loop: wait for the next frame, step the simulation, and hand the result to the
/// scene. Panel commands that come due are applied between frames, so they show up in the next
/// one. Repeats until the source runs out.
pub fn run(
    sim: &mut Simulation,
    source: &mut dyn FrameSource,
    scene: &mut dyn SceneAdapter,
    script: &mut Script,
) -> RunSummary {
    let mut summary = RunSummary {
        frames: 0,
        wall_time: Duration::ZERO,
    };
    while let Some(dt) = source.next_frame() {
        summary.wall_time += dt;
        let frame = sim.on_frame(dt);
        scene.render(&frame);
        summary.frames += 1;
        script.apply_due(summary.wall_time, sim);
    }
    info!(
        "Ran {} frames over {}; simulated {}",
        summary.frames,
        summary.wall_time,
        sim.clock().elapsed()
    );
    summary
}
