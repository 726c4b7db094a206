//! Runs the blind-spot simulation without a window. Every frame goes to the log, and optionally
//! to a JSON recording.

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

use anyhow::Result;
use structopt::StructOpt;

use abstutil::Timer;
use blindspot::{
    blindspot_edge, run, EdgeKind, FixedRate, FixedStep, FrameSource, LoggingScene,
    ParameterUpdate, Parameters, RecordingScene, Script, Simulation, UPDATE_FREQUENCY,
};
use geom::{Distance, Duration, UnitFmt};

#[derive(StructOpt)]
#[structopt(name = "headless", about = "Blind-spot shadows at an intersection, without the window")]
enum Command {
    /// Drive the car toward the intersection, logging the shadow every frame
    Run {
        #[structopt(flatten)]
        params: ParamFlags,
        /// Start with the clock running, instead of paused
        #[structopt(long)]
        run: bool,
        /// How many frames to produce
        #[structopt(long, default_value = "600")]
        frames: usize,
        /// Frames per second. Defaults to about 60.
        #[structopt(long)]
        fps: Option<f64>,
        /// Don't sleep between frames; pretend exactly 1/fps seconds pass each frame
        #[structopt(long)]
        fixed_step: bool,
        /// A JSON list of timed panel commands to play during the run
        #[structopt(long)]
        script: Option<String>,
        /// Save every frame to this JSON file
        #[structopt(long)]
        record: Option<String>,
        /// Describe distances in feet and miles
        #[structopt(long)]
        imperial: bool,
    },
    /// Print where both edges of the blind spot meet the crossing road, for the car at one spot
    Edge {
        #[structopt(flatten)]
        params: ParamFlags,
        /// The car's distance from the intersection, in meters. Defaults to the starting distance.
        #[structopt(long)]
        car_distance: Option<f64>,
    },
    /// Print the default parameters as JSON, as a starting point for --params
    Defaults,
}

#[derive(StructOpt)]
struct ParamFlags {
    /// Load parameters from this JSON file. Missing fields use defaults.
    #[structopt(long)]
    params: Option<String>,
    /// Degrees between the two roads [0, 180]
    #[structopt(long)]
    angle_of_intersection: Option<f64>,
    /// Degrees from forward to the leading edge of the blind spot [0, 45]
    #[structopt(long)]
    leading_angle: Option<f64>,
    /// Degrees from forward to the trailing edge of the blind spot [0, 45]
    #[structopt(long)]
    trailing_angle: Option<f64>,
    /// Meters from the intersection to start the car [0, 1000]
    #[structopt(long)]
    car_start_distance: Option<f64>,
    /// Meters per second [0, 100]
    #[structopt(long)]
    car_speed: Option<f64>,
}

impl ParamFlags {
    /// The file (or defaults), then any individual flags on top.
    fn load(&self) -> Result<Parameters> {
        let mut params = match self.params {
            Some(ref path) => Parameters::load(path)?,
            None => Parameters::default(),
        };
        let overrides = ParameterUpdate {
            angle_of_intersection: self.angle_of_intersection,
            blindspot_leading_angle: self.leading_angle,
            blindspot_trailing_angle: self.trailing_angle,
            car_start_distance: self.car_start_distance,
            car_speed: self.car_speed,
        };
        if !overrides.is_empty() {
            params.apply(&overrides);
        }
        Ok(params)
    }
}

fn main() -> Result<()> {
    abstutil::logger::setup();

    match Command::from_args() {
        Command::Run {
            params,
            run: start_running,
            frames,
            fps,
            fixed_step,
            script,
            record,
            imperial,
        } => {
            let mut sim = Simulation::new(params.load()?);
            if start_running {
                sim.toggle_run();
            }
            let mut script = match script {
                Some(path) => Script::load(&path)?,
                None => Script::empty(),
            };
            let mut source = frame_source(fps, frames, fixed_step)?;
            let fmt = if imperial {
                UnitFmt::imperial()
            } else {
                UnitFmt::metric()
            };

            let mut timer = Timer::new("headless run");
            timer.start("frames");
            let mut scenes = (LoggingScene::new(fmt), RecordingScene::new());
            run(&mut sim, source.as_mut(), &mut scenes, &mut script);
            if !script.is_done() {
                warn!("The run ended before every scripted command fired");
            }
            if let Some(path) = record {
                timer.start(format!("saving {}", path));
                scenes.1.save(&path)?;
            }
            timer.done();
        }
        Command::Edge {
            params,
            car_distance,
        } => {
            let params = params.load()?;
            let car = match car_distance {
                Some(x) if x.is_finite() => Distance::meters(x),
                Some(x) => bail!("--car-distance {} isn't a real distance", x),
                None => params.car_start_distance,
            };
            for (kind, cone) in [
                (EdgeKind::Leading, params.blindspot_leading_angle),
                (EdgeKind::Trailing, params.blindspot_trailing_angle),
            ] {
                let edge = blindspot_edge(car, cone, params.angle_of_intersection, kind);
                println!(
                    "{:?} edge at {} degrees: {} along the edge, vertex at {}",
                    kind,
                    cone,
                    edge.edge_distance,
                    edge.to_pt()
                );
            }
        }
        Command::Defaults => {
            println!("{}", abstutil::to_json(&Parameters::default()));
        }
    }
    Ok(())
}

fn frame_source(
    fps: Option<f64>,
    frames: usize,
    fixed_step: bool,
) -> Result<Box<dyn FrameSource>> {
    let period = match fps {
        Some(fps) if fps.is_finite() && fps > 0.0 => std::time::Duration::from_secs_f64(1.0 / fps),
        Some(fps) => bail!("--fps must be positive, not {}", fps),
        None => UPDATE_FREQUENCY,
    };
    if fixed_step {
        Ok(Box::new(FixedStep::new(Duration::from_std(period), frames)))
    } else {
        Ok(Box::new(FixedRate::new(period, Some(frames))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_file() {
        let cmd = Command::from_iter(vec![
            "headless",
            "edge",
            "--angle-of-intersection",
            "90",
            "--trailing-angle",
            "45",
        ]);
        let params = match cmd {
            Command::Edge { params, .. } => params.load().unwrap(),
            _ => unreachable!(),
        };
        assert_eq!(params.angle_of_intersection, 90.0);
        assert_eq!(params.blindspot_trailing_angle, 45.0);
        assert_eq!(params.blindspot_leading_angle, 19.4);
    }

    #[test]
    fn bad_fps() {
        assert!(frame_source(Some(0.0), 10, true).is_err());
        assert!(frame_source(Some(-30.0), 10, false).is_err());
        assert!(frame_source(Some(30.0), 10, true).is_ok());
        assert!(frame_source(None, 10, true).is_ok());
    }

    #[test]
    fn fixed_step_run() {
        let cmd = Command::from_iter(vec!["headless", "run", "--run", "--fixed-step", "--fps", "2"]);
        match cmd {
            Command::Run {
                run, fixed_step, fps, frames, ..
            } => {
                assert!(run);
                assert!(fixed_step);
                assert_eq!(fps, Some(2.0));
                assert_eq!(frames, 600);
            }
            _ => unreachable!(),
        }

        let mut source = frame_source(Some(2.0), 3, true).unwrap();
        let mut sim = Simulation::default();
        sim.toggle_run();
        let mut scene = RecordingScene::new();
        blindspot::run(&mut sim, source.as_mut(), &mut scene, &mut Script::empty());
        assert_eq!(scene.frames.last().unwrap().car_position, Distance::meters(82.0));
    }
}
