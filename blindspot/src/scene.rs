use anyhow::Result;
use serde::{Deserialize, Serialize};

use geom::{Angle, Distance, Duration, UnitFmt};

use crate::{BlinderPosts, BlindspotTriangle, ClockState};

/// Everything a renderer needs for one frame. It's a copy, so the renderer can't tear the model's
/// state mid-frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneFrame {
    /// Simulated time spent running.
    pub time: Duration,
    pub state: ClockState,
    /// The car's distance from the intersection, along its road.
    pub car_position: Distance,
    /// The crossing road's rotation around the vertical axis, relative to the car's road.
    pub crossing_road_angle: Angle,
    pub triangle: BlindspotTriangle,
    /// Renderers may skip the shadow when this is false.
    pub shadow_visible: bool,
    /// Posts on the car marking the edges of the cone.
    pub blinders: BlinderPosts,
}

/// Draws frames. Camera, lighting, and meshes all live on the other side of this.
pub trait SceneAdapter {
    fn render(&mut self, frame: &SceneFrame);
}

/// Doesn't draw anything; describes every frame at the debug level, and notable moments at info.
pub struct LoggingScene {
    fmt: UnitFmt,
    last: Option<SceneFrame>,
}

impl LoggingScene {
    pub fn new(fmt: UnitFmt) -> LoggingScene {
        LoggingScene { fmt, last: None }
    }

    /// A one-line description of a frame.
    pub fn describe(&self, frame: &SceneFrame) -> String {
        let tri = &frame.triangle;
        format!(
            "{} ({:?}): car at {}, crossing road at {}, shadow {} / {} / {}{}",
            frame.time.to_string(&self.fmt),
            frame.state,
            frame.car_position.to_string(&self.fmt),
            frame.crossing_road_angle,
            tri.origin,
            tri.leading,
            tri.trailing,
            if frame.shadow_visible {
                ""
            } else {
                " (hidden)"
            }
        )
    }
}

impl SceneAdapter for LoggingScene {
    fn render(&mut self, frame: &SceneFrame) {
        let line = self.describe(frame);
        match self.last {
            Some(ref last)
                if last.state == frame.state && last.shadow_visible == frame.shadow_visible =>
            {
                debug!("{}", line);
            }
            _ => {
                info!("{}", line);
            }
        }
        self.last = Some(*frame);
    }
}

/// Keeps every frame, so a run can be inspected or saved afterwards.
#[derive(Default, Serialize, Deserialize)]
pub struct RecordingScene {
    pub frames: Vec<SceneFrame>,
}

impl RecordingScene {
    pub fn new() -> RecordingScene {
        RecordingScene::default()
    }

    pub fn save(&self, path: &str) -> Result<()> {
        abstutil::write_json(path, self)
    }
}

impl SceneAdapter for RecordingScene {
    fn render(&mut self, frame: &SceneFrame) {
        self.frames.push(*frame);
    }
}

/// Draw to several scenes at once.
impl<A: SceneAdapter, B: SceneAdapter> SceneAdapter for (A, B) {
    fn render(&mut self, frame: &SceneFrame) {
        self.0.render(frame);
        self.1.render(frame);
    }
}
