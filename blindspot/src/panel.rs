use anyhow::Result;
use serde::{Deserialize, Serialize};

use geom::{Distance, Duration};

use crate::{ParameterUpdate, Simulation};

/// Something the parameter panel can ask for: a slider moved, or a button was pressed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PanelCommand {
    Set(ParameterUpdate),
    SetCarPosition(Distance),
    ToggleRun,
    Reset,
    Replay,
}

impl PanelCommand {
    pub fn apply(&self, sim: &mut Simulation) {
        debug!("Panel: {:?}", self);
        match self {
            PanelCommand::Set(update) => {
                sim.set_parameters(update);
            }
            PanelCommand::SetCarPosition(distance) => {
                sim.set_car_position(*distance);
            }
            PanelCommand::ToggleRun => {
                sim.toggle_run();
            }
            PanelCommand::Reset => {
                sim.reset();
            }
            PanelCommand::Replay => {
                sim.replay();
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    /// Real time since the frame loop started, not simulated time, so commands still fire while
    /// paused.
    pub at: Duration,
    pub command: PanelCommand,
}

/// A timed list of panel commands, standing in for somebody clicking around.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    entries: Vec<ScriptEntry>,
    #[serde(skip)]
    next: usize,
}

impl Script {
    pub fn new(mut entries: Vec<ScriptEntry>) -> Script {
        // Stable, so commands at the same time keep their order
        entries.sort_by_key(|e| e.at);
        Script { entries, next: 0 }
    }

    pub fn empty() -> Script {
        Script::default()
    }

    /// Loads a JSON list of entries.
    pub fn load(path: &str) -> Result<Script> {
        let entries: Vec<ScriptEntry> = abstutil::read_json(path)?;
        if let Some(bad) = entries.iter().find(|e| e.at < Duration::ZERO) {
            bail!("{}: command {:?} is scheduled before the start", path, bad.command);
        }
        Ok(Script::new(entries))
    }

    /// Applies every command due by `now` that hasn't fired yet. Returns how many fired.
    pub fn apply_due(&mut self, now: Duration, sim: &mut Simulation) -> usize {
        let mut fired = 0;
        while let Some(entry) = self.entries.get(self.next) {
            if entry.at > now {
                break;
            }
            entry.command.apply(sim);
            self.next += 1;
            fired += 1;
        }
        fired
    }

    pub fn is_done(&self) -> bool {
        self.next == self.entries.len()
    }
}
