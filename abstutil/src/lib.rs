//! Odds and ends shared by every crate in the workspace:
//!
//! - logger setup
//! - JSON IO
//! - Timer, for logging how long phases take

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod io;
pub mod logger;
mod time;

pub use crate::io::{from_json, read_json, to_json, write_json};
pub use crate::time::{elapsed_seconds, prettyprint_time, Timer};
