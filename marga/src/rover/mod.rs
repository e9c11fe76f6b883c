//! Energy-bounded rover simulation.
//!
//! [`RoverAgent`] follows a planner path one cell per [`RoverAgent::step`].
//! Each step spends the entered cell's terrain cost; running short of
//! energy or meeting an impassable cell ends the run in a terminal
//! [`RoverStatus`] that only [`RoverAgent::reset`] leaves.
//!
//! `step` is a plain synchronous call with no timing dependency: a test,
//! a headless batch loop and a real-time scheduler drive it the same way.

mod agent;
mod report;
mod state;

pub use agent::RoverAgent;
pub use report::{EmergencyStopReport, StatusReport};
pub use state::{RoverStatus, StepOutcome};
