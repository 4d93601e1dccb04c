//! Movement-instruction pipeline.
//!
//! A planning cycle turns one random target offset into a queue of unit
//! steps (`planner` → `queue`); the USB poll task drains the queue one
//! report at a time, merging adjacent orthogonal steps into diagonal
//! motion (`coalesce`). The `target` module picks where to go next.

pub mod coalesce;
pub mod planner;
pub mod queue;
pub mod step;
pub mod target;


pub use coalesce::next_motion;
pub use planner::{plan_route, Truncated};
pub use queue::{DrainSignal, Full, StepQueue};
pub use step::{Axis, PointerDelta, Position, UnitStep};
pub use target::{random_target, Mode};
