//! Directional unit-step instruction.
//!
//! A step is a single ±1 displacement along exactly one axis. The planner
//! emits steps in this frame; the wire mapping to a HID report is the
//! identity (`Up → dy=+1`, `Down → dy=-1`, `Left → dx=-1`, `Right → dx=+1`).

/// Movement axis of a unit step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A single-axis, single-unit pointer displacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UnitStep {
    Up,
    Down,
    Left,
    Right,
}

impl UnitStep {
    /// Axis this step moves along.
    pub const fn axis(self) -> Axis {
        match self {
            UnitStep::Left | UnitStep::Right => Axis::Horizontal,
            UnitStep::Up | UnitStep::Down => Axis::Vertical,
        }
    }

    /// (dx, dy) contribution of this step.
    pub const fn deltas(self) -> (i8, i8) {
        match self {
            UnitStep::Up => (0, 1),
            UnitStep::Down => (0, -1),
            UnitStep::Left => (-1, 0),
            UnitStep::Right => (1, 0),
        }
    }
}

/// Coalesced pointer motion for one outgoing report; each component is a
/// single unit at most.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointerDelta {
    pub dx: i8,
    pub dy: i8,
}

/// A 2-D target offset, relative to the origin of one planning cycle.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}
