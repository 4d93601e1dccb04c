//! Bresenham decomposition of a target offset into unit steps.

use super::queue::StepQueue;
use super::step::{Position, UnitStep};

/// Planning stopped early because the step queue filled up.
///
/// The `pushed` steps already queued will still be executed; the rest of
/// the path is dropped. With the queue sized for the longest HiRes path
/// this only happens if a cycle starts before the previous one drained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Truncated {
    pub pushed: u16,
}

/// Decompose `target` (relative to the origin) into unit steps and push
/// them into `queue` in generation order.
///
/// Integer-only error accumulation: each loop iteration advances the
/// running position by at most one unit per axis, so a completed plan
/// pushes exactly `|dx| + |dy|` steps over `max(|dx|, |dy|)` iterations.
/// Returns the number of steps pushed.
pub fn plan_route<const N: usize>(
    target: Position,
    queue: &StepQueue<N>,
) -> Result<u16, Truncated> {
    let mut pos = Position::ORIGIN;

    // Total distance to cover per axis, and which direction to step in.
    // A zero delta never steps, so the sign tie resolves to +1 harmlessly.
    let x_delta = (target.x as i32).abs();
    let y_delta = (target.y as i32).abs();
    let x_step: i16 = if target.x >= 0 { 1 } else { -1 };
    let y_step: i16 = if target.y >= 0 { 1 } else { -1 };

    // Accumulated error: how far from the ideal line we are.
    let mut err = x_delta - y_delta;
    let mut pushed: u16 = 0;

    while pos != target {
        // Doubled to avoid fractional comparisons.
        let err2 = err * 2;

        // Step in X: remove the vertical error to account for the change
        // in horizontal position.
        if err2 > -y_delta {
            err -= y_delta;
            pos.x += x_step;
            let step = if x_step > 0 {
                UnitStep::Right
            } else {
                UnitStep::Left
            };
            if queue.push(step).is_err() {
                return Err(Truncated { pushed });
            }
            pushed += 1;
        }

        // Step in Y: add the horizontal error to account for the change
        // in vertical position.
        if err2 < x_delta {
            err += x_delta;
            pos.y += y_step;
            let step = if y_step > 0 {
                UnitStep::Up
            } else {
                UnitStep::Down
            };
            if queue.push(step).is_err() {
                return Err(Truncated { pushed });
            }
            pushed += 1;
        }
    }

    Ok(pushed)
}
