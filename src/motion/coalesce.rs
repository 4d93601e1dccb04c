//! Consumer-side merge of adjacent orthogonal steps into diagonal motion.

use super::queue::{DrainSignal, StepQueue};
use super::step::PointerDelta;

/// Produce the pointer motion for one transport poll.
///
/// Pops one step and, if the next queued step lies on the other axis,
/// folds it into the same report and skips it. Same-axis neighbours stay
/// queued for the following poll, so each report carries at most one
/// horizontal and one vertical unit.
///
/// Returns `None` when the queue is empty, raising `drained` so the
/// planner can start the next cycle.
pub fn next_motion<const N: usize>(
    queue: &StepQueue<N>,
    drained: &DrainSignal,
) -> Option<PointerDelta> {
    let Some(current) = queue.pop() else {
        drained.raise();
        return None;
    };

    let (mut dx, mut dy) = current.deltas();

    if let Some(next) = queue.peek() {
        if next.axis() != current.axis() {
            let (ndx, ndy) = next.deltas();
            dx += ndx;
            dy += ndy;
            // Value already merged above; drop the token.
            queue.skip();
        }
    }

    Some(PointerDelta { dx, dy })
}
