//! Lock-free single-producer/single-consumer queue of unit steps.
//!
//! The planner task is the only pusher (owns `head`), the USB poll task is
//! the only popper (owns `tail`). Under that discipline no mutex is needed:
//! a slot is written before the new head is published (`Release`), and a
//! published tail is observed (`Acquire`) before its slot is reused.
//!
//! Capacity must be a power of two; one slot is sacrificed so that
//! full (`head + 1 == tail`) and empty (`head == tail`) stay distinct.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::step::UnitStep;

/// Error returned by [`StepQueue::push`] when the queue is at capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Full;

/// Bounded FIFO of [`UnitStep`] tokens shared between the planner task and
/// the USB poll task.
pub struct StepQueue<const N: usize> {
    slots: [UnsafeCell<UnitStep>; N],
    head: AtomicUsize,
    tail: AtomicUsize,
}

// Safe to share: each index has exactly one writer, and slot access is
// ordered by the release/acquire pairs on those indices.
unsafe impl<const N: usize> Sync for StepQueue<N> {}

impl<const N: usize> StepQueue<N> {
    const CAPACITY_IS_POW2: () = assert!(N.is_power_of_two() && N >= 2);

    /// Create an empty queue. `const` so the queue can live in a `static`.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let _ = Self::CAPACITY_IS_POW2;
        Self {
            slots: [const { UnsafeCell::new(UnitStep::Up) }; N],
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
        }
    }

    /// Usable capacity (one slot is reserved to disambiguate full/empty).
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Number of queued steps.
    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        head.wrapping_sub(tail) & (N - 1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a step. Producer context only.
    pub fn push(&self, step: UnitStep) -> Result<(), Full> {
        let head = self.head.load(Ordering::Relaxed);
        let next = (head + 1) & (N - 1);
        if next == self.tail.load(Ordering::Acquire) {
            return Err(Full);
        }
        // Sole writer of this slot until the head store below publishes it.
        unsafe { *self.slots[head].get() = step };
        self.head.store(next, Ordering::Release);
        Ok(())
    }

    /// Remove and return the oldest step. Consumer context only.
    pub fn pop(&self) -> Option<UnitStep> {
        let tail = self.tail.load(Ordering::Relaxed);
        if tail == self.head.load(Ordering::Acquire) {
            return None;
        }
        let step = unsafe { *self.slots[tail].get() };
        self.tail.store((tail + 1) & (N - 1), Ordering::Release);
        Some(step)
    }

    /// Return the oldest step without removing it. Consumer context only.
    pub fn peek(&self) -> Option<UnitStep> {
        let tail = self.tail.load(Ordering::Relaxed);
        if tail == self.head.load(Ordering::Acquire) {
            return None;
        }
        Some(unsafe { *self.slots[tail].get() })
    }

    /// Advance past the oldest step without reading it. Consumer context
    /// only, and only valid after a successful [`peek`](Self::peek).
    pub fn skip(&self) {
        let tail = self.tail.load(Ordering::Relaxed);
        debug_assert_ne!(tail, self.head.load(Ordering::Acquire));
        self.tail.store((tail + 1) & (N - 1), Ordering::Release);
    }
}

impl<const N: usize> Default for StepQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Drain handshake between the USB poll task and the planner task.
///
/// Raised by the consumer when a pop finds the queue empty, taken
/// (test-and-clear) by the producer before starting a new planning cycle.
/// Starts raised so the first cycle begins immediately after boot.
pub struct DrainSignal(AtomicBool);

impl DrainSignal {
    pub const fn new() -> Self {
        Self(AtomicBool::new(true))
    }

    /// Consumer side: mark the queue as fully drained.
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Producer side: consume the signal, returning whether it was raised.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for DrainSignal {
    fn default() -> Self {
        Self::new()
    }
}
