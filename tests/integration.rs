//! Integration tests for the restless movement pipeline.
//!
//! Drives the full plan → queue → coalesce → report path the way the
//! firmware tasks do, with a host-side stand-in for the USB poll loop.

use restless::hid::{MouseReport, MOUSE_REPORT_SIZE};
use restless::motion::{
    next_motion, plan_route, random_target, DrainSignal, Mode, Position, StepQueue,
};
use restless::rng::Xorshift32;

/// Consume the queue one simulated host poll at a time.
fn poll_all<const N: usize>(
    queue: &StepQueue<N>,
    drained: &DrainSignal,
) -> Vec<MouseReport> {
    let mut reports = Vec::new();
    while let Some(delta) = next_motion(queue, drained) {
        reports.push(MouseReport::motion(delta));
    }
    reports
}

#[test]
fn diagonal_path_becomes_diagonal_reports() {
    // Offset (-5, -5) decomposes into alternating Left/Down steps; each
    // poll merges one pair into a single diagonal report.
    let queue: StepQueue<64> = StepQueue::new();
    let drained = DrainSignal::new();
    drained.take();

    plan_route(Position::new(-5, -5), &queue).unwrap();
    let reports = poll_all(&queue, &drained);

    assert_eq!(reports.len(), 5);
    for report in &reports {
        let mut wire = [0u8; MOUSE_REPORT_SIZE];
        assert_eq!(report.serialize(&mut wire), MOUSE_REPORT_SIZE);
        assert_eq!(wire, [0x00, 0xFF, 0xFF, 0x00]); // dx = dy = -1
    }
    assert!(drained.is_raised());
}

#[test]
fn vertical_path_never_emits_horizontal_motion() {
    let queue: StepQueue<64> = StepQueue::new();
    let drained = DrainSignal::new();
    drained.take();

    plan_route(Position::new(0, -5), &queue).unwrap();
    let reports = poll_all(&queue, &drained);

    assert_eq!(reports.len(), 5);
    assert!(reports.iter().all(|r| r.x == 0 && r.y == -1));
}

#[test]
fn report_count_matches_dominant_axis() {
    // Coalescing folds the shorter axis into the longer one, so the number
    // of polls with motion equals max(|dx|, |dy|).
    let cases = [(7i16, 3i16), (3, 7), (-6, 2), (4, -4), (1, 0)];
    for (dx, dy) in cases {
        let queue: StepQueue<64> = StepQueue::new();
        let drained = DrainSignal::new();
        drained.take();

        plan_route(Position::new(dx, dy), &queue).unwrap();
        let reports = poll_all(&queue, &drained);

        let expected = (dx as i32).abs().max((dy as i32).abs()) as usize;
        assert_eq!(reports.len(), expected, "target ({dx}, {dy})");

        let sum_x: i32 = reports.iter().map(|r| r.x as i32).sum();
        let sum_y: i32 = reports.iter().map(|r| r.y as i32).sum();
        assert_eq!((sum_x, sum_y), (dx as i32, dy as i32));
    }
}

#[test]
fn every_report_is_bounded_to_unit_steps() {
    let mut rng = Xorshift32::new(0x5EED);
    let queue: StepQueue<1024> = StepQueue::new();
    let drained = DrainSignal::new();

    for _ in 0..20 {
        assert!(drained.take());
        let target = random_target(&mut rng, Mode::HiRes);
        plan_route(target, &queue).unwrap();

        for report in poll_all(&queue, &drained) {
            assert!(report.x >= -1 && report.x <= 1);
            assert!(report.y >= -1 && report.y <= 1);
            assert!(!report.is_idle());
            assert_eq!(report.buttons, 0);
            assert_eq!(report.wheel, 0);
        }
    }
}

#[test]
fn drain_handshake_gates_planning_cycles() {
    // Mirrors the two firmware tasks: the producer only plans after the
    // consumer has reported a drain, and each cycle raises it again.
    let mut rng = Xorshift32::new(1);
    let queue: StepQueue<64> = StepQueue::new();
    let drained = DrainSignal::new();

    for _ in 0..10 {
        // Producer side.
        assert!(drained.take(), "previous cycle must have drained");
        assert!(!drained.take());
        let target = random_target(&mut rng, Mode::Calm);
        plan_route(target, &queue).unwrap();

        // Consumer side: exactly one diagonal report per Calm cycle.
        let reports = poll_all(&queue, &drained);
        assert_eq!(reports.len(), 1);
        assert!(queue.is_empty());
        assert!(drained.is_raised());
    }
}
