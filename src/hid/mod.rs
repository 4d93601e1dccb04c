//! USB HID report types.

pub mod mouse;

pub use mouse::{MouseReport, MOUSE_REPORT_DESCRIPTOR, MOUSE_REPORT_SIZE};
