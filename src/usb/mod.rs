//! USB device bring-up (embedded only).

pub mod hid_device;
pub mod serial;
