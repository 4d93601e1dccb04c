//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and pipeline sizing
//! live here so they can be tuned in one place.

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings. The serial number is overwritten at boot with a
/// hash of the hardware device ID; this is the fallback value.
pub const USB_MANUFACTURER: &str = "restless";
pub const USB_PRODUCT: &str = "Restless Mouse Jiggler";
pub const USB_SERIAL_FALLBACK: &str = "00000000";

/// USB HID polling interval (ms). 10 ms is plenty for one unit per poll.
pub const USB_HID_POLL_MS: u8 = 10;

// Movement pipeline

/// Step queue slot count. Must be a power of two; usable capacity is one
/// less. 512 fits the longest HiRes path (250 steps per axis, 500 tokens)
/// without truncation.
pub const STEP_QUEUE_SLOTS: usize = 512;

/// How often the planner re-checks the drain signal while the queue is
/// still being consumed (ms).
pub const PLANNER_POLL_MS: u64 = 2;

/// Idle pause in the USB poll task when the queue has drained (ms).
pub const CONSUMER_IDLE_MS: u64 = 5;

/// Number of uninitialised RAM words folded into the boot RNG seed.
pub const SEED_NOISE_WORDS: usize = 16;

// GPIO pin assignments (nRF52840-DK defaults)
//
// Mode jumpers are active-low with internal pull-ups; fit a jumper to GND
// to set the bit. Decoded LSB-first into the 3-bit mode selector.
//
//   Jumper bit 0   → P0.11
//   Jumper bit 1   → P0.12
//   Jumper bit 2   → P0.24
