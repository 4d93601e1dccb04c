//! USB serial number derived from the hardware device ID.
//!
//! The nRF52840 FICR DEVICEID registers hold a 64-bit factory-programmed
//! identifier; hashing it down to 32 bits gives every board a stable,
//! unique 8-character serial string.

use core::fmt::Write;

use heapless::String;

/// FICR DEVICEID[0..2] (read-only factory information registers).
const FICR_DEVICEID: *const u32 = 0x1000_0060 as *const u32;

/// Build the per-board USB serial string (8 uppercase hex chars).
pub fn device_serial() -> String<8> {
    let mut s = String::new();
    // Exactly 8 chars, so the write cannot overflow the capacity.
    let _ = write!(s, "{:08X}", fnv1a(&device_id()));
    s
}

fn device_id() -> [u8; 8] {
    let lo = unsafe { core::ptr::read_volatile(FICR_DEVICEID) };
    let hi = unsafe { core::ptr::read_volatile(FICR_DEVICEID.add(1)) };
    let mut bytes = [0u8; 8];
    bytes[..4].copy_from_slice(&lo.to_le_bytes());
    bytes[4..].copy_from_slice(&hi.to_le_bytes());
    bytes
}

/// FNV-1a, 32-bit.
fn fnv1a(bytes: &[u8]) -> u32 {
    const FNV_PRIME: u32 = 16_777_619;
    let mut hash: u32 = 2_166_136_261;
    for &b in bytes {
        hash ^= b as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
