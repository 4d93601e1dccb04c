//! Mode-parameterised random target sampling.
//!
//! Each mode binds a raw mask, a rejection ceiling, and a bias that centre
//! the sampled range on zero. The sampler itself is branch-free over modes:
//! it only reads the parameter table.

use crate::rng::Xorshift32;

use super::step::Position;

/// Operating mode, selected once at boot from the jumper pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Moderate drift, up to ±125 per cycle.
    Normal,
    /// Long sweeps, up to ±250 per cycle.
    HiRes,
    /// Small twitches, up to ±20 per cycle.
    Jitter,
    /// Minimal motion: exactly one unit per axis per cycle.
    Calm,
    /// Unrecognised jumper setting: pointer stays put.
    Parked,
}

/// Per-axis sampling parameters: `raw = rng & mask`, redrawn while
/// `raw > ceiling`, then shifted by `bias`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleParams {
    pub mask: u16,
    pub ceiling: u16,
    pub bias: i16,
}

impl Mode {
    /// Decode a 3-bit jumper selector. Unknown values park the pointer
    /// rather than failing.
    pub const fn from_selector(bits: u8) -> Mode {
        match bits & 0b111 {
            0b000 => Mode::Normal,
            0b001 => Mode::HiRes,
            0b010 => Mode::Jitter,
            0b011 => Mode::Calm,
            _ => Mode::Parked,
        }
    }

    /// Rejection-sampling parameters for this mode.
    ///
    /// `Calm` and `Parked` have no parameters: Calm is a plain coin flip
    /// and Parked never samples.
    pub const fn params(self) -> Option<SampleParams> {
        match self {
            Mode::Normal => Some(SampleParams {
                mask: 0x00FF,
                ceiling: 250,
                bias: -125,
            }),
            Mode::HiRes => Some(SampleParams {
                mask: 0x01FF,
                ceiling: 500,
                bias: -250,
            }),
            Mode::Jitter => Some(SampleParams {
                mask: 0x003F,
                ceiling: 40,
                bias: -20,
            }),
            Mode::Calm | Mode::Parked => None,
        }
    }
}

/// Draw the next planning target, both axes sampled independently.
pub fn random_target(rng: &mut Xorshift32, mode: Mode) -> Position {
    Position::new(sample_axis(rng, mode), sample_axis(rng, mode))
}

fn sample_axis(rng: &mut Xorshift32, mode: Mode) -> i16 {
    match mode {
        Mode::Calm => {
            // Coin flip: exactly ±1, never 0.
            if rng.next_u16() & 0x0001 == 0 {
                -1
            } else {
                1
            }
        }
        Mode::Parked => 0,
        _ => {
            // Checked above: every remaining mode carries parameters.
            let Some(p) = mode.params() else { return 0 };
            loop {
                let raw = rng.next_u16() & p.mask;
                if raw <= p.ceiling {
                    return raw as i16 + p.bias;
                }
            }
        }
    }
}
