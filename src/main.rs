//! Embedded entry point for the restless mouse jiggler.
//!
//! Three Embassy tasks cooperate around two process-wide statics:
//!
//! - `planner_task` waits for the step queue to drain, then plans a route
//!   to a fresh random target (producer context).
//! - `mouse_poll_task` feeds one coalesced report per host poll to the HID
//!   endpoint (consumer context).
//! - `usb_task` runs the Embassy USB stack.
//!
//! The operating mode is read once from the jumper pins at boot; the RNG
//! is seeded from whatever a reserved block of SRAM powered up as.

#![no_std]
#![no_main]

mod usb;

use core::mem::MaybeUninit;

use defmt::{debug, info, warn};
use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_time::Timer;
use embassy_usb::UsbDevice;
use static_cell::StaticCell;

use restless::config;
use restless::hid::{MouseReport, MOUSE_REPORT_SIZE};
use restless::motion::{
    next_motion, plan_route, random_target, DrainSignal, Mode, StepQueue, Truncated,
};
use restless::rng::{seed_from_noise, Xorshift32};

use usb::hid_device::{self, MouseWriter, UsbDriver};

/// Unit-step FIFO shared by the planner (push) and the poll task (pop).
static STEP_QUEUE: StepQueue<{ config::STEP_QUEUE_SLOTS }> = StepQueue::new();

/// Drain handshake: raised by the poll task, taken by the planner.
static DRAINED: DrainSignal = DrainSignal::new();

static USB_SERIAL: StaticCell<heapless::String<8>> = StaticCell::new();

// Deliberately never initialised: the power-up content of this SRAM block
// is the entropy source for the target RNG.
#[link_section = ".uninit.rng_noise"]
static mut RNG_NOISE: MaybeUninit<[u32; config::SEED_NOISE_WORDS]> = MaybeUninit::uninit();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    // Mode jumpers: active low, decoded LSB-first. Read once; the mode is
    // immutable for the rest of the process lifetime.
    let selector = {
        let j0 = Input::new(p.P0_11, Pull::Up);
        let j1 = Input::new(p.P0_12, Pull::Up);
        let j2 = Input::new(p.P0_24, Pull::Up);
        let mut bits = 0u8;
        if j0.is_low() {
            bits |= 0b001;
        }
        if j1.is_low() {
            bits |= 0b010;
        }
        if j2.is_low() {
            bits |= 0b100;
        }
        bits
    };
    let mode = Mode::from_selector(selector);
    info!("jumper selector {=u8:b} -> mode {}", selector, mode);

    let seed = {
        // Reading uninitialised SRAM is exactly the point here; stuck-at
        // words are filtered out by seed_from_noise.
        let base = unsafe { core::ptr::addr_of!(RNG_NOISE) as *const u32 };
        let mut words = [0u32; config::SEED_NOISE_WORDS];
        for (i, word) in words.iter_mut().enumerate() {
            *word = unsafe { base.add(i).read_volatile() };
        }
        seed_from_noise(&words)
    };
    let rng = Xorshift32::new(seed);

    let serial = USB_SERIAL.init(usb::serial::device_serial());
    let serial: &'static str = if serial.is_empty() {
        config::USB_SERIAL_FALLBACK
    } else {
        serial.as_str()
    };
    info!("USB serial {=str}", serial);

    let usb = hid_device::init(p.USBD, serial);

    spawner.must_spawn(usb_task(usb.device));
    spawner.must_spawn(mouse_poll_task(usb.mouse_writer));
    spawner.must_spawn(planner_task(mode, rng));
}

/// Producer context: one planning cycle per drain of the queue.
#[embassy_executor::task]
async fn planner_task(mode: Mode, mut rng: Xorshift32) -> ! {
    info!("planner task started");

    loop {
        if hid_device::bus_suspended() || !DRAINED.take() {
            Timer::after_millis(config::PLANNER_POLL_MS).await;
            continue;
        }

        let target = random_target(&mut rng, mode);
        match plan_route(target, &STEP_QUEUE) {
            Ok(steps) => debug!(
                "planned {=u16} steps to ({=i16}, {=i16})",
                steps, target.x, target.y
            ),
            Err(Truncated { pushed }) => {
                warn!("step queue full after {=u16} steps; path truncated", pushed)
            }
        }
    }
}

/// Consumer context: one report per host poll of the mouse endpoint.
#[embassy_executor::task]
async fn mouse_poll_task(mut writer: MouseWriter) -> ! {
    info!("mouse poll task started");

    let mut buf = [0u8; MOUSE_REPORT_SIZE];

    loop {
        match next_motion(&STEP_QUEUE, &DRAINED) {
            Some(delta) => {
                let report = MouseReport::motion(delta);
                let n = report.serialize(&mut buf);
                // Completes when the host polls the endpoint.
                if writer.write(&buf[..n]).await.is_err() {
                    warn!("USB mouse write failed");
                }
            }
            // Queue drained; next_motion already raised the signal.
            None => Timer::after_millis(config::CONSUMER_IDLE_MS).await,
        }
    }
}

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, UsbDriver>) -> ! {
    hid_device::run_usb_device(device).await
}
