//! Chuck encoder simulation
//!
//! While the chuck relay is energized the encoder channel toggles at a
//! fixed rate. With a disc loaded the chuck seizes after a short run and
//! the channel goes quiet, which is what the grip detector waits for.

use std::io;
use std::sync::atomic::Ordering;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use katharos_drivers::EncoderInput;
use katharos_hal::OutputPin;
use spin_sleep::SpinSleeper;

use crate::bench::BenchFixture;
use crate::channels::{ENCODER_TICKS, SHUTDOWN};
use crate::config::{ENCODER_RATE_HZ, SEIZE_AFTER};

/// Whether the chuck is still turning after `running_for`
pub fn chuck_turning(running_for: Duration, disc_loaded: bool) -> bool {
    !disc_loaded || running_for < SEIZE_AFTER
}

pub fn spawn_encoder(bench: &BenchFixture) -> io::Result<JoinHandle<()>> {
    let bench = bench.clone();
    thread::Builder::new()
        .name("encoder".into())
        .spawn(move || run(bench))
}

fn run(bench: BenchFixture) {
    log::info!("Encoder simulation started");

    let mut channel = bench.encoder.clone();
    let mut encoder = EncoderInput::new(bench.encoder.clone(), &ENCODER_TICKS);
    let sleeper = SpinSleeper::default();
    // Two level changes per edge
    let half_period = Duration::from_micros(500_000 / ENCODER_RATE_HZ);
    let mut running_since: Option<Instant> = None;

    while !SHUTDOWN.load(Ordering::Acquire) {
        if bench.chuck.is_set_high() {
            let since = *running_since.get_or_insert_with(Instant::now);
            if chuck_turning(since.elapsed(), bench.disc_loaded()) {
                let level = channel.is_set_high();
                channel.set_state(!level);
                encoder.poll();
            }
        } else {
            running_since = None;
        }
        sleeper.sleep(half_period);
    }

    log::info!("Encoder simulation stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chuck_seizes_only_on_a_disc() {
        assert!(chuck_turning(Duration::ZERO, true));
        assert!(!chuck_turning(SEIZE_AFTER, true));
        assert!(chuck_turning(SEIZE_AFTER * 10, false));
    }
}
