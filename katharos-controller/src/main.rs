//! Katharos - Disc Cleaning Fixture Controller
//!
//! Bench build of the fixture controller: the cycle logic runs against
//! a simulated fixture driven from the terminal, while inspection talks
//! to the real camera stream and vision service.
//!
//! Named after the Greek "katharos" meaning "clean".
//!
//! Threads:
//! - `cycle`: boots the fixture and runs the tick loop
//! - `encoder`: pulses the chuck encoder while the chuck turns
//! - `operator`: turns stdin lines into button presses
//! - main: waits for SIGINT/SIGTERM or the end of the cycle

use std::sync::atomic::Ordering;
use std::thread;

use anyhow::{anyhow, Context, Result};
use katharos_core::cycle::{CycleStateMachine, Fixture};
use katharos_inspect::InspectionClient;
use tokio::sync::oneshot;

mod bench;
mod channels;
mod clock;
mod config;
mod display;
mod signals;
mod tasks;

use bench::BenchFixture;
use channels::SHUTDOWN;
use clock::SystemClock;
use display::Panel;
use signals::Interrupts;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Katharos controller starting");

    let bench = BenchFixture::new();

    // Built outside the signal runtime: the blocking HTTP client must not
    // be created or dropped inside an async context
    let inspector = InspectionClient::from_config(config::inspection())
        .context("failed to build inspection client")?;

    let fixture = Fixture {
        actuators: bench.actuators(),
        sensors: bench.sensors(),
        display: Panel::detect(),
        clock: SystemClock::new(),
    };
    let mut machine = CycleStateMachine::new(fixture, inspector, config::cycle());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build signal runtime")?;
    let mut interrupts = {
        let _guard = runtime.enter();
        Interrupts::register()?
    };

    let encoder = tasks::spawn_encoder(&bench).context("failed to start encoder thread")?;
    tasks::spawn_operator(&bench).context("failed to start operator thread")?;

    let (done_tx, done_rx) = oneshot::channel();
    let control = thread::Builder::new()
        .name("cycle".into())
        .spawn(move || {
            machine.boot();
            let outcome = machine.run(&SHUTDOWN);
            // Receiver gone means main already bailed out
            let _ = done_tx.send(outcome);
        })
        .context("failed to start cycle thread")?;

    let outcome = runtime.block_on(signals::supervise(done_rx, &mut interrupts, &SHUTDOWN));

    SHUTDOWN.store(true, Ordering::Release);
    control
        .join()
        .map_err(|_| anyhow!("cycle thread panicked"))?;
    encoder
        .join()
        .map_err(|_| anyhow!("encoder thread panicked"))?;

    match outcome? {
        Ok(()) => {
            log::info!("Fixture stopped safely");
            Ok(())
        }
        Err(err) => Err(anyhow!("fixture halted: {}", err)),
    }
}
