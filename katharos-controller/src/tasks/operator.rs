//! Terminal operator
//!
//! Reads one command per line from stdin:
//!
//! | input | action                               |
//! |-------|--------------------------------------|
//! | `g`   | press and release the green (start)  |
//! | `x`   | press and hold the emergency stop    |
//! | `r`   | release the emergency stop           |
//! | `d`   | load or remove the disc              |
//! | `q`   | stop the controller                  |

use std::io::{self, BufRead};
use std::sync::atomic::Ordering;
use std::thread::{self, JoinHandle};

use crate::bench::BenchFixture;
use crate::channels::SHUTDOWN;
use crate::config::START_PRESS;

/// Operator command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    HoldStop,
    ReleaseStop,
    ToggleDisc,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "g" | "start" => Some(Command::Start),
            "x" | "stop" => Some(Command::HoldStop),
            "r" | "release" => Some(Command::ReleaseStop),
            "d" | "disc" => Some(Command::ToggleDisc),
            "q" | "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

pub fn spawn_operator(bench: &BenchFixture) -> io::Result<JoinHandle<()>> {
    let bench = bench.clone();
    thread::Builder::new()
        .name("operator".into())
        .spawn(move || run(bench))
}

fn run(bench: BenchFixture) {
    log::info!("Operator commands: g=start x=stop r=release d=disc q=quit");

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("Operator input closed: {}", err);
                return;
            }
        };

        match Command::parse(&line) {
            Some(command) => apply(&bench, command),
            None => log::warn!("Unknown command {:?}", line.trim()),
        }

        if SHUTDOWN.load(Ordering::Acquire) {
            return;
        }
    }
}

pub fn apply(bench: &BenchFixture, command: Command) {
    match command {
        Command::Start => {
            bench.start.drive(false);
            thread::sleep(START_PRESS);
            bench.start.drive(true);
        }
        Command::HoldStop => {
            log::info!("Emergency stop held");
            bench.stop.drive(false);
        }
        Command::ReleaseStop => {
            log::info!("Emergency stop released");
            bench.stop.drive(true);
        }
        Command::ToggleDisc => {
            let loaded = bench.toggle_disc();
            log::info!("Disc {}", if loaded { "loaded" } else { "removed" });
        }
        Command::Quit => SHUTDOWN.store(true, Ordering::Release),
    }
}
