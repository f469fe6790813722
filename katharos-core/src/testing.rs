//! Simulated fixture for unit tests
//!
//! All fakes share one simulated time base with [`SimClock`]: sleeping
//! advances it, and scripted sensors answer as a function of it.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

use crate::inspect::{InspectionFailure, InspectionResult, Inspector};
use crate::scheduler::Clock;
use crate::traits::{ActuatorPort, BrushPosition, Input, Relay, SensorPort, StatusDisplay};

/// Simulated monotonic clock; `sleep_ms` advances time instantly
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    now: Rc<Cell<u64>>,
    slept_ms: Rc<Cell<u64>>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward without counting it as a sleep
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    /// Total time spent in `sleep_ms`
    pub fn slept_ms(&self) -> u64 {
        self.slept_ms.get()
    }

    fn time(&self) -> Rc<Cell<u64>> {
        Rc::clone(&self.now)
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.advance(u64::from(ms));
        self.slept_ms.set(self.slept_ms.get() + u64::from(ms));
    }
}

type Script<T> = Box<dyn Fn(u64) -> T>;

/// Sensors answering from scripts of simulated time
///
/// Buttons are scripted against absolute time; the encoder is scripted
/// against time since the last `reset_ticks`.
pub struct ScriptedSensors {
    now: Rc<Cell<u64>>,
    start: Script<bool>,
    stop: Script<bool>,
    ticks: Script<u32>,
    reset_at: Cell<u64>,
    resets: Cell<u32>,
}

impl ScriptedSensors {
    /// Buttons released, encoder turning one tick per millisecond
    pub fn new(clock: &SimClock) -> Self {
        Self {
            now: clock.time(),
            start: Box::new(|_| false),
            stop: Box::new(|_| false),
            ticks: Box::new(|elapsed| elapsed as u32),
            reset_at: Cell::new(0),
            resets: Cell::new(0),
        }
    }

    pub fn with_start(mut self, script: impl Fn(u64) -> bool + 'static) -> Self {
        self.start = Box::new(script);
        self
    }

    pub fn with_stop(mut self, script: impl Fn(u64) -> bool + 'static) -> Self {
        self.stop = Box::new(script);
        self
    }

    pub fn with_ticks(mut self, script: impl Fn(u64) -> u32 + 'static) -> Self {
        self.ticks = Box::new(script);
        self
    }

    /// Number of encoder resets seen
    pub fn resets(&self) -> u32 {
        self.resets.get()
    }
}

impl SensorPort for ScriptedSensors {
    fn read_digital(&self, input: Input) -> bool {
        let now = self.now.get();
        match input {
            Input::Start => (self.start)(now),
            Input::Stop => (self.stop)(now),
        }
    }

    fn ticks(&self) -> u32 {
        (self.ticks)(self.now.get() - self.reset_at.get())
    }

    fn reset_ticks(&self) {
        self.reset_at.set(self.now.get());
        self.resets.set(self.resets.get() + 1);
    }
}

/// Encoder script that turns for `ms` then seizes
pub fn stall_after(ms: u64) -> impl Fn(u64) -> u32 {
    move |elapsed| elapsed.min(ms) as u32
}

/// One recorded actuator command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActuatorCall {
    Relay(Relay, bool),
    Position(BrushPosition),
    Release,
}

/// Actuators that record every command with its simulated timestamp
#[derive(Debug)]
pub struct RecordingActuators {
    now: Rc<Cell<u64>>,
    calls: Vec<(u64, ActuatorCall)>,
    chuck: bool,
    washer: bool,
    position: Option<BrushPosition>,
    released: bool,
}

impl RecordingActuators {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            now: clock.time(),
            calls: Vec::new(),
            chuck: false,
            washer: false,
            position: None,
            released: false,
        }
    }

    pub fn calls(&self) -> Vec<(u64, ActuatorCall)> {
        self.calls.clone()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn relay_on(&self, relay: Relay) -> bool {
        match relay {
            Relay::Chuck => self.chuck,
            Relay::Washer => self.washer,
        }
    }

    pub fn position(&self) -> Option<BrushPosition> {
        self.position
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Motors off and brush home
    pub fn is_safe(&self) -> bool {
        !self.chuck && !self.washer && self.position == Some(BrushPosition::HOME)
    }

    /// How many times a position was commanded
    pub fn position_commands(&self, position: BrushPosition) -> usize {
        self.calls
            .iter()
            .filter(|(_, call)| *call == ActuatorCall::Position(position))
            .count()
    }

    /// Timestamp of the last time a relay was switched to `on`
    pub fn last_switch(&self, relay: Relay, on: bool) -> Option<u64> {
        self.calls
            .iter()
            .rev()
            .find(|(_, call)| *call == ActuatorCall::Relay(relay, on))
            .map(|(at, _)| *at)
    }

    fn record(&mut self, call: ActuatorCall) {
        self.calls.push((self.now.get(), call));
    }
}

impl ActuatorPort for RecordingActuators {
    fn set_relay(&mut self, relay: Relay, on: bool) {
        match relay {
            Relay::Chuck => self.chuck = on,
            Relay::Washer => self.washer = on,
        }
        self.record(ActuatorCall::Relay(relay, on));
    }

    fn set_position(&mut self, position: BrushPosition) {
        self.position = Some(position);
        self.released = false;
        self.record(ActuatorCall::Position(position));
    }

    fn release(&mut self) {
        self.released = true;
        self.record(ActuatorCall::Release);
    }
}

/// Display that keeps every screen it was asked to show
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub screens: Vec<(String, String)>,
}

impl RecordingDisplay {
    pub fn shown(&self, line1: &str) -> usize {
        self.screens.iter().filter(|(top, _)| top == line1).count()
    }

    pub fn last(&self) -> Option<&(String, String)> {
        self.screens.last()
    }
}

impl StatusDisplay for RecordingDisplay {
    fn show(&mut self, line1: &str, line2: &str) {
        self.screens.push((line1.to_string(), line2.to_string()));
    }
}

/// Inspector replaying queued verdicts; clean once the queue is empty
#[derive(Debug, Default)]
pub struct ScriptedInspector {
    verdicts: VecDeque<Result<InspectionResult, InspectionFailure>>,
    pub calls: u32,
}

impl ScriptedInspector {
    pub fn new(verdicts: impl IntoIterator<Item = Result<InspectionResult, InspectionFailure>>) -> Self {
        Self {
            verdicts: verdicts.into_iter().collect(),
            calls: 0,
        }
    }
}

impl Inspector for ScriptedInspector {
    fn try_inspect(&mut self) -> Result<InspectionResult, InspectionFailure> {
        self.calls += 1;
        self.verdicts
            .pop_front()
            .unwrap_or(Ok(InspectionResult::CLEAN))
    }
}
