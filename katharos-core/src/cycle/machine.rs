//! Cycle state machine
//!
//! Each call to [`CycleStateMachine::tick`]:
//! 1. checks the emergency stop, and on a trip shuts everything down,
//!    forces Idle and waits for the button to release;
//! 2. otherwise runs the current phase's handler to completion;
//! 3. sleeps the tick cadence.
//!
//! Handlers block for the whole sub-operation (open, grip, wash,
//! inspection), so a phase never spans more than one tick of work.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::clamp::{ClampController, GripResult};
use crate::config::CycleConfig;
use crate::inspect::Inspector;
use crate::safety::SafetyMonitor;
use crate::scheduler::Clock;
use crate::screens::Screen;
use crate::state::{CyclePhase, Event};
use crate::traits::{ActuatorPort, BrushPosition, Input, Relay, SensorPort, StatusDisplay};
use crate::wash::{WashCycle, WashOutcome};

use super::session::WashSession;

/// Errors that end a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleError {
    /// Emergency stop during a grip attempt; the fixture is already safe
    GripAborted,
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleError::GripAborted => write!(f, "grip attempt aborted by emergency stop"),
        }
    }
}

/// The ports the cycle drives, owned by the control thread
#[derive(Debug)]
pub struct Fixture<A, S, D, C> {
    pub actuators: A,
    pub sensors: S,
    pub display: D,
    pub clock: C,
}

/// Phase sequencer for one fixture
pub struct CycleStateMachine<A, S, D, C, I> {
    fixture: Fixture<A, S, D, C>,
    inspector: I,
    config: CycleConfig,
    phase: CyclePhase,
    safety: SafetyMonitor,
    clamp: ClampController,
    wash: WashCycle,
    /// Present while a disc is held
    session: Option<WashSession>,
    /// Screen currently on the panel
    screen: Option<Screen>,
}

impl<A, S, D, C, I> CycleStateMachine<A, S, D, C, I>
where
    A: ActuatorPort,
    S: SensorPort,
    D: StatusDisplay,
    C: Clock,
    I: Inspector,
{
    pub fn new(fixture: Fixture<A, S, D, C>, inspector: I, config: CycleConfig) -> Self {
        Self {
            fixture,
            inspector,
            safety: SafetyMonitor::new(&config.timing),
            clamp: ClampController::new(config.stall),
            wash: WashCycle::new(&config.timing),
            config,
            phase: CyclePhase::Idle,
            session: None,
            screen: None,
        }
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn session(&self) -> Option<&WashSession> {
        self.session.as_ref()
    }

    pub fn fixture(&self) -> &Fixture<A, S, D, C> {
        &self.fixture
    }

    pub fn inspector(&self) -> &I {
        &self.inspector
    }

    pub fn safety(&self) -> &SafetyMonitor {
        &self.safety
    }

    /// Bring the brush home and greet the operator
    pub fn boot(&mut self) {
        self.fixture.actuators.set_position(BrushPosition::HOME);
        self.fixture.clock.sleep_ms(self.config.timing.boot_settle_ms);
        self.show(Screen::Ready);
        log::info!("Fixture ready");
    }

    /// Tick until `shutdown` is raised or a grip attempt is aborted
    ///
    /// Both exits leave the fixture in its safe state.
    pub fn run(&mut self, shutdown: &AtomicBool) -> Result<(), CycleError> {
        while !shutdown.load(Ordering::Acquire) {
            self.tick()?;
        }

        log::info!("Shutdown requested, stopping fixture");
        self.emergency_shutdown();
        Ok(())
    }

    /// Drive the fixture safe and reset to Idle without waiting on the stop button
    pub fn emergency_shutdown(&mut self) {
        self.safety
            .emergency_stop(&mut self.fixture.actuators, &mut self.fixture.clock);
        self.apply(Event::SafetyTrip);
    }

    /// Run one safety check plus one phase handler
    pub fn tick(&mut self) -> Result<(), CycleError> {
        if self.safety.is_tripped(&self.fixture.sensors) {
            self.handle_safety_trip();
            return Ok(());
        }

        match self.phase {
            CyclePhase::Idle => self.handle_idle(),
            CyclePhase::AwaitingLoad => self.handle_awaiting_load()?,
            CyclePhase::Cleaning => self.handle_cleaning(),
            CyclePhase::Finished => self.handle_finished(),
        }

        self.fixture.clock.sleep_ms(self.config.timing.tick_cadence_ms);
        Ok(())
    }

    fn handle_safety_trip(&mut self) {
        log::warn!("Emergency stop pressed in {:?}", self.phase);
        self.emergency_shutdown();
        self.show(Screen::EmergencyStop);
        self.safety
            .hold_until_released(&self.fixture.sensors, &mut self.fixture.clock);
    }

    fn handle_idle(&mut self) {
        self.show(Screen::OpenPrompt);
        if !self.start_pressed() {
            return;
        }

        self.show(Screen::Opening);
        self.fixture.actuators.set_relay(Relay::Chuck, true);
        self.fixture.clock.sleep_ms(self.config.timing.open_clamp_ms);
        self.fixture.actuators.set_relay(Relay::Chuck, false);

        self.apply(Event::ClampOpened);
        self.fixture.clock.sleep_ms(self.config.timing.post_open_pause_ms);
    }

    fn handle_awaiting_load(&mut self) -> Result<(), CycleError> {
        self.show(Screen::LoadPrompt);
        if !self.start_pressed() {
            return Ok(());
        }

        self.show(Screen::Clamping);
        let grip = self.clamp.attempt_clamp(
            &mut self.fixture.actuators,
            &self.fixture.sensors,
            &mut self.fixture.clock,
        );

        match grip {
            GripResult::Clamped => {
                self.show(Screen::Secured);
                self.fixture.clock.sleep_ms(self.config.timing.secured_notice_ms);
                self.session = Some(WashSession::default());
                self.apply(Event::Gripped);
            }
            GripResult::NoGrip => {
                self.show(Screen::NoGrip);
                self.fixture.clock.sleep_ms(self.config.timing.no_grip_notice_ms);
                self.apply(Event::GripFailed);
            }
            GripResult::Aborted => {
                self.emergency_shutdown();
                self.show(Screen::EmergencyStop);
                return Err(CycleError::GripAborted);
            }
        }
        Ok(())
    }

    fn handle_cleaning(&mut self) {
        self.show(Screen::Cleaning);

        let duration_s = self.config.timing.wash_duration_s;
        let outcome = {
            let Fixture {
                actuators,
                sensors,
                display,
                clock,
            } = &mut self.fixture;
            let screen = &mut self.screen;
            self.wash
                .run(actuators, &*sensors, clock, duration_s, |remaining_s| {
                    show_on(&mut *display, &mut *screen, Screen::Washing { remaining_s })
                })
        };

        let session = self.session.get_or_insert_with(WashSession::default);
        session.record_wash(outcome.elapsed_ticks(duration_s));

        if let WashOutcome::Interrupted { .. } = outcome {
            // Skip inspection; the stop is handled right away
            self.handle_safety_trip();
            return;
        }

        self.show(Screen::Scanning);
        let verdict = self
            .config
            .inspection_policy
            .resolve(self.inspector.try_inspect());

        if !verdict.is_dirty {
            log::info!("Disc inspected clean");
            self.apply(Event::InspectionPassed);
            return;
        }

        let session = self.session.get_or_insert_with(WashSession::default);
        session.record_residue();
        let retries = session.retry_count;
        log::info!("Residue found, re-wash #{}", retries);

        if session.retries_exhausted(self.config.max_retries) {
            log::warn!("Still dirty after {} re-washes, giving up", retries);
            self.show(Screen::RetryLimit);
            self.fixture
                .clock
                .sleep_ms(self.config.timing.retry_limit_notice_ms);
            self.apply(Event::RetryLimitReached);
        } else {
            self.show(Screen::DirtFound);
            self.fixture.clock.sleep_ms(self.config.timing.dirty_notice_ms);
            self.apply(Event::ResidueFound);
        }
    }

    fn handle_finished(&mut self) {
        self.show(Screen::Complete);
        self.fixture.clock.sleep_ms(self.config.timing.finished_dwell_ms);
        self.apply(Event::DwellElapsed);
    }

    fn start_pressed(&self) -> bool {
        self.fixture.sensors.read_digital(Input::Start)
    }

    /// Step the phase; the session ends once the clamp no longer holds a disc
    fn apply(&mut self, event: Event) {
        let next = self.phase.transition(event);
        if event.is_safety_event() {
            log::warn!("{:?} -> {:?} on {:?}", self.phase, next, event);
        } else if next != self.phase {
            log::info!("{:?} -> {:?} on {:?}", self.phase, next, event);
        }
        self.phase = next;
        if !next.holds_disc() {
            self.session = None;
        }
    }

    fn show(&mut self, screen: Screen) {
        show_on(&mut self.fixture.display, &mut self.screen, screen);
    }
}

/// Draw `screen` unless it is already on the panel
fn show_on(display: &mut impl StatusDisplay, current: &mut Option<Screen>, screen: Screen) {
    if *current == Some(screen) {
        return;
    }
    let (line1, line2) = screen.lines();
    display.show(&line1, &line2);
    *current = Some(screen);
}
