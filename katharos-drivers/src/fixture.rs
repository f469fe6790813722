//! Fixture ports over pin drivers
//!
//! Glue between the cycle logic and the individual drivers: relays and
//! servo behind [`ActuatorPort`], buttons and the encoder count behind
//! [`SensorPort`].

use katharos_core::traits::{ActuatorPort, BrushPosition, Input, Relay, SensorPort, TickCounter};
use katharos_hal::{InputPin, OutputPin, PwmOutput};

use crate::button::Button;
use crate::relay::RelayMotor;
use crate::servo::Servo;

/// Both motor relays plus the brush servo
pub struct FixtureActuators<C, W, B> {
    pub chuck: RelayMotor<C>,
    pub washer: RelayMotor<W>,
    pub brush: Servo<B>,
}

impl<C, W, B> FixtureActuators<C, W, B>
where
    C: OutputPin,
    W: OutputPin,
    B: PwmOutput,
{
    pub fn new(chuck: RelayMotor<C>, washer: RelayMotor<W>, brush: Servo<B>) -> Self {
        Self {
            chuck,
            washer,
            brush,
        }
    }
}

impl<C, W, B> ActuatorPort for FixtureActuators<C, W, B>
where
    C: OutputPin,
    W: OutputPin,
    B: PwmOutput,
{
    fn set_relay(&mut self, relay: Relay, on: bool) {
        match relay {
            Relay::Chuck => self.chuck.set(on),
            Relay::Washer => self.washer.set(on),
        }
    }

    fn set_position(&mut self, position: BrushPosition) {
        self.brush.set_position(position);
    }

    fn release(&mut self) {
        self.brush.release();
    }
}

/// Panel buttons plus the encoder count
pub struct FixtureSensors<'a, S, T> {
    pub start: Button<S>,
    pub stop: Button<T>,
    ticks: &'a TickCounter,
}

impl<'a, S: InputPin, T: InputPin> FixtureSensors<'a, S, T> {
    pub fn new(start: Button<S>, stop: Button<T>, ticks: &'a TickCounter) -> Self {
        Self { start, stop, ticks }
    }
}

impl<S: InputPin, T: InputPin> SensorPort for FixtureSensors<'_, S, T> {
    fn read_digital(&self, input: Input) -> bool {
        match input {
            Input::Start => self.start.is_pressed(),
            Input::Stop => self.stop.is_pressed(),
        }
    }

    fn ticks(&self) -> u32 {
        self.ticks.load()
    }

    fn reset_ticks(&self) {
        self.ticks.reset();
    }
}
