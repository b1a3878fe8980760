//! GPIO pin abstractions
//!
//! Provides the pin mode vocabulary and the driver trait that chip-specific
//! board support implements.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Access discipline a pin is reserved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PinMode {
    /// Floating digital input
    DigitalIn,
    /// Push-pull digital output
    DigitalOut,
    /// ADC input
    AnalogIn,
    /// PWM or DAC output
    AnalogOut,
    /// Digital input with internal pull-up
    DigitalInPullup,
    /// ADC input with internal pull-up
    AnalogInPullup,
    /// Claimed by a bus peripheral (I2C, SPI, UART); no direct I/O
    Bus,
}

/// Electrical direction a driver should configure for a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// High-impedance input
    Input,
    /// Input with pull-up enabled
    InputPullUp,
    /// Driven output
    Output,
    /// Leave the pin as the peripheral or ADC mux configures it
    Unmanaged,
}

impl PinMode {
    /// All modes, in declaration order
    pub const ALL: [PinMode; 7] = [
        PinMode::DigitalIn,
        PinMode::DigitalOut,
        PinMode::AnalogIn,
        PinMode::AnalogOut,
        PinMode::DigitalInPullup,
        PinMode::AnalogInPullup,
        PinMode::Bus,
    ];

    /// Check if the pin is sampled by batch reads
    pub const fn is_input(self) -> bool {
        matches!(
            self,
            PinMode::DigitalIn
                | PinMode::DigitalInPullup
                | PinMode::AnalogIn
                | PinMode::AnalogInPullup
        )
    }

    /// Check if the pin is driven by batch writes
    pub const fn is_output(self) -> bool {
        matches!(self, PinMode::DigitalOut | PinMode::AnalogOut)
    }

    /// Check if the pin uses the ADC or PWM/DAC path
    pub const fn is_analog(self) -> bool {
        matches!(
            self,
            PinMode::AnalogIn | PinMode::AnalogOut | PinMode::AnalogInPullup
        )
    }

    /// Check if the internal pull-up should be enabled
    pub const fn pull_up(self) -> bool {
        matches!(self, PinMode::DigitalInPullup | PinMode::AnalogInPullup)
    }

    /// Direction register setting for this mode
    ///
    /// Analog outputs and plain analog inputs are left to the PWM/ADC
    /// peripheral, which claims the pin itself on first use.
    pub const fn direction(self) -> Direction {
        match self {
            PinMode::DigitalIn => Direction::Input,
            PinMode::DigitalInPullup | PinMode::AnalogInPullup => Direction::InputPullUp,
            PinMode::DigitalOut => Direction::Output,
            PinMode::AnalogIn | PinMode::AnalogOut | PinMode::Bus => Direction::Unmanaged,
        }
    }

    /// Config-file name of the mode
    pub const fn name(self) -> &'static str {
        match self {
            PinMode::DigitalIn => "digital_in",
            PinMode::DigitalOut => "digital_out",
            PinMode::AnalogIn => "analog_in",
            PinMode::AnalogOut => "analog_out",
            PinMode::DigitalInPullup => "digital_in_pullup",
            PinMode::AnalogInPullup => "analog_in_pullup",
            PinMode::Bus => "bus",
        }
    }
}

impl fmt::Display for PinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised mode name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownMode;

impl FromStr for PinMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PinMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or(UnknownMode)
    }
}

/// Board pin driver
///
/// Pins are addressed by raw board index; the caller has already
/// bounds-checked them. Operations are synchronous and always complete.
/// Reads take `&mut self` because ADC conversions typically need
/// exclusive access to the converter.
pub trait PinDriver {
    /// Configure direction and pull registers for a freshly reserved pin
    fn configure(&mut self, pin: u8, mode: PinMode);

    /// Sample a digital input (true = logic 1)
    fn read_digital(&mut self, pin: u8) -> bool;

    /// Sample an analog input in raw ADC counts
    fn read_analog(&mut self, pin: u8) -> u16;

    /// Drive a digital output
    fn write_digital(&mut self, pin: u8, high: bool);

    /// Set an analog (PWM/DAC) output in raw counts
    fn write_analog(&mut self, pin: u8, value: u16);
}

impl<T: PinDriver + ?Sized> PinDriver for &mut T {
    fn configure(&mut self, pin: u8, mode: PinMode) {
        (**self).configure(pin, mode)
    }

    fn read_digital(&mut self, pin: u8) -> bool {
        (**self).read_digital(pin)
    }

    fn read_analog(&mut self, pin: u8) -> u16 {
        (**self).read_analog(pin)
    }

    fn write_digital(&mut self, pin: u8, high: bool) {
        (**self).write_digital(pin, high)
    }

    fn write_analog(&mut self, pin: u8, value: u16) {
        (**self).write_analog(pin, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_classes_are_disjoint() {
        for mode in PinMode::ALL {
            assert!(!(mode.is_input() && mode.is_output()), "{mode}");
        }
        assert!(!PinMode::Bus.is_input());
        assert!(!PinMode::Bus.is_output());
    }

    #[test]
    fn test_direction() {
        assert_eq!(PinMode::DigitalIn.direction(), Direction::Input);
        assert_eq!(PinMode::DigitalInPullup.direction(), Direction::InputPullUp);
        assert_eq!(PinMode::AnalogInPullup.direction(), Direction::InputPullUp);
        assert_eq!(PinMode::DigitalOut.direction(), Direction::Output);
        assert_eq!(PinMode::AnalogOut.direction(), Direction::Unmanaged);
        assert_eq!(PinMode::Bus.direction(), Direction::Unmanaged);
    }

    #[test]
    fn test_parse_mode_names() {
        for mode in PinMode::ALL {
            assert_eq!(mode.name().parse::<PinMode>(), Ok(mode));
        }
        assert_eq!("DIGITAL_IN".parse::<PinMode>(), Err(UnknownMode));
        assert_eq!("pwm".parse::<PinMode>(), Err(UnknownMode));
    }
}
