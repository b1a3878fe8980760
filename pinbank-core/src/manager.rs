//! Pin manager
//!
//! Owns one slot per board pin. A slot is bound to a mode exactly once
//! (`Unreserved -> Reserved(mode)`, no way back) and then holds the pin's
//! current value:
//!
//! - input slots hold the sample taken by the last [`PinManager::read_all`]
//! - output slots hold the value last staged by [`PinManager::write`],
//!   which reaches hardware only on [`PinManager::write_all`]
//!
//! Every rejected operation is reported as one line on the diagnostic sink
//! and returned as an `Err`; nothing here panics.

use core::fmt::Write;

use heapless::String;
use pinbank_hal::{DiagnosticSink, PinDriver, PinMode};

use crate::board::Board;
use crate::error::PinError;
use crate::pin::PinId;

/// Capacity of one diagnostic line
pub const MAX_LINE_LEN: usize = 96;

/// Value-range limits applied when staging writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ManagerConfig {
    /// Largest value accepted for `AnalogOut` pins
    pub analog_write_max: u16,
}

impl ManagerConfig {
    /// Limits matching a board's default resolution
    pub const fn for_board(board: Board) -> Self {
        Self {
            analog_write_max: board.analog_write_max(),
        }
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            analog_write_max: 255,
        }
    }
}

/// Per-pin state; `mode` is `Some` iff the pin is reserved
#[derive(Debug, Clone, Copy)]
struct Slot {
    mode: Option<PinMode>,
    value: u16,
}

impl Slot {
    const UNRESERVED: Slot = Slot {
        mode: None,
        value: 0,
    };
}

/// Reservation table and I/O buffer for `N` pins
pub struct PinManager<D, S, const N: usize> {
    driver: D,
    sink: S,
    config: ManagerConfig,
    slots: [Slot; N],
}

impl<D: PinDriver, S: DiagnosticSink, const N: usize> PinManager<D, S, N> {
    /// Create a manager with every pin unreserved and default limits
    pub fn new(driver: D, sink: S) -> Self {
        Self::with_config(driver, sink, ManagerConfig::default())
    }

    /// Create a manager with explicit value limits
    pub fn with_config(driver: D, sink: S, config: ManagerConfig) -> Self {
        Self {
            driver,
            sink,
            config,
            slots: [Slot::UNRESERVED; N],
        }
    }

    /// Validate a raw pin number
    ///
    /// Same as [`PinId::new`], but an out-of-range number is also logged.
    pub fn pin(&mut self, raw: u8) -> Result<PinId<N>, PinError> {
        PinId::new(raw).map_err(|e| self.report(raw, None, e))
    }

    /// Bind a pin to a mode and configure its direction
    ///
    /// Reservation is one-shot: there is no release, and a second call for
    /// the same pin fails without touching the recorded mode or hardware.
    pub fn reserve(&mut self, pin: PinId<N>, mode: PinMode) -> Result<(), PinError> {
        if let Some(existing) = self.slots[pin.index()].mode {
            return Err(self.report(pin.number(), Some(existing), PinError::AlreadyReserved));
        }

        self.driver.configure(pin.number(), mode);
        self.slots[pin.index()].mode = Some(mode);

        #[cfg(feature = "defmt")]
        defmt::debug!("pin {} reserved as {}", pin.number(), mode);

        Ok(())
    }

    /// Sample a reserved input pin from hardware
    ///
    /// Digital inputs read as 0 or 1, analog inputs in raw ADC counts.
    /// Output pins are never touched and fail with `WrongDirection`.
    /// The slot buffer is not updated; that is [`Self::read_all`]'s job.
    pub fn read(&mut self, pin: PinId<N>) -> Result<u16, PinError> {
        let mode = self.reserved_mode(pin)?;
        Self::sample(&mut self.driver, pin.number(), mode)
            .map_err(|e| self.report(pin.number(), Some(mode), e))
    }

    /// Stage a value for a reserved output pin
    ///
    /// `DigitalOut` accepts 0 or 1, `AnalogOut` accepts up to
    /// [`ManagerConfig::analog_write_max`]. A rejected value leaves the
    /// staged value unchanged. Nothing is written to hardware until
    /// [`Self::write_all`].
    pub fn write(&mut self, pin: PinId<N>, value: u16) -> Result<(), PinError> {
        let mode = self.reserved_mode(pin)?;
        match self.check_write(mode, value) {
            Ok(()) => {
                self.slots[pin.index()].value = value;
                Ok(())
            }
            Err(e) => Err(self.report(pin.number(), Some(mode), e)),
        }
    }

    /// Refresh the buffer of every reserved input pin
    ///
    /// Output and bus pins are skipped. A pin that fails to read keeps its
    /// previous value; the failure is logged and the batch continues.
    /// Returns the number of pins sampled.
    pub fn read_all(&mut self) -> usize {
        let mut sampled = 0;

        for index in 0..N {
            let Some(mode) = self.slots[index].mode else {
                continue;
            };
            if !mode.is_input() {
                continue;
            }

            let pin = index as u8;
            match Self::sample(&mut self.driver, pin, mode) {
                Ok(value) => {
                    self.slots[index].value = value;
                    sampled += 1;
                }
                Err(e) => {
                    self.report(pin, Some(mode), e);
                }
            }
        }

        sampled
    }

    /// Push every staged output value to hardware
    ///
    /// Not consuming: calling twice writes the same values twice.
    /// Returns the number of pins written.
    pub fn write_all(&mut self) -> usize {
        let mut written = 0;

        for (index, slot) in self.slots.iter().enumerate() {
            let pin = index as u8;
            match slot.mode {
                Some(PinMode::DigitalOut) => self.driver.write_digital(pin, slot.value != 0),
                Some(PinMode::AnalogOut) => self.driver.write_analog(pin, slot.value),
                _ => continue,
            }
            written += 1;
        }

        written
    }

    /// Run one control loop iteration
    ///
    /// Inputs are sampled before `body` runs and staged outputs are flushed
    /// after it returns, so `body` sees a coherent snapshot of all inputs.
    pub fn cycle<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        self.read_all();
        let result = body(self);
        self.write_all();
        result
    }

    /// Buffered value of a reserved pin
    ///
    /// Pure lookup: no hardware access and no diagnostic output.
    pub fn value(&self, pin: PinId<N>) -> Result<u16, PinError> {
        let slot = &self.slots[pin.index()];
        slot.mode.map(|_| slot.value).ok_or(PinError::NotReserved)
    }

    /// Mode a pin is reserved for
    pub fn mode(&self, pin: PinId<N>) -> Option<PinMode> {
        self.slots[pin.index()].mode
    }

    /// Check if a pin has been reserved
    pub fn is_reserved(&self, pin: PinId<N>) -> bool {
        self.slots[pin.index()].mode.is_some()
    }

    /// Reserved pins and their modes, ascending by pin number
    pub fn reserved(&self) -> impl Iterator<Item = (PinId<N>, PinMode)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| Some((PinId::new(index as u8).ok()?, slot.mode?)))
    }

    /// Number of reserved pins
    pub fn reserved_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.mode.is_some()).count()
    }

    /// Active value limits
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Get the pin driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get the pin driver mutably
    ///
    /// Bypassing the manager this way is not tracked by the slot table.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Get the diagnostic sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Release the driver and sink
    pub fn into_parts(self) -> (D, S) {
        (self.driver, self.sink)
    }

    fn reserved_mode(&mut self, pin: PinId<N>) -> Result<PinMode, PinError> {
        match self.slots[pin.index()].mode {
            Some(mode) => Ok(mode),
            None => Err(self.report(pin.number(), None, PinError::NotReserved)),
        }
    }

    fn sample(driver: &mut D, pin: u8, mode: PinMode) -> Result<u16, PinError> {
        match mode {
            PinMode::DigitalIn | PinMode::DigitalInPullup => Ok(u16::from(driver.read_digital(pin))),
            PinMode::AnalogIn | PinMode::AnalogInPullup => Ok(driver.read_analog(pin)),
            PinMode::DigitalOut | PinMode::AnalogOut => Err(PinError::WrongDirection),
            PinMode::Bus => Err(PinError::InvalidMode),
        }
    }

    fn check_write(&self, mode: PinMode, value: u16) -> Result<(), PinError> {
        match mode {
            PinMode::DigitalOut if value > 1 => Err(PinError::ValueOutOfRange),
            PinMode::AnalogOut if value > self.config.analog_write_max => {
                Err(PinError::ValueOutOfRange)
            }
            PinMode::DigitalOut | PinMode::AnalogOut => Ok(()),
            PinMode::DigitalIn
            | PinMode::DigitalInPullup
            | PinMode::AnalogIn
            | PinMode::AnalogInPullup => Err(PinError::WrongDirection),
            PinMode::Bus => Err(PinError::InvalidMode),
        }
    }

    /// Log a rejected operation and hand the error back
    fn report(&mut self, pin: u8, mode: Option<PinMode>, error: PinError) -> PinError {
        #[cfg(feature = "defmt")]
        defmt::warn!("pin {} ({}): {}", pin, mode, error);

        let mut line: String<MAX_LINE_LEN> = String::new();
        let _ = match mode {
            Some(mode) => write!(line, "pin {pin} ({mode}): {error}"),
            None => write!(line, "pin {pin}: {error}"),
        };
        self.sink.log_line(&line);

        error
    }
}
