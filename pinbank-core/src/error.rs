//! Pin access errors

use core::fmt;

/// Reasons a pin operation is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin was already bound to a mode
    AlreadyReserved,
    /// Pin was never reserved
    NotReserved,
    /// Mode has no read/write discipline (bus pins)
    InvalidMode,
    /// Read from an output or write to an input
    WrongDirection,
    /// Value outside the range accepted by the pin's mode
    ValueOutOfRange,
    /// Pin index beyond the board's pin count
    OutOfRange,
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PinError::AlreadyReserved => "already reserved",
            PinError::NotReserved => "not reserved",
            PinError::InvalidMode => "mode does not support direct access",
            PinError::WrongDirection => "wrong direction for this mode",
            PinError::ValueOutOfRange => "value out of range",
            PinError::OutOfRange => "no such pin on this board",
        })
    }
}
