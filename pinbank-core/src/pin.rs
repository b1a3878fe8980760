//! Bounds-checked pin identifiers

use core::fmt;

use crate::error::PinError;

/// Index of a physical pin on a board with `N` pins
///
/// Construction is the only place a raw index is checked; every manager
/// operation takes a `PinId` and can index its slot table directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId<const N: usize>(u8);

impl<const N: usize> PinId<N> {
    /// Validate a raw pin number
    pub const fn new(raw: u8) -> Result<Self, PinError> {
        if (raw as usize) < N {
            Ok(Self(raw))
        } else {
            Err(PinError::OutOfRange)
        }
    }

    /// Raw pin number as passed to the driver
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Slot index
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every pin on the board, ascending
    ///
    /// Pin numbers are `u8`, so boards wider than 256 pins are truncated.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N.min(256)).map(|i| Self(i as u8))
    }
}

impl<const N: usize> TryFrom<u8> for PinId<N> {
    type Error = PinError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl<const N: usize> From<PinId<N>> for u8 {
    fn from(pin: PinId<N>) -> u8 {
        pin.0
    }
}

impl<const N: usize> fmt::Display for PinId<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
