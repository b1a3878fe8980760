//! Board definitions
//!
//! The pin count is the only board property the manager needs; it is fixed
//! at build time through a `board-*` cargo feature. Analog pin numbering is
//! used when parsing pin names such as `"A0"`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(all(feature = "board-mkrwifi1010", feature = "board-mega2560"))]
compile_error!("enable only one board-* feature");

/// Supported boards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Board {
    /// Arduino MKR WiFi 1010 (SAMD21)
    MkrWifi1010,
    /// Arduino Mega 2560 (ATmega2560)
    Mega2560,
}

impl Board {
    /// Number of addressable pins, digital and analog combined
    pub const fn pin_count(self) -> usize {
        match self {
            Board::MkrWifi1010 => 21,
            Board::Mega2560 => 70,
        }
    }

    /// Pin number of `A0`; analog pins follow contiguously
    pub const fn analog_base(self) -> u8 {
        match self {
            Board::MkrWifi1010 => 15,
            Board::Mega2560 => 54,
        }
    }

    /// Largest value `analogWrite` accepts at the default 8-bit resolution
    pub const fn analog_write_max(self) -> u16 {
        match self {
            Board::MkrWifi1010 | Board::Mega2560 => 255,
        }
    }

    /// Human-readable board name
    pub const fn name(self) -> &'static str {
        match self {
            Board::MkrWifi1010 => "Arduino MKR WiFi 1010",
            Board::Mega2560 => "Arduino Mega 2560",
        }
    }

    /// Parse a pin name into a raw pin number
    ///
    /// Supports formats:
    /// - "13" or "D13" -> 13
    /// - "A0" -> analog base + 0 (54 on the Mega)
    ///
    /// Returns `None` for malformed names and pins beyond the board.
    pub fn parse_pin(self, s: &str) -> Option<u8> {
        let s = s.trim();

        let pin = if let Some(num) = s.strip_prefix('A') {
            let channel: u8 = num.parse().ok()?;
            self.analog_base().checked_add(channel)?
        } else {
            let num = s.strip_prefix('D').unwrap_or(s);
            num.parse().ok()?
        };

        if pin as usize >= self.pin_count() {
            return None;
        }

        Some(pin)
    }
}

/// Board selected by the `board-*` feature
#[cfg(feature = "board-mkrwifi1010")]
pub const BOARD: Board = Board::MkrWifi1010;

/// Board selected by the `board-*` feature
#[cfg(feature = "board-mega2560")]
pub const BOARD: Board = Board::Mega2560;

/// Pin count of the selected board
#[cfg(any(feature = "board-mkrwifi1010", feature = "board-mega2560"))]
pub const BOARD_PIN_COUNT: usize = BOARD.pin_count();

/// Pin manager sized for the selected board
#[cfg(any(feature = "board-mkrwifi1010", feature = "board-mega2560"))]
pub type BoardPinManager<D, S> = crate::manager::PinManager<D, S, { BOARD_PIN_COUNT }>;
