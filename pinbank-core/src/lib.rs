//! Board-agnostic pin reservation and batched I/O
//!
//! This crate contains everything above the pin driver:
//!
//! - Bounds-checked pin identifiers
//! - Board definitions (pin counts, analog pin numbering)
//! - The pin manager: one-shot reservation, mode-checked access,
//!   and per-iteration batch reads/writes
//! - Pin map configuration parsed from a TOML subset
//!
//! A typical control loop:
//!
//! ```ignore
//! let mut pins = PinManager::<_, _, 70>::new(driver, sink);
//! let led = pins.pin(13)?;
//! let button = pins.pin(2)?;
//! pins.reserve(led, PinMode::DigitalOut)?;
//! pins.reserve(button, PinMode::DigitalInPullup)?;
//!
//! loop {
//!     pins.cycle(|pins| {
//!         let pressed = pins.value(button) == Ok(0);
//!         let _ = pins.write(led, pressed as u16);
//!     });
//! }
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod config;
pub mod error;
pub mod manager;
pub mod pin;

pub use board::Board;
pub use error::PinError;
pub use manager::{ManagerConfig, PinManager};
pub use pin::PinId;

pub use pinbank_hal::{DiagnosticSink, Direction, NullSink, PinDriver, PinMode};

#[cfg(any(feature = "board-mkrwifi1010", feature = "board-mega2560"))]
pub use board::{BoardPinManager, BOARD, BOARD_PIN_COUNT};
