//! Configuration types
//!
//! A pin map lists the reservations a board makes at setup time. It can be
//! built in code or parsed from a small TOML subset.

pub mod toml;
pub mod types;

pub use self::toml::{parse_pin_map, ParseError};
pub use types::*;
