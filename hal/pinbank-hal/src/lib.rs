//! Pinbank Hardware Abstraction Layer
//!
//! This crate defines the narrow interfaces the pin manager consumes:
//! a board-specific pin driver and a line-oriented diagnostic sink.
//! Board support crates implement these; `pinbank-core` never touches
//! hardware registers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application control loop               │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinbank-core (PinManager)              │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   PinDriver   │       │ DiagnosticSink│
//! │ (this crate)  │       │ (this crate)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::PinDriver`] - Direction setup, digital/analog reads and writes
//! - [`log::DiagnosticSink`] - Human-readable failure lines
//! - [`uart::UartTx`] - Serial transmitter backing [`log::UartSink`]

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod log;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{Direction, PinDriver, PinMode};
pub use log::{DiagnosticSink, NullSink, UartSink};
pub use uart::UartTx;
