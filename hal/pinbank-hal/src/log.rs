//! Diagnostic line sinks
//!
//! The pin manager reports every rejected operation as one human-readable
//! line. Sinks decide where those lines go; none of them affect pin state.

use crate::uart::UartTx;

/// Line-oriented diagnostic output
pub trait DiagnosticSink {
    /// Emit a single line (no terminator included)
    fn log_line(&mut self, line: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn log_line(&mut self, line: &str) {
        (**self).log_line(line)
    }
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn log_line(&mut self, _line: &str) {}
}

/// Sink writing CRLF-terminated lines to a serial port
///
/// Lines are dropped while the port is not ready. Transmit errors are
/// ignored: logging must never block the control loop.
pub struct UartSink<U> {
    uart: U,
}

impl<U: UartTx> UartSink<U> {
    /// Wrap a UART transmitter
    pub fn new(uart: U) -> Self {
        Self { uart }
    }

    /// Release the UART
    pub fn into_inner(self) -> U {
        self.uart
    }
}

impl<U: UartTx> DiagnosticSink for UartSink<U> {
    fn log_line(&mut self, line: &str) {
        if !self.uart.is_ready() {
            return;
        }
        if self.uart.write_blocking(line.as_bytes()).is_ok() {
            let _ = self.uart.write_blocking(b"\r\n");
            let _ = self.uart.flush();
        }
    }
}
