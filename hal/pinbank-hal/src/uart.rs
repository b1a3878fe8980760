//! UART serial transmit abstraction
//!
//! The diagnostic log is usually a serial console, so only the
//! transmit half is modelled here.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Check if the port is open and a host is listening
    ///
    /// Boards with native USB report false until the host opens the port.
    fn is_ready(&self) -> bool {
        true
    }

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}
