//! Pin map types

use heapless::{String, Vec};
use pinbank_hal::{DiagnosticSink, PinDriver, PinMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::PinError;
use crate::manager::PinManager;

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 16;

/// Maximum assignments per map (every pin of the largest board)
pub const MAX_ASSIGNMENTS: usize = 70;

/// One pin reservation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinAssignment {
    /// Name the application uses for the pin (e.g., "led", "pump")
    pub label: String<MAX_LABEL_LEN>,
    /// Raw board pin number
    pub pin: u8,
    /// Mode to reserve the pin for
    pub mode: PinMode,
}

/// Errors building a pin map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MapError {
    /// Label empty or longer than [`MAX_LABEL_LEN`]
    InvalidLabel,
    /// Label already used by another assignment
    DuplicateLabel,
    /// Pin already assigned under another label
    DuplicatePin,
    /// Pin number beyond the board
    InvalidPin,
    /// More than [`MAX_ASSIGNMENTS`] entries
    TooManyItems,
}

/// Setup-time reservation table for one board
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinMap {
    /// Board the pin numbers refer to
    pub board: Board,
    /// Assignments in declaration order
    pub assignments: Vec<PinAssignment, MAX_ASSIGNMENTS>,
}

impl PinMap {
    /// Create an empty map
    pub fn new(board: Board) -> Self {
        Self {
            board,
            assignments: Vec::new(),
        }
    }

    /// Add an assignment
    ///
    /// Labels and pins must be unique within the map.
    pub fn assign(&mut self, label: &str, pin: u8, mode: PinMode) -> Result<(), MapError> {
        if label.is_empty() {
            return Err(MapError::InvalidLabel);
        }
        let label = String::try_from(label).map_err(|_| MapError::InvalidLabel)?;

        if pin as usize >= self.board.pin_count() {
            return Err(MapError::InvalidPin);
        }
        if self.find(&label).is_some() {
            return Err(MapError::DuplicateLabel);
        }
        if self.assignments.iter().any(|a| a.pin == pin) {
            return Err(MapError::DuplicatePin);
        }

        self.assignments
            .push(PinAssignment { label, pin, mode })
            .map_err(|_| MapError::TooManyItems)
    }

    /// Look up an assignment by label
    pub fn find(&self, label: &str) -> Option<&PinAssignment> {
        self.assignments.iter().find(|a| a.label.as_str() == label)
    }

    /// Number of assignments
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Check if the map has no assignments
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Reserve every assignment on a manager, in declaration order
    ///
    /// Stops at the first rejected reservation and returns its error.
    /// Reservations made before the failure stay in place, since
    /// reservation cannot be undone. Returns the number of pins reserved.
    pub fn apply<D, S, const N: usize>(
        &self,
        pins: &mut PinManager<D, S, N>,
    ) -> Result<usize, PinError>
    where
        D: PinDriver,
        S: DiagnosticSink,
    {
        for assignment in &self.assignments {
            let id = pins.pin(assignment.pin)?;
            pins.reserve(id, assignment.mode)?;
        }
        Ok(self.assignments.len())
    }
}
