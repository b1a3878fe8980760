//! Pin map parser for a small TOML subset
//!
//! This is a minimal parser that handles only what a pin map needs and
//! allocates nothing. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - `[pin.<label>]` (or legacy `[pin <label>]`) section headers
//! - `pin = "D13"` / `pin = "A0"` / `pin = 13`
//! - `mode = "digital_out"` (any [`PinMode`] name)
//! - Comments (# ...), including trailing comments
//!
//! ```toml
//! [pin.button]
//! pin = "D2"
//! mode = "digital_in_pullup"
//!
//! [pin.pot]
//! pin = "A0"        # wiper
//! mode = "analog_in"
//! ```

use heapless::String as HString;
use pinbank_hal::PinMode;

use super::types::{MapError, PinMap, MAX_LABEL_LEN};
use crate::board::Board;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid section header or label
    InvalidSection,
    /// Line is neither a header nor `key = value`
    InvalidLine,
    /// Key not valid in the current section
    UnknownKey,
    /// Section ended without a `pin` or `mode`
    MissingField,
    /// Unrecognised pin name, or pin beyond the board
    InvalidPin,
    /// Unrecognised mode name
    InvalidMode,
    /// Label used by two sections
    DuplicateLabel,
    /// Pin used by two sections
    DuplicatePin,
    /// Too many sections (exceeded heapless capacity)
    TooManyItems,
}

impl From<MapError> for ParseError {
    fn from(e: MapError) -> Self {
        match e {
            MapError::InvalidLabel => ParseError::InvalidSection,
            MapError::DuplicateLabel => ParseError::DuplicateLabel,
            MapError::DuplicatePin => ParseError::DuplicatePin,
            MapError::InvalidPin => ParseError::InvalidPin,
            MapError::TooManyItems => ParseError::TooManyItems,
        }
    }
}

/// Section being filled in
struct PendingPin {
    label: HString<MAX_LABEL_LEN>,
    pin: Option<u8>,
    mode: Option<PinMode>,
}

/// Parse a pin map for `board`
pub fn parse_pin_map(input: &str, board: Board) -> Result<PinMap, ParseError> {
    let mut map = PinMap::new(board);
    let mut current: Option<PendingPin> = None;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            if let Some(pending) = current.take() {
                finish(&mut map, pending)?;
            }
            let label = parse_section_header(&line[1..line.len() - 1])?;
            current = Some(PendingPin {
                label,
                pin: None,
                mode: None,
            });
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;

        // Keys outside any section are not allowed
        let pending = current.as_mut().ok_or(ParseError::UnknownKey)?;
        let value = parse_string(value);

        match key {
            "pin" => pending.pin = Some(board.parse_pin(value).ok_or(ParseError::InvalidPin)?),
            "mode" => pending.mode = Some(value.parse().map_err(|_| ParseError::InvalidMode)?),
            _ => return Err(ParseError::UnknownKey),
        }
    }

    // Save final section
    if let Some(pending) = current.take() {
        finish(&mut map, pending)?;
    }

    Ok(map)
}

fn finish(map: &mut PinMap, pending: PendingPin) -> Result<(), ParseError> {
    let pin = pending.pin.ok_or(ParseError::MissingField)?;
    let mode = pending.mode.ok_or(ParseError::MissingField)?;
    map.assign(&pending.label, pin, mode)?;
    Ok(())
}

/// Parse section header like "pin.led" or "pin led"
fn parse_section_header(header: &str) -> Result<HString<MAX_LABEL_LEN>, ParseError> {
    let header = header.trim();

    let (kind, label) = header
        .split_once('.')
        .or_else(|| header.split_once(char::is_whitespace))
        .ok_or(ParseError::InvalidSection)?;

    let label = label.trim();
    if kind.trim() != "pin" || label.is_empty() || label.contains('.') {
        return Err(ParseError::InvalidSection);
    }

    HString::try_from(label).map_err(|_| ParseError::InvalidSection)
}

/// Drop a trailing comment, unless the `#` sits inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted values for bare pin numbers
        value
    }
}
