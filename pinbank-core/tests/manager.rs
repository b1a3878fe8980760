//! Property tests for reservation and batch I/O over whole boards

use pinbank_core::config::parse_pin_map;
use pinbank_core::{Board, NullSink, PinDriver, PinError, PinId, PinManager, PinMode};
use proptest::prelude::*;

const PINS: usize = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Configure(u8, PinMode),
    ReadDigital(u8),
    ReadAnalog(u8),
    WriteDigital(u8, bool),
    WriteAnalog(u8, u16),
}

/// Driver recording every hardware access
#[derive(Default)]
struct RecordingDriver {
    calls: Vec<Call>,
}

impl RecordingDriver {
    fn reads(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::ReadDigital(_) | Call::ReadAnalog(_)))
            .count()
    }

    fn writes(&self) -> Vec<Call> {
        self.calls
            .iter()
            .copied()
            .filter(|c| matches!(c, Call::WriteDigital(..) | Call::WriteAnalog(..)))
            .collect()
    }
}

impl PinDriver for RecordingDriver {
    fn configure(&mut self, pin: u8, mode: PinMode) {
        self.calls.push(Call::Configure(pin, mode));
    }

    fn read_digital(&mut self, pin: u8) -> bool {
        self.calls.push(Call::ReadDigital(pin));
        pin % 2 == 1
    }

    fn read_analog(&mut self, pin: u8) -> u16 {
        self.calls.push(Call::ReadAnalog(pin));
        u16::from(pin) * 10
    }

    fn write_digital(&mut self, pin: u8, high: bool) {
        self.calls.push(Call::WriteDigital(pin, high));
    }

    fn write_analog(&mut self, pin: u8, value: u16) {
        self.calls.push(Call::WriteAnalog(pin, value));
    }
}

type Manager = PinManager<RecordingDriver, NullSink, PINS>;

fn manager() -> Manager {
    PinManager::new(RecordingDriver::default(), NullSink)
}

fn pin(raw: u8) -> PinId<PINS> {
    PinId::new(raw).unwrap()
}

fn any_mode() -> impl Strategy<Value = PinMode> {
    prop::sample::select(PinMode::ALL.to_vec())
}

proptest! {
    #[test]
    fn second_reservation_keeps_first_mode(
        raw in 0u8..PINS as u8,
        first in any_mode(),
        second in any_mode(),
    ) {
        let mut pins = manager();
        let id = pin(raw);

        prop_assert_eq!(pins.reserve(id, first), Ok(()));
        prop_assert_eq!(pins.reserve(id, second), Err(PinError::AlreadyReserved));
        prop_assert_eq!(pins.mode(id), Some(first));
        prop_assert_eq!(pins.driver().calls.len(), 1);
    }

    #[test]
    fn unreserved_pins_reject_access(raw in 0u8..PINS as u8, value in any::<u16>()) {
        let mut pins = manager();
        let id = pin(raw);

        prop_assert_eq!(pins.read(id), Err(PinError::NotReserved));
        prop_assert_eq!(pins.write(id, value), Err(PinError::NotReserved));
        prop_assert!(pins.driver().calls.is_empty());
    }

    #[test]
    fn raw_numbers_beyond_board_rejected(raw in PINS as u8..=u8::MAX) {
        let mut pins = manager();
        prop_assert_eq!(pins.pin(raw), Err(PinError::OutOfRange));
    }

    #[test]
    fn digital_out_accepts_only_bits(raw in 0u8..PINS as u8, value in any::<u16>()) {
        let mut pins = manager();
        let id = pin(raw);
        pins.reserve(id, PinMode::DigitalOut).unwrap();

        let result = pins.write(id, value);
        if value <= 1 {
            prop_assert_eq!(result, Ok(()));
            prop_assert_eq!(pins.value(id), Ok(value));
        } else {
            prop_assert_eq!(result, Err(PinError::ValueOutOfRange));
            prop_assert_eq!(pins.value(id), Ok(0));
        }
    }

    #[test]
    fn batches_touch_only_matching_pins(modes in prop::collection::vec(any_mode(), PINS)) {
        let mut pins = manager();
        for (raw, mode) in modes.iter().enumerate() {
            pins.reserve(pin(raw as u8), *mode).unwrap();
        }
        let inputs = modes.iter().filter(|m| m.is_input()).count();
        let outputs = modes.iter().filter(|m| m.is_output()).count();

        pins.driver_mut().calls.clear();
        prop_assert_eq!(pins.read_all(), inputs);
        prop_assert_eq!(pins.driver().reads(), inputs);
        prop_assert!(pins.driver().writes().is_empty());

        pins.driver_mut().calls.clear();
        prop_assert_eq!(pins.write_all(), outputs);
        prop_assert_eq!(pins.driver().reads(), 0);
        prop_assert_eq!(pins.driver().writes().len(), outputs);
    }
}

#[test]
fn staged_digital_write_reaches_hardware_once() {
    let mut pins = manager();
    pins.reserve(pin(3), PinMode::DigitalOut).unwrap();

    assert_eq!(pins.write(pin(3), 2), Err(PinError::ValueOutOfRange));
    assert_eq!(pins.write(pin(3), 1), Ok(()));

    pins.write_all();
    assert_eq!(pins.driver().writes(), vec![Call::WriteDigital(3, true)]);
}

#[test]
fn write_to_digital_input_rejected() {
    let mut pins = manager();
    pins.reserve(pin(5), PinMode::DigitalIn).unwrap();
    pins.read_all();
    let before = pins.value(pin(5));

    assert_eq!(pins.write(pin(5), 1), Err(PinError::WrongDirection));
    assert_eq!(pins.value(pin(5)), before);
}

#[test]
fn mixed_pins_batch_counts() {
    let mut pins = manager();
    pins.reserve(pin(2), PinMode::DigitalIn).unwrap();
    pins.reserve(pin(54), PinMode::AnalogIn).unwrap();
    pins.reserve(pin(7), PinMode::DigitalInPullup).unwrap();
    pins.reserve(pin(13), PinMode::DigitalOut).unwrap();
    pins.reserve(pin(9), PinMode::AnalogOut).unwrap();
    pins.driver_mut().calls.clear();

    pins.read_all();
    assert_eq!(pins.driver().reads(), 3);
    assert_eq!(pins.driver().writes().len(), 0);
    assert_eq!(pins.value(pin(7)), Ok(1));
    assert_eq!(pins.value(pin(54)), Ok(540));

    pins.driver_mut().calls.clear();
    pins.write_all();
    assert_eq!(pins.driver().reads(), 0);
    assert_eq!(pins.driver().writes().len(), 2);
}

#[test]
fn write_all_twice_repeats_identical_writes() {
    let mut pins = manager();
    pins.reserve(pin(9), PinMode::AnalogOut).unwrap();
    pins.write(pin(9), 128).unwrap();
    pins.driver_mut().calls.clear();

    pins.write_all();
    pins.write_all();
    assert_eq!(
        pins.driver().writes(),
        vec![Call::WriteAnalog(9, 128), Call::WriteAnalog(9, 128)]
    );
}

#[test]
fn pin_map_drives_a_control_loop() {
    let input = r#"
        [pin.button]
        pin = "D3"
        mode = "digital_in_pullup"

        [pin.led]
        pin = "D13"
        mode = "digital_out"
    "#;
    let map = parse_pin_map(input, Board::Mega2560).unwrap();

    let mut pins = manager();
    assert_eq!(map.apply(&mut pins), Ok(2));

    let button = pin(map.find("button").unwrap().pin);
    let led = pin(map.find("led").unwrap().pin);

    // Odd pins read high on the recording driver
    pins.cycle(|pins| {
        let level = pins.value(button).unwrap();
        pins.write(led, level).unwrap();
    });

    assert_eq!(pins.driver().writes(), vec![Call::WriteDigital(13, true)]);
}
