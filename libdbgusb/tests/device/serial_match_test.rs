#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libdbgusb::device::{open_with, AdapterQuery};
use libdbgusb::test_support;
use libdbgusb::transport::mock::MockBus;
use libdbgusb::{Error, IdTable};

#[test]
fn wrong_serial_first_right_serial_second() {
    let bus = MockBus::new(vec![
        fixtures::modern_stlink(b"AAAAAAAAAAAAAAAAAAAAAAAA"),
        fixtures::modern_stlink(fixtures::MODERN_SERIAL),
    ]);
    let wanted = std::str::from_utf8(fixtures::MODERN_SERIAL).unwrap();
    let h = open_with(bus, &fixtures::stlink_table(), Some(wanted)).unwrap();

    // The rejected first device was closed before the second was tried
    assert_eq!(h.bus().opened, vec![0, 1]);
    assert_eq!(h.bus().closed, vec![0]);
    assert_eq!(h.bus().open_handles(), vec![1]);
}

#[test]
fn legacy_serial_is_matched_as_hex() {
    let bus = MockBus::new(vec![
        fixtures::modern_stlink(fixtures::MODERN_SERIAL),
        fixtures::legacy_stlink(),
    ]);
    let h = open_with(bus, &fixtures::stlink_table(), Some(fixtures::LEGACY_SERIAL)).unwrap();
    assert_eq!(h.product_id().unwrap(), fixtures::STLINK_V2.product_id);
}

#[test]
fn lowercase_serial_does_not_match() {
    let bus = MockBus::new(vec![fixtures::legacy_stlink()]);
    let wanted = fixtures::LEGACY_SERIAL.to_lowercase();
    assert!(matches!(
        open_with(bus, &fixtures::stlink_table(), Some(&wanted)),
        Err(Error::NotFound)
    ));
}

#[test]
fn undecodable_serial_moves_on_to_next_device() {
    let mut broken = test_support::stlink_serial(b"BROKENBROKENBROKENBROKEN");
    broken[0] = 40;
    let bus = MockBus::new(vec![
        test_support::bulk_adapter(0x0483, 0x3748).with_raw_serial(broken),
        fixtures::legacy_stlink(),
    ]);
    let h = open_with(bus, &fixtures::stlink_table(), Some(fixtures::LEGACY_SERIAL)).unwrap();
    assert_eq!(h.bus().closed, vec![0]);
}

#[test]
fn non_stlink_vendor_reads_ascii_serial() {
    let bus = MockBus::new(vec![
        fixtures::composite_adapter(fixtures::JLINK, "000260012345"),
        fixtures::composite_adapter(fixtures::JLINK, "000260054321"),
    ]);
    let h = AdapterQuery::new()
        .ids(&IdTable::new(&[fixtures::JLINK]))
        .serial("000260054321")
        .open_with(bus)
        .unwrap();
    assert_eq!(h.bus().opened, vec![0, 1]);
}
