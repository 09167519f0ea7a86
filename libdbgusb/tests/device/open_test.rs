#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libdbgusb::device::open_with;
use libdbgusb::transport::mock::{MockBus, MockDevice};
use libdbgusb::{Error, IdTable};

#[test]
fn unlisted_devices_are_skipped_without_opening() {
    let bus = MockBus::new(vec![
        MockDevice::new(0x046d, 0xc52b),
        MockDevice::new(0x0483, 0xdf11),
        fixtures::legacy_stlink(),
    ]);
    let h = open_with(bus, &fixtures::stlink_table(), None).unwrap();
    assert_eq!(h.product_id().unwrap(), fixtures::STLINK_V2.product_id);
    assert_eq!(h.bus().opened, vec![2]);
}

#[test]
fn enumeration_order_decides_between_table_entries() {
    // Table order is STLINK_V2 then STLINK_V2_1, bus order wins
    let bus = MockBus::new(vec![
        fixtures::modern_stlink(fixtures::MODERN_SERIAL),
        fixtures::legacy_stlink(),
    ]);
    let h = open_with(bus, &fixtures::stlink_table(), None).unwrap();
    assert_eq!(h.product_id().unwrap(), fixtures::STLINK_V2_1.product_id);
}

#[test]
fn nothing_attached_is_not_found() {
    let bus = MockBus::new(Vec::new());
    assert!(matches!(
        open_with(bus, &fixtures::stlink_table(), None),
        Err(Error::NotFound)
    ));
}

#[test]
fn sentinel_hides_trailing_entries() {
    let table = IdTable::from_terminated(&[0, 0x0483], &[0, 0x3748]);
    let bus = MockBus::new(vec![fixtures::legacy_stlink()]);
    assert!(matches!(open_with(bus, &table, None), Err(Error::NotFound)));
}

#[test]
fn close_then_reopen_uses_a_new_context() {
    let bus = MockBus::new(vec![fixtures::legacy_stlink()]);
    let h = open_with(bus, &fixtures::stlink_table(), None).unwrap();
    h.close();

    let bus = MockBus::new(vec![fixtures::legacy_stlink()]);
    let h = open_with(bus, &fixtures::stlink_table(), None).unwrap();
    assert_eq!(h.bus().opened, vec![0]);
}
