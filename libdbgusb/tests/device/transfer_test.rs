#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libdbgusb::device::open_with;
use libdbgusb::transport::mock::{MockBus, MockDevice};
use libdbgusb::transport::descriptor::{ConfigDescriptor, InterfaceDescriptor};
use libdbgusb::utils::ms;
use libdbgusb::InterfaceFilter;

fn open(dev: MockDevice) -> libdbgusb::DeviceHandle<MockBus> {
    open_with(MockBus::new(vec![dev]), &fixtures::stlink_table(), None).unwrap()
}

#[test]
fn write_then_read_on_chosen_endpoints() {
    let mut dev = fixtures::legacy_stlink();
    dev.push_response(hex::decode("80000000").unwrap());
    let mut h = open(dev);

    let eps = h.choose_interface(&InterfaceFilter::any()).unwrap();
    let mut cmd = hex::decode("f1800000").unwrap();
    assert_eq!(h.bulk_write(eps.write, &mut cmd, ms(1000)), 4);

    let mut rx = [0u8; 64];
    let n = h.bulk_read(eps.read, &mut rx, ms(1000));
    assert_eq!(hex::encode(&rx[..n]), "80000000");
    assert_eq!(h.bus().bulk_writes, vec![(0x01, cmd.to_vec())]);
}

#[test]
fn short_transfer_is_only_visible_in_the_count() {
    let mut dev = fixtures::legacy_stlink();
    dev.bulk_failure = Some(2);
    let mut h = open(dev);
    let mut data = [0u8; 16];
    let n = h.bulk_write(0x01, &mut data, ms(10));
    assert!(n < data.len());
    assert_eq!(n, 2);
}

#[test]
fn failing_control_transfer_reports_zero() {
    let mut dev = fixtures::legacy_stlink();
    dev.control_error = true;
    let mut h = open(dev);
    let mut buf = [0u8; 8];
    assert_eq!(h.control_transfer(0xc1, 0x01, 0, 0, &mut buf, ms(10)), 0);
}

#[test]
fn set_configuration_twice_issues_one_request() {
    let dev = fixtures::legacy_stlink().with_config(
        ConfigDescriptor::new(2).with_interface(
            InterfaceDescriptor::new(0, 0xff, 0, 0)
                .with_endpoint(0x81, 0x02)
                .with_endpoint(0x01, 0x02),
        ),
    );
    let mut h = open(dev);
    h.set_configuration(1).unwrap();
    h.set_configuration(1).unwrap();
    assert_eq!(h.bus().set_config_calls, vec![(0, 2)]);
}
