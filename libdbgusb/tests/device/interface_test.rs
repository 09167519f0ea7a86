#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libdbgusb::device::open_with;
use libdbgusb::transport::descriptor::{ConfigDescriptor, InterfaceDescriptor};
use libdbgusb::transport::mock::{MockBus, MockDevice};
use libdbgusb::{EndpointPair, Error, IdTable, InterfaceFilter, TransferType};

fn open_composite() -> libdbgusb::DeviceHandle<MockBus> {
    let bus = MockBus::new(vec![fixtures::composite_adapter(fixtures::JLINK, "1")]);
    open_with(bus, &IdTable::new(&[fixtures::JLINK]), None).unwrap()
}

#[test]
fn unfiltered_choice_is_first_complete_interface() {
    let mut h = open_composite();
    let eps = h.choose_interface(&InterfaceFilter::any()).unwrap();
    assert_eq!(eps, EndpointPair { read: 0x81, write: 0x01 });
    assert_eq!(h.claimed_interfaces().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn bulk_vendor_interface() {
    let mut h = open_composite();
    let filter = InterfaceFilter::from_raw(0xff, 0, 0, 2);
    let eps = h.choose_interface(&filter).unwrap();
    assert_eq!(eps, EndpointPair { read: 0x82, write: 0x02 });
    assert_eq!(h.bus().claimed, vec![(0, 1)]);
}

#[test]
fn bulk_cdc_interface() {
    let mut h = open_composite();
    let filter = InterfaceFilter::any()
        .class(0x0a)
        .transfer_type(TransferType::Bulk);
    assert_eq!(
        h.choose_interface(&filter).unwrap(),
        EndpointPair { read: 0x84, write: 0x04 }
    );
}

#[test]
fn unmatched_filter_leaves_nothing_claimed() {
    let mut h = open_composite();
    let filter = InterfaceFilter::any().class(0x08);
    assert!(matches!(h.choose_interface(&filter), Err(Error::NotFound)));
    assert!(h.bus().claimed.is_empty());
    assert_eq!(h.endpoints(), EndpointPair::default());
}

#[test]
fn choosing_again_claims_the_new_interface() {
    let mut h = open_composite();
    h.choose_interface(&InterfaceFilter::any()).unwrap();
    let eps = h
        .choose_interface(&InterfaceFilter::any().class(0xff))
        .unwrap();
    assert_eq!(h.endpoints(), eps);
    assert_eq!(h.claimed_interfaces().collect::<Vec<_>>(), vec![0, 1]);
    h.close();
}

#[test]
fn endpoints_split_over_interfaces_claim_the_completing_one() {
    let dev = MockDevice::new(fixtures::JLINK.vendor_id, fixtures::JLINK.product_id).with_config(
        ConfigDescriptor::new(1)
            .with_interface(InterfaceDescriptor::new(0, 0xff, 0, 0).with_endpoint(0x81, 0x02))
            .with_interface(InterfaceDescriptor::new(1, 0xff, 0, 0).with_endpoint(0x01, 0x02)),
    );
    let bus = MockBus::new(vec![dev]);
    let mut h = open_with(bus, &IdTable::new(&[fixtures::JLINK]), None).unwrap();

    let eps = h.choose_interface(&InterfaceFilter::any()).unwrap();
    assert_eq!(eps, EndpointPair { read: 0x81, write: 0x01 });
    assert_eq!(h.claimed_interfaces().collect::<Vec<_>>(), vec![1]);
}
