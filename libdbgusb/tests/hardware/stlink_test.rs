#[path = "common.rs"]
mod common;

use libdbgusb::{InterfaceFilter, TransferType};
use serial_test::serial;

#[test]
#[serial]
#[ignore = "requires an attached ST-Link"]
fn open_and_choose_bulk_interface() -> anyhow::Result<()> {
    common::init_logger();
    let Some(mut h) = common::open_stlink()? else {
        return Ok(());
    };
    let pid = h.product_id()?;
    assert!(common::STLINK_PIDS.contains(&pid));

    let eps = h.choose_interface(&InterfaceFilter::any().transfer_type(TransferType::Bulk))?;
    assert!(eps.is_complete());
    assert_ne!(eps.read & 0x80, 0);
    assert_eq!(eps.write & 0x80, 0);
    h.close();
    Ok(())
}

#[test]
#[serial]
#[ignore = "requires an attached ST-Link"]
fn set_configuration_keeps_active_config() -> anyhow::Result<()> {
    common::init_logger();
    let Some(mut h) = common::open_stlink()? else {
        return Ok(());
    };
    h.set_configuration(0)?;
    h.set_configuration(0)?;
    h.close();
    Ok(())
}
