#![cfg(feature = "usb")]

//! Open a debug adapter and print the endpoints of its bulk interface.
//!
//! Usage:
//!   cargo run -p libdbgusb --example find_adapter --features usb -- 0483:3748 [SERIAL]

use libdbgusb::device::AdapterQuery;
use libdbgusb::{InterfaceFilter, Result, TransferType};

fn parse_id(arg: &str) -> Option<(u16, u16)> {
    let (vid, pid) = arg.split_once(':')?;
    Some((
        u16::from_str_radix(vid, 16).ok()?,
        u16::from_str_radix(pid, 16).ok()?,
    ))
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let id = args.next().as_deref().and_then(parse_id).unwrap_or((0x0483, 0x3748));
    let mut query = AdapterQuery::new().id(id.0, id.1);
    if let Some(serial) = args.next() {
        query = query.serial(serial);
    }

    let mut handle = query.open()?;
    println!("Opened adapter: {:04x}:{:04x}", id.0, handle.product_id()?);

    handle.set_configuration(0)?;
    let eps = handle.choose_interface(&InterfaceFilter::any().transfer_type(TransferType::Bulk))?;
    println!("Bulk endpoints: read=0x{:02x} write=0x{:02x}", eps.read, eps.write);
    for iface in handle.claimed_interfaces() {
        println!("Claimed interface {}", iface);
    }

    handle.close();
    Ok(())
}
