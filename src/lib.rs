#![warn(missing_docs)]

//! Blecent-diag turns the records a [Bluetooth Low Energy] central application receives from its host stack into
//! human-readable debug log lines. It covers raw byte sequences, device addresses, UUIDs, connection descriptors and
//! decoded advertising data.
//!
//! All output goes through [`tracing`] at debug level. Every formatter also has a `format_*` twin (and a `Display`
//! implementation on the underlying type) that returns the text instead of logging it, so it can be embedded in
//! larger messages or compared in tests.
//!
//! [Bluetooth Low Energy]: https://www.bluetooth.com/specifications/specs/
//!
//! # Usage
//!
//! ```rust
//!# use blecent_diag::{adv::Completeness, btuuid, AdvFields, DeviceName, UuidList};
//!# fn main() -> Result<(), Box<dyn std::error::Error>> {
//!let fields = AdvFields {
//!    flags: Some(0x06),
//!    uuids16: Some(UuidList::new(Completeness::Complete, [0x180d])),
//!    name: Some(DeviceName::new(b"HRM", Completeness::Complete)?),
//!    ..Default::default()
//!};
//!
//!blecent_diag::log_adv_fields(&fields);
//!assert_eq!(
//!    blecent_diag::format_adv_fields(&fields),
//!    ["flags=0x06", "uuids16(complete)=0x180d", "name(complete)=HRM"]
//!);
//!assert_eq!(blecent_diag::format_uuid(&btuuid::services::HEART_RATE), "180d");
//!#
//!#    Ok(())
//!# }
//! ```
//!
//! # Input validation
//!
//! The formatters are total: any value that can be constructed can be formatted without panicking. Inputs that the
//! host stack hands over in raw form are validated when they are converted, and the conversions return an
//! [`Error`] instead of reading out of bounds:
//!
//! - [`DeviceName::new`] rejects names that do not fit the bounded name buffer
//! - [`UuidList::from_packed`] and [`AdvFields::public_tgt_addrs_from_packed`] reject packed data that is not a
//!   whole number of entries
//! - [`BleAddr::from_raw`] rejects unknown address type codes
//!
//! # Feature flags
//!
//! The `serde` feature is available to enable serializing/deserializing all record types.

pub mod address;
pub mod adv;
pub mod btuuid;
pub mod conn;
pub mod error;
pub mod hex;

pub use address::{format_address, Address, AddressType, BleAddr};
pub use adv::{format_adv_fields, log_adv_fields, AdvFields, DeviceName, UuidList};
pub use btuuid::{format_uuid, log_uuid, log_uuid_bytes, BleUuid, BluetoothUuidExt};
pub use conn::{format_conn_descriptor, log_conn_descriptor, ConnectionDescriptor, SecurityState};
pub use error::Error;
pub use hex::{format_bytes, log_bytes, HexBytes};
pub use uuid::Uuid;

/// Convenience alias for a result with [`Error`]
pub type Result<T, E = Error> = core::result::Result<T, E>;
