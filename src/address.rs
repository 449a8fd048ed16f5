//! Bluetooth device addresses

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{Error, ErrorKind};
use crate::Result;

/// A 6-octet Bluetooth device address, stored least significant octet first as the host stack keeps it.
///
/// Displays most significant octet first (`06:05:04:03:02:01` for storage `[1, 2, 3, 4, 5, 6]`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address(pub [u8; 6]);

impl Address {
    /// Length of an address in octets
    pub const LEN: usize = 6;

    /// Returns the raw octets in storage order.
    pub fn raw(&self) -> &[u8; 6] {
        &self.0
    }
}

impl From<[u8; 6]> for Address {
    fn from(bytes: [u8; 6]) -> Self {
        Address(bytes)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[5], b[4], b[3], b[2], b[1], b[0]
        )
    }
}

/// Formats a storage-order address as `xx:xx:xx:xx:xx:xx`, most significant octet first.
///
/// Each call returns a fresh `String`, so results from separate calls never alias.
pub fn format_address(addr: &[u8; 6]) -> String {
    Address(*addr).to_string()
}

/// Bluetooth LE address types as numbered by the host stack
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressType {
    /// Public device address
    Public = 0,
    /// Random device address
    Random = 1,
    /// Public identity address (resolved from a resolvable private address)
    PublicId = 2,
    /// Random static identity address (resolved from a resolvable private address)
    RandomId = 3,
}

/// An address together with its type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BleAddr {
    /// How `val` should be interpreted
    pub addr_type: AddressType,
    /// The address octets
    pub val: Address,
}

impl BleAddr {
    /// Creates a `BleAddr`
    pub fn new(addr_type: AddressType, val: impl Into<Address>) -> Self {
        BleAddr {
            addr_type,
            val: val.into(),
        }
    }

    /// Creates a `BleAddr` from a raw host stack type code.
    ///
    /// Fails with [`ErrorKind::InvalidAddressType`] if `addr_type` is not a known type.
    pub fn from_raw(addr_type: u8, val: [u8; 6]) -> Result<Self> {
        let addr_type = AddressType::try_from(addr_type)
            .map_err(|_| Error::new(ErrorKind::InvalidAddressType, format!("type code {addr_type}")))?;
        Ok(BleAddr::new(addr_type, val))
    }

    /// The numeric type code
    pub fn type_code(&self) -> u8 {
        self.addr_type.into()
    }
}

impl std::fmt::Display for BleAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (type {})", self.val, self.type_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_octets() {
        assert_eq!(format_address(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]), "06:05:04:03:02:01");
        assert_eq!(format_address(&[0xff, 0, 0, 0, 0, 0xab]), "ab:00:00:00:00:ff");
    }

    #[test]
    fn results_do_not_alias() {
        let first = format_address(&[1, 1, 1, 1, 1, 1]);
        let second = format_address(&[2, 2, 2, 2, 2, 2]);
        assert_eq!(first, "01:01:01:01:01:01");
        assert_eq!(second, "02:02:02:02:02:02");
    }

    #[test]
    fn idempotent() {
        let addr = [0xc0, 0xff, 0xee, 0x00, 0x12, 0x34];
        assert_eq!(format_address(&addr), format_address(&addr));
    }

    #[test]
    fn raw_type_codes() {
        let addr = BleAddr::from_raw(3, [1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(addr.addr_type, AddressType::RandomId);
        assert_eq!(addr.type_code(), 3);
        assert_eq!(addr.to_string(), "06:05:04:03:02:01 (type 3)");

        let err = BleAddr::from_raw(4, [0; 6]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAddressType);
    }
}
