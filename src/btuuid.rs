//! `Uuid` extensions for Bluetooth UUIDs and their diagnostic rendering

use tracing::debug;
use uuid::Uuid;

/// This is the Bluetooth Base UUID. It is used with 16-bit and 32-bit UUIDs
/// [defined](https://www.bluetooth.com/specifications/assigned-numbers/) by the Bluetooth SIG.
pub const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;

/// Const function to create a 16-bit Bluetooth UUID
pub const fn bluetooth_uuid_from_u16(uuid: u16) -> Uuid {
    Uuid::from_u128(((uuid as u128) << 96) | BLUETOOTH_BASE_UUID)
}

/// Extension trait for [uuid::Uuid] with helper methods for dealing with Bluetooth UUIDs
pub trait BluetoothUuidExt: private::Sealed {
    /// Creates a 16-bit Bluetooth UUID
    fn from_u16(uuid: u16) -> Self;

    /// Creates a UUID from 16 octets in host stack storage order (least significant octet first)
    fn from_storage_bytes(bytes: [u8; 16]) -> Self;

    /// Returns the 16 octets of self in host stack storage order (least significant octet first)
    fn to_storage_bytes(&self) -> [u8; 16];

    /// Returns `true` if self is a valid 16-bit Bluetooth UUID
    fn is_u16_uuid(&self) -> bool;

    /// Tries to convert self into a 16-bit Bluetooth UUID
    fn try_to_u16(&self) -> Option<u16>;
}

impl BluetoothUuidExt for Uuid {
    fn from_u16(uuid: u16) -> Self {
        bluetooth_uuid_from_u16(uuid)
    }

    fn from_storage_bytes(bytes: [u8; 16]) -> Self {
        Uuid::from_u128(u128::from_le_bytes(bytes))
    }

    fn to_storage_bytes(&self) -> [u8; 16] {
        self.as_u128().to_le_bytes()
    }

    fn is_u16_uuid(&self) -> bool {
        let u = self.as_u128();
        (u & ((1 << 96) - 1)) == BLUETOOTH_BASE_UUID && (((u >> 96) as u32) & 0xffff0000) == 0
    }

    fn try_to_u16(&self) -> Option<u16> {
        let u = self.as_u128();
        self.is_u16_uuid().then(|| (u >> 96) as u16)
    }
}

mod private {
    use uuid::Uuid;

    pub trait Sealed {}

    impl Sealed for Uuid {}
}

/// Renders a UUID in its shortest diagnostic form.
///
/// Values derived from the Bluetooth Base UUID with a non-zero 16-bit slot render as four hex digits (`180d`).
/// Everything else renders in the canonical hyphenated form (`6e400001-b5a3-f393-e0a9-e50e24dcca9e`). A zero slot
/// is not a valid short UUID and falls through to the long form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BleUuid<'a>(pub &'a Uuid);

impl std::fmt::Display for BleUuid<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.try_to_u16().filter(|&short| short != 0) {
            Some(short) => write!(f, "{short:04x}"),
            None => write!(f, "{}", self.0.hyphenated()),
        }
    }
}

/// Formats `uuid` as text. See [`BleUuid`].
pub fn format_uuid(uuid: &Uuid) -> String {
    BleUuid(uuid).to_string()
}

/// Logs `uuid` at debug level. See [`BleUuid`].
pub fn log_uuid(uuid: &Uuid) {
    debug!("{}", BleUuid(uuid));
}

/// Logs a UUID given as 16 octets in storage order.
pub fn log_uuid_bytes(bytes: &[u8; 16]) {
    log_uuid(&Uuid::from_storage_bytes(*bytes));
}

/// Bluetooth GATT Service 16-bit UUIDs
pub mod services {
    #![allow(missing_docs)]

    use uuid::Uuid;

    use super::bluetooth_uuid_from_u16;

    pub const GENERIC_ACCESS: Uuid = bluetooth_uuid_from_u16(0x1800);
    pub const GENERIC_ATTRIBUTE: Uuid = bluetooth_uuid_from_u16(0x1801);
    pub const IMMEDIATE_ALERT: Uuid = bluetooth_uuid_from_u16(0x1802);
    pub const LINK_LOSS: Uuid = bluetooth_uuid_from_u16(0x1803);
    pub const TX_POWER: Uuid = bluetooth_uuid_from_u16(0x1804);
    pub const CURRENT_TIME: Uuid = bluetooth_uuid_from_u16(0x1805);
    pub const DEVICE_INFORMATION: Uuid = bluetooth_uuid_from_u16(0x180A);
    pub const HEART_RATE: Uuid = bluetooth_uuid_from_u16(0x180D);
    pub const ALERT_NOTIFICATION: Uuid = bluetooth_uuid_from_u16(0x1811);
    pub const BATTERY: Uuid = bluetooth_uuid_from_u16(0x180F);
    pub const HUMAN_INTERFACE_DEVICE: Uuid = bluetooth_uuid_from_u16(0x1812);
}
