//! Advertisement field reporting
//!
//! [`AdvFields`] is the decoded form of the data a peripheral broadcasts about itself. Every sub-field is optional
//! and absent fields contribute nothing to the report. Present fields are reported one line each, always in the
//! same order:
//!
//! ```text
//! flags=0x06
//! uuids16(complete)=0x180d 0x180f
//! name(complete)=Thermometer
//! tx_pwr_lvl=-4
//! ```

use std::fmt::Write;

use smallvec::SmallVec;
use tracing::debug;
use uuid::Uuid;

use crate::address::Address;
use crate::btuuid::{BleUuid, BluetoothUuidExt};
use crate::error::{Error, ErrorKind};
use crate::hex::HexBytes;
use crate::Result;

/// Size of the device name buffer, equal to the maximum legacy advertising payload.
///
/// A name must be strictly shorter than this so that it fits along with its NUL terminator.
pub const NAME_BUF_LEN: usize = 31;

/// Length of the class of device field in octets
pub const DEVICE_CLASS_LEN: usize = 3;

/// Length of the peripheral connection interval range field in octets
pub const PERIPHERAL_ITVL_RANGE_LEN: usize = 4;

/// Whether a list or name carries the full value or a shortened one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Completeness {
    /// The full list or name
    Complete,
    /// A partial list or a shortened name
    Incomplete,
}

impl Completeness {
    /// Converts a host stack `*_is_complete` flag
    pub fn from_flag(is_complete: bool) -> Self {
        if is_complete {
            Completeness::Complete
        } else {
            Completeness::Incomplete
        }
    }
}

impl std::fmt::Display for Completeness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Completeness::Complete => f.write_str("complete"),
            Completeness::Incomplete => f.write_str("incomplete"),
        }
    }
}

/// A list of advertised service UUIDs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UuidList<T> {
    /// Whether the peripheral advertised all of its services
    pub completeness: Completeness,
    /// The UUIDs in advertised order
    pub uuids: SmallVec<[T; 4]>,
}

impl<T> UuidList<T> {
    /// Creates a `UuidList`
    pub fn new(completeness: Completeness, uuids: impl IntoIterator<Item = T>) -> Self {
        UuidList {
            completeness,
            uuids: uuids.into_iter().collect(),
        }
    }
}

impl UuidList<Uuid> {
    /// Creates a list of 128-bit UUIDs packed back to back in storage order.
    ///
    /// Fails with [`ErrorKind::InvalidLength`] if `bytes` is not a whole number of 16-octet entries.
    pub fn from_packed(bytes: &[u8], completeness: Completeness) -> Result<Self> {
        let chunks = bytes.chunks_exact(16);
        if !chunks.remainder().is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidLength,
                format!("{} octets of 128-bit UUIDs", bytes.len()),
            ));
        }

        let uuids = chunks.map(|chunk| {
            let mut raw = [0u8; 16];
            raw.copy_from_slice(chunk);
            Uuid::from_storage_bytes(raw)
        });
        Ok(UuidList::new(completeness, uuids))
    }
}

/// An advertised device name held in a bounded buffer.
///
/// Names of [`NAME_BUF_LEN`] octets or more are rejected when the value is created, so every `DeviceName` fits its
/// buffer with a NUL terminator.
///
/// Displayed names are always a single line. Valid UTF-8 is shown as is, control characters are escaped, and octets
/// that are not valid UTF-8 are shown as `\xNN`.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "RawDeviceName", try_from = "RawDeviceName")
)]
pub struct DeviceName {
    buf: [u8; NAME_BUF_LEN],
    len: usize,
    completeness: Completeness,
}

impl DeviceName {
    /// Copies `name` into a new `DeviceName`.
    ///
    /// Fails with [`ErrorKind::NameTooLong`] if `name` is [`NAME_BUF_LEN`] octets or longer.
    pub fn new(name: &[u8], completeness: Completeness) -> Result<Self> {
        if name.len() >= NAME_BUF_LEN {
            return Err(Error::new(
                ErrorKind::NameTooLong,
                format!("{} octets, limit is {}", name.len(), NAME_BUF_LEN - 1),
            ));
        }

        let mut buf = [0u8; NAME_BUF_LEN];
        buf[..name.len()].copy_from_slice(name);
        buf[name.len()] = 0;
        Ok(DeviceName {
            buf,
            len: name.len(),
            completeness,
        })
    }

    /// Whether this is the complete or the shortened name
    pub fn completeness(&self) -> Completeness {
        self.completeness
    }

    /// The name octets
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The name octets followed by the NUL terminator
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }
}

impl std::fmt::Debug for DeviceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceName")
            .field("name", &format_args!("{self}"))
            .field("completeness", &self.completeness)
            .finish()
    }
}

impl std::fmt::Display for DeviceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            for c in chunk.valid().chars() {
                if c.is_control() {
                    write!(f, "{}", c.escape_debug())?;
                } else {
                    f.write_char(c)?;
                }
            }
            for b in chunk.invalid() {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawDeviceName {
    name: Vec<u8>,
    completeness: Completeness,
}

#[cfg(feature = "serde")]
impl From<DeviceName> for RawDeviceName {
    fn from(name: DeviceName) -> Self {
        RawDeviceName {
            name: name.as_bytes().to_vec(),
            completeness: name.completeness,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawDeviceName> for DeviceName {
    type Error = Error;

    fn try_from(raw: RawDeviceName) -> Result<Self> {
        DeviceName::new(&raw.name, raw.completeness)
    }
}

/// Decoded advertising data fields. `None` marks an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvFields {
    /// Flags (CSS §A.1.3)
    pub flags: Option<u8>,
    /// 16-bit service UUIDs (CSS §A.1.1)
    pub uuids16: Option<UuidList<u16>>,
    /// 32-bit service UUIDs (CSS §A.1.1)
    pub uuids32: Option<UuidList<u32>>,
    /// 128-bit service UUIDs (CSS §A.1.1)
    pub uuids128: Option<UuidList<Uuid>>,
    /// Local name (CSS §A.1.2)
    pub name: Option<DeviceName>,
    /// TX power level in dBm (CSS §A.1.5)
    pub tx_pwr_lvl: Option<i8>,
    /// Class of device, raw octets
    pub device_class: Option<[u8; DEVICE_CLASS_LEN]>,
    /// Peripheral connection interval range, raw octets (CSS §A.1.9)
    pub peripheral_itvl_range: Option<[u8; PERIPHERAL_ITVL_RANGE_LEN]>,
    /// Service data for a 16-bit UUID, including the UUID (CSS §A.1.11)
    pub svc_data_uuid16: Option<Vec<u8>>,
    /// Public target addresses (CSS §A.1.13)
    pub public_tgt_addrs: Option<Vec<Address>>,
    /// Appearance (CSS §A.1.12)
    pub appearance: Option<u16>,
    /// Advertising interval (CSS §A.1.15)
    pub adv_itvl: Option<u16>,
    /// LE Bluetooth device address (CSS §A.1.16)
    pub le_addr: Option<Address>,
    /// LE role (CSS §A.1.17)
    pub le_role: Option<u8>,
    /// Service data for a 32-bit UUID, including the UUID (CSS §A.1.11)
    pub svc_data_uuid32: Option<Vec<u8>>,
    /// Service data for a 128-bit UUID, including the UUID (CSS §A.1.11)
    pub svc_data_uuid128: Option<Vec<u8>>,
    /// URI, raw octets (CSS §A.1.18)
    pub uri: Option<Vec<u8>>,
    /// Manufacturer specific data, including the company identifier (CSS §A.1.4)
    pub mfg_data: Option<Vec<u8>>,
}

impl AdvFields {
    /// Splits public target addresses packed back to back in storage order.
    ///
    /// Fails with [`ErrorKind::InvalidLength`] if `bytes` is not a whole number of 6-octet entries.
    pub fn public_tgt_addrs_from_packed(bytes: &[u8]) -> Result<Vec<Address>> {
        let chunks = bytes.chunks_exact(Address::LEN);
        if !chunks.remainder().is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidLength,
                format!("{} octets of public target addresses", bytes.len()),
            ));
        }

        Ok(chunks
            .map(|chunk| {
                let mut raw = [0u8; Address::LEN];
                raw.copy_from_slice(chunk);
                Address(raw)
            })
            .collect())
    }

    /// Returns `true` if no field is present
    pub fn is_empty(&self) -> bool {
        *self == AdvFields::default()
    }
}

fn uuid_list_line<T>(label: &str, list: &UuidList<T>, render: impl Fn(&T) -> String) -> String {
    let items: Vec<String> = list.uuids.iter().map(render).collect();
    format!("{label}({})={}", list.completeness, items.join(" "))
}

/// Formats every present field of `fields`, one line per field, in a fixed order.
pub fn format_adv_fields(fields: &AdvFields) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(flags) = fields.flags {
        lines.push(format!("flags=0x{flags:02x}"));
    }

    if let Some(list) = &fields.uuids16 {
        lines.push(uuid_list_line("uuids16", list, |u| format!("0x{u:04x}")));
    }

    if let Some(list) = &fields.uuids32 {
        lines.push(uuid_list_line("uuids32", list, |u| format!("0x{u:08x}")));
    }

    if let Some(list) = &fields.uuids128 {
        lines.push(uuid_list_line("uuids128", list, |u| BleUuid(u).to_string()));
    }

    if let Some(name) = &fields.name {
        lines.push(format!("name({})={}", name.completeness(), name));
    }

    if let Some(tx_pwr_lvl) = fields.tx_pwr_lvl {
        lines.push(format!("tx_pwr_lvl={tx_pwr_lvl}"));
    }

    if let Some(device_class) = &fields.device_class {
        lines.push(format!("device_class={}", HexBytes(device_class)));
    }

    if let Some(range) = &fields.peripheral_itvl_range {
        lines.push(format!("peripheral_itvl_range={}", HexBytes(range)));
    }

    if let Some(data) = &fields.svc_data_uuid16 {
        lines.push(format!("svc_data_uuid16={}", HexBytes(data)));
    }

    if let Some(addrs) = &fields.public_tgt_addrs {
        let items: Vec<String> = addrs.iter().map(Address::to_string).collect();
        lines.push(format!("public_tgt_addr={}", items.join(" ")));
    }

    if let Some(appearance) = fields.appearance {
        lines.push(format!("appearance=0x{appearance:04x}"));
    }

    if let Some(adv_itvl) = fields.adv_itvl {
        lines.push(format!("adv_itvl=0x{adv_itvl:04x}"));
    }

    if let Some(le_addr) = &fields.le_addr {
        lines.push(format!("le_addr={le_addr}"));
    }

    if let Some(le_role) = fields.le_role {
        lines.push(format!("le_role=0x{le_role:02x}"));
    }

    if let Some(data) = &fields.svc_data_uuid32 {
        lines.push(format!("svc_data_uuid32={}", HexBytes(data)));
    }

    if let Some(data) = &fields.svc_data_uuid128 {
        lines.push(format!("svc_data_uuid128={}", HexBytes(data)));
    }

    if let Some(uri) = &fields.uri {
        lines.push(format!("uri={}", HexBytes(uri)));
    }

    if let Some(data) = &fields.mfg_data {
        lines.push(format!("mfg_data={}", HexBytes(data)));
    }

    lines
}

/// Logs every present field of `fields` as one debug event per field.
pub fn log_adv_fields(fields: &AdvFields) {
    for line in format_adv_fields(fields) {
        debug!("{}", line);
    }
}
