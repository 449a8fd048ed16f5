//! Connection descriptor reporting

use tracing::debug;

use crate::address::BleAddr;

/// Link security state of a connection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecurityState {
    /// The link is encrypted
    pub encrypted: bool,
    /// The link key was generated with MITM protection
    pub authenticated: bool,
    /// The peer is bonded
    pub bonded: bool,
}

/// A snapshot of the negotiated parameters and identities of one connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionDescriptor {
    /// Connection handle
    pub conn_handle: u16,
    /// Our over-the-air address
    pub our_ota_addr: BleAddr,
    /// Our identity address
    pub our_id_addr: BleAddr,
    /// The peer's over-the-air address
    pub peer_ota_addr: BleAddr,
    /// The peer's identity address
    pub peer_id_addr: BleAddr,
    /// Connection interval, in units of 1.25 ms
    pub conn_itvl: u16,
    /// Peripheral latency, in connection events
    pub conn_latency: u16,
    /// Supervision timeout, in units of 10 ms
    pub supervision_timeout: u16,
    /// Link security
    pub sec_state: SecurityState,
}

impl std::fmt::Display for ConnectionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "handle={} our_ota_addr_type={} our_ota_addr={} ",
            self.conn_handle,
            self.our_ota_addr.type_code(),
            self.our_ota_addr.val
        )?;
        write!(
            f,
            "our_id_addr_type={} our_id_addr={} ",
            self.our_id_addr.type_code(),
            self.our_id_addr.val
        )?;
        write!(
            f,
            "peer_ota_addr_type={} peer_ota_addr={} ",
            self.peer_ota_addr.type_code(),
            self.peer_ota_addr.val
        )?;
        write!(
            f,
            "peer_id_addr_type={} peer_id_addr={} ",
            self.peer_id_addr.type_code(),
            self.peer_id_addr.val
        )?;
        write!(
            f,
            "conn_itvl={} conn_latency={} supervision_timeout={} encrypted={} authenticated={} bonded={}",
            self.conn_itvl,
            self.conn_latency,
            self.supervision_timeout,
            u8::from(self.sec_state.encrypted),
            u8::from(self.sec_state.authenticated),
            u8::from(self.sec_state.bonded)
        )
    }
}

/// Formats `desc` as a single line of `key=value` clauses.
pub fn format_conn_descriptor(desc: &ConnectionDescriptor) -> String {
    desc.to_string()
}

/// Logs `desc` as a single debug event.
pub fn log_conn_descriptor(desc: &ConnectionDescriptor) {
    debug!("{}", desc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressType;

    fn descriptor() -> ConnectionDescriptor {
        ConnectionDescriptor {
            conn_handle: 1,
            our_ota_addr: BleAddr::new(AddressType::Public, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]),
            our_id_addr: BleAddr::new(AddressType::Public, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]),
            peer_ota_addr: BleAddr::new(AddressType::Random, [0x11, 0x22, 0x33, 0x44, 0x55, 0xc6]),
            peer_id_addr: BleAddr::new(AddressType::RandomId, [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]),
            conn_itvl: 40,
            conn_latency: 0,
            supervision_timeout: 256,
            sec_state: SecurityState {
                encrypted: true,
                authenticated: false,
                bonded: true,
            },
        }
    }

    #[test]
    fn golden_line() {
        assert_eq!(
            format_conn_descriptor(&descriptor()),
            "handle=1 our_ota_addr_type=0 our_ota_addr=06:05:04:03:02:01 \
             our_id_addr_type=0 our_id_addr=06:05:04:03:02:01 \
             peer_ota_addr_type=1 peer_ota_addr=c6:55:44:33:22:11 \
             peer_id_addr_type=3 peer_id_addr=ff:ee:dd:cc:bb:aa \
             conn_itvl=40 conn_latency=0 supervision_timeout=256 encrypted=1 authenticated=0 bonded=1"
        );
    }

    #[test]
    fn distinct_addresses_in_one_line() {
        let line = format_conn_descriptor(&descriptor());
        assert!(line.contains("our_ota_addr=06:05:04:03:02:01"));
        assert!(line.contains("peer_id_addr=ff:ee:dd:cc:bb:aa"));
    }
}
