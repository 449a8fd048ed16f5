use std::error::Error;

use blecent_diag::adv::Completeness;
use blecent_diag::{
    btuuid, log_adv_fields, log_conn_descriptor, AddressType, AdvFields, BleAddr, ConnectionDescriptor, DeviceName,
    SecurityState, UuidList,
};
use tracing::info;
use tracing::metadata::LevelFilter;

fn main() -> Result<(), Box<dyn Error>> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::DEBUG.into())
                .from_env_lossy(),
        )
        .init();

    let fields = AdvFields {
        flags: Some(0x06),
        uuids16: Some(UuidList::new(Completeness::Complete, [0x180d, 0x180f])),
        uuids128: Some(UuidList::new(Completeness::Incomplete, [btuuid::services::HEART_RATE])),
        name: Some(DeviceName::new(b"nimble-bleprph", Completeness::Complete)?),
        tx_pwr_lvl: Some(0),
        appearance: Some(0x0341),
        mfg_data: Some(vec![0xff, 0xff, 0x01, 0x02]),
        ..Default::default()
    };

    info!("advertisement report");
    log_adv_fields(&fields);

    let desc = ConnectionDescriptor {
        conn_handle: 1,
        our_ota_addr: BleAddr::from_raw(1, [0x3c, 0x71, 0xbf, 0x00, 0x11, 0xc2])?,
        our_id_addr: BleAddr::new(AddressType::Public, [0x3c, 0x71, 0xbf, 0x00, 0x11, 0x22]),
        peer_ota_addr: BleAddr::new(AddressType::Random, [0x01, 0x02, 0x03, 0x04, 0x05, 0xc6]),
        peer_id_addr: BleAddr::new(AddressType::RandomId, [0x01, 0x02, 0x03, 0x04, 0x05, 0xc6]),
        conn_itvl: 40,
        conn_latency: 0,
        supervision_timeout: 256,
        sec_state: SecurityState::default(),
    };

    info!("connection established");
    log_conn_descriptor(&desc);

    Ok(())
}
