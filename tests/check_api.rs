use blecent_diag::adv::{Completeness, NAME_BUF_LEN};
use blecent_diag::error::ErrorKind;
use blecent_diag::*;

fn check_address_apis() -> Result<BleAddr> {
    let _text: String = format_address(&[0; 6]);
    let addr: Address = Address::from([1, 2, 3, 4, 5, 6]);
    let _raw: &[u8; 6] = addr.raw();
    let ble_addr: BleAddr = BleAddr::from_raw(1, *addr.raw())?;
    let _code: u8 = ble_addr.type_code();
    let _kind: AddressType = ble_addr.addr_type;
    Ok(ble_addr)
}

fn check_uuid_apis() -> Uuid {
    let uuid: Uuid = Uuid::from_u16(0x180f);
    let _short: Option<u16> = uuid.try_to_u16();
    let _is_short: bool = uuid.is_u16_uuid();
    let raw: [u8; 16] = uuid.to_storage_bytes();
    let _text: String = format_uuid(&Uuid::from_storage_bytes(raw));
    log_uuid(&uuid);
    log_uuid_bytes(&raw);
    uuid
}

fn check_adv_apis(uuid: Uuid, addr: BleAddr) -> Result<AdvFields> {
    let name: DeviceName = DeviceName::new(b"sensor", Completeness::from_flag(false))?;
    let _bytes: &[u8] = name.as_bytes();
    let _completeness: Completeness = name.completeness();
    let uuids128: UuidList<Uuid> = UuidList::<Uuid>::from_packed(&uuid.to_storage_bytes(), Completeness::Complete)?;
    let public_tgt_addrs: Vec<Address> = AdvFields::public_tgt_addrs_from_packed(addr.val.raw())?;

    let fields = AdvFields {
        uuids128: Some(uuids128),
        name: Some(name),
        public_tgt_addrs: Some(public_tgt_addrs),
        le_addr: Some(addr.val),
        ..Default::default()
    };
    let _empty: bool = fields.is_empty();
    let _lines: Vec<String> = format_adv_fields(&fields);
    log_adv_fields(&fields);
    Ok(fields)
}

fn check_conn_apis(addr: BleAddr) -> String {
    let desc = ConnectionDescriptor {
        conn_handle: 0,
        our_ota_addr: addr,
        our_id_addr: addr,
        peer_ota_addr: addr,
        peer_id_addr: addr,
        conn_itvl: 6,
        conn_latency: 0,
        supervision_timeout: 100,
        sec_state: SecurityState::default(),
    };
    log_conn_descriptor(&desc);
    format_conn_descriptor(&desc)
}

#[test]
fn check_apis() -> Result<()> {
    let addr = check_address_apis()?;
    let uuid = check_uuid_apis();
    let fields = check_adv_apis(uuid, addr)?;
    assert_eq!(format_adv_fields(&fields).len(), 4);
    assert!(check_conn_apis(addr).starts_with("handle=0 our_ota_addr_type=1 "));

    log_bytes(&[]);
    assert_eq!(format_bytes(&[0xde, 0xad]), HexBytes(&[0xde, 0xad]).to_string());
    Ok(())
}

#[test]
fn check_errors() {
    let err: Error = DeviceName::new(&[0; NAME_BUF_LEN], Completeness::Complete).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NameTooLong);
    assert!(!err.message().is_empty());
    let _boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
}
