//! Integration tests for the payload decoder: binary, BCD, real and time
//! point fields, band-offset scaling, and error reporting.

use mbus_payload::{decode_records, PayloadError, RecordCode};

#[test]
fn test_empty_payload() {
    let records = decode_records(&[]).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_single_binary_field() {
    let records = decode_records(&[0x01, 0x13, 0x39]).unwrap();
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.vif, 0x13);
    assert_eq!(r.code, RecordCode::VolumeM3);
    assert_eq!(r.scalar, -3);
    assert_eq!(r.value_raw, 57);
    assert!((r.value_scaled - 0.057).abs() < 1e-12);
    assert_eq!(r.units, "m3");
    assert_eq!(r.name, "volume");
}

#[test]
fn test_primary_band_scalar_offsets() {
    let records = decode_records(&[0x02, 0x06, 0x78, 0x05]).unwrap();
    assert_eq!(records[0].code, RecordCode::EnergyWh);
    assert_eq!(records[0].scalar, 3);
    assert_eq!(records[0].value_raw, 1400);

    let records = decode_records(&[0x01, 0x07, 0x8C]).unwrap();
    assert_eq!(records[0].scalar, 4);
    assert_eq!(records[0].value_raw, 140);

    let records = decode_records(&[0x01, 0x2B, 0x00]).unwrap();
    assert_eq!(records[0].code, RecordCode::PowerW);
    assert_eq!(records[0].scalar, 0);
    assert_eq!(records[0].value_raw, 0);
}

#[test]
fn test_extension_page_field() {
    // VIF 0xFB01: 200 MWh
    let records = decode_records(&[0x01, 0xFB, 0x01, 0xC8]).unwrap();
    let r = &records[0];
    assert_eq!(r.vif, 0xFB01);
    assert_eq!(r.code, RecordCode::EnergyWh);
    assert_eq!(r.scalar, 6);
    assert_eq!(r.value_raw, 200);
    assert!((r.value_scaled - 2e8).abs() < 1e-3);
}

#[test]
fn test_multi_field() {
    let records =
        decode_records(&[0x01, 0x13, 0x39, 0x01, 0x0D, 0x24]).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].code, RecordCode::VolumeM3);
    assert_eq!(records[0].value_raw, 57);
    assert_eq!(records[1].code, RecordCode::EnergyJ);
    assert_eq!(records[1].scalar, 5);
    assert_eq!(records[1].value_raw, 36);
}

#[test]
fn test_2digit_bcd() {
    let records = decode_records(&[0x09, 0x06, 0x14]).unwrap();
    let r = &records[0];
    assert_eq!(r.code, RecordCode::EnergyWh);
    assert_eq!(r.scalar, 3);
    assert_eq!(r.value_raw, 14);
    assert!((r.value_scaled - 14000.0).abs() < 1e-9);
}

#[test]
fn test_8digit_bcd() {
    let records =
        decode_records(&[0x0C, 0x13, 0x13, 0x20, 0x00, 0x00]).unwrap();
    let r = &records[0];
    assert_eq!(r.code, RecordCode::VolumeM3);
    assert_eq!(r.value_raw, 2013);
    assert!((r.value_scaled - 2.013).abs() < 1e-12);
}

#[test]
fn test_real_field() {
    // 12.5 W as an IEEE 754 single
    let records =
        decode_records(&[0x05, 0x2B, 0x00, 0x00, 0x48, 0x41]).unwrap();
    let r = &records[0];
    assert_eq!(r.code, RecordCode::PowerW);
    assert_eq!(r.scalar, 0);
    assert_eq!(r.value_raw, i64::from(0x4148_0000u32));
    assert!((r.value_scaled - 12.5).abs() < 1e-9);
}

#[test]
fn test_negative_16bit_field() {
    let records = decode_records(&[0x02, 0x2B, 0xFE, 0xFF]).unwrap();
    assert_eq!(records[0].value_raw, -2);
    assert!((records[0].value_scaled + 2.0).abs() < 1e-9);
}

#[test]
fn test_type_g_date() {
    let records = decode_records(&[0x02, 0x6C, 0x0F, 0x35]).unwrap();
    let r = &records[0];
    assert_eq!(r.code, RecordCode::TimePointDate);
    assert_eq!(r.value_raw, 240515);
    assert_eq!(r.timestamp.as_deref(), Some("24-05-15"));
    assert_eq!(r.units, "Date_JJMMDD");
}

#[test]
fn test_type_g_date_invalid_month() {
    // month nibble 13 is out of range; the record survives as zero
    let records = decode_records(&[0x02, 0x6C, 0x0F, 0x3D]).unwrap();
    assert_eq!(records[0].value_raw, 0);
    assert!(records[0].timestamp.is_none());
}

#[test]
fn test_type_f_datetime() {
    let records =
        decode_records(&[0x04, 0x6D, 0x1E, 0x0D, 0x0F, 0x35]).unwrap();
    let r = &records[0];
    assert_eq!(r.code, RecordCode::TimePointDateTime);
    assert_eq!(r.value_raw, 2405151330);
    assert_eq!(r.timestamp.as_deref(), Some("24-05-15T13:30:00"));
    assert_eq!(r.units, "Time_JJMMDDhhmm");
}

#[test]
fn test_type_f_datetime_invalid_flag() {
    // bit 7 of the first byte marks the time point invalid
    let records =
        decode_records(&[0x04, 0x6D, 0x9E, 0x0D, 0x0F, 0x35]).unwrap();
    assert_eq!(records[0].value_raw, 0);
    assert!(records[0].timestamp.is_none());
}

#[test]
fn test_manufacturer_page_catch_all() {
    // 0xFC page codes decode with the in-page offset as the scalar
    let records = decode_records(&[0x01, 0xFC, 0x05, 0x2A]).unwrap();
    let r = &records[0];
    assert_eq!(r.vif, 0xFC05);
    assert_eq!(r.code, RecordCode::UnsupportedExt);
    assert_eq!(r.scalar, 5);
    assert_eq!(r.value_raw, 42);
    assert_eq!(r.units, "X");
    assert_eq!(r.name, "unsupported");
}

#[test]
fn test_dife_chain_is_skipped() {
    let records = decode_records(&[0x81, 0x10, 0x13, 0x39]).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value_raw, 57);
}

#[test]
fn test_unknown_vif_aborts_decode() {
    let err =
        decode_records(&[0x01, 0x13, 0x39, 0x01, 0xFD, 0x3D, 0x00]).unwrap_err();
    assert_eq!(err, PayloadError::UnsupportedVif(0xFD3D));
}

#[test]
fn test_truncated_data_reports_shortfall() {
    let err = decode_records(&[0x04, 0x13, 0x39]).unwrap_err();
    assert_eq!(
        err,
        PayloadError::BufferOverflow {
            needed: 4,
            available: 1
        }
    );
}

#[test]
fn test_record_serializes_to_json() {
    let records = decode_records(&[0x01, 0x13, 0x39]).unwrap();
    let json = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(json["code"], "VolumeM3");
    assert_eq!(json["scalar"], -3);
    assert_eq!(json["value_raw"], 57);
    assert_eq!(json["units"], "m3");
    assert_eq!(json["name"], "volume");
    assert!(json["timestamp"].is_null());
}
