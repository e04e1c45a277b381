//! # Payload Decoder
//!
//! Walks a fully-buffered DIB/VIB record sequence field by field:
//! DIF (length + coding kind), DIFE chain (skipped), big-endian VIF/VIFE
//! chain (continuation bit 0x80), band lookup, value reconstruction and
//! scaling. Any failure aborts the whole decode; no partial record list
//! is returned.

use crate::constants::{
    MBUS_DIF_MASK_DATA, MBUS_EXTENSION_BIT, MBUS_VIF_PATTERN_DATE, MBUS_VIF_PATTERN_DATETIME,
};
use crate::error::PayloadError;
use crate::payload::code::{name_for, units_for, RecordCode};
use crate::payload::encoding::{decode_bcd_le, decode_int_le, decode_real_le, decode_type_f,
    decode_type_g};
use crate::payload::vif_table::find_definition;
use log::{debug, trace};
use serde::Serialize;

/// One decoded DIB/VIB field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedRecord {
    /// Raw VIF/VIFE chain value, big-endian accumulated.
    pub vif: u32,
    pub code: RecordCode,
    /// Effective decimal exponent (band scalar plus in-band offset).
    pub scalar: i8,
    /// Raw integer value; the bit pattern for real-coded fields, the
    /// compact `YYMMDD[hhss]` form for time points.
    pub value_raw: i64,
    /// `value_raw * 10^scalar`, or the reinterpreted float for
    /// real-coded fields.
    pub value_scaled: f64,
    pub units: &'static str,
    pub name: &'static str,
    /// ISO-like string for valid type F/G time points.
    pub timestamp: Option<String>,
}

/// How the data bytes of a field are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    /// No data bytes (also covers the selection-for-readout nibble).
    None,
    Int,
    Bcd,
    Real,
    /// Variable length, not supported; carries no data here.
    Variable,
    /// Special function nibble, not decoded.
    Special,
    Date,
    DateTime,
}

/// Data length and coding kind selected by the low DIF nibble.
fn dif_data_format(nibble: u8) -> (usize, ValueKind) {
    match nibble {
        0x00 => (0, ValueKind::None),
        0x01 => (1, ValueKind::Int),
        0x02 => (2, ValueKind::Int),
        0x03 => (3, ValueKind::Int),
        0x04 => (4, ValueKind::Int),
        0x05 => (4, ValueKind::Real),
        0x06 => (6, ValueKind::Int),
        0x07 => (8, ValueKind::Int),
        0x08 => (0, ValueKind::None),
        0x09 => (1, ValueKind::Bcd),
        0x0A => (2, ValueKind::Bcd),
        0x0B => (3, ValueKind::Bcd),
        0x0C => (4, ValueKind::Bcd),
        0x0D => (0, ValueKind::Variable),
        0x0E => (6, ValueKind::Bcd),
        _ => (0, ValueKind::Special),
    }
}

fn truncated(available: usize) -> PayloadError {
    PayloadError::BufferOverflow {
        needed: 1,
        available,
    }
}

/// Decodes a buffered record sequence into an ordered list of records.
pub fn decode_records(input: &[u8]) -> Result<Vec<DecodedRecord>, PayloadError> {
    debug!("decoding {} payload bytes: {}", input.len(), hex::encode(input));

    let mut records = Vec::new();
    let mut index = 0;

    while index < input.len() {
        let dif = input[index];
        index += 1;
        let (len, mut kind) = dif_data_format(dif & MBUS_DIF_MASK_DATA);

        // Skip the DIFE chain; storage/tariff sub-addressing is not decoded.
        let mut extension = dif & MBUS_EXTENSION_BIT != 0;
        while extension {
            let dife = *input.get(index).ok_or(truncated(0))?;
            index += 1;
            extension = dife & MBUS_EXTENSION_BIT != 0;
        }

        // Accumulate the VIF/VIFE chain big-endian while the continuation
        // bit of the last byte is set.
        let mut vif: u32 = 0;
        loop {
            let byte = *input.get(index).ok_or(truncated(0))?;
            index += 1;
            vif = (vif << 8) + u32::from(byte);
            if byte & MBUS_EXTENSION_BIT == 0 {
                break;
            }
        }

        let def = find_definition(vif).ok_or(PayloadError::UnsupportedVif(vif))?;

        // Type F/G time points fix the coding regardless of the DIF nibble.
        if vif & MBUS_VIF_PATTERN_DATETIME == MBUS_VIF_PATTERN_DATETIME {
            kind = ValueKind::DateTime;
        } else if vif & MBUS_VIF_PATTERN_DATE == MBUS_VIF_PATTERN_DATE {
            kind = ValueKind::Date;
        }

        if index + len > input.len() {
            return Err(PayloadError::BufferOverflow {
                needed: len,
                available: input.len() - index,
            });
        }
        let data = &input[index..index + len];
        index += len;

        let mut value_raw: i64 = 0;
        let mut real_value: Option<f32> = None;
        let mut timestamp: Option<String> = None;

        match kind {
            ValueKind::Int => {
                let (_, v) = decode_int_le(data, len)
                    .map_err(|_| truncated(data.len()))?;
                value_raw = v;
            }
            ValueKind::Bcd => {
                let (_, v) = decode_bcd_le(data, len)
                    .map_err(|_| truncated(data.len()))?;
                value_raw = v;
            }
            ValueKind::Real => {
                let (_, v) = decode_real_le(data)
                    .map_err(|_| truncated(data.len()))?;
                value_raw = i64::from(v.to_bits());
                real_value = Some(v);
            }
            ValueKind::DateTime => {
                // A DIF shorter than CP32 cannot carry a type F value.
                if let Ok(bytes) = <[u8; 4]>::try_from(data) {
                    let dt = decode_type_f(bytes);
                    value_raw = dt.compact().unwrap_or(0);
                    timestamp = dt.iso_string();
                }
            }
            ValueKind::Date => {
                if let Ok(bytes) = <[u8; 2]>::try_from(data) {
                    let date = decode_type_g(bytes);
                    value_raw = date.compact().unwrap_or(0);
                    timestamp = date.iso_string();
                }
            }
            // Placeholder nibbles still emit a zero-valued record.
            ValueKind::None | ValueKind::Variable | ValueKind::Special => {}
        }

        let scalar = (i32::from(def.scalar) + (vif - def.base) as i32) as i8;
        let value_scaled = match real_value {
            Some(v) => f64::from(v),
            // Repeated multiply/divide keeps the exact granularity of the
            // encoder's own scale walk.
            None => {
                let mut scaled = value_raw as f64;
                let mut i = 0;
                while i < scalar {
                    scaled *= 10.0;
                    i += 1;
                }
                let mut i = scalar;
                while i < 0 {
                    scaled /= 10.0;
                    i += 1;
                }
                scaled
            }
        };

        trace!(
            "field {}: vif=0x{vif:02X} code={:?} scalar={scalar} raw={value_raw}",
            records.len(),
            def.code
        );

        records.push(DecodedRecord {
            vif,
            code: def.code,
            scalar,
            value_raw,
            value_scaled,
            units: units_for(def.code),
            name: name_for(def.code),
            timestamp,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dif_data_format_table() {
        assert_eq!(dif_data_format(0x00), (0, ValueKind::None));
        assert_eq!(dif_data_format(0x04), (4, ValueKind::Int));
        assert_eq!(dif_data_format(0x05), (4, ValueKind::Real));
        assert_eq!(dif_data_format(0x07), (8, ValueKind::Int));
        assert_eq!(dif_data_format(0x0C), (4, ValueKind::Bcd));
        assert_eq!(dif_data_format(0x0D), (0, ValueKind::Variable));
        assert_eq!(dif_data_format(0x0E), (6, ValueKind::Bcd));
        assert_eq!(dif_data_format(0x0F), (0, ValueKind::Special));
    }

    #[test]
    fn test_single_int_field() {
        let records = decode_records(&[0x01, 0x13, 0x39]).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.code, RecordCode::VolumeM3);
        assert_eq!(r.scalar, -3);
        assert_eq!(r.value_raw, 57);
        assert_eq!(r.units, "m3");
        assert_eq!(r.name, "volume");
        assert!(r.timestamp.is_none());
    }

    #[test]
    fn test_dife_chain_is_skipped() {
        // DIF 0x81 chains one DIFE (0x10, storage number), then VIF 0x13
        let records = decode_records(&[0x81, 0x10, 0x13, 0x39]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value_raw, 57);
    }

    #[test]
    fn test_truncated_vif_chain() {
        let err = decode_records(&[0x01, 0xFB]).unwrap_err();
        assert!(matches!(err, PayloadError::BufferOverflow { .. }));
    }

    #[test]
    fn test_missing_data_bytes() {
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
    fn test_unsupported_vif() {
        let err = decode_records(&[0x01, 0x6F, 0x00]).unwrap_err();
        assert_eq!(err, PayloadError::UnsupportedVif(0x6F));
    }

    #[test]
    fn test_scaling_walks_band_offset() {
        // VIF 0x2A = power band base 0x28, scalar -3 + 2
        let records = decode_records(&[0x02, 0x2A, 0x06, 0x05]).unwrap();
        assert_eq!(records[0].scalar, -1);
        assert_eq!(records[0].value_raw, 1286);
        assert!((records[0].value_scaled - 128.6).abs() < 1e-9);
    }
}
