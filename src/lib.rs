//! # mbus-payload - M-Bus DIB/VIB Record Encoding and Decoding
//!
//! The mbus-payload crate turns typed physical measurements (energy,
//! volume, power, temperature, time points, counters, ...) into the
//! compact DIB/VIB byte encoding used by wireless M-Bus meters, and
//! turns received byte sequences back into structured, unit-annotated
//! readings.
//!
//! ## Features
//!
//! - Encode fields from raw `(coding, VIF, value)` triples, from
//!   `(record code, scalar, value)` pairs, or from floats with automatic
//!   scale selection
//! - Fixed-capacity output buffer with overflow checking and
//!   all-or-nothing appends
//! - Decode binary integers (1-8 bytes, sign-extended), packed BCD
//!   (up to 12 digits), IEEE-754 binary32, and type F/G packed time
//!   points
//! - Static VIF band table covering the primary table plus the 0xFD and
//!   0xFB VIFE extension pages, with a catch-all for the 0xFC page
//! - Unit and name metadata on every decoded record, serde-serializable
//!
//! This is a payload codec only: framing, CRC handling, and transport
//! I/O are out of scope.
//!
//! ## Usage
//!
//! ```rust
//! use mbus_payload::{decode_records, PayloadEncoder, RecordCode};
//!
//! let mut encoder = PayloadEncoder::new();
//! encoder.add_field(RecordCode::VolumeM3, -3, 57).unwrap(); // 57 l
//! encoder.add_field_float(RecordCode::PowerW, 128.6).unwrap();
//!
//! let records = decode_records(encoder.as_bytes()).unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].value_raw, 57);
//! ```

pub mod constants;
pub mod error;
pub mod logging;
pub mod payload;

pub use crate::error::PayloadError;
pub use crate::logging::{init_logger, log_payload_hex};

// Core payload types
pub use payload::{
    choose_scalar, decode_records, find_definition, name_for, units_for, vif_for_code,
    DecodedRecord, PayloadBuffer, PayloadEncoder, RecordCode, VifDef, VIF_DEFS,
};
