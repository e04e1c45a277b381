//! M-Bus Payload Protocol Constants
//!
//! This module defines constants used by the DIB/VIB payload codec,
//! based on the EN 13757-3 standard.

/// Default output buffer capacity for a payload encoder.
pub const MBUS_DEFAULT_BUFFER_SIZE: usize = 255;

// ----------------------------------------------------------------------------
// DIF coding selectors (low nibble of the DIF byte)
// ----------------------------------------------------------------------------

/// 8-bit binary integer
pub const MBUS_CODING_8BIT: u8 = 0x01;
/// 16-bit binary integer
pub const MBUS_CODING_16BIT: u8 = 0x02;
/// 24-bit binary integer
pub const MBUS_CODING_24BIT: u8 = 0x03;
/// 32-bit binary integer
pub const MBUS_CODING_32BIT: u8 = 0x04;
/// 2-digit BCD (1 byte)
pub const MBUS_CODING_2BCD: u8 = 0x09;
/// 4-digit BCD (2 bytes)
pub const MBUS_CODING_4BCD: u8 = 0x0A;
/// 6-digit BCD (3 bytes)
pub const MBUS_CODING_6BCD: u8 = 0x0B;
/// 8-digit BCD (4 bytes)
pub const MBUS_CODING_8BCD: u8 = 0x0C;

/// DIF mask for the data field (length + coding kind)
pub const MBUS_DIF_MASK_DATA: u8 = 0x0F;

/// DIF mask for the binary width selector used by the encoder
pub const MBUS_DIF_MASK_WIDTH: u8 = 0x07;

/// DIF flag selecting BCD coding on the encoder path
pub const MBUS_DIF_FLAG_BCD: u8 = 0x08;

/// Extension bit chaining DIFE and VIFE bytes
pub const MBUS_EXTENSION_BIT: u8 = 0x80;

// ----------------------------------------------------------------------------
// VIF patterns with a fixed data type (EN 13757-3 type F/G time points)
// ----------------------------------------------------------------------------

/// VIF pattern forcing type F (date and time, CP32) decoding
pub const MBUS_VIF_PATTERN_DATETIME: u32 = 0x6D;

/// VIF pattern forcing type G (date, CP16) decoding
pub const MBUS_VIF_PATTERN_DATE: u32 = 0x6C;

// ----------------------------------------------------------------------------
// Float auto-scaling
// ----------------------------------------------------------------------------

/// Decimal digit budget preserved when shifting a fractional value
/// into an integer mantissa. Six digits is the most 32-bit float input
/// can carry without its representation noise surviving the shift.
pub const MBUS_FLOAT_SCALING_DIGITS: i8 = 6;

/// Values below this floor are encoded as exactly zero.
pub const MBUS_FLOAT_ZERO_EPSILON: f64 = 1e-6;
