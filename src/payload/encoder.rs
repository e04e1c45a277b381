//! # Payload Encoder
//!
//! Appends DIB/VIB fields to a fixed-capacity buffer, either from raw
//! `(coding, VIF, value)` triples or from `(record code, scalar, value)`
//! pairs resolved through the VIF band table. A float convenience path
//! picks the coarsest scalar that still represents the value exactly.

use crate::constants::{
    MBUS_DEFAULT_BUFFER_SIZE, MBUS_DIF_FLAG_BCD, MBUS_DIF_MASK_WIDTH, MBUS_FLOAT_SCALING_DIGITS,
    MBUS_FLOAT_ZERO_EPSILON,
};
use crate::error::PayloadError;
use crate::payload::buffer::PayloadBuffer;
use crate::payload::code::RecordCode;
use crate::payload::encoding::{encode_bcd_le, encode_int_le};
use crate::payload::vif_table::vif_for_code;
use log::{debug, trace};

/// Encodes a sequence of DIB/VIB records into an owned buffer.
///
/// Not synchronized; an encoder owns its buffer exclusively and must not
/// be shared across call sites without external locking.
#[derive(Debug)]
pub struct PayloadEncoder {
    buffer: PayloadBuffer,
}

impl PayloadEncoder {
    /// Creates an encoder with the default 255-byte capacity.
    pub fn new() -> Self {
        Self::with_capacity(MBUS_DEFAULT_BUFFER_SIZE)
    }

    /// Creates an encoder with an explicit buffer capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        PayloadEncoder {
            buffer: PayloadBuffer::with_capacity(capacity),
        }
    }

    /// Appends one field from its raw parts: a DIF coding byte, a raw
    /// VIF/VIFE chain value, and the integer value.
    ///
    /// The coding byte packs the BCD flag (bit 3) and a 1..4 byte width
    /// selector (bits 0-2); anything else is [`PayloadError::UnsupportedCoding`].
    /// The VIF chain is written as its minimal big-endian encoding (at
    /// least one byte). Returns the new total buffer length; on overflow
    /// nothing is written.
    pub fn add_raw(&mut self, coding: u8, vif: u32, value: u32) -> Result<usize, PayloadError> {
        let bcd = coding & MBUS_DIF_FLAG_BCD != 0;
        let width = usize::from(coding & MBUS_DIF_MASK_WIDTH);
        if !(1..=4).contains(&width) {
            return Err(PayloadError::UnsupportedCoding(coding));
        }

        let vif_len = (4 - vif.leading_zeros() as usize / 8).max(1);

        let mut field = Vec::with_capacity(1 + vif_len + width);
        field.push(coding);
        for i in (0..vif_len).rev() {
            field.push((vif >> (8 * i)) as u8);
        }
        if bcd {
            field.extend(encode_bcd_le(value, width));
        } else {
            field.extend(encode_int_le(value, width));
        }

        trace!(
            "add_raw coding=0x{coding:02X} vif=0x{vif:02X} value={value}: {}",
            hex::encode(&field)
        );
        self.buffer.append(&field)
    }

    /// Appends one field for `(code, scalar, value)`, resolving the VIF
    /// through the band table and picking the smallest binary width that
    /// holds `value`.
    pub fn add_field(
        &mut self,
        code: RecordCode,
        scalar: i8,
        value: u32,
    ) -> Result<usize, PayloadError> {
        let vif =
            vif_for_code(code, scalar).ok_or(PayloadError::UnsupportedRange { code, scalar })?;

        let mut width: u8 = 1;
        let mut rest = value >> 8;
        while rest > 0 {
            rest >>= 8;
            width += 1;
        }

        self.add_raw(width, vif, value)
    }

    /// Appends one field for `(code, value)` with automatic scaling.
    ///
    /// Negative values are rejected; values below the zero floor encode
    /// as exactly zero at scalar 0.
    pub fn add_field_float(&mut self, code: RecordCode, value: f32) -> Result<usize, PayloadError> {
        if value < 0.0 {
            return Err(PayloadError::NegativeValue(value));
        }
        let (scalar, mantissa) = choose_scalar(code, f64::from(value));
        self.add_field(code, scalar, mantissa)
    }

    /// Number of bytes encoded so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Copies the encoded bytes into `dst`, returning how many were
    /// copied.
    pub fn copy_to(&self, dst: &mut [u8]) -> usize {
        self.buffer.copy_to(dst)
    }

    /// Discards the encoded bytes and rewinds the cursor.
    pub fn reset(&mut self) {
        self.buffer.reset();
    }
}

impl Default for PayloadEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the `(scalar, mantissa)` pair encoding `value` for `code`.
///
/// A fractional value is first shifted into an integer mantissa keeping
/// [`MBUS_FLOAT_SCALING_DIGITS`] significant decimal digits; the mantissa
/// is then normalized upward (divide by 10, bump the scalar) towards the
/// coarsest scalar that still represents the value exactly. Because the
/// band table only covers certain scalar ranges per code, normalization
/// past the last band-valid scalar steps back to it once any valid
/// scalar has been seen.
pub fn choose_scalar(code: RecordCode, value: f64) -> (i8, u32) {
    if value < MBUS_FLOAT_ZERO_EPSILON {
        return (0, 0);
    }

    let mut int_size: i8 = 0;
    let mut tmp = value as u32;
    while tmp > 10 {
        tmp /= 10;
        int_size += 1;
    }

    let mut scalar: i8 = 0;
    let mut shifted = value;
    let frac = value - value.trunc();
    if frac > MBUS_FLOAT_ZERO_EPSILON {
        scalar = int_size - MBUS_FLOAT_SCALING_DIGITS;
        let mut i = scalar;
        while i < 0 {
            shifted *= 10.0;
            i += 1;
        }
    }

    let mut valid = vif_for_code(code, scalar).is_some();
    let mut mantissa = shifted.round() as i64;
    while mantissa % 10 == 0 && mantissa != 0 {
        scalar += 1;
        mantissa /= 10;
        if vif_for_code(code, scalar).is_none() {
            if valid {
                scalar -= 1;
                mantissa *= 10;
                break;
            }
        } else {
            valid = true;
        }
    }

    debug!("choose_scalar {code:?} {value}: scalar={scalar} mantissa={mantissa}");
    (scalar, mantissa as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_scalar_prefers_coarsest_exact() {
        // 3.6 MJ normalizes all the way to 36 * 10^5 J
        assert_eq!(choose_scalar(RecordCode::EnergyJ, 36e5), (5, 36));
    }

    #[test]
    fn test_choose_scalar_fractional_backtrack() {
        // 128.6 W: the exact scalar -1 lies inside the primary power band
        assert_eq!(
            choose_scalar(RecordCode::PowerW, f64::from(128.6f32)),
            (-1, 1286)
        );
        // 0.057 m3 keeps three decimals
        assert_eq!(
            choose_scalar(RecordCode::VolumeM3, f64::from(0.057f32)),
            (-3, 57)
        );
    }

    #[test]
    fn test_choose_scalar_band_limited() {
        // 1.03 bar: the pressure band stops at scalar 0, backtrack lands
        // on -2 with mantissa 103
        assert_eq!(
            choose_scalar(RecordCode::PressureBar, f64::from(1.03f32)),
            (-2, 103)
        );
    }

    #[test]
    fn test_choose_scalar_zero_floor() {
        assert_eq!(choose_scalar(RecordCode::PowerW, 0.0), (0, 0));
        assert_eq!(choose_scalar(RecordCode::PowerW, 1e-9), (0, 0));
    }
}
