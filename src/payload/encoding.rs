//! # Field Value Encoding and Decoding
//!
//! Leaf codecs for the data part of a DIB/VIB record: little-endian
//! binary integers with staged sign extension, packed BCD, IEEE-754
//! binary32, and the EN 13757-3 type F/G packed time points.

use nom::{bytes::complete::take, combinator::map, IResult};

/// Decodes a little-endian binary integer of `size` bytes.
///
/// 2- and 4-byte fields are sign-extended through a container of matching
/// width so negative encoded values survive; other widths accumulate
/// unsigned into the 64-bit result.
pub fn decode_int_le(input: &[u8], size: usize) -> IResult<&[u8], i64> {
    map(take(size), |bytes: &[u8]| match bytes.len() {
        2 => i64::from(i16::from_le_bytes([bytes[0], bytes[1]])),
        4 => i64::from(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
        _ => {
            let mut value: u64 = 0;
            for (i, b) in bytes.iter().enumerate() {
                value |= u64::from(*b) << (8 * i);
            }
            value as i64
        }
    })(input)
}

/// Decodes a packed BCD value of `size` bytes, least-significant byte
/// first on the wire.
///
/// Each byte carries two decimal digits (`high nibble * 10 + low nibble`);
/// accumulation runs most-significant byte first. The 2- and 4-byte cases
/// go through the same staged containers as [`decode_int_le`]; BCD has no
/// sign bit, so staging only bounds the accumulator width.
pub fn decode_bcd_le(input: &[u8], size: usize) -> IResult<&[u8], i64> {
    fn digits(byte: u8) -> i64 {
        i64::from(byte >> 4) * 10 + i64::from(byte & 0x0F)
    }

    map(take(size), |bytes: &[u8]| {
        let acc = bytes.iter().rev().fold(0i64, |acc, b| acc * 100 + digits(*b));
        match bytes.len() {
            2 => i64::from(acc as i16),
            4 => i64::from(acc as i32),
            _ => acc,
        }
    })(input)
}

/// Reinterprets 4 little-endian bytes as an IEEE-754 binary32 value.
pub fn decode_real_le(input: &[u8]) -> IResult<&[u8], f32> {
    map(take(4usize), |bytes: &[u8]| {
        f32::from_bits(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    })(input)
}

/// Encodes `value` as a little-endian binary integer of `width` bytes,
/// truncating any higher bits.
pub fn encode_int_le(value: u32, width: usize) -> Vec<u8> {
    value.to_le_bytes()[..width].to_vec()
}

/// Encodes `value` as packed BCD over `width` bytes, least-significant
/// byte first.
///
/// Digits are extracted arithmetically; decimal digits beyond `2 * width`
/// are silently dropped.
pub fn encode_bcd_le(mut value: u32, width: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(width);
    for _ in 0..width {
        let ones = (value % 10) as u8;
        let tens = ((value / 10) % 10) as u8;
        out.push(tens * 16 + ones);
        value /= 100;
    }
    out
}

/// An EN 13757-3 type G (CP16) packed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeGDate {
    Valid { year: u8, month: u8, day: u8 },
    Invalid,
}

/// An EN 13757-3 type F (CP32) packed date and time.
///
/// The minutes field of the wire format is not carried; the source
/// format this codec mirrors only transports seconds and hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFDateTime {
    Valid {
        year: u8,
        month: u8,
        day: u8,
        hour: u8,
        second: u8,
    },
    Invalid,
}

/// Unpacks a type G date from its 2-byte wire form.
///
/// A month outside 1..=12 marks the value unusable.
pub fn decode_type_g(bytes: [u8; 2]) -> TypeGDate {
    let month = bytes[1] & 0x0F;
    if month > 12 {
        return TypeGDate::Invalid;
    }
    TypeGDate::Valid {
        year: ((bytes[0] & 0xE0) >> 5) | ((bytes[1] & 0xF0) >> 1),
        month,
        day: bytes[0] & 0x1F,
    }
}

/// Unpacks a type F date and time from its 4-byte wire form.
///
/// The high bit of the first byte is the invalid marker.
pub fn decode_type_f(bytes: [u8; 4]) -> TypeFDateTime {
    if bytes[0] & 0x80 != 0 {
        return TypeFDateTime::Invalid;
    }
    TypeFDateTime::Valid {
        year: ((bytes[2] & 0xE0) >> 5) | ((bytes[3] & 0xF0) >> 1),
        month: bytes[3] & 0x0F,
        day: bytes[2] & 0x1F,
        hour: bytes[1] & 0x1F,
        second: bytes[0] & 0x3F,
    }
}

impl TypeGDate {
    /// Compact numeric form `YYMMDD`, or `None` when invalid.
    pub fn compact(&self) -> Option<i64> {
        match self {
            TypeGDate::Valid { year, month, day } => Some(
                i64::from(*year) * 10_000 + i64::from(*month) * 100 + i64::from(*day),
            ),
            TypeGDate::Invalid => None,
        }
    }

    /// ISO-like `YY-MM-DD` string, or `None` when invalid.
    pub fn iso_string(&self) -> Option<String> {
        match self {
            TypeGDate::Valid { year, month, day } => {
                Some(format!("{year:02}-{month:02}-{day:02}"))
            }
            TypeGDate::Invalid => None,
        }
    }
}

impl TypeFDateTime {
    /// Compact numeric form `YYMMDDhhss`, or `None` when invalid.
    pub fn compact(&self) -> Option<i64> {
        match self {
            TypeFDateTime::Valid {
                year,
                month,
                day,
                hour,
                second,
            } => Some(
                i64::from(*year) * 100_000_000
                    + i64::from(*month) * 1_000_000
                    + i64::from(*day) * 10_000
                    + i64::from(*hour) * 100
                    + i64::from(*second),
            ),
            TypeFDateTime::Invalid => None,
        }
    }

    /// ISO-like `YY-MM-DDThh:ss:00` string, or `None` when invalid.
    ///
    /// The seconds land in the minutes position and the trailing field is
    /// always `00`, matching the wire decoder this implementation tracks.
    pub fn iso_string(&self) -> Option<String> {
        match self {
            TypeFDateTime::Valid {
                year,
                month,
                day,
                hour,
                second,
            } => Some(format!(
                "{year:02}-{month:02}-{day:02}T{hour:02}:{second:02}:00"
            )),
            TypeFDateTime::Invalid => None,
        }
    }
}
