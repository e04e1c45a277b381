//! # M-Bus Payload Error Handling
//!
//! This module defines the PayloadError enum, which represents the different
//! error types that can occur while encoding or decoding DIB/VIB records.

use crate::payload::RecordCode;
use thiserror::Error;

/// Represents the different error types that can occur in the payload codec.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PayloadError {
    /// A write would exceed the encoder capacity, or a read would run past
    /// the end of the input (including a truncated VIF chain).
    #[error("Buffer overflow: needed {needed} bytes, {available} available")]
    BufferOverflow { needed: usize, available: usize },

    /// The DIF coding selector is outside the supported 1..4 byte widths.
    #[error("Unsupported coding: 0x{0:02X}")]
    UnsupportedCoding(u8),

    /// No VIF band covers the requested (code, scalar) pair.
    #[error("Unsupported range: no VIF for {code:?} at scalar {scalar}")]
    UnsupportedRange { code: RecordCode, scalar: i8 },

    /// No VIF band covers a decoded VIF value.
    #[error("Unsupported VIF: 0x{0:02X}")]
    UnsupportedVif(u32),

    /// The float encoding path only represents non-negative magnitudes.
    #[error("Negative value not encodable: {0}")]
    NegativeValue(f32),
}
