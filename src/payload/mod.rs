//! The payload module contains the components responsible for encoding and
//! decoding the DIB/VIB data records of the M-Bus protocol.

pub mod buffer;
pub mod code;
pub mod decoder;
pub mod encoder;
pub mod encoding;
pub mod vif_table;

pub use buffer::PayloadBuffer;
pub use code::{name_for, units_for, RecordCode};
pub use decoder::{decode_records, DecodedRecord};
pub use encoder::{choose_scalar, PayloadEncoder};
pub use vif_table::{find_definition, vif_for_code, VifDef, VIF_DEFS};
