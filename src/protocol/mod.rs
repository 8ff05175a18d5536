//! Protocol Module
//!
//! Defines the primitive value encodings of the ACP wire protocol.
//!
//! ## Value Encodings
//!
//! | Field  | Bytes | Encoding                              |
//! |--------|-------|---------------------------------------|
//! | Bool   | 1     | 0x00 = true, 0x01 = false             |
//! | UInt16 | 2     | unsigned, little-endian               |
//! | Int16  | 2     | signed two's-complement, little-endian|
//! | UInt32 | 4     | unsigned, little-endian               |
//! | String | 2 + N | UInt16 byte count N, then N raw bytes |
//!
//! ## Handshake Sequence
//!
//! ```text
//! HOST                                   AGENT
//!   |-- String (asserted name) ------------>|
//!   |<----------------- Bool (name matches)-|
//!   |-- UInt16 (proposed version) --------->|   only if the name matched
//!   |<------------ Bool (version accepted) -|
//!   |<------ UInt16 min, UInt16 max --------|   only if rejected
//! ```

mod codec;
mod field;

pub use codec::{
    decode_bool, decode_i16, decode_u16, decode_u32, encode_bool, encode_string, encode_u16,
    BOOL_FALSE, BOOL_TRUE, MAX_STRING_LEN, STRING_PREFIX_SIZE,
};
pub use field::FieldKind;
