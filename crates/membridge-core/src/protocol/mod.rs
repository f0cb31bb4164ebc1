//! Wire protocol for the memory channel.
//!
//! Two response encodings are supported:
//!
//! - **Legacy**: the historical method-channel shape. Success carries a
//!   signed 64-bit integer where `-1` means critical, unsupported becomes an
//!   `UNAVAILABLE` error, and unknown methods become "not implemented".
//! - **Typed**: the [`MemoryQueryResult`](crate::domain::MemoryQueryResult)
//!   itself, tagged by `status`.
//!
//! The legacy `-1` sentinel only exists inside this module. Everything
//! upstream works with the tagged result.

mod codec;
mod error;

pub use codec::{
    ERROR_CODE_UNAVAILABLE, EncodedResponse, LEGACY_CRITICAL_SENTINEL, MethodCall,
    MethodResponse, ResponseEncoding, decode_legacy, encode_legacy,
};
pub use error::ProtocolError;
