//! DNS wire-format codec.
//!
//! Network byte order throughout. Decoding works against a fixed buffer so
//! compression pointers can re-enter the message at absolute offsets;
//! encoding shares one compression table across all sections of a message
//! so repeated names collapse into 2-byte back-references.

pub mod cursor;
pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod record;

pub use cursor::ByteCursor;
pub use header::Header;
pub use message::{DecodeLimits, Message, TRAILER_LEN};
