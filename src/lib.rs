//! Block compression with unbounded copy runs.
//!
//! Zappy is a snappy-style LZ codec that trades a little compression ratio
//! for copy instructions of any length. Snappy caps a single copy at 64
//! bytes, so inputs with long repeated runs (sparse bitmaps are the classic
//! case) decay into thousands of tiny copy instructions; here one copy chunk
//! covers the whole run.
//!
//! # Format
//!
//! An encoded block begins with the uvarint-encoded length of the decoded
//! data, followed by a sequence of chunks. Chunks begin and end on byte
//! boundaries. Each chunk starts with a signed varint N:
//!
//! - N >= 0: the next N + 1 bytes are literal bytes, copied to the output
//!   verbatim.
//! - N < 0: copy -N bytes starting at offset M (in the following uvarint)
//!   positions before the current end of the output. M may be smaller than
//!   the copy length, which repeats the trailing M bytes (run-length
//!   expansion).
//!
//! The body ends exactly when the promised number of bytes has been
//! produced. There is no framing, checksum, or dictionary; one block encodes
//! one byte sequence.
//!
//! # Example
//!
//! ```
//! let data = b"the quick brown fox jumps over the quick brown dog";
//! let block = zappy::encode(Vec::new(), data);
//! let restored = zappy::decode(Vec::new(), &block).unwrap();
//! assert_eq!(restored, data);
//! ```
//!
//! Both operations reuse the buffer they are given when it is large enough,
//! so a caller in a loop can hand the previous output back in and avoid
//! reallocating.

pub mod decode;
pub mod encode;
pub mod error;
pub mod varint;

pub use decode::{decode, decoded_len};
pub use encode::{encode, max_encoded_len};
pub use error::{Error, Result};
