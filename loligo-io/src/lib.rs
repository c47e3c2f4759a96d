//! Record markup and streaming I/O for the loligo DNA data storage
//! ecosystem.
//!
//! - **Records** — FASTA-style marker lines and wrapped sequence text via [`record`]
//! - **Streaming** — constant-memory encode/decode pipelines via [`stream`]
//!
//! # Example
//!
//! ```
//! use loligo_io::stream::{decode_stream, encode_stream, StreamDecodeConfig, StreamEncodeConfig};
//! use std::io::Cursor;
//!
//! let mut encoded = Vec::new();
//! encode_stream(&b"payload bytes"[..], &mut encoded, &StreamEncodeConfig::default()).unwrap();
//!
//! let mut decoded = Vec::new();
//! decode_stream(Cursor::new(&encoded), &mut decoded, &StreamDecodeConfig::default()).unwrap();
//! assert_eq!(decoded, b"payload bytes");
//! ```

pub mod record;
pub mod stream;

// Re-export the record type and parser
pub use record::{parse_records, write_record, write_records, Record};

// Re-export the streaming pipelines
pub use stream::{
    decode_stream, encode_stream, StreamDecodeConfig, StreamDecodeReport, StreamEncodeConfig,
    StreamEncodeReport,
};
