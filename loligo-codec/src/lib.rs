//! Payload-to-nucleotide codecs for the loligo DNA data storage ecosystem.
//!
//! Turns arbitrary byte payloads into synthesizable ACGT sequences and
//! back:
//!
//! - **Direct codec** — 4 bases per byte via [`nucleotide`]
//! - **Huffman codec** — per-payload byte codes via [`huffman`]
//! - **GC balancer** — constraint check with bit-inversion fallback via [`balance`]
//! - **Compression** — gzip/zstd payload methods via [`compress`]
//! - **Metrics** — density and composition reports via [`stats`]
//!
//! # Example
//!
//! ```
//! use loligo_codec::nucleotide;
//! use loligo_core::AtcgAlphabet;
//!
//! let seq = nucleotide::encode::<AtcgAlphabet>(b"Hi");
//! assert_eq!(seq, b"TACATCCT");
//! assert_eq!(nucleotide::decode::<AtcgAlphabet>(&seq).unwrap(), b"Hi");
//! ```

pub mod balance;
pub mod compress;
pub mod huffman;
pub mod nucleotide;
pub mod stats;

// Re-export the sequence metric helpers
pub use balance::{gc_content, max_homopolymer_run};

// Re-export the report types
pub use stats::{sequence_stats, EncodingStats, SequenceStats};
