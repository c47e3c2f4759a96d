//! Payload compression for the gzip and zstd methods.
//!
//! The compressed bytes feed straight into [`crate::nucleotide::encode`];
//! the method travels in the payload header so the decoder knows which
//! inverse to apply after the nucleotide stage.

use std::io::{Read, Write};

use loligo_core::header::Method;
use loligo_core::{LoligoError, Result};

/// Default zstd compression level.
pub const DEFAULT_ZSTD_LEVEL: i32 = 3;
/// Default gzip compression level.
pub const DEFAULT_GZIP_LEVEL: u32 = 6;

/// Compress data using zstd at the given level (1-22).
pub fn zstd_compress(data: &[u8], level: i32) -> Result<Vec<u8>> {
    zstd::encode_all(data, level).map_err(|e| LoligoError::Compression(e.to_string()))
}

/// Decompress zstd data.
pub fn zstd_decompress(data: &[u8]) -> Result<Vec<u8>> {
    zstd::decode_all(data).map_err(|e| LoligoError::Compression(e.to_string()))
}

/// Compress data using gzip at the given level (0-9).
pub fn gzip_compress(data: &[u8], level: u32) -> Result<Vec<u8>> {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level));
    encoder
        .write_all(data)
        .map_err(|e| LoligoError::Compression(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| LoligoError::Compression(e.to_string()))
}

/// Decompress gzip data.
pub fn gzip_decompress(data: &[u8]) -> Result<Vec<u8>> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| LoligoError::Compression(e.to_string()))?;
    Ok(decompressed)
}

/// Detect the payload method from the magic bytes of compressed data.
///
/// Returns `None` when the bytes match neither format, which is the
/// normal case for `Direct` and `Huffman` payloads.
pub fn detect_method(data: &[u8]) -> Option<Method> {
    if data.len() >= 4 && data[..4] == [0x28, 0xB5, 0x2F, 0xFD] {
        Some(Method::Zstd)
    } else if data.len() >= 2 && data[..2] == [0x1F, 0x8B] {
        Some(Method::Gzip)
    } else {
        None
    }
}

/// Apply the compression half of a payload method at the default level.
///
/// `Direct` and `Huffman` pass bytes through unchanged; the Huffman
/// transform itself lives in [`crate::huffman`].
pub fn compress_payload(data: &[u8], method: Method) -> Result<Vec<u8>> {
    match method {
        Method::Zstd => zstd_compress(data, DEFAULT_ZSTD_LEVEL),
        Method::Gzip => gzip_compress(data, DEFAULT_GZIP_LEVEL),
        Method::Direct | Method::Huffman => Ok(data.to_vec()),
    }
}

/// Apply the decompression half of a payload method.
pub fn decompress_payload(data: &[u8], method: Method) -> Result<Vec<u8>> {
    match method {
        Method::Zstd => zstd_decompress(data),
        Method::Gzip => gzip_decompress(data),
        Method::Direct | Method::Huffman => Ok(data.to_vec()),
    }
}
