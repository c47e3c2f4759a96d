//! Reed-Solomon error correction over GF(2^8).
//!
//! Byte-oriented and stronger than the bit-level Hamming layer: with
//! `parity_count` parity bytes per block, up to `parity_count / 2` corrupt
//! bytes per block are repaired. Payloads longer than one codeword are cut
//! into blocks so that data plus parity never exceeds the 255-byte GF(2^8)
//! codeword bound; every block carries the same parity count.

use reed_solomon::{Decoder, Encoder};

use loligo_core::{LoligoError, Result};

/// GF(2^8) codeword size bound.
const MAX_CODEWORD: usize = 255;

/// Outcome of a Reed-Solomon decode pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsDecode {
    /// Recovered payload bytes.
    pub data: Vec<u8>,
    /// Byte positions (across data and parity) that were repaired.
    pub corrected: usize,
}

fn check_parity_count(parity_count: usize) -> Result<()> {
    if parity_count == 0 || parity_count >= MAX_CODEWORD {
        return Err(LoligoError::InvalidArgument(format!(
            "parity count {parity_count} is outside 1..{MAX_CODEWORD}"
        )));
    }
    Ok(())
}

/// Encode a payload, appending `parity_count` parity bytes per block.
///
/// Empty input encodes to an empty stream.
///
/// # Errors
///
/// Returns `LoligoError::InvalidArgument` if `parity_count` is zero or
/// leaves no room for data in a codeword.
pub fn encode(data: &[u8], parity_count: usize) -> Result<Vec<u8>> {
    check_parity_count(parity_count)?;
    let block_data = MAX_CODEWORD - parity_count;
    let encoder = Encoder::new(parity_count);

    let blocks = data.len() / block_data + 1;
    let mut out = Vec::with_capacity(data.len() + parity_count * blocks);
    for block in data.chunks(block_data) {
        let encoded = encoder.encode(block);
        out.extend_from_slice(&encoded);
    }
    Ok(out)
}

/// Decode a Reed-Solomon stream, repairing up to `parity_count / 2`
/// corrupt bytes per block.
///
/// # Errors
///
/// - `LoligoError::InvalidArgument` for an out-of-range `parity_count`
/// - `LoligoError::InvalidLength` if the stream is truncated below one
///   data byte plus parity in its final block
/// - `LoligoError::DecodeFailure` when a block holds more errors than the
///   parity can repair
pub fn decode(encoded: &[u8], parity_count: usize) -> Result<RsDecode> {
    check_parity_count(parity_count)?;
    let decoder = Decoder::new(parity_count);

    let mut data = Vec::with_capacity(encoded.len());
    let mut corrected = 0usize;
    for block in encoded.chunks(MAX_CODEWORD) {
        if block.len() <= parity_count {
            return Err(LoligoError::InvalidLength(format!(
                "final block of {} bytes cannot hold {} parity bytes and data",
                block.len(),
                parity_count
            )));
        }
        let repaired = decoder
            .correct(block, None)
            .map_err(|_| LoligoError::DecodeFailure("block has uncorrectable errors".to_string()))?;
        corrected += block
            .iter()
            .zip(repaired.iter())
            .filter(|(before, after)| before != after)
            .count();
        data.extend_from_slice(repaired.data());
    }
    Ok(RsDecode { data, corrected })
}
