//! Triple-repetition FEC over nucleotide symbols.
//!
//! Every base is written three times; the decoder takes a majority vote
//! per 3-base block. Two matching bases repair one substitution; a
//! three-way disagreement is unrecoverable and resolves to the block's
//! first base so that decoding can continue.

use loligo_core::{LoligoError, Result};

/// Outcome of a triple-repeat decode pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripleDecode {
    /// Majority-voted sequence, one base per block.
    pub sequence: Vec<u8>,
    /// Blocks where exactly one base disagreed and was outvoted.
    pub corrected: usize,
    /// Blocks where all three bases differed; the first base was kept.
    pub uncorrectable: usize,
}

/// Repeat every base three times.
pub fn encode(seq: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len() * 3);
    for &base in seq {
        out.extend_from_slice(&[base, base, base]);
    }
    out
}

/// Majority-vote a triple-repeated sequence back to single bases.
///
/// # Errors
///
/// Returns `LoligoError::InvalidLength` if the input length is not a
/// multiple of 3.
pub fn decode(seq: &[u8]) -> Result<TripleDecode> {
    if seq.len() % 3 != 0 {
        return Err(LoligoError::InvalidLength(format!(
            "sequence length {} is not a multiple of 3",
            seq.len()
        )));
    }

    let mut sequence = Vec::with_capacity(seq.len() / 3);
    let mut corrected = 0usize;
    let mut uncorrectable = 0usize;
    for block in seq.chunks_exact(3) {
        let (a, b, c) = (block[0], block[1], block[2]);
        let winner = if a == b && b == c {
            a
        } else if a == b || a == c {
            corrected += 1;
            a
        } else if b == c {
            corrected += 1;
            b
        } else {
            uncorrectable += 1;
            a
        };
        sequence.push(winner);
    }

    Ok(TripleDecode {
        sequence,
        corrected,
        uncorrectable,
    })
}
