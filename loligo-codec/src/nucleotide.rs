//! Direct 2-bit nucleotide codec.
//!
//! Maps each payload byte to exactly 4 nucleotides and back, reading bit
//! pairs from the most significant end: the first base of a byte comes from
//! bits 7..6, the second from bits 5..4, and so on. The base assigned to
//! each 2-bit value is fixed by the alphabet type parameter.

use loligo_core::{LoligoError, NucleotideAlphabet, Result};

/// Encode a byte payload as ASCII nucleotides, 4 bases per byte.
///
/// The output length is always `data.len() * 4`; empty input produces an
/// empty sequence.
///
/// # Example
///
/// ```
/// use loligo_codec::nucleotide;
/// use loligo_core::AtcgAlphabet;
///
/// let seq = nucleotide::encode::<AtcgAlphabet>(b"Hi");
/// assert_eq!(seq, b"TACATCCT");
/// ```
pub fn encode<A: NucleotideAlphabet>(data: &[u8]) -> Vec<u8> {
    let mut seq = Vec::with_capacity(data.len() * 4);
    for &byte in data {
        for i in 0..4 {
            let bit_offset = 6 - i * 2; // 6, 4, 2, 0
            seq.push(A::to_base((byte >> bit_offset) & 0b11));
        }
    }
    seq
}

/// Decode an ASCII nucleotide sequence back to bytes.
///
/// # Errors
///
/// Returns `LoligoError::InvalidLength` if the sequence length is not a
/// multiple of 4, and `LoligoError::InvalidCharacter` if any byte is not
/// one of the alphabet's four bases.
pub fn decode<A: NucleotideAlphabet>(seq: &[u8]) -> Result<Vec<u8>> {
    if seq.len() % 4 != 0 {
        return Err(LoligoError::InvalidLength(format!(
            "sequence length {} is not a multiple of 4",
            seq.len()
        )));
    }

    let mut data = Vec::with_capacity(seq.len() / 4);
    for (chunk_idx, chunk) in seq.chunks_exact(4).enumerate() {
        let mut byte = 0u8;
        for (i, &base) in chunk.iter().enumerate() {
            let symbol = A::from_base(base).ok_or_else(|| {
                LoligoError::InvalidCharacter(format!(
                    "invalid base for {} decoding: '{}' (0x{:02X}) at position {}",
                    A::NAME,
                    base as char,
                    base,
                    chunk_idx * 4 + i
                ))
            })?;
            let bit_offset = 6 - i * 2;
            byte |= symbol << bit_offset;
        }
        data.push(byte);
    }

    Ok(data)
}
