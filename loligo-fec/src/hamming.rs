//! Hamming(7,4) forward error correction.
//!
//! Each 4-bit nibble `d1 d2 d3 d4` (`d1` most significant) gains three
//! parity bits:
//!
//! ```text
//! p1 = d1 ^ d2 ^ d4
//! p2 = d1 ^ d3 ^ d4
//! p3 = d2 ^ d3 ^ d4
//! ```
//!
//! laid out MSB-to-LSB as `p1 p2 d1 p3 d2 d3 d4`. Codewords are packed
//! into a continuous MSB-first bit stream, 7 bits per nibble, two nibbles
//! per payload byte (high nibble first), with 0-6 trailing zero bits to
//! reach a byte boundary.
//!
//! Decoding resolves every 7-bit pattern through a 128-entry table built
//! at compile time from the 16 valid codewords and their one-bit-flip
//! neighborhoods. A single flipped bit per codeword is always repaired;
//! two or more flips silently decode to a wrong nibble, which is the
//! standard Hamming(7,4) limit.

use loligo_core::{LoligoError, Result};

// ---------------------------------------------------------------------------
// Codeword table
// ---------------------------------------------------------------------------

/// Encode one nibble (low 4 bits) into a 7-bit codeword.
pub const fn encode_nibble(nibble: u8) -> u8 {
    let d1 = (nibble >> 3) & 1;
    let d2 = (nibble >> 2) & 1;
    let d3 = (nibble >> 1) & 1;
    let d4 = nibble & 1;
    let p1 = d1 ^ d2 ^ d4;
    let p2 = d1 ^ d3 ^ d4;
    let p3 = d2 ^ d3 ^ d4;
    (p1 << 6) | (p2 << 5) | (d1 << 4) | (p3 << 3) | (d2 << 2) | (d3 << 1) | d4
}

const fn build_lookup() -> [Option<(u8, bool)>; 128] {
    let mut table: [Option<(u8, bool)>; 128] = [None; 128];

    // Valid codewords decode to their nibble with no correction.
    let mut nibble = 0u8;
    while nibble < 16 {
        table[encode_nibble(nibble) as usize] = Some((nibble, false));
        nibble += 1;
    }

    // One-bit-flip neighborhoods. The 16 codewords have pairwise distance
    // >= 3, so the neighborhoods never collide with each other or with a
    // valid codeword; together they cover all 128 patterns.
    let mut nibble = 0u8;
    while nibble < 16 {
        let codeword = encode_nibble(nibble);
        let mut bit = 0u8;
        while bit < 7 {
            let flipped = (codeword ^ (1 << bit)) as usize;
            if table[flipped].is_none() {
                table[flipped] = Some((nibble, true));
            }
            bit += 1;
        }
        nibble += 1;
    }

    table
}

/// Decode table: 7-bit pattern -> (nibble, corrected).
const LOOKUP: [Option<(u8, bool)>; 128] = build_lookup();

/// Decode one 7-bit codeword (low 7 bits), repairing at most one flipped
/// bit. Returns the nibble and whether a repair happened.
pub fn decode_codeword(codeword: u8) -> (u8, bool) {
    match LOOKUP[(codeword & 0x7F) as usize] {
        Some(entry) => entry,
        // The table is total, so this arm is unreachable today; a pattern
        // that ever missed would resolve to the nearest codeword,
        // best-effort only.
        None => nearest_codeword(codeword & 0x7F),
    }
}

/// Minimum-Hamming-distance resolution across the 16 valid codewords.
fn nearest_codeword(pattern: u8) -> (u8, bool) {
    let mut best_nibble = 0u8;
    let mut best_distance = u32::MAX;
    for nibble in 0..16u8 {
        let distance = (encode_nibble(nibble) ^ pattern).count_ones();
        if distance < best_distance {
            best_nibble = nibble;
            best_distance = distance;
        }
    }
    (best_nibble, true)
}

// ---------------------------------------------------------------------------
// Byte-stream codec
// ---------------------------------------------------------------------------

/// Hamming-encode a byte payload.
///
/// Each byte splits into two nibbles (high first), each nibble becomes a
/// 7-bit codeword, and the codewords pack MSB-first into bytes. Returns
/// the packed stream and the trailing zero-bit count (always even, 0-6).
pub fn encode(data: &[u8]) -> (Vec<u8>, u8) {
    let total_bits = data.len() * 2 * 7;
    let mut out = vec![0u8; (total_bits + 7) / 8];
    let mut bit_pos = 0usize;

    for &byte in data {
        for nibble in [byte >> 4, byte & 0x0F] {
            let codeword = encode_nibble(nibble);
            for shift in (0..7).rev() {
                if (codeword >> shift) & 1 == 1 {
                    out[bit_pos / 8] |= 0x80 >> (bit_pos % 8);
                }
                bit_pos += 1;
            }
        }
    }

    let pad_bits = (out.len() * 8 - total_bits) as u8;
    (out, pad_bits)
}

/// Decode a Hamming-encoded stream.
///
/// `pad_bits` trailing bits are discarded before the stream is cut into
/// 7-bit codewords. Returns the payload and how many codewords needed a
/// one-bit repair. A dangling final codeword packs against a zero low
/// nibble; encode always emits nibble pairs, so only hand-built streams
/// hit that path.
///
/// # Errors
///
/// - `LoligoError::InvalidPadding` if `pad_bits` exceeds 7 or the stream
///   length
/// - `LoligoError::InvalidLength` if the remaining bit count is not a
///   multiple of 7
pub fn decode(data: &[u8], pad_bits: u8) -> Result<(Vec<u8>, usize)> {
    let total_bits = data.len() * 8;
    let pad = pad_bits as usize;
    if pad > 7 || pad > total_bits {
        return Err(LoligoError::InvalidPadding(format!(
            "padding of {pad} bits does not fit a {total_bits}-bit stream"
        )));
    }
    let payload_bits = total_bits - pad;
    if payload_bits % 7 != 0 {
        return Err(LoligoError::InvalidLength(format!(
            "{payload_bits} bits is not a whole number of 7-bit codewords"
        )));
    }

    let mut nibbles = Vec::with_capacity(payload_bits / 7);
    let mut corrected = 0usize;
    let mut bit_pos = 0usize;
    while bit_pos < payload_bits {
        let mut codeword = 0u8;
        for _ in 0..7 {
            let bit = (data[bit_pos / 8] >> (7 - bit_pos % 8)) & 1;
            codeword = (codeword << 1) | bit;
            bit_pos += 1;
        }
        let (nibble, repaired) = decode_codeword(codeword);
        if repaired {
            corrected += 1;
        }
        nibbles.push(nibble);
    }

    // Odd nibble counts never come out of encode; pack the tail against a
    // zero low nibble rather than dropping it.
    if nibbles.len() % 2 != 0 {
        nibbles.push(0);
    }

    let mut out = Vec::with_capacity(nibbles.len() / 2);
    for pair in nibbles.chunks_exact(2) {
        out.push((pair[0] << 4) | pair[1]);
    }
    Ok((out, corrected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nibble_five_codeword() {
        // 0b0101: p1 = 0^1^1 = 0, p2 = 0^0^1 = 1, p3 = 1^0^1 = 0
        assert_eq!(encode_nibble(0b0101), 0b0100101);
        assert_eq!(decode_codeword(0b0100101), (0b0101, false));
    }

    #[test]
    fn single_bit_flip_is_repaired() {
        // 0b0110101 is the nibble-5 codeword with its d1 bit flipped.
        assert_eq!(decode_codeword(0b0110101), (0b0101, true));
    }

    #[test]
    fn every_single_flip_of_every_codeword_is_repaired() {
        for nibble in 0..16u8 {
            let codeword = encode_nibble(nibble);
            assert_eq!(decode_codeword(codeword), (nibble, false));
            for bit in 0..7 {
                let flipped = codeword ^ (1 << bit);
                assert_eq!(
                    decode_codeword(flipped),
                    (nibble, true),
                    "nibble {nibble:#06b}, bit {bit}"
                );
            }
        }
    }

    #[test]
    fn lookup_table_is_total() {
        assert!(LOOKUP.iter().all(|entry| entry.is_some()));
    }

    #[test]
    fn codewords_have_distance_three() {
        for a in 0..16u8 {
            for b in (a + 1)..16 {
                let distance = (encode_nibble(a) ^ encode_nibble(b)).count_ones();
                assert!(distance >= 3, "d({a}, {b}) = {distance}");
            }
        }
    }

    #[test]
    fn single_byte_stream_layout() {
        // Two codewords = 14 bits, so one payload byte packs into 2 bytes
        // with 2 trailing zero bits.
        let (encoded, pad_bits) = encode(&[0xAB]);
        assert_eq!(encoded.len(), 2);
        assert_eq!(pad_bits, 2);
        let (decoded, corrected) = decode(&encoded, pad_bits).unwrap();
        assert_eq!(decoded, vec![0xAB]);
        assert_eq!(corrected, 0);
    }

    #[test]
    fn pad_cycle_over_stream_lengths() {
        // 14n bits mod 8 cycles through 0, 2, 4, 6 padding.
        for (len, expected_pad) in [(4, 0), (1, 2), (2, 4), (3, 6), (5, 2)] {
            let data = vec![0x5A; len];
            let (encoded, pad_bits) = encode(&data);
            assert_eq!(pad_bits, expected_pad, "len {len}");
            assert_eq!(decode(&encoded, pad_bits).unwrap().0, data);
        }
    }

    #[test]
    fn empty_payload() {
        let (encoded, pad_bits) = encode(&[]);
        assert!(encoded.is_empty());
        assert_eq!(pad_bits, 0);
        assert_eq!(decode(&[], 0).unwrap(), (Vec::new(), 0));
    }

    #[test]
    fn stream_corruption_is_counted() {
        let data = b"forward error correction";
        let (mut encoded, pad_bits) = encode(data);
        // Flip one bit in three different codewords (bit positions 0, 14,
        // and 28 fall in codewords 0, 2, and 4).
        encoded[0] ^= 0x80;
        encoded[1] ^= 0x02;
        encoded[3] ^= 0x08;
        let (decoded, corrected) = decode(&encoded, pad_bits).unwrap();
        assert_eq!(decoded, data.to_vec());
        assert_eq!(corrected, 3);
    }

    #[test]
    fn decode_rejects_bad_padding() {
        let err = decode(&[0x00, 0x00], 8).unwrap_err();
        assert!(matches!(err, LoligoError::InvalidPadding(_)));
        let err = decode(&[], 2).unwrap_err();
        assert!(matches!(err, LoligoError::InvalidPadding(_)));
    }

    #[test]
    fn decode_rejects_bad_length() {
        // 16 bits with no padding is not a multiple of 7.
        let err = decode(&[0x00, 0x00], 0).unwrap_err();
        assert!(matches!(err, LoligoError::InvalidLength(_)));
    }

    #[test]
    fn dangling_codeword_packs_against_a_zero_nibble() {
        // A lone codeword is half a byte; the missing low nibble reads as
        // zero. Nibble 0: seven zero bits plus one pad bit.
        assert_eq!(decode(&[0x00], 1).unwrap(), (vec![0x00], 0));

        // Nibble 5's codeword plus one pad bit: 0b0100101_0 = 0x4A.
        assert_eq!(decode(&[0x4A], 1).unwrap(), (vec![0x50], 0));
    }
}
