//! Frequency-driven Huffman codec over the byte alphabet.
//!
//! Builds a per-payload Huffman tree, concatenates the bit-string codes,
//! pads to an even bit count, and maps each bit pair to one nucleotide
//! under the [`AcgtAlphabet`] ordering. The table and padding travel as
//! [`HuffmanMeta`]; decoding is greedy prefix matching against the
//! inverted table.
//!
//! Tree construction is fully deterministic: ties between equal
//! frequencies are broken by a strictly increasing insertion sequence
//! number, with leaves inserted in ascending byte order. The same payload
//! always yields the same table.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use loligo_core::header::HuffmanMeta;
use loligo_core::{AcgtAlphabet, LoligoError, NucleotideAlphabet, Result};

// ---------------------------------------------------------------------------
// Tree construction
// ---------------------------------------------------------------------------

/// A tree node stored in a flat arena and addressed by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Leaf(u8),
    Internal { left: usize, right: usize },
}

/// Count how often each byte value occurs.
fn byte_frequencies(data: &[u8]) -> [u64; 256] {
    let mut freqs = [0u64; 256];
    for &b in data {
        freqs[b as usize] += 1;
    }
    freqs
}

/// Build the Huffman tree, returning the arena and the root index.
///
/// The heap is keyed by `(frequency, sequence_number)`: equal frequencies
/// resolve to the earliest-inserted entry, so construction order is a pure
/// function of the frequency table.
fn build_tree(freqs: &[u64; 256]) -> Result<(Vec<Node>, usize)> {
    let mut arena: Vec<Node> = Vec::new();
    let mut heap: BinaryHeap<Reverse<(u64, u64, usize)>> = BinaryHeap::new();
    let mut next_seq: u64 = 0;

    for byte in 0..=255u8 {
        let freq = freqs[byte as usize];
        if freq > 0 {
            let index = arena.len();
            arena.push(Node::Leaf(byte));
            heap.push(Reverse((freq, next_seq, index)));
            next_seq += 1;
        }
    }

    while heap.len() > 1 {
        let (Some(Reverse(first)), Some(Reverse(second))) = (heap.pop(), heap.pop()) else {
            break; // len > 1 guarantees both pops succeed
        };
        let (freq_a, _, left) = first;
        let (freq_b, _, right) = second;
        let index = arena.len();
        arena.push(Node::Internal { left, right });
        heap.push(Reverse((freq_a + freq_b, next_seq, index)));
        next_seq += 1;
    }

    match heap.pop() {
        Some(Reverse((_, _, root))) => Ok((arena, root)),
        None => Err(LoligoError::InvalidArgument(
            "cannot build a Huffman table from empty input".to_string(),
        )),
    }
}

/// Assign bit-string codes by an iterative root-to-leaf walk.
///
/// Left edges append `'0'`, right edges `'1'`. A tree whose root is itself
/// a leaf (single distinct byte) gets the reserved code `"0"`.
fn assign_codes(arena: &[Node], root: usize) -> BTreeMap<u8, String> {
    let mut codes = BTreeMap::new();

    if let Node::Leaf(byte) = arena[root] {
        codes.insert(byte, "0".to_string());
        return codes;
    }

    let mut stack = vec![(root, String::new())];
    while let Some((index, prefix)) = stack.pop() {
        match arena[index] {
            Node::Leaf(byte) => {
                codes.insert(byte, prefix);
            }
            Node::Internal { left, right } => {
                let mut left_code = prefix.clone();
                left_code.push('0');
                let mut right_code = prefix;
                right_code.push('1');
                stack.push((right, right_code));
                stack.push((left, left_code));
            }
        }
    }

    codes
}

// ---------------------------------------------------------------------------
// Public codec
// ---------------------------------------------------------------------------

/// Huffman-encode a byte payload into a nucleotide sequence.
///
/// Returns the sequence together with the [`HuffmanMeta`] (code table and
/// padding) needed to decode it. The coded bit stream is padded with 0 or 1
/// zero bits to an even length, then each bit pair becomes one base under
/// the ACGT ordering (`00=A`, `01=C`, `10=G`, `11=T`).
///
/// # Errors
///
/// Returns `LoligoError::InvalidArgument` for empty input: there is no
/// frequency table to build a tree from.
pub fn encode(data: &[u8]) -> Result<(Vec<u8>, HuffmanMeta)> {
    let freqs = byte_frequencies(data);
    let (arena, root) = build_tree(&freqs)?;
    let codes = assign_codes(&arena, root);

    let mut bits = String::with_capacity(data.len() * 8);
    for &byte in data {
        let code = codes.get(&byte).ok_or_else(|| {
            LoligoError::CorruptedData(format!("byte 0x{byte:02X} missing from code table"))
        })?;
        bits.push_str(code);
    }

    let pad_bits = (bits.len() % 2) as u8;
    for _ in 0..pad_bits {
        bits.push('0');
    }

    let mut seq = Vec::with_capacity(bits.len() / 2);
    for pair in bits.as_bytes().chunks_exact(2) {
        let hi = pair[0] - b'0';
        let lo = pair[1] - b'0';
        seq.push(AcgtAlphabet::to_base((hi << 1) | lo));
    }

    Ok((seq, HuffmanMeta { codes, pad_bits }))
}

/// Decode a Huffman nucleotide sequence back to bytes.
///
/// # Errors
///
/// - `LoligoError::InvalidCharacter` for bytes outside the ACGT alphabet
/// - `LoligoError::InvalidPadding` if the recorded padding does not fit the
///   bit stream or the stripped bits are not all zero
/// - `LoligoError::CorruptedData` if the remaining bits do not resolve to a
///   whole number of codes
pub fn decode(seq: &[u8], meta: &HuffmanMeta) -> Result<Vec<u8>> {
    let mut bits = String::with_capacity(seq.len() * 2);
    for (i, &base) in seq.iter().enumerate() {
        let symbol = AcgtAlphabet::from_base(base).ok_or_else(|| {
            LoligoError::InvalidCharacter(format!(
                "invalid base for ACGT decoding: '{}' (0x{:02X}) at position {}",
                base as char, base, i
            ))
        })?;
        bits.push(if symbol & 0b10 != 0 { '1' } else { '0' });
        bits.push(if symbol & 0b01 != 0 { '1' } else { '0' });
    }

    let pad = meta.pad_bits as usize;
    if pad > bits.len() {
        return Err(LoligoError::InvalidPadding(format!(
            "recorded padding of {pad} bits exceeds {} available bits",
            bits.len()
        )));
    }
    let (payload, padding) = bits.split_at(bits.len() - pad);
    if padding.bytes().any(|b| b != b'0') {
        return Err(LoligoError::InvalidPadding(format!(
            "padding bits are not all zero: {padding:?}"
        )));
    }

    let inverse: HashMap<&str, u8> = meta
        .codes
        .iter()
        .map(|(&byte, code)| (code.as_str(), byte))
        .collect();

    let mut data = Vec::new();
    let mut start = 0;
    for end in 1..=payload.len() {
        if let Some(&byte) = inverse.get(&payload[start..end]) {
            data.push(byte);
            start = end;
        }
    }
    if start != payload.len() {
        return Err(LoligoError::CorruptedData(format!(
            "{} trailing bits do not form a complete code",
            payload.len() - start
        )));
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_distinct_byte_uses_reserved_code() {
        let (seq, meta) = encode(b"AAAAA").unwrap();
        assert_eq!(meta.codes.len(), 1);
        assert_eq!(meta.codes[&b'A'], "0");
        // 5 code bits + 1 pad bit = 3 bit pairs, all zero -> "AAA"
        assert_eq!(meta.pad_bits, 1);
        assert_eq!(seq, b"AAA");
        assert_eq!(decode(&seq, &meta).unwrap(), b"AAAAA");
    }

    #[test]
    fn known_small_table() {
        // freqs: 'a'=2, 'b'=2, 'c'=1; ties resolve by insertion order, so
        // 'c'(1) merges with 'a'(2) first, then 'b'(2) with that subtree.
        let (seq, meta) = encode(b"aabbc").unwrap();
        assert_eq!(meta.codes[&b'b'], "0");
        assert_eq!(meta.codes[&b'c'], "10");
        assert_eq!(meta.codes[&b'a'], "11");
        // bits: 11 11 0 0 10 -> "11110010", pad 0 -> T T A G
        assert_eq!(meta.pad_bits, 0);
        assert_eq!(seq, b"TTAG");
        assert_eq!(decode(&seq, &meta).unwrap(), b"aabbc");
    }

    #[test]
    fn deterministic_tables() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let (seq_a, meta_a) = encode(data).unwrap();
        let (seq_b, meta_b) = encode(data).unwrap();
        assert_eq!(seq_a, seq_b);
        assert_eq!(meta_a, meta_b);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = encode(b"").unwrap_err();
        assert!(matches!(err, LoligoError::InvalidArgument(_)));
    }

    #[test]
    fn codes_are_prefix_free() {
        let data = b"mississippi riverbank, 1234!";
        let (_, meta) = encode(data).unwrap();
        let codes: Vec<&String> = meta.codes.values().collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn pad_bit_is_zero_or_one() {
        for data in [&b"x"[..], b"xy", b"xyz", b"frequency table"] {
            let (_, meta) = encode(data).unwrap();
            assert!(meta.pad_bits <= 1, "pad_bits = {}", meta.pad_bits);
        }
    }

    #[test]
    fn decode_rejects_nonzero_padding() {
        let (mut seq, meta) = encode(b"AAAAA").unwrap();
        assert_eq!(meta.pad_bits, 1);
        // Flip the final base so the stripped pad bit becomes 1.
        let last = seq.len() - 1;
        seq[last] = b'C'; // 01: code bit stays 0, pad bit becomes 1
        let err = decode(&seq, &meta).unwrap_err();
        assert!(matches!(err, LoligoError::InvalidPadding(_)));
    }

    #[test]
    fn decode_rejects_dangling_bits() {
        let (seq, mut meta) = encode(b"aabbc").unwrap();
        // Claim one bit of padding that encode never added; the payload
        // then ends mid-code.
        meta.pad_bits = 1;
        let err = decode(&seq, &meta).unwrap_err();
        assert!(matches!(
            err,
            LoligoError::CorruptedData(_) | LoligoError::InvalidPadding(_)
        ));
    }

    #[test]
    fn decode_rejects_foreign_characters() {
        let (mut seq, meta) = encode(b"aabbc").unwrap();
        seq[0] = b'N';
        let err = decode(&seq, &meta).unwrap_err();
        assert!(matches!(err, LoligoError::InvalidCharacter(_)));
    }

    #[test]
    fn skewed_frequencies_shorten_common_bytes() {
        let mut data = vec![b'e'; 100];
        data.extend_from_slice(b"qz");
        let (_, meta) = encode(&data).unwrap();
        assert!(meta.codes[&b'e'].len() < meta.codes[&b'q'].len());
        assert!(meta.codes[&b'e'].len() < meta.codes[&b'z'].len());
    }

    #[test]
    fn roundtrip_binary_payload() {
        let data: Vec<u8> = (0..=255).cycle().take(1024).collect();
        let (seq, meta) = encode(&data).unwrap();
        assert_eq!(decode(&seq, &meta).unwrap(), data);
    }
}
