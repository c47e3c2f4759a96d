//! Nucleotide alphabets for 2-bit symbol encoding.
//!
//! Each alphabet is a zero-sized marker type that implements
//! [`NucleotideAlphabet`], fixing the order in which the four bases map to
//! the 2-bit symbol values 0-3. Two orderings are in circulation:
//!
//! - [`AtcgAlphabet`] — used by the direct byte codec and the GC balancer
//! - [`AcgtAlphabet`] — used by the Huffman bit-pair codec
//!
//! Sequences produced under one ordering do not decode under the other, so
//! the ordering travels with the codec, never with the data.

/// Trait for 2-bit symbol / nucleotide base mappings.
///
/// Implementors fix a permutation of `ACGT`; the symbol value of a base is
/// its index in [`BASES`](Self::BASES).
pub trait NucleotideAlphabet {
    /// Human-readable name (e.g. "ATCG").
    const NAME: &'static str;

    /// Base for each 2-bit symbol value; index 0-3 is the symbol.
    const BASES: [u8; 4];

    /// Base for a 2-bit symbol (only the low two bits are read).
    fn to_base(symbol: u8) -> u8 {
        Self::BASES[(symbol & 0b11) as usize]
    }

    /// Symbol for a base, or `None` if the byte is not one of the four.
    fn from_base(base: u8) -> Option<u8> {
        Self::BASES.iter().position(|&b| b == base).map(|i| i as u8)
    }

    /// Check whether a byte is one of the four bases.
    fn contains(base: u8) -> bool {
        Self::from_base(base).is_some()
    }
}

/// `A=0, T=1, C=2, G=3` — the direct byte codec and balancer ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtcgAlphabet;

impl NucleotideAlphabet for AtcgAlphabet {
    const NAME: &'static str = "ATCG";
    const BASES: [u8; 4] = *b"ATCG";
}

/// `A=0, C=1, G=2, T=3` — the Huffman bit-pair ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AcgtAlphabet;

impl NucleotideAlphabet for AcgtAlphabet {
    const NAME: &'static str = "ACGT";
    const BASES: [u8; 4] = *b"ACGT";
}

/// Check whether a base belongs to the GC class (`G` or `C`).
pub fn is_gc(base: u8) -> bool {
    base == b'G' || base == b'C'
}
