//! GC-content and homopolymer balancing for synthesis-friendly sequences.
//!
//! DNA synthesis and sequencing behave poorly on sequences with extreme GC
//! content or long single-base runs. The balancer checks the direct
//! encoding of a payload against [`GcBounds`]; when it violates them, the
//! payload is bit-inverted (`XOR 0xFF`) and re-encoded. A one-base signal
//! prefix records which variant was emitted: `'0'` for direct, `'1'` for
//! inverted.
//!
//! The fallback is single-shot. The inverted variant is emitted without a
//! second constraint check, so encoding never fails; the bounds are a
//! preference, not a guarantee.

use loligo_core::header::GcBounds;
use loligo_core::{is_gc, AtcgAlphabet, LoligoError, Result};

use crate::nucleotide;

/// Signal prefix for a directly encoded payload.
const SIGNAL_DIRECT: u8 = b'0';
/// Signal prefix for a bit-inverted payload.
const SIGNAL_INVERTED: u8 = b'1';

/// Fraction of GC-class bases in a sequence (0.0 for empty input).
pub fn gc_content(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq.iter().filter(|&&b| is_gc(b)).count();
    gc as f64 / seq.len() as f64
}

/// Length of the longest run of a single repeated byte (0 for empty input).
pub fn max_homopolymer_run(seq: &[u8]) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut prev = None;
    for &b in seq {
        if Some(b) == prev {
            run += 1;
        } else {
            prev = Some(b);
            run = 1;
        }
        longest = longest.max(run);
    }
    longest
}

/// Check a sequence against the balancer bounds.
pub fn satisfies(seq: &[u8], bounds: &GcBounds) -> bool {
    let gc = gc_content(seq);
    gc >= bounds.gc_min && gc <= bounds.gc_max && max_homopolymer_run(seq) <= bounds.max_homopolymer
}

/// Encode a payload with the signal-prefixed constraint fallback.
///
/// The direct ATCG encoding is emitted behind a `'0'` prefix when it
/// satisfies `bounds`; otherwise the payload is XORed with `0xFF`,
/// re-encoded, and emitted behind a `'1'` prefix without re-checking.
/// Never fails; output length is `data.len() * 4 + 1`.
pub fn encode(data: &[u8], bounds: &GcBounds) -> Vec<u8> {
    let direct = nucleotide::encode::<AtcgAlphabet>(data);
    if satisfies(&direct, bounds) {
        let mut out = Vec::with_capacity(direct.len() + 1);
        out.push(SIGNAL_DIRECT);
        out.extend_from_slice(&direct);
        return out;
    }

    let inverted: Vec<u8> = data.iter().map(|&b| b ^ 0xFF).collect();
    let alt = nucleotide::encode::<AtcgAlphabet>(&inverted);
    let mut out = Vec::with_capacity(alt.len() + 1);
    out.push(SIGNAL_INVERTED);
    out.extend_from_slice(&alt);
    out
}

/// Decode a signal-prefixed balanced sequence.
///
/// # Errors
///
/// - `LoligoError::TooShort` if there is no signal base or no payload
///   behind it
/// - `LoligoError::InvalidSignal` if the first base is neither `'0'` nor
///   `'1'`
/// - errors from [`nucleotide::decode`] for a malformed payload
pub fn decode(seq: &[u8]) -> Result<Vec<u8>> {
    let Some((&signal, payload)) = seq.split_first() else {
        return Err(LoligoError::TooShort(
            "empty sequence has no signal base".to_string(),
        ));
    };
    if payload.is_empty() {
        return Err(LoligoError::TooShort(
            "sequence ends after the signal base".to_string(),
        ));
    }

    match signal {
        SIGNAL_DIRECT => nucleotide::decode::<AtcgAlphabet>(payload),
        SIGNAL_INVERTED => {
            let data = nucleotide::decode::<AtcgAlphabet>(payload)?;
            Ok(data.into_iter().map(|b| b ^ 0xFF).collect())
        }
        other => Err(LoligoError::InvalidSignal(format!(
            "unrecognized signal base '{}' (0x{:02X})",
            other as char, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gc_content_basics() {
        assert_eq!(gc_content(b""), 0.0);
        assert_eq!(gc_content(b"ATAT"), 0.0);
        assert_eq!(gc_content(b"GCGC"), 1.0);
        assert_eq!(gc_content(b"ATGC"), 0.5);
    }

    #[test]
    fn homopolymer_runs() {
        assert_eq!(max_homopolymer_run(b""), 0);
        assert_eq!(max_homopolymer_run(b"ACGT"), 1);
        assert_eq!(max_homopolymer_run(b"AACCCGT"), 3);
        assert_eq!(max_homopolymer_run(b"TTTT"), 4);
    }

    #[test]
    fn balanced_payload_passes_through() {
        // 0x1E = 00 01 11 10 -> ATGC: GC fraction 0.5, max run 1
        let seq = encode(&[0x1E], &GcBounds::default());
        assert_eq!(seq, b"0ATGC");
        assert_eq!(decode(&seq).unwrap(), vec![0x1E]);
    }

    #[test]
    fn all_zero_payload_is_inverted() {
        // 0x00 encodes to AAAA (GC 0.0, run 4): out of bounds, so the
        // inverted payload 0xFF (GGGG) is emitted behind the '1' signal.
        let seq = encode(&[0x00, 0x00], &GcBounds::default());
        assert_eq!(seq, b"1GGGGGGGG");
        assert_eq!(decode(&seq).unwrap(), vec![0x00, 0x00]);
    }

    #[test]
    fn fallback_is_not_rechecked() {
        // The inverted form violates the bounds just as badly; it is
        // emitted anyway.
        let seq = encode(&[0x00], &GcBounds::default());
        assert_eq!(seq[0], b'1');
        assert!(!satisfies(&seq[1..], &GcBounds::default()));
    }

    #[test]
    fn roundtrip_both_branches() {
        let bounds = GcBounds::default();
        for data in [&[0x1E, 0xE1][..], &[0x00, 0x00, 0x00], &[0xFF; 5], b"Hello, world"] {
            let seq = encode(data, &bounds);
            assert_eq!(decode(&seq).unwrap(), data.to_vec());
        }
    }

    #[test]
    fn empty_payload_encodes_to_bare_signal() {
        // An empty payload fails the GC check (0.0 < gc_min) and inverts to
        // an equally empty payload: the output is the lone '1' signal,
        // which is too short to decode.
        let seq = encode(b"", &GcBounds::default());
        assert_eq!(seq, b"1");
        let err = decode(&seq).unwrap_err();
        assert!(matches!(err, LoligoError::TooShort(_)));
    }

    #[test]
    fn decode_empty_is_too_short() {
        let err = decode(b"").unwrap_err();
        assert!(matches!(err, LoligoError::TooShort(_)));
    }

    #[test]
    fn decode_rejects_unknown_signal() {
        let err = decode(b"AATCG").unwrap_err();
        assert!(matches!(err, LoligoError::InvalidSignal(_)));
    }

    #[test]
    fn decode_propagates_payload_errors() {
        // Payload length not a multiple of 4.
        let err = decode(b"0ATC").unwrap_err();
        assert!(matches!(err, LoligoError::InvalidLength(_)));
    }

    #[test]
    fn loose_bounds_skip_the_fallback() {
        let loose = GcBounds {
            gc_min: 0.0,
            gc_max: 1.0,
            max_homopolymer: usize::MAX,
        };
        let seq = encode(&[0x00], &loose);
        assert_eq!(seq, b"0AAAA");
    }
}
