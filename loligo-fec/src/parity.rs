//! Block-interleaved single-base parity.
//!
//! The sequence is cut into blocks of `block_size` data bases; each block
//! gains one trailing parity base computed by a [`ParityRule`]. Parity
//! detects a corrupted block without locating the damaged base, so the
//! strip pass reports suspect block indices instead of failing.
//!
//! The add and strip passes are asymmetric around the final block. Adding
//! always emits a parity base, even after a short final block. Stripping
//! walks fixed `block_size + 1` chunks and treats a short final chunk as
//! data plus an unverified trailing parity base, dropping that base
//! without checking it.

use loligo_core::{is_gc, LoligoError, Result};

/// Parity computation rule, resolved from its header identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParityRule {
    /// Even count of GC-class bases -> `A`, odd -> `T`.
    GcCount,
}

impl ParityRule {
    /// Resolve a rule identifier from a payload header.
    ///
    /// # Errors
    ///
    /// Returns `LoligoError::UnsupportedRule` for identifiers this build
    /// has no implementation for.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "gc-count" => Ok(ParityRule::GcCount),
            other => Err(LoligoError::UnsupportedRule(format!(
                "no parity rule named '{other}'"
            ))),
        }
    }

    /// The identifier written into payload headers.
    pub fn name(&self) -> &'static str {
        match self {
            ParityRule::GcCount => "gc-count",
        }
    }

    /// Parity base for one data block.
    pub fn parity_base(&self, block: &[u8]) -> u8 {
        match self {
            ParityRule::GcCount => {
                let gc = block.iter().filter(|&&b| is_gc(b)).count();
                if gc % 2 == 0 {
                    b'A'
                } else {
                    b'T'
                }
            }
        }
    }
}

/// Outcome of a parity strip pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityStrip {
    /// Data bases with the parity bases removed.
    pub sequence: Vec<u8>,
    /// Zero-based indices of full blocks whose parity did not match.
    pub error_blocks: Vec<usize>,
}

/// Append one parity base per `block_size` data bases.
///
/// The final block may be shorter than `block_size`; it still receives a
/// parity base. Empty input stays empty.
///
/// # Errors
///
/// Returns `LoligoError::InvalidArgument` if `block_size` is zero.
pub fn add(seq: &[u8], block_size: usize, rule: ParityRule) -> Result<Vec<u8>> {
    if block_size == 0 {
        return Err(LoligoError::InvalidArgument(
            "parity block size must be positive".to_string(),
        ));
    }
    let mut out = Vec::with_capacity(seq.len() + seq.len() / block_size + 1);
    for block in seq.chunks(block_size) {
        out.extend_from_slice(block);
        out.push(rule.parity_base(block));
    }
    Ok(out)
}

/// Remove and verify interleaved parity bases.
///
/// Full `block_size + 1` chunks are verified and their block index
/// recorded in [`ParityStrip::error_blocks`] on mismatch. A short final
/// chunk is data plus one unverified parity base; the trailing base is
/// dropped without a check.
///
/// # Errors
///
/// Returns `LoligoError::InvalidArgument` if `block_size` is zero.
pub fn strip(seq: &[u8], block_size: usize, rule: ParityRule) -> Result<ParityStrip> {
    if block_size == 0 {
        return Err(LoligoError::InvalidArgument(
            "parity block size must be positive".to_string(),
        ));
    }
    let chunk_len = block_size + 1;
    let mut sequence = Vec::with_capacity(seq.len());
    let mut error_blocks = Vec::new();
    for (index, chunk) in seq.chunks(chunk_len).enumerate() {
        if chunk.len() == chunk_len {
            let (data, parity) = chunk.split_at(block_size);
            if rule.parity_base(data) != parity[0] {
                error_blocks.push(index);
            }
            sequence.extend_from_slice(data);
        } else {
            sequence.extend_from_slice(&chunk[..chunk.len() - 1]);
        }
    }
    Ok(ParityStrip {
        sequence,
        error_blocks,
    })
}
