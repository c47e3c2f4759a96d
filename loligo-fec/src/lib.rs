//! Forward error correction for the loligo DNA data storage ecosystem.
//!
//! DNA synthesis, storage, and sequencing all introduce errors; these
//! layers trade sequence length for the ability to survive them:
//!
//! - **Hamming(7,4)** — one repaired bit per 7-bit codeword via [`hamming`]
//! - **Triple repetition** — majority vote per base via [`triple`]
//! - **Block parity** — per-block damage detection via [`parity`]
//! - **Reed-Solomon** — multi-byte repair over GF(2^8) via [`rs`]
//! - **Channel simulator** — seeded substitution noise via [`channel`]

pub mod channel;
pub mod hamming;
pub mod parity;
pub mod rs;
pub mod triple;

// Re-export the rule and report types
pub use channel::ChannelConfig;
pub use parity::{ParityRule, ParityStrip};
pub use rs::RsDecode;
pub use triple::TripleDecode;
