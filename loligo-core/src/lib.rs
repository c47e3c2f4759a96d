//! Shared primitives for the loligo DNA data storage ecosystem.
//!
//! `loligo-core` provides the foundation that the other loligo crates build
//! on:
//!
//! - **Error types** — [`LoligoError`] and [`Result`] for structured error handling
//! - **Alphabets** — the two 2-bit symbol/base orderings, [`AtcgAlphabet`] and [`AcgtAlphabet`]
//! - **Header metadata** — per-payload stage parameters in [`header`]

pub mod alphabet;
pub mod error;
pub mod header;

pub use alphabet::{is_gc, AcgtAlphabet, AtcgAlphabet, NucleotideAlphabet};
pub use error::{LoligoError, Result};
