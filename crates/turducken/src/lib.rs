//! # turducken
//!
//! Fuses a sequence of words into a single **turducken case** word.
//!
//! Every token is lowercased and split in half at its own midpoint. Tokens that
//! precede the midpoint of the sequence keep their front half, the rest keep their
//! back half, and the kept halves are joined in order. The inverse fusion
//! ("keyckchi") keeps the opposite halves.
//!
//! ## Quick start
//!
//! ```rust
//! use turducken::{keyckchi, turducken};
//!
//! assert_eq!(turducken(["turkey", "duck", "chicken"]), "turducken");
//! assert_eq!(turducken("Turkey, Duck & Chicken"), "turducken");
//! assert_eq!(keyckchi("turkey duck chicken"), "keyckchi");
//! ```
//!
//! ## Modules
//!
//! - [`fuse`] — bisection, half selection and the [`Fuser`] pipeline
//! - [`input`] — `Turduckenable` input union and token normalization
//! - [`words`] — word extraction (`words`, [`Tokenizer`])
//! - [`error`] — Error types for the JSON input boundary

pub mod error;
pub mod fuse;
pub mod input;
pub mod words;

pub use error::TurduckenError;
pub use fuse::{
    bisect, fuse_forward, fuse_inverse, fuse_json, FuseOptions, Fuser, Fusion, Half,
    InverseBoundary, TokenHalves,
};
pub use fuse::{fuse_forward as turducken, fuse_inverse as keyckchi};
pub use input::{normalize, Turduckenable};
pub use words::{words, Tokenizer, Words};
