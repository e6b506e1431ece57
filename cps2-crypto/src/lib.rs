//! Two-stage Feistel cipher engine for the executable region of CPS2-family
//! arcade ROMs.
//!
//! The cipher has two stages:
//!
//! - **FN1** derives, for each low-16-bit address class `i`, a 16-bit seed
//!   from the per-title master key. This stage runs identically for
//!   encryption and decryption.
//! - **FN2** is direction-dependent and is the stage that actually
//!   transforms ROM words; its round-key order and S-box order are reversed
//!   between encryption and decryption, which is what makes the whole
//!   network an involution (see [`feistel::feistel`]'s docs on asymmetric
//!   packing).
//!
//! The only entry point most callers need is [`crypt`].

pub mod cipher;
pub mod error;
mod feistel;
pub mod keyschedule;
pub mod masterkey;
mod sbox;
mod tables;

pub use cipher::{crypt, Direction};
pub use error::{CryptoError, Result};
pub use masterkey::MasterKey;
