//! SM3 cryptographic hash (GM/T 0004-2012) and HMAC-SM3.
//!
//! ```
//! let digest = sm3::hash_bytes(b"abc").unwrap();
//! assert_eq!(
//!     format!("{:x}", digest),
//!     "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::expect_used, clippy::unwrap_used))]

extern crate alloc;

pub mod consts;
mod error;
#[cfg(feature = "std")]
mod file;
mod hmac;
pub mod pad;
mod sm3;
mod utils;

pub use digest::Digest;

pub use crate::error::Error;
#[cfg(feature = "std")]
pub use crate::file::{hash_file, read_file};
pub use crate::hmac::{hmac, HmacContext};
pub use crate::pad::{pad, PaddedBuffer};
pub use crate::sm3::{hash_bytes, Block, Output, Sm3};
pub use crate::utils::{compress, expand, ExpandedWords, HashState};
