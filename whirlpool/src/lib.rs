//! An implementation of the [Whirlpool][1] cryptographic hash algorithm.
//!
//! This is the algorithm recommended by NESSIE (New European Schemes for
//! Signatures, Integrity and Encryption; an European research project).
//!
//! The constants used by Whirlpool were changed twice (2001 and 2003) - this
//! crate only implements the most recent standard. The two older Whirlpool
//! implementations (sometimes called Whirlpool-0 (pre 2001) and Whirlpool-T
//! (pre 2003)) were not used much anyway (both have never been recommended
//! by NESSIE).
//!
//! For details see <http://www.larc.usp.br/~pbarreto/WhirlpoolPage.html>.
//!
//! # Usage
//!
//! ```rust
//! use whirlpool::{Whirlpool, Digest};
//! use hex_literal::hex;
//!
//! // create a hasher object, to use it do not forget to import `Digest` trait
//! let mut hasher = Whirlpool::new();
//! // write input message
//! hasher.update(b"Hello Whirlpool");
//! // read hash digest (it will consume hasher)
//! let result = hasher.finalize();
//!
//! assert_eq!(result[..], hex!("
//!     8eaccdc136903c458ea0b1376be2a5fc9dc5b8ce8892a3b4f43366e2610c206c
//!     a373816495e63db0fff2ff25f75aa7162f332c9f518c3036456502a8414d300a
//! ")[..]);
//! ```
//!
//! [`Hasher`] offers the same computation behind an explicit state machine:
//! misuse such as finalizing twice is reported as an [`Error`] instead of
//! being ruled out by ownership.
//!
//! ```rust
//! use whirlpool::{Error, Hasher};
//!
//! let mut hasher = Hasher::new();
//! hasher.update(b"Hello ")?;
//! hasher.update(b"Whirlpool")?;
//! let result = hasher.finalize()?;
//! assert_eq!(result[..], whirlpool::whirlpool(b"Hello Whirlpool")[..]);
//!
//! assert_eq!(hasher.finalize(), Err(Error::Finalized));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Crate features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`].
//! - `compress`: exposes the raw compression function as `compress`.
//! - `tracing`: emits [`tracing`](https://docs.rs/tracing) events when a
//!   [`Hasher`] rejects a call and when it finalizes.
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/Whirlpool_(hash_function)
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

mod compress;
mod consts;
mod error;
mod hasher;
mod length;

#[cfg(feature = "compress")]
pub use compress::compress;
pub use error::Error;
pub use hasher::Hasher;

use compress::{compress_block, BLOCK_SIZE};
use core::fmt;
use digest::{
    block_buffer::Eager,
    consts::U64,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, UpdateCore,
    },
    HashMarker, Output, Reset,
};
use length::BitLength;

/// Core Whirlpool hasher state.
#[derive(Clone, Default)]
pub struct WhirlpoolCore {
    bit_len: BitLength,
    state: [u64; 8],
}

impl WhirlpoolCore {
    fn update_len(&mut self, bits: u128) {
        match self.bit_len.checked_add(bits) {
            Some(len) => self.bit_len = len,
            None => panic!("Whirlpool message length exceeds 2^256 - 1 bits"),
        }
    }

    /// Whether `buffered + extra` more bytes still fit in the length field.
    fn can_absorb(&self, buffered: usize, extra: usize) -> bool {
        self.bit_len
            .checked_add(length::bits(buffered) + length::bits(extra))
            .is_some()
    }
}

impl HashMarker for WhirlpoolCore {}

impl BlockSizeUser for WhirlpoolCore {
    type BlockSize = U64;
}

impl BufferKindUser for WhirlpoolCore {
    type BufferKind = Eager;
}

impl OutputSizeUser for WhirlpoolCore {
    type OutputSize = U64;
}

impl UpdateCore for WhirlpoolCore {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.update_len(length::bits(BLOCK_SIZE * blocks.len()));
        for block in blocks {
            compress_block(&mut self.state, block);
        }
    }
}

impl FixedOutputCore for WhirlpoolCore {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        self.update_len(length::bits(buffer.get_pos()));
        let len = self.bit_len.to_be_bytes();

        let mut state = self.state;
        buffer.digest_pad(0x80, &len, |block| compress_block(&mut state, block));

        for (chunk, v) in out.chunks_exact_mut(8).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
    }
}

impl Reset for WhirlpoolCore {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for WhirlpoolCore {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Whirlpool")
    }
}

opaque_debug::implement!(WhirlpoolCore);

/// Whirlpool hasher state.
///
/// # Panics
///
/// Updating or finalizing panics if the total message length exceeds
/// 2^256 - 1 bits. Use [`Hasher`] to get [`Error::LengthOverflow`] instead.
pub type Whirlpool = CoreWrapper<WhirlpoolCore>;

/// Computes the Whirlpool digest of `data` in one call.
pub fn whirlpool(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Whirlpool::digest(data));
    out
}
