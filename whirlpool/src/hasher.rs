use core::mem;

use digest::{
    core_api::{Buffer, FixedOutputCore, UpdateCore},
    Output,
};

use crate::{Error, WhirlpoolCore};

#[derive(Clone)]
enum State {
    Accumulating {
        core: WhirlpoolCore,
        buffer: Buffer<WhirlpoolCore>,
    },
    Finalized,
    Failed,
}

impl State {
    fn empty() -> Self {
        State::Accumulating {
            core: Default::default(),
            buffer: Default::default(),
        }
    }
}

/// Whirlpool hasher with checked state transitions.
///
/// Unlike [`Whirlpool`](crate::Whirlpool), `finalize` borrows the hasher, so
/// calling `update` or `finalize` again afterwards is possible and reported as
/// [`Error::Finalized`].
#[derive(Clone)]
pub struct Hasher {
    state: State,
}

impl Hasher {
    /// Creates an empty hasher.
    pub fn new() -> Self {
        Self {
            state: State::empty(),
        }
    }

    /// Absorbs `data`. Complete blocks are compressed right away, so at most
    /// one partial block stays buffered between calls.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
        let (core, buffer) = match &mut self.state {
            State::Accumulating { core, buffer } => (core, buffer),
            State::Finalized => return Err(reject(Error::Finalized)),
            State::Failed => return Err(reject(Error::Poisoned)),
        };
        if !core.can_absorb(buffer.get_pos(), data.len()) {
            self.state = State::Failed;
            return Err(reject(Error::LengthOverflow));
        }
        buffer.digest_blocks(data, |blocks| core.update_blocks(blocks));
        Ok(())
    }

    /// Pads the message and returns its digest. The hasher is finalized
    /// afterwards until [`reset`](Self::reset) is called.
    pub fn finalize(&mut self) -> Result<Output<WhirlpoolCore>, Error> {
        match mem::replace(&mut self.state, State::Finalized) {
            State::Accumulating {
                mut core,
                mut buffer,
            } => {
                #[cfg(feature = "tracing")]
                tracing::trace!(buffered = buffer.get_pos(), "finalizing whirlpool digest");
                let mut out = Output::<WhirlpoolCore>::default();
                core.finalize_fixed_core(&mut buffer, &mut out);
                Ok(out)
            }
            State::Finalized => Err(reject(Error::Finalized)),
            State::Failed => {
                self.state = State::Failed;
                Err(reject(Error::Poisoned))
            }
        }
    }

    /// Returns `true` once [`finalize`](Self::finalize) has succeeded.
    pub fn is_finalized(&self) -> bool {
        matches!(self.state, State::Finalized)
    }

    /// Discards all absorbed input and any error, returning to the empty state.
    pub fn reset(&mut self) {
        self.state = State::empty();
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

opaque_debug::implement!(Hasher);

#[inline]
fn reject(err: Error) -> Error {
    #[cfg(feature = "tracing")]
    tracing::warn!(error = %err, "whirlpool hasher rejected call");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::BitLength;
    use hex_literal::hex;

    fn near_capacity(spare_bits: u64) -> Hasher {
        let core = WhirlpoolCore {
            bit_len: BitLength::from_limbs([u64::MAX, u64::MAX, u64::MAX, u64::MAX - spare_bits]),
            state: [0; 8],
        };
        Hasher {
            state: State::Accumulating {
                core,
                buffer: Default::default(),
            },
        }
    }

    #[test]
    fn empty_message() {
        let mut hasher = Hasher::new();
        assert!(!hasher.is_finalized());
        let out = hasher.finalize().unwrap();
        assert_eq!(
            out[..],
            hex!(
                "19fa61d75522a4669b44e39c1d2e1726c530232130d407f89afee0964997f7a7"
                "3e83be698b288febcf88e3e03c4f0757ea8964e59b63d93708b138cc42a66eb3"
            )[..]
        );
        assert!(hasher.is_finalized());
    }

    #[test]
    fn misuse_after_finalize() {
        let mut hasher = Hasher::new();
        hasher.update(b"abc").unwrap();
        hasher.finalize().unwrap();
        assert_eq!(hasher.finalize(), Err(Error::Finalized));
        assert_eq!(hasher.update(b"more"), Err(Error::Finalized));
        assert!(hasher.is_finalized());
    }

    #[test]
    fn buffer_holds_at_most_one_partial_block() {
        let mut hasher = Hasher::new();
        hasher.update(&[0x61; 150]).unwrap();
        match &hasher.state {
            State::Accumulating { buffer, .. } => assert_eq!(buffer.get_pos(), 150 % 64),
            _ => panic!("hasher left the accumulating state"),
        }
        hasher.update(&[0x61; 42]).unwrap();
        match &hasher.state {
            State::Accumulating { buffer, .. } => assert_eq!(buffer.get_pos(), 0),
            _ => panic!("hasher left the accumulating state"),
        }
    }

    #[test]
    fn length_overflow_poisons_hasher() {
        let mut hasher = near_capacity(15);
        assert_eq!(hasher.update(&[0]), Ok(()));
        assert_eq!(hasher.update(&[0]), Err(Error::LengthOverflow));
        assert_eq!(hasher.update(&[]), Err(Error::Poisoned));
        assert_eq!(hasher.finalize(), Err(Error::Poisoned));
        assert_eq!(hasher.finalize(), Err(Error::Poisoned));
        assert!(!hasher.is_finalized());

        hasher.reset();
        hasher.update(b"a").unwrap();
        assert_eq!(hasher.finalize().unwrap()[..], crate::whirlpool(b"a")[..]);
    }

    #[test]
    fn input_filling_length_field_exactly() {
        let mut hasher = near_capacity(16);
        assert_eq!(hasher.update(&[1, 2]), Ok(()));
        assert!(hasher.finalize().is_ok());
    }

    #[test]
    fn reset_after_finalize() {
        let mut hasher = Hasher::new();
        hasher.update(b"garbage").unwrap();
        hasher.finalize().unwrap();
        hasher.reset();
        assert!(!hasher.is_finalized());
        hasher.update(b"abc").unwrap();
        assert_eq!(hasher.finalize().unwrap()[..], crate::whirlpool(b"abc")[..]);
    }
}
