use core::fmt;

/// Errors reported by [`Hasher`](crate::Hasher).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The hasher has already produced its digest.
    Finalized,
    /// The total message length would not fit in the 256-bit length field.
    LengthOverflow,
    /// The hasher previously failed with [`Error::LengthOverflow`].
    Poisoned,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::Finalized => "hasher already finalized",
            Error::LengthOverflow => "message length exceeds 2^256 - 1 bits",
            Error::Poisoned => "hasher unusable after length overflow",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
