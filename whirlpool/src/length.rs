/// Message length in bits as a 256-bit integer, most significant limb first.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub(crate) struct BitLength([u64; 4]);

impl BitLength {
    /// Adds `bits`, returning `None` if the sum does not fit in 256 bits.
    pub(crate) fn checked_add(self, bits: u128) -> Option<Self> {
        let mut limbs = self.0;
        let mut carry = 0;
        adc(&mut limbs[3], bits as u64, &mut carry);
        adc(&mut limbs[2], (bits >> 64) as u64, &mut carry);
        adc(&mut limbs[1], 0, &mut carry);
        adc(&mut limbs[0], 0, &mut carry);
        if carry == 0 {
            Some(Self(limbs))
        } else {
            None
        }
    }

    pub(crate) fn to_be_bytes(self) -> [u8; 32] {
        let mut buf = [0u8; 32];
        for (chunk, v) in buf.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
        buf
    }

    #[cfg(test)]
    pub(crate) fn from_limbs(limbs: [u64; 4]) -> Self {
        Self(limbs)
    }
}

/// Number of bits in `bytes` bytes. Cannot overflow since `usize` is at most
/// 64 bits wide.
#[inline]
pub(crate) fn bits(bytes: usize) -> u128 {
    8 * bytes as u128
}

#[inline(always)]
fn adc(a: &mut u64, b: u64, carry: &mut u64) {
    let ret = (*a as u128) + (b as u128) + (*carry as u128);
    *a = ret as u64;
    *carry = (ret >> 64) as u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_across_limbs() {
        let len = BitLength::from_limbs([0, 0, 0, u64::MAX]);
        assert_eq!(len.checked_add(1), Some(BitLength::from_limbs([0, 0, 1, 0])));

        let len = BitLength::from_limbs([0, u64::MAX, u64::MAX, u64::MAX]);
        assert_eq!(len.checked_add(1), Some(BitLength::from_limbs([1, 0, 0, 0])));

        let len = BitLength::default().checked_add(u128::MAX).unwrap();
        assert_eq!(len, BitLength::from_limbs([0, 0, u64::MAX, u64::MAX]));
    }

    #[test]
    fn overflow_is_reported() {
        let max = BitLength::from_limbs([u64::MAX; 4]);
        assert_eq!(max.checked_add(0), Some(max));
        assert_eq!(max.checked_add(1), None);

        let almost = BitLength::from_limbs([u64::MAX, u64::MAX, u64::MAX, u64::MAX - 7]);
        assert!(almost.checked_add(7).is_some());
        assert!(almost.checked_add(8).is_none());
    }

    #[test]
    fn big_endian_encoding() {
        let len = BitLength::default().checked_add(bits(3)).unwrap();
        let mut expected = [0u8; 32];
        expected[31] = 24;
        assert_eq!(len.to_be_bytes(), expected);

        let len = BitLength::from_limbs([0x0102030405060708, 0, 0, 0x1122334455667788]);
        let buf = len.to_be_bytes();
        assert_eq!(buf[..8], [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(buf[24..], [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
    }
}
