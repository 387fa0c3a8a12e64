use core::mem::MaybeUninit;

use crate::error::TrustifyError;

pub const UNINIT_BYTE: MaybeUninit<u8> = MaybeUninit::uninit();

/// Writes bytes from a source slice into an uninitialized destination buffer.
///
/// Caller must ensure that `src.len()` equals `dst.len()`.
///
/// From pinocchio's `[no_std]` library:
/// <https://github.com/anza-xyz/pinocchio/blob/3044aaf5ea7eac01adc754d4bdf93c21c6e54d42/programs/token/src/lib.rs#L13>
#[inline(always)]
pub fn write_bytes(dst: &mut [MaybeUninit<u8>], src: &[u8]) {
    debug_assert_eq!(
        src.len(),
        dst.len(),
        "tried to `write_bytes` with mismatched src/dst lengths"
    );
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        d.write(*s);
    }
}

/// A stack-allocated, append-only byte buffer of capacity `N`.
///
/// Bytes in `data[..len]` are always initialized.
pub struct StackBuffer<const N: usize> {
    data: [MaybeUninit<u8>; N],
    len: usize,
}

impl<const N: usize> Default for StackBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StackBuffer<N> {
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            data: [UNINIT_BYTE; N],
            len: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `src` to the buffer, failing if it doesn't fit.
    #[inline(always)]
    pub fn extend(&mut self, src: &[u8]) -> Result<(), TrustifyError> {
        let end = self
            .len
            .checked_add(src.len())
            .filter(|end| *end <= N)
            .ok_or(TrustifyError::InsufficientByteLength)?;
        write_bytes(&mut self.data[self.len..end], src);
        self.len = end;
        Ok(())
    }

    #[inline(always)]
    pub fn push(&mut self, byte: u8) -> Result<(), TrustifyError> {
        self.extend(&[byte])
    }

    /// Returns the initialized bytes.
    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        // Safety: The first `len` bytes are always initialized.
        unsafe { core::slice::from_raw_parts(self.data.as_ptr() as *const u8, self.len) }
    }
}
