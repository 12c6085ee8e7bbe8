use pinocchio::Address;

use crate::error::StateError;

/// Width of the discriminant in front of every tagged-optional field.
pub const OPTION_TAG_LEN: usize = 4;

/// Zero-copy read cursor over a byte slice.
///
/// Tracks the current position and reads little-endian fields in order.
/// Every read is bounds-checked, so a short buffer produces
/// `InvalidAccountSize` instead of a panic. The account decoders validate
/// the exact length before the first read, so in practice those reads
/// cannot fail.
///
/// ```rust,ignore
/// let mut cur = SliceCursor::new(data);
/// let mint     = cur.read_address()?;
/// let owner    = cur.read_address()?;
/// let amount   = cur.read_u64()?;
/// let delegate = cur.read_option_address()?;
/// ```
///
/// If the read order doesn't match the on-chain layout you get wrong
/// values, not an error. Keep the layout table next to the decoder.
pub struct SliceCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    #[inline(always)]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes remaining from the current position.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Current byte offset into the slice.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    fn take<const N: usize>(&mut self) -> Result<[u8; N], StateError> {
        let end = self
            .pos
            .checked_add(N)
            .ok_or(StateError::InvalidAccountSize)?;
        let bytes: [u8; N] = self
            .data
            .get(self.pos..end)
            .and_then(|s| s.try_into().ok())
            .ok_or(StateError::InvalidAccountSize)?;
        self.pos = end;
        Ok(bytes)
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8, StateError> {
        let [val] = self.take::<1>()?;
        Ok(val)
    }

    #[inline(always)]
    pub fn read_u32(&mut self) -> Result<u32, StateError> {
        Ok(u32::from_le_bytes(self.take()?))
    }

    #[inline(always)]
    pub fn read_u64(&mut self) -> Result<u64, StateError> {
        Ok(u64::from_le_bytes(self.take()?))
    }

    /// `0` → `false`, anything else → `true`.
    #[inline(always)]
    pub fn read_bool(&mut self) -> Result<bool, StateError> {
        Ok(self.read_u8()? != 0)
    }

    /// Copy 32 raw bytes out as an address. No byte-order transform.
    #[inline(always)]
    pub fn read_address(&mut self) -> Result<Address, StateError> {
        let arr: [u8; 32] = self.take()?;
        Ok(arr.into())
    }

    /// Skip `n` bytes without reading them.
    #[inline(always)]
    pub fn skip(&mut self, n: usize) -> Result<(), StateError> {
        let end = self
            .pos
            .checked_add(n)
            .ok_or(StateError::InvalidAccountSize)?;
        if end > self.data.len() {
            return Err(StateError::InvalidAccountSize);
        }
        self.pos = end;
        Ok(())
    }

    // ── Tagged optionals (COption) ───────────────────────────────────────────

    /// Read a tagged-optional field: a `u32` LE discriminant followed by a
    /// fixed-width payload.
    ///
    /// The payload region is always physically present, so `read` runs and
    /// the cursor advances past it whatever the tag says. A zero tag yields
    /// `None` and the payload bytes are dropped; any nonzero tag yields
    /// `Some(payload)`.
    ///
    /// ```rust,ignore
    /// let reserve = cur.read_tagged(SliceCursor::read_u64)?; // 4 + 8 bytes
    /// ```
    #[inline(always)]
    pub fn read_tagged<T>(
        &mut self,
        read: impl FnOnce(&mut Self) -> Result<T, StateError>,
    ) -> Result<Option<T>, StateError> {
        let tag = self.read_u32()?;
        let payload = read(self)?;
        Ok((tag != 0).then_some(payload))
    }

    /// Tagged-optional address: 4-byte tag + 32-byte key.
    #[inline(always)]
    pub fn read_option_address(&mut self) -> Result<Option<Address>, StateError> {
        self.read_tagged(Self::read_address)
    }

    /// Tagged-optional `u64`: 4-byte tag + 8-byte LE value.
    #[inline(always)]
    pub fn read_option_u64(&mut self) -> Result<Option<u64>, StateError> {
        self.read_tagged(Self::read_u64)
    }
}
