use pinocchio::Address;

use crate::error::StateError;
use crate::{require, require_keys_eq};

/// Verify account data is exactly `expected` bytes.
///
/// Token program layouts are fixed-size, so a longer buffer is as wrong as
/// a shorter one.
#[inline(always)]
pub fn check_size(data: &[u8], expected: usize) -> Result<(), StateError> {
    require!(data.len() == expected, StateError::InvalidAccountSize);
    Ok(())
}

/// Verify the owning program id equals `expected`.
#[inline(always)]
pub fn check_owner_id(owner: &Address, expected: &Address) -> Result<(), StateError> {
    require_keys_eq!(owner, expected, StateError::InvalidAccountOwner);
    Ok(())
}
