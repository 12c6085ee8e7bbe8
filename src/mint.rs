//! SPL Token mint state.
//!
//! Layout (SPL Token mint, 82 bytes):
//! ```text
//!  0..4    mint_authority   (Option tag, u32)
//!  4..36   mint authority   (Address, meaningful if tag != 0)
//! 36..44   supply           (u64 LE)
//! 44..45   decimals         (u8)
//! 45..46   is_initialized   (u8, nonzero = true)
//! 46..50   freeze_authority (Option tag, u32)
//! 50..82   freeze authority (Address, meaningful if tag != 0)
//! ```

use core::fmt;

use pinocchio::Address;

use crate::checks::{check_owner_id, check_size};
use crate::cursor::SliceCursor;
use crate::error::{log_rejection, StateError};
use crate::programs;

/// Exact size of an SPL Token mint account.
pub const MINT_LEN: usize = 82;

/// Decoded SPL Token mint.
#[derive(Clone, PartialEq, Eq)]
pub struct Mint {
    mint_authority: Option<Address>,
    supply: u64,
    decimals: u8,
    is_initialized: bool,
    freeze_authority: Option<Address>,
}

impl Mint {
    /// Decode from raw account data. Same as [`decode_mint`].
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Result<Self, StateError> {
        decode_mint(data)
    }

    /// `None` once minting has been permanently disabled.
    #[inline(always)]
    pub fn mint_authority(&self) -> Option<&Address> {
        self.mint_authority.as_ref()
    }

    #[inline(always)]
    pub fn supply(&self) -> u64 {
        self.supply
    }

    #[inline(always)]
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    #[inline(always)]
    pub fn freeze_authority(&self) -> Option<&Address> {
        self.freeze_authority.as_ref()
    }
}

impl fmt::Debug for Mint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mint")
            .field(
                "mint_authority",
                &self.mint_authority.as_ref().map(Address::as_array),
            )
            .field("supply", &self.supply)
            .field("decimals", &self.decimals)
            .field("is_initialized", &self.is_initialized)
            .field(
                "freeze_authority",
                &self.freeze_authority.as_ref().map(Address::as_array),
            )
            .finish()
    }
}

/// Decode an 82-byte SPL Token mint.
pub fn decode_mint(data: &[u8]) -> Result<Mint, StateError> {
    check_size(data, MINT_LEN)?;

    let mut cur = SliceCursor::new(data);
    Ok(Mint {
        mint_authority: cur.read_option_address()?,
        supply: cur.read_u64()?,
        decimals: cur.read_u8()?,
        is_initialized: cur.read_bool()?,
        freeze_authority: cur.read_option_address()?,
    })
}

/// Decode a mint after checking it is owned by the SPL Token program.
///
/// The owner check runs first, as in
/// [`decode_owned_token_account`](crate::decode_owned_token_account).
pub fn decode_owned_mint(data: &[u8], owner: &Address) -> Result<Mint, StateError> {
    check_owner_id(owner, &programs::TOKEN)
        .and_then(|()| decode_mint(data))
        .inspect_err(|err| log_rejection(*err, data.len()))
}
