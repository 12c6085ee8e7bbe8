//! SPL Token account (balance account) state.
//!
//! Token accounts are 165 bytes with a fixed layout. Optional fields use the
//! `COption` encoding: a `u32` tag followed by a payload slot that is always
//! present, zeroed or not.
//!
//! Layout (SPL Token account, 165 bytes):
//! ```text
//!  0..32   mint             (Address)
//! 32..64   owner            (Address)
//! 64..72   amount           (u64 LE)
//! 72..76   delegate         (Option tag, u32)
//! 76..108  delegate key     (Address, meaningful if tag != 0)
//! 108..109 state            (u8: 0=uninitialized, 1=initialized, 2=frozen)
//! 109..113 is_native        (Option tag, u32)
//! 113..121 native reserve   (u64 LE, meaningful if tag != 0)
//! 121..129 delegated_amount (u64 LE)
//! 129..133 close_authority  (Option tag, u32)
//! 133..165 close authority  (Address, meaningful if tag != 0)
//! ```

use core::fmt;

use pinocchio::Address;

use crate::checks::{check_owner_id, check_size};
use crate::cursor::SliceCursor;
use crate::error::{log_rejection, StateError};
use crate::programs;

/// Exact size of an SPL Token account.
pub const TOKEN_ACCOUNT_LEN: usize = 165;

/// Lifecycle state byte of a token account (offset 108).
///
/// The token program only ever writes 0, 1 or 2. Anything else is kept as
/// `Unknown` so the raw byte survives; the token program is the authority
/// on whether such an account is valid, not this decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    Uninitialized,
    Initialized,
    Frozen,
    Unknown(u8),
}

impl AccountState {
    /// The byte as stored on chain.
    #[inline(always)]
    pub const fn raw(self) -> u8 {
        match self {
            AccountState::Uninitialized => 0,
            AccountState::Initialized => 1,
            AccountState::Frozen => 2,
            AccountState::Unknown(b) => b,
        }
    }
}

impl From<u8> for AccountState {
    #[inline(always)]
    fn from(b: u8) -> Self {
        match b {
            0 => AccountState::Uninitialized,
            1 => AccountState::Initialized,
            2 => AccountState::Frozen,
            other => AccountState::Unknown(other),
        }
    }
}

/// Decoded SPL Token account.
///
/// Only obtainable through [`decode_token_account`] or
/// [`decode_owned_token_account`].
#[derive(Clone, PartialEq, Eq)]
pub struct TokenAccount {
    mint: Address,
    owner: Address,
    amount: u64,
    delegate: Option<Address>,
    state: AccountState,
    is_native: Option<u64>,
    delegated_amount: u64,
    close_authority: Option<Address>,
}

impl TokenAccount {
    /// Decode from raw account data. Same as [`decode_token_account`].
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Result<Self, StateError> {
        decode_token_account(data)
    }

    /// Mint this account holds tokens of.
    #[inline(always)]
    pub fn mint(&self) -> &Address {
        &self.mint
    }

    /// Wallet (or PDA) that owns the balance. Not the program owner.
    #[inline(always)]
    pub fn owner(&self) -> &Address {
        &self.owner
    }

    #[inline(always)]
    pub fn amount(&self) -> u64 {
        self.amount
    }

    #[inline(always)]
    pub fn delegate(&self) -> Option<&Address> {
        self.delegate.as_ref()
    }

    #[inline(always)]
    pub fn state(&self) -> AccountState {
        self.state
    }

    /// Rent-exempt reserve, present only for wrapped-SOL accounts.
    #[inline(always)]
    pub fn native_reserve(&self) -> Option<u64> {
        self.is_native
    }

    #[inline(always)]
    pub fn delegated_amount(&self) -> u64 {
        self.delegated_amount
    }

    #[inline(always)]
    pub fn close_authority(&self) -> Option<&Address> {
        self.close_authority.as_ref()
    }

    #[inline(always)]
    pub fn is_native(&self) -> bool {
        self.is_native.is_some()
    }

    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.state != AccountState::Uninitialized
    }

    #[inline(always)]
    pub fn is_frozen(&self) -> bool {
        self.state == AccountState::Frozen
    }
}

impl fmt::Debug for TokenAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAccount")
            .field("mint", self.mint.as_array())
            .field("owner", self.owner.as_array())
            .field("amount", &self.amount)
            .field("delegate", &self.delegate.as_ref().map(Address::as_array))
            .field("state", &self.state)
            .field("is_native", &self.is_native)
            .field("delegated_amount", &self.delegated_amount)
            .field(
                "close_authority",
                &self.close_authority.as_ref().map(Address::as_array),
            )
            .finish()
    }
}

/// Decode a 165-byte SPL Token account.
///
/// Fails with `InvalidAccountSize` for any other length, before any field
/// is read. Does not check who owns the account; see
/// [`decode_owned_token_account`].
///
/// ```rust,ignore
/// let account = decode_token_account(&data)?;
/// require_gte!(account.amount(), min_collateral, MyError::Undercollateralized);
/// ```
pub fn decode_token_account(data: &[u8]) -> Result<TokenAccount, StateError> {
    check_size(data, TOKEN_ACCOUNT_LEN)?;

    let mut cur = SliceCursor::new(data);
    Ok(TokenAccount {
        mint: cur.read_address()?,
        owner: cur.read_address()?,
        amount: cur.read_u64()?,
        delegate: cur.read_option_address()?,
        state: AccountState::from(cur.read_u8()?),
        is_native: cur.read_option_u64()?,
        delegated_amount: cur.read_u64()?,
        close_authority: cur.read_option_address()?,
    })
}

/// Decode a token account after checking its program owner.
///
/// `owner` is the account's owning program as reported by whoever fetched
/// it. Anything other than [`programs::TOKEN`] fails with
/// `InvalidAccountOwner`, and that check wins over a bad length.
///
/// ```rust,ignore
/// let account = decode_owned_token_account(&data, account_view.owner())?;
/// ```
pub fn decode_owned_token_account(
    data: &[u8],
    owner: &Address,
) -> Result<TokenAccount, StateError> {
    check_owner_id(owner, &programs::TOKEN)
        .and_then(|()| decode_token_account(data))
        .inspect_err(|err| log_rejection(*err, data.len()))
}
