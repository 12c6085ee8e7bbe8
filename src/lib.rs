#![no_std]
//! **token-state** - decoders for SPL Token account state.
//!
//! Turns raw account data into typed records for the three fixed-layout
//! account kinds the SPL Token program owns. Zero-copy reads, no alloc,
//! BPF-safe, usable both on chain and from off-chain clients.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use token_state::prelude::*;
//!
//! let account = decode_owned_token_account(&data, &owner_program)?;
//! if account.is_frozen() {
//!     return Err(MyError::Frozen.into());
//! }
//! ```
//!
//! # Decoders
//!
//! | Function | Input size | Produces |
//! |---|---|---|
//! | `decode_token_account` | 165 | [`TokenAccount`] |
//! | `decode_mint` | 82 | [`Mint`] |
//! | `decode_multisig` | 355 | [`Multisig`] |
//! | `decode_owned_token_account` | 165 + owner check | [`TokenAccount`] |
//! | `decode_owned_mint` | 82 + owner check | [`Mint`] |
//! | `decode_owned_multisig` | 355 + owner check | [`Multisig`] |
//!
//! Sizes are exact. Owner-checked variants reject anything not owned by
//! [`programs::TOKEN`] before looking at the length.
//!
//! # Optional fields
//!
//! SPL Token stores optionals as `COption`: a `u32` tag and a payload slot
//! that is always present. [`SliceCursor::read_tagged`] reads the tag,
//! consumes the slot, and keeps the payload only for a nonzero tag.
//!
//! # Errors
//!
//! Every decoder returns [`StateError`]. It converts into
//! [`ProgramError`] so on-chain code can use `?` directly.

pub mod programs;

mod checks;
mod cursor;
mod error;
mod mint;
mod multisig;
pub mod prelude;
mod token;

pub use checks::*;
pub use cursor::{SliceCursor, OPTION_TAG_LEN};
pub use error::StateError;
pub use mint::*;
pub use multisig::*;
pub use token::*;

// Re-export pinocchio core types so users only need one import.
pub use pinocchio::{error::ProgramError, Address};

// ── Macros ───────────────────────────────────────────────────────────────────

/// Require a boolean condition: return `$err` (converted via `Into`) if false.
///
/// ```rust,ignore
/// require!(data.len() == MINT_LEN, StateError::InvalidAccountSize);
/// ```
#[macro_export]
macro_rules! require {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}

/// Require two [`Address`] values to be equal.
///
/// ```rust,ignore
/// require_keys_eq!(owner, &programs::TOKEN, StateError::InvalidAccountOwner);
/// ```
#[macro_export]
macro_rules! require_keys_eq {
    ($a:expr, $b:expr, $err:expr) => {
        if *$a != *$b {
            return Err($err.into());
        }
    };
}
