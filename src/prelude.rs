//! Convenience re-exports for the common usage pattern.
//!
//! ```rust,ignore
//! use token_state::prelude::*;
//! ```

// ── Decoders ─────────────────────────────────────────────────────────────────
pub use crate::mint::{decode_mint, decode_owned_mint, Mint, MINT_LEN};
pub use crate::multisig::{
    decode_multisig, decode_owned_multisig, Multisig, MAX_SIGNERS, MULTISIG_LEN,
};
pub use crate::token::{
    decode_owned_token_account, decode_token_account, AccountState, TokenAccount,
    TOKEN_ACCOUNT_LEN,
};

// ── Checks and errors ────────────────────────────────────────────────────────
pub use crate::checks::{check_owner_id, check_size};
pub use crate::error::StateError;

// ── Cursor ───────────────────────────────────────────────────────────────────
pub use crate::cursor::SliceCursor;

// ── Program ids ──────────────────────────────────────────────────────────────
pub use crate::programs;

// ── Macros (re-exported from crate root via #[macro_export]) ─────────────────
pub use crate::{require, require_keys_eq};

// ── Pinocchio core types ─────────────────────────────────────────────────────
pub use pinocchio::{error::ProgramError, Address};
