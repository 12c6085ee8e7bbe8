//! SPL Token multisig state.
//!
//! Layout (SPL Token multisig, 355 bytes):
//! ```text
//!   0..1    m               (u8, signatures required)
//!   1..2    n               (u8, valid signers)
//!   2..3    is_initialized  (u8, nonzero = true)
//!   3..355  signers         (11 x Address, slots past n are padding)
//! ```

use core::fmt;

use pinocchio::Address;

use crate::checks::{check_owner_id, check_size};
use crate::cursor::SliceCursor;
use crate::error::{log_rejection, StateError};
use crate::{programs, require};

/// Signer slots in every multisig account, used or not.
pub const MAX_SIGNERS: usize = 11;

/// Bytes before the first signer slot.
pub const MULTISIG_HEADER_LEN: usize = 3;

/// Exact size of an SPL Token multisig account.
pub const MULTISIG_LEN: usize = MULTISIG_HEADER_LEN + MAX_SIGNERS * 32;

/// Decoded M-of-N multisig.
///
/// All eleven slots are copied inline so decoding never allocates, but only
/// the first `n` are reachable through [`Multisig::signers`].
#[derive(Clone)]
pub struct Multisig {
    m: u8,
    n: u8,
    is_initialized: bool,
    slots: [Address; MAX_SIGNERS],
}

impl Multisig {
    /// Decode from raw account data. Same as [`decode_multisig`].
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Result<Self, StateError> {
        decode_multisig(data)
    }

    /// Signatures required (M).
    #[inline(always)]
    pub fn m(&self) -> u8 {
        self.m
    }

    /// Valid signers (N). Always equal to `signers().len()`.
    #[inline(always)]
    pub fn n(&self) -> u8 {
        self.n
    }

    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// The first `n` signer keys, in on-chain order.
    #[inline(always)]
    pub fn signers(&self) -> &[Address] {
        &self.slots[..self.n as usize]
    }

    /// Whether `key` is one of the first `n` signers.
    #[inline]
    pub fn is_signer(&self, key: &Address) -> bool {
        self.signers().iter().any(|s| s == key)
    }
}

// Padding slots past `n` don't take part in equality.
impl PartialEq for Multisig {
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m
            && self.is_initialized == other.is_initialized
            && self.signers() == other.signers()
    }
}

impl Eq for Multisig {}

struct Signers<'a>(&'a [Address]);

impl fmt::Debug for Signers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(Address::as_array))
            .finish()
    }
}

impl fmt::Debug for Multisig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multisig")
            .field("m", &self.m)
            .field("n", &self.n)
            .field("is_initialized", &self.is_initialized)
            .field("signers", &Signers(self.signers()))
            .finish()
    }
}

/// Decode a 355-byte SPL Token multisig.
///
/// Trusts the declared `n`: trailing slots are dropped without checking
/// that they are zero. An `n` above [`MAX_SIGNERS`] fails with
/// `InvalidSignerCount`.
pub fn decode_multisig(data: &[u8]) -> Result<Multisig, StateError> {
    check_size(data, MULTISIG_LEN)?;

    let mut cur = SliceCursor::new(data);
    let m = cur.read_u8()?;
    let n = cur.read_u8()?;
    let is_initialized = cur.read_bool()?;
    require!(n as usize <= MAX_SIGNERS, StateError::InvalidSignerCount);

    let mut slots = [programs::SYSTEM; MAX_SIGNERS];
    for slot in slots.iter_mut() {
        *slot = cur.read_address()?;
    }

    Ok(Multisig {
        m,
        n,
        is_initialized,
        slots,
    })
}

/// Decode a multisig after checking it is owned by the SPL Token program.
pub fn decode_owned_multisig(data: &[u8], owner: &Address) -> Result<Multisig, StateError> {
    check_owner_id(owner, &programs::TOKEN)
        .and_then(|()| decode_multisig(data))
        .inspect_err(|err| log_rejection(*err, data.len()))
}
