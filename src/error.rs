use core::fmt;

use pinocchio::error::ProgramError;

/// Why a buffer could not be decoded into token program state.
///
/// Every decoder returns exactly one of these and never a partially
/// populated record. None of them are transient: the same bytes and owner
/// will always fail the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// Buffer length is not the exact size of the requested account kind.
    InvalidAccountSize,
    /// Account is not owned by the SPL Token program.
    InvalidAccountOwner,
    /// Multisig declares more signers than its fixed layout has slots for.
    InvalidSignerCount,
}

impl StateError {
    /// Short, static description. Also used for on-chain logging.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StateError::InvalidAccountSize => "invalid account data size",
            StateError::InvalidAccountOwner => "invalid account owner",
            StateError::InvalidSignerCount => "invalid multisig signer count",
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lets on-chain callers use `?` on a decode inside a `ProgramResult` fn.
impl From<StateError> for ProgramError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::InvalidAccountSize | StateError::InvalidSignerCount => {
                ProgramError::InvalidAccountData
            }
            StateError::InvalidAccountOwner => ProgramError::InvalidAccountOwner,
        }
    }
}

/// Emit a program log line for a rejected owner-validated decode.
#[cfg(feature = "log")]
#[inline(always)]
pub(crate) fn log_rejection(err: StateError, len: usize) {
    pinocchio_log::log!("token-state: {} (len {})", err.as_str(), len);
}

#[cfg(not(feature = "log"))]
#[inline(always)]
pub(crate) fn log_rejection(_err: StateError, _len: usize) {}
