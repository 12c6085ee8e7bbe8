use pinocchio::Address;
use pinocchio_pubkey::pubkey;

/// The system program. Owner of every plain wallet account.
pub const SYSTEM: Address = Address::new_from_array([0u8; 32]);

/// SPL Token (original) program.
///
/// The only owner accepted by the owner-validated decoders. Token accounts,
/// mints and multisigs it owns all use the fixed layouts in this crate.
pub const TOKEN: Address =
    Address::new_from_array(pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"));

/// SPL Token-2022 (Token Extensions) program.
///
/// Its base layouts match SPL Token but accounts may carry trailing
/// extension data, so they are not exact-size and are rejected here.
pub const TOKEN_2022: Address =
    Address::new_from_array(pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb"));

/// Native mint (wrapped SOL).
///
/// Token accounts for this mint carry `is_native = Some(rent_exempt_reserve)`.
pub const NATIVE_MINT: Address =
    Address::new_from_array(pubkey!("So11111111111111111111111111111111111111112"));
