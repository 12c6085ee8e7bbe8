#![no_main]

use libfuzzer_sys::fuzz_target;
use token_state::prelude::*;

// Every decoder must return, never panic, and honor its exact size.
fuzz_target!(|data: &[u8]| {
    match decode_token_account(data) {
        Ok(acct) => {
            assert_eq!(data.len(), TOKEN_ACCOUNT_LEN);
            assert_eq!(acct.state().raw(), data[108]);
        }
        Err(err) => assert_eq!(err, StateError::InvalidAccountSize),
    }

    match decode_mint(data) {
        Ok(mint) => {
            assert_eq!(data.len(), MINT_LEN);
            assert_eq!(mint.decimals(), data[44]);
        }
        Err(err) => assert_eq!(err, StateError::InvalidAccountSize),
    }

    match decode_multisig(data) {
        Ok(ms) => {
            assert_eq!(data.len(), MULTISIG_LEN);
            assert_eq!(ms.signers().len(), data[1] as usize);
        }
        Err(StateError::InvalidSignerCount) => assert!(data[1] as usize > MAX_SIGNERS),
        Err(err) => assert_eq!(err, StateError::InvalidAccountSize),
    }

    // The system program never owns token state, whatever the bytes.
    assert_eq!(
        decode_owned_token_account(data, &programs::SYSTEM).err(),
        Some(StateError::InvalidAccountOwner)
    );
});
