#![no_main]

use libfuzzer_sys::fuzz_target;
use token_state::{SliceCursor, OPTION_TAG_LEN};

// A tagged read always consumes tag + payload, and the tag alone decides
// presence.
fuzz_target!(|data: &[u8]| {
    let mut cur = SliceCursor::new(data);
    match cur.read_option_u64() {
        Ok(value) => {
            assert_eq!(cur.position(), OPTION_TAG_LEN + 8);
            let tag = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
            assert_eq!(value.is_some(), tag != 0);
        }
        Err(_) => assert!(data.len() < OPTION_TAG_LEN + 8),
    }
});
