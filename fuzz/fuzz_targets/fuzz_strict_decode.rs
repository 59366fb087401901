#![no_main]

use libfuzzer_sys::fuzz_target;
use zlatlong::{decode, decode_strict, DecodeError};

fuzz_target!(|data: &[u8]| {
    match (decode(data), decode_strict(data)) {
        (Ok(lenient), Ok(strict)) => assert_eq!(lenient, strict),
        (Ok(lenient), Err(DecodeError::TruncatedInput { position })) => {
            // Lenient decoding drops exactly the unfinished group
            let prefix = decode(&data[..position]).expect("prefix decodes");
            assert_eq!(lenient, prefix);
        }
        (Err(a), Err(b)) => assert_eq!(a, b, "both must report the same invalid symbol"),
        (a, b) => panic!("lenient {a:?} vs strict {b:?}"),
    }
});
