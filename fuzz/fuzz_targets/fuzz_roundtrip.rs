#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let block = zappy::encode(Vec::new(), data);
    assert!(block.len() <= zappy::max_encoded_len(data.len()));

    let decoded = zappy::decode(Vec::new(), &block).expect("own output must decode");
    assert_eq!(decoded, data);
});
