#![no_main]
use libfuzzer_sys::fuzz_target;

use entroscan::EntropyAccumulator;

// Splits the payload at positions derived from its own bytes and checks that
// the fragmented stream matches a single-pass run bit for bit.
fuzz_target!(|data: &[u8]| {
    let (seed, payload) = match data.split_first() {
        Some((b, rest)) => (*b as usize, rest),
        None => return,
    };

    let mut whole = EntropyAccumulator::new(payload.len() as u64, 800);
    whole.ingest(payload);

    let mut fragmented = EntropyAccumulator::new(payload.len() as u64, 800);
    let step = seed.max(1);
    for fragment in payload.chunks(step) {
        fragmented.ingest(fragment);
    }

    assert_eq!(
        whole.finalize().unwrap(),
        fragmented.finalize().unwrap()
    );
    assert_eq!(whole.blocks(), fragmented.blocks());
});
