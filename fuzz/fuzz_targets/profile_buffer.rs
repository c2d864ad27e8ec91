#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the block budget so small budgets get exercised too.
    let (budget, payload) = match data.split_first() {
        Some((b, rest)) => (*b as usize, rest),
        None => return,
    };

    let report = entroscan::EntropyReport::from_buffer(payload, budget).unwrap();
    assert!(report.overall >= 0.0 && report.overall <= 8.0);
    for value in &report.blocks {
        assert!(*value >= 0.0 && *value <= 8.0);
    }

    let _ = entroscan::profile_by_count(payload, budget);
});
