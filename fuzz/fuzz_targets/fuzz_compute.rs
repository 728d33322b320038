#![no_main]

use libfuzzer_sys::fuzz_target;

use cgpa_core::aggregator::compute;
use cgpa_core::constants::MAX_CGPA;
use cgpa_core::entry::CandidateEntry;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // One course per line, fields separated by '|'
    let entries: Vec<CandidateEntry> = text
        .lines()
        .take(64)
        .map(|line| {
            let mut fields = line.splitn(3, '|');
            CandidateEntry::new(
                fields.next().unwrap_or(""),
                fields.next().unwrap_or(""),
                fields.next().unwrap_or(""),
            )
        })
        .collect();

    let first = compute(&entries);
    assert_eq!(first, compute(&entries), "compute is not deterministic");

    if let Ok(result) = first {
        assert!(result.total_credits > 0.0);
        // Totals may overflow to infinity; the cgpa may not.
        assert!(result.cgpa >= 0.0 && result.cgpa <= MAX_CGPA + 1e-9);
    }
});
