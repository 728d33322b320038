#![no_main]

use libfuzzer_sys::fuzz_target;

use cgpa_orchestration::sources::parse_course_spec;

fuzz_target!(|data: &[u8]| {
    let Ok(spec) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(entry) = parse_course_spec(spec) {
        // Name, grade and credits come back without surrounding whitespace
        assert_eq!(entry.name, entry.name.trim());
        assert_eq!(entry.grade, entry.grade.trim());
        assert_eq!(entry.credits, entry.credits.trim());
        assert!(!entry.grade.contains(','));
        assert!(!entry.credits.contains(','));
    }
});
