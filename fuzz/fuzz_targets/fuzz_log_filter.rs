#![no_main]

use libfuzzer_sys::fuzz_target;

use doxycheck::{ExclusionPatterns, LogFilter};

fuzz_target!(|data: &[u8]| {
    let log = String::from_utf8_lossy(data);
    let exclusions = ExclusionPatterns::builtin();
    let kept = LogFilter::for_input(&exclusions).apply(log.lines());
    for line in kept {
        assert!(!exclusions.is_excluded(line.as_str()));
    }
});
