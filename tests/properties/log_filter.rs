//! Property tests for warning log filtering.

use proptest::prelude::*;

use doxycheck::{ExclusionPatterns, LogFilter};

fn warning_line() -> impl Strategy<Value = String> {
    (
        "[a-z]{1,8}\\.h",
        1u32..500,
        "[A-Za-z' ]{0,40}",
    )
        .prop_map(|(file, line, msg)| format!("{file}:{line}: warning: {msg}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: filtering never panics on arbitrary input.
    #[test]
    fn property_filter_never_panics(
        lines in proptest::collection::vec("(?s).{0,128}", 0..16)
    ) {
        let exclusions = ExclusionPatterns::builtin();
        let _ = LogFilter::for_input(&exclusions).apply(lines);
    }

    /// PROPERTY: undeclared-symbol warnings never survive, everything else
    /// survives in order.
    #[test]
    fn property_excluded_lines_are_dropped(
        plain in proptest::collection::vec(warning_line(), 0..10),
        symbol in "[A-Za-z_]{1,12}"
    ) {
        let noise = format!(
            "a.h:1: warning: documented symbol '{symbol}' was not declared or defined"
        );
        let mut lines = Vec::new();
        for line in &plain {
            lines.push(noise.clone());
            lines.push(line.clone());
        }

        let exclusions = ExclusionPatterns::builtin();
        let kept: Vec<String> = LogFilter::for_input(&exclusions)
            .apply(lines)
            .into_iter()
            .map(|l| l.into_string())
            .collect();

        let expected: Vec<String> = plain
            .into_iter()
            .filter(|l| !exclusions.is_excluded(l))
            .collect();
        prop_assert_eq!(kept, expected);
    }
}
