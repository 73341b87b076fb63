//! Property tests for Doxyfile composition.

use proptest::prelude::*;

use doxycheck::domain::services::compose_config;
use doxycheck::Overrides;

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Z_]{0,15}").unwrap()
}

fn value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9/._ -]{0,24}").unwrap()
}

fn user_config() -> impl Strategy<Value = String> {
    proptest::collection::vec("[A-Z_]{1,12} = [A-Za-z0-9 ]{0,12}", 0..6)
        .prop_map(|lines| lines.iter().map(|l| format!("{l}\n")).collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every override appears as its own `KEY=VALUE` line after the
    /// user content.
    #[test]
    fn property_overrides_follow_user_content(
        user in user_config(),
        pairs in proptest::collection::vec((key(), value()), 0..8)
    ) {
        let overrides: Overrides = pairs.iter().cloned().collect();
        let config = compose_config(&user, &overrides);

        prop_assert!(config.starts_with(&user));
        let tail: Vec<&str> = config[user.len()..].split('\n').collect();
        for (k, v) in overrides.iter() {
            let line = format!("{k}={v}");
            prop_assert!(tail.contains(&line.as_str()), "missing line {:?}", line);
        }
    }

    /// PROPERTY: with no user content the composed text is exactly the overrides.
    #[test]
    fn property_empty_user_config_is_overrides_only(
        pairs in proptest::collection::vec((key(), value()), 0..8)
    ) {
        let overrides: Overrides = pairs.iter().cloned().collect();
        let config = compose_config("", &overrides);

        let expected = overrides
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(config, expected);
    }

    /// PROPERTY: for a repeated key the last value wins and the key appears once.
    #[test]
    fn property_repeated_key_keeps_last_value(
        k in key(),
        first in value(),
        second in value()
    ) {
        let overrides: Overrides = vec![(k.clone(), first), (k.clone(), second.clone())]
            .into_iter()
            .collect();

        prop_assert_eq!(overrides.len(), 1);
        prop_assert_eq!(overrides.get(&k), Some(second.as_str()));
    }
}
