//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::Config;
use crate::logging::LogLevel;
use crate::output::OutputFormat;
use crate::path::PathKind;
use proptest::prelude::*;

fn base_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{1,8}", prop::option::of("[a-z]{1,8}"))
        .prop_map(|(t, e)| match e {
            Some(e) => format!("/t;{t}/e;{e}"),
            None => format!("/t;{t}"),
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(base_strategy()),
        prop::option::of(prop_oneof![
            Just(OutputFormat::Text),
            Just(OutputFormat::Json),
            Just(OutputFormat::Yaml)
        ]),
        prop::option::of(prop_oneof![
            Just(LogLevel::Quiet),
            Just(LogLevel::Normal),
            Just(LogLevel::Verbose)
        ]),
        prop::option::of(prop_oneof![Just(PathKind::Canonical), Just(PathKind::Relative)]),
    )
        .prop_map(|(base, output_format, log_mode, kind)| Config {
            base,
            output_format,
            log_mode,
            kind,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Merging an empty config changes nothing
    #[test]
    fn merge_empty_is_right_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Merging into an empty config copies the source
    #[test]
    fn merge_into_empty_copies(config in config_strategy()) {
        let mut result = Config::default();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // Every Some field of the higher source wins, every None keeps the lower
    #[test]
    fn higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);
        prop_assert_eq!(result.base, high.base.or(low.base));
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(result.log_mode, high.log_mode.or(low.log_mode));
        prop_assert_eq!(result.kind, high.kind.or(low.kind));
    }

    // Merging is idempotent
    #[test]
    fn merge_idempotent(low in config_strategy(), high in config_strategy()) {
        let mut once = low;
        ConfigMerger::merge_into(&mut once, &high);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &high);
        prop_assert_eq!(once, twice);
    }

    // YAML round trip preserves every field
    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(back, config);
    }
}
