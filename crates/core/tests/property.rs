use enumgen_core::{BoolOption, ConfigSlot, EnumConfig, EnumRepr, EnumSpec, generate, parse_annotation, resolve};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn bool_option() -> impl Strategy<Value = BoolOption> {
    prop::sample::select(BoolOption::iter().collect::<Vec<_>>())
}

fn slots() -> impl Strategy<Value = Vec<Option<bool>>> {
    prop::collection::vec(prop::option::of(any::<bool>()), BoolOption::iter().count())
}

fn config_from(slots: &[Option<bool>]) -> EnumConfig {
    let mut config = EnumConfig::default();
    for (option, slot) in BoolOption::iter().zip(slots) {
        *config.bool_slot_mut(option) = slot.map_or_else(ConfigSlot::unset, ConfigSlot::new);
    }
    config
}

fn directive(option: BoolOption, value: Option<bool>) -> String {
    match value {
        None => format!("@{}", option.key()),
        Some(value) => format!("@{}:{value}", option.key()),
    }
}

proptest! {
    #[test]
    fn applying_a_directive_twice_equals_once(option in bool_option(), value in prop::option::of(any::<bool>())) {
        let raw = directive(option, value);

        let mut once = EnumConfig::default();
        parse_annotation(&raw, &mut once).unwrap();

        let mut twice = once.clone();
        parse_annotation(&raw, &mut twice).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn last_directive_for_a_key_wins(
        option in bool_option().prop_filter("nocase writes a second slot", |&o| o != BoolOption::CaseInsensitive),
        values in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let mut config = EnumConfig::default();
        for value in &values {
            parse_annotation(&directive(option, Some(*value)), &mut config).unwrap();
        }

        prop_assert_eq!(config.bool_slot(option).get().copied(), values.last().copied());
        prop_assert_eq!(config.set_count(), 1);
    }

    #[test]
    fn local_then_global_then_default(local in slots(), global in slots()) {
        let resolved = resolve(&config_from(&global), &config_from(&local));

        let nocase = BoolOption::iter().position(|o| o == BoolOption::CaseInsensitive).unwrap();
        let forced_lower = local[nocase].or(global[nocase]) == Some(true);

        for (index, option) in BoolOption::iter().enumerate() {
            let expected = if forced_lower && option == BoolOption::LowercaseLookup {
                Some(true)
            } else {
                local[index].or(global[index])
            };
            prop_assert_eq!(resolved.bool_slot(option).get().copied(), expected);
            prop_assert_eq!(resolved.enabled(option), expected.unwrap_or(false));
        }
    }

    #[test]
    fn every_literal_parses_back(
        literals in prop::collection::hash_set("[a-z][a-z0-9_]{0,8}[a-z0-9]", 1..12),
        case_insensitive in any::<bool>(),
    ) {
        let values: Vec<String> = literals.into_iter().collect();
        let annotations = if case_insensitive { vec!["@nocase"] } else { vec![] };
        let spec = EnumSpec::new("Prop", EnumRepr::Integer, values.clone()).with_annotations(annotations);

        // Underscore placement can make two literals camel-case to the same identifier.
        let Ok(plan) = generate(&spec, &EnumConfig::default()) else {
            return Ok(());
        };

        for (ordinal, literal) in values.iter().enumerate() {
            prop_assert_eq!(plan.stringify(ordinal), Some(literal.as_str()));
            prop_assert_eq!(plan.parse(literal).unwrap().ordinal, ordinal);
            if case_insensitive {
                prop_assert!(plan.is_valid(&literal.to_uppercase()));
            }
        }
    }
}
