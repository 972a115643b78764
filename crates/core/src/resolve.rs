use crate::config::{BoolOption, ConfigSlot, EnumConfig, StringOption};
use strum::IntoEnumIterator;
use tracing::trace;

/// Merges a per-type configuration over the global defaults.
///
/// Slot by slot: a set `local` value wins, then a set `global` value, otherwise the slot stays
/// unset and the planner falls back to its built-in default. Neither input is modified.
///
/// An enabled `case_insensitive` always forces `lowercase_lookup` on in the result, whichever
/// layer set either slot.
#[must_use]
pub fn resolve(global: &EnumConfig, local: &EnumConfig) -> EnumConfig {
    let mut resolved = EnumConfig::default();

    for option in BoolOption::iter() {
        *resolved.bool_slot_mut(option) = local.bool_slot(option).or(*global.bool_slot(option));
    }
    for option in StringOption::iter() {
        *resolved.string_slot_mut(option) =
            local.string_slot(option).clone().or(global.string_slot(option).clone());
    }
    if resolved.enabled(BoolOption::CaseInsensitive) {
        resolved.lowercase_lookup = ConfigSlot::new(true);
    }

    trace!(overrides = local.set_count(), inherited = global.set_count(), "Resolved configuration");
    resolved
}
