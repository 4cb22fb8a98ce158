//! Location picker

use crate::location::{use_location, LocationHandle};
use crate::types::Location;
use dioxus::prelude::*;

const SELECT_ID: &str = "location-select";

/// Apply a raw `select` value to the store. Values it rejects are logged and dropped.
pub fn apply_selection(location: &mut LocationHandle, value: &str) {
    if let Err(e) = location.set_from_value(value) {
        tracing::warn!("Ignoring location selection: {}", e);
    }
}

/// Single-choice location picker bound to the provided location store.
///
/// Only `options` are offered; the store still accepts every [`Location`].
#[component]
pub fn LocationSelector(
    #[props(default = vec![Location::Rajampeta])] options: Vec<Location>,
) -> Element {
    let mut location = use_location();
    let current = location.location();
    let value = current.map(|l| l.as_str()).unwrap_or_default();

    rsx! {
        div {
            class: "flex items-center gap-2",

            label {
                r#for: SELECT_ID,
                class: "text-[10px] uppercase tracking-wider text-[var(--text-tertiary)] font-bold select-none",
                "Location"
            }
            select {
                id: SELECT_ID,
                aria_label: "Select location",
                class: "appearance-none bg-[var(--bg-input)] border border-[var(--border-subtle)] text-[var(--text-primary)] text-sm rounded-lg py-2 pl-3 pr-8 focus:outline-none focus:border-[var(--accent-primary)] cursor-pointer",
                value: "{value}",
                onchange: move |evt: FormEvent| apply_selection(&mut location, &evt.value()),

                option {
                    value: "",
                    disabled: true,
                    selected: current.is_none(),
                    "Select location"
                }
                for option_location in options {
                    option {
                        key: "{option_location}",
                        value: option_location.as_str(),
                        selected: current == Some(option_location),
                        "{option_location}"
                    }
                }
            }
        }
    }
}
