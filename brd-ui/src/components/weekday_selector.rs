//! Dropdown selector for choosing the weekday.

use crate::state::AppState;
use brd_core::input::WEEKDAY_LABELS;
use dioxus::prelude::*;

/// Weekday dropdown. Reads the current code from AppState and updates it
/// on change.
#[component]
pub fn WeekdaySelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.weekday)();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(code) = evt.value().parse::<u8>() {
            state.weekday.set(code);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "weekday-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Weekday: "
            }
            select {
                id: "weekday-select",
                onchange: on_change,
                for (code, name) in WEEKDAY_LABELS.iter().enumerate() {
                    option {
                        value: "{code}",
                        selected: code as u8 == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
