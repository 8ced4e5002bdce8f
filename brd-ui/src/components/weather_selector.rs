//! Dropdown selector for the weather situation.

use crate::state::AppState;
use brd_core::input::WEATHER_LABELS;
use dioxus::prelude::*;

/// Weather situation dropdown (codes 1-4 with display names).
#[component]
pub fn WeatherSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.weather_situation)();
    let options: Vec<(u8, &str)> = WEATHER_LABELS
        .iter()
        .enumerate()
        .map(|(index, name)| (index as u8 + 1, *name))
        .collect();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(code) = evt.value().parse::<u8>() {
            state.weather_situation.set(code);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "weather-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Weather: "
            }
            select {
                id: "weather-select",
                onchange: on_change,
                for (code, name) in options {
                    option {
                        value: "{code}",
                        selected: code == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
