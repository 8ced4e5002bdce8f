//! Radio groups for season, holiday, and working day.

use crate::state::AppState;
use brd_core::input::SEASON_LABELS;
use dioxus::prelude::*;

/// Season radio group plus the two yes/no calendar flags.
#[component]
pub fn CalendarToggles() -> Element {
    let mut state = use_context::<AppState>();
    let season = (state.season)();
    let holiday = (state.holiday)();
    let working_day = (state.working_day)();
    let seasons: Vec<(u8, &str)> = SEASON_LABELS
        .iter()
        .enumerate()
        .map(|(index, name)| (index as u8 + 1, *name))
        .collect();

    rsx! {
        div {
            div {
                style: "margin: 8px 0;",
                span {
                    style: "font-weight: bold; margin-right: 8px;",
                    "Season: "
                }
                for (code, name) in seasons {
                    label {
                        style: "margin-right: 10px; font-size: 13px;",
                        input {
                            r#type: "radio",
                            name: "season",
                            checked: season == code,
                            onchange: move |_| state.season.set(code),
                        }
                        " {name}"
                    }
                }
            }

            YesNoRow {
                label: "Holiday?".to_string(),
                group: "holiday".to_string(),
                value: holiday,
                on_change: move |v: bool| state.holiday.set(v),
            }

            YesNoRow {
                label: "Working day?".to_string(),
                group: "working-day".to_string(),
                value: working_day,
                on_change: move |v: bool| state.working_day.set(v),
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct YesNoRowProps {
    label: String,
    /// Radio group name, must be unique per row
    group: String,
    value: bool,
    on_change: EventHandler<bool>,
}

#[component]
fn YesNoRow(props: YesNoRowProps) -> Element {
    // EventHandler is Copy; pull it out so the closures don't capture props
    let on_change = props.on_change;

    rsx! {
        div {
            style: "margin: 8px 0;",
            span {
                style: "font-weight: bold; margin-right: 8px;",
                "{props.label} "
            }
            label {
                style: "margin-right: 10px; font-size: 13px;",
                input {
                    r#type: "radio",
                    name: "{props.group}",
                    checked: props.value,
                    onchange: move |_| on_change.call(true),
                }
                " Yes"
            }
            label {
                style: "font-size: 13px;",
                input {
                    r#type: "radio",
                    name: "{props.group}",
                    checked: !props.value,
                    onchange: move |_| on_change.call(false),
                }
                " No"
            }
        }
    }
}
