//! Summary table of the current control values.

use crate::state::AppState;
use dioxus::prelude::*;

/// Table showing every feature value that will feed the prediction.
#[component]
pub fn InputsTable() -> Element {
    let state = use_context::<AppState>();
    let input = state.input();

    let rows: Vec<(&str, String)> = vec![
        ("Season", input.season_label().to_string()),
        ("Month", input.month.to_string()),
        ("Hour", input.hour.to_string()),
        ("Holiday", yes_no(input.holiday)),
        ("Day", input.weekday_label().to_string()),
        ("Working day", yes_no(input.working_day)),
        ("Weather", input.weather_label().to_string()),
        ("Temp (°C)", input.temperature.to_string()),
        ("Feels Like (°C)", input.feels_like_temperature.to_string()),
        ("Humidity (%)", input.humidity.to_string()),
        ("Windspeed (km/h)", input.windspeed.to_string()),
    ];

    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; font-size: 13px;",
            tbody {
                for (label, value) in rows {
                    tr {
                        td {
                            style: "padding: 3px 8px; color: #666; border-bottom: 1px solid #eee;",
                            "{label}"
                        }
                        td {
                            style: "padding: 3px 8px; text-align: right; border-bottom: 1px solid #eee;",
                            "{value}"
                        }
                    }
                }
            }
        }
    }
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}
