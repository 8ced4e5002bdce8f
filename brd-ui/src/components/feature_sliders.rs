//! Slider controls for the numeric features.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SliderRowProps {
    pub label: String,
    pub min: f64,
    pub max: f64,
    #[props(default = 1.0)]
    pub step: f64,
    pub value: f64,
    #[props(default = String::new())]
    pub unit: String,
    pub on_input: EventHandler<f64>,
}

/// A labeled range input reporting parsed values to the caller.
#[component]
pub fn SliderRow(props: SliderRowProps) -> Element {
    // EventHandler is Copy; pull it out so the closure doesn't capture props
    let on_input = props.on_input;

    rsx! {
        div {
            style: "margin: 6px 0;",
            label {
                style: "display: block; font-size: 13px; color: #444; margin-bottom: 2px;",
                "{props.label}: {props.value}{props.unit}"
            }
            input {
                r#type: "range",
                min: "{props.min}",
                max: "{props.max}",
                step: "{props.step}",
                value: "{props.value}",
                style: "width: 100%;",
                oninput: move |evt| match evt.value().parse::<f64>() {
                    Ok(v) => on_input.call(v),
                    Err(e) => log::warn!("slider value parse failed: {}", e),
                },
            }
        }
    }
}

/// The six slider-driven features, wired to AppState.
#[component]
pub fn FeatureSliders() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            SliderRow {
                label: "Month".to_string(),
                min: 1.0,
                max: 12.0,
                value: (state.month)() as f64,
                on_input: move |v: f64| state.month.set(v as u8),
            }
            SliderRow {
                label: "Hour".to_string(),
                min: 0.0,
                max: 23.0,
                value: (state.hour)() as f64,
                on_input: move |v: f64| state.hour.set(v as u8),
            }
            SliderRow {
                label: "Temp".to_string(),
                min: -10.0,
                max: 40.0,
                value: (state.temperature)(),
                unit: " °C".to_string(),
                on_input: move |v: f64| state.temperature.set(v),
            }
            SliderRow {
                label: "Feels Like".to_string(),
                min: -10.0,
                max: 50.0,
                value: (state.feels_like)(),
                unit: " °C".to_string(),
                on_input: move |v: f64| state.feels_like.set(v),
            }
            SliderRow {
                label: "Humidity".to_string(),
                min: 0.0,
                max: 100.0,
                value: (state.humidity)(),
                unit: " %".to_string(),
                on_input: move |v: f64| state.humidity.set(v),
            }
            SliderRow {
                label: "Windspeed".to_string(),
                min: 0.0,
                max: 100.0,
                value: (state.windspeed)(),
                unit: " km/h".to_string(),
                on_input: move |v: f64| state.windspeed.set(v),
            }
        }
    }
}
