//! Hourly Bike Rental Demand dashboard
//!
//! Single-page app around one prediction call:
//! 1. `build.rs` copies the trained model artifact into `OUT_DIR`.
//! 2. `include_str!` embeds the artifact JSON into the WASM binary.
//! 3. On mount: parse the artifact once and hold it in app state.
//! 4. On any control change: rebuild the input, predict, classify, and
//!    re-render the D3 demand bar plus the advisory list.

use brd_ui::components::{
    AdvisoryList, AppHeader, CalendarToggles, ChartContainer, ErrorDisplay, FeatureSliders,
    InputsTable, LoadingSpinner, ModelCard, PredictionCard, WeatherSelector, WeekdaySelector,
};
use brd_ui::js_bridge;
use brd_ui::state::AppState;
use brd_model::ModelArtifact;
use dioxus::prelude::*;

// Embed the model artifact (prepared by build.rs) at compile time.
const MODEL_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/bike_model.json"));

/// DOM id for the D3 demand bar container div.
const CHART_CONTAINER_ID: &str = "demand-bar-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("demand-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut predicted: Signal<Option<u32>> = use_signal(|| None);

    // ─── Effect 1: Parse the embedded model artifact once on mount ───
    use_effect(move || {
        match ModelArtifact::from_json(MODEL_JSON) {
            Ok(artifact) => state.model.set(Some(artifact)),
            Err(e) => state.error_msg.set(Some(format!("Model load failed: {e:#}"))),
        }
        state.loading.set(false);

        // Initialize the D3 chart script (one-time)
        js_bridge::init_charts();
    });

    // ─── Effect 2: Re-predict and re-render on any control change ───
    // `state.input()` reads every control signal, so this effect re-runs
    // whenever one of them changes.
    use_effect(move || {
        let loading = (state.loading)();
        let input = state.input();

        if loading {
            return;
        }
        let Some(artifact) = state.model.read().clone() else {
            return;
        };

        match artifact.predict_count(&input) {
            Ok(count) => {
                state.error_msg.set(None);
                predicted.set(Some(count.get()));

                let n = count.get();
                let level = count.level();
                let data_json = serde_json::json!({ "count": n }).to_string();
                let config_json = serde_json::json!({
                    "xMax": (n as f64 * 1.2).max(500.0),
                    "color": level.color(),
                    "xAxisLabel": "Bikes",
                })
                .to_string();
                js_bridge::render_demand_bar(CHART_CONTAINER_ID, &data_json, &config_json);
            }
            Err(e) => {
                log::error!("prediction failed: {e:#}");
                predicted.set(None);
                state.error_msg.set(Some(format!("Prediction failed: {e:#}")));
            }
        }
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            AppHeader {
                title: "Bike Rental Demand".to_string(),
                subtitle: "Hourly forecast demo".to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 16px; align-items: flex-start; flex-wrap: wrap;",

                    // Control panel
                    div {
                        style: "flex: 1 1 220px; min-width: 220px;",
                        h3 {
                            style: "margin: 4px 0; font-size: 15px;",
                            "Conditions"
                        }
                        FeatureSliders {}
                        WeekdaySelector {}
                        WeatherSelector {}
                        CalendarToggles {}
                    }

                    // Model and inputs summary
                    div {
                        style: "flex: 1 1 260px; min-width: 260px;",
                        h3 {
                            style: "margin: 4px 0; font-size: 15px;",
                            "Model"
                        }
                        ModelCard {}
                        h3 {
                            style: "margin: 12px 0 4px 0; font-size: 15px;",
                            "Inputs"
                        }
                        InputsTable {}
                    }

                    // Prediction, bar chart, insights
                    div {
                        style: "flex: 2 1 360px; min-width: 360px;",
                        h3 {
                            style: "margin: 4px 0; font-size: 15px;",
                            "Prediction"
                        }
                        if let Some(count) = predicted() {
                            PredictionCard { count }
                        }
                        ChartContainer {
                            id: CHART_CONTAINER_ID.to_string(),
                            loading: *state.loading.read(),
                        }
                        AdvisoryList {}
                    }
                }

                Footer {}
            }
        }
    }
}

/// About section below the dashboard body.
#[component]
fn Footer() -> Element {
    rsx! {
        div {
            style: "margin-top: 16px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
            h3 {
                style: "margin: 4px 0; font-size: 15px;",
                "About"
            }
            p {
                style: "font-size: 13px; color: #666; margin: 4px 0;",
                "Interactive demo of an hourly bike demand regression model."
            }
            p {
                style: "font-size: 11px; color: #888; margin: 4px 0;",
                "The model artifact ships with the app; predictions run entirely in the browser."
            }
        }
    }
}
