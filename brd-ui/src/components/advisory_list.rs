//! Quick-insight advisories derived from the raw inputs.

use crate::state::AppState;
use brd_core::advisory::Advisory;
use dioxus::prelude::*;

/// Lists every advisory that applies to the current inputs. The checks
/// are independent, so zero to four rows can appear at once.
#[component]
pub fn AdvisoryList() -> Element {
    let state = use_context::<AppState>();
    let advisories = Advisory::for_input(&state.input());

    rsx! {
        div {
            h3 {
                style: "margin: 8px 0 4px 0; font-size: 15px;",
                "Quick insights"
            }
            if advisories.is_empty() {
                p {
                    style: "font-size: 13px; color: #888; margin: 4px 0;",
                    "No advisories for these conditions."
                }
            }
            for advisory in advisories {
                AdvisoryRow { advisory }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct AdvisoryRowProps {
    advisory: Advisory,
}

#[component]
fn AdvisoryRow(props: AdvisoryRowProps) -> Element {
    // Adverse weather is a warning; the rest are informational.
    let style = match props.advisory {
        Advisory::AdverseWeather => {
            "padding: 8px 12px; margin: 4px 0; background: #FFF3E0; color: #E65100; border-radius: 4px; font-size: 13px;"
        }
        _ => {
            "padding: 8px 12px; margin: 4px 0; background: #E3F2FD; color: #1565C0; border-radius: 4px; font-size: 13px;"
        }
    };
    let message = props.advisory.message();

    rsx! {
        div {
            style: "{style}",
            "{message}"
        }
    }
}
