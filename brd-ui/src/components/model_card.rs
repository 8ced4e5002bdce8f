//! Card showing the loaded model's descriptor.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows which model artifact is loaded. Renders nothing until the
/// mount effect has parsed one.
#[component]
pub fn ModelCard() -> Element {
    let state = use_context::<AppState>();
    let info = state
        .model
        .read()
        .as_ref()
        .map(|artifact| (artifact.descriptor.to_string(), artifact.model.shape()));

    rsx! {
        if let Some((descriptor, shape)) = info {
            div {
                style: "padding: 10px 12px; margin: 8px 0; background: #E8F5E9; border: 1px solid #A5D6A7; border-radius: 4px;",
                div {
                    style: "font-weight: bold; color: #2E7D32;",
                    "Loaded: {descriptor}"
                }
                div {
                    style: "font-size: 12px; color: #666; margin-top: 2px;",
                    "{shape}"
                }
            }
        }
    }
}
