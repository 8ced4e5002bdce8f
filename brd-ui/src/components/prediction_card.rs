//! The headline prediction: count, demand level, symbol.

use brd_core::demand::DemandLevel;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PredictionCardProps {
    /// Predicted rental count (already rounded and clamped)
    pub count: u32,
}

/// Large numeric forecast with its demand level styled in the level color.
#[component]
pub fn PredictionCard(props: PredictionCardProps) -> Element {
    let level = DemandLevel::classify(props.count);
    let symbol = level.symbol();
    let label = level.label();
    let color = level.color();

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "font-size: 34px; font-weight: 800;",
                "{symbol} {props.count} bikes"
            }
            div {
                style: "font-size: 13px; color: #666;",
                "Level: "
                strong {
                    style: "color: {color};",
                    "{label}"
                }
            }
        }
    }
}
