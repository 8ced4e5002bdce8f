//! Page header with title and tagline.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AppHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Banner across the top of the dashboard.
#[component]
pub fn AppHeader(props: AppHeaderProps) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; padding: 12px 16px; margin-bottom: 12px; background: linear-gradient(90deg, #0b3d91, #205081); border-radius: 8px; color: #fff;",
            div {
                style: "width: 40px; height: 40px; border-radius: 8px; background: #fff; color: #0b3d91; display: flex; align-items: center; justify-content: center; font-weight: 800;",
                "🚲"
            }
            div {
                div {
                    style: "font-weight: 700; font-size: 18px;",
                    "{props.title}"
                }
                if !props.subtitle.is_empty() {
                    div {
                        style: "font-size: 12px; color: #c9d6ea;",
                        "{props.subtitle}"
                    }
                }
            }
        }
    }
}
