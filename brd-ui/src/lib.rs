//! Shared Dioxus components and D3.js bridge for the demand dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3 demand bar via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (controls, cards, containers)

pub mod components;
pub mod js_bridge;
pub mod state;
