//! Reusable Dioxus RSX components for the demand dashboard.

mod advisory_list;
mod app_header;
mod calendar_toggles;
mod chart_container;
mod error_display;
mod feature_sliders;
mod inputs_table;
mod loading_spinner;
mod model_card;
mod prediction_card;
mod weather_selector;
mod weekday_selector;

pub use advisory_list::AdvisoryList;
pub use app_header::AppHeader;
pub use calendar_toggles::CalendarToggles;
pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use feature_sliders::{FeatureSliders, SliderRow};
pub use inputs_table::InputsTable;
pub use loading_spinner::LoadingSpinner;
pub use model_card::ModelCard;
pub use prediction_card::PredictionCard;
pub use weather_selector::WeatherSelector;
pub use weekday_selector::WeekdaySelector;
