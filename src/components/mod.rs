pub mod alert_editor;
pub mod alert_panel;
pub mod city_header;
pub mod city_selector;
pub mod current_conditions;
pub mod forecast_table;
pub mod weather_body;
pub mod weather_display;
pub mod weather_summary;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use alert_editor::{AlertEditorOverlay, AlertEditorProps};
pub use alert_panel::{AlertPanel, AlertPanelProps};
pub use city_header::{CityHeader, CityHeaderProps};
pub use city_selector::{CitySelector, CitySelectorProps};
pub use current_conditions::{CurrentConditions, CurrentConditionsProps};
pub use forecast_table::{ForecastTable, ForecastTableProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_display::{ERROR_ICON, WeatherDisplay, WeatherDisplayProps};
pub use weather_summary::{WeatherSummary, WeatherSummaryProps};
