//! Business logic services for the Gatsibo Smart Irrigation Platform

pub mod dashboard;
pub mod dataset;
pub mod forecast;
pub mod history;

pub use dashboard::DashboardService;
pub use dataset::Dataset;
pub use forecast::ForecastService;
pub use history::HistoryService;
