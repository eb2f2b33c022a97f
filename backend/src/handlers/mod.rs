//! HTTP handlers for the Gatsibo Smart Irrigation Platform

mod about;
mod advisory;
mod dashboard;
mod forecast;
mod health;
mod history;

pub use about::*;
pub use advisory::*;
pub use dashboard::*;
pub use forecast::*;
pub use health::*;
pub use history::*;
