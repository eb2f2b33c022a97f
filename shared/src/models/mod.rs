//! Domain models for the Gatsibo Smart Irrigation Platform

mod advisory;
mod forecast;
mod schedule;
mod site;

pub use advisory::*;
pub use forecast::*;
pub use schedule::*;
pub use site::*;
