//! Core library for the `forecast` dashboard.
//!
//! This crate defines:
//! - Configuration handling
//! - The Visual Crossing timeline client
//! - Display formatting and the page model of day cards
//! - The controller that turns search and unit-toggle triggers into fetch cycles
//!
//! It is used by `forecast-cli`, but any front end can drive a [`Controller`]
//! and draw its [`Page`].

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod render;

pub use config::Config;
pub use controller::{Applied, Controller, Cycle, CycleOutcome};
pub use error::ForecastError;
pub use model::{DayRecord, ForecastQuery, ForecastResponse, UnitSystem};
pub use provider::{ForecastProvider, provider_from_config, visualcrossing::VisualCrossingClient};
pub use render::{CardSection, DayCard, Page, render};
