//! Core postdeck library (data model, HTTP client, config, logging).

pub mod api;
pub mod card;
pub mod config;
pub mod logging;
pub mod markup;
pub mod models;
