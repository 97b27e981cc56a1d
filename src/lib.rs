//! Highlight Saver: save text selections from any web page together with
//! their source URL, page title and date, and browse or delete them later.
//!
//! This library crate exposes all modules for use by hosts and integration tests.

pub mod app;
pub mod database;
pub mod host;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
