//! Core library for SecureFace.
//!
//! Holds everything that is not tied to a particular front end: the domain
//! model, the view-state store, dispatch rules, the HTTP client for the
//! recognition service, configuration and logging setup.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod logging;
pub mod model;
pub mod store;
