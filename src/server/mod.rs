//! Server application core modules.
//!
//! Everything behind the huddle HTTP API: configuration, the identity gate, database
//! repositories, services implementing events, RSVP admission and comments, and the axum
//! controllers and router that expose them.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
