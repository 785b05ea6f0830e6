//! Identity token fixtures.

pub mod factory;
