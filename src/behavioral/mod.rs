//! Behavioral patterns.

pub mod responsibility;
