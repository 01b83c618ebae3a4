//! Creational patterns.

pub mod factory;
