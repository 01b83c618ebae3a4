//! Structural patterns.

pub mod adapter;
