//! Parkway Infrastructure Layer
pub mod repositories;
