//! Utility modules for DevShowcase
//!
//! Configuration, logging, error types and time formatting shared by the
//! desktop app and the core effects.

pub mod config;
pub mod debug;
pub mod error;
pub mod logger;
pub mod time;
