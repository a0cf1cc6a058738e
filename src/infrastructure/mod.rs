//! Infrastructure concerns that sit outside the domain: configuration.

pub mod config;
